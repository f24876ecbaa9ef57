use crate::core::parser::PREFERENCES_MARKER;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Una pausa pranzo non può superare la giornata.
pub const MAX_LUNCH_BREAK_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output")]
    pub default_output: String,
    #[serde(default = "default_marker")]
    pub preferences_marker: String,
    #[serde(default = "default_lunch_break")]
    pub lunch_break_minutes: i64,
    #[serde(default = "default_lunch_out")]
    pub lunch_out: String,
    #[serde(default = "default_lunch_in")]
    pub lunch_in: String,
}

fn default_output() -> String {
    "agregado.csv".to_string()
}
fn default_marker() -> String {
    PREFERENCES_MARKER.to_string()
}
fn default_lunch_break() -> i64 {
    90
}
fn default_lunch_out() -> String {
    "12:00".to_string()
}
fn default_lunch_in() -> String {
    "13:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output: default_output(),
            preferences_marker: default_marker(),
            lunch_break_minutes: default_lunch_break(),
            lunch_out: default_lunch_out(),
            lunch_in: default_lunch_in(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rpontocsv`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rpontocsv")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpontocsv.conf")
    }

    /// Load the standard config file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file means defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

        if !(0..=MAX_LUNCH_BREAK_MINUTES).contains(&cfg.lunch_break_minutes) {
            return Err(AppError::Config(format!(
                "lunch_break_minutes must be between 0 and {MAX_LUNCH_BREAK_MINUTES} (got {})",
                cfg.lunch_break_minutes
            )));
        }

        Ok(cfg)
    }
}
