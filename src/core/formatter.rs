use crate::config::Config;
use crate::core::grouper::DayGroups;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRow, DayAccumulator};
use crate::utils::date::weekend_label;
use chrono::Duration;

/// Regole fisse applicate a ogni riga: pausa pranzo e finestra 12:00–13:00.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPolicy {
    pub lunch_break: Duration,
    pub lunch_out: String,
    pub lunch_in: String,
}

impl Default for RowPolicy {
    fn default() -> Self {
        Self {
            lunch_break: Duration::minutes(90),
            lunch_out: "12:00".to_string(),
            lunch_in: "13:00".to_string(),
        }
    }
}

impl RowPolicy {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let lunch_break = Duration::try_minutes(cfg.lunch_break_minutes).ok_or_else(|| {
            AppError::Config(format!(
                "lunch_break_minutes out of range: {}",
                cfg.lunch_break_minutes
            ))
        })?;

        Ok(Self {
            lunch_break,
            lunch_out: cfg.lunch_out.clone(),
            lunch_in: cfg.lunch_in.clone(),
        })
    }
}

/// Turn one day into its CSV row.
pub fn format_day(day: &DayAccumulator, policy: &RowPolicy) -> AttendanceRow {
    let date = day.date_str();

    let first = match day.first_punch {
        Some(first) if day.is_complete() => first,
        _ => {
            if let Some(label) = weekend_label(day.weekday()) {
                return AttendanceRow {
                    date,
                    entry: label.to_string(),
                    lunch_out: label.to_string(),
                    lunch_in: label.to_string(),
                    exit: label.to_string(),
                };
            }
            return AttendanceRow {
                date,
                entry: String::new(),
                lunch_out: policy.lunch_out.clone(),
                lunch_in: policy.lunch_in.clone(),
                exit: String::new(),
            };
        }
    };

    // exit = entrata + pausa pranzo + ore lavorate; vuoto se fuori calendario
    let exit = first
        .checked_add_signed(policy.lunch_break)
        .and_then(|t| t.checked_add_signed(day.worked))
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default();

    AttendanceRow {
        date,
        entry: first.format("%H:%M").to_string(),
        lunch_out: policy.lunch_out.clone(),
        lunch_in: policy.lunch_in.clone(),
        exit,
    }
}

pub fn format_days(groups: &DayGroups, policy: &RowPolicy) -> Vec<AttendanceRow> {
    groups.iter().map(|d| format_day(d, policy)).collect()
}
