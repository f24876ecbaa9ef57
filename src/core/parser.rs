//! Reading of the "Ponto Fácil" backup export.
//!
//! The file starts with a preferences block closed by a marker line; every
//! line after the marker is a punch whose first `;` field is the timestamp.

use crate::errors::{AppError, AppResult};
use crate::models::Punch;
use std::fs;
use std::path::Path;

/// Riga che chiude il blocco preferenze del backup.
pub const PREFERENCES_MARKER: &str = "###PREFERENCES_END";

/// Separatore dei campi di una riga di timbratura.
const FIELD_SEPARATOR: char = ';';

/// Read the whole backup file and return its punches sorted ascending.
pub fn read_punches(path: &Path, marker: &str) -> AppResult<Vec<Punch>> {
    let content = fs::read_to_string(path)?;
    parse_punches(&content, marker)
}

/// Extract the punches that follow `marker` in `text`.
///
/// Blank or malformed lines are dropped silently. A missing marker is an
/// error: the preferences block must never be read as punch data.
pub fn parse_punches(text: &str, marker: &str) -> AppResult<Vec<Punch>> {
    let mut lines = text.lines().map(str::trim);

    if !lines.any(|line| line == marker) {
        return Err(AppError::MissingMarker(marker.to_string()));
    }

    let mut punches: Vec<Punch> = lines.filter_map(parse_punch).collect();
    punches.sort();

    Ok(punches)
}

/// Parse the timestamp field of a single punch line.
pub fn parse_punch(line: &str) -> Option<Punch> {
    let candidate = line.split(FIELD_SEPARATOR).next().unwrap_or_default();
    Punch::parse(candidate)
}
