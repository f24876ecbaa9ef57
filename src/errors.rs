//! Unified application error type.
//! Every stage of the pipeline (parser, grouper, writer, cli) returns
//! AppError so failures surface the same way from `main`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input file
    // ---------------------------
    #[error("Malformed backup file: marker line '{0}' not found")]
    MissingMarker(String),

    // ---------------------------
    // Command line
    // ---------------------------
    #[error("Invalid month '{0}': expected MM/YYYY")]
    InvalidMonth(String),

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    // ---------------------------
    // Grouping
    // ---------------------------
    #[error("Punch on {0} has no matching day in the selected range")]
    MissingDayBucket(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
