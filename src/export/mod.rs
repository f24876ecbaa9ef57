// src/export/mod.rs

pub mod csv;

pub use self::csv::{export_csv, rows_to_csv, write_rows};

use crate::ui::messages::success;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
