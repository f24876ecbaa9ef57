// src/export/csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::AttendanceRow;
use crate::ui::messages::info;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write `rows` as CSV to any writer: no header row, `\n` line endings.
pub fn write_rows<W: Write>(writer: W, rows: &[AttendanceRow]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render `rows` into an in-memory CSV string.
pub fn rows_to_csv(rows: &[AttendanceRow]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Create (or truncate) `path` and write `rows` into it.
pub fn export_csv(rows: &[AttendanceRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_rows(file, rows)?;

    notify_export_success("CSV", path);
    Ok(())
}
