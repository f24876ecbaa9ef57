// src/core/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::Punch;
use chrono::NaiveDate;

/// Finestra di date inclusiva. Un bound assente significa "nessun limite".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<Self> {
        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(AppError::InvalidRange {
                start: s.format("%Y-%m-%d").to_string(),
                end: e.format("%Y-%m-%d").to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Build the window from `--start` / `--end` (`MM/YYYY`).
    ///
    /// The start month begins on day 1, the end month is stretched to its
    /// last calendar day.
    pub fn from_months(start: Option<&str>, end: Option<&str>) -> AppResult<Self> {
        let start = start.map(month_start).transpose()?;
        let end = end.map(month_end).transpose()?;
        Self::new(start, end)
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| s <= date) && self.end.is_none_or(|e| date <= e)
    }

    /// Timbrature che cadono nella finestra, nell'ordine originale.
    pub fn filter(&self, punches: &[Punch]) -> Vec<Punch> {
        punches
            .iter()
            .copied()
            .filter(|p| self.contains(p.date()))
            .collect()
    }
}

/// First day of a `MM/YYYY` month.
pub fn month_start(raw: &str) -> AppResult<NaiveDate> {
    let (year, month) = parse_month(raw)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| AppError::InvalidMonth(raw.to_string()))
}

/// Last day of a `MM/YYYY` month (leap years included).
pub fn month_end(raw: &str) -> AppResult<NaiveDate> {
    let (year, month) = parse_month(raw)?;
    let last = month_last_day(year, month).ok_or_else(|| AppError::InvalidMonth(raw.to_string()))?;
    NaiveDate::from_ymd_opt(year, month, last)
        .ok_or_else(|| AppError::InvalidMonth(raw.to_string()))
}

fn parse_month(raw: &str) -> AppResult<(i32, u32)> {
    let invalid = || AppError::InvalidMonth(raw.to_string());

    let (m, y) = raw.trim().split_once('/').ok_or_else(invalid)?;

    if m.is_empty() || m.len() > 2 || y.len() != 4 {
        return Err(invalid());
    }
    if !m.chars().all(|c| c.is_ascii_digit()) || !y.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let month: u32 = m.parse().map_err(|_| invalid())?;
    let year: i32 = y.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
