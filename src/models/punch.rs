use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Formato dei timestamp nel backup (`2024-02-05 09:00`).
pub const PUNCH_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Una singola timbratura, risoluzione al minuto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punch(NaiveDateTime);

impl Punch {
    /// Parse a `YYYY-MM-DD HH:MM` string. Anything else is rejected.
    ///
    /// The year must be exactly four digits: chrono's `%Y` alone would also
    /// take signed or longer years.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() < 5 || !b[..4].iter().all(u8::is_ascii_digit) || b[4] != b'-' {
            return None;
        }
        NaiveDateTime::parse_from_str(s, PUNCH_FORMAT).ok().map(Self)
    }

    pub fn at(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

impl fmt::Display for Punch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(PUNCH_FORMAT))
    }
}
