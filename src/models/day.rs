use super::punch::Punch;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

/// Stato della giornata rispetto all'ultima timbratura.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// No session open: the next punch opens one.
    Idle,
    /// A session opened at `since` is waiting for its closing punch.
    Open { since: NaiveDateTime },
}

/// Aggregato giornaliero delle timbrature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAccumulator {
    pub date: NaiveDate,
    pub state: DayState,
    pub first_punch: Option<NaiveDateTime>,
    pub worked: Duration,
}

impl DayAccumulator {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            state: DayState::Idle,
            first_punch: None,
            worked: Duration::zero(),
        }
    }

    /// Fold one punch into the day.
    ///
    /// | state            | result                                   |
    /// |------------------|------------------------------------------|
    /// | `Idle`           | `Open { since: punch }`                  |
    /// | `Open { since }` | `Idle`, `worked += punch - since`        |
    pub fn apply(&mut self, punch: Punch) {
        self.state = match self.state {
            DayState::Idle => {
                if self.first_punch.is_none() {
                    self.first_punch = Some(punch.at());
                    self.worked = Duration::zero();
                }
                DayState::Open { since: punch.at() }
            }
            DayState::Open { since } => {
                self.worked += punch.at() - since;
                DayState::Idle
            }
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DayState::Open { .. })
    }

    /// Vero se la giornata ha almeno una sessione chiusa e nessuna aperta.
    pub fn is_complete(&self) -> bool {
        self.first_punch.is_some() && !self.is_open()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
