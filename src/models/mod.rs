pub mod day;
pub mod punch;
pub mod row;

pub use day::{DayAccumulator, DayState};
pub use punch::Punch;
pub use row::AttendanceRow;
