use crate::core::range::DateRange;
use crate::errors::{AppError, AppResult};
use crate::models::{DayAccumulator, Punch};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Aggregati giornalieri ordinati per data.
#[derive(Debug, Default, Clone)]
pub struct DayGroups {
    days: BTreeMap<NaiveDate, DayAccumulator>,
}

impl DayGroups {
    /// One empty accumulator for every day in `[first, last]`.
    fn spanning(first: NaiveDate, last: NaiveDate) -> Self {
        let days = std::iter::successors(Some(first), |d| d.succ_opt())
            .take_while(|d| *d <= last)
            .map(|d| (d, DayAccumulator::new(d)))
            .collect();
        Self { days }
    }

    fn fold(&mut self, punch: Punch) -> AppResult<()> {
        let date = punch.date();
        let day = self
            .days
            .get_mut(&date)
            .ok_or_else(|| AppError::MissingDayBucket(date.format("%Y-%m-%d").to_string()))?;
        day.apply(punch);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayAccumulator> {
        self.days.get(&date)
    }

    /// Accumulators in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &DayAccumulator> {
        self.days.values()
    }

    /// Days whose last session never received a closing punch.
    pub fn open_days(&self) -> Vec<NaiveDate> {
        self.iter().filter(|d| d.is_open()).map(|d| d.date).collect()
    }
}

/// Group `punches` (sorted ascending) into per-day accumulators.
///
/// The bucketed span goes from the first to the last punch date inside
/// `range`. Every punch of the full sequence is then folded, so a punch
/// outside that span fails with [`AppError::MissingDayBucket`].
pub fn group_punches(punches: &[Punch], range: &DateRange) -> AppResult<DayGroups> {
    let in_range = range.filter(punches);

    let (Some(first), Some(last)) = (
        in_range.iter().map(Punch::date).min(),
        in_range.iter().map(Punch::date).max(),
    ) else {
        return Ok(DayGroups::default());
    };

    let mut groups = DayGroups::spanning(first, last);
    for punch in punches {
        groups.fold(*punch)?;
    }

    Ok(groups)
}
