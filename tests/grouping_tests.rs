mod common;
use chrono::{Duration, NaiveDate};
use common::{MARKER, SAMPLE_BACKUP, SAMPLE_CSV};
use rpontocsv::core::formatter::{RowPolicy, format_day, format_days};
use rpontocsv::core::grouper::group_punches;
use rpontocsv::core::parser::parse_punches;
use rpontocsv::core::range::{DateRange, month_end, month_start};
use rpontocsv::errors::AppError;
use rpontocsv::export::rows_to_csv;
use rpontocsv::models::{DayAccumulator, DayState, Punch};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn punch(s: &str) -> Punch {
    Punch::parse(s).expect("valid punch")
}

fn punches(lines: &[&str]) -> Vec<Punch> {
    let mut v: Vec<Punch> = lines.iter().map(|s| punch(s)).collect();
    v.sort();
    v
}

#[test]
fn test_day_state_toggles() {
    let mut day = DayAccumulator::new(d(2024, 2, 1));
    assert_eq!(day.state, DayState::Idle);

    day.apply(punch("2024-02-01 09:00"));
    assert!(day.is_open());
    assert_eq!(day.first_punch, Some(punch("2024-02-01 09:00").at()));

    day.apply(punch("2024-02-01 12:00"));
    assert_eq!(day.state, DayState::Idle);
    assert_eq!(day.worked, Duration::hours(3));

    day.apply(punch("2024-02-01 13:00"));
    day.apply(punch("2024-02-01 18:30"));
    assert_eq!(day.worked, Duration::minutes(8 * 60 + 30));
    // the first punch of the day never moves
    assert_eq!(day.first_punch, Some(punch("2024-02-01 09:00").at()));
    assert!(day.is_complete());
}

#[test]
fn test_sample_produces_expected_csv() {
    let all = parse_punches(SAMPLE_BACKUP, MARKER).unwrap();
    let groups = group_punches(&all, &DateRange::unbounded()).unwrap();
    let rows = format_days(&groups, &RowPolicy::default());

    assert_eq!(rows_to_csv(&rows).unwrap(), SAMPLE_CSV);
}

#[test]
fn test_row_count_matches_punch_span() {
    let all = punches(&["2024-02-10 09:00", "2024-02-10 17:00", "2024-03-02 09:00", "2024-03-02 10:00"]);
    let groups = group_punches(&all, &DateRange::unbounded()).unwrap();

    // Feb 10 → Mar 2 2024, inclusive (leap year)
    assert_eq!(groups.len(), 22);
    assert_eq!(groups.iter().next().unwrap().date, d(2024, 2, 10));
    assert_eq!(groups.iter().last().unwrap().date, d(2024, 3, 2));
}

#[test]
fn test_nine_to_six_exits_at_half_past_seven() {
    let all = punches(&["2024-02-01 09:00", "2024-02-01 18:00"]);
    let groups = group_punches(&all, &DateRange::unbounded()).unwrap();
    let row = format_day(groups.get(d(2024, 2, 1)).unwrap(), &RowPolicy::default());

    assert_eq!(row.to_record(), ["2024-02-01", "09:00", "12:00", "13:00", "19:30"]);
}

#[test]
fn test_empty_days_inside_span_get_placeholder_rows() {
    // Fri 2024-02-02 → Mon 2024-02-05
    let all = punches(&[
        "2024-02-02 09:00",
        "2024-02-02 17:00",
        "2024-02-05 09:00",
        "2024-02-05 17:00",
    ]);
    let groups = group_punches(&all, &DateRange::unbounded()).unwrap();
    let rows = format_days(&groups, &RowPolicy::default());

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1].to_record(), ["2024-02-03", "SÁBADO", "SÁBADO", "SÁBADO", "SÁBADO"]);
    assert_eq!(
        rows[2].to_record(),
        ["2024-02-04", "DOMINGO", "DOMINGO", "DOMINGO", "DOMINGO"]
    );
}

#[test]
fn test_weekday_without_punches_is_blank() {
    let day = DayAccumulator::new(d(2024, 2, 7));
    let row = format_day(&day, &RowPolicy::default());

    assert_eq!(row.to_record(), ["2024-02-07", "", "12:00", "13:00", ""]);
}

#[test]
fn test_unmatched_punch_is_reported_and_degraded() {
    let all = punches(&[
        "2024-02-06 09:00",
        "2024-02-07 09:00",
        "2024-02-07 17:00",
        "2024-02-07 18:00",
    ]);
    let groups = group_punches(&all, &DateRange::unbounded()).unwrap();

    assert_eq!(groups.open_days(), vec![d(2024, 2, 6), d(2024, 2, 7)]);

    let rows = format_days(&groups, &RowPolicy::default());
    assert_eq!(rows[0].to_record(), ["2024-02-06", "", "12:00", "13:00", ""]);
    assert_eq!(rows[1].to_record(), ["2024-02-07", "", "12:00", "13:00", ""]);
}

#[test]
fn test_open_saturday_uses_weekend_label() {
    let all = punches(&["2024-02-10 10:00"]);
    let groups = group_punches(&all, &DateRange::unbounded()).unwrap();
    let rows = format_days(&groups, &RowPolicy::default());

    assert_eq!(groups.open_days(), vec![d(2024, 2, 10)]);
    assert_eq!(rows[0].entry, "SÁBADO");
}

#[test]
fn test_worked_saturday_keeps_times() {
    let all = punches(&["2024-02-10 10:00", "2024-02-10 12:00"]);
    let groups = group_punches(&all, &DateRange::unbounded()).unwrap();
    let rows = format_days(&groups, &RowPolicy::default());

    assert_eq!(rows[0].to_record(), ["2024-02-10", "10:00", "12:00", "13:00", "13:30"]);
}

#[test]
fn test_no_punch_in_range_creates_no_days() {
    let all = punches(&["2024-02-01 09:00", "2024-02-01 18:00"]);
    let range = DateRange::from_months(Some("03/2024"), Some("03/2024")).unwrap();
    let groups = group_punches(&all, &range).unwrap();

    assert!(groups.is_empty());
    assert!(format_days(&groups, &RowPolicy::default()).is_empty());
}

#[test]
fn test_punch_outside_bucketed_span_is_an_error() {
    let all = punches(&[
        "2024-01-31 09:00",
        "2024-01-31 18:00",
        "2024-02-01 09:00",
        "2024-02-01 18:00",
    ]);
    let range = DateRange::from_months(Some("02/2024"), None).unwrap();
    let err = group_punches(&all, &range).unwrap_err();

    assert!(matches!(err, AppError::MissingDayBucket(ref day) if day == "2024-01-31"));
}

#[test]
fn test_range_covering_all_punches_groups_them() {
    let all = punches(&["2024-02-01 09:00", "2024-02-29 18:00", "2024-02-29 19:00"]);
    let range = DateRange::from_months(Some("02/2024"), Some("02/2024")).unwrap();
    let groups = group_punches(&all, &range).unwrap();

    assert_eq!(groups.len(), 29);
    assert_eq!(groups.open_days(), vec![d(2024, 2, 1)]);
}

#[test]
fn test_month_arguments_resolve_leap_february() {
    let range = DateRange::from_months(Some("02/2024"), Some("02/2024")).unwrap();

    assert_eq!(range.start, Some(d(2024, 2, 1)));
    assert_eq!(range.end, Some(d(2024, 2, 29)));
    assert_eq!(month_end("02/2023").unwrap(), d(2023, 2, 28));
    assert_eq!(month_end("02/1900").unwrap(), d(1900, 2, 28));
    assert_eq!(month_end("02/2000").unwrap(), d(2000, 2, 29));
    assert_eq!(month_start("2/2024").unwrap(), d(2024, 2, 1));
}

#[test]
fn test_range_bounds_are_inclusive() {
    let range = DateRange::from_months(Some("02/2024"), Some("02/2024")).unwrap();

    assert!(range.contains(d(2024, 2, 1)));
    assert!(range.contains(d(2024, 2, 29)));
    assert!(!range.contains(d(2024, 1, 31)));
    assert!(!range.contains(d(2024, 3, 1)));
    assert!(DateRange::unbounded().contains(d(1, 1, 1)));
}

#[test]
fn test_invalid_months_are_rejected() {
    for bad in ["13/2024", "00/2024", "2024-02", "02/24", "fev/2024", "02/2024/01", ""] {
        let err = DateRange::from_months(Some(bad), None).unwrap_err();
        assert!(matches!(err, AppError::InvalidMonth(_)), "accepted {bad:?}");
    }
}

#[test]
fn test_start_after_end_is_rejected() {
    let err = DateRange::from_months(Some("03/2024"), Some("02/2024")).unwrap_err();

    assert!(matches!(err, AppError::InvalidRange { .. }));
}

#[test]
fn test_custom_lunch_policy() {
    let all = punches(&["2024-02-01 09:00", "2024-02-01 18:00"]);
    let groups = group_punches(&all, &DateRange::unbounded()).unwrap();
    let policy = RowPolicy {
        lunch_break: Duration::minutes(60),
        lunch_out: "11:30".to_string(),
        lunch_in: "12:30".to_string(),
    };
    let rows = format_days(&groups, &policy);

    assert_eq!(rows[0].to_record(), ["2024-02-01", "09:00", "11:30", "12:30", "19:00"]);
}
