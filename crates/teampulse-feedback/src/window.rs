//! Time-window filtering.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::types::{FeedbackRecord, WindowSpec};

/// Keep the records whose timestamp falls inside `spec`, evaluated against the
/// reference clock `now`. Order is preserved.
pub fn filter_records(
    records: Vec<FeedbackRecord>,
    spec: &WindowSpec,
    now: NaiveDateTime,
) -> Vec<FeedbackRecord> {
    if matches!(spec, WindowSpec::Full) {
        return records;
    }
    records
        .into_iter()
        .filter(|r| in_window(spec, now, r.timestamp))
        .collect()
}

fn in_window(spec: &WindowSpec, now: NaiveDateTime, ts: NaiveDateTime) -> bool {
    match *spec {
        WindowSpec::Daily => ts.date() == now.date(),
        WindowSpec::Monthly { date } => {
            let reference = date.unwrap_or_else(|| now.date());
            ts.year() == reference.year() && ts.month() == reference.month()
        }
        WindowSpec::Specific { date } => ts.date() == date,
        WindowSpec::Range { start, end } => start_of_day(start) <= ts && ts <= end_of_day(end),
        WindowSpec::Full => true,
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`.
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_timestamp;

    fn record(ts: &str) -> FeedbackRecord {
        FeedbackRecord {
            timestamp: parse_timestamp(ts).unwrap(),
            understanding: 3.0,
            instructor_rating: 4.0,
            comment: String::new(),
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        parse_timestamp("6/15/2024 14:30:00").unwrap()
    }

    fn sample() -> Vec<FeedbackRecord> {
        vec![
            record("6/15/2024 0:00:00"),
            record("6/15/2024 23:59:59"),
            record("6/14/2024 23:59:59"),
            record("6/1/2024 9:00:00"),
            record("5/31/2024 9:00:00"),
            record("6/15/2023 9:00:00"),
        ]
    }

    #[test]
    fn test_daily_uses_reference_clock() {
        let kept = filter_records(sample(), &WindowSpec::Daily, now());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.timestamp.date() == ymd(2024, 6, 15)));
    }

    #[test]
    fn test_monthly_defaults_to_now() {
        let kept = filter_records(sample(), &WindowSpec::Monthly { date: None }, now());
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn test_monthly_ignores_other_years() {
        let spec = WindowSpec::Monthly { date: Some(ymd(2023, 6, 1)) };
        let kept = filter_records(sample(), &spec, now());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].timestamp.year(), 2023);
    }

    #[test]
    fn test_specific_day() {
        let spec = WindowSpec::Specific { date: ymd(2024, 6, 14) };
        let kept = filter_records(sample(), &spec, now());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_range_is_inclusive_at_both_ends() {
        let spec = WindowSpec::Range { start: ymd(2024, 6, 1), end: ymd(2024, 6, 14) };
        let kept = filter_records(sample(), &spec, now());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_range_end_of_day_boundary() {
        let spec = WindowSpec::Range { start: ymd(2024, 6, 1), end: ymd(2024, 6, 1) };
        let kept = filter_records(vec![record("6/1/2024 23:59:00")], &spec, now());
        assert_eq!(kept.len(), 1);

        let kept = filter_records(vec![record("6/2/2024 0:00:00")], &spec, now());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_single_day_range_matches_specific() {
        let day = ymd(2024, 6, 15);
        let range = filter_records(sample(), &WindowSpec::Range { start: day, end: day }, now());
        let specific = filter_records(sample(), &WindowSpec::Specific { date: day }, now());
        assert_eq!(range, specific);
    }

    #[test]
    fn test_full_keeps_everything_in_order() {
        let kept = filter_records(sample(), &WindowSpec::Full, now());
        assert_eq!(kept, sample());
    }

    #[test]
    fn test_end_of_day_value() {
        let eod = end_of_day(ymd(2024, 6, 1));
        assert_eq!(eod.to_string(), "2024-06-01 23:59:59.999");
    }
}
