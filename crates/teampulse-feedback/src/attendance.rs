//! Standup attendance streaks.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Missed,
    #[serde(other)]
    Unknown,
}

/// One scheduled standup and how the employee showed up for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: NaiveDateTime,
    pub status: AttendanceStatus,
}

/// Number of consecutive calendar days, ending at the most recent standup,
/// on which the employee was present.
///
/// Entries are walked newest first. The newest must be `Present` for the
/// streak to start. Any later non-present entry resets the streak to zero.
/// A present entry extends it only when it falls exactly one day before the
/// previous one; any other gap, including a second standup on the same day,
/// ends the count.
pub fn attendance_streak(entries: &[AttendanceEntry]) -> usize {
    let mut sorted: Vec<&AttendanceEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));

    let mut streak = 0usize;
    let mut last_day: Option<NaiveDate> = None;
    for entry in sorted {
        if entry.status != AttendanceStatus::Present {
            streak = 0;
            break;
        }
        let day = entry.scheduled_at.date();
        match last_day {
            None => streak = 1,
            Some(prev) if (prev - day).num_days() == 1 => streak += 1,
            Some(_) => break,
        }
        last_day = Some(day);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::AttendanceStatus::*;
    use super::*;

    fn entry(ts: &str, status: AttendanceStatus) -> AttendanceEntry {
        AttendanceEntry {
            scheduled_at: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap(),
            status,
        }
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(attendance_streak(&[]), 0);
    }

    #[test]
    fn test_consecutive_days() {
        let entries = vec![
            entry("2024-06-01 09:00", Present),
            entry("2024-06-03 09:00", Present),
            entry("2024-06-02 09:00", Present),
        ];
        assert_eq!(attendance_streak(&entries), 3);
    }

    #[test]
    fn test_latest_absence_zeroes_streak() {
        let entries = vec![
            entry("2024-06-02 09:00", Present),
            entry("2024-06-03 09:00", Missed),
        ];
        assert_eq!(attendance_streak(&entries), 0);
    }

    #[test]
    fn test_gap_ends_streak() {
        let entries = vec![
            entry("2024-06-05 09:00", Present),
            entry("2024-06-04 09:00", Present),
            entry("2024-06-01 09:00", Present),
        ];
        assert_eq!(attendance_streak(&entries), 2);
    }

    #[test]
    fn test_older_absence_resets_streak() {
        let entries = vec![
            entry("2024-06-05 09:00", Present),
            entry("2024-06-04 09:00", Present),
            entry("2024-06-03 09:00", Absent),
            entry("2024-06-02 09:00", Present),
        ];
        assert_eq!(attendance_streak(&entries), 0);
    }

    #[test]
    fn test_same_day_standup_breaks_streak() {
        let entries = vec![
            entry("2024-06-05 17:00", Present),
            entry("2024-06-05 09:00", Present),
            entry("2024-06-04 09:00", Present),
        ];
        assert_eq!(attendance_streak(&entries), 1);
    }

    #[test]
    fn test_gap_stops_before_older_absence() {
        let entries = vec![
            entry("2024-06-05 09:00", Present),
            entry("2024-06-04 09:00", Present),
            entry("2024-06-01 09:00", Present),
            entry("2024-05-31 09:00", Absent),
        ];
        assert_eq!(attendance_streak(&entries), 2);
    }

    #[test]
    fn test_status_wire_format() {
        let parsed: AttendanceEntry =
            serde_json::from_str(r#"{"scheduledAt":"2024-06-05T09:00:00","status":"Excused"}"#)
                .unwrap();
        assert_eq!(parsed.status, Unknown);
    }
}
