//! Sheet rows → typed feedback records.
//!
//! Column layout is fixed: timestamp, understanding, instructor rating,
//! comment. The first row is the header and is always skipped.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::types::FeedbackRecord;

/// Parse every data row, dropping rows whose timestamp is unusable.
pub fn parse_rows(rows: &[Vec<String>]) -> Vec<FeedbackRecord> {
    let mut dropped = 0usize;
    let records: Vec<FeedbackRecord> = rows
        .iter()
        .skip(1)
        .filter_map(|row| {
            let record = parse_row(row);
            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .collect();

    if dropped > 0 {
        debug!("Dropped {} feedback rows with unparseable timestamps", dropped);
    }
    records
}

fn parse_row(row: &[String]) -> Option<FeedbackRecord> {
    let cell = |i: usize| row.get(i).map(String::as_str);
    let timestamp = parse_timestamp(cell(0)?)?;

    Some(FeedbackRecord {
        timestamp,
        understanding: parse_rating(cell(1)),
        instructor_rating: parse_rating(cell(2)),
        comment: cell(3).map(str::trim).unwrap_or_default().to_string(),
    })
}

/// Parse `M/d/yyyy H:mm:ss` (components may be one or two digits).
///
/// Two relaxations are accepted on purpose: a date-only value reads as
/// midnight, and the seconds may be left off (`H:mm`). Sheets exported with a
/// date-only timestamp column still load that way. Three or more tokens, a
/// non-numeric component, or an impossible date/time yields `None`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let (date_part, time_part) = match tokens.as_slice() {
        [date] => (*date, None),
        [date, time] => (*date, Some(*time)),
        _ => return None,
    };

    let date = match numeric_parts(date_part, '/')?.as_slice() {
        [month, day, year] => {
            NaiveDate::from_ymd_opt(i32::try_from(*year).ok()?, *month, *day)?
        }
        _ => return None,
    };

    let time = match time_part {
        None => NaiveTime::MIN,
        Some(t) => match numeric_parts(t, ':')?.as_slice() {
            [h, m] => NaiveTime::from_hms_opt(*h, *m, 0)?,
            [h, m, s] => NaiveTime::from_hms_opt(*h, *m, *s)?,
            _ => return None,
        },
    };

    Some(date.and_time(time))
}

fn numeric_parts(value: &str, sep: char) -> Option<Vec<u32>> {
    value
        .split(sep)
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                None
            } else {
                part.parse::<u32>().ok()
            }
        })
        .collect()
}

/// Numeric cell → rating. Missing, blank or non-numeric cells count as 0.
pub fn parse_rating(cell: Option<&str>) -> f64 {
    cell.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
