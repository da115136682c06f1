//! Point aggregates and bucketed time series.
//!
//! Range series are sparse (only days that have feedback), full-history series
//! are dense (all twelve months, empty ones reported as 0). The two shapes
//! serve different charts and must not be unified.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::types::{AggregateSummary, FeedbackRecord, TimeSeries};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    count: usize,
    understanding: f64,
    instructor: f64,
}

impl Bucket {
    fn add(&mut self, record: &FeedbackRecord) {
        self.count += 1;
        self.understanding += record.understanding;
        self.instructor += record.instructor_rating;
    }

    /// Rounded means, or `None` for an empty bucket.
    fn means(&self) -> Option<(f64, f64)> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some((round2(self.understanding / n), round2(self.instructor / n)))
    }
}

/// Count and rounded averages over the whole set.
pub fn summarize(records: &[FeedbackRecord]) -> AggregateSummary {
    let mut bucket = Bucket::default();
    for record in records {
        bucket.add(record);
    }
    let means = bucket.means();
    AggregateSummary {
        total_feedbacks: bucket.count,
        avg_understanding: means.map(|(u, _)| u),
        avg_instructor: means.map(|(_, i)| i),
    }
}

/// One bucket per calendar day that has at least one record, oldest first,
/// labelled like `"Jun 5"`.
pub fn series_by_day(records: &[FeedbackRecord]) -> TimeSeries {
    let mut days: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();
    for record in records {
        days.entry(record.timestamp.date()).or_default().add(record);
    }

    let mut series = TimeSeries::default();
    for (day, bucket) in &days {
        if let Some((understanding, instructor)) = bucket.means() {
            series.push(day.format("%b %-d").to_string(), understanding, instructor);
        }
    }
    series
}

/// Exactly twelve month-of-year buckets regardless of data or year. Months
/// without records report 0 for both series.
pub fn series_by_month(records: &[FeedbackRecord]) -> TimeSeries {
    let mut months = [Bucket::default(); 12];
    for record in records {
        months[record.timestamp.month0() as usize].add(record);
    }

    let mut series = TimeSeries::default();
    for (label, bucket) in MONTH_LABELS.iter().zip(months.iter()) {
        let (understanding, instructor) = bucket.means().unwrap_or((0.0, 0.0));
        series.push(label.to_string(), understanding, instructor);
    }
    series
}
