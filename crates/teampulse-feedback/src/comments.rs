//! Comment selection for the summarizer.

use crate::types::FeedbackRecord;

/// Placeholder answers people type when they have nothing to say.
pub const COMMENT_STOPLIST: &[&str] = &["na", "n/a", "none", "ntg", "nil", ""];

pub fn is_meaningful_comment(comment: &str) -> bool {
    let normalized = comment.trim().to_lowercase();
    !normalized.is_empty() && !COMMENT_STOPLIST.contains(&normalized.as_str())
}

/// Comments worth summarizing, in sheet order, duplicates kept.
pub fn select_comments(records: &[FeedbackRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| is_meaningful_comment(&r.comment))
        .map(|r| r.comment.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(comment: &str) -> FeedbackRecord {
        FeedbackRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            understanding: 0.0,
            instructor_rating: 0.0,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn test_stoplist_is_case_insensitive() {
        assert!(!is_meaningful_comment("NA"));
        assert!(!is_meaningful_comment("N/A "));
        assert!(!is_meaningful_comment("na"));
        assert!(!is_meaningful_comment("None"));
        assert!(!is_meaningful_comment("NTG"));
        assert!(!is_meaningful_comment(" nil"));
        assert!(!is_meaningful_comment("   "));
    }

    #[test]
    fn test_real_comments_pass() {
        assert!(is_meaningful_comment("Great session"));
        assert!(is_meaningful_comment("nothing much"));
        assert!(is_meaningful_comment("n/a but the pace was fast"));
    }

    #[test]
    fn test_select_preserves_order_and_duplicates() {
        let records = vec![
            record("Loved the demo"),
            record("na"),
            record("More examples please"),
            record(""),
            record("Loved the demo"),
        ];
        assert_eq!(
            select_comments(&records),
            vec!["Loved the demo", "More examples please", "Loved the demo"]
        );
    }
}
