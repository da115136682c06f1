//! Directory and Sheets API types.

use serde::{Deserialize, Serialize};

/// Employee entry persisted in employees.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(
        default,
        rename = "feedbackSheetUrl",
        alias = "feedback_sheet_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub feedback_sheet_url: Option<String>,
}

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`. Only `values` is read;
/// `range` and `majorDimension` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRange {
    /// Omitted entirely by the API when the range is empty.
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    /// Rows as strings. Formatted values are already strings; anything else
    /// (numbers, booleans) is rendered as JSON text, nulls become empty.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect()
    }
}

fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_rows() {
        let body = serde_json::json!({
            "range": "Sheet1!A1:D3",
            "majorDimension": "ROWS",
            "values": [
                ["Timestamp", "Understanding", "Instructor", "Comments"],
                ["6/1/2024 9:00:00", 4, "5", null],
                ["6/1/2024 9:05:00", "na"]
            ]
        });
        let range: ValueRange = serde_json::from_value(body).unwrap();
        let rows = range.into_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["6/1/2024 9:00:00", "4", "5", ""]);
        assert_eq!(rows[2].len(), 2);
    }

    #[test]
    fn test_value_range_without_values() {
        let range: ValueRange =
            serde_json::from_str(r#"{"range":"Sheet1!A1:D1","majorDimension":"ROWS"}"#).unwrap();
        assert!(range.into_rows().is_empty());
    }

    #[test]
    fn test_employee_record_aliases() {
        let camel: EmployeeRecord =
            serde_json::from_str(r#"{"id":"e1","feedbackSheetUrl":"https://x/d/abc"}"#).unwrap();
        let snake: EmployeeRecord =
            serde_json::from_str(r#"{"id":"e1","feedback_sheet_url":"https://x/d/abc"}"#).unwrap();
        assert_eq!(camel.feedback_sheet_url, snake.feedback_sheet_url);
        assert!(camel.name.is_none());
    }
}
