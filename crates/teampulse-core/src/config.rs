//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Column range read from every feedback sheet: timestamp, understanding,
/// instructor rating, comment.
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1!A:D";

/// Paths to all TeamPulse data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Employee directory (`data/employees.json`).
    pub employees_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the root if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            employees_file: root.join("employees.json"),
            root,
        })
    }
}

/// How the Sheets API client authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetsCredentials {
    /// API key appended as `?key=`; only works for link-shared sheets.
    ApiKey(String),
    /// OAuth2 bearer token with the `spreadsheets.readonly` scope.
    AccessToken(String),
    /// Nothing configured. Every fetch fails with a configuration error.
    Missing,
}

impl SheetsCredentials {
    pub fn is_configured(&self) -> bool {
        !matches!(self, SheetsCredentials::Missing)
    }
}

/// Top-level TeamPulse configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamPulseConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// A1-notation range fetched from each feedback sheet.
    pub sheet_range: String,
    /// Sheets API credentials. Never serialized back to clients.
    #[serde(skip_serializing, default = "missing_credentials")]
    pub sheets_credentials: SheetsCredentials,
}

fn missing_credentials() -> SheetsCredentials {
    SheetsCredentials::Missing
}

impl TeamPulseConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3003);

        let sheet_range = std::env::var("SHEET_RANGE")
            .ok()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHEET_RANGE.to_string());

        let sheets_credentials = credentials_from(
            std::env::var("GOOGLE_SHEETS_ACCESS_TOKEN").ok(),
            std::env::var("GOOGLE_SHEETS_API_KEY").ok(),
        );

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            sheet_range,
            sheets_credentials,
        })
    }
}

/// A bearer token wins over an API key; blank values count as unset.
fn credentials_from(access_token: Option<String>, api_key: Option<String>) -> SheetsCredentials {
    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    match (non_blank(access_token), non_blank(api_key)) {
        (Some(token), _) => SheetsCredentials::AccessToken(token),
        (None, Some(key)) => SheetsCredentials::ApiKey(key),
        (None, None) => SheetsCredentials::Missing,
    }
}
