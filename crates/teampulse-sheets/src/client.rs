//! Google Sheets values client.

use async_trait::async_trait;
use reqwest::{Client, Url};
use teampulse_core::{Error, Result, SheetsCredentials};
use tracing::debug;

use crate::types::ValueRange;

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Source of raw rectangular rows for a spreadsheet range.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch every row of `range` in one call, header row included.
    async fn fetch_rows(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>>;
}

/// Read-only client for `spreadsheets.values.get`.
pub struct GoogleSheetsClient {
    client: Client,
    credentials: SheetsCredentials,
}

impl GoogleSheetsClient {
    pub fn new(client: Client, credentials: SheetsCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }

    /// `{SHEETS_API_BASE}/v4/spreadsheets/{id}/values/{range}` with each segment
    /// percent-encoded.
    pub fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url> {
        let mut url = Url::parse(SHEETS_API_BASE)
            .map_err(|e| Error::Config(format!("Invalid Sheets API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config("Sheets API base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);
        Ok(url)
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsClient {
    async fn fetch_rows(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>> {
        let mut url = self.values_url(spreadsheet_id, range)?;

        let request = match &self.credentials {
            SheetsCredentials::ApiKey(key) => {
                url.query_pairs_mut().append_pair("key", key);
                self.client.get(url)
            }
            SheetsCredentials::AccessToken(token) => self.client.get(url).bearer_auth(token),
            SheetsCredentials::Missing => {
                return Err(Error::Config(
                    "Google Sheets credentials are not configured \
                     (set GOOGLE_SHEETS_ACCESS_TOKEN or GOOGLE_SHEETS_API_KEY)"
                        .into(),
                ))
            }
        };

        debug!("Fetching sheet {} range {}", spreadsheet_id, range);

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("Sheets request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Sheets(format!("API error {}: {}", status, body)));
        }

        let values: ValueRange = response
            .json()
            .await
            .map_err(|e| Error::Sheets(format!("Invalid values response: {}", e)))?;
        let rows = values.into_rows();
        debug!("Fetched {} rows from sheet {}", rows.len(), spreadsheet_id);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(credentials: SheetsCredentials) -> GoogleSheetsClient {
        GoogleSheetsClient::new(Client::new(), credentials)
    }

    #[test]
    fn test_values_url_encodes_range() {
        let c = client(SheetsCredentials::ApiKey("k".into()));
        let url = c.values_url("abc123", "Sheet1!A:D").unwrap();
        assert!(url
            .as_str()
            .starts_with("https://sheets.googleapis.com/v4/spreadsheets/abc123/values/"));
        assert!(url.path().ends_with("Sheet1!A:D"));

        let url = c.values_url("abc123", "My Sheet!A:D").unwrap();
        assert!(url.path().ends_with("My%20Sheet!A:D"));
    }

    #[test]
    fn test_values_url_encodes_spreadsheet_id() {
        let c = client(SheetsCredentials::AccessToken("t".into()));
        let url = c.values_url("a/b", "A:D").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/a%2Fb/values/A:D"
        );
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_network() {
        let c = client(SheetsCredentials::Missing);
        assert!(!c.is_configured());
        let err = c.fetch_rows("abc", "Sheet1!A:D").await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!err.is_client_error());
    }
}
