//! Spreadsheet reference parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use teampulse_core::{Error, Result};

static SHEET_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap());
static BARE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Pull the spreadsheet id out of a Google Sheets URL such as
/// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0`. A bare id is
/// accepted unchanged.
pub fn extract_spreadsheet_id(reference: &str) -> Result<String> {
    let reference = reference.trim();
    if let Some(id) = SHEET_URL_RE.captures(reference).and_then(|c| c.get(1)) {
        return Ok(id.as_str().to_string());
    }
    if BARE_ID_RE.is_match(reference) {
        return Ok(reference.to_string());
    }
    Err(Error::InvalidArgument("Invalid Google Sheet URL format.".into()))
}
