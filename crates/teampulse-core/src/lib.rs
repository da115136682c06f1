//! TeamPulse Core: shared error type and configuration.

pub mod config;
pub mod error;

pub use config::{DataPaths, SheetsCredentials, TeamPulseConfig, DEFAULT_SHEET_RANGE};
pub use error::{Error, Result};
