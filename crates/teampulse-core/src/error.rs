//! Error types for TeamPulse.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Sheets error: {0}")]
    Sheets(String),

    #[error("Summarizer error: {0}")]
    Summarizer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl Error {
    /// Errors whose message is safe to hand back to the caller verbatim.
    ///
    /// Everything else is an infrastructure failure and gets reported as an
    /// opaque internal error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::NotFound(_))
    }

    /// The caller-facing reason without the variant prefix.
    pub fn reason(&self) -> String {
        match self {
            Error::InvalidArgument(msg) | Error::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
