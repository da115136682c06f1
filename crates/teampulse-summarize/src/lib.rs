//! Feedback comment summarization with Gemini.
//!
//! Comments are folded into one prompt, sent to Gemini, and the reply is
//! decoded best-effort into a [`SummaryResult`].

pub mod config;
pub mod decode;
pub mod gemini;
pub mod prompt;
pub mod requester;
pub mod types;

pub use config::SummarizerConfig;
pub use decode::{decode_summary, DecodeError};
pub use gemini::GeminiClient;
pub use requester::{SummaryRequester, TextGenerator};
pub use types::*;
