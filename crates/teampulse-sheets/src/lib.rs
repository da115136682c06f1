//! Tabular data sources: who owns which feedback sheet, and how to read it.
//!
//! `EmployeeDirectory` maps an employee id to their registered sheet URL,
//! `extract_spreadsheet_id` turns that URL into an id, and `SheetSource`
//! fetches the raw rows. Both traits are object-safe so callers can inject
//! their own implementations.

pub mod client;
pub mod directory;
pub mod reference;
pub mod types;

pub use client::{GoogleSheetsClient, SheetSource};
pub use directory::{EmployeeDirectory, JsonEmployeeDirectory};
pub use reference::extract_spreadsheet_id;
pub use types::*;
