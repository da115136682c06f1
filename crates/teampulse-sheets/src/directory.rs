//! Employee directory: maps employee ids to their feedback sheet.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use parking_lot::RwLock;
use teampulse_core::{Error, Result};
use tracing::{info, warn};

use crate::types::EmployeeRecord;

/// Lookup service for an employee's registered feedback sheet.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// The employee's feedback sheet URL (or bare id).
    ///
    /// Unknown employees and employees without a sheet are `Error::NotFound`.
    async fn feedback_sheet_url(&self, employee_id: &str) -> Result<String>;
}

/// Read-only directory backed by employees.json.
///
/// Lookups re-read the file when its modification time changes, so edits
/// apply without a restart.
pub struct JsonEmployeeDirectory {
    employees_file: PathBuf,
    loaded: RwLock<Loaded>,
}

struct Loaded {
    modified: Option<SystemTime>,
    employees: Vec<EmployeeRecord>,
}

impl JsonEmployeeDirectory {
    /// Load the directory. A missing or unreadable file yields an empty directory.
    pub fn new(employees_file: &Path) -> Self {
        let employees = load_employees(employees_file);
        info!("EmployeeDirectory: {} employees loaded", employees.len());

        Self {
            employees_file: employees_file.to_path_buf(),
            loaded: RwLock::new(Loaded {
                modified: modified_time(employees_file),
                employees,
            }),
        }
    }

    /// Build an in-memory directory (no backing file).
    pub fn from_records(employees: Vec<EmployeeRecord>) -> Self {
        Self {
            employees_file: PathBuf::new(),
            loaded: RwLock::new(Loaded {
                modified: None,
                employees,
            }),
        }
    }

    pub fn get(&self, id: &str) -> Option<EmployeeRecord> {
        self.refresh();
        self.loaded
            .read()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.loaded.read().employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.read().employees.is_empty()
    }

    fn refresh(&self) {
        if self.employees_file.as_os_str().is_empty() {
            return;
        }
        let modified = modified_time(&self.employees_file);
        if modified == self.loaded.read().modified {
            return;
        }

        let employees = load_employees(&self.employees_file);
        info!("EmployeeDirectory: reloaded {} employees", employees.len());
        *self.loaded.write() = Loaded {
            modified,
            employees,
        };
    }
}

#[async_trait]
impl EmployeeDirectory for JsonEmployeeDirectory {
    async fn feedback_sheet_url(&self, employee_id: &str) -> Result<String> {
        let employee = self
            .get(employee_id)
            .ok_or_else(|| Error::NotFound("Employee not found.".into()))?;

        employee
            .feedback_sheet_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                Error::NotFound("Feedback sheet URL not configured for this employee.".into())
            })
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

fn load_employees(path: &Path) -> Vec<EmployeeRecord> {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!("Failed to parse {}: {}", path.display(), e);
            Vec::new()
        }),
        Err(_) => Vec::new(),
    }
}
