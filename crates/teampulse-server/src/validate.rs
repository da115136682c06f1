//! Configuration readiness check for `teampulse validate`.

use std::path::Path;

use teampulse_core::{DataPaths, SheetsCredentials, TeamPulseConfig};
use teampulse_sheets::{extract_spreadsheet_id, EmployeeRecord};
use teampulse_summarize::SummarizerConfig;

/// Result of a readiness check.
#[derive(Debug, Clone, Default)]
pub struct ReadinessReport {
    pub employees: usize,
    pub employees_with_sheet: usize,
    pub sheets_configured: bool,
    pub summarizer_configured: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ReadinessReport {
    pub fn is_ready(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate `data_dir` using Sheets credentials from the environment.
pub fn validate(data_dir: &Path) -> ReadinessReport {
    if !data_dir.is_dir() {
        return ReadinessReport {
            errors: vec![format!("Data directory not found: {}", data_dir.display())],
            ..Default::default()
        };
    }

    match TeamPulseConfig::from_env(data_dir) {
        Ok(config) => check(
            &config.data_paths,
            &config.sheets_credentials,
            &SummarizerConfig::from_env(),
        ),
        Err(e) => ReadinessReport {
            errors: vec![format!("Failed to read configuration: {}", e)],
            ..Default::default()
        },
    }
}

/// Check the employee directory, Sheets credentials and the Gemini key.
pub fn check(
    paths: &DataPaths,
    credentials: &SheetsCredentials,
    summarizer: &SummarizerConfig,
) -> ReadinessReport {
    let mut report = ReadinessReport {
        sheets_configured: credentials.is_configured(),
        summarizer_configured: summarizer.is_configured(),
        ..Default::default()
    };

    if !report.sheets_configured {
        report.errors.push(
            "No Sheets credentials: set GOOGLE_SHEETS_API_KEY or GOOGLE_SHEETS_ACCESS_TOKEN".into(),
        );
    }

    match std::fs::read_to_string(&paths.employees_file) {
        Ok(data) => match serde_json::from_str::<Vec<EmployeeRecord>>(&data) {
            Ok(employees) => check_employees(&employees, &mut report),
            Err(e) => report.errors.push(format!(
                "Invalid employee directory {}: {}",
                paths.employees_file.display(),
                e
            )),
        },
        Err(_) => report.errors.push(format!(
            "Employee directory not found: {}",
            paths.employees_file.display()
        )),
    }

    if !report.summarizer_configured {
        report.errors.push("No Gemini API key: set GEMINI_KEY".into());
    }

    report
}

fn check_employees(employees: &[EmployeeRecord], report: &mut ReadinessReport) {
    report.employees = employees.len();
    if employees.is_empty() {
        report.warnings.push("Employee directory is empty".into());
    }

    for employee in employees {
        match employee.feedback_sheet_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                if extract_spreadsheet_id(url).is_ok() {
                    report.employees_with_sheet += 1;
                } else {
                    report
                        .warnings
                        .push(format!("Employee {}: unrecognized sheet URL", employee.id));
                }
            }
            _ => report
                .warnings
                .push(format!("Employee {}: no feedback sheet configured", employee.id)),
        }
    }
}

pub fn print_report(report: &ReadinessReport) {
    println!("=== TeamPulse Readiness Report ===");
    println!();
    println!("Employees:          {}", report.employees);
    println!("With feedback sheet:{:>4}", report.employees_with_sheet);
    println!("Sheets credentials: {}", if report.sheets_configured { "YES" } else { "NO" });
    println!(
        "Gemini key:         {}",
        if report.summarizer_configured { "YES" } else { "NO" }
    );

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for w in &report.warnings {
            println!("  - {}", w);
        }
    }

    if !report.errors.is_empty() {
        println!();
        println!("Errors:");
        for e in &report.errors {
            println!("  - {}", e);
        }
    }

    println!();
    if report.is_ready() {
        println!("Status: READY");
    } else {
        println!("Status: NOT READY");
    }
}
