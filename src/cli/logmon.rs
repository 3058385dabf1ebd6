use crate::error::{PrivlabError, Result};
use crate::logmon::{generate_sample_logs, scan_logs, DEFAULT_FAILED_LOGIN_THRESHOLD};
use std::path::PathBuf;

/// Options for the logmon command
#[derive(Debug, Clone)]
pub struct LogmonOptions {
    pub log_file: PathBuf,
    /// Failed-login count that raises a brute-force alert
    pub threshold: usize,
    /// Scan the file as-is instead of writing the sample log first
    pub use_existing: bool,
}

impl Default for LogmonOptions {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("system_logs.txt"),
            threshold: DEFAULT_FAILED_LOGIN_THRESHOLD,
            use_existing: false,
        }
    }
}

/// Generate (unless scanning an existing file) and scan the system log,
/// returning the monitoring report with any incident alerts
pub fn run_logmon(options: &LogmonOptions) -> Result<String> {
    let mut output = String::new();

    if options.use_existing {
        if !options.log_file.exists() {
            return Err(PrivlabError::MissingInput(options.log_file.clone()));
        }
    } else {
        generate_sample_logs(&options.log_file)?;
        output.push_str(&format!("Logs generated to {}\n", options.log_file.display()));
    }

    output.push_str("Monitoring logs...\n");
    let report = scan_logs(&options.log_file)?;
    output.push_str(&format!(
        "Scanned {} lines: {} failed logins, {} unauthorized access\n",
        report.lines_scanned, report.failed_logins, report.unauthorized_access
    ));

    for alert in report.incidents(options.threshold) {
        output.push_str(&format!("INCIDENT ALERT: {}\n", alert));
    }

    output.push_str("Log Monitoring Completed\n");
    Ok(output)
}
