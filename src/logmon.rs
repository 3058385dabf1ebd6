use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Failed-login count at which a brute-force incident is raised
pub const DEFAULT_FAILED_LOGIN_THRESHOLD: usize = 3;

/// The fixed sample log used by the monitoring lab
const SAMPLE_LINES: [&str; 6] = [
    "INFO: User login successful",
    "INFO: File uploaded",
    "WARNING: Login failed",
    "WARNING: Login failed",
    "WARNING: Login failed",
    "ERROR: Unauthorized access attempt",
];

/// Write the sample system log to disk
pub fn generate_sample_logs(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in SAMPLE_LINES {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Counters gathered from a single pass over the log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogReport {
    pub lines_scanned: usize,
    pub failed_logins: usize,
    pub unauthorized_access: usize,
}

impl LogReport {
    /// Incident alerts for this report: one per unauthorized access line,
    /// plus a brute-force alert once failed logins reach the threshold
    pub fn incidents(&self, threshold: usize) -> Vec<String> {
        let mut alerts = Vec::new();
        for _ in 0..self.unauthorized_access {
            alerts.push("Unauthorized access detected!".to_string());
        }
        if threshold > 0 && self.failed_logins >= threshold {
            alerts.push("Possible brute-force attack detected!".to_string());
        }
        alerts
    }
}

/// Scan a log file line by line, counting suspicious entries
pub fn scan_logs(path: &Path) -> Result<LogReport> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut report = LogReport {
        lines_scanned: 0,
        failed_logins: 0,
        unauthorized_access: 0,
    };

    for line in reader.lines() {
        let line = line?;
        report.lines_scanned += 1;
        if line.contains("Login failed") {
            report.failed_logins += 1;
        }
        if line.contains("Unauthorized access") {
            report.unauthorized_access += 1;
        }
    }

    Ok(report)
}
