//! Result files: semicolon-appended timing and length logs, and the
//! pretty-printed run report.
//!
//! Each run appends exactly one field to each log file:
//!
//! ```text
//! time file:    ;<elapsed_ms>   (or ";" when no plan was returned)
//! length file:  ;<plan_length>  (or ";")
//! ```
//!
//! A closest-attempt plan counts as a returned plan.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::runner::RunReportV1;

pub const RUN_REPORT_FILENAME: &str = "run_report.json";

/// Error writing a result file.
#[derive(Debug, thiserror::Error)]
pub enum ResultFileError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize run report: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ResultFileError + '_ {
    move |source| ResultFileError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// The pair of append-only log files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFilesV1 {
    pub time_file: PathBuf,
    pub length_file: PathBuf,
}

impl ResultFilesV1 {
    #[must_use]
    pub fn new(time_file: impl Into<PathBuf>, length_file: impl Into<PathBuf>) -> Self {
        Self {
            time_file: time_file.into(),
            length_file: length_file.into(),
        }
    }

    /// Append this run's fields. Files are created if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ResultFileError::Io`] if either file cannot be appended.
    pub fn record(&self, report: &RunReportV1) -> Result<(), ResultFileError> {
        let (time, length) = if report.has_plan() {
            (
                format!(";{}", report.elapsed_ms),
                format!(";{}", report.plan_length()),
            )
        } else {
            (";".to_string(), ";".to_string())
        };
        append(&self.time_file, &time)?;
        append(&self.length_file, &length)
    }
}

fn append(path: &Path, field: &str) -> Result<(), ResultFileError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error(path))?;
    file.write_all(field.as_bytes()).map_err(io_error(path))
}

/// Write `run_report.json` (pretty JSON) into `dir`, creating `dir` if
/// needed. Returns the file path.
///
/// # Errors
///
/// Returns [`ResultFileError`] on I/O or serialization failure.
pub fn write_report(dir: &Path, report: &RunReportV1) -> Result<PathBuf, ResultFileError> {
    std::fs::create_dir_all(dir).map_err(io_error(dir))?;
    let path = dir.join(RUN_REPORT_FILENAME);
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    std::fs::write(&path, json).map_err(io_error(&path))?;
    Ok(path)
}
