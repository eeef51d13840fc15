//! Per-file outcomes and the aggregated batch report.

use std::ffi::OsString;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// Result of one verifier invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationStatus {
    Succeeded,
    /// Non-zero exit. `exit_code` is `None` when terminated by a signal.
    Failed { exit_code: Option<i32>, stderr: Option<String> },
    /// The verifier could not be started at all.
    SpawnFailed { reason: String },
}

impl InvocationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationStatus::Succeeded)
    }

    /// One-line description used in logs and abort errors.
    pub fn describe(&self) -> String {
        match self {
            InvocationStatus::Succeeded => "succeeded".to_string(),
            InvocationStatus::Failed { exit_code: Some(code), stderr } => {
                with_stderr(format!("exited with status {}", code), stderr.as_deref())
            }
            InvocationStatus::Failed { exit_code: None, stderr } => {
                with_stderr("terminated by signal".to_string(), stderr.as_deref())
            }
            InvocationStatus::SpawnFailed { reason } => format!("could not be started: {}", reason),
        }
    }
}

fn with_stderr(head: String, stderr: Option<&str>) -> String {
    match stderr.and_then(|s| s.lines().rev().find(|line| !line.trim().is_empty())) {
        Some(last) => format!("{} ({})", head, last.trim()),
        None => head,
    }
}

/// Outcome of processing a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    #[serde(serialize_with = "lossy_os_str")]
    pub group: OsString,
    #[serde(serialize_with = "lossy_path")]
    pub source: PathBuf,
    #[serde(serialize_with = "lossy_path")]
    pub target: PathBuf,
    #[serde(flatten)]
    pub status: InvocationStatus,
}

/// Aggregated results of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub groups_visited: usize,
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn record_group(&mut self) {
        self.groups_visited += 1;
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.processed += 1;
        if outcome.status.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_success())
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Processed {} file(s): {} succeeded, {} failed",
            self.processed, self.succeeded, self.failed
        )
    }
}

#[allow(clippy::ptr_arg)]
fn lossy_path<S: Serializer>(path: &PathBuf, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

#[allow(clippy::ptr_arg)]
fn lossy_os_str<S: Serializer>(value: &OsString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string_lossy())
}
