use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::BatchReport;

/// Library-wide error type for smt-batch operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    /// Root directory argument does not exist.
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Root directory argument exists but is not a directory.
    #[error("Not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    /// Output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDirectory { path: PathBuf, source: io::Error },

    /// Verifier failed on a source file while running with the abort policy.
    ///
    /// Carries the report of everything processed up to and including the failure.
    #[error("Verifier failed on {}: {details}", source_file.display())]
    VerifierFailed { source_file: PathBuf, details: String, report: Box<BatchReport> },

    /// Batch report could not be serialized or written.
    #[error("Failed to write report: {0}")]
    ReportWrite(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Take the partial batch report out of an aborted run, if this error carries one.
    pub fn take_partial_report(&mut self) -> Option<BatchReport> {
        match self {
            AppError::VerifierFailed { report, .. } => Some(std::mem::take(report.as_mut())),
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::OutputDirectory { source, .. } => source.kind(),
            AppError::Configuration(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::RootNotDirectory(_) => io::ErrorKind::NotADirectory,
            AppError::ConfigFileNotFound(_) | AppError::RootNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::VerifierFailed { .. } | AppError::ReportWrite(_) => io::ErrorKind::Other,
        }
    }
}
