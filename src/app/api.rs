//! API Facade for the application.
//!
//! Glues configuration loading, context creation, and command execution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::commands::batch;
use crate::app::config::{ConfigOverrides, load_config};
use crate::domain::{AppError, BatchConfig, BatchReport};
use crate::services::{CommandVerifier, FilesystemSourceTree};

/// Inputs for a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Directory whose immediate subdirectories are scanned.
    pub root: PathBuf,
    /// Optional TOML configuration file.
    pub config_path: Option<PathBuf>,
    /// Command-line overrides applied on top of the file.
    pub overrides: ConfigOverrides,
}

/// Create an `AppContext` backed by the local filesystem and real processes.
fn create_context(config: BatchConfig) -> AppContext<FilesystemSourceTree, CommandVerifier> {
    let verifier = CommandVerifier::new(config.run.capture_stderr);
    AppContext::new(config, FilesystemSourceTree::new(), verifier)
}

/// Run the verifier over every source file under `options.root`.
///
/// Progress lines go to stdout.
pub fn run_batch(options: BatchOptions) -> Result<BatchReport, AppError> {
    let config = load_config(options.config_path.as_deref(), options.overrides)?;
    let ctx = create_context(config);

    let stdout = io::stdout();
    let mut progress = stdout.lock();
    batch::execute(&ctx, &options.root, &mut progress)
}

/// Write `report` as pretty-printed JSON to `path`.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::ReportWrite(format!("serialization failed: {}", e)))?;
    fs::write(path, json + "\n")
        .map_err(|e| AppError::ReportWrite(format!("{}: {}", path.display(), e)))
}
