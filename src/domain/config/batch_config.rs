//! Batch configuration domain models.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration for a batch run, loaded from an optional TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Verifier executable settings.
    #[serde(default)]
    pub verifier: VerifierConfig,
    /// Source and output tree layout.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Run behavior.
    #[serde(default)]
    pub run: RunSettings,
}

impl BatchConfig {
    /// Normalize and validate all sections.
    pub fn validate(&mut self) -> Result<(), AppError> {
        self.verifier.validate()?;
        self.layout.validate()?;
        Ok(())
    }
}

/// Verifier executable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifierConfig {
    /// Path to the verifier executable.
    #[serde(default = "default_program")]
    pub program: PathBuf,
    /// Mode flag passed before the source file.
    #[serde(default = "default_mode_flag")]
    pub mode_flag: String,
    /// Value passed through `-timeLimit:`.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u32,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            mode_flag: default_mode_flag(),
            time_limit_secs: default_time_limit(),
        }
    }
}

impl VerifierConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.program.as_os_str().is_empty() {
            return Err(AppError::config_error("verifier.program must not be empty"));
        }
        Ok(())
    }
}

fn default_program() -> PathBuf {
    PathBuf::from("/home/jeff/Dev/Jeff_Boogie/Scripts/boogie")
}

fn default_mode_flag() -> String {
    "-tryModFix".to_string()
}

fn default_time_limit() -> u32 {
    1
}

/// Source and output tree layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Root of the mirrored output tree. Relative paths resolve against the working directory.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    /// Extension of source files to process, without the leading dot.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Extension given to generated prover logs, without the leading dot.
    #[serde(default = "default_target_extension")]
    pub target_extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            source_extension: default_source_extension(),
            target_extension: default_target_extension(),
        }
    }
}

impl LayoutConfig {
    fn validate(&mut self) -> Result<(), AppError> {
        self.source_extension =
            normalize_extension("layout.source_extension", &self.source_extension)?;
        self.target_extension =
            normalize_extension("layout.target_extension", &self.target_extension)?;
        Ok(())
    }
}

fn default_output_root() -> PathBuf {
    PathBuf::from("../BoogieCollection/SMTs/DAFNY3")
}

fn default_source_extension() -> String {
    "bpl".to_string()
}

fn default_target_extension() -> String {
    "smt2".to_string()
}

/// Strip a single leading dot and reject extensions that cannot name a file suffix.
pub fn normalize_extension(field: &str, raw: &str) -> Result<String, AppError> {
    let ext = raw.strip_prefix('.').unwrap_or(raw);
    if ext.is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", field)));
    }
    if ext.contains('/') || ext.contains('\\') {
        return Err(AppError::config_error(format!(
            "{} must not contain a path separator: '{}'",
            field, raw
        )));
    }
    Ok(ext.to_string())
}

/// Run behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSettings {
    /// What to do when a verifier invocation fails.
    #[serde(default)]
    pub on_error: FailurePolicy,
    /// Capture the verifier's stderr into the batch report.
    #[serde(default = "default_true")]
    pub capture_stderr: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self { on_error: FailurePolicy::default(), capture_stderr: default_true() }
    }
}

fn default_true() -> bool {
    true
}

/// Reaction to a failed or unspawnable verifier invocation.
///
/// Spelled in lowercase both in TOML and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record the failure and move on to the next file.
    #[default]
    Continue,
    /// Stop the batch at the first failure.
    Abort,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "continue" => Ok(FailurePolicy::Continue),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(format!("invalid failure policy '{}': expected continue or abort", other)),
        }
    }
}
