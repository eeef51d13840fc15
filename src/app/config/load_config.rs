//! Batch configuration loading: defaults, then file, then CLI overrides.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, BatchConfig, FailurePolicy};

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub verifier: Option<PathBuf>,
    pub output_root: Option<PathBuf>,
    pub time_limit_secs: Option<u32>,
    pub on_error: Option<FailurePolicy>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut BatchConfig) {
        if let Some(program) = self.verifier {
            config.verifier.program = program;
        }
        if let Some(output_root) = self.output_root {
            config.layout.output_root = output_root;
        }
        if let Some(secs) = self.time_limit_secs {
            config.verifier.time_limit_secs = secs;
        }
        if let Some(policy) = self.on_error {
            config.run.on_error = policy;
        }
    }
}

/// Load the batch configuration.
///
/// Without a `config_path` the built-in defaults are used. An explicit path
/// that does not exist is an error.
pub fn load_config(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<BatchConfig, AppError> {
    let mut config = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileNotFound(path.to_path_buf()));
            }
            let content = fs::read_to_string(path)?;
            parse_config_content(&content)?
        }
        None => BatchConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate()?;

    tracing::debug!(?config, "resolved batch configuration");
    Ok(config)
}
