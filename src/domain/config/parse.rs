//! Pure parse/validate for batch configuration (`*.toml`).

use crate::domain::{AppError, BatchConfig};

/// Parse and validate batch configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BatchConfig, AppError> {
    let mut config: BatchConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
