pub mod batch_config;
pub mod parse;

pub use batch_config::{BatchConfig, FailurePolicy, LayoutConfig, RunSettings, VerifierConfig};
pub use parse::parse_config_content;
