//! Configuration loading for the CLI and library entry points.
//!
//! Pure schema parsing lives in `domain::config`.

mod load_config;

pub use load_config::{ConfigOverrides, load_config};
