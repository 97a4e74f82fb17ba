//! CLI command implementations.
//!
//! - **calculate**: apply a Mueller matrix to a Stokes vector
//! - **analyze**: degree of polarization of a single Stokes vector
//! - **presets**: list the built-in presets
//! - **init**: write a default `.mueller.toml`

pub mod analyze;
pub mod calculate;
pub mod init;
pub mod presets;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use calculate::{handle_calculate, resolve_state, CalculateConfig};
pub use init::init_config;
pub use presets::list_presets;

use std::path::Path;

use crate::config::{load_config, load_config_from, MuellerConfig, OutputConfig};
use crate::formatting::FormattingConfig;
use crate::io::OutputFormat;

/// Load the explicit `--config` file, or fall back to discovery
pub fn load_settings(config_path: Option<&Path>) -> crate::core::Result<MuellerConfig> {
    match config_path {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}

/// Pick the output format and styling: flags first, then config, then defaults
pub fn resolve_output(
    format: Option<OutputFormat>,
    plain: bool,
    configured: &OutputConfig,
) -> (OutputFormat, FormattingConfig) {
    let format = format.or(configured.format).unwrap_or_default();
    let formatting = if plain || configured.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    (format, formatting)
}
