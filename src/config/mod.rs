//! Configuration for the calculator shell.
//!
//! Settings come from an optional `.mueller.toml` found in the working
//! directory or one of its ancestors. The file supplies the retained matrix
//! and vector text the shell starts from and output preferences.

pub mod core;
pub mod loader;
pub mod presets;

pub use self::core::{DefaultsConfig, MuellerConfig, OutputConfig};
pub use loader::{
    discover_config, load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use presets::Preset;
