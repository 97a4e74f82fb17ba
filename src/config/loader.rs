use std::fs;
use std::path::{Path, PathBuf};

use super::core::MuellerConfig;
use crate::core::{Error, Result};
use crate::shell::parse::{parse_matrix, parse_stokes};

pub const CONFIG_FILE_NAME: &str = ".mueller.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<MuellerConfig> {
    let config = toml::from_str::<MuellerConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    if let Some(ref defaults) = config.defaults {
        parse_matrix(&defaults.matrix)
            .and_then(|_| parse_stokes(&defaults.vector))
            .map_err(|e| Error::Configuration(format!("Invalid [defaults]: {}", e)))?;
    }

    Ok(config)
}

/// Load a config file that was named explicitly; any failure is an error
pub fn load_config_from(path: &Path) -> Result<MuellerConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a discovered path, warning on anything but "not found"
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MuellerConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.mueller.toml`
pub fn discover_config(start: PathBuf) -> MuellerConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MuellerConfig::default()
        })
}

pub fn load_config() -> MuellerConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            MuellerConfig::default()
        }
    }
}
