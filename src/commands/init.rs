use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Mueller calculator configuration

[defaults]
# Matrix rows, 4 comma-separated numbers each
matrix = [
    "1.0, 0.0, 0.0, 0.0",
    "0.0, 1.0, 0.0, 0.0",
    "0.0, 1.0, 0.0, 0.0",
    "0.0, 1.0, 0.0, 0.0",
]
# Input Stokes vector (I, Q, U, V)
vector = "1.0, 0.0, 0.0, 0.0"
# Optional preset applied over the values above, see `mueller presets`
# preset = "horizontal-polarizer"

[output]
format = "terminal"
plain = false
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(config_path, DEFAULT_CONFIG)
}
