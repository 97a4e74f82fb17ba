use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use super::{load_settings, resolve_output};
use crate::config::MuellerConfig;
use crate::io::{create_writer, open_destination, OutputFormat};
use crate::shell::ShellState;

pub struct CalculateConfig {
    pub rows: [Option<String>; 4],
    pub vector: Option<String>,
    pub preset: Option<String>,
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

/// Build the shell state for one run.
///
/// Configured defaults come first, then the preset, then any row or vector
/// given explicitly.
pub fn resolve_state(
    config: &MuellerConfig,
    rows: &[Option<String>; 4],
    vector: Option<&str>,
    preset: Option<&str>,
) -> crate::core::Result<ShellState> {
    let mut state = ShellState::from_defaults(&config.defaults());

    if let Some(name) = preset {
        state.apply_preset_named(name)?;
    }

    for (index, row) in rows.iter().enumerate() {
        if let Some(text) = row {
            state.set_row(index, text.as_str())?;
        }
    }

    if let Some(text) = vector {
        state.set_vector(text);
    }

    Ok(state)
}

pub fn handle_calculate(config: CalculateConfig) -> Result<()> {
    let settings = load_settings(config.config_path.as_deref())?;

    let state = resolve_state(
        &settings,
        &config.rows,
        config.vector.as_deref(),
        config.preset.as_deref(),
    )?;
    let calculation = state.calculate()?;
    info!(
        output = %calculation.output,
        classification = calculation.label(),
        "calculated output Stokes vector"
    );

    let (format, formatting) = resolve_output(config.format, config.plain, &settings.output());
    let destination = open_destination(config.output.as_deref())?;
    let mut writer = create_writer(format, formatting, destination);
    writer.write_calculation(&calculation)?;
    Ok(())
}
