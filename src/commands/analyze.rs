use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use super::{load_settings, resolve_output};
use crate::io::{create_writer, open_destination, OutputFormat};
use crate::polarization::PolarizationReport;
use crate::shell::parse::parse_stokes;

pub struct AnalyzeConfig {
    pub vector: String,
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = load_settings(config.config_path.as_deref())?;
    let vector = parse_stokes(&config.vector)?;
    let report = PolarizationReport::for_vector(&vector);
    info!(
        dop = report.degree_of_polarization,
        classification = report.label(),
        "analyzed Stokes vector"
    );

    let (format, formatting) = resolve_output(config.format, config.plain, &settings.output());
    let destination = open_destination(config.output.as_deref())?;
    let mut writer = create_writer(format, formatting, destination);
    writer.write_analysis(&vector, &report)?;
    Ok(())
}
