use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::core::{MuellerMatrix, Result, StokesVector};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::polarization::PolarizationReport;
use crate::shell::Calculation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_calculation(&mut self, calculation: &Calculation) -> Result<()>;

    /// Report on a single Stokes vector with no optical element applied
    fn write_analysis(&mut self, vector: &StokesVector, report: &PolarizationReport)
        -> Result<()>;
}

/// JSON document for a single-vector analysis
#[derive(Serialize)]
struct AnalysisDocument<'a> {
    vector: &'a StokesVector,
    #[serde(flatten)]
    report: &'a PolarizationReport,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_calculation(&mut self, calculation: &Calculation) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, calculation)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_analysis(
        &mut self,
        vector: &StokesVector,
        report: &PolarizationReport,
    ) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &AnalysisDocument { vector, report })?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_matrix(&mut self, matrix: &MuellerMatrix) -> Result<()> {
        writeln!(self.writer, "## Mueller Matrix")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| | j=0 | j=1 | j=2 | j=3 |")?;
        writeln!(self.writer, "|---|---|---|---|---|")?;
        for (index, row) in matrix.rows().iter().enumerate() {
            writeln!(
                self.writer,
                "| i={} | {:?} | {:?} | {:?} | {:?} |",
                index, row[0], row[1], row[2], row[3]
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_polarization(&mut self, dop: f64, label: &str) -> Result<()> {
        writeln!(self.writer, "## Polarization")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Degree of polarization | {:?} |", dop)?;
        writeln!(self.writer, "| Classification | {} |", label)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_calculation(&mut self, calculation: &Calculation) -> Result<()> {
        writeln!(self.writer, "# Mueller Matrix Calculation")?;
        writeln!(self.writer)?;
        self.write_matrix(&calculation.matrix)?;
        writeln!(self.writer, "## Stokes Vectors")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| | I | Q | U | V |")?;
        writeln!(self.writer, "|---|---|---|---|---|")?;
        for (name, vector) in [("Input", &calculation.input), ("Output", &calculation.output)] {
            writeln!(
                self.writer,
                "| {} | {:?} | {:?} | {:?} | {:?} |",
                name,
                vector.intensity(),
                vector.q(),
                vector.u(),
                vector.v()
            )?;
        }
        writeln!(self.writer)?;
        self.write_polarization(calculation.degree_of_polarization, calculation.label())
    }

    fn write_analysis(
        &mut self,
        vector: &StokesVector,
        report: &PolarizationReport,
    ) -> Result<()> {
        writeln!(self.writer, "# Stokes Vector Analysis")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Stokes vector: `{}`", vector)?;
        writeln!(self.writer)?;
        self.write_polarization(report.degree_of_polarization, report.label())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            config,
            formatter: formatter_for(config),
        }
    }

    fn matrix_table(&self, matrix: &MuellerMatrix) -> Table {
        let mut table = Table::new();
        if self.config.ascii_tables {
            table.load_preset(presets::ASCII_FULL);
        } else {
            table.load_preset(presets::UTF8_FULL);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        for row in matrix.rows() {
            table.add_row(
                row.iter()
                    .map(|v| Cell::new(format!("{:?}", v)).set_alignment(CellAlignment::Right)),
            );
        }
        table
    }

    fn write_polarization(&mut self, report: &PolarizationReport) -> Result<()> {
        writeln!(
            self.writer,
            "{} {:?}",
            self.formatter.bold("Degree of polarization:"),
            report.degree_of_polarization
        )?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.bold("Classification:"),
            self.formatter.classification(report.classification)
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_calculation(&mut self, calculation: &Calculation) -> Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Mueller Matrix Calculator"))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.bold("Mueller matrix:"))?;
        let table = self.matrix_table(&calculation.matrix);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.bold("Input Stokes vector:"),
            calculation.input
        )?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.bold("Output Stokes vector:"),
            calculation.output
        )?;
        writeln!(self.writer, "{}", self.formatter.dim("(I, Q, U, V)"))?;
        writeln!(self.writer)?;
        self.write_polarization(&PolarizationReport {
            degree_of_polarization: calculation.degree_of_polarization,
            classification: calculation.classification,
        })
    }

    fn write_analysis(
        &mut self,
        vector: &StokesVector,
        report: &PolarizationReport,
    ) -> Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Stokes Vector Analysis"))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.bold("Stokes vector:"),
            vector
        )?;
        self.write_polarization(report)
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    formatting: FormattingConfig,
    destination: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, formatting)),
    }
}
