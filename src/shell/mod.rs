//! The calculator shell around the transform engine and polarization analyzer.
//!
//! [`ShellState`] holds the retained text inputs: four matrix rows and one
//! Stokes vector, each a comma-separated list of numbers. It starts from
//! configuration, can be overwritten by a named preset or by individual
//! edits, and is only parsed when a calculation is requested. Parse failures
//! stop the calculation before the core runs.

pub mod parse;

use serde::Serialize;
use tracing::debug;

use crate::config::{DefaultsConfig, Preset};
use crate::core::{format_values, Error, MuellerMatrix, Result, StokesVector, STOKES_LEN};
use crate::polarization::{PolarizationClass, PolarizationReport};

/// Everything one calculation produces
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub matrix: MuellerMatrix,
    pub input: StokesVector,
    pub output: StokesVector,
    pub degree_of_polarization: f64,
    pub classification: PolarizationClass,
}

impl Calculation {
    /// Run the transform engine and analyzer on already-parsed inputs
    pub fn run(matrix: MuellerMatrix, input: StokesVector) -> Self {
        let output = matrix.apply(&input);
        let report = PolarizationReport::for_vector(&output);
        Self {
            matrix,
            input,
            output,
            degree_of_polarization: report.degree_of_polarization,
            classification: report.classification,
        }
    }

    pub fn label(&self) -> &'static str {
        self.classification.label()
    }
}

/// Retained text inputs of the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    matrix_rows: [String; STOKES_LEN],
    vector: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::from_defaults(&DefaultsConfig::default())
    }
}

impl ShellState {
    pub fn new(matrix_rows: [String; STOKES_LEN], vector: impl Into<String>) -> Self {
        Self {
            matrix_rows,
            vector: vector.into(),
        }
    }

    /// Build the starting state from configured defaults.
    ///
    /// Missing rows fall back to empty text, which fails to parse at
    /// calculation time. A configured preset is applied last.
    pub fn from_defaults(defaults: &DefaultsConfig) -> Self {
        let mut rows: [String; STOKES_LEN] = Default::default();
        for (target, row) in rows.iter_mut().zip(&defaults.matrix) {
            target.clone_from(row);
        }
        let mut state = Self::new(rows, defaults.vector.clone());
        if let Some(preset) = defaults.preset {
            state.apply_preset(preset);
        }
        state
    }

    /// Replace every retained row and the vector with a preset's values
    pub fn apply_preset(&mut self, preset: Preset) {
        debug!(preset = preset.as_str(), "applying preset");
        let matrix = preset.matrix();
        for (target, row) in self.matrix_rows.iter_mut().zip(matrix.rows()) {
            *target = format_values(row);
        }
        self.vector = format_values(preset.input_vector().components());
    }

    /// Apply a preset by name
    pub fn apply_preset_named(&mut self, name: &str) -> Result<Preset> {
        let preset: Preset = name.parse()?;
        self.apply_preset(preset);
        Ok(preset)
    }

    /// Overwrite one matrix row; `index` is zero-based
    pub fn set_row(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let slot = self
            .matrix_rows
            .get_mut(index)
            .ok_or_else(|| {
                Error::parse(
                    "Mueller matrix",
                    format!("row {} does not exist, rows are 1 to {}", index + 1, STOKES_LEN),
                )
            })?;
        *slot = text.into();
        Ok(())
    }

    pub fn set_vector(&mut self, text: impl Into<String>) {
        self.vector = text.into();
    }

    pub fn matrix_rows(&self) -> &[String; STOKES_LEN] {
        &self.matrix_rows
    }

    pub fn vector(&self) -> &str {
        &self.vector
    }

    /// Parse the retained text and run the calculation
    pub fn calculate(&self) -> Result<Calculation> {
        let matrix = parse::parse_matrix(&self.matrix_rows)?;
        let input = parse::parse_stokes(&self.vector)?;
        let calculation = Calculation::run(matrix, input);
        debug!(
            dop = calculation.degree_of_polarization,
            classification = calculation.label(),
            "calculation complete"
        );
        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_state_matches_reference_form() {
        let state = ShellState::default();
        assert_eq!(state.matrix_rows()[0], "1.0, 0.0, 0.0, 0.0");
        assert_eq!(state.matrix_rows()[3], "0.0, 1.0, 0.0, 0.0");
        assert_eq!(state.vector(), "1.0, 0.0, 0.0, 0.0");

        let calc = state.calculate().unwrap();
        assert_eq!(calc.output, StokesVector::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(calc.classification, PolarizationClass::Unpolarized);
    }

    #[test]
    fn test_apply_preset_replaces_all_values() {
        let mut state = ShellState::default();
        state.set_vector("2, 0, 0, 0");
        state.apply_preset(Preset::HorizontalPolarizer);

        assert_eq!(
            state.matrix_rows(),
            &[
                "0.5, 0.5, 0.0, 0.0".to_string(),
                "0.5, 0.5, 0.0, 0.0".to_string(),
                "0.0, 0.0, 0.0, 0.0".to_string(),
                "0.0, 0.0, 0.0, 0.0".to_string(),
            ]
        );
        assert_eq!(state.vector(), "1.0, 0.0, 0.0, 0.0");
    }

    #[test]
    fn test_horizontal_polarizer_scenario() {
        let mut state = ShellState::default();
        state.apply_preset(Preset::HorizontalPolarizer);
        let calc = state.calculate().unwrap();

        assert_eq!(calc.output, StokesVector::new(0.5, 0.5, 0.0, 0.0));
        assert_eq!(calc.degree_of_polarization, 1.0);
        assert_eq!(calc.label(), "Fully polarized light");
    }

    #[test]
    fn test_apply_unknown_preset_leaves_state_untouched() {
        let mut state = ShellState::default();
        let before = state.clone();
        assert!(matches!(
            state.apply_preset_named("mirror"),
            Err(Error::UnknownPreset { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_row_out_of_range() {
        let mut state = ShellState::default();
        assert!(state.set_row(4, "1, 2, 3, 4").is_err());
        state.set_row(1, "0, 0.5, 0, 0").unwrap();
        assert_eq!(state.matrix_rows()[1], "0, 0.5, 0, 0");
    }

    #[test]
    fn test_parse_failure_blocks_calculation() {
        let mut state = ShellState::default();
        state.set_vector("1, 0, 0");
        assert!(state.calculate().unwrap_err().is_parse());
    }

    #[test]
    fn test_configured_preset_wins_over_rows() {
        let defaults = DefaultsConfig {
            preset: Some(Preset::Depolarizer),
            ..Default::default()
        };
        let state = ShellState::from_defaults(&defaults);
        assert_eq!(state.matrix_rows()[1], "0.0, 0.0, 0.0, 0.0");
    }

    #[test]
    fn test_short_configured_matrix_fails_at_calculation() {
        let defaults = DefaultsConfig {
            matrix: vec!["1, 0, 0, 0".to_string()],
            ..Default::default()
        };
        let state = ShellState::from_defaults(&defaults);
        assert!(state.calculate().unwrap_err().is_parse());
    }
}
