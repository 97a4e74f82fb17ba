use serde::{Deserialize, Serialize};

use super::presets::Preset;
use crate::io::output::OutputFormat;

/// Contents of `.mueller.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuellerConfig {
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl MuellerConfig {
    pub fn defaults(&self) -> DefaultsConfig {
        self.defaults.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

/// Retained input values the shell starts from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Matrix rows as comma-separated text
    #[serde(default = "default_matrix_rows")]
    pub matrix: Vec<String>,

    /// Stokes vector as comma-separated text
    #[serde(default = "default_vector")]
    pub vector: String,

    /// Preset applied on top of `matrix` and `vector`
    #[serde(default)]
    pub preset: Option<Preset>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            matrix: default_matrix_rows(),
            vector: default_vector(),
            preset: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Disable colors and box-drawing characters
    #[serde(default)]
    pub plain: bool,
}

// Initial form values of the reference calculator: the first row is
// "1, 0, 0, 0" and every later row is "0, 1, 0, 0".
fn default_matrix_rows() -> Vec<String> {
    vec![
        "1.0, 0.0, 0.0, 0.0".to_string(),
        "0.0, 1.0, 0.0, 0.0".to_string(),
        "0.0, 1.0, 0.0, 0.0".to_string(),
        "0.0, 1.0, 0.0, 0.0".to_string(),
    ]
}

fn default_vector() -> String {
    "1.0, 0.0, 0.0, 0.0".to_string()
}
