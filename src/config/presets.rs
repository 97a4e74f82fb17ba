//! Named optical-element presets.
//!
//! Each preset pairs a Mueller matrix with an input Stokes vector. All
//! built-in presets illuminate the element with unpolarized light of unit
//! intensity.
//!
//! # Example
//!
//! ```rust
//! use mueller::config::presets::Preset;
//!
//! let preset: Preset = "horizontal-polarizer".parse().unwrap();
//! assert_eq!(preset.matrix().row(0), &[0.5, 0.5, 0.0, 0.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Error, MuellerMatrix, StokesVector};

/// Config files name presets the same way the CLI does: through [`Preset::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Preset {
    /// Element that leaves light unchanged
    Identity,
    /// Ideal linear polarizer, transmission axis horizontal
    HorizontalPolarizer,
    /// Ideal linear polarizer, transmission axis vertical
    VerticalPolarizer,
    /// Ideal linear polarizer, transmission axis at +45°
    DiagonalPolarizer,
    /// Quarter-wave plate, fast axis horizontal
    QuarterWavePlate,
    /// Half-wave plate, fast axis horizontal
    HalfWavePlate,
    /// Ideal depolarizer
    Depolarizer,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Identity,
        Preset::HorizontalPolarizer,
        Preset::VerticalPolarizer,
        Preset::DiagonalPolarizer,
        Preset::QuarterWavePlate,
        Preset::HalfWavePlate,
        Preset::Depolarizer,
    ];

    pub fn matrix(self) -> MuellerMatrix {
        let rows = match self {
            Preset::Identity => return MuellerMatrix::identity(),
            Preset::HorizontalPolarizer => [
                [0.5, 0.5, 0.0, 0.0],
                [0.5, 0.5, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
            ],
            Preset::VerticalPolarizer => [
                [0.5, -0.5, 0.0, 0.0],
                [-0.5, 0.5, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
            ],
            Preset::DiagonalPolarizer => [
                [0.5, 0.0, 0.5, 0.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.5, 0.0, 0.5, 0.0],
                [0.0, 0.0, 0.0, 0.0],
            ],
            Preset::QuarterWavePlate => [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, -1.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
            Preset::HalfWavePlate => [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [0.0, 0.0, 0.0, -1.0],
            ],
            Preset::Depolarizer => [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
            ],
        };
        MuellerMatrix::new(rows)
    }

    pub fn input_vector(self) -> StokesVector {
        StokesVector::unpolarized()
    }

    /// Parse preset from string name (returns Option instead of Result).
    ///
    /// Case-insensitive; `_` and spaces are treated as `-`.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "identity" => Some(Preset::Identity),
            "horizontal-polarizer" => Some(Preset::HorizontalPolarizer),
            "vertical-polarizer" => Some(Preset::VerticalPolarizer),
            "diagonal-polarizer" => Some(Preset::DiagonalPolarizer),
            "quarter-wave-plate" => Some(Preset::QuarterWavePlate),
            "half-wave-plate" => Some(Preset::HalfWavePlate),
            "depolarizer" => Some(Preset::Depolarizer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Identity => "identity",
            Preset::HorizontalPolarizer => "horizontal-polarizer",
            Preset::VerticalPolarizer => "vertical-polarizer",
            Preset::DiagonalPolarizer => "diagonal-polarizer",
            Preset::QuarterWavePlate => "quarter-wave-plate",
            Preset::HalfWavePlate => "half-wave-plate",
            Preset::Depolarizer => "depolarizer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Identity => "No change to the light",
            Preset::HorizontalPolarizer => "Horizontal linear polarizer on unpolarized light",
            Preset::VerticalPolarizer => "Vertical linear polarizer on unpolarized light",
            Preset::DiagonalPolarizer => "+45° linear polarizer on unpolarized light",
            Preset::QuarterWavePlate => "Quarter-wave plate, fast axis horizontal",
            Preset::HalfWavePlate => "Half-wave plate, fast axis horizontal",
            Preset::Depolarizer => "Ideal depolarizer",
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::parse(s).ok_or_else(|| Error::UnknownPreset {
            name: s.to_string(),
            valid: Preset::valid_names(),
        })
    }
}

impl TryFrom<String> for Preset {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for preset in Preset::ALL {
            assert_eq!(Preset::parse(preset.as_str()), Some(preset));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_separators() {
        assert_eq!(
            Preset::parse("Quarter_Wave_Plate"),
            Some(Preset::QuarterWavePlate)
        );
        assert_eq!(
            Preset::parse(" horizontal polarizer "),
            Some(Preset::HorizontalPolarizer)
        );
    }

    #[test]
    fn test_from_str_lists_valid_names() {
        let err = "polaroid".parse::<Preset>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'polaroid'"));
        assert!(message.contains("half-wave-plate"));
    }

    #[test]
    fn test_horizontal_polarizer_matrix() {
        let m = Preset::HorizontalPolarizer.matrix();
        assert_eq!(m.row(1), &[0.5, 0.5, 0.0, 0.0]);
        assert_eq!(m.row(3), &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(Preset::HorizontalPolarizer.input_vector(), StokesVector::unpolarized());
    }

    #[test]
    fn test_deserialize_accepts_cli_spellings() {
        let preset: Preset = serde_json::from_str("\"Half_Wave_Plate\"").unwrap();
        assert_eq!(preset, Preset::HalfWavePlate);
        assert!(serde_json::from_str::<Preset>("\"prism\"").is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Preset::HalfWavePlate).unwrap();
        assert_eq!(json, "\"half-wave-plate\"");
    }
}
