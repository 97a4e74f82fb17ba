//! Degree of polarization and its qualitative classification.
//!
//! The degree of polarization (DOP) of a Stokes vector (I, Q, U, V) is
//! `sqrt(Q² + U² + V²) / I`. Light with zero intensity has a DOP of 0 rather
//! than an undefined value. The result is never clamped: a physically
//! inconsistent vector may yield a DOP above 1 or below 0, and that value is
//! reported as computed.
//!
//! Classification thresholds are fixed:
//!
//! | DOP                 | Classification              |
//! |---------------------|-----------------------------|
//! | `> 0.99`            | Fully polarized light       |
//! | `> 0.01`, `<= 0.99` | Partially polarized light   |
//! | `<= 0.01`           | Unpolarized light           |

use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::{Result, StokesVector};

/// DOP above which light counts as fully polarized
pub const FULLY_POLARIZED_THRESHOLD: f64 = 0.99;

/// DOP at or below which light counts as unpolarized
pub const UNPOLARIZED_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarizationClass {
    FullyPolarized,
    PartiallyPolarized,
    Unpolarized,
}

impl PolarizationClass {
    /// Classify a degree of polarization.
    ///
    /// NaN compares false against both thresholds and lands in `Unpolarized`.
    pub fn from_dop(dop: f64) -> Self {
        if dop > FULLY_POLARIZED_THRESHOLD {
            Self::FullyPolarized
        } else if dop > UNPOLARIZED_THRESHOLD {
            Self::PartiallyPolarized
        } else {
            Self::Unpolarized
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullyPolarized => "Fully polarized light",
            Self::PartiallyPolarized => "Partially polarized light",
            Self::Unpolarized => "Unpolarized light",
        }
    }
}

impl fmt::Display for PolarizationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PolarizationClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// DOP together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarizationReport {
    pub degree_of_polarization: f64,
    pub classification: PolarizationClass,
}

impl PolarizationReport {
    pub fn for_vector(vector: &StokesVector) -> Self {
        let dop = degree_of_polarization(vector);
        Self {
            degree_of_polarization: dop,
            classification: PolarizationClass::from_dop(dop),
        }
    }

    pub fn label(&self) -> &'static str {
        self.classification.label()
    }
}

/// Degree of polarization of a Stokes vector; 0 when the intensity is exactly 0
pub fn degree_of_polarization(vector: &StokesVector) -> f64 {
    let intensity = vector.intensity();
    if intensity == 0.0 {
        return 0.0;
    }
    vector.polarized_intensity() / intensity
}

/// Compute the DOP of `vector` and classify it.
///
/// Fails with [`Error::ShapeMismatch`](crate::core::Error::ShapeMismatch)
/// unless `vector` has exactly four components.
pub fn analyze(vector: &[f64]) -> Result<PolarizationReport> {
    let vector = StokesVector::from_slice(vector)?;
    Ok(PolarizationReport::for_vector(&vector))
}
