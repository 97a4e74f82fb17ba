//! Stokes vectors and Mueller matrices.
//!
//! Both types enforce their shape at construction, so code holding one never
//! needs to re-check dimensions. Values are otherwise unconstrained: negative,
//! zero, huge and non-finite components are all accepted.

use serde::Serialize;
use std::fmt;
use std::ops::Index;

use super::errors::{Error, Result};

/// Number of Stokes parameters (I, Q, U, V)
pub const STOKES_LEN: usize = 4;

/// A Stokes vector (I, Q, U, V).
///
/// `I` is total intensity, `Q`, `U` and `V` describe the polarization state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StokesVector {
    components: [f64; STOKES_LEN],
}

impl StokesVector {
    pub const fn new(i: f64, q: f64, u: f64, v: f64) -> Self {
        Self {
            components: [i, q, u, v],
        }
    }

    /// Unpolarized light of unit intensity
    pub const fn unpolarized() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Build a vector from a slice, failing unless it holds exactly four values
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let components: [f64; STOKES_LEN] = values
            .try_into()
            .map_err(|_| Error::shape_mismatch("Stokes vector", STOKES_LEN, values.len()))?;
        Ok(Self { components })
    }

    pub fn intensity(&self) -> f64 {
        self.components[0]
    }

    pub fn q(&self) -> f64 {
        self.components[1]
    }

    pub fn u(&self) -> f64 {
        self.components[2]
    }

    pub fn v(&self) -> f64 {
        self.components[3]
    }

    /// Magnitude of the polarized part, sqrt(Q² + U² + V²)
    pub fn polarized_intensity(&self) -> f64 {
        (self.q().powi(2) + self.u().powi(2) + self.v().powi(2)).sqrt()
    }

    pub fn components(&self) -> &[f64; STOKES_LEN] {
        &self.components
    }
}

impl From<[f64; STOKES_LEN]> for StokesVector {
    fn from(components: [f64; STOKES_LEN]) -> Self {
        Self { components }
    }
}

impl AsRef<[f64]> for StokesVector {
    fn as_ref(&self) -> &[f64] {
        &self.components
    }
}

impl Index<usize> for StokesVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl fmt::Display for StokesVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", format_values(&self.components))
    }
}

/// A 4×4 Mueller matrix, row-major.
///
/// No physical-validity constraint is checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MuellerMatrix {
    rows: [[f64; STOKES_LEN]; STOKES_LEN],
}

impl MuellerMatrix {
    pub const fn new(rows: [[f64; STOKES_LEN]; STOKES_LEN]) -> Self {
        Self { rows }
    }

    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Build a matrix from rows, failing unless there are four rows of four values
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != STOKES_LEN {
            return Err(Error::shape_mismatch(
                "Mueller matrix",
                STOKES_LEN,
                rows.len(),
            ));
        }

        let mut grid = [[0.0; STOKES_LEN]; STOKES_LEN];
        for (index, (target, row)) in grid.iter_mut().zip(rows).enumerate() {
            let row = row.as_ref();
            *target = row.try_into().map_err(|_| {
                Error::shape_mismatch(
                    format!("Mueller matrix row {}", index + 1),
                    STOKES_LEN,
                    row.len(),
                )
            })?;
        }

        Ok(Self { rows: grid })
    }

    pub fn rows(&self) -> &[[f64; STOKES_LEN]; STOKES_LEN] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &[f64; STOKES_LEN] {
        &self.rows[index]
    }

    /// Apply this matrix to a Stokes vector: out[i] = Σ_j M[i][j] · s[j]
    pub fn apply(&self, input: &StokesVector) -> StokesVector {
        let mut out = [0.0; STOKES_LEN];
        for (value, row) in out.iter_mut().zip(&self.rows) {
            *value = row
                .iter()
                .zip(input.components())
                .map(|(m, s)| m * s)
                .sum();
        }
        StokesVector::from(out)
    }
}

impl Default for MuellerMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f64; STOKES_LEN]; STOKES_LEN]> for MuellerMatrix {
    fn from(rows: [[f64; STOKES_LEN]; STOKES_LEN]) -> Self {
        Self { rows }
    }
}

impl fmt::Display for MuellerMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| format!("[{}]", format_values(row)))
            .collect();
        write!(f, "[{}]", rows.join(", "))
    }
}

/// Render values as a comma-separated list that parses back to the same numbers
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stokes_from_slice_rejects_wrong_length() {
        let err = StokesVector::from_slice(&[1.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_stokes_accessors() {
        let s = StokesVector::new(1.0, 0.3, 0.4, 0.0);
        assert_eq!(s.intensity(), 1.0);
        assert_eq!(s.q(), 0.3);
        assert_eq!(s.u(), 0.4);
        assert_eq!(s.v(), 0.0);
        assert!((s.polarized_intensity() - 0.5).abs() < 1e-12);
        assert_eq!(s[2], 0.4);
    }

    #[test]
    fn test_matrix_from_rows_rejects_short_row() {
        let rows = vec![
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
        ];
        let err = MuellerMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Shape mismatch: Mueller matrix row 2 must have 4 elements, found 3"
        );
    }

    #[test]
    fn test_matrix_from_rows_rejects_three_rows() {
        let rows = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert!(MuellerMatrix::from_rows(&rows)
            .unwrap_err()
            .is_shape_mismatch());
    }

    #[test]
    fn test_apply_multiplies_rows() {
        let m = MuellerMatrix::new([
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, 1.0],
        ]);
        let out = m.apply(&StokesVector::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(out, StokesVector::new(10.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_format_values_round_trips_text() {
        assert_eq!(format_values(&[0.5, 1.0, -0.25, 0.0]), "0.5, 1.0, -0.25, 0.0");
    }

    #[test]
    fn test_display() {
        assert_eq!(StokesVector::unpolarized().to_string(), "[1.0, 0.0, 0.0, 0.0]");
        assert!(MuellerMatrix::identity()
            .to_string()
            .starts_with("[[1.0, 0.0, 0.0, 0.0], [0.0, 1.0"));
    }
}
