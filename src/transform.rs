//! Transform engine: applies a Mueller matrix to a Stokes vector.

use crate::core::{MuellerMatrix, Result, StokesVector};

/// Apply `matrix` to `input`, returning the output Stokes vector.
///
/// The matrix is given as rows of numbers. Fails with
/// [`Error::ShapeMismatch`](crate::core::Error::ShapeMismatch) unless it is
/// exactly 4×4 and `input` holds exactly four values. No rounding is applied.
pub fn transform<R: AsRef<[f64]>>(matrix: &[R], input: &[f64]) -> Result<StokesVector> {
    let matrix = MuellerMatrix::from_rows(matrix)?;
    let input = StokesVector::from_slice(input)?;
    Ok(matrix.apply(&input))
}
