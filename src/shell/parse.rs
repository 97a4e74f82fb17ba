//! Text parsing for matrix rows and Stokes vectors.
//!
//! Input is a comma-separated list of numeric tokens. Every token is trimmed
//! and converted to `f64`; an empty token, a non-numeric or non-finite token
//! (`nan`, `inf`) or the wrong number of tokens is a parse failure, reported
//! before any calculation runs.

use crate::core::{Error, MuellerMatrix, Result, StokesVector, STOKES_LEN};

/// Parse a comma-separated list of numbers of any length
pub fn parse_values(field: &str, text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .enumerate()
        .map(|(position, token)| parse_token(field, position, token.trim()))
        .collect()
}

fn parse_token(field: &str, position: usize, token: &str) -> Result<f64> {
    if token.is_empty() {
        return Err(Error::parse(
            field,
            format!("value {} is empty", position + 1),
        ));
    }
    let value = token
        .parse::<f64>()
        .map_err(|_| Error::parse(field, format!("'{}' is not a number", token)))?;
    if !value.is_finite() {
        return Err(Error::parse(
            field,
            format!("'{}' is not a finite number", token),
        ));
    }
    Ok(value)
}

/// Parse exactly four comma-separated numbers
pub fn parse_four(field: &str, text: &str) -> Result<[f64; STOKES_LEN]> {
    let values = parse_values(field, text)?;
    values.as_slice().try_into().map_err(|_| {
        Error::parse(
            field,
            format!("expected {} values, found {}", STOKES_LEN, values.len()),
        )
    })
}

/// Parse a Stokes vector such as `"1.0, 0.0, 0.0, 0.0"`
pub fn parse_stokes(text: &str) -> Result<StokesVector> {
    parse_four("Stokes vector", text).map(StokesVector::from)
}

/// Parse four row strings into a Mueller matrix
pub fn parse_matrix<S: AsRef<str>>(rows: &[S]) -> Result<MuellerMatrix> {
    if rows.len() != STOKES_LEN {
        return Err(Error::parse(
            "Mueller matrix",
            format!("expected {} rows, found {}", STOKES_LEN, rows.len()),
        ));
    }
    let mut grid = [[0.0; STOKES_LEN]; STOKES_LEN];
    for (index, (target, row)) in grid.iter_mut().zip(rows).enumerate() {
        *target = parse_four(&format!("row {}", index + 1), row.as_ref())?;
    }
    Ok(MuellerMatrix::new(grid))
}
