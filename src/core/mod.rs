//! Core data types shared by the transform engine and polarization analyzer

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{format_values, MuellerMatrix, StokesVector, STOKES_LEN};
