//! Mueller matrix calculator.
//!
//! Applies the Mueller matrix of a linear optical element to a Stokes vector
//! and reports the degree of polarization of the result.
//!
//! ```rust
//! use mueller::{analyze, transform};
//!
//! let polarizer = [
//!     [0.5, 0.5, 0.0, 0.0],
//!     [0.5, 0.5, 0.0, 0.0],
//!     [0.0, 0.0, 0.0, 0.0],
//!     [0.0, 0.0, 0.0, 0.0],
//! ];
//! let output = transform(&polarizer, &[1.0, 0.0, 0.0, 0.0]).unwrap();
//! let report = analyze(output.as_ref()).unwrap();
//! assert_eq!(report.degree_of_polarization, 1.0);
//! assert_eq!(report.label(), "Fully polarized light");
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod polarization;
pub mod shell;
pub mod transform;

// Re-export commonly used types
pub use crate::core::{Error, MuellerMatrix, Result, StokesVector};

pub use crate::polarization::{
    analyze, degree_of_polarization, PolarizationClass, PolarizationReport,
};

pub use crate::transform::transform;

pub use crate::shell::{Calculation, ShellState};

pub use crate::config::{MuellerConfig, Preset};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
