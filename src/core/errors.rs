//! Shared error types for the calculator

use thiserror::Error;

/// Main error type for mueller operations
#[derive(Debug, Error)]
pub enum Error {
    /// A matrix, matrix row or vector has the wrong number of elements
    #[error("Shape mismatch: {what} must have {expected} elements, found {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// Text input could not be turned into numbers
    #[error("Parse error in {field}: {message}")]
    Parse { field: String, message: String },

    /// Preset name not recognised
    #[error("Unknown preset: '{name}'. Valid options: {valid}")]
    UnknownPreset { name: String, valid: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Create a parse error for a named input field
    pub fn parse(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = Error::shape_mismatch("Stokes vector", 4, 3);
        assert_eq!(
            err.to_string(),
            "Shape mismatch: Stokes vector must have 4 elements, found 3"
        );
        assert!(err.is_shape_mismatch());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_parse_message() {
        let err = Error::parse("row 2", "'abc' is not a number");
        assert_eq!(err.to_string(), "Parse error in row 2: 'abc' is not a number");
        assert!(err.is_parse());
    }
}
