//! Encoding Error Types

use thiserror::Error;

/// Errors while turning a raw application into a feature vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    /// Categorical value outside its enumerated set
    #[error("{field} has unrecognized value {value:?} (expected one of: {expected})")]
    UnknownCategory {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Numeric value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite numeric value
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Fractional value where a whole number is required
    #[error("{field} must be a whole number, got {value}")]
    NotIntegral { field: &'static str, value: f64 },
}

impl EncodingError {
    /// Name of the field that failed to encode
    pub fn field(&self) -> &'static str {
        match self {
            EncodingError::UnknownCategory { field, .. }
            | EncodingError::OutOfRange { field, .. }
            | EncodingError::NotFinite { field }
            | EncodingError::NotIntegral { field, .. } => field,
        }
    }
}
