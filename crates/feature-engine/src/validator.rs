//! Numeric Range Checking for Raw Fields

use crate::error::EncodingError;
use serde::{Deserialize, Serialize};

/// Default upper bound for the loan term (40 years)
pub const DEFAULT_MAX_LOAN_TERM_MONTHS: u32 = 480;

/// Encoder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Longest loan term accepted, in months (inclusive)
    pub max_loan_term_months: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_loan_term_months: DEFAULT_MAX_LOAN_TERM_MONTHS,
        }
    }
}

/// Range checks applied to the numeric fields before encoding
#[derive(Debug, Clone)]
pub struct Validator {
    config: EncoderConfig,
}

impl Validator {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against an inclusive range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<f64, EncodingError> {
        if !value.is_finite() {
            return Err(EncodingError::NotFinite { field });
        }
        if value < range.0 || value > range.1 {
            Err(EncodingError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(value)
        }
    }

    /// Validate a non-negative amount (incomes, loan amount)
    pub fn validate_amount(&self, field: &'static str, value: f64) -> Result<f64, EncodingError> {
        self.validate_range(field, value, (0.0, f64::MAX))
    }

    /// Validate the loan term against the configured maximum
    pub fn validate_loan_term(&self, months: f64) -> Result<f64, EncodingError> {
        let field = "loan_amount_term";
        let months = self.validate_range(
            field,
            months,
            (0.0, f64::from(self.config.max_loan_term_months)),
        )?;
        if months.fract() != 0.0 {
            return Err(EncodingError::NotIntegral { field, value: months });
        }
        Ok(months)
    }

    /// Credit history is a flag and passes through unchanged
    pub fn validate_credit_history(&self, value: f64) -> Result<f64, EncodingError> {
        if value == 0.0 || value == 1.0 {
            Ok(value)
        } else if !value.is_finite() {
            Err(EncodingError::NotFinite { field: "credit_history" })
        } else {
            Err(EncodingError::UnknownCategory {
                field: "credit_history",
                value: value.to_string(),
                expected: "1.0, 0.0",
            })
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}
