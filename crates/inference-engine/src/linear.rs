//! Logistic Regression Classifier

use crate::engine::Classifier;
use crate::{InferenceError, ModelLoadError};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_threshold() -> f64 {
    0.5
}

/// Logistic regression exported as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight per input feature, in model input order
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Minimum positive-class probability for label 1
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Optional feature names recorded at training time
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feature_names: Vec<String>,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            threshold: default_threshold(),
            feature_names: Vec::new(),
        }
    }

    /// Read and validate a JSON artifact
    pub fn from_path(path: &Path) -> Result<Self, ModelLoadError> {
        let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self =
            serde_json::from_slice(&bytes).map_err(|e| ModelLoadError::Deserialize {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.coefficients.is_empty() {
            return Err(ModelLoadError::InvalidModel(
                "logistic regression has no coefficients".to_string(),
            ));
        }
        if !self.coefficients.iter().all(|c| c.is_finite()) || !self.intercept.is_finite() {
            return Err(ModelLoadError::InvalidModel(
                "logistic regression weights must be finite".to_string(),
            ));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(ModelLoadError::InvalidModel(format!(
                "threshold {} must lie strictly between 0 and 1",
                self.threshold
            )));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.coefficients.len() {
            return Err(ModelLoadError::InvalidModel(format!(
                "{} feature names for {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        Ok(())
    }

    /// Linear score before the sigmoid
    pub fn decision_function(&self, row: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    /// Positive-class probability
    pub fn probability(&self, row: &[f64]) -> f64 {
        1.0 / (1.0 + (-self.decision_function(row)).exp())
    }
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> &'static str {
        "logistic_regression"
    }

    fn input_width(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_row(&self, row: &[f64]) -> Result<i64, InferenceError> {
        if row.len() != self.coefficients.len() {
            return Err(InferenceError::InvalidInputShape {
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }

        let probability = self.probability(row);
        if probability.is_nan() {
            return Err(InferenceError::InferenceFailed(
                "logistic regression produced NaN".to_string(),
            ));
        }
        Ok(i64::from(probability >= self.threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_and_threshold() {
        let model = LogisticRegression::new(vec![2.0, -1.0], 0.0);
        assert!((model.probability(&[0.0, 0.0]) - 0.5).abs() < 1e-12);
        assert_eq!(model.predict_row(&[1.0, 0.0]).unwrap(), 1);
        assert_eq!(model.predict_row(&[0.0, 1.0]).unwrap(), 0);
    }

    #[test]
    fn test_threshold_default_from_json() {
        let model: LogisticRegression =
            serde_json::from_str(r#"{"coefficients": [1.0], "intercept": 0.0}"#).unwrap();
        assert_eq!(model.threshold, 0.5);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(LogisticRegression::new(vec![], 0.0).validate().is_err());
        assert!(LogisticRegression::new(vec![f64::NAN], 0.0).validate().is_err());

        let mut model = LogisticRegression::new(vec![1.0, 1.0], 0.0);
        model.threshold = 1.0;
        assert!(model.validate().is_err());

        model.threshold = 0.5;
        model.feature_names = vec!["gender".to_string()];
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_row_width_checked() {
        let model = LogisticRegression::new(vec![1.0, 1.0], 0.0);
        assert_eq!(
            model.predict_row(&[1.0]),
            Err(InferenceError::InvalidInputShape {
                expected: 2,
                actual: 1
            })
        );
    }
}
