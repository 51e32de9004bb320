//! Model Gateway Implementation

use crate::linear::LogisticRegression;
use crate::onnx::OnnxClassifier;
use crate::{InferenceError, ModelLoadError};
use feature_engine::EncodedFeatureVector;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Binary decision returned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Approved,
    NotApproved,
}

impl Label {
    /// Map a raw class label; only 1 means approved
    pub fn from_raw(raw: i64) -> Self {
        if raw == 1 {
            Label::Approved
        } else {
            Label::NotApproved
        }
    }

    pub fn as_raw(&self) -> i64 {
        match self {
            Label::Approved => 1,
            Label::NotApproved => 0,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Label::Approved)
    }
}

/// Pre-trained binary classifier.
///
/// Implementations are immutable after construction and must be safe to
/// share across request handlers.
pub trait Classifier: Send + Sync {
    /// Short name of the model family, for logs and the info page
    fn kind(&self) -> &'static str;

    /// Number of features expected per row
    fn input_width(&self) -> usize;

    /// Raw class label for a single row
    fn predict_row(&self, row: &[f64]) -> Result<i64, InferenceError>;
}

/// Public description of the loaded model (never includes its path)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub kind: &'static str,
    pub input_width: usize,
}

/// Gateway owning the loaded classifier
#[derive(Clone)]
pub struct ModelGateway {
    classifier: Arc<dyn Classifier>,
}

impl ModelGateway {
    /// Load a classifier artifact, picking the format from its extension.
    ///
    /// `input_width` fixes the input shape for ONNX graphs; JSON artifacts
    /// carry their own width.
    pub fn load(path: impl AsRef<Path>, input_width: usize) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        info!("Loading classifier from {}", path.display());

        if !path.is_file() {
            return Err(ModelLoadError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let classifier: Arc<dyn Classifier> = match extension.as_deref() {
            Some("onnx") => Arc::new(OnnxClassifier::load(path, input_width)?),
            Some("json") => Arc::new(LogisticRegression::from_path(path)?),
            _ => return Err(ModelLoadError::UnsupportedFormat(path.to_path_buf())),
        };

        let gateway = Self::from_classifier(classifier);
        info!(
            "Classifier loaded: kind={}, input_width={}",
            gateway.classifier.kind(),
            gateway.input_width()
        );
        Ok(gateway)
    }

    /// Wrap an already constructed classifier
    pub fn from_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Run the classifier on a single-row batch
    pub fn infer(&self, vector: &EncodedFeatureVector) -> Result<Label, InferenceError> {
        let expected = self.classifier.input_width();
        if vector.len() != expected {
            return Err(InferenceError::InvalidInputShape {
                expected,
                actual: vector.len(),
            });
        }

        let start = std::time::Instant::now();
        let raw = self.classifier.predict_row(vector.as_slice())?;
        let label = Label::from_raw(raw);
        debug!(
            "Inference completed in {}us: raw={} label={:?}",
            start.elapsed().as_micros(),
            raw,
            label
        );

        Ok(label)
    }

    pub fn input_width(&self) -> usize {
        self.classifier.input_width()
    }

    pub fn describe(&self) -> ModelInfo {
        ModelInfo {
            kind: self.classifier.kind(),
            input_width: self.classifier.input_width(),
        }
    }
}

impl std::fmt::Debug for ModelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelGateway")
            .field("kind", &self.classifier.kind())
            .field("input_width", &self.classifier.input_width())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn credit_model() -> LogisticRegression {
        let mut coefficients = vec![0.0; 10];
        coefficients[8] = 8.0;
        LogisticRegression::new(coefficients, -4.0)
    }

    fn write_artifact(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(Label::from_raw(1), Label::Approved);
        assert_eq!(Label::from_raw(0), Label::NotApproved);
        assert_eq!(Label::from_raw(-1), Label::NotApproved);
        assert_eq!(Label::from_raw(2), Label::NotApproved);
        assert_eq!(Label::Approved.as_raw(), 1);
    }

    #[test]
    fn test_infer_single_row() {
        let gateway = ModelGateway::from_classifier(Arc::new(credit_model()));

        let good = EncodedFeatureVector::from_values(vec![
            1.0, 1.0, 0.0, 1.0, 0.0, 5000.0, 100.0, 360.0, 1.0, 2.0,
        ]);
        assert_eq!(gateway.infer(&good).unwrap(), Label::Approved);

        let bad = EncodedFeatureVector::from_values(vec![
            1.0, 1.0, 0.0, 1.0, 0.0, 5000.0, 100.0, 360.0, 0.0, 2.0,
        ]);
        assert_eq!(gateway.infer(&bad).unwrap(), Label::NotApproved);
    }

    #[test]
    fn test_shape_mismatch_is_surfaced() {
        let gateway = ModelGateway::from_classifier(Arc::new(credit_model()));
        let short = EncodedFeatureVector::from_values(vec![1.0; 11]);

        assert_eq!(
            gateway.infer(&short),
            Err(InferenceError::InvalidInputShape {
                expected: 10,
                actual: 11
            })
        );
    }

    #[test]
    fn test_concurrent_inference() {
        let gateway = ModelGateway::from_classifier(Arc::new(credit_model()));
        let vector = EncodedFeatureVector::from_values(vec![
            1.0, 1.0, 0.0, 1.0, 0.0, 5000.0, 100.0, 360.0, 1.0, 2.0,
        ]);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| gateway.infer(&vector).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), Label::Approved);
            }
        });
    }

    #[test]
    fn test_load_json_artifact() {
        let json = serde_json::to_vec(&credit_model()).unwrap();
        let file = write_artifact(".json", &json);

        let gateway = ModelGateway::load(file.path(), 10).unwrap();
        assert_eq!(
            gateway.describe(),
            ModelInfo {
                kind: "logistic_regression",
                input_width: 10
            }
        );
    }

    #[test]
    fn test_missing_artifact() {
        let err = ModelGateway::load("/nonexistent/train_model.onnx", 10).unwrap_err();
        assert!(matches!(err, ModelLoadError::NotFound(_)));
    }

    #[test]
    fn test_corrupt_json_artifact() {
        let file = write_artifact(".json", b"{\"coefficients\": [1.0,");
        let err = ModelGateway::load(file.path(), 10).unwrap_err();
        assert!(matches!(err, ModelLoadError::Deserialize { .. }));
    }

    #[test]
    fn test_corrupt_onnx_artifact() {
        let file = write_artifact(".onnx", b"this is not an onnx graph");
        let err = ModelGateway::load(file.path(), 10).unwrap_err();
        assert!(matches!(err, ModelLoadError::Deserialize { .. }));
    }

    #[test]
    fn test_unsupported_format() {
        let file = write_artifact(".sav", b"pickle");
        let err = ModelGateway::load(file.path(), 10).unwrap_err();
        assert!(matches!(err, ModelLoadError::UnsupportedFormat(_)));
    }
}
