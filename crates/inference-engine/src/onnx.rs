//! ONNX Classifier backed by tract

use crate::engine::Classifier;
use crate::{InferenceError, ModelLoadError};
use std::path::Path;
use tract_onnx::prelude::*;

type OnnxPlan = TypedRunnableModel<TypedModel>;

/// ONNX binary classifier (e.g. a scikit-learn export without ZipMap).
///
/// The first graph output must be the predicted class label.
pub struct OnnxClassifier {
    plan: OnnxPlan,
    input_width: usize,
}

impl OnnxClassifier {
    /// Parse, type and optimize the graph for a `f32[1, input_width]` input
    pub fn load(path: &Path, input_width: usize) -> Result<Self, ModelLoadError> {
        if input_width == 0 {
            return Err(ModelLoadError::InvalidModel(
                "ONNX input width must be positive".to_string(),
            ));
        }

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, input_width]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ModelLoadError::Deserialize {
                path: path.to_path_buf(),
                reason: format!("{e:#}"),
            })?;

        Ok(Self { plan, input_width })
    }
}

impl Classifier for OnnxClassifier {
    fn kind(&self) -> &'static str {
        "onnx"
    }

    fn input_width(&self) -> usize {
        self.input_width
    }

    fn predict_row(&self, row: &[f64]) -> Result<i64, InferenceError> {
        if row.len() != self.input_width {
            return Err(InferenceError::InvalidInputShape {
                expected: self.input_width,
                actual: row.len(),
            });
        }

        let row: Vec<f32> = row.iter().map(|v| *v as f32).collect();
        let input = Tensor::from_shape(&[1, self.input_width], &row)
            .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?;

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?;

        let label = outputs
            .first()
            .ok_or_else(|| InferenceError::InferenceFailed("model produced no outputs".to_string()))?
            .cast_to::<i64>()
            .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?;

        label
            .as_slice::<i64>()
            .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?
            .first()
            .copied()
            .ok_or_else(|| InferenceError::InferenceFailed("model returned an empty label".to_string()))
    }
}
