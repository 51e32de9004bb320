//! Loan Approval Inference Engine
//!
//! Owns the pre-trained classifier and exposes a single inference call.
//! ONNX artifacts run on tract-onnx; logistic-regression artifacts are
//! plain JSON.

mod engine;
mod linear;
mod onnx;

pub use engine::{Classifier, Label, ModelGateway, ModelInfo};
pub use linear::LogisticRegression;
pub use onnx::OnnxClassifier;

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading the model artifact at startup
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model artifact not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Model artifact {} is unreadable: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Model artifact {} failed to deserialize: {reason}", path.display())]
    Deserialize { path: PathBuf, reason: String },
    #[error("Unsupported model format for {} (expected .onnx or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

/// Errors during inference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected} features, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
}
