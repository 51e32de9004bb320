//! Prediction Pipeline
//!
//! Orchestrates encode, infer, and decode for a single loan application.

mod formatter;
mod service;

pub use formatter::{PredictionResult, ResultFormatter, STATUS_ACCEPTED, STATUS_NOT_ACCEPTED};
pub use service::PredictionService;

use feature_engine::EncodingError;
use inference_engine::InferenceError;
use thiserror::Error;

/// Pipeline failure tagged with the stage that produced it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),
    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
}

impl PredictionError {
    pub fn stage(&self) -> &'static str {
        match self {
            PredictionError::Encoding(_) => "encoding",
            PredictionError::Inference(_) => "inference",
        }
    }
}
