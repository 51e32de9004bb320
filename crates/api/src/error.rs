//! API and Startup Errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inference_engine::ModelLoadError;
use prediction::PredictionError;
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Conditions that stop the service from accepting requests
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("model load failed: {0}")]
    Model(#[from] ModelLoadError),
    #[error("model expects {model} features but the encoder produces {encoder}")]
    WidthMismatch { model: usize, encoder: usize },
    #[error("invalid rate limit: {0}")]
    RateLimit(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-request failures reported to JSON clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("expected {expected} input values, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("input_data[{index}] ({field}): {reason}")]
    InvalidValue {
        index: usize,
        field: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
