//! Loan Predictor API Server
//!
//! Serves the interactive form and the JSON prediction endpoint on top of
//! one shared prediction pipeline.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use feature_engine::{FeatureEncoder, FEATURE_DIMENSION};
use inference_engine::{ModelGateway, ModelInfo};
use metrics_exporter_prometheus::PrometheusHandle;
use prediction::PredictionService;
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::GovernorLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod error;
mod html;
pub mod rate_limit;
pub mod routes;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{ApiError, StartupError};
pub use telemetry::init_logging;

use rate_limit::{create_governor_config, RateLimitConfig};

/// Application state shared across handlers; immutable after startup
pub struct AppState {
    /// Prediction pipeline
    pub service: PredictionService,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Prometheus render handle, absent when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state
    pub fn new(service: PredictionService) -> Self {
        Self {
            service,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub uptime_seconds: u64,
    pub model: ModelInfo,
}

/// Create the application router
pub fn create_router(
    state: Arc<AppState>,
    rate_limit: &RateLimitConfig,
) -> Result<Router, StartupError> {
    let predictions = Router::new()
        .route("/", get(routes::form::show).post(routes::form::submit))
        .route("/predict", post(routes::predict::predict));

    let predictions = if rate_limit.enabled {
        predictions.layer(GovernorLayer {
            config: create_governor_config(rate_limit)?,
        })
    } else {
        predictions
    };

    Ok(Router::new()
        .merge(predictions)
        .route("/model-info", get(routes::info::model_info))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model: state.service.model_info(),
    })
}

/// The router only exists once the model has loaded
async fn ready_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ready" }))
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Load the classifier and build the shared pipeline; any failure is fatal
pub fn build_service(config: &AppConfig) -> Result<PredictionService, StartupError> {
    let gateway = ModelGateway::load(&config.model.path, config.model.input_width)?;
    if gateway.input_width() != FEATURE_DIMENSION {
        return Err(StartupError::WidthMismatch {
            model: gateway.input_width(),
            encoder: FEATURE_DIMENSION,
        });
    }

    let encoder = FeatureEncoder::new(config.encoder.clone());
    Ok(PredictionService::new(encoder, gateway))
}

/// Run the server
pub async fn run_server(config: AppConfig) -> Result<(), StartupError> {
    let service = build_service(&config)?;
    let metrics = telemetry::install_metrics()?;

    let state = Arc::new(AppState::new(service).with_metrics(metrics));
    let app = create_router(state, &config.rate_limit)?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting API server on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
