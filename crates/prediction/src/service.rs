//! Prediction Service Implementation

use crate::formatter::{PredictionResult, ResultFormatter};
use crate::PredictionError;
use feature_engine::{FeatureEncoder, RawApplication};
use inference_engine::{ModelGateway, ModelInfo};
use metrics::{counter, histogram};
use tracing::{debug, info, warn};

/// Encode, infer, and decode pipeline shared by every front end
#[derive(Debug, Clone)]
pub struct PredictionService {
    encoder: FeatureEncoder,
    gateway: ModelGateway,
    formatter: ResultFormatter,
}

impl PredictionService {
    /// Create a new prediction service
    pub fn new(encoder: FeatureEncoder, gateway: ModelGateway) -> Self {
        info!(
            "Creating prediction service: max_loan_term={} model={:?}",
            encoder.config().max_loan_term_months,
            gateway.describe()
        );
        Self {
            encoder,
            gateway,
            formatter: ResultFormatter,
        }
    }

    /// Predict the outcome for one application, stopping at the first failing stage
    pub fn predict(&self, raw: &RawApplication) -> Result<PredictionResult, PredictionError> {
        let start = std::time::Instant::now();

        let outcome = self
            .encoder
            .encode(raw)
            .map_err(PredictionError::from)
            .and_then(|vector| self.gateway.infer(&vector).map_err(PredictionError::from))
            .map(|label| self.formatter.format(label));

        histogram!("loan_prediction_duration_seconds").record(start.elapsed().as_secs_f64());

        match &outcome {
            Ok(result) => {
                let label = if result.is_approved() { "approved" } else { "not_approved" };
                counter!("loan_predictions_total", "outcome" => label).increment(1);
                debug!("Prediction: {}", result.status);
            }
            Err(e) => {
                counter!("loan_prediction_errors_total", "stage" => e.stage()).increment(1);
                warn!(stage = e.stage(), "Prediction rejected: {}", e);
            }
        }

        outcome
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    pub fn model_info(&self) -> ModelInfo {
        self.gateway.describe()
    }
}
