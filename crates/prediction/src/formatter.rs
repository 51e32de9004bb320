//! Result Formatting

use inference_engine::Label;
use serde::Serialize;

pub const STATUS_ACCEPTED: &str = "Loan Accepted";
pub const STATUS_NOT_ACCEPTED: &str = "Loan Not Accepted";

/// Decision returned to the front ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub label: Label,
    pub status: &'static str,
}

impl PredictionResult {
    pub fn is_approved(&self) -> bool {
        self.label.is_approved()
    }
}

/// Maps classifier labels to user-facing status text
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFormatter;

impl ResultFormatter {
    pub fn format(&self, label: Label) -> PredictionResult {
        let status = match label {
            Label::Approved => STATUS_ACCEPTED,
            Label::NotApproved => STATUS_NOT_ACCEPTED,
        };
        PredictionResult { label, status }
    }
}
