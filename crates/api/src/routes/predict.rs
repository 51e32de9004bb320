//! JSON Prediction Route

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use feature_engine::{
    Dependents, Education, Gender, PropertyArea, RawApplication, YesNo, RAW_FIELD_COUNT,
    RAW_FIELD_NAMES,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

/// Request body: the eleven raw fields in positional order
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub input_data: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub status: &'static str,
}

/// Predict a loan decision
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let raw = raw_application(&request.input_data)?;
    let result = state.service.predict(&raw)?;

    Ok(Json(PredictResponse {
        status: result.status,
    }))
}

/// Build a raw application from positional JSON values.
///
/// Categorical slots take a label, or a JSON number holding the field's
/// encoded value, which is translated to its label. Numeric slots take a
/// number or a numeric string.
pub fn raw_application(values: &[Value]) -> Result<RawApplication, ApiError> {
    if values.len() != RAW_FIELD_COUNT {
        return Err(ApiError::WrongLength {
            expected: RAW_FIELD_COUNT,
            actual: values.len(),
        });
    }

    Ok(RawApplication {
        gender: categorical(values, 0)?,
        married: categorical(values, 1)?,
        dependents: categorical(values, 2)?,
        education: categorical(values, 3)?,
        self_employed: categorical(values, 4)?,
        applicant_income: numeric(values, 5)?,
        coapplicant_income: numeric(values, 6)?,
        loan_amount: numeric(values, 7)?,
        loan_amount_term: numeric(values, 8)?,
        credit_history: numeric(values, 9)?,
        property_area: categorical(values, 10)?,
    })
}

fn invalid(index: usize, reason: impl Into<String>) -> ApiError {
    ApiError::InvalidValue {
        index,
        field: RAW_FIELD_NAMES[index],
        reason: reason.into(),
    }
}

fn categorical(values: &[Value], index: usize) -> Result<String, ApiError> {
    match &values[index] {
        Value::String(text) => Ok(text.clone()),
        // unknown codes pass through as text so the encoder reports them
        Value::Number(number) => Ok(number
            .as_f64()
            .and_then(|code| code_label(index, code))
            .map_or_else(|| number.to_string(), str::to_string)),
        other => Err(invalid(index, format!("expected a string or number, got {other}"))),
    }
}

fn code_label(index: usize, code: f64) -> Option<&'static str> {
    match index {
        0 => Gender::from_code(code).map(Gender::label),
        1 | 4 => YesNo::from_code(code).map(YesNo::label),
        2 => Dependents::from_code(code).map(Dependents::label),
        3 => Education::from_code(code).map(Education::label),
        10 => PropertyArea::from_code(code).map(PropertyArea::label),
        _ => None,
    }
}

fn numeric(values: &[Value], index: usize) -> Result<f64, ApiError> {
    match &values[index] {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| invalid(index, format!("{number} is not representable"))),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(index, format!("{text:?} is not a number"))),
        other => Err(invalid(index, format!("expected a number, got {other}"))),
    }
}
