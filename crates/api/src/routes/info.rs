//! Model Information Page

use axum::{extract::State, response::Html};
use feature_engine::RAW_FIELD_COUNT;
use std::sync::Arc;

use crate::html::{escape, layout};
use crate::AppState;

/// Display name and help text per raw field, in positional order
pub(crate) const FIELD_HELP: [(&str, &str); RAW_FIELD_COUNT] = [
    ("Gender", "Male or Female."),
    ("Marital Status", "Whether the applicant is married."),
    ("Dependents", "Number of people relying on the applicant financially (0, 1, 2, 3+)."),
    ("Education Level", "Graduate or Not Graduate."),
    ("Self Employed", "Whether the applicant works for themselves."),
    ("Applicant's Income", "Income of the primary applicant."),
    ("Coapplicant's Income", "Income of the person applying jointly; added to the applicant's income."),
    ("Loan Amount Requested", "Total amount requested."),
    ("Loan Amount Term", "Repayment duration in months."),
    ("Credit History", "1.0 if the applicant has a good repayment record, 0.0 otherwise."),
    ("Property Area", "Urban, Semiurban or Rural."),
];

/// Explain the inputs and describe the loaded classifier
pub async fn model_info(State(state): State<Arc<AppState>>) -> Html<String> {
    let info = state.service.model_info();

    let fields: String = FIELD_HELP
        .iter()
        .map(|(name, help)| format!("<li><strong>{}:</strong> {}</li>\n", escape(name), escape(help)))
        .collect();

    let body = format!(
        "<p>This application predicts the approval status of a bank loan from the details \
on the main page, using a pre-trained classifier.</p>\n\
<h2>Loaded model</h2>\n<ul>\n<li>Kind: {kind}</li>\n<li>Input features: {width}</li>\n\
<li>Maximum loan term: {max_term} months</li>\n</ul>\n\
<h2>Inputs</h2>\n<ul>\n{fields}</ul>\n",
        kind = escape(info.kind),
        width = info.input_width,
        max_term = state.service.encoder().config().max_loan_term_months,
    );

    Html(layout("Model Information", &body))
}
