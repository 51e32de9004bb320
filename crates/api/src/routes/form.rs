//! Interactive Form Routes

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use feature_engine::{
    Dependents, Education, Gender, PropertyArea, RawApplication, YesNo, RAW_FIELD_NAMES,
};
use prediction::PredictionResult;
use serde::Deserialize;
use std::sync::Arc;

use super::info::FIELD_HELP;
use crate::html::{escape, layout};
use crate::AppState;

const TITLE: &str = "Loan Approval Prediction";

/// Submitted form fields, kept as text so bad numbers can be reported inline
#[derive(Debug, Clone, Deserialize)]
#[serde(default = "LoanForm::blank")]
pub struct LoanForm {
    pub gender: String,
    pub married: String,
    pub dependents: String,
    pub education: String,
    pub self_employed: String,
    pub applicant_income: String,
    pub coapplicant_income: String,
    pub loan_amount: String,
    pub loan_amount_term: String,
    pub credit_history: String,
    pub property_area: String,
}

impl Default for LoanForm {
    fn default() -> Self {
        Self {
            gender: Gender::LABELS[0].to_string(),
            married: YesNo::LABELS[0].to_string(),
            dependents: Dependents::LABELS[0].to_string(),
            education: Education::LABELS[0].to_string(),
            self_employed: YesNo::LABELS[0].to_string(),
            applicant_income: "0".to_string(),
            coapplicant_income: "0".to_string(),
            loan_amount: "0".to_string(),
            loan_amount_term: "360".to_string(),
            credit_history: CREDIT_HISTORY_OPTIONS[0].to_string(),
            property_area: PropertyArea::LABELS[0].to_string(),
        }
    }
}

const CREDIT_HISTORY_OPTIONS: [&str; 2] = ["1.0", "0.0"];

impl LoanForm {
    /// Missing fields deserialize as empty text and fail validation
    fn blank() -> Self {
        Self {
            gender: String::new(),
            married: String::new(),
            dependents: String::new(),
            education: String::new(),
            self_employed: String::new(),
            applicant_income: String::new(),
            coapplicant_income: String::new(),
            loan_amount: String::new(),
            loan_amount_term: String::new(),
            credit_history: String::new(),
            property_area: String::new(),
        }
    }

    /// Parse the numeric inputs; categorical text is left to the encoder
    pub fn to_raw(&self) -> Result<RawApplication, String> {
        Ok(RawApplication {
            gender: self.gender.clone(),
            married: self.married.clone(),
            dependents: self.dependents.clone(),
            education: self.education.clone(),
            self_employed: self.self_employed.clone(),
            applicant_income: parse_number("Applicant's Income", &self.applicant_income)?,
            coapplicant_income: parse_number("Coapplicant's Income", &self.coapplicant_income)?,
            loan_amount: parse_number("Loan Amount Requested", &self.loan_amount)?,
            loan_amount_term: parse_number("Loan Amount Term", &self.loan_amount_term)?,
            credit_history: parse_number("Credit History", &self.credit_history)?,
            property_area: self.property_area.clone(),
        })
    }
}

fn parse_number(label: &str, text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| format!("{label} must be a number, got {text:?}"))
}

/// Outcome shown above the form
#[derive(Debug)]
pub enum Outcome {
    Decision(PredictionResult),
    Error(String),
}

/// Render the empty form
pub async fn show(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render(&LoanForm::default(), max_term(&state), None))
}

/// Handle a form submission
pub async fn submit(
    State(state): State<Arc<AppState>>,
    payload: Result<Form<LoanForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let form = match payload {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let outcome = Outcome::Error(rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Html(render(&LoanForm::default(), max_term(&state), Some(&outcome))),
            );
        }
    };

    let outcome = match form.to_raw() {
        Ok(raw) => match state.service.predict(&raw) {
            Ok(result) => Outcome::Decision(result),
            Err(e) => Outcome::Error(e.to_string()),
        },
        Err(message) => Outcome::Error(message),
    };

    let status = match outcome {
        Outcome::Decision(_) => StatusCode::OK,
        Outcome::Error(_) => StatusCode::BAD_REQUEST,
    };
    (status, Html(render(&form, max_term(&state), Some(&outcome))))
}

fn max_term(state: &AppState) -> u32 {
    state.service.encoder().config().max_loan_term_months
}

fn hint(name: &str) -> &'static str {
    RAW_FIELD_NAMES
        .iter()
        .position(|field| *field == name)
        .map_or("", |index| FIELD_HELP[index].1)
}

fn select(name: &str, label: &str, options: &[&str], current: &str) -> String {
    let options: String = options
        .iter()
        .map(|option| {
            let selected = if *option == current {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{value}\"{selected}>{value}</option>",
                value = escape(option)
            )
        })
        .collect();
    format!(
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\" title=\"{hint}\">\
{options}</select>\n<small class=\"hint\">{hint}</small>\n",
        hint = escape(hint(name))
    )
}

fn number(name: &str, label: &str, value: &str, max: Option<u32>) -> String {
    let max = max.map(|m| format!(" max=\"{m}\"")).unwrap_or_default();
    format!(
        "<label for=\"{name}\">{label}</label>\n<input type=\"number\" id=\"{name}\" name=\"{name}\" \
min=\"0\"{max} step=\"any\" value=\"{value}\" title=\"{hint}\">\n<small class=\"hint\">{hint}</small>\n",
        value = escape(value),
        hint = escape(hint(name))
    )
}

/// Render the form page with an optional outcome banner
pub fn render(form: &LoanForm, max_term: u32, outcome: Option<&Outcome>) -> String {
    let banner = match outcome {
        Some(Outcome::Decision(result)) => {
            let class = if result.is_approved() { "accepted" } else { "rejected" };
            format!(
                "<div class=\"banner {class}\" id=\"status\"><h2>{}</h2></div>\n",
                escape(result.status)
            )
        }
        Some(Outcome::Error(message)) => format!(
            "<div class=\"banner error\" id=\"error\" role=\"alert\">{}</div>\n",
            escape(message)
        ),
        None => String::new(),
    };

    let mut body = String::new();
    body.push_str("<p>Fill out the form below to see if your loan application will be approved.</p>\n");
    body.push_str(&banner);
    body.push_str("<form method=\"post\" action=\"/\">\n");
    body.push_str(&select("gender", "Gender:", &Gender::LABELS, &form.gender));
    body.push_str(&select("married", "Marital Status:", &YesNo::LABELS, &form.married));
    body.push_str(&select("dependents", "Dependents:", &Dependents::LABELS, &form.dependents));
    body.push_str(&select("education", "Education Level:", &Education::LABELS, &form.education));
    body.push_str(&select("self_employed", "Self Employed:", &YesNo::LABELS, &form.self_employed));
    body.push_str(&number("applicant_income", "Applicant's Income:", &form.applicant_income, None));
    body.push_str(&number("coapplicant_income", "Coapplicant's Income:", &form.coapplicant_income, None));
    body.push_str(&number("loan_amount", "Loan Amount Requested:", &form.loan_amount, None));
    body.push_str(&number(
        "loan_amount_term",
        "Loan Amount Term (months):",
        &form.loan_amount_term,
        Some(max_term),
    ));
    body.push_str(&select("credit_history", "Credit History:", &CREDIT_HISTORY_OPTIONS, &form.credit_history));
    body.push_str(&select("property_area", "Property Area:", &PropertyArea::LABELS, &form.property_area));
    body.push_str("<button type=\"submit\">Check Loan Status</button>\n</form>");

    layout(TITLE, &body)
}
