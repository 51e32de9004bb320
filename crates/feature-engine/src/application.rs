//! Raw Loan Application Fields

use crate::error::EncodingError;
use serde::{Deserialize, Serialize};

/// Number of raw fields collected from an applicant
pub const RAW_FIELD_COUNT: usize = 11;

/// Raw field names in their fixed positional order
pub const RAW_FIELD_NAMES: [&str; RAW_FIELD_COUNT] = [
    "gender",
    "married",
    "dependents",
    "education",
    "self_employed",
    "applicant_income",
    "coapplicant_income",
    "loan_amount",
    "loan_amount_term",
    "credit_history",
    "property_area",
];

/// Unencoded applicant-supplied fields.
///
/// Categorical fields hold whatever text the front end received; they are
/// only checked against their enumerated sets by the encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawApplication {
    pub gender: String,
    pub married: String,
    pub dependents: String,
    pub education: String,
    pub self_employed: String,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    /// Loan term in months
    pub loan_amount_term: f64,
    /// 1.0 for a good history, 0.0 for a bad one
    pub credit_history: f64,
    pub property_area: String,
}

/// Applicant gender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const LABELS: [&'static str; 2] = ["Male", "Female"];
    const ALL: [Self; 2] = [Gender::Male, Gender::Female];

    pub fn parse(raw: &str) -> Result<Self, EncodingError> {
        match raw {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            _ => Err(unknown("gender", raw, "Male, Female")),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Variant whose encoded value is `code`
    pub fn from_code(code: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn code(self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }
}

/// Yes/No answer used by the married and self-employed fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const LABELS: [&'static str; 2] = ["Yes", "No"];
    const ALL: [Self; 2] = [YesNo::Yes, YesNo::No];

    pub fn parse(field: &'static str, raw: &str) -> Result<Self, EncodingError> {
        match raw {
            "Yes" => Ok(YesNo::Yes),
            "No" => Ok(YesNo::No),
            _ => Err(unknown(field, raw, "Yes, No")),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn from_code(code: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn code(self) -> f64 {
        match self {
            YesNo::Yes => 1.0,
            YesNo::No => 0.0,
        }
    }
}

/// Number of dependents, with "3+" collapsed to 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependents {
    Zero,
    One,
    Two,
    ThreeOrMore,
}

impl Dependents {
    pub const LABELS: [&'static str; 4] = ["0", "1", "2", "3+"];
    const ALL: [Self; 4] = [
        Dependents::Zero,
        Dependents::One,
        Dependents::Two,
        Dependents::ThreeOrMore,
    ];

    pub fn parse(raw: &str) -> Result<Self, EncodingError> {
        match raw {
            "0" => Ok(Dependents::Zero),
            "1" => Ok(Dependents::One),
            "2" => Ok(Dependents::Two),
            "3+" => Ok(Dependents::ThreeOrMore),
            _ => Err(unknown("dependents", raw, "0, 1, 2, 3+")),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dependents::Zero => "0",
            Dependents::One => "1",
            Dependents::Two => "2",
            Dependents::ThreeOrMore => "3+",
        }
    }

    pub fn from_code(code: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn code(self) -> f64 {
        match self {
            Dependents::Zero => 0.0,
            Dependents::One => 1.0,
            Dependents::Two => 2.0,
            Dependents::ThreeOrMore => 3.0,
        }
    }
}

/// Highest education level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Education {
    Graduate,
    NotGraduate,
}

impl Education {
    pub const LABELS: [&'static str; 2] = ["Graduate", "Not Graduate"];
    const ALL: [Self; 2] = [Education::Graduate, Education::NotGraduate];

    pub fn parse(raw: &str) -> Result<Self, EncodingError> {
        match raw {
            "Graduate" => Ok(Education::Graduate),
            "Not Graduate" => Ok(Education::NotGraduate),
            _ => Err(unknown("education", raw, "Graduate, Not Graduate")),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Education::Graduate => "Graduate",
            Education::NotGraduate => "Not Graduate",
        }
    }

    pub fn from_code(code: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn code(self) -> f64 {
        match self {
            Education::Graduate => 1.0,
            Education::NotGraduate => 0.0,
        }
    }
}

/// Location of the property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyArea {
    Urban,
    Semiurban,
    Rural,
}

impl PropertyArea {
    pub const LABELS: [&'static str; 3] = ["Urban", "Semiurban", "Rural"];
    const ALL: [Self; 3] = [PropertyArea::Urban, PropertyArea::Semiurban, PropertyArea::Rural];

    pub fn parse(raw: &str) -> Result<Self, EncodingError> {
        match raw {
            "Urban" => Ok(PropertyArea::Urban),
            "Semiurban" => Ok(PropertyArea::Semiurban),
            "Rural" => Ok(PropertyArea::Rural),
            _ => Err(unknown("property_area", raw, "Urban, Semiurban, Rural")),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyArea::Urban => "Urban",
            PropertyArea::Semiurban => "Semiurban",
            PropertyArea::Rural => "Rural",
        }
    }

    pub fn from_code(code: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn code(self) -> f64 {
        match self {
            PropertyArea::Urban => 2.0,
            PropertyArea::Semiurban => 1.0,
            PropertyArea::Rural => 0.0,
        }
    }
}

fn unknown(field: &'static str, raw: &str, expected: &'static str) -> EncodingError {
    EncodingError::UnknownCategory {
        field,
        value: raw.to_string(),
        expected,
    }
}
