//! Feature Encoding Engine
//!
//! Turns raw loan application fields into the fixed-order numeric vector
//! the approval classifier was trained on.

mod application;
mod error;
mod features;
mod validator;

pub use application::{
    Dependents, Education, Gender, PropertyArea, RawApplication, YesNo, RAW_FIELD_COUNT,
    RAW_FIELD_NAMES,
};
pub use error::EncodingError;
pub use features::{
    EncodedFeatureVector, FeatureEncoder, COMBINED_INCOME_INDEX, FEATURE_DIMENSION, FEATURE_NAMES,
};
pub use validator::{EncoderConfig, Validator, DEFAULT_MAX_LOAN_TERM_MONTHS};
