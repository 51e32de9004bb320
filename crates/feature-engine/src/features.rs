//! Feature Vector Assembly

use crate::application::{Dependents, Education, Gender, PropertyArea, RawApplication, YesNo};
use crate::error::EncodingError;
use crate::validator::{EncoderConfig, Validator};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features the classifier was trained on
pub const FEATURE_DIMENSION: usize = 10;

/// Feature names in model input order
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "gender",
    "married",
    "dependents",
    "education",
    "self_employed",
    "combined_income",
    "loan_amount",
    "loan_amount_term",
    "credit_history",
    "property_area",
];

/// Index of the combined income feature
pub const COMBINED_INCOME_INDEX: usize = 5;

/// Fixed-order numeric input for the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedFeatureVector {
    values: Vec<f64>,
}

impl EncodedFeatureVector {
    /// Wrap pre-encoded values without checking their shape.
    ///
    /// The inference gateway rejects vectors whose length does not match
    /// the loaded classifier.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named feature, if present
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(|idx| self.values.get(idx).copied())
    }

    pub fn combined_income(&self) -> Option<f64> {
        self.values.get(COMBINED_INCOME_INDEX).copied()
    }
}

/// Encoder turning raw applications into model input
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder {
    validator: Validator,
}

impl FeatureEncoder {
    /// Create a new encoder
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            validator: Validator::new(config),
        }
    }

    /// Encode a raw application.
    ///
    /// Applicant and coapplicant income collapse into one combined income
    /// feature that takes the applicant income slot.
    pub fn encode(&self, raw: &RawApplication) -> Result<EncodedFeatureVector, EncodingError> {
        let gender = Gender::parse(&raw.gender)?;
        let married = YesNo::parse("married", &raw.married)?;
        let dependents = Dependents::parse(&raw.dependents)?;
        let education = Education::parse(&raw.education)?;
        let self_employed = YesNo::parse("self_employed", &raw.self_employed)?;

        let applicant_income = self
            .validator
            .validate_amount("applicant_income", raw.applicant_income)?;
        let coapplicant_income = self
            .validator
            .validate_amount("coapplicant_income", raw.coapplicant_income)?;
        let loan_amount = self.validator.validate_amount("loan_amount", raw.loan_amount)?;
        let loan_amount_term = self.validator.validate_loan_term(raw.loan_amount_term)?;
        let credit_history = self.validator.validate_credit_history(raw.credit_history)?;

        let property_area = PropertyArea::parse(&raw.property_area)?;

        let combined_income = applicant_income + coapplicant_income;
        if !combined_income.is_finite() {
            return Err(EncodingError::NotFinite {
                field: "combined_income",
            });
        }

        let values = vec![
            gender.code(),
            married.code(),
            dependents.code(),
            education.code(),
            self_employed.code(),
            combined_income,
            loan_amount,
            loan_amount_term,
            credit_history,
            property_area.code(),
        ];
        debug_assert_eq!(values.len(), FEATURE_DIMENSION);

        debug!("Encoded application: {:?}", values);
        Ok(EncodedFeatureVector { values })
    }

    pub fn config(&self) -> &EncoderConfig {
        self.validator.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> RawApplication {
        RawApplication {
            gender: "Male".to_string(),
            married: "Yes".to_string(),
            dependents: "0".to_string(),
            education: "Graduate".to_string(),
            self_employed: "No".to_string(),
            applicant_income: 5000.0,
            coapplicant_income: 0.0,
            loan_amount: 100.0,
            loan_amount_term: 360.0,
            credit_history: 1.0,
            property_area: "Urban".to_string(),
        }
    }

    #[test]
    fn test_reference_application() {
        let encoder = FeatureEncoder::default();
        let vector = encoder.encode(&sample()).unwrap();
        assert_eq!(
            vector.as_slice(),
            &[1.0, 1.0, 0.0, 1.0, 0.0, 5000.0, 100.0, 360.0, 1.0, 2.0]
        );
    }

    #[test]
    fn test_income_aggregation_takes_applicant_slot() {
        let encoder = FeatureEncoder::default();
        let raw = RawApplication {
            applicant_income: 4583.0,
            coapplicant_income: 1508.0,
            loan_amount: 128.0,
            ..sample()
        };
        let vector = encoder.encode(&raw).unwrap();

        assert_eq!(vector.len(), FEATURE_DIMENSION);
        assert_eq!(vector.combined_income(), Some(6091.0));
        assert_eq!(vector.get("loan_amount"), Some(128.0));
        assert!(!vector.as_slice().contains(&4583.0));
        assert!(!vector.as_slice().contains(&1508.0));
    }

    #[test]
    fn test_three_plus_dependents() {
        let encoder = FeatureEncoder::default();
        let raw = RawApplication {
            dependents: "3+".to_string(),
            ..sample()
        };
        assert_eq!(encoder.encode(&raw).unwrap().get("dependents"), Some(3.0));
    }

    #[test]
    fn test_unknown_dependents_rejected() {
        let encoder = FeatureEncoder::default();
        let raw = RawApplication {
            dependents: "5".to_string(),
            ..sample()
        };
        let err = encoder.encode(&raw).unwrap_err();
        assert_eq!(err.field(), "dependents");
    }

    #[test]
    fn test_non_label_categories_rejected() {
        let encoder = FeatureEncoder::default();
        let cases = [
            ("dependents", RawApplication { dependents: "3".to_string(), ..sample() }),
            ("dependents", RawApplication { dependents: " 3+ ".to_string(), ..sample() }),
            ("gender", RawApplication { gender: "1".to_string(), ..sample() }),
            ("education", RawApplication { education: "not_graduate".to_string(), ..sample() }),
            ("education", RawApplication { education: "NOT GRADUATE".to_string(), ..sample() }),
        ];

        for (field, raw) in cases {
            assert!(matches!(
                encoder.encode(&raw),
                Err(EncodingError::UnknownCategory { field: f, .. }) if f == field
            ));
        }
    }

    #[test]
    fn test_loan_term_at_and_above_maximum() {
        let encoder = FeatureEncoder::new(EncoderConfig {
            max_loan_term_months: 480,
        });
        let at_max = RawApplication {
            loan_amount_term: 480.0,
            ..sample()
        };
        assert!(encoder.encode(&at_max).is_ok());

        let above = RawApplication {
            loan_amount_term: 481.0,
            ..sample()
        };
        assert_eq!(encoder.encode(&above).unwrap_err().field(), "loan_amount_term");
    }

    #[test]
    fn test_negative_income_rejected() {
        let encoder = FeatureEncoder::default();
        let raw = RawApplication {
            coapplicant_income: -1.0,
            ..sample()
        };
        assert_eq!(encoder.encode(&raw).unwrap_err().field(), "coapplicant_income");
    }

    #[test]
    fn test_invalid_property_area_rejected() {
        let encoder = FeatureEncoder::default();
        let raw = RawApplication {
            property_area: "Suburban".to_string(),
            ..sample()
        };
        assert!(matches!(
            encoder.encode(&raw),
            Err(EncodingError::UnknownCategory { field: "property_area", .. })
        ));
    }

    fn any_application() -> impl Strategy<Value = RawApplication> {
        (
            prop::sample::select(Gender::LABELS.to_vec()),
            prop::sample::select(YesNo::LABELS.to_vec()),
            prop::sample::select(Dependents::LABELS.to_vec()),
            prop::sample::select(Education::LABELS.to_vec()),
            prop::sample::select(YesNo::LABELS.to_vec()),
            0.0..1.0e6f64,
            0.0..1.0e6f64,
            0.0..1.0e5f64,
            0u32..=480,
            prop::sample::select(vec![0.0, 1.0]),
            prop::sample::select(PropertyArea::LABELS.to_vec()),
        )
            .prop_map(
                |(g, m, d, e, s, ai, ci, la, term, ch, pa)| RawApplication {
                    gender: g.to_string(),
                    married: m.to_string(),
                    dependents: d.to_string(),
                    education: e.to_string(),
                    self_employed: s.to_string(),
                    applicant_income: ai,
                    coapplicant_income: ci,
                    loan_amount: la,
                    loan_amount_term: f64::from(term),
                    credit_history: ch,
                    property_area: pa.to_string(),
                },
            )
    }

    proptest! {
        #[test]
        fn prop_valid_applications_encode_to_fixed_shape(raw in any_application()) {
            let encoder = FeatureEncoder::default();
            let vector = encoder.encode(&raw).unwrap();

            prop_assert_eq!(vector.len(), FEATURE_DIMENSION);
            prop_assert_eq!(
                vector.combined_income(),
                Some(raw.applicant_income + raw.coapplicant_income)
            );
            prop_assert_eq!(vector.get("loan_amount"), Some(raw.loan_amount));
            prop_assert_eq!(vector.get("loan_amount_term"), Some(raw.loan_amount_term));
            prop_assert_eq!(vector.get("credit_history"), Some(raw.credit_history));
        }

        #[test]
        fn prop_encoding_is_deterministic(raw in any_application()) {
            let encoder = FeatureEncoder::default();
            prop_assert_eq!(encoder.encode(&raw).unwrap(), encoder.encode(&raw).unwrap());
        }
    }
}
