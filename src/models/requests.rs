use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::parsing::parse_leading_integer;
use crate::models::domain::ApplicantProfile;

/// Message returned whenever a required applicant field is absent or empty
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// A form value as it arrives in JSON
///
/// Numbers and strings are the expected shapes. Booleans and anything else
/// are kept so they can be judged like the other values instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Zero, `false`, empty and blank values count as not provided
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Number(n) => *n == 0.0 || n.is_nan(),
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Bool(b) => !b,
            FieldValue::Other(value) => value.is_null(),
        }
    }

    /// Numeric reading of the value, `NaN` when it is not a number
    ///
    /// `true` reads as 1. Arrays and objects are never numbers.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed
                    .chars()
                    .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
                {
                    return f64::NAN;
                }
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
            FieldValue::Bool(true) => 1.0,
            FieldValue::Bool(false) => 0.0,
            FieldValue::Other(_) => f64::NAN,
        }
    }

    /// Whole months, reading only the leading integer of text input ("24 months" is 24)
    pub fn as_whole_months(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => parse_leading_integer(s),
            FieldValue::Bool(_) | FieldValue::Other(_) => None,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Other(value) => value.to_string(),
        }
    }
}

fn validate_not_blank(value: &FieldValue) -> Result<(), ValidationError> {
    if value.is_blank() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Request to match lenders for an applicant
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchLendersRequest {
    #[validate(required, custom(function = "validate_not_blank"))]
    #[serde(rename = "netAssets", default)]
    pub net_assets: Option<FieldValue>,
    #[validate(required, custom(function = "validate_not_blank"))]
    #[serde(rename = "prevNetAssets", default)]
    pub prev_net_assets: Option<FieldValue>,
    #[validate(required, custom(function = "validate_not_blank"))]
    #[serde(rename = "tradingTime", default)]
    pub trading_time: Option<FieldValue>,
    #[validate(required, custom(function = "validate_not_blank"))]
    #[serde(rename = "loanAmount", default)]
    pub loan_amount: Option<FieldValue>,
    #[validate(required, custom(function = "validate_not_blank"))]
    #[serde(rename = "companyName", default)]
    pub company_name: Option<FieldValue>,
    #[validate(required, custom(function = "validate_not_blank"))]
    #[serde(rename = "companyAge", default)]
    pub company_age: Option<FieldValue>,
}

/// Errors raised while turning a request into an applicant profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{}: {}", ALL_FIELDS_REQUIRED, .0)]
    MissingFields(String),
}

impl From<ValidationErrors> for ProfileError {
    fn from(errors: ValidationErrors) -> Self {
        ProfileError::MissingFields(errors.to_string())
    }
}

fn required(value: Option<FieldValue>, field: &str) -> Result<FieldValue, ProfileError> {
    value.ok_or_else(|| ProfileError::MissingFields(format!("{field} is missing")))
}

impl TryFrom<MatchLendersRequest> for ApplicantProfile {
    type Error = ProfileError;

    fn try_from(request: MatchLendersRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let net_assets = required(request.net_assets, "netAssets")?;
        let prev_net_assets = required(request.prev_net_assets, "prevNetAssets")?;
        let trading_time = required(request.trading_time, "tradingTime")?;
        let loan_amount = required(request.loan_amount, "loanAmount")?;
        let company_name = required(request.company_name, "companyName")?;
        let company_age = required(request.company_age, "companyAge")?;

        Ok(ApplicantProfile {
            company_name: company_name.as_text(),
            net_assets: net_assets.as_number(),
            prev_net_assets: prev_net_assets.as_number(),
            trading_time_months: trading_time.as_whole_months(),
            loan_amount: loan_amount.as_number(),
            company_age_years: company_age.as_number(),
        })
    }
}
