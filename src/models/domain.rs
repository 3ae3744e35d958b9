use serde::{Deserialize, Serialize};
use std::fmt;

/// Lender risk bucket, 1 is the strongest applicant band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    One,
    Two,
    #[default]
    Three,
}

impl Tier {
    /// Map a numeric tier label onto a known tier
    pub fn from_number(number: u64) -> Option<Self> {
        match number {
            1 => Some(Tier::One),
            2 => Some(Tier::Two),
            3 => Some(Tier::Three),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.number())
    }
}

/// Validated applicant data for a single match request
///
/// Numeric fields that could not be read as numbers are carried as `NaN`.
/// `NaN` fails every score threshold and every eligibility comparison, so a
/// garbled value costs points instead of failing the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantProfile {
    pub company_name: String,
    pub net_assets: f64,
    pub prev_net_assets: f64,
    /// Whole months traded; `None` when the input had no leading integer
    pub trading_time_months: Option<i64>,
    pub loan_amount: f64,
    pub company_age_years: f64,
}

impl ApplicantProfile {
    /// Year-on-year change in net assets
    pub fn profit(&self) -> f64 {
        self.net_assets - self.prev_net_assets
    }
}

/// Raw catalog record as stored in the lender criteria file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderRecord {
    #[serde(rename = "Loan Amount")]
    pub loan_amount: String,
    #[serde(rename = "Min Trading Time")]
    pub min_trading_time: String,
    #[serde(rename = "Tier", default)]
    pub tier: Option<String>,
    #[serde(rename = "Term")]
    pub term: String,
    #[serde(rename = "Rates")]
    pub rates: String,
}

/// Inclusive loan amount window used for eligibility; `max` may be infinite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanBounds {
    pub min: f64,
    pub max: f64,
}

/// Absolute principal bounds used for repayment estimates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRange {
    pub lower: f64,
    pub upper: f64,
}

/// Interest rate bounds as fractions (5% is 0.05)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRange {
    pub min: u64,
    pub max: u64,
}

/// Typed eligibility rules derived from a catalog record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibilityRules {
    pub loan_bounds: LoanBounds,
    /// `None` when the requirement had no digits; such a lender never qualifies
    pub min_trading_months: Option<u64>,
    /// `None` when the tier label names no known tier; such a lender never qualifies
    pub tier: Option<Tier>,
}

/// Inputs of the flat-rate repayment estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepaymentTerms {
    pub amounts: AmountRange,
    pub rates: RateRange,
    /// Parsed for reporting only, the estimate divides by `flat_term`
    pub term_range: TermRange,
    pub flat_term: f64,
}

/// Catalog entry: the raw record plus its normalized form
#[derive(Debug, Clone, PartialEq)]
pub struct LenderCriterion {
    pub name: String,
    pub record: LenderRecord,
    pub eligibility: EligibilityRules,
    pub repayment: RepaymentTerms,
}

/// A lender the applicant qualifies for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderMatch {
    pub lender: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tier: Option<String>,
    #[serde(rename = "loanAmount")]
    pub loan_amount: String,
    pub term: String,
    pub rates: String,
    #[serde(rename = "monthlyRepayment")]
    pub monthly_repayment: String,
}
