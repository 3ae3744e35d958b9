// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AmountRange, ApplicantProfile, EligibilityRules, LenderCriterion, LenderMatch, LenderRecord,
    LoanBounds, RateRange, RepaymentTerms, TermRange, Tier,
};
pub use requests::{FieldValue, MatchLendersRequest, ProfileError, ALL_FIELDS_REQUIRED};
pub use responses::{ErrorResponse, HealthResponse, MatchLendersResponse};
