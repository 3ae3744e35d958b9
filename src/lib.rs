//! Lender Match - business loan lender matching service
//!
//! This library scores an applicant company, maps the score to a lender tier,
//! filters a static lender catalog and estimates monthly repayments for every
//! lender the applicant qualifies for.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_company_score, calculate_monthly_repayment, tier_for_score, MatchOutcome, Matcher};
pub use models::{ApplicantProfile, LenderMatch, MatchLendersRequest, MatchLendersResponse, Tier};
pub use services::LenderCatalog;
