// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod parsing;
pub mod repayment;
pub mod scoring;

pub use filters::{is_eligible, is_loan_amount_eligible, is_tier_eligible, is_trading_time_eligible};
pub use matcher::{MatchOutcome, Matcher};
pub use repayment::{calculate_monthly_repayment, estimate_repayment_range};
pub use scoring::{calculate_company_score, tier_for_score};
