use crate::models::{ApplicantProfile, EligibilityRules, LoanBounds, Tier};

/// Check the requested amount sits inside the lender's window (inclusive)
#[inline]
pub fn is_loan_amount_eligible(loan_amount: f64, bounds: &LoanBounds) -> bool {
    bounds.min <= loan_amount && loan_amount <= bounds.max
}

/// Check the applicant has traded at least as long as the lender requires
///
/// An unknown value on either side never qualifies.
#[inline]
pub fn is_trading_time_eligible(trading_months: Option<i64>, required_months: Option<u64>) -> bool {
    match (trading_months, required_months) {
        (Some(months), Some(required)) => i128::from(months) >= i128::from(required),
        _ => false,
    }
}

/// Check the lender serves exactly the applicant's tier
#[inline]
pub fn is_tier_eligible(applicant_tier: Tier, lender_tier: Option<Tier>) -> bool {
    lender_tier == Some(applicant_tier)
}

/// All three eligibility predicates for one lender
pub fn is_eligible(profile: &ApplicantProfile, applicant_tier: Tier, rules: &EligibilityRules) -> bool {
    is_loan_amount_eligible(profile.loan_amount, &rules.loan_bounds)
        && is_trading_time_eligible(profile.trading_time_months, rules.min_trading_months)
        && is_tier_eligible(applicant_tier, rules.tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(loan_amount: f64, trading_months: i64) -> ApplicantProfile {
        ApplicantProfile {
            company_name: "Test Ltd".to_string(),
            net_assets: 300_000.0,
            prev_net_assets: 200_000.0,
            trading_time_months: Some(trading_months),
            loan_amount,
            company_age_years: 4.0,
        }
    }

    fn create_test_rules() -> EligibilityRules {
        EligibilityRules {
            loan_bounds: LoanBounds { min: 10_000.0, max: 500_000.0 },
            min_trading_months: Some(12),
            tier: Some(Tier::One),
        }
    }

    #[test]
    fn test_all_predicates_pass() {
        let profile = create_test_profile(100_000.0, 24);
        assert!(is_eligible(&profile, Tier::One, &create_test_rules()));
    }

    #[test]
    fn test_loan_amount_outside_window() {
        let rules = create_test_rules();
        assert!(!is_eligible(&create_test_profile(5_000.0, 24), Tier::One, &rules));
        assert!(!is_eligible(&create_test_profile(600_000.0, 24), Tier::One, &rules));
    }

    #[test]
    fn test_loan_amount_bounds_inclusive() {
        let bounds = LoanBounds { min: 10_000.0, max: 500_000.0 };
        assert!(is_loan_amount_eligible(10_000.0, &bounds));
        assert!(is_loan_amount_eligible(500_000.0, &bounds));
        assert!(!is_loan_amount_eligible(f64::NAN, &bounds));
    }

    #[test]
    fn test_trading_time_too_short() {
        let profile = create_test_profile(100_000.0, 6);
        assert!(!is_eligible(&profile, Tier::One, &create_test_rules()));
    }

    #[test]
    fn test_trading_time_unknown() {
        assert!(!is_trading_time_eligible(None, Some(0)));
        assert!(!is_trading_time_eligible(Some(24), None));
        assert!(!is_trading_time_eligible(Some(-1), Some(0)));
        assert!(is_trading_time_eligible(Some(12), Some(12)));
    }

    #[test]
    fn test_tier_mismatch() {
        let profile = create_test_profile(100_000.0, 24);
        assert!(!is_eligible(&profile, Tier::Two, &create_test_rules()));
        assert!(!is_tier_eligible(Tier::Three, None));
    }
}
