use crate::models::Tier;

/// Highest score a company can reach
pub const MAX_COMPANY_SCORE: u8 = 6;

const ESTABLISHED_AGE_YEARS: f64 = 3.0;
const YOUNG_AGE_YEARS: f64 = 1.0;
const STRONG_NET_ASSETS: f64 = 250_000.0;
const MODEST_NET_ASSETS: f64 = 50_000.0;
const STRONG_PROFIT: f64 = 50_000.0;
const MODEST_PROFIT: f64 = 25_000.0;

/// Calculate a creditworthiness score (0-6) for a company
///
/// Scoring table, each axis worth up to 2 points:
/// - age: >= 3 years = 2, >= 1 year = 1
/// - net assets: >= 250k = 2, >= 50k = 1
/// - profit: >= 50k = 2, >= 25k = 1
///
/// `NaN` inputs score nothing on their axis.
pub fn calculate_company_score(company_age_years: f64, net_assets: f64, profit: f64) -> u8 {
    let score = banded_points(company_age_years, ESTABLISHED_AGE_YEARS, YOUNG_AGE_YEARS)
        + banded_points(net_assets, STRONG_NET_ASSETS, MODEST_NET_ASSETS)
        + banded_points(profit, STRONG_PROFIT, MODEST_PROFIT);

    score.min(MAX_COMPANY_SCORE)
}

/// Lender tier an applicant with this score is matched against
pub fn tier_for_score(score: u8) -> Tier {
    match score {
        s if s >= 4 => Tier::One,
        s if s >= 2 => Tier::Two,
        _ => Tier::Three,
    }
}

#[inline]
fn banded_points(value: f64, high: f64, low: f64) -> u8 {
    if value >= high {
        2
    } else if value >= low {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_axes() {
        assert_eq!(calculate_company_score(0.5, 0.0, 0.0), 0);
        assert_eq!(calculate_company_score(1.0, 0.0, 0.0), 1);
        assert_eq!(calculate_company_score(3.0, 0.0, 0.0), 2);
        assert_eq!(calculate_company_score(0.0, 50_000.0, 0.0), 1);
        assert_eq!(calculate_company_score(0.0, 250_000.0, 0.0), 2);
        assert_eq!(calculate_company_score(0.0, 0.0, 25_000.0), 1);
        assert_eq!(calculate_company_score(0.0, 0.0, 50_000.0), 2);
    }

    #[test]
    fn test_score_maximum() {
        assert_eq!(calculate_company_score(10.0, 1_000_000.0, 500_000.0), MAX_COMPANY_SCORE);
    }

    #[test]
    fn test_score_boundaries_just_below() {
        assert_eq!(calculate_company_score(2.99, 249_999.0, 49_999.0), 3);
        assert_eq!(calculate_company_score(0.99, 49_999.0, 24_999.0), 0);
    }

    #[test]
    fn test_nan_scores_nothing() {
        assert_eq!(calculate_company_score(f64::NAN, 300_000.0, f64::NAN), 2);
    }

    #[test]
    fn test_score_is_monotonic_per_axis() {
        let steps = [-10_000.0, 0.0, 0.5, 1.0, 2.0, 3.0, 24_999.0, 25_000.0, 49_999.0, 50_000.0, 250_000.0, 1e9];

        for window in steps.windows(2) {
            let (lo, hi) = (window[0], window[1]);
            assert!(calculate_company_score(lo, 60_000.0, 30_000.0) <= calculate_company_score(hi, 60_000.0, 30_000.0));
            assert!(calculate_company_score(2.0, lo, 30_000.0) <= calculate_company_score(2.0, hi, 30_000.0));
            assert!(calculate_company_score(2.0, 60_000.0, lo) <= calculate_company_score(2.0, 60_000.0, hi));
        }
    }

    #[test]
    fn test_tier_for_score() {
        assert_eq!(tier_for_score(6), Tier::One);
        assert_eq!(tier_for_score(4), Tier::One);
        assert_eq!(tier_for_score(3), Tier::Two);
        assert_eq!(tier_for_score(2), Tier::Two);
        assert_eq!(tier_for_score(1), Tier::Three);
        assert_eq!(tier_for_score(0), Tier::Three);
    }
}
