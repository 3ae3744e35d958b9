use std::sync::Arc;

use crate::core::{
    filters::is_eligible,
    repayment::format_repayment_range,
    scoring::{calculate_company_score, tier_for_score},
};
use crate::models::{ApplicantProfile, LenderMatch, Tier};
use crate::services::LenderCatalog;

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub score: u8,
    pub tier: Tier,
    pub lenders: Vec<LenderMatch>,
}

/// Lender matching orchestrator
///
/// # Pipeline Stages
/// 1. Company score from age, net assets and profit
/// 2. Score to tier
/// 3. Eligibility filter over the catalog (amount, trading time, tier)
/// 4. Repayment estimate for each eligible lender
///
/// The catalog is shared read-only, so a `Matcher` is cheap to clone into
/// every worker.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<LenderCatalog>,
}

impl Matcher {
    pub fn new(catalog: Arc<LenderCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &LenderCatalog {
        &self.catalog
    }

    /// Find the lenders an applicant qualifies for
    ///
    /// Results follow catalog order. The same profile against the same
    /// catalog always yields the same lenders.
    pub fn match_lenders(&self, profile: &ApplicantProfile) -> MatchOutcome {
        let score = calculate_company_score(
            profile.company_age_years,
            profile.net_assets,
            profile.profit(),
        );
        let tier = tier_for_score(score);

        tracing::debug!(
            "Scored {}: score={}, tier={}, profit={}",
            profile.company_name,
            score,
            tier,
            profile.profit()
        );

        let lenders: Vec<LenderMatch> = self
            .catalog
            .lenders()
            .iter()
            .filter(|lender| {
                let eligible = is_eligible(profile, tier, &lender.eligibility);
                tracing::trace!("Lender {} eligible={}", lender.name, eligible);
                eligible
            })
            .map(|lender| LenderMatch {
                lender: lender.name.clone(),
                tier: lender.record.tier.clone(),
                loan_amount: lender.record.loan_amount.clone(),
                term: lender.record.term.clone(),
                rates: lender.record.rates.clone(),
                monthly_repayment: format_repayment_range(&lender.repayment),
            })
            .collect();

        MatchOutcome { score, tier, lenders }
    }
}
