use crate::core::parsing::{parse_amount_shorthand, parse_leading_float, parse_rate_range, parse_term_range};
use crate::models::RepaymentTerms;

/// Flat-rate monthly repayment, rounded to 2 decimal places
///
/// `principal * (1 + rate) / term`. Any zero input gives exactly 0.
/// Halves round towards positive infinity, so -1.005 becomes -1 and not -1.01.
#[inline]
pub fn calculate_monthly_repayment(principal: f64, rate: f64, term: f64) -> f64 {
    if principal == 0.0 || rate == 0.0 || term == 0.0 {
        return 0.0;
    }

    round_cents((principal * (1.0 + rate)) / term)
}

#[inline]
fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0 + 0.5).floor() / 100.0;
    // Normalize -0.0 so it never prints as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Build repayment inputs from a lender's free-text fields
///
/// The divisor is the number the raw term text starts with, used for both
/// bounds. The parsed term range is kept alongside but does not feed the
/// estimate. Text that does not start with a number gives a zero term.
pub fn repayment_terms(loan_amount: &str, rates: &str, term: &str) -> RepaymentTerms {
    RepaymentTerms {
        amounts: parse_amount_shorthand(loan_amount),
        rates: parse_rate_range(rates),
        term_range: parse_term_range(term),
        flat_term: parse_leading_float(term).unwrap_or(0.0),
    }
}

/// Format the estimated repayment range as `"min - max"`
pub fn format_repayment_range(terms: &RepaymentTerms) -> String {
    let min = calculate_monthly_repayment(terms.amounts.lower, terms.rates.min, terms.flat_term);
    let max = calculate_monthly_repayment(terms.amounts.upper, terms.rates.max, terms.flat_term);

    format!("{} - {}", min, max)
}

/// Estimated monthly repayment range straight from catalog text
pub fn estimate_repayment_range(loan_amount: &str, rates: &str, term: &str) -> String {
    format_repayment_range(&repayment_terms(loan_amount, rates, term))
}
