//! Parsers for the free-text ranges found in lender criteria
//!
//! None of these fail. Text that cannot be read falls back to a default so a
//! single sloppy catalog entry never blocks matching for everyone else.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{AmountRange, LoanBounds, RateRange, TermRange, Tier};

// ASCII classes only, `\d` would also accept other Unicode digits
static NOT_BOUND_CHAR: Lazy<Regex> = Lazy::new(|| compile(r"[^0-9\-]"));
static NOT_DIGIT: Lazy<Regex> = Lazy::new(|| compile(r"[^0-9]"));
static SHORTHAND_AMOUNT: Lazy<Regex> = Lazy::new(|| compile(r"([0-9.]+)([kM]?)"));
static DECIMAL_RUN: Lazy<Regex> = Lazy::new(|| compile(r"[0-9.]+"));
static INTEGER_RUN: Lazy<Regex> = Lazy::new(|| compile(r"[0-9]+"));
static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"));
static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| compile(r"^\s*([+-]?[0-9]+)"));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid built-in pattern {pattern:?}: {err}"),
    }
}

/// Read the eligibility window from a loan amount string
///
/// Only digits and `-` are kept, so `"10000 - 500000"` becomes `10000..=500000`.
/// A missing or zero lower side is 0 and a missing or zero upper side is unbounded.
pub fn parse_loan_bounds(input: &str) -> LoanBounds {
    let kept = NOT_BOUND_CHAR.replace_all(input, "");

    let mut pieces = kept.split('-').map(|piece| piece.parse::<f64>().unwrap_or(0.0));

    let min = pieces.next().unwrap_or(0.0);
    let max = pieces
        .next()
        .filter(|value| *value != 0.0)
        .unwrap_or(f64::INFINITY);

    LoanBounds { min, max }
}

/// Read absolute amounts from shorthand such as `"10k-500k"` or `"1.5M"`
///
/// The first two amounts found are the lower and upper bound. A single amount
/// is used for both, and text without amounts gives `(0, 0)`.
pub fn parse_amount_shorthand(input: &str) -> AmountRange {
    let amounts: Vec<f64> = SHORTHAND_AMOUNT
        .captures_iter(input)
        .filter_map(|caps| {
            let multiplier = match &caps[2] {
                "k" => 1_000.0,
                "M" => 1_000_000.0,
                _ => 1.0,
            };
            parse_leading_float(&caps[1]).map(|value| (value * multiplier).round())
        })
        .collect();

    match amounts.as_slice() {
        [] => AmountRange { lower: 0.0, upper: 0.0 },
        [only] => AmountRange { lower: *only, upper: *only },
        [lower, upper, ..] => AmountRange { lower: *lower, upper: *upper },
    }
}

/// Minimum trading time in months; every digit in the text is read as one number
pub fn parse_trading_months(input: &str) -> Option<u64> {
    NOT_DIGIT.replace_all(input, "").parse().ok()
}

/// Effective tier of a lender; an absent or empty label means Tier 3
pub fn parse_tier_label(label: Option<&str>) -> Option<Tier> {
    match label {
        None => Some(Tier::Three),
        Some(text) if text.is_empty() => Some(Tier::Three),
        Some(text) => NOT_DIGIT
            .replace_all(text, "")
            .parse()
            .ok()
            .and_then(Tier::from_number),
    }
}

/// Interest rate bounds as fractions: `"5% - 8%"` is `(0.05, 0.08)`
///
/// A run of dots alone (`"."`) is not a number and is skipped.
pub fn parse_rate_range(input: &str) -> RateRange {
    let rates: Vec<f64> = DECIMAL_RUN
        .find_iter(input)
        .filter_map(|run| parse_leading_float(run.as_str()))
        .map(|rate| rate / 100.0)
        .collect();

    match rates.as_slice() {
        [] => RateRange { min: 0.0, max: 0.0 },
        [only] => RateRange { min: *only, max: *only },
        [min, max, ..] => RateRange { min: *min, max: *max },
    }
}

/// Term bounds from the integers in the text, `(1, 1)` when there are none
pub fn parse_term_range(input: &str) -> TermRange {
    let terms: Vec<u64> = INTEGER_RUN
        .find_iter(input)
        .filter_map(|run| run.as_str().parse().ok())
        .collect();

    match terms.as_slice() {
        [] => TermRange { min: 1, max: 1 },
        [only] => TermRange { min: *only, max: *only },
        [min, max, ..] => TermRange { min: *min, max: *max },
    }
}

/// The number a string starts with, ignoring leading whitespace
///
/// `"12-24 months"` reads as 12 and `"3.5 years"` as 3.5. Returns `None` when
/// the text does not start with a number.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    LEADING_FLOAT
        .captures(input)
        .and_then(|caps| caps[1].parse().ok())
}

/// The integer a string starts with, ignoring leading whitespace
pub fn parse_leading_integer(input: &str) -> Option<i64> {
    LEADING_INTEGER
        .captures(input)
        .and_then(|caps| caps[1].parse().ok())
}
