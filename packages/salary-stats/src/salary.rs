//! Salary normalization.
//!
//! Turns a published salary range into a single number. When only one bound
//! is published, postings tend to understate the ceiling and overstate the
//! floor less, so a lone upper bound is scaled down and a lone lower bound is
//! scaled up.

use crate::types::Listing;

/// Multiplier applied when only the upper bound is published.
pub const UPPER_ONLY_FACTOR: f64 = 0.8;

/// Multiplier applied when only the lower bound is published.
pub const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Estimate a salary from optional bounds. Zero bounds count as missing.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|v| *v != 0.0);
    let to = to.filter(|v| *v != 0.0);

    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (None, Some(to)) => Some(to * UPPER_ONLY_FACTOR),
        (Some(from), None) => Some(from * LOWER_ONLY_FACTOR),
        (None, None) => None,
    }
}

/// Estimate a listing's salary in `currency`.
///
/// Listings without a salary, without a currency, or in another currency
/// yield `None`. No conversion between currencies is attempted.
pub fn estimate_salary(listing: &Listing, currency: &str) -> Option<f64> {
    let salary = listing.salary.as_ref()?;
    if salary.currency.as_deref() != Some(currency) {
        return None;
    }
    predict_salary(salary.from, salary.to)
}
