//! Ratio string formatting.
//!
//! Ratios are rendered as strings because the display layer binds to the
//! exact formats: two decimal places for plain ratios, one decimal place and
//! a trailing `%` for percentages, and the literal `∞` for a positive value
//! over a zero denominator.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `numerator / denominator` with exactly two decimal places.
///
/// A zero denominator renders `"∞"` when the numerator is positive and
/// `"0.00"` otherwise; division by zero is a specified branch here, not an
/// error.
#[must_use]
pub fn format_ratio(numerator: Decimal, denominator: Decimal) -> String {
    if denominator.is_zero() {
        return if numerator > Decimal::ZERO {
            "∞".to_string()
        } else {
            "0.00".to_string()
        };
    }
    fixed(numerator / denominator, 2)
}

/// Formats `numerator / denominator` as a percentage with exactly one
/// decimal place.
///
/// A zero denominator renders `"0.0%"` regardless of numerator.
#[must_use]
pub fn format_percent(numerator: Decimal, denominator: Decimal) -> String {
    if denominator.is_zero() {
        return "0.0%".to_string();
    }
    format!(
        "{}%",
        fixed(numerator / denominator * Decimal::ONE_HUNDRED, 1)
    )
}

/// Rounds half-away-from-zero and pads to exactly `places` decimals.
fn fixed(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded.to_string()
}
