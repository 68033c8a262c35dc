//! Display helpers. Nothing here feeds back into a `ProjectionReport`.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const CRORE: Decimal = dec!(10000000);
const LAKH: Decimal = dec!(100000);
const THOUSAND: Decimal = dec!(1000);

/// Rounds to the nearest integer with halves going toward positive infinity,
/// so `2.5` becomes `3` and `-2.5` becomes `-2`.
pub fn round_half_up(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    normalize_zero(value.round_dp_with_strategy(0, strategy))
}

/// Renders `value` with exactly `dp` decimal places, halves away from zero.
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded =
        normalize_zero(value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero));
    rounded.rescale(dp);
    rounded.to_string()
}

/// Abbreviates a rupee amount into crore, lakh or thousand units.
///
/// ```
/// use analytics::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(12500000)), "₹1.25Cr");
/// assert_eq!(format_currency(dec!(250000)), "₹2.50L");
/// assert_eq!(format_currency(dec!(4500)), "₹5K");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    if amount >= CRORE {
        format!("₹{}Cr", to_fixed(amount / CRORE, 2))
    } else if amount >= LAKH {
        format!("₹{}L", to_fixed(amount / LAKH, 2))
    } else {
        format!("₹{}K", to_fixed(amount / THOUSAND, 0))
    }
}

/// Formats a number with comma thousands separators and at most three
/// fraction digits, e.g. `1234567.5` becomes `1,234,567.5`.
pub fn group_digits(value: Decimal) -> String {
    let rounded = normalize_zero(
        value
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
            .normalize(),
    );
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

// Rounding can leave a negative zero behind, which would print as "-0".
fn normalize_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}
