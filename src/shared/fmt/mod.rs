//! Display formatting for prices and percentages.
//!
//! Mirrors the `en-US` currency style the mobile screens use: a leading `$`,
//! thousands separators and exactly two fraction digits.

use rust_decimal::{Decimal, RoundingStrategy};

/// Inserts thousands separators into a run of ASCII digits.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a value with a fixed number of fraction digits and separators.
///
/// Midpoints round away from zero.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// `$67,012.50`, `-$3.10`.
pub fn format_usd(value: Decimal) -> String {
    let body = format_fixed(value.abs(), 2);
    if value.is_sign_negative() && body != "0.00" {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Absolute percentage with two decimals, e.g. `2.35%` for `-2.345`.
pub fn format_change_pct(change: Decimal) -> String {
    format!("{}%", format_fixed(change.abs(), 2))
}
