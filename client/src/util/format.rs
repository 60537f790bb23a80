//! Display formatting for currency amounts, percentages, and dates.
//!
//! Amounts in this app are display-only `f64` values, so formatting rounds to
//! whole cents and never attempts exact decimal arithmetic.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::util::dates::{format_us, parse_iso_date};

/// Insert thousands separators into a whole number (`12000` -> `"12,000"`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cents(value: f64) -> u64 {
    (value.abs() * 100.0).round() as u64
}

/// Format a dollar amount with separators and only the fraction digits it
/// needs (`12000.0` -> `"$12,000"`, `962.5` -> `"$962.5"`).
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_owned();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = to_cents(value);
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    if frac == 0 {
        format!("{sign}${whole}")
    } else if frac % 10 == 0 {
        format!("{sign}${whole}.{}", frac / 10)
    } else {
        format!("{sign}${whole}.{frac:02}")
    }
}

/// Format a dollar amount with exactly two fraction digits.
pub fn format_usd_cents(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_owned();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = to_cents(value);
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Parse a user-typed amount. Blank, non-numeric, or non-finite input is `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a free-text amount field for display; unparsable input shows as `$0`.
pub fn format_usd_input(raw: &str) -> String {
    format_usd(parse_amount(raw).unwrap_or(0.0))
}

/// Format a percentage with one fraction digit (`10.0` -> `"10.0%"`).
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Render the date part of an ISO-8601 string as `M/D/YYYY`.
pub fn format_us_date(iso: &str) -> Option<String> {
    parse_iso_date(iso).map(format_us)
}
