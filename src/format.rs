//! Display helpers for ranges, month spans and money. Pure string formatting; none of
//! these feed back into any computation.

use crate::{compass::NumericRange, utils::round1};

const RANGE_DASH: char = '\u{2013}';
pub const DEFAULT_GROUPING: char = ',';

/// Both ends rounded to one decimal, joined by an en dash: `2–6.7`.
pub fn format_range(a: f64, b: f64, unit: &str) -> String {
    format!(
        "{}{unit}{RANGE_DASH}{}{unit}",
        format_one_decimal(a),
        format_one_decimal(b)
    )
}

/// Whole-month span that never understates the upper end: `{2, 6.7}` renders `2–7`.
pub fn format_months_range(range: &NumericRange) -> String {
    let min = finite(range.min()).floor().max(0.0);
    let max = finite(range.max()).ceil().max(min);
    format!("{min:.0}{RANGE_DASH}{max:.0}")
}

/// Rounded to a whole amount with thousands grouping: `$12,346`.
pub fn format_money(value: f64, symbol: &str) -> String {
    format_money_grouped(value, symbol, DEFAULT_GROUPING)
}

/// [`format_money`] with an explicit thousands separator.
pub fn format_money_grouped(value: f64, symbol: &str, grouping: char) -> String {
    let rounded = finite(value).round();
    let body = group_digits(&format!("{:.0}", rounded.abs()), grouping);
    if rounded < 0.0 {
        format!("-{symbol}{body}")
    } else {
        format!("{symbol}{body}")
    }
}

/// Money span such as `$6,000–$10,000`; a degenerate range renders one amount.
pub fn format_money_range(range: &NumericRange, symbol: &str, grouping: char) -> String {
    let min = format_money_grouped(range.min(), symbol, grouping);
    if range.is_exact() {
        return min;
    }
    format!(
        "{min}{RANGE_DASH}{}",
        format_money_grouped(range.max(), symbol, grouping)
    )
}

/// Percentage of a `[0, 1]` fill, without decimals.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", finite(fraction) * 100.0)
}

fn format_one_decimal(value: f64) -> String {
    let rounded = round1(finite(value));
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
