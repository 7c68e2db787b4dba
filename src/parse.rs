//! Free-text amount parsing: `"8000"`, `"15k-25k"`, `"15,000 – 25,000"`.
//!
//! Grammar per token: `<digits>(.<digits>)?k?`, a trailing `k` multiplies by 1000 and
//! the scaled value is rounded to the nearest integer. One hyphen separates a range;
//! em/en dashes and tildes count as hyphens. There are no negatives, no exponents and
//! no partial numbers. Failure is `None`; the caller decides whether absence is fine.

use crate::compass::NumericRange;

/// Successful parse result: a single figure or an interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedAmount {
    Exact(f64),
    Range(NumericRange),
}

impl ParsedAmount {
    /// Widens an exact figure into the degenerate range `{v, v}`.
    pub fn into_range(self) -> NumericRange {
        match self {
            ParsedAmount::Exact(value) => NumericRange::exact(value),
            ParsedAmount::Range(range) => range,
        }
    }

    pub fn exact(&self) -> Option<f64> {
        match self {
            ParsedAmount::Exact(value) => Some(*value),
            ParsedAmount::Range(_) => None,
        }
    }
}

pub fn parse_amount(raw: &str) -> Option<ParsedAmount> {
    let cleaned = normalize(raw);
    if cleaned.is_empty() {
        return None;
    }

    let mut sides = cleaned.split('-');
    let first = sides.next()?;
    let Some(second) = sides.next() else {
        return parse_token(first).map(ParsedAmount::Exact);
    };
    if sides.next().is_some() {
        return None;
    }

    let a = parse_token(first)?;
    let b = parse_token(second)?;
    Some(ParsedAmount::Range(NumericRange::new(a.min(b), a.max(b))))
}

/// Parses and always yields a range, widening exact figures.
pub fn parse_range(raw: &str) -> Option<NumericRange> {
    parse_amount(raw).map(ParsedAmount::into_range)
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| *ch != ',')
        .map(|ch| match ch {
            '\u{2013}' | '\u{2014}' | '~' => '-',
            other => other,
        })
        .collect()
}

fn parse_token(token: &str) -> Option<f64> {
    let token = token.trim();
    let (number, scale) = match token.strip_suffix('k') {
        Some(rest) => (rest, 1000.0),
        None => (token, 1.0),
    };
    if !is_plain_decimal(number) {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    Some((value * scale).round()).filter(|value| value.is_finite())
}

fn is_plain_decimal(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> Option<ParsedAmount> {
        Some(ParsedAmount::Range(NumericRange::new(min, max)))
    }

    #[test]
    fn parses_k_ranges_in_either_order() {
        assert_eq!(parse_amount("15k-25k"), range(15_000.0, 25_000.0));
        assert_eq!(parse_amount("25k-15k"), range(15_000.0, 25_000.0));
    }

    #[test]
    fn parses_single_values() {
        assert_eq!(parse_amount("9000"), Some(ParsedAmount::Exact(9_000.0)));
        assert_eq!(parse_amount("  8,000 "), Some(ParsedAmount::Exact(8_000.0)));
        assert_eq!(parse_amount("1.5K"), Some(ParsedAmount::Exact(1_500.0)));
        assert_eq!(parse_amount("2.25k"), Some(ParsedAmount::Exact(2_250.0)));
        assert_eq!(parse_amount("99.6"), Some(ParsedAmount::Exact(100.0)));
    }

    #[test]
    fn normalizes_dashes_tildes_and_separators() {
        assert_eq!(parse_amount("15,000 \u{2013} 25,000"), range(15_000.0, 25_000.0));
        assert_eq!(parse_amount("6k\u{2014}10k"), range(6_000.0, 10_000.0));
        assert_eq!(parse_amount("6k~10k"), range(6_000.0, 10_000.0));
        assert_eq!(parse_amount("3000 - 5k"), range(3_000.0, 5_000.0));
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in [
            "", "   ", "abc", "-", "15k-", "-25k", "1-2-3", "-5", "1e3", "1.", ".5", "k",
            "12kk", "1 000", "10k-abc",
        ] {
            assert_eq!(parse_amount(raw), None, "{raw:?} should fail");
        }
    }

    #[test]
    fn rejects_values_that_overflow_to_infinity() {
        let huge = "9".repeat(400);
        assert_eq!(parse_amount(&huge), None);
        assert_eq!(parse_amount(&format!("{huge}k")), None);
        assert_eq!(parse_amount(&format!("5-{huge}")), None);
        assert_eq!(parse_range(&huge), None);
    }

    #[test]
    fn parse_range_widens_exact_values() {
        assert_eq!(parse_range("9000"), Some(NumericRange::exact(9_000.0)));
        assert_eq!(parse_range("nope"), None);
    }
}
