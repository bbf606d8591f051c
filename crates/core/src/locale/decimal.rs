//! Locale-aware decimal parsing and formatting.
//!
//! Amounts are entered and displayed in the `es-AR` convention: `.` groups
//! thousands and `,` marks the decimal point, so `"1.234,56"` is 1234.56.
//!
//! Parsing rules:
//! - every `.` is treated as a thousands separator and stripped, wherever it
//!   appears;
//! - `,` becomes the decimal point;
//! - surrounding whitespace is ignored;
//! - text that still does not parse yields zero (a blank or malformed form
//!   field counts as no amount).
//!
//! Formatting always renders two decimals (banker's rounding) with grouped
//! thousands, so `format_decimal` and `parse_decimal` round-trip on
//! two-decimal values.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Parses locale-formatted decimal text; malformed input yields zero.
#[must_use]
pub fn parse_decimal(text: &str) -> Decimal {
    let normalized = text.trim().replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Formats a value with two decimals, `,` decimal point and `.` thousands
/// grouping.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    format!("{sign}{grouped},{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("1.234,56", dec!(1234.56))]
    #[case("1000", dec!(1000))]
    #[case("12,5", dec!(12.5))]
    #[case("0,005", dec!(0.005))]
    #[case("-1.000,25", dec!(-1000.25))]
    #[case(" 250,00 ", dec!(250))]
    // Every dot is a thousands separator, wherever it appears
    #[case("1.2.3", dec!(123))]
    // Malformed input counts as no amount
    #[case("abc", Decimal::ZERO)]
    #[case("", Decimal::ZERO)]
    #[case("12,3,4", Decimal::ZERO)]
    fn test_parse(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(parse_decimal(text), expected);
    }

    #[rstest]
    #[case(dec!(1234.56), "1.234,56")]
    #[case(dec!(1000), "1.000,00")]
    #[case(dec!(0), "0,00")]
    #[case(dec!(12.5), "12,50")]
    #[case(dec!(-1000.25), "-1.000,25")]
    #[case(dec!(1234567.89), "1.234.567,89")]
    // Banker's rounding at the third decimal
    #[case(dec!(2.125), "2,12")]
    #[case(dec!(2.135), "2,14")]
    fn test_format(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_decimal(value), expected);
    }

    proptest! {
        /// format then parse is the identity on two-decimal values.
        #[test]
        fn prop_round_trip(cents in -1_000_000_000i64..1_000_000_000i64) {
            let value = Decimal::new(cents, 2);
            prop_assert_eq!(parse_decimal(&format_decimal(value)), value);
        }
    }
}
