//! Significant-figure rounding and counting.
//!
//! Counting follows measurement convention: leading zeros never count, and
//! trailing zeros count only when the number has an explicit decimal point.
//! Counting works on strings because `10.0` and `10` differ in precision but
//! not in value.

use super::error::Error;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.*\d*").expect("number pattern must compile"));

/// Rounds `value` to `sigfigs` significant figures, ties to even.
///
/// Values with fewer significant figures than requested are returned as-is.
///
/// # Errors
///
/// - [`Error::InvalidSigFigs`] if `sigfigs` is less than one.
/// - [`Error::Overflow`] if rounding up carries past the largest [`Decimal`].
pub fn round_to_significant_figures(value: Decimal, sigfigs: i32) -> Result<Decimal, Error> {
    if sigfigs < 1 {
        return Err(Error::InvalidSigFigs(sigfigs));
    }
    if value.is_zero() {
        return Ok(value);
    }

    let digits = value
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |d| d as i64 + 1);
    let exponent = -(value.scale() as i64);
    let places = sigfigs as i64 - (digits + exponent);

    if places >= 0 {
        let places = u32::try_from(places).unwrap_or(u32::MAX);
        return Ok(value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven));
    }

    // Round to tens, hundreds, ...: shift the digits right, round, shift back.
    let shift = power_of_ten(-places);
    if shift.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let rounded = (value / shift).round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    rounded
        .checked_mul(shift)
        .ok_or(Error::Overflow("rounding to significant figures"))
}

fn power_of_ten(exp: i64) -> Decimal {
    match u32::try_from(exp) {
        Ok(e) if e <= Decimal::MAX_SCALE => Decimal::from_i128_with_scale(10_i128.pow(e), 0),
        _ => Decimal::ZERO,
    }
}

/// Counts the significant figures of the first number found in `text`.
///
/// Surrounding context such as a unit word is ignored, so `"1 pound"`
/// counts as `"1"`.
///
/// # Errors
///
/// Returns [`Error::MalformedNumber`] if `text` contains no digits.
pub fn count_significant_figures(text: &str) -> Result<usize, Error> {
    let number = NUMBER
        .find(text)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::MalformedNumber(text.to_string()))?;

    let significant = if number.contains('.') {
        number.replacen('.', "", 1).trim_start_matches('0').len()
    } else {
        number.trim_end_matches('0').trim_start_matches('0').len()
    };
    Ok(significant)
}

/// The smallest significant-figure count among `numbers`.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `numbers` is empty.
/// - The first [`Error::MalformedNumber`] raised by any entry.
pub fn lowest_significant_figures<S: AsRef<str>>(numbers: &[S]) -> Result<usize, Error> {
    let mut lowest: Option<usize> = None;
    for number in numbers {
        let count = count_significant_figures(number.as_ref())?;
        lowest = Some(lowest.map_or(count, |l| l.min(count)));
    }
    lowest.ok_or(Error::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn general_rounding() {
        assert_eq!(round_to_significant_figures(dec!(123.45), 3).unwrap(), dec!(123));
        assert_eq!(round_to_significant_figures(dec!(10.02), 3).unwrap(), dec!(10.0));
        assert_eq!(round_to_significant_figures(dec!(0.012301), 3).unwrap(), dec!(0.0123));
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_to_significant_figures(dec!(123.45), 4).unwrap(), dec!(123.4));
        assert_eq!(round_to_significant_figures(dec!(123.35), 4).unwrap(), dec!(123.4));
        assert_eq!(round_to_significant_figures(dec!(2.5), 1).unwrap(), dec!(2));
        assert_eq!(round_to_significant_figures(dec!(3.5), 1).unwrap(), dec!(4));
    }

    #[test]
    fn rounds_integers_to_tens_and_above() {
        assert_eq!(round_to_significant_figures(dec!(12345), 2).unwrap(), dec!(12000));
        assert_eq!(round_to_significant_figures(dec!(12500), 2).unwrap(), dec!(12000));
        assert_eq!(round_to_significant_figures(dec!(13500), 2).unwrap(), dec!(14000));
        assert_eq!(round_to_significant_figures(dec!(99999), 1).unwrap(), dec!(100000));
    }

    #[test]
    fn negative_values_round_symmetrically() {
        assert_eq!(round_to_significant_figures(dec!(-123.45), 4).unwrap(), dec!(-123.4));
        assert_eq!(round_to_significant_figures(dec!(-12345), 2).unwrap(), dec!(-12000));
    }

    #[test]
    fn more_figures_than_available_is_identity() {
        assert_eq!(round_to_significant_figures(dec!(10.0213), 30).unwrap(), dec!(10.0213));
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(round_to_significant_figures(Decimal::ZERO, 3).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn rounding_is_idempotent() {
        let values = [dec!(123.45), dec!(0.0049951), dec!(98765.4321), dec!(1.5), dec!(-7.77)];
        for value in values {
            for sigfigs in 1..=6 {
                let once = round_to_significant_figures(value, sigfigs).unwrap();
                let twice = round_to_significant_figures(once, sigfigs).unwrap();
                assert_eq!(once, twice, "{value} to {sigfigs}");
            }
        }
    }

    #[test]
    fn rounding_up_past_the_largest_value_fails() {
        assert!(matches!(
            round_to_significant_figures(Decimal::MAX, 1),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            round_to_significant_figures(Decimal::MIN, 1),
            Err(Error::Overflow(_))
        ));
        assert_eq!(
            round_to_significant_figures(Decimal::MAX, 29).unwrap(),
            Decimal::MAX
        );
    }

    #[test]
    fn rejects_fewer_than_one_figure() {
        assert!(matches!(
            round_to_significant_figures(dec!(1.5), 0),
            Err(Error::InvalidSigFigs(0))
        ));
        assert!(matches!(
            round_to_significant_figures(dec!(1.5), -2),
            Err(Error::InvalidSigFigs(-2))
        ));
    }

    #[test]
    fn counts_significant_figures() {
        let cases = [
            ("1", 1),
            ("10000000", 1),
            ("100.00", 5),
            ("1 pound", 1),
            ("0.0", 0),
            ("0.0250", 3),
            ("1020", 3),
            ("about 12.50 grams", 4),
        ];
        for (text, expected) in cases {
            assert_eq!(count_significant_figures(text).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn counting_without_digits_fails() {
        assert!(matches!(
            count_significant_figures("fish"),
            Err(Error::MalformedNumber(ref s)) if s == "fish"
        ));
        assert!(count_significant_figures("").is_err());
    }

    #[test]
    fn lowest_significant_figures_of_lists() {
        assert_eq!(lowest_significant_figures(&["10", "1000", "10.0"]).unwrap(), 1);
        assert_eq!(lowest_significant_figures(&["10.0", "1000.0", "100.0"]).unwrap(), 3);
        assert_eq!(
            lowest_significant_figures(&["12345", "999999999", "3.14159265"]).unwrap(),
            5
        );
        assert_eq!(lowest_significant_figures(&["10.0"]).unwrap(), 3);

        let owned = vec!["2.0".to_string(), "3.00".to_string()];
        assert_eq!(lowest_significant_figures(&owned).unwrap(), 2);
    }

    #[test]
    fn lowest_significant_figures_of_empty_list_fails() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            lowest_significant_figures(&empty),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn lowest_significant_figures_propagates_parse_errors() {
        assert!(matches!(
            lowest_significant_figures(&["10", "1000", "chips"]),
            Err(Error::MalformedNumber(ref s)) if s == "chips"
        ));
    }
}
