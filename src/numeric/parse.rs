// ============================================================================
// Literal Parser
// Tagged operand type, decimal/scientific text grammar, rounding policy
// ============================================================================

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;

use super::errors::{BigError, BigResult};
use super::value::{pow10, BigDecimal};
use crate::config;

/// Largest net power-of-ten shift a parse may apply.
const EXPONENT_LIMIT: i64 = 320_000_000;

/// An input a decimal can be constructed or coerced from.
///
/// Every arithmetic method accepts `impl Into<Operand>`, so plain literals,
/// native numbers, big integers, and existing values can all appear on the
/// right-hand side of an operation. Dispatch is by explicit match on this
/// type; there is no runtime type inspection.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Decimal or scientific text literal
    Text(String),
    /// Native integer, exact at any accuracy
    Int(i64),
    /// Native float; must be finite, routed through the text grammar
    Float(f64),
    /// Arbitrary-precision integer, exact at any accuracy
    Big(BigInt),
    /// An existing value, rescaled if the target accuracy differs
    Value(BigDecimal),
}

impl Operand {
    /// Produce a decimal at `scale`, which the caller has validated.
    ///
    /// This is the single producer of magnitudes: text goes through the
    /// grammar and rounding policy, integers multiply by the align exactly,
    /// and existing values rescale with no extra rounding bit.
    pub(crate) fn coerce(self, scale: u32) -> BigResult<BigDecimal> {
        match self {
            Operand::Text(text) => parse_text(&text, scale),
            Operand::Int(value) => Ok(BigDecimal::from_scaled(
                BigInt::from(value) * pow10(scale),
                scale,
            )),
            Operand::Float(value) => {
                if !value.is_finite() {
                    return Err(BigError::InvalidLiteral(value.to_string()));
                }
                parse_text(&value.to_string(), scale)
            },
            Operand::Big(value) => Ok(BigDecimal::from_scaled(value * pow10(scale), scale)),
            Operand::Value(value) => Ok(value.rescaled(scale)),
        }
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Int(i64::from(value))
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Int(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Operand::Big(value)
    }
}

impl From<&BigInt> for Operand {
    fn from(value: &BigInt) -> Self {
        Operand::Big(value.clone())
    }
}

impl From<BigDecimal> for Operand {
    fn from(value: BigDecimal) -> Self {
        Operand::Value(value)
    }
}

impl From<&BigDecimal> for Operand {
    fn from(value: &BigDecimal) -> Self {
        Operand::Value(value.clone())
    }
}

// ============================================================================
// Grammar
// ============================================================================

/// A literal split into its grammar parts, all digit runs verified.
struct Literal<'a> {
    negative: bool,
    int_digits: &'a str,
    frac_digits: &'a str,
    /// Exponent text after the marker, optionally signed; empty if absent.
    exponent: &'a str,
}

/// Split and verify a literal against
/// `[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?`.
fn split_literal(text: &str) -> Option<Literal<'_>> {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'+') => (false, &text[1..]),
        Some(b'-') => (true, &text[1..]),
        _ => (false, text),
    };
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(marker) => {
            let exponent = &rest[marker + 1..];
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            (&rest[..marker], exponent)
        },
        None => (rest, ""),
    };
    let (int_digits, frac_digits) = match mantissa.find('.') {
        Some(dot) => (&mantissa[..dot], &mantissa[dot + 1..]),
        None => (mantissa, ""),
    };
    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }
    if !int_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    Some(Literal {
        negative,
        int_digits,
        frac_digits,
        exponent,
    })
}

/// Whether `text` would parse as a decimal literal.
///
/// Pure grammar check; nothing is constructed. Range conditions (an exponent
/// shift outside bounds) are not grammar failures and still parse as far as
/// this predicate is concerned.
pub fn is_valid_literal(text: &str) -> bool {
    split_literal(text).is_some()
}

fn parse_exponent(exponent: &str) -> BigResult<i64> {
    if exponent.is_empty() {
        return Ok(0);
    }
    let (negative, digits) = match exponent.as_bytes().first() {
        Some(b'+') => (false, &exponent[1..]),
        Some(b'-') => (true, &exponent[1..]),
        _ => (false, exponent),
    };
    // Digit runs too long for i64 are far past the shift limit either way.
    match digits.parse::<i64>() {
        Ok(value) => Ok(if negative { -value } else { value }),
        Err(_) => Err(BigError::ExponentOutOfRange(if negative {
            i64::MIN
        } else {
            i64::MAX
        })),
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse text at `scale` under the process-wide rounding mode.
pub(crate) fn parse_text(text: &str, scale: u32) -> BigResult<BigDecimal> {
    parse_text_with(text, scale, !config::round_down())
}

/// Parse text at `scale`.
///
/// The digits before and after the point concatenate into one integer, which
/// is then shifted by `scale + exponent - fractional digit count` powers of
/// ten. With `round` set, the integer is doubled first and the dropped bit
/// rounds half-up after the shift; otherwise the shift truncates toward
/// zero. The sign is applied last, so halves round away from zero.
fn parse_text_with(text: &str, scale: u32, round: bool) -> BigResult<BigDecimal> {
    let lit =
        split_literal(text).ok_or_else(|| BigError::InvalidLiteral(text.to_string()))?;
    let exponent = parse_exponent(lit.exponent)?;

    let shift = (i64::from(scale))
        .checked_add(exponent)
        .and_then(|s| s.checked_sub(lit.frac_digits.len() as i64))
        .ok_or(BigError::ExponentOutOfRange(exponent))?;
    if !(-EXPONENT_LIMIT..=EXPONENT_LIMIT).contains(&shift) {
        return Err(BigError::ExponentOutOfRange(shift));
    }

    let mut digits = String::with_capacity(lit.int_digits.len() + lit.frac_digits.len());
    digits.push_str(lit.int_digits);
    digits.push_str(lit.frac_digits);
    let mut magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| BigError::InvalidLiteral(text.to_string()))?;

    if round {
        magnitude <<= 1u32;
    }
    magnitude = match shift.cmp(&0) {
        Ordering::Greater => magnitude * pow10(shift as u32),
        Ordering::Equal => magnitude,
        Ordering::Less => magnitude / pow10((-shift) as u32),
    };
    if round {
        let bump = magnitude.is_odd();
        magnitude >>= 1u32;
        if bump {
            magnitude += 1u32;
        }
    }
    if lit.negative {
        magnitude = -magnitude;
    }
    Ok(BigDecimal::from_scaled(magnitude, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn magnitude_of(text: &str, scale: u32) -> BigInt {
        parse_text(text, scale).unwrap().magnitude().clone()
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(magnitude_of("2.5", 5), BigInt::from(250_000));
        assert_eq!(magnitude_of("0.00042", 7), BigInt::from(4200));
        assert_eq!(magnitude_of("123", 2), BigInt::from(12_300));
    }

    #[test]
    fn test_signs_and_leading_dot() {
        assert_eq!(magnitude_of("+2.5", 3), BigInt::from(2500));
        assert_eq!(magnitude_of("-2.5", 3), BigInt::from(-2500));
        assert_eq!(magnitude_of(".5", 2), BigInt::from(50));
        assert_eq!(magnitude_of("-.5", 2), BigInt::from(-50));
        assert_eq!(magnitude_of("5.", 2), BigInt::from(500));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(magnitude_of("1e3", 2), BigInt::from(100_000));
        assert_eq!(magnitude_of("1E3", 2), BigInt::from(100_000));
        assert_eq!(magnitude_of("2.5e-1", 4), BigInt::from(2500));
        assert_eq!(magnitude_of("12e+2", 1), BigInt::from(12_000));
    }

    #[test]
    fn test_rejects_malformed_literals() {
        for bad in [
            "", ".", "+", "-", "1..2", "1.2.3", "e5", "1e", "1e+", "1e1.5", "abc",
            "1a", "--1", "1 ", " 1", "0x10",
        ] {
            let err = parse_text(bad, 5).unwrap_err();
            assert!(
                matches!(err, BigError::InvalidLiteral(_)),
                "expected syntax error for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_shift_limit() {
        // scale + exponent - fraction digits must stay within +/-320M.
        assert!(matches!(
            parse_text("1e320000000", 5),
            Err(BigError::ExponentOutOfRange(_))
        ));
        assert!(matches!(
            parse_text("1e-320000010", 5),
            Err(BigError::ExponentOutOfRange(_))
        ));
        assert!(matches!(
            parse_text("1e99999999999999999999", 5),
            Err(BigError::ExponentOutOfRange(_))
        ));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // One digit is dropped; the doubled extra bit decides the direction.
        assert_eq!(
            parse_text_with("0.15", 1, true).unwrap().magnitude(),
            &BigInt::from(2)
        );
        assert_eq!(
            parse_text_with("0.25", 1, true).unwrap().magnitude(),
            &BigInt::from(3)
        );
        assert_eq!(
            parse_text_with("0.24", 1, true).unwrap().magnitude(),
            &BigInt::from(2)
        );
        assert_eq!(
            parse_text_with("-0.15", 1, true).unwrap().magnitude(),
            &BigInt::from(-2)
        );
        assert_eq!(
            parse_text_with("-0.24", 1, true).unwrap().magnitude(),
            &BigInt::from(-2)
        );
    }

    #[test]
    fn test_round_down_truncates() {
        assert_eq!(
            parse_text_with("0.19", 1, false).unwrap().magnitude(),
            &BigInt::from(1)
        );
        assert_eq!(
            parse_text_with("-0.19", 1, false).unwrap().magnitude(),
            &BigInt::from(-1)
        );
        // Exact literals are identical under both modes.
        assert_eq!(
            parse_text_with("12.34", 4, false).unwrap().magnitude(),
            parse_text_with("12.34", 4, true).unwrap().magnitude(),
        );
    }

    #[test]
    fn test_validator_mirrors_parser() {
        for good in ["0", "2.500", "-.5", "+1e-9", "9.E4", "007"] {
            assert!(is_valid_literal(good), "expected {:?} to validate", good);
            assert!(parse_text(good, 5).is_ok());
        }
        for bad in ["", ".", "1..2", "e5", "5e", "1,5", "¾"] {
            assert!(!is_valid_literal(bad), "expected {:?} to fail", bad);
            assert!(parse_text(bad, 5).is_err());
        }
    }

    #[test]
    fn test_float_operand() {
        let v = Operand::Float(0.5).coerce(3).unwrap();
        assert_eq!(v.magnitude(), &BigInt::from(500));
        assert!(Operand::Float(f64::NAN).coerce(3).is_err());
        assert!(Operand::Float(f64::INFINITY).coerce(3).is_err());
    }

    #[test]
    fn test_int_operands_are_exact() {
        let v = Operand::Int(-42).coerce(6).unwrap();
        assert_eq!(v.magnitude(), &BigInt::from(-42_000_000));
        let b = Operand::Big(BigInt::from(7)).coerce(2).unwrap();
        assert_eq!(b.magnitude(), &BigInt::from(700));
    }

    #[test]
    fn test_value_operand_rescales_without_rounding() {
        let fine = BigDecimal::new("1.99", 2).unwrap();
        let coarse = Operand::Value(fine).coerce(1).unwrap();
        // Truncating shrink, no half-up correction.
        assert_eq!(coarse.magnitude(), &BigInt::from(19));
    }

    proptest! {
        #[test]
        fn prop_round_trip_strips_trailing_zeros(
            int_part in "[0-9]{1,12}",
            frac_part in "[0-9]{0,8}",
        ) {
            let text = if frac_part.is_empty() {
                int_part.clone()
            } else {
                format!("{}.{}", int_part, frac_part)
            };
            let parsed = parse_text(&text, 10).unwrap();
            let canonical = parsed.to_string();

            let mut expected = text.trim_start_matches('0').to_string();
            if expected.is_empty() || expected.starts_with('.') {
                expected.insert(0, '0');
            }
            if expected.contains('.') {
                expected = expected.trim_end_matches('0').trim_end_matches('.').to_string();
                if expected.is_empty() {
                    expected.push('0');
                }
            }
            prop_assert_eq!(canonical, expected);
        }

        #[test]
        fn prop_validator_agrees_with_parser(text in "\\PC{0,12}") {
            prop_assert_eq!(is_valid_literal(&text), parse_text(&text, 5).is_ok()
                || matches!(parse_text(&text, 5), Err(BigError::ExponentOutOfRange(_))));
        }
    }
}
