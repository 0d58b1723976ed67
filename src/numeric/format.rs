// ============================================================================
// Formatter
// Canonical, fixed-digit, and significant-digit renderings
// ============================================================================

use std::fmt;

use num_traits::{Signed, Zero};

use super::value::BigDecimal;

impl BigDecimal {
    /// Sign flag, integer digits, and the full `scale`-wide fraction digits.
    fn digit_parts(&self) -> (bool, String, String) {
        let negative = self.magnitude.is_negative();
        let digits = self.magnitude.magnitude().to_string();
        let scale = self.scale as usize;
        if digits.len() <= scale {
            let mut fraction = "0".repeat(scale - digits.len());
            fraction.push_str(&digits);
            (negative, "0".to_string(), fraction)
        } else {
            let split = digits.len() - scale;
            (negative, digits[..split].to_string(), digits[split..].to_string())
        }
    }

    /// Render with exactly `digits` fractional digits.
    ///
    /// The fraction is zero-padded on the right or truncated, never rounded.
    /// Zero digits yields the integer part alone.
    pub fn to_fixed(&self, digits: u32) -> String {
        let digits = digits as usize;
        let (negative, int_part, mut fraction) = self.digit_parts();
        let sign = if negative { "-" } else { "" };
        if digits == 0 {
            return format!("{}{}", sign, int_part);
        }
        if fraction.len() > digits {
            fraction.truncate(digits);
        } else {
            let pad = digits - fraction.len();
            fraction.push_str(&"0".repeat(pad));
        }
        format!("{}{}.{}", sign, int_part, fraction)
    }

    /// Render with at most `digits` fractional digits, trailing zeros
    /// stripped.
    ///
    /// With `digits` at or above this value's accuracy the canonical string
    /// is returned unchanged.
    pub fn to_digits(&self, digits: u32) -> String {
        if self.magnitude.is_zero() {
            return "0".to_string();
        }
        if digits >= self.scale {
            return self.to_string();
        }
        let (negative, int_part, fraction) = self.digit_parts();
        let sign = if negative { "-" } else { "" };
        let kept = fraction[..digits as usize].trim_end_matches('0');
        if kept.is_empty() {
            format!("{}{}", sign, int_part)
        } else {
            format!("{}{}.{}", sign, int_part, kept)
        }
    }

    /// Render with the last `digits` fractional digits masked off.
    ///
    /// Shorthand for `to_digits(accuracy - digits)`; useful for hiding
    /// accuracy-loss noise such as `19.recip().recip()` ending in
    /// `...999982`.
    pub fn clear_digits(&self, digits: u32) -> String {
        self.to_digits(self.scale.saturating_sub(digits))
    }
}

impl fmt::Display for BigDecimal {
    /// Canonical rendering: trailing fractional zeros stripped, `"0"` for
    /// zero, `-` prefix taken from the magnitude's sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.magnitude.is_zero() {
            return f.write_str("0");
        }
        let (negative, int_part, fraction) = self.digit_parts();
        let sign = if negative { "-" } else { "" };
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            write!(f, "{}{}", sign, int_part)
        } else {
            write!(f, "{}{}.{}", sign, int_part, fraction)
        }
    }
}

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigDecimal({}, accuracy={})", self, self.scale)
    }
}
