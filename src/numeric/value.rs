// ============================================================================
// Scaled Decimal Value
// Arbitrary-precision fixed-point decimal backed by a scaled BigInt
// ============================================================================

use num_bigint::BigInt;
use num_traits::Zero;

use super::errors::BigResult;
use super::parse::Operand;
use crate::config;

/// Arbitrary-precision fixed-point decimal number.
///
/// Internally stores `value × 10^accuracy` as a [`BigInt`] magnitude, where
/// the accuracy (decimal digits after the point) is chosen per value in
/// [1, 320 000 000]. The cached `align` factor is always `10^accuracy`.
///
/// Values are immutable: every operation coerces its operand to the
/// receiver's accuracy and returns a freshly constructed value, so `0.1 +
/// 0.2` is exactly `0.3` at any accuracy.
///
/// # Example
/// ```
/// use bigfix::prelude::*;
///
/// let a = BigDecimal::new("0.1", 10)?;
/// let b = a.add("0.2")?;
/// assert_eq!(b.to_string(), "0.3");
/// # Ok::<(), BigError>(())
/// ```
#[derive(Clone)]
pub struct BigDecimal {
    /// The represented quantity multiplied by `10^scale`.
    pub(crate) magnitude: BigInt,
    /// Decimal digits retained after the point.
    pub(crate) scale: u32,
    /// Cached `10^scale`; rebuilt whenever a value is produced at a new scale.
    pub(crate) align: BigInt,
}

/// Ten to the power of `exp`.
#[inline]
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

impl BigDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value from any accepted input at the given accuracy.
    ///
    /// Text literals follow `[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?`;
    /// integer inputs are exact at any accuracy; an existing value is
    /// rescaled (truncating shrink, zero-extending grow).
    ///
    /// # Errors
    /// Syntax errors for malformed literals; range errors for an accuracy or
    /// computed exponent shift outside bounds.
    pub fn new(value: impl Into<Operand>, accuracy: u32) -> BigResult<Self> {
        config::check_accuracy(accuracy)?;
        value.into().coerce(accuracy)
    }

    /// Create a value at the process-wide default accuracy.
    pub fn with_default_accuracy(value: impl Into<Operand>) -> BigResult<Self> {
        value.into().coerce(config::default_accuracy())
    }

    /// Zero at the given accuracy.
    pub fn zero(accuracy: u32) -> BigResult<Self> {
        config::check_accuracy(accuracy)?;
        Ok(Self::from_scaled(BigInt::zero(), accuracy))
    }

    /// Create from a pre-scaled magnitude, i.e. `value × 10^accuracy`.
    ///
    /// # Errors
    /// Range error if the accuracy is out of bounds.
    pub fn from_raw(magnitude: BigInt, accuracy: u32) -> BigResult<Self> {
        config::check_accuracy(accuracy)?;
        Ok(Self::from_scaled(magnitude, accuracy))
    }

    /// Assemble from parts the parser or an operation already validated.
    #[inline]
    pub(crate) fn from_scaled(magnitude: BigInt, scale: u32) -> Self {
        Self {
            magnitude,
            scale,
            align: pow10(scale),
        }
    }

    /// A new value at this value's scale, reusing the cached align.
    #[inline]
    pub(crate) fn with_magnitude(&self, magnitude: BigInt) -> Self {
        Self {
            magnitude,
            scale: self.scale,
            align: self.align.clone(),
        }
    }

    // ========================================================================
    // Precision Rescaler
    // ========================================================================

    /// The same quantity at a new accuracy.
    ///
    /// Growing multiplies the magnitude by a power of ten (exact); shrinking
    /// divides with truncation toward zero. Unlike parsing, no rounding
    /// correction is applied when digits are dropped.
    ///
    /// # Errors
    /// Range error if `digits` is out of bounds.
    pub fn with_accuracy(&self, digits: u32) -> BigResult<Self> {
        config::check_accuracy(digits)?;
        Ok(self.rescaled(digits))
    }

    /// Rescale to an already-validated scale.
    pub(crate) fn rescaled(&self, scale: u32) -> Self {
        if scale == self.scale {
            return self.clone();
        }
        let magnitude = if scale > self.scale {
            &self.magnitude * pow10(scale - self.scale)
        } else {
            &self.magnitude / pow10(self.scale - scale)
        };
        Self::from_scaled(magnitude, scale)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The accuracy of this value, in decimal digits after the point.
    #[inline]
    pub fn accuracy(&self) -> u32 {
        self.scale
    }

    /// The scaled magnitude: the represented quantity times `10^accuracy`.
    #[inline]
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    /// The scaling factor `10^accuracy`.
    #[inline]
    pub fn align(&self) -> &BigInt {
        &self.align
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Check if the value is exactly one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.magnitude == self.align
    }
}

impl Default for BigDecimal {
    /// Zero at the process-wide default accuracy.
    fn default() -> Self {
        Self::from_scaled(BigInt::zero(), config::default_accuracy())
    }
}

impl std::str::FromStr for BigDecimal {
    type Err = super::errors::BigError;

    /// Parse a literal at the process-wide default accuracy.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::with_default_accuracy(text)
    }
}

// ============================================================================
// Serde (value travels as accuracy + canonical string)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::BigDecimal;

    #[derive(Serialize, Deserialize)]
    struct Repr {
        accuracy: u32,
        value: String,
    }

    impl Serialize for BigDecimal {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Repr {
                accuracy: self.accuracy(),
                value: self.to_string(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for BigDecimal {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = Repr::deserialize(deserializer)?;
            BigDecimal::new(repr.value.as_str(), repr.accuracy).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_requested_accuracy() {
        let zero = BigDecimal::zero(7).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.accuracy(), 7);
        assert_eq!(zero.align(), &pow10(7));
    }

    #[test]
    fn test_zero_rejects_bad_accuracy() {
        assert!(BigDecimal::zero(0).is_err());
        assert!(BigDecimal::zero(320_000_001).is_err());
    }

    #[test]
    fn test_align_tracks_scale() {
        let v = BigDecimal::new("2.5", 3).unwrap();
        assert_eq!(v.align(), &BigInt::from(1000));
        let wider = v.with_accuracy(6).unwrap();
        assert_eq!(wider.align(), &BigInt::from(1_000_000));
    }

    #[test]
    fn test_rescale_grow_is_exact() {
        let v = BigDecimal::new("1.25", 2).unwrap();
        let grown = v.with_accuracy(6).unwrap();
        assert_eq!(grown.magnitude(), &BigInt::from(1_250_000));
        assert_eq!(grown.to_string(), "1.25");
    }

    #[test]
    fn test_rescale_shrink_truncates_toward_zero() {
        let v = BigDecimal::new("1.279", 3).unwrap();
        assert_eq!(v.with_accuracy(1).unwrap().to_string(), "1.2");

        let neg = BigDecimal::new("-1.279", 3).unwrap();
        assert_eq!(neg.with_accuracy(1).unwrap().to_string(), "-1.2");
    }

    #[test]
    fn test_rescale_shrink_only_chain_composes() {
        let v = BigDecimal::new("3.14159265", 8).unwrap();
        let step = v.with_accuracy(5).unwrap().with_accuracy(2).unwrap();
        let direct = v.with_accuracy(2).unwrap();
        assert_eq!(step.to_string(), direct.to_string());
    }

    #[test]
    fn test_from_raw_round_trip() {
        let v = BigDecimal::from_raw(BigInt::from(12345), 4).unwrap();
        assert_eq!(v.to_string(), "1.2345");
        assert_eq!(v.magnitude(), &BigInt::from(12345));
    }

    #[test]
    fn test_integer_construction_is_exact_at_any_accuracy() {
        let big = BigInt::parse_bytes(b"9999999999999999999999999999", 10).unwrap();
        let v = BigDecimal::new(big.clone(), 1).unwrap();
        assert_eq!(v.to_string(), "9999999999999999999999999999");
        assert_eq!(v.magnitude(), &(big * 10));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let v = BigDecimal::new("-12.034", 9).unwrap();
        let encoded = serde_json::to_string(&v).unwrap();
        let decoded: BigDecimal = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.accuracy(), 9);
        assert_eq!(decoded, v);
    }
}
