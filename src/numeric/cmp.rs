// ============================================================================
// Comparator
// Scale-normalized ordering, operand comparisons, sign predicates
// ============================================================================

use std::cmp::Ordering;

use num_traits::{Signed, Zero};

use super::errors::{BigError, BigResult};
use super::parse::Operand;
use super::value::{pow10, BigDecimal};

impl BigDecimal {
    /// Whether this value is less than the operand, compared at this value's
    /// accuracy.
    pub fn lt(&self, value: impl Into<Operand>) -> BigResult<bool> {
        Ok(self.magnitude < value.into().coerce(self.scale)?.magnitude)
    }

    /// Whether this value is greater than the operand, compared at this
    /// value's accuracy.
    pub fn gt(&self, value: impl Into<Operand>) -> BigResult<bool> {
        Ok(self.magnitude > value.into().coerce(self.scale)?.magnitude)
    }

    /// Whether this value is less than or equal to the operand, compared at
    /// this value's accuracy.
    pub fn le(&self, value: impl Into<Operand>) -> BigResult<bool> {
        Ok(self.magnitude <= value.into().coerce(self.scale)?.magnitude)
    }

    /// Whether this value is greater than or equal to the operand, compared
    /// at this value's accuracy.
    pub fn ge(&self, value: impl Into<Operand>) -> BigResult<bool> {
        Ok(self.magnitude >= value.into().coerce(self.scale)?.magnitude)
    }

    /// Whether this value equals the operand once the operand is coerced to
    /// this value's accuracy.
    ///
    /// Coercion truncates, so operands differing only below this value's
    /// accuracy compare equal here; the `PartialEq` impl between two values
    /// is lossless instead.
    pub fn eq_value(&self, value: impl Into<Operand>) -> BigResult<bool> {
        Ok(self.magnitude == value.into().coerce(self.scale)?.magnitude)
    }

    /// Negation of [`eq_value`](Self::eq_value).
    pub fn ne_value(&self, value: impl Into<Operand>) -> BigResult<bool> {
        Ok(self.magnitude != value.into().coerce(self.scale)?.magnitude)
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Whether the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        (&self.magnitude % &self.align).is_zero()
    }

    /// Whether the value is a whole multiple of the operand.
    ///
    /// # Errors
    /// Range error when the operand coerces to zero at this accuracy.
    pub fn is_divisible_by(&self, value: impl Into<Operand>) -> BigResult<bool> {
        let divisor = value.into().coerce(self.scale)?;
        if divisor.magnitude.is_zero() {
            return Err(BigError::DivisionByZero);
        }
        Ok((&self.magnitude % divisor.magnitude).is_zero())
    }

    /// Check if the value is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    /// Check if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    /// Check if the value is zero or greater.
    #[inline]
    pub fn is_non_negative(&self) -> bool {
        !self.magnitude.is_negative()
    }

    /// Check if the value is zero or less.
    #[inline]
    pub fn is_non_positive(&self) -> bool {
        !self.magnitude.is_positive()
    }
}

// ============================================================================
// Trait Implementations
// Lossless comparison: the narrower scale is grown, never shrunk
// ============================================================================

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.magnitude.cmp(&other.magnitude),
            Ordering::Less => {
                let grown = &self.magnitude * pow10(other.scale - self.scale);
                grown.cmp(&other.magnitude)
            },
            Ordering::Greater => {
                let grown = &other.magnitude * pow10(self.scale - other.scale);
                self.magnitude.cmp(&grown)
            },
        }
    }
}
