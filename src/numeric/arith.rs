// ============================================================================
// Arithmetic Engine
// Scale-preserving arithmetic over coerced operands
// ============================================================================

use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use super::errors::{BigError, BigResult};
use super::parse::Operand;
use super::value::BigDecimal;

/// Largest accepted bit-shift amount, in either direction.
const SHIFT_LIMIT: i64 = 1_000_000_000;

impl BigDecimal {
    // ========================================================================
    // Ring operations
    // ========================================================================

    /// Sum of this value and the operand, at this value's accuracy. Exact.
    pub fn add(&self, value: impl Into<Operand>) -> BigResult<Self> {
        let rhs = value.into().coerce(self.scale)?;
        Ok(self.with_magnitude(&self.magnitude + rhs.magnitude))
    }

    /// Difference of this value and the operand, at this value's accuracy.
    /// Exact.
    pub fn sub(&self, value: impl Into<Operand>) -> BigResult<Self> {
        let rhs = value.into().coerce(self.scale)?;
        Ok(self.with_magnitude(&self.magnitude - rhs.magnitude))
    }

    /// Product of this value and the operand.
    ///
    /// The product of the magnitudes is divided back down by the align with
    /// truncation toward zero. Truncation applies regardless of the global
    /// rounding mode, which only governs parsing; products therefore lose
    /// their sub-accuracy digits silently where a fresh parse of the same
    /// quantity would round.
    pub fn mul(&self, value: impl Into<Operand>) -> BigResult<Self> {
        let rhs = value.into().coerce(self.scale)?;
        Ok(self.with_magnitude(&self.magnitude * rhs.magnitude / &self.align))
    }

    /// Quotient of this value by the operand, truncating toward zero.
    ///
    /// # Errors
    /// Range error when the operand coerces to zero at this accuracy.
    pub fn div(&self, value: impl Into<Operand>) -> BigResult<Self> {
        let rhs = value.into().coerce(self.scale)?;
        if rhs.magnitude.is_zero() {
            return Err(BigError::DivisionByZero);
        }
        Ok(self.with_magnitude(&self.magnitude * &self.align / rhs.magnitude))
    }

    /// Multiplicative inverse, truncating toward zero.
    ///
    /// # Errors
    /// Range error when this value is zero.
    pub fn recip(&self) -> BigResult<Self> {
        if self.magnitude.is_zero() {
            return Err(BigError::DivisionByZero);
        }
        Ok(self.with_magnitude(&self.align * &self.align / &self.magnitude))
    }

    /// Square of this value, truncating like [`mul`](Self::mul).
    pub fn sqr(&self) -> Self {
        self.with_magnitude(&self.magnitude * &self.magnitude / &self.align)
    }

    /// Cube of this value, truncating like [`mul`](Self::mul).
    pub fn cube(&self) -> Self {
        let square = &self.magnitude * &self.magnitude;
        self.with_magnitude(square * &self.magnitude / (&self.align * &self.align))
    }

    /// Remainder of this value divided by the operand (truncated division,
    /// so the result keeps this value's sign).
    ///
    /// # Errors
    /// Range error when the operand coerces to zero at this accuracy.
    pub fn rem(&self, value: impl Into<Operand>) -> BigResult<Self> {
        let rhs = value.into().coerce(self.scale)?;
        if rhs.magnitude.is_zero() {
            return Err(BigError::DivisionByZero);
        }
        Ok(self.with_magnitude(&self.magnitude % rhs.magnitude))
    }

    // ========================================================================
    // Sign manipulation
    // ========================================================================

    /// This value negated.
    pub fn neg(&self) -> Self {
        self.with_magnitude(-&self.magnitude)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        self.with_magnitude(self.magnitude.abs())
    }

    /// Negative of the absolute value: both `5` and `-5` map to `-5`.
    pub fn neg_abs(&self) -> Self {
        self.with_magnitude(-self.magnitude.abs())
    }

    /// The sign as a value at this value's accuracy: `-1`, `0`, or `1`.
    pub fn signum(&self) -> Self {
        self.with_magnitude(self.magnitude.signum() * &self.align)
    }

    // ========================================================================
    // Snapping to a grid
    // ========================================================================

    /// Greatest whole number less than or equal to this value.
    pub fn floor(&self) -> Self {
        let remainder = self.magnitude.mod_floor(&self.align);
        self.with_magnitude(&self.magnitude - remainder)
    }

    /// Smallest whole number greater than or equal to this value.
    pub fn ceil(&self) -> Self {
        let remainder = self.magnitude.mod_floor(&self.align);
        if remainder.is_zero() {
            self.clone()
        } else {
            self.with_magnitude(&self.magnitude + (&self.align - remainder))
        }
    }

    /// Nearest whole number, ties toward positive infinity.
    pub fn round(&self) -> Self {
        let remainder = self.magnitude.mod_floor(&self.align);
        let half = &self.align / 2u32;
        if remainder < half {
            self.with_magnitude(&self.magnitude - remainder)
        } else {
            self.with_magnitude(&self.magnitude + (&self.align - remainder))
        }
    }

    /// Greatest multiple of `interval` less than or equal to this value.
    ///
    /// # Errors
    /// Range error when the interval coerces to zero at this accuracy.
    pub fn floor_by(&self, interval: impl Into<Operand>) -> BigResult<Self> {
        let step = self.interval_step(interval)?;
        let remainder = self.magnitude.mod_floor(&step);
        Ok(self.with_magnitude(&self.magnitude - remainder))
    }

    /// Smallest multiple of `interval` greater than or equal to this value.
    ///
    /// # Errors
    /// Range error when the interval coerces to zero at this accuracy.
    pub fn ceil_by(&self, interval: impl Into<Operand>) -> BigResult<Self> {
        let step = self.interval_step(interval)?;
        let remainder = self.magnitude.mod_floor(&step);
        Ok(if remainder.is_zero() {
            self.clone()
        } else {
            self.with_magnitude(&self.magnitude + (step - remainder))
        })
    }

    /// Nearest multiple of `interval`, upper multiple on remainders of at
    /// least half the interval.
    ///
    /// # Errors
    /// Range error when the interval coerces to zero at this accuracy.
    pub fn round_by(&self, interval: impl Into<Operand>) -> BigResult<Self> {
        let step = self.interval_step(interval)?;
        let remainder = self.magnitude.mod_floor(&step);
        let half = &step / 2u32;
        Ok(if remainder < half {
            self.with_magnitude(&self.magnitude - remainder)
        } else {
            self.with_magnitude(&self.magnitude + (step - remainder))
        })
    }

    /// Coerce an interval operand and yield the positive grid step.
    fn interval_step(&self, interval: impl Into<Operand>) -> BigResult<BigInt> {
        let step = interval.into().coerce(self.scale)?;
        if step.magnitude.is_zero() {
            return Err(BigError::DivisionByZero);
        }
        Ok(step.magnitude.abs())
    }

    // ========================================================================
    // Bit shift
    // ========================================================================

    /// This value multiplied by two to the power of `bits`.
    ///
    /// Negative amounts shift right arithmetically, flooring toward negative
    /// infinity.
    ///
    /// # Errors
    /// Range error when `bits` is outside ±1 000 000 000.
    pub fn shift(&self, bits: i64) -> BigResult<Self> {
        if !(-SHIFT_LIMIT..=SHIFT_LIMIT).contains(&bits) {
            return Err(BigError::ShiftOutOfRange(bits));
        }
        Ok(if bits == 0 {
            self.clone()
        } else if bits > 0 {
            self.with_magnitude(&self.magnitude << bits as usize)
        } else {
            self.with_magnitude(&self.magnitude >> (-bits) as usize)
        })
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// The smaller of this value and the operand, compared at this value's
    /// accuracy.
    pub fn min(&self, value: impl Into<Operand>) -> BigResult<Self> {
        let other = value.into().coerce(self.scale)?;
        Ok(if other.magnitude < self.magnitude {
            other
        } else {
            self.clone()
        })
    }

    /// The larger of this value and the operand, compared at this value's
    /// accuracy.
    pub fn max(&self, value: impl Into<Operand>) -> BigResult<Self> {
        let other = value.into().coerce(self.scale)?;
        Ok(if other.magnitude > self.magnitude {
            other
        } else {
            self.clone()
        })
    }

    /// The smallest of this value and every operand in `values`.
    pub fn min_of<I>(&self, values: I) -> BigResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let mut best = self.clone();
        for value in values {
            let candidate = value.into().coerce(self.scale)?;
            if candidate.magnitude < best.magnitude {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// The largest of this value and every operand in `values`.
    pub fn max_of<I>(&self, values: I) -> BigResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let mut best = self.clone();
        for value in values {
            let candidate = value.into().coerce(self.scale)?;
            if candidate.magnitude > best.magnitude {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// This value confined to `[min, max]`, capping at `max` before raising
    /// to `min` (so `min` wins when the bounds cross).
    pub fn clamp(
        &self,
        min: impl Into<Operand>,
        max: impl Into<Operand>,
    ) -> BigResult<Self> {
        let min = min.into().coerce(self.scale)?;
        let max = max.into().coerce(self.scale)?;
        if self.magnitude > max.magnitude {
            return Ok(max);
        }
        if self.magnitude < min.magnitude {
            return Ok(min);
        }
        Ok(self.clone())
    }
}

// ============================================================================
// Operator Traits
// Value-to-value forms are infallible; fallible forms stay methods
// ============================================================================

impl Add for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: Self) -> BigDecimal {
        let rhs = rhs.rescaled(self.scale);
        self.with_magnitude(&self.magnitude + rhs.magnitude)
    }
}

impl Sub for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: Self) -> BigDecimal {
        let rhs = rhs.rescaled(self.scale);
        self.with_magnitude(&self.magnitude - rhs.magnitude)
    }
}

impl Mul for &BigDecimal {
    type Output = BigDecimal;

    fn mul(self, rhs: Self) -> BigDecimal {
        let rhs = rhs.rescaled(self.scale);
        self.with_magnitude(&self.magnitude * rhs.magnitude / &self.align)
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        self.with_magnitude(-&self.magnitude)
    }
}
