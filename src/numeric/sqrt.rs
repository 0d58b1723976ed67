// ============================================================================
// Integer Square Root
// Newton-Raphson on the magnitude-times-align product, with fast-path seeds
// ============================================================================

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use super::errors::{BigError, BigResult};
use super::value::BigDecimal;

/// Largest integer exactly representable in an f64 mantissa (2^53 - 1).
const MAX_EXACT_F64: u64 = (1u64 << 53) - 1;

/// Newton-Raphson seed once the square no longer fits a finite f64 (2^52 - 2).
const WIDE_SEED: u64 = (1u64 << 52) - 2;

impl BigDecimal {
    /// Square root at this value's accuracy.
    ///
    /// The root of `magnitude × align` is itself a magnitude at the same
    /// accuracy, so the result needs no rescaling. Digits beyond the
    /// accuracy are dropped (the root is floored, never rounded up).
    ///
    /// # Errors
    /// Range error for negative values.
    ///
    /// # Example
    /// ```
    /// use bigfix::prelude::*;
    ///
    /// let two = BigDecimal::new("2", 20)?;
    /// assert_eq!(two.sqrt()?.to_string(), "1.4142135623730950488");
    /// # Ok::<(), BigError>(())
    /// ```
    pub fn sqrt(&self) -> BigResult<Self> {
        if self.magnitude.is_negative() {
            return Err(BigError::NegativeSquareRoot);
        }
        if self.magnitude.is_zero() {
            return Ok(self.with_magnitude(BigInt::zero()));
        }
        let number = &self.magnitude * &self.align;
        Ok(self.with_magnitude(isqrt(&number)))
    }
}

/// Floor of the square root of a positive integer.
fn isqrt(number: &BigInt) -> BigInt {
    // Exactly-representable range: the hardware root is the answer, modulo
    // one possible upward rounding at the integer boundary.
    if let Some(small) = number.to_u64().filter(|v| *v <= MAX_EXACT_F64) {
        let mut root = (small as f64).sqrt().floor() as u64;
        if root.checked_mul(root).map_or(true, |sq| sq > small) {
            root -= 1;
        }
        return BigInt::from(root);
    }

    // While the square still fits a finite f64, the hardware root lands a
    // few units above or below the true floor; seeding a little under it
    // keeps the iteration short. Past f64 range, fall back to a fixed seed.
    let seed = number
        .to_f64()
        .filter(|approx| approx.is_finite())
        .and_then(|approx| BigInt::from_f64(approx.sqrt().floor() - 3.0))
        .filter(|guess| guess.is_positive())
        .unwrap_or_else(|| BigInt::from(WIDE_SEED));

    // next = (number / current + current) / 2, until a fixed point or a
    // +/-1 oscillation; the smaller of an oscillating pair is the floor.
    let mut root = seed;
    let mut prev = BigInt::from(-1);
    while root != prev && root != &prev + 1u32 {
        prev = root;
        root = ((number / &prev) + &prev) >> 1u32;
    }
    prev
}
