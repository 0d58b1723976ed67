// ============================================================================
// Random Generator
// Uniform [0, 1) sampling from a cryptographically secure source
// ============================================================================

use num_bigint::{BigInt, BigUint};
use rand::rngs::OsRng;
use rand::RngCore;

use super::errors::BigResult;
use super::value::{pow10, BigDecimal};
use crate::config;

/// Entropy units requested from the OS per call, words or bytes.
const MAX_BATCH: usize = 16_384;

/// 32-bit words of entropy per decimal digit: log2(10) / 32.
const WORDS_PER_DIGIT: f64 = 0.103_810_252_966;

/// Bytes of entropy per decimal digit: log2(10) / 5.
///
/// Next to the word sampler this over-draws by an 8/5 factor, which pushes
/// the modulo bias further down at the cost of extra entropy.
const BYTES_PER_DIGIT: f64 = 0.664_385_618_978;

impl BigDecimal {
    /// Uniform random value in `[0, 1)` at the given accuracy.
    ///
    /// Draws `ceil(accuracy × log2(10) / 32) + 2` 32-bit words from the
    /// OS entropy source, assembles them into one integer by successive
    /// 32-bit left shifts, and reduces modulo the align. The two buffer
    /// words keep the modulo bias negligible, though not zero.
    ///
    /// # Errors
    /// Range error if the accuracy is out of bounds.
    pub fn random(accuracy: u32) -> BigResult<Self> {
        config::check_accuracy(accuracy)?;
        let words = (f64::from(accuracy) * WORDS_PER_DIGIT).ceil() as usize + 2;
        let number = BigInt::from(draw_integer(words, 4));
        let align = pow10(accuracy);
        Ok(Self {
            magnitude: number % &align,
            scale: accuracy,
            align,
        })
    }

    /// Uniform random value in `[0, 1)` at this value's accuracy.
    ///
    /// Byte-granular variant: draws `ceil(accuracy × log2(10) / 5) + 2`
    /// bytes and assembles them by successive 8-bit left shifts before the
    /// modulo reduction. Infallible, since this value's accuracy is valid
    /// by construction.
    pub fn random_like(&self) -> Self {
        let bytes = (f64::from(self.scale) * BYTES_PER_DIGIT).ceil() as usize + 2;
        let number = draw_integer(bytes, 1);
        self.with_magnitude(BigInt::from(number) % &self.align)
    }
}

/// Draw `units` entropy units of `unit_bytes` each, in batches of at most
/// [`MAX_BATCH`] units per OS call, and assemble them big-endian.
///
/// Concatenating big-endian units is exactly the successive
/// `unit_bytes * 8`-bit left-shift accumulation, batch boundaries included.
fn draw_integer(units: usize, unit_bytes: usize) -> BigUint {
    let mut buffer = vec![0u8; units * unit_bytes];
    let mut batches = 0usize;
    for chunk in buffer.chunks_mut(MAX_BATCH * unit_bytes) {
        OsRng.fill_bytes(chunk);
        batches += 1;
    }
    tracing::trace!(units, unit_bytes, batches, "drew entropy for random sample");
    BigUint::from_bytes_be(&buffer)
}
