// ============================================================================
// Process-Wide Configuration
// Default accuracy and parse rounding mode, read at construction time only
// ============================================================================

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::numeric::{BigError, BigResult};

/// Smallest accepted accuracy, in decimal digits.
pub const MIN_ACCURACY: u32 = 1;

/// Largest accepted accuracy, in decimal digits.
pub const MAX_ACCURACY: u32 = 320_000_000;

/// Accuracy used when a constructor is not given one explicitly.
static DEFAULT_ACCURACY: AtomicU32 = AtomicU32::new(100);

/// When set, parsing truncates toward zero instead of applying the
/// extra-bit round-half-up correction.
static ROUND_DOWN: AtomicBool = AtomicBool::new(false);

/// Accuracy applied when a constructor receives none.
#[inline]
pub fn default_accuracy() -> u32 {
    DEFAULT_ACCURACY.load(Ordering::Relaxed)
}

/// Set the process-wide default accuracy.
///
/// Values are read at construction time only; already-constructed values are
/// unaffected. Treat this as configure-once-at-startup: the settings are
/// plain atomics and are not meant to be flipped while other threads are
/// constructing values.
///
/// # Errors
/// Returns a range error if `digits` is outside [`MIN_ACCURACY`, `MAX_ACCURACY`].
pub fn set_default_accuracy(digits: u32) -> BigResult<()> {
    check_accuracy(digits)?;
    DEFAULT_ACCURACY.store(digits, Ordering::Relaxed);
    tracing::debug!(digits, "default accuracy updated");
    Ok(())
}

/// Whether parsing currently truncates toward zero.
#[inline]
pub fn round_down() -> bool {
    ROUND_DOWN.load(Ordering::Relaxed)
}

/// Select truncate-toward-zero parsing (`true`) or the extra-bit
/// round-half-up correction (`false`, the initial mode).
///
/// Same configure-once-at-startup guidance as [`set_default_accuracy`].
pub fn set_round_down(enabled: bool) {
    ROUND_DOWN.store(enabled, Ordering::Relaxed);
    tracing::debug!(enabled, "parse rounding mode updated");
}

/// Validate an accuracy argument against the accepted bounds.
///
/// Callers in hot loops can run this ahead of time and then rely on the
/// constructors succeeding.
pub fn check_accuracy(digits: u32) -> BigResult<()> {
    if digits < MIN_ACCURACY {
        Err(BigError::AccuracyOutOfRange(i64::from(digits)))
    } else if digits > MAX_ACCURACY {
        Err(BigError::AccuracyExceedsMaximum(i64::from(digits)))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_bounds() {
        assert!(check_accuracy(MIN_ACCURACY).is_ok());
        assert!(check_accuracy(MAX_ACCURACY).is_ok());
        assert_eq!(
            check_accuracy(0),
            Err(BigError::AccuracyOutOfRange(0)),
        );
        assert_eq!(
            check_accuracy(MAX_ACCURACY + 1),
            Err(BigError::AccuracyExceedsMaximum(i64::from(MAX_ACCURACY) + 1)),
        );
    }

    #[test]
    fn test_default_accuracy_starts_at_100() {
        assert_eq!(default_accuracy(), 100);
    }

    #[test]
    fn test_set_default_accuracy_rejects_out_of_range() {
        assert!(set_default_accuracy(0).is_err());
        assert!(set_default_accuracy(MAX_ACCURACY + 1).is_err());
        // Storing the current value back is a no-op and always accepted.
        assert!(set_default_accuracy(default_accuracy()).is_ok());
    }
}
