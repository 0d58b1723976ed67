// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or operating on decimals.
///
/// Every failure is synchronous and atomic: the operation either returns a
/// new value or one of these, and no operand is ever mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigError {
    /// Literal text does not match the accepted grammar
    InvalidLiteral(String),
    /// Accuracy below the accepted minimum
    AccuracyOutOfRange(i64),
    /// Accuracy above the accepted maximum
    AccuracyExceedsMaximum(i64),
    /// Computed power-of-ten shift outside the representable window
    ExponentOutOfRange(i64),
    /// Bit-shift amount outside the accepted window
    ShiftOutOfRange(i64),
    /// Division, remainder, or interval snap by a zero divisor
    DivisionByZero,
    /// Square root requested for a negative value
    NegativeSquareRoot,
}

/// Coarse classification of a [`BigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input text failed the literal grammar
    Syntax,
    /// A numeric argument or computed quantity was out of bounds
    Range,
}

impl BigError {
    /// The kind of failure: grammar violation or out-of-bounds quantity.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BigError::InvalidLiteral(_) => ErrorKind::Syntax,
            BigError::AccuracyOutOfRange(_)
            | BigError::AccuracyExceedsMaximum(_)
            | BigError::ExponentOutOfRange(_)
            | BigError::ShiftOutOfRange(_)
            | BigError::DivisionByZero
            | BigError::NegativeSquareRoot => ErrorKind::Range,
        }
    }
}

impl fmt::Display for BigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigError::InvalidLiteral(text) => {
                write!(f, "cannot convert {:?} to a decimal", text)
            },
            BigError::AccuracyOutOfRange(digits) => {
                write!(f, "the accuracy of {} is out of range", digits)
            },
            BigError::AccuracyExceedsMaximum(digits) => {
                write!(f, "maximum accuracy exceeded: {}", digits)
            },
            BigError::ExponentOutOfRange(shift) => {
                write!(f, "exponent value of {} exceeds the shift limit", shift)
            },
            BigError::ShiftOutOfRange(bits) => {
                write!(f, "the shift of {} bits is out of range", bits)
            },
            BigError::DivisionByZero => write!(f, "division by zero"),
            BigError::NegativeSquareRoot => {
                write!(f, "square root of a negative value")
            },
        }
    }
}

impl std::error::Error for BigError {}

/// Result type alias for decimal operations
pub type BigResult<T> = Result<T, BigError>;
