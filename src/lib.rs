// ============================================================================
// Bigfix Library
// Arbitrary-precision fixed-point decimal arithmetic with exact scaling
// ============================================================================

//! # Bigfix
//!
//! An arbitrary-precision fixed-point decimal type: each value carries its
//! own accuracy (decimal digits after the point) and a `BigInt` magnitude
//! holding the quantity times `10^accuracy`.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** at any accuracy from 1 to 320 000 000
//!   digits, so `0.1 + 0.2 == 0.3` holds
//! - **Scale-preserving operations**: operands are coerced to the receiver's
//!   accuracy, and every operation returns a new value
//! - **Literal parsing** with decimal and scientific notation and a
//!   configurable rounding policy
//! - **Integer square root** via Newton-Raphson with a hardware fast path
//! - **Uniform `[0, 1)` sampling** from the OS entropy source
//!
//! ## Example
//!
//! ```rust
//! use bigfix::prelude::*;
//!
//! let price = BigDecimal::new("149.95", 10)?;
//! let quantity = BigDecimal::new(3, 10)?;
//! let total = price.mul(&quantity)?;
//! assert_eq!(total.to_string(), "449.85");
//!
//! let unit = total.div(&quantity)?;
//! assert!(unit.eq_value("149.95")?);
//!
//! let root = BigDecimal::new(2, 20)?.sqrt()?;
//! assert_eq!(root.to_fixed(5), "1.41421");
//! # Ok::<(), BigError>(())
//! ```

pub mod config;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{
        default_accuracy, round_down, set_default_accuracy, set_round_down,
    };
    pub use crate::numeric::{
        is_valid_literal, BigDecimal, BigError, BigResult, ErrorKind, Operand,
    };
}
