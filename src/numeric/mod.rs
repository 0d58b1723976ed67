// ============================================================================
// Numeric Module
// Arbitrary-precision fixed-point decimal arithmetic
// ============================================================================
//
// This module provides:
// - BigDecimal: decimal value with per-value accuracy, backed by a BigInt
//   magnitude scaled by 10^accuracy
// - Operand: tagged input type accepted by every construction and operation
// - BigError/ErrorKind: error types split into syntax and range failures
// - is_valid_literal: grammar predicate mirroring the parser
//
// Design principles:
// - Values are immutable; every operation returns a new value
// - Operands are coerced to the receiver's accuracy before combining
// - All fallible operations return Result (no panics)
// - The parser is the single producer of magnitudes

mod arith;
mod cmp;
mod errors;
mod format;
mod parse;
mod random;
mod sqrt;
mod value;

pub use errors::{BigError, BigResult, ErrorKind};
pub use parse::{is_valid_literal, Operand};
pub use value::BigDecimal;
