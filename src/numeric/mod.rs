// ============================================================================
// Numeric Module
// Scaled-integer arithmetic core for exact monetary calculations
// ============================================================================
//
// This module provides:
// - scaling: the normalize / combine / rescale engine and its range guard
// - parse: leading-prefix float parsing for user input
// - AmountError: error types for construction and arithmetic
//
// Design principles:
// - Decimal shifts go through the decimal string rendering, never a float
//   multiply
// - All fallible operations return Result (no panics)
// - Scaled integers are transient; nothing outside an operation holds one

mod errors;
mod parse;
pub(crate) mod scaling;

pub use errors::{AmountError, AmountResult};
pub use scaling::{in_safe_integer_range, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, SCALE_DIGITS};

pub(crate) use parse::parse_leading_f64;
