// ============================================================================
// Numeric Module
// Exact decimal arithmetic for the calculator core
// ============================================================================
//
// This module provides:
// - Decimal: arbitrary-precision fixed-point value, (unscaled, scale) pair
// - String-level operations the state machine consumes directly
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - No floating-point operations anywhere
// - All fallible arithmetic returns Result (no panics)
// - Values are immutable; every operation produces a new value

mod decimal;
mod errors;

pub use decimal::{
    add, div, format_for_display, mul, normalize, sub, Decimal, DEFAULT_DIVISION_SCALE,
    DEFAULT_MAX_SIGNIFICANT,
};
pub use errors::{NumericError, NumericResult};
