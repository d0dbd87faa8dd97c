// ============================================================================
// Numeric Module
// String-based arbitrary-precision amounts for display/raw conversion
// ============================================================================
//
// This module provides:
// - to_display/to_raw: Decimal codec between raw digit strings and display text
// - compare/in_range: Arbitrary-precision ordering of raw digit strings
// - RawAmount: Validated raw amount with numeric Eq/Ord
// - NumericError: Error types for conversion
//
// Design principles:
// - No floating-point operations
// - No native integer arithmetic on amounts (values may exceed u128)
// - All conversions return Result (no panics)

mod codec;
mod compare;
mod errors;
mod raw_amount;

pub use codec::{is_valid_display, to_display, to_raw, ParsedAmount};
pub use compare::{compare, in_range};
pub use errors::{NumericError, NumericResult};
pub use raw_amount::RawAmount;
