// ============================================================================
// Numeric Module
// Decimal conversion and all-or-nothing summation of mixed input sequences
// ============================================================================
//
// This module provides:
// - Operand: one element of an input sequence (text, number, raw JSON)
// - transform_to_number: lenient per-element conversion
// - add / add_args: sentinel aggregation (not-a-number poisons the sum)
// - clean_numbers / add_strict: fail-fast aggregation raising validation errors
// - NumericError: error types for conversion and summation
//
// Design principles:
// - No floating-point arithmetic (rust_decimal)
// - The not-a-number sentinel is an Err, never a magic value
// - Sentinel and strict entry points stay separate functions

mod aggregate;
mod errors;
mod operand;

pub use aggregate::{add, add_args, add_strict, clean_numbers};
pub use errors::{NumericError, NumericResult};
pub use operand::{transform_to_number, Operand};
