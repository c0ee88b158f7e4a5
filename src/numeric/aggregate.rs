// ============================================================================
// Aggregation
// All-or-nothing summation of numeric input sequences
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::operand::{transform_to_number, Operand};
use crate::error::Result;
use crate::validation::{validate_number, validate_string_not_empty};
use rust_decimal::Decimal;
use serde_json::Value;

/// Sum a sequence of operands.
///
/// Every element is converted with [`transform_to_number`]. If any element is
/// not a number the whole sum is [`NumericError::NotANumber`]; a partial sum is
/// never returned. An empty sequence sums to zero.
///
/// # Errors
/// - `NotANumber` if at least one element cannot be converted
/// - `Overflow` if the sum leaves the decimal range
///
/// # Example
/// ```
/// use tally::numeric::{add, Operand};
/// use rust_decimal::Decimal;
///
/// let values = vec![Operand::from("1"), Operand::from("2"), Operand::from(3)];
/// assert_eq!(add(values).unwrap(), Decimal::from(6));
/// assert!(add(["invalid", "1"]).unwrap_err().is_nan());
/// ```
pub fn add<I, T>(values: I) -> NumericResult<Decimal>
where
    I: IntoIterator<Item = T>,
    T: Into<Operand>,
{
    let mut sum = Decimal::ZERO;
    let mut overflowed = false;

    for value in values {
        let number = transform_to_number(value)?;
        if overflowed {
            // Keep scanning: a later not-a-number still wins over overflow
            continue;
        }
        match sum.checked_add(number) {
            Some(next) => sum = next,
            None => overflowed = true,
        }
    }

    if overflowed {
        Err(NumericError::Overflow)
    } else {
        Ok(sum)
    }
}

/// Sum with the dynamic calling contract of untyped callers.
///
/// Exactly one argument is accepted and it must be an array; the array is
/// then summed as by [`add`].
///
/// # Errors
/// `InvalidArgument` when no argument, several arguments, or a non-array
/// argument is supplied. Otherwise the errors of [`add`].
pub fn add_args(args: &[Value]) -> NumericResult<Decimal> {
    match args {
        [] => Err(NumericError::invalid_argument(
            "no value passed, expected a single sequence",
        )),
        [Value::Array(items)] => add(items),
        [other] => Err(NumericError::invalid_argument(format!(
            "{} is not iterable",
            json_kind(other)
        ))),
        many => Err(NumericError::invalid_argument(format!(
            "expected a single sequence, got {} arguments",
            many.len()
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Strictly convert a sequence of operands.
///
/// Unlike [`add`], this fails fast with a validation error: blank text raises
/// `"Invalid input - must not be empty."` and non-numeric values raise
/// `"Invalid number input."`.
///
/// # Errors
/// [`crate::Error::Validation`] on the first offending element.
pub fn clean_numbers<I, T>(values: I) -> Result<Vec<Decimal>>
where
    I: IntoIterator<Item = T>,
    T: Into<Operand>,
{
    values
        .into_iter()
        .map(|value| {
            let operand = value.into();
            if let Operand::Text(text) = &operand {
                validate_string_not_empty(text)?;
            }
            validate_number(transform_to_number(operand))
        })
        .collect()
}

/// Fail-fast variant of [`add`].
///
/// # Errors
/// The validation errors of [`clean_numbers`], or `Numeric(Overflow)`.
pub fn add_strict<I, T>(values: I) -> Result<Decimal>
where
    I: IntoIterator<Item = T>,
    T: Into<Operand>,
{
    let numbers = clean_numbers(values)?;
    Ok(add(numbers)?)
}

// ============================================================================
// Tests
// ============================================================================
