// ============================================================================
// Validation
// Fail-fast input validators raising validation errors
// ============================================================================

use crate::error::{Error, Result};
use crate::numeric::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// Message raised for blank input fields
pub const EMPTY_INPUT_MESSAGE: &str = "Invalid input - must not be empty.";

/// Message raised for values that are not numbers
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid number input.";

/// Default message for [`validate_not_empty`]
pub const DEFAULT_NOT_EMPTY_MESSAGE: &str = "Value must not be empty.";

/// Reject text that is empty once trimmed.
pub fn validate_string_not_empty(value: &str) -> Result<()> {
    validate_not_empty(value, Some(EMPTY_INPUT_MESSAGE))
}

/// Reject the not-a-number outcome of a conversion.
///
/// A converted number is passed through. Overflow is not a validation
/// concern and surfaces as [`Error::Numeric`].
pub fn validate_number(converted: NumericResult<Decimal>) -> Result<Decimal> {
    match converted {
        Ok(number) => Ok(number),
        Err(NumericError::NotANumber { .. }) => Err(Error::validation(INVALID_NUMBER_MESSAGE)),
        Err(other) => Err(Error::Numeric(other)),
    }
}

/// Reject blank text with a caller-provided message.
pub fn validate_not_empty(value: &str, message: Option<&str>) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(
            message.unwrap_or(DEFAULT_NOT_EMPTY_MESSAGE),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_rejected() {
        let err = validate_string_not_empty("").unwrap_err();
        assert_eq!(err.to_string(), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn test_blank_string_rejected() {
        assert!(validate_string_not_empty(" ").is_err());
        assert!(validate_not_empty("\t\n", None).is_err());
    }

    #[test]
    fn test_non_empty_string_accepted() {
        assert!(validate_string_not_empty("1").is_ok());
        assert!(validate_not_empty("title", Some("Title required")).is_ok());
    }

    #[test]
    fn test_custom_message() {
        let err = validate_not_empty("", Some("Title required")).unwrap_err();
        assert!(matches!(err, Error::Validation { ref message } if message == "Title required"));

        let err = validate_not_empty("", None).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_NOT_EMPTY_MESSAGE);
    }

    #[test]
    fn test_validate_number() {
        assert_eq!(validate_number(Ok(Decimal::TEN)).unwrap(), Decimal::TEN);

        let err = validate_number(Err(NumericError::not_a_number("x"))).unwrap_err();
        assert_eq!(err.to_string(), INVALID_NUMBER_MESSAGE);

        let err = validate_number(Err(NumericError::Overflow)).unwrap_err();
        assert!(matches!(err, Error::Numeric(NumericError::Overflow)));
    }
}
