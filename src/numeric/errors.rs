// ============================================================================
// Numeric Errors
// Error types for operand conversion and aggregation
// ============================================================================

use std::fmt;

/// Errors that can occur while converting operands or summing them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Operand could not be converted to a number (the not-a-number sentinel)
    NotANumber {
        /// Rendering of the offending operand
        input: String,
    },
    /// Calling contract violated: the aggregator takes exactly one sequence
    InvalidArgument {
        /// What was wrong with the arguments
        reason: String,
    },
    /// Sum exceeded the representable decimal range
    Overflow,
}

impl NumericError {
    pub(crate) fn not_a_number(input: impl Into<String>) -> Self {
        NumericError::NotANumber {
            input: input.into(),
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        NumericError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// True for the not-a-number sentinel.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, NumericError::NotANumber { .. })
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NotANumber { input } => {
                write!(f, "not a number: could not convert {input:?}")
            },
            NumericError::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: sum exceeded maximum value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
