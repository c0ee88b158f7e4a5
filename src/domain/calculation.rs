// ============================================================================
// Calculation Outcome
// Classifies a strict summation for presentation layers
// ============================================================================

use crate::numeric::{add_strict, Operand};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Text shown for any invalid calculation
pub const INVALID_RESULT_TEXT: &str = "Invalid input. You must enter valid numbers.";

/// Result of running a calculation over entered values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationOutcome {
    /// Nothing was entered, nothing was calculated
    NoCalculation,

    /// Values were summed
    Sum(Decimal),

    /// Input was rejected
    Invalid {
        /// Message of the error that rejected the input
        reason: String,
    },
}

impl CalculationOutcome {
    /// User-facing text for this outcome. Empty for `NoCalculation`.
    pub fn result_text(&self) -> String {
        match self {
            CalculationOutcome::NoCalculation => String::new(),
            CalculationOutcome::Sum(sum) => format!("Result: {}", sum),
            CalculationOutcome::Invalid { .. } => INVALID_RESULT_TEXT.to_string(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, CalculationOutcome::Invalid { .. })
    }
}

/// Strictly sum entered values and classify the outcome.
///
/// Never fails: every error becomes [`CalculationOutcome::Invalid`].
pub fn calculate_result<I, T>(values: I) -> CalculationOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<Operand>,
{
    let operands: Vec<Operand> = values.into_iter().map(Into::into).collect();
    if operands.is_empty() {
        return CalculationOutcome::NoCalculation;
    }

    match add_strict(operands) {
        Ok(sum) => CalculationOutcome::Sum(sum),
        Err(e) => CalculationOutcome::Invalid {
            reason: e.to_string(),
        },
    }
}
