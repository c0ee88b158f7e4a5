// ============================================================================
// Tally Library
// Validated numeric aggregation and a typed JSON request wrapper
// ============================================================================

//! # Tally
//!
//! Two independent, stateless utilities.
//!
//! ## Features
//!
//! - **Numeric aggregation** of mixed text/number sequences with exact decimal
//!   arithmetic. A single non-numeric element poisons the whole sum.
//! - **Strict aggregation** that fails fast with validation errors instead
//! - **Typed request wrapper** that sends a payload as JSON text and turns
//!   non-success responses into [`Error::Http`]
//! - **Pluggable transports** (reqwest in production, a recording mock in tests)
//!
//! ## Example
//!
//! ```rust
//! use tally::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let values = vec![Operand::from("1"), Operand::from("2"), Operand::from(3)];
//! assert_eq!(add(values).unwrap(), Decimal::from(6));
//!
//! // Not-a-number poisons the sum
//! assert!(add(["invalid", "1"]).unwrap_err().is_nan());
//!
//! // The strict variant raises on blank input
//! assert!(add_strict(["", "1"]).is_err());
//!
//! let outcome = calculate_result(["1", "2"]);
//! assert_eq!(outcome.result_text(), "Result: 3");
//! ```

pub mod domain;
pub mod error;
pub mod http;
pub mod interfaces;
pub mod numeric;
pub mod utils;
pub mod validation;

pub use error::{Error, Result, TransportError};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        calculate_result, CalculationOutcome, DataRequest, HttpMethod, RequestConfig, RequestId,
        RequestState, RequestStateTransition,
    };
    pub use crate::error::{Error, Result, TransportError};
    pub use crate::http::{send_data_request, DataClient, MockTransport, ReqwestTransport};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, OutgoingRequest,
        RecordingEventHandler, RequestEvent, Transport, TransportResponse,
    };
    pub use crate::numeric::{
        add, add_args, add_strict, clean_numbers, transform_to_number, NumericError, Operand,
    };
    pub use crate::validation::{validate_not_empty, validate_number, validate_string_not_empty};
}
