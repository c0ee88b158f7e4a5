// ============================================================================
// Domain Models Module
// Contains request configuration, request entities and calculation outcomes
// ============================================================================

pub mod calculation;
pub mod config;
pub mod request;

pub use calculation::{calculate_result, CalculationOutcome};
pub use config::{HttpMethod, RequestConfig};
pub use request::{DataRequest, RequestId};

// Re-export state machine
pub use request::state::{RequestState, RequestStateTransition};
