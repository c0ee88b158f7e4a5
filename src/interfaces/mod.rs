// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod transport;

pub use event_handler::{
    EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler, RequestEvent,
};
pub use transport::{Headers, OutgoingRequest, Transport, TransportResponse};
