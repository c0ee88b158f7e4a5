// ============================================================================
// Event Handler Interface
// Defines the contract for observing data request lifecycles
// ============================================================================

use crate::domain::{HttpMethod, RequestId, RequestState};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Events emitted by the data client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequestEvent {
    /// Serialized payload handed to the transport
    RequestSent {
        request_id: RequestId,
        method: HttpMethod,
        url: String,
        body_len: usize,
        timestamp: DateTime<Utc>,
    },

    /// Success status received and body decoded
    RequestResolved {
        request_id: RequestId,
        status: u16,
        state: RequestState,
        timestamp: DateTime<Utc>,
    },

    /// Non-success status received
    RequestRejected {
        request_id: RequestId,
        status_code: u16,
        state: RequestState,
        timestamp: DateTime<Utc>,
    },

    /// No response obtained, or a success body that could not be decoded
    RequestFailed {
        request_id: RequestId,
        reason: String,
        state: RequestState,
        timestamp: DateTime<Utc>,
    },
}

impl RequestEvent {
    pub fn request_id(&self) -> RequestId {
        match self {
            RequestEvent::RequestSent { request_id, .. }
            | RequestEvent::RequestResolved { request_id, .. }
            | RequestEvent::RequestRejected { request_id, .. }
            | RequestEvent::RequestFailed { request_id, .. } => *request_id,
        }
    }

    /// Settled state carried by a terminal event, `None` for `RequestSent`
    pub fn settled_state(&self) -> Option<RequestState> {
        match self {
            RequestEvent::RequestSent { .. } => None,
            RequestEvent::RequestResolved { state, .. }
            | RequestEvent::RequestRejected { state, .. }
            | RequestEvent::RequestFailed { state, .. } => Some(*state),
        }
    }
}

/// Event handler trait for processing data client events
/// Implementations can handle logging, metrics, test spies, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a request event
    fn on_event(&self, event: RequestEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<RequestEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler, the default
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: RequestEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: RequestEvent) {
        match &event {
            RequestEvent::RequestRejected { .. } | RequestEvent::RequestFailed { .. } => {
                tracing::warn!(request_id = %event.request_id(), "Data request failed: {:?}", event);
            },
            _ => tracing::debug!(request_id = %event.request_id(), "Data request event: {:?}", event),
        }
    }
}

/// Event handler that records every event it sees
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<RequestEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events in arrival order
    pub fn events(&self) -> Vec<RequestEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: RequestEvent) {
        self.events.lock().push(event);
    }
}
