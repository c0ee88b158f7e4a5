// ============================================================================
// Data Request Domain Model
// ============================================================================

use super::config::HttpMethod;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Request State Machine
// ============================================================================

pub mod state {
    use serde::{Deserialize, Serialize};

    /// Pending -> Resolved | Rejected. Both settled states are terminal.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum RequestState {
        Pending,
        Resolved,
        Rejected,
    }

    impl RequestState {
        pub fn is_terminal(&self) -> bool {
            matches!(self, RequestState::Resolved | RequestState::Rejected)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RequestStateTransition {
        Resolve,
        Reject,
    }

    impl RequestState {
        pub fn transition(
            self,
            transition: RequestStateTransition,
        ) -> Result<RequestState, String> {
            match (self, transition) {
                (RequestState::Pending, RequestStateTransition::Resolve) => {
                    Ok(RequestState::Resolved)
                },
                (RequestState::Pending, RequestStateTransition::Reject) => {
                    Ok(RequestState::Rejected)
                },
                _ => Err(format!(
                    "Invalid transition from {:?} via {:?}",
                    self, transition
                )),
            }
        }
    }
}

// ============================================================================
// Data Request Entity
// ============================================================================

/// A single outgoing data request and its settlement state.
///
/// The body is the already-serialized payload; the entity never holds the
/// caller's structured value. A request is owned by the call that sends it,
/// so its state moves through [`state::RequestState::transition`] by value.
#[derive(Debug, Clone)]
pub struct DataRequest {
    pub id: RequestId,
    pub endpoint: String,
    pub method: HttpMethod,
    pub body: String,
    pub timestamp: DateTime<Utc>,

    state: state::RequestState,
}

impl DataRequest {
    pub fn new(endpoint: String, method: HttpMethod, body: String) -> Self {
        Self {
            id: RequestId::new(),
            endpoint,
            method,
            body,
            timestamp: Utc::now(),
            state: state::RequestState::Pending,
        }
    }

    pub fn state(&self) -> state::RequestState {
        self.state
    }

    /// Apply a transition.
    ///
    /// Fails if the request already settled, so a request settles exactly once.
    pub fn apply(
        &mut self,
        transition: state::RequestStateTransition,
    ) -> Result<state::RequestState, String> {
        self.state = self
            .state
            .transition(transition)
            .map_err(|reason| format!("Request {}: {}", self.id, reason))?;
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::state::{RequestState, RequestStateTransition};
    use super::*;

    fn request() -> DataRequest {
        DataRequest::new(
            "https://dummy-site.dev/posts".to_string(),
            HttpMethod::Post,
            r#"{"key":"value"}"#.to_string(),
        )
    }

    #[test]
    fn test_new_request_is_pending() {
        let req = request();
        assert_eq!(req.state(), RequestState::Pending);
        assert!(!req.state().is_terminal());
    }

    #[test]
    fn test_resolve() {
        let mut req = request();
        assert_eq!(
            req.apply(RequestStateTransition::Resolve).unwrap(),
            RequestState::Resolved
        );
        assert!(req.state().is_terminal());
    }

    #[test]
    fn test_settles_only_once() {
        let mut req = request();
        req.apply(RequestStateTransition::Reject).unwrap();

        assert!(req.apply(RequestStateTransition::Resolve).is_err());
        assert!(req.apply(RequestStateTransition::Reject).is_err());
        assert_eq!(req.state(), RequestState::Rejected);
    }

    #[test]
    fn test_transition_table() {
        use RequestState::*;
        use RequestStateTransition::*;

        assert_eq!(Pending.transition(Resolve), Ok(Resolved));
        assert_eq!(Pending.transition(Reject), Ok(Rejected));
        for settled in [Resolved, Rejected] {
            assert!(settled.transition(Resolve).is_err());
            assert!(settled.transition(Reject).is_err());
        }
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(request().id, request().id);
    }
}
