// ============================================================================
// Transport Interface
// Defines the contract for sending a serialized request over the network
// ============================================================================

use crate::domain::HttpMethod;
use crate::error::TransportError;
use async_trait::async_trait;
use smallvec::SmallVec;

/// Request headers; a handful at most
pub type Headers = SmallVec<[(String, String); 4]>;

/// A fully serialized request ready for the wire.
///
/// The body is a `String`: whatever the caller's payload was, only its textual
/// encoding is ever handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

impl OutgoingRequest {
    /// Value of the first header with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as received from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as a string
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Strategy interface for the network primitive behind a data client.
/// Implementations: ReqwestTransport (production), MockTransport (tests).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response.
    ///
    /// # Errors
    /// A [`TransportError`] when no response could be obtained. Non-success
    /// statuses are not errors at this layer.
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError>;

    /// Get the transport name for logging
    fn name(&self) -> &str;
}
