// ============================================================================
// Mock Transport
// Test double with queued responses and call recording
// ============================================================================

use crate::domain::HttpMethod;
use crate::error::TransportError;
use crate::interfaces::{Headers, OutgoingRequest, Transport, TransportResponse};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

type MockResult = Result<TransportResponse, TransportError>;

/// Mock transport for testing.
///
/// Responses are queued per `"{METHOD} {url}"` key and returned in FIFO order.
/// Every call is recorded so tests can assert on what was sent.
///
/// # Example
/// ```
/// use tally::http::MockTransport;
/// use tally::interfaces::TransportResponse;
///
/// let mock = MockTransport::new();
/// mock.add_response(
///     "POST https://dummy-site.dev/posts",
///     TransportResponse::new(200, r#"{"testKey":"testData"}"#),
/// );
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, Vec<MockResponse>>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
    in_flight: Arc<AtomicUsize>,
}

/// A mock response that can optionally wait for a trigger before completing.
enum MockResponse {
    Immediate(MockResult),
    Triggered {
        response: MockResult,
        trigger: oneshot::Receiver<()>,
    },
}

/// Record of a call made to the mock transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

impl MockCall {
    /// Value of the first header with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, key: &str, response: MockResponse) {
        self.responses
            .lock()
            .entry(key.to_string())
            .or_default()
            .push(response);
    }

    /// Queue a response for a `"{METHOD} {url}"` key.
    pub fn add_response(&self, key: &str, response: TransportResponse) {
        self.push(key, MockResponse::Immediate(Ok(response)));
    }

    /// Queue a network-level failure for a `"{METHOD} {url}"` key.
    pub fn add_failure(&self, key: &str, error: TransportError) {
        self.push(key, MockResponse::Immediate(Err(error)));
    }

    /// Queue a response that completes only once the returned sender fires
    /// (or is dropped).
    pub fn add_response_with_trigger(
        &self,
        key: &str,
        response: TransportResponse,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(
            key,
            MockResponse::Triggered {
                response: Ok(response),
                trigger: rx,
            },
        );
        tx
    }

    /// Get all calls that have been made to this mock transport.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    /// Clear all recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of sends currently waiting on a trigger or otherwise executing.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlightGuard {
            in_flight: Arc::clone(&self.in_flight),
        };

        let key = format!("{} {}", request.method, request.url);
        self.calls.lock().push(MockCall {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body: request.body,
        });

        let mock_response = {
            let mut responses = self.responses.lock();
            responses
                .get_mut(&key)
                .filter(|queue| !queue.is_empty())
                .map(|queue| queue.remove(0))
        };

        match mock_response {
            Some(MockResponse::Immediate(response)) => response,
            Some(MockResponse::Triggered { response, trigger }) => {
                // Proceed on send or on drop of the sender
                let _ = trigger.await;
                response
            },
            None => Err(TransportError::Unavailable(format!(
                "No mock response configured for {}",
                key
            ))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Decrements the in-flight counter when dropped, including on cancellation.
struct InFlightGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
