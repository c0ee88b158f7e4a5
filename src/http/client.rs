// ============================================================================
// Data Client
// Serializes payloads, sends them and classifies the responses
// ============================================================================

use crate::domain::request::state::{RequestState, RequestStateTransition};
use crate::domain::{DataRequest, RequestConfig};
use crate::error::{Error, Result};
use crate::interfaces::{
    EventHandler, Headers, NoOpEventHandler, OutgoingRequest, RequestEvent, Transport,
    TransportResponse,
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Message of every typed HTTP error raised by the client
pub const REQUEST_FAILED_MESSAGE: &str = "Sending the request failed.";

/// Typed request wrapper over a pluggable [`Transport`].
///
/// Each call settles exactly once:
/// - success status: the decoded body
/// - non-success status: [`Error::Http`] with the status and decoded body
/// - no response: [`Error::Transport`], unchanged
///
/// No retries and no timeouts are applied; callers that need cancellation
/// drop the future.
#[derive(Clone)]
pub struct DataClient<T: Transport> {
    transport: T,
    config: RequestConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl<T: Transport> DataClient<T> {
    /// Create a client after validating the configuration.
    ///
    /// # Errors
    /// [`Error::Validation`] if the configuration is invalid.
    pub fn new(transport: T, config: RequestConfig) -> Result<Self> {
        config.validate().map_err(Error::validation)?;
        Ok(Self {
            transport,
            config,
            event_handler: Arc::new(NoOpEventHandler),
        })
    }

    /// Builder method: Set the event handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a payload and decode the response.
    ///
    /// The payload is encoded as JSON text before it reaches the transport.
    ///
    /// # Errors
    /// - `Serialization` if the payload cannot be encoded, or a success body
    ///   cannot be decoded into `R`
    /// - `Http` for a non-success status
    /// - `Transport` if no response was obtained
    pub async fn send_data_request<P, R>(&self, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(payload)?;
        let mut request = DataRequest::new(self.config.endpoint.clone(), self.config.method, body);

        self.event_handler.on_event(RequestEvent::RequestSent {
            request_id: request.id,
            method: request.method,
            url: request.endpoint.clone(),
            body_len: request.body.len(),
            timestamp: Utc::now(),
        });

        let response = match self.transport.send(self.build_request(&request)).await {
            Ok(response) => response,
            Err(e) => {
                self.fail(&mut request, e.to_string());
                return Err(e.into());
            },
        };

        self.classify(&mut request, response)
    }

    fn build_request(&self, request: &DataRequest) -> OutgoingRequest {
        let mut headers = Headers::new();
        // A configured Content-Type header replaces the default one
        let content_type_overridden = self
            .config
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("Content-Type"));
        if !content_type_overridden {
            headers.push(("Content-Type".to_string(), self.config.content_type.clone()));
        }
        headers.extend(self.config.headers.iter().cloned());

        OutgoingRequest {
            method: request.method,
            url: request.endpoint.clone(),
            headers,
            body: request.body.clone(),
        }
    }

    fn classify<R: DeserializeOwned>(
        &self,
        request: &mut DataRequest,
        response: TransportResponse,
    ) -> Result<R> {
        if !response.is_success() {
            let state = settle(request, RequestStateTransition::Reject);
            self.event_handler.on_event(RequestEvent::RequestRejected {
                request_id: request.id,
                status_code: response.status,
                state,
                timestamp: Utc::now(),
            });
            return Err(Error::http(
                response.status,
                REQUEST_FAILED_MESSAGE,
                decode_diagnostics(&response.body),
            ));
        }

        match serde_json::from_str::<R>(&response.body) {
            Ok(value) => {
                let state = settle(request, RequestStateTransition::Resolve);
                self.event_handler.on_event(RequestEvent::RequestResolved {
                    request_id: request.id,
                    status: response.status,
                    state,
                    timestamp: Utc::now(),
                });
                Ok(value)
            },
            Err(e) => {
                self.fail(request, e.to_string());
                Err(e.into())
            },
        }
    }

    fn fail(&self, request: &mut DataRequest, reason: String) {
        let state = settle(request, RequestStateTransition::Reject);
        self.event_handler.on_event(RequestEvent::RequestFailed {
            request_id: request.id,
            reason,
            state,
            timestamp: Utc::now(),
        });
    }
}

/// Settle a request created by the current call.
///
/// Each call path settles its own pending request once, so the current state
/// is only returned unchanged if a path ever settles twice.
fn settle(request: &mut DataRequest, transition: RequestStateTransition) -> RequestState {
    request
        .apply(transition)
        .unwrap_or_else(|_| request.state())
}

/// Best-effort decode of an error body. Empty or non-JSON bodies carry no data.
fn decode_diagnostics(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HttpMethod;
    use crate::error::TransportError;
    use crate::http::MockTransport;
    use crate::interfaces::RecordingEventHandler;
    use serde::Deserialize;
    use serde_json::json;

    const POSTS_KEY: &str = "POST https://dummy-site.dev/posts";

    fn client(mock: &MockTransport) -> DataClient<MockTransport> {
        DataClient::new(mock.clone(), RequestConfig::posts()).unwrap()
    }

    #[tokio::test]
    async fn test_returns_decoded_response_data() {
        let mock = MockTransport::new();
        mock.add_response(POSTS_KEY, TransportResponse::new(200, r#"{"testKey":"testData"}"#));

        let result: Value = client(&mock)
            .send_data_request(&json!({ "key": "value" }))
            .await
            .unwrap();

        assert_eq!(result, json!({ "testKey": "testData" }));
    }

    #[tokio::test]
    async fn test_payload_is_sent_as_json_text() {
        #[derive(Serialize)]
        struct Post<'a> {
            title: &'a str,
            content: &'a str,
        }

        let mock = MockTransport::new();
        mock.add_response(POSTS_KEY, TransportResponse::new(201, "{}"));

        let _: Value = client(&mock)
            .send_data_request(&Post {
                title: "title",
                content: "content",
            })
            .await
            .unwrap();

        let calls = mock.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].header("content-type"), Some("application/json"));

        let sent: Value = serde_json::from_str(&calls[0].body).unwrap();
        assert_eq!(sent, json!({ "title": "title", "content": "content" }));
    }

    #[tokio::test]
    async fn test_non_success_status_is_typed_error() {
        let mock = MockTransport::new();
        mock.add_response(POSTS_KEY, TransportResponse::new(422, r#"{"testKey":"testData"}"#));

        let err = client(&mock)
            .send_data_request::<_, Value>(&json!({ "key": "value" }))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.to_string(), REQUEST_FAILED_MESSAGE);
        assert_eq!(err.data(), Some(&json!({ "testKey": "testData" })));
    }

    #[tokio::test]
    async fn test_non_success_with_undecodable_body_has_no_data() {
        let mock = MockTransport::new();
        mock.add_response(POSTS_KEY, TransportResponse::new(502, "<html>Bad Gateway</html>"));
        mock.add_response(POSTS_KEY, TransportResponse::new(500, ""));

        let client = client(&mock);
        for expected in [502, 500] {
            let err = client
                .send_data_request::<_, Value>(&json!({}))
                .await
                .unwrap_err();
            assert_eq!(err.status_code(), Some(expected));
            assert!(err.data().is_none());
        }
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let mock = MockTransport::new();
        mock.add_failure(POSTS_KEY, TransportError::Unavailable("offline".to_string()));

        let err = client(&mock)
            .send_data_request::<_, Value>(&json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(TransportError::Unavailable(ref m)) if m == "offline"));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_serialization_error() {
        let mock = MockTransport::new();
        mock.add_response(POSTS_KEY, TransportResponse::new(200, "not json"));

        let err = client(&mock)
            .send_data_request::<_, Value>(&json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn test_typed_response_decoding() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Created {
            id: u32,
        }

        let mock = MockTransport::new();
        mock.add_response(POSTS_KEY, TransportResponse::new(201, r#"{"id":7}"#));

        let created: Created = client(&mock)
            .send_data_request(&json!({ "title": "t" }))
            .await
            .unwrap();
        assert_eq!(created, Created { id: 7 });
    }

    #[tokio::test]
    async fn test_events_follow_lifecycle() {
        let mock = MockTransport::new();
        mock.add_response(POSTS_KEY, TransportResponse::new(200, "{}"));
        mock.add_response(POSTS_KEY, TransportResponse::new(404, "{}"));

        let handler = Arc::new(RecordingEventHandler::new());
        let client = client(&mock).with_event_handler(handler.clone());

        let _: Value = client.send_data_request(&json!({})).await.unwrap();
        let _ = client.send_data_request::<_, Value>(&json!({})).await;

        let events = handler.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], RequestEvent::RequestSent { .. }));
        assert!(matches!(events[1], RequestEvent::RequestResolved { status: 200, .. }));
        assert!(matches!(events[2], RequestEvent::RequestSent { .. }));
        assert!(matches!(events[3], RequestEvent::RequestRejected { status_code: 404, .. }));
        assert_eq!(events[0].request_id(), events[1].request_id());
        assert_ne!(events[0].request_id(), events[2].request_id());
        assert_eq!(events[1].settled_state(), Some(RequestState::Resolved));
        assert_eq!(events[3].settled_state(), Some(RequestState::Rejected));
    }

    #[tokio::test]
    async fn test_failures_settle_as_rejected() {
        let mock = MockTransport::new();
        mock.add_response(POSTS_KEY, TransportResponse::new(200, "not json"));
        mock.add_failure(POSTS_KEY, TransportError::Unavailable("offline".to_string()));

        let handler = Arc::new(RecordingEventHandler::new());
        let client = client(&mock).with_event_handler(handler.clone());

        assert!(client.send_data_request::<_, Value>(&json!({})).await.is_err());
        assert!(client.send_data_request::<_, Value>(&json!({})).await.is_err());

        let failed: Vec<RequestEvent> = handler
            .events()
            .into_iter()
            .filter(|e| matches!(e, RequestEvent::RequestFailed { .. }))
            .collect();
        assert_eq!(failed.len(), 2);
        assert!(failed
            .iter()
            .all(|e| e.settled_state() == Some(RequestState::Rejected)));
    }

    #[tokio::test]
    async fn test_dropped_request_leaves_nothing_in_flight() {
        let mock = MockTransport::new();
        let _trigger =
            mock.add_response_with_trigger(POSTS_KEY, TransportResponse::new(200, "{}"));

        let handler = Arc::new(RecordingEventHandler::new());
        let client = client(&mock).with_event_handler(handler.clone());

        let payload = json!({ "key": "value" });
        let pending = client.send_data_request::<_, Value>(&payload);
        let outcome = tokio::time::timeout(std::time::Duration::from_millis(50), pending).await;

        assert!(outcome.is_err());
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.in_flight_count(), 0);

        // Cancelled before settling: only the send was reported
        let events = handler.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], RequestEvent::RequestSent { .. }));
    }

    #[tokio::test]
    async fn test_triggered_response_completes_request() {
        let mock = MockTransport::new();
        let trigger =
            mock.add_response_with_trigger(POSTS_KEY, TransportResponse::new(200, r#"{"ok":true}"#));

        let client = client(&mock);
        let request = tokio::spawn(async move {
            client.send_data_request::<_, Value>(&json!({})).await
        });

        while mock.in_flight_count() == 0 {
            tokio::task::yield_now().await;
        }
        trigger.send(()).unwrap();

        let response = request.await.unwrap().unwrap();
        assert_eq!(response, json!({ "ok": true }));
        assert_eq!(mock.in_flight_count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RequestConfig::new("https://dummy-site.dev/posts".to_string(), HttpMethod::Get);
        let result = DataClient::new(MockTransport::new(), config);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_extra_headers_are_sent() {
        let config = RequestConfig::posts().with_header("X-Api-Key", "secret");
        let client = DataClient::new(MockTransport::new(), config).unwrap();
        let request = DataRequest::new(
            client.config().endpoint.clone(),
            HttpMethod::Post,
            "{}".to_string(),
        );

        let outgoing = client.build_request(&request);
        assert_eq!(outgoing.header("x-api-key"), Some("secret"));
        assert_eq!(outgoing.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_configured_content_type_replaces_default() {
        let config =
            RequestConfig::posts().with_header("content-type", "application/merge-patch+json");
        let client = DataClient::new(MockTransport::new(), config).unwrap();
        let request = DataRequest::new(
            client.config().endpoint.clone(),
            HttpMethod::Post,
            "{}".to_string(),
        );

        let outgoing = client.build_request(&request);
        let content_types: Vec<&str> = outgoing
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("Content-Type"))
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(content_types, vec!["application/merge-patch+json"]);
    }
}
