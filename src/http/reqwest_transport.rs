// ============================================================================
// Reqwest Transport
// Production transport making real HTTP requests
// ============================================================================

use crate::domain::HttpMethod;
use crate::error::TransportError;
use crate::interfaces::{OutgoingRequest, Transport, TransportResponse};
use async_trait::async_trait;

/// Production transport using reqwest.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (connection pool, proxy and TLS settings).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Head => reqwest::Method::HEAD,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[tracing::instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse, TransportError> {
        let mut req = self
            .client
            .request(to_reqwest_method(request.method), request.url.as_str());

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        tracing::trace!(body_len = request.body.len(), "Sending request body");

        let response = req.body(request.body).send().await.map_err(|e| {
            tracing::debug!(error = %e, "HTTP request failed before a response");
            e
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status = status, response_len = body.len(), "HTTP request completed");

        Ok(TransportResponse { status, body })
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}
