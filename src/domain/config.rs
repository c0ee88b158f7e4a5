// ============================================================================
// Request Configuration
// Endpoint, method and header settings for the data request wrapper
// ============================================================================

use serde::{Deserialize, Serialize};

/// Endpoint used by the posts preset
pub const DEFAULT_ENDPOINT: &str = "https://dummy-site.dev/posts";

/// Content type of serialized payloads
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ============================================================================
// HTTP Method
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method may carry a payload body
    pub fn carries_body(&self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Head)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Complete Request Configuration
// ============================================================================

/// Configuration for a [`crate::http::DataClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Absolute http(s) URL the payload is sent to
    pub endpoint: String,

    /// HTTP method; must carry a body
    pub method: HttpMethod,

    /// Content-Type header value
    pub content_type: String,

    /// Additional headers sent with every request
    #[serde(default)]
    pub headers: Vec<(String, String)>,
}

impl RequestConfig {
    /// Create a new configuration with required parameters
    pub fn new(endpoint: String, method: HttpMethod) -> Self {
        Self {
            endpoint,
            method,
            content_type: JSON_CONTENT_TYPE.to_string(),
            headers: Vec::new(),
        }
    }

    /// Builder method: Set content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Builder method: Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("Endpoint cannot be empty".to_string());
        }

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(format!(
                "Endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            ));
        }

        if !self.method.carries_body() {
            return Err(format!("Method {} cannot carry a payload", self.method));
        }

        if self.content_type.trim().is_empty() {
            return Err("Content type cannot be empty".to_string());
        }

        if self.headers.iter().any(|(name, _)| name.trim().is_empty()) {
            return Err("Header names cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::posts()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RequestConfig {
    /// Posts endpoint
    /// - POST
    /// - JSON body
    pub fn posts() -> Self {
        Self::json_post(DEFAULT_ENDPOINT.to_string())
    }

    /// JSON POST to an arbitrary endpoint
    pub fn json_post(endpoint: String) -> Self {
        Self::new(endpoint, HttpMethod::Post)
    }

    /// JSON PUT to an arbitrary endpoint
    pub fn json_put(endpoint: String) -> Self {
        Self::new(endpoint, HttpMethod::Put)
    }
}
