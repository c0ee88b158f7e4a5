// ============================================================================
// Error Types
// Tagged error enumeration shared by validation and the request wrapper
// ============================================================================

use crate::numeric::NumericError;
use serde_json::Value;
use thiserror::Error;

/// Result type alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
///
/// `Http` and `Validation` share construction helpers but carry different
/// payloads: an HTTP failure keeps the status code and whatever body the server
/// sent back, a validation failure only its message.
#[derive(Error, Debug)]
pub enum Error {
    /// Server answered with a non-success status
    #[error("{message}")]
    Http {
        /// HTTP status code of the response
        status_code: u16,
        /// Human-readable message
        message: String,
        /// Decoded response body, if it was decodable
        data: Option<Value>,
    },

    /// Input rejected by a validator
    #[error("{message}")]
    Validation {
        /// Human-readable message
        message: String,
    },

    /// Numeric conversion or aggregation failed
    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// Payload could not be encoded or response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure before any response was obtained; never reclassified
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Build a typed HTTP error.
    pub fn http(status_code: u16, message: impl Into<String>, data: Option<Value>) -> Self {
        Error::Http {
            status_code,
            message: message.into(),
            data,
        }
    }

    /// Build a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Status code of a typed HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Diagnostic body of a typed HTTP error.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Error::Http { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Error::Http { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Network-level failures raised by a transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// reqwest failed to send the request or read the response
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint unreachable or transport refused the request
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}
