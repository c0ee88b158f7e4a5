// ============================================================================
// HTTP Module
// Typed JSON request wrapper and its transports
// ============================================================================

mod client;
mod mock;
mod reqwest_transport;

pub use client::{DataClient, REQUEST_FAILED_MESSAGE};
pub use mock::{MockCall, MockTransport};
pub use reqwest_transport::ReqwestTransport;

use crate::domain::RequestConfig;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Send a payload to the default posts endpoint over reqwest.
///
/// Shorthand for a [`DataClient`] built from [`RequestConfig::posts`].
///
/// # Errors
/// See [`DataClient::send_data_request`].
pub async fn send_data_request<P, R>(payload: &P) -> Result<R>
where
    P: Serialize + ?Sized,
    R: DeserializeOwned,
{
    DataClient::new(ReqwestTransport::new(), RequestConfig::posts())?
        .send_data_request(payload)
        .await
}
