//! HTTP clients for the storefront discovery document and the payment
//! service API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.

mod discovery;
mod payments;

pub use discovery::DiscoveryClient;
pub use payments::PaymentsClient;

use std::time::Duration;

use reqwest::StatusCode;

use crate::objects::payment::ErrorBody;

/// Errors produced by the SDK HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("api error: status {status}, message: {message}")]
    Api { status: StatusCode, message: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Request timeout applied by [`default_http_client`].
///
/// The payment service is a separate deployment that may be down or
/// unreachable; without a timeout a dead service would wedge the poll loop.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// A `reqwest` client with the SDK's default timeout.
///
/// Falls back to the library default if the builder fails.
pub fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Read a JSON response body, mapping non-2xx statuses to [`ClientError::Api`].
///
/// Error responses carry a JSON `{"message": …}` body when the service itself
/// rejected the request; anything else (proxies, crashes) is passed through
/// as raw text.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) => body,
        };
        return Err(ClientError::Api { status, message });
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
