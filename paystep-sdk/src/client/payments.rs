use url::Url;

use crate::client::{ClientError, default_http_client, parse_response};
use crate::objects::payment::{CreatePaymentRequest, PaymentRecord};

/// Client for the payment service API.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PaymentsClient {
    /// Create a client against the given service base URL, e.g.
    /// `http://localhost:5025/api`.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: default_http_client(),
            base_url,
        }
    }

    /// Replace the underlying HTTP client, e.g. to share a connection pool.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Fetch the payment record for an order, creating it on first contact.
    ///
    /// `POST {base_url}/payments` is idempotent on the service side: repeated
    /// calls for the same order return the current record.
    pub async fn create_payment(&self, order_id: i64) -> Result<PaymentRecord, ClientError> {
        let url = self.endpoint("payments")?;
        let response = self
            .http
            .post(url)
            .json(&CreatePaymentRequest { order_id })
            .send()
            .await?;
        parse_response(response).await
    }

    /// Append a path segment to the base URL.
    ///
    /// `Url::join` would resolve relative to the base's parent when the base
    /// path has no trailing slash, so the endpoint is built by concatenation.
    fn endpoint(&self, segment: &str) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{segment}"))?)
    }
}
