//! [`StatusSource`] backed by the storefront discovery document.

use async_trait::async_trait;
use paystep_sdk::client::{ClientError, DiscoveryClient, PaymentsClient, default_http_client};
use paystep_sdk::objects::payment::PaymentRecord;
use paystep_sdk::objects::service_config::DeploymentEnv;
use tracing::debug;
use url::Url;

use crate::processors::status_poller::StatusSource;

/// Resolves the payment service through the discovery document on every
/// fetch.
///
/// The document is deliberately not cached. It is a small static file, and
/// re-reading it each poll means a service that moves between polls is picked
/// up without restarting the poller.
#[derive(Debug, Clone)]
pub struct DiscoveringSource {
    discovery: DiscoveryClient,
    http: reqwest::Client,
}

impl DiscoveringSource {
    pub fn new(discovery: DiscoveryClient) -> Self {
        Self {
            discovery,
            http: default_http_client(),
        }
    }

    /// Source reading the well-known document of `env` under `origin`.
    pub fn for_environment(origin: &Url, env: DeploymentEnv) -> Result<Self, ClientError> {
        Ok(Self::new(DiscoveryClient::for_environment(origin, env)?))
    }

    /// Replace the HTTP client used for payment service calls. The discovery
    /// client keeps its own.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }
}

#[async_trait]
impl StatusSource for DiscoveringSource {
    async fn fetch_status(&self, order_id: i64) -> Result<PaymentRecord, ClientError> {
        let base = self.discovery.service_url().await?;
        debug!(%base, order_id, "Resolved payment service");
        PaymentsClient::new(base)
            .with_http_client(self.http.clone())
            .create_payment(order_id)
            .await
    }
}
