use url::Url;

use crate::client::{ClientError, default_http_client, parse_response};
use crate::objects::service_config::{DeploymentEnv, ServiceConfig};

/// Client for the storefront's service discovery document.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    http: reqwest::Client,
    document_url: Url,
}

impl DiscoveryClient {
    /// Create a client that reads the discovery document at `document_url`.
    pub fn new(document_url: Url) -> Self {
        Self {
            http: default_http_client(),
            document_url,
        }
    }

    /// Create a client for the well-known document of the given environment,
    /// resolved against the storefront origin.
    pub fn for_environment(origin: &Url, env: DeploymentEnv) -> Result<Self, ClientError> {
        Ok(Self::new(env.config_url(origin)?))
    }

    /// Replace the underlying HTTP client, e.g. to share a connection pool.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Fetch the discovery document.
    pub async fn fetch(&self) -> Result<ServiceConfig, ClientError> {
        let response = self.http.get(self.document_url.clone()).send().await?;
        parse_response(response).await
    }

    /// Fetch the discovery document and return the payment service base URL.
    pub async fn service_url(&self) -> Result<Url, ClientError> {
        Ok(self.fetch().await?.url)
    }
}
