//! Service discovery configuration.
//!
//! The storefront publishes a small JSON document at a well-known path that
//! tells the checkout widget where the payment service lives. The widget
//! re-reads it on every poll, so operators can move the service without a
//! storefront redeploy.

use serde::{Deserialize, Serialize};
use url::Url;

/// The discovery document published by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the payment service API.
    pub url: Url,
}

/// Which discovery document the widget should read.
///
/// Development deployments publish their own document so a local payment
/// service can be wired in without touching the production one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentEnv {
    Production,
    Development,
}

impl DeploymentEnv {
    /// Well-known path of the discovery document, relative to the storefront
    /// origin.
    pub fn config_path(self) -> &'static str {
        match self {
            DeploymentEnv::Production => "payment-service.json",
            DeploymentEnv::Development => "payment-service.dev.json",
        }
    }

    /// Resolve the absolute URL of the discovery document against a
    /// storefront origin.
    pub fn config_url(self, origin: &Url) -> Result<Url, url::ParseError> {
        origin.join(self.config_path())
    }
}
