//! Process-wide proxy configuration, resolved once at startup.

use std::time::Duration;

use medium_api::Client;

use crate::error::FeedError;

/// Environment variable holding the Medium API key.
pub const API_KEY_ENV: &str = "MEDIUM_API_KEY";

/// Immutable settings for reaching the upstream API.
#[derive(Clone)]
pub struct ProxyConfig {
    pub endpoint: String,
    /// `None` keeps the server up but every feed call answers 500.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            endpoint: medium_api::DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout: medium_api::DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProxyConfig {
    /// Build the shared upstream client.
    pub fn build_client(&self) -> Result<Client, FeedError> {
        let client = Client::with_endpoint(&self.endpoint, self.api_key.clone(), self.timeout)?;
        if !client.has_api_key() {
            tracing::warn!(
                "{} is not set; /get-tag-feed will answer 500 until it is configured",
                API_KEY_ENV
            );
        }
        Ok(client)
    }
}
