//! HTTP client for Medium's GraphQL endpoint.

use std::time::Duration;

use url::Url;

use crate::{query::GraphQlRequest, response::RawResponse, user_agent::USER_AGENT, Error};

/// Production GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://medium.com/_/graphql";

/// Upper bound on a single upstream round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

/// HTTP client for Medium's GraphQL API.
///
/// Sends same-site `Origin`/`Referer` headers and a bearer API key. The
/// underlying `reqwest::Client` is pooled, so one instance is built at startup
/// and shared by every request.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    /// `None` when no usable key was configured; every call then fails with
    /// [`Error::MissingApiKey`] before touching the network.
    api_key: Option<String>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Client {
    /// Creates a client pointing at the production endpoint with the default timeout.
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom endpoint and timeout. Used for testing with wiremock.
    pub fn with_endpoint(
        endpoint: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            tracing::error!("Invalid GraphQL endpoint '{}': {}", endpoint, e);
            Error::InvalidEndpoint(e.to_string())
        })?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestBuild(e.to_string())
            })?;
        Ok(Self {
            http,
            endpoint,
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
        })
    }

    /// Whether an API key is available. Callers check this before validating
    /// input so a deployment problem is reported ahead of client mistakes.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts a GraphQL request and returns the raw status and body.
    ///
    /// Only transport-level problems are errors here (missing key, timeout,
    /// connection failure); status and payload checks are left to
    /// [`crate::response::read_response`].
    pub async fn send(&self, payload: &GraphQlRequest) -> Result<RawResponse, Error> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("Medium API key is not configured");
            Error::MissingApiKey
        })?;
        tracing::debug!(
            "Sending GraphQL request to {}: {}",
            self.endpoint,
            payload.variables
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .header("origin", "https://medium.com")
            .header("referer", "https://medium.com/")
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach {}: {}", self.endpoint, e);
                Error::from_transport(e)
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from_transport(e)
        })?;

        Ok(RawResponse { status, body })
    }
}
