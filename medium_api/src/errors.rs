//! Error types for the API client.

/// Errors that can occur when talking to the Medium GraphQL endpoint.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No API key was configured. Raised before any network traffic.
    #[error("API key is not configured")]
    MissingApiKey,
    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
    /// The outbound request could not be built (bad header value, client setup).
    #[error("Failed to build request: {0}")]
    RequestBuild(String),
    /// The upstream did not answer within the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// Connection refused, DNS failure, or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),
    /// The upstream answered with a 4xx/5xx status. `body` is the parsed JSON
    /// error document when there is one, otherwise a truncated text snippet.
    #[error("Request failed with status {status}")]
    HttpStatus {
        status: u16,
        body: serde_json::Value,
    },
    /// The (cleaned) body was not the JSON document we expected.
    #[error("Invalid response payload: {reason}")]
    InvalidPayload { reason: String, sample: String },
    /// HTTP succeeded but the GraphQL document carries a non-empty `errors` array.
    #[error("GraphQL error(s) in response")]
    GraphQl(Vec<serde_json::Value>),
}

impl Error {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_builder() {
            Error::RequestBuild(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}
