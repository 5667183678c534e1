//! Error taxonomy for the feed pipeline and its mapping onto HTTP responses.

use medium_api::FeedMode;
use serde::Serialize;
use serde_json::Value;

/// Status used when an upstream failure carries no usable error status.
pub const FALLBACK_UPSTREAM_STATUS: u16 = 503;

/// Problems with the client's request body. Always reported as 400.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No JSON data provided in request body or invalid JSON format.")]
    MissingBody,
    #[error("Missing '{0}' in request body.")]
    MissingField(&'static str),
    /// Holds the trimmed, uppercased value the client sent.
    #[error("Invalid mode. Must be one of: {}", FeedMode::valid_values())]
    InvalidMode(String),
}

/// Every way a `/get-tag-feed` call can fail.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// No API key configured; a deployment problem, not a transient one.
    #[error("Server configuration error: API key missing.")]
    Configuration,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Request body exceeds the {limit} byte limit.")]
    PayloadTooLarge { limit: usize },
    #[error("Upstream returned HTTP {status}")]
    UpstreamHttp { status: u16, body: Value },
    #[error("Upstream request timed out")]
    UpstreamTimeout,
    #[error("Network error reaching upstream: {0}")]
    UpstreamNetwork(String),
    #[error("Invalid upstream payload: {reason}")]
    InvalidUpstreamPayload { reason: String, sample: String },
    #[error("GraphQL error(s) received from upstream")]
    UpstreamGraphQl(Vec<Value>),
    /// Anything else. Logged in full, never shown to the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<medium_api::Error> for FeedError {
    fn from(e: medium_api::Error) -> Self {
        use medium_api::Error as Api;
        match e {
            Api::MissingApiKey => Self::Configuration,
            Api::Timeout => Self::UpstreamTimeout,
            Api::Network(msg) => Self::UpstreamNetwork(msg),
            Api::HttpStatus { status, body } => Self::UpstreamHttp { status, body },
            Api::InvalidPayload { reason, sample } => {
                Self::InvalidUpstreamPayload { reason, sample }
            }
            Api::GraphQl(errors) => Self::UpstreamGraphQl(errors),
            Api::InvalidEndpoint(msg) | Api::RequestBuild(msg) => Self::Internal(msg),
        }
    }
}

/// JSON body of every error response: `{"error": ..., "details": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorBody {
    fn new(error: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            error: error.into(),
            details,
        }
    }
}

impl FeedError {
    /// HTTP status reported to the caller. Upstream 4xx/5xx statuses pass through.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Configuration | Self::Internal(_) => 500,
            Self::Validation(_) | Self::UpstreamGraphQl(_) => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::UpstreamHttp { status, .. } if (400..600).contains(status) => *status,
            Self::UpstreamHttp { .. } => FALLBACK_UPSTREAM_STATUS,
            Self::UpstreamTimeout => 504,
            Self::UpstreamNetwork(_) => 503,
            Self::InvalidUpstreamPayload { .. } => 502,
        }
    }

    /// Short stable name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration_error",
            Self::Validation(_) => "request_validation_error",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::UpstreamHttp { .. } => "upstream_http_error",
            Self::UpstreamTimeout => "upstream_timeout",
            Self::UpstreamNetwork(_) => "upstream_network_error",
            Self::InvalidUpstreamPayload { .. } => "invalid_upstream_payload",
            Self::UpstreamGraphQl(_) => "upstream_graphql_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// The body sent to the caller.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::Configuration => ErrorBody::new(self.to_string(), None),
            Self::Validation(ValidationError::InvalidMode(mode)) => ErrorBody::new(
                self.to_string(),
                Some(Value::String(format!("Received mode '{}'.", mode))),
            ),
            Self::Validation(e) => ErrorBody::new(e.to_string(), None),
            Self::PayloadTooLarge { limit } => ErrorBody::new(
                "Request body too large.",
                Some(Value::String(format!(
                    "Request bodies are limited to {} bytes.",
                    limit
                ))),
            ),
            Self::UpstreamHttp { status, .. } => ErrorBody::new(
                "Failed to communicate effectively with Medium API.",
                Some(Value::String(format!("Upstream returned HTTP {}", status))),
            ),
            Self::UpstreamTimeout => ErrorBody::new(
                "Request to Medium API timed out.",
                Some(Value::String(
                    "The upstream server took too long to respond.".to_string(),
                )),
            ),
            Self::UpstreamNetwork(msg) => ErrorBody::new(
                "Network error connecting to Medium API. Check internet connection.",
                Some(Value::String(msg.clone())),
            ),
            Self::InvalidUpstreamPayload { reason, .. } => ErrorBody::new(
                "Invalid or unexpected response format from Medium.",
                Some(Value::String(reason.clone())),
            ),
            Self::UpstreamGraphQl(errors) => ErrorBody::new(
                "GraphQL error(s) received from Medium.",
                Some(Value::Array(errors.clone())),
            ),
            Self::Internal(_) => ErrorBody::new(
                "An unexpected internal server error occurred.",
                Some(Value::String("Please check server logs.".to_string())),
            ),
        }
    }

    /// Writes the failure to the log with the diagnostic context the
    /// response body may leave out.
    pub fn log(&self) {
        let kind = self.kind();
        match self {
            Self::Configuration => {
                tracing::error!(kind, "MEDIUM_API_KEY is not configured on the server")
            }
            Self::Validation(e) => tracing::info!(kind, "Rejected request: {}", e),
            Self::PayloadTooLarge { limit } => {
                tracing::info!(kind, limit, "Rejected request body over the size limit")
            }
            Self::UpstreamHttp { status, body } => {
                tracing::error!(kind, status, "HTTP error from Medium: {}", body)
            }
            Self::UpstreamTimeout => tracing::error!(kind, "Timeout contacting Medium API"),
            Self::UpstreamNetwork(msg) => {
                tracing::error!(kind, "Network issue contacting Medium: {}", msg)
            }
            Self::InvalidUpstreamPayload { reason, sample } => tracing::error!(
                kind,
                "Failed to decode JSON from Medium: {} | sample: {}",
                reason,
                sample
            ),
            Self::UpstreamGraphQl(errors) => tracing::warn!(
                kind,
                "GraphQL errors received from Medium: {}",
                serde_json::Value::Array(errors.clone())
            ),
            Self::Internal(msg) => tracing::error!(kind, "Unexpected internal error: {}", msg),
        }
    }
}
