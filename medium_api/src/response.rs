//! Cleaning and parsing of raw GraphQL response bodies.
//!
//! Medium prefixes JSON responses with an anti-hijacking preamble that must
//! be removed before the body is valid JSON.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

/// Literal preamble Medium prepends to JSON bodies.
pub const HIJACK_PREFIX: &str = "])}while(1);</x>";

/// Maximum number of characters of a raw body kept for diagnostics.
pub const SAMPLE_LEN: usize = 500;

/// Removes [`HIJACK_PREFIX`] when the body starts with it; otherwise returns the body unchanged.
pub fn strip_hijack_prefix(body: &str) -> &str {
    body.strip_prefix(HIJACK_PREFIX).unwrap_or(body)
}

/// Status and body of an upstream answer, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Turns a raw upstream answer into `T`.
///
/// Non-2xx statuses become [`Error::HttpStatus`]; 2xx bodies go through
/// [`parse_payload`].
pub fn read_response<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, Error> {
    if !raw.is_success() {
        tracing::error!(
            "Request failed with status {}: {}",
            raw.status,
            truncate(&raw.body, SAMPLE_LEN)
        );
        return Err(Error::HttpStatus {
            status: raw.status,
            body: error_body(&raw.body),
        });
    }
    parse_payload(&raw.body)
}

/// Cleans, parses and checks a successful (2xx) response body.
///
/// Fails with [`Error::InvalidPayload`] when the cleaned body is not JSON or
/// does not fit `T`, and with [`Error::GraphQl`] when the document carries a
/// non-empty top-level `errors` array.
pub fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let cleaned = strip_hijack_prefix(body);
    let value: Value = serde_json::from_str(cleaned).map_err(|e| invalid_payload(e, body))?;

    if let Some(errors) = value.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            tracing::warn!("GraphQL errors received: {}", serde_json::Value::Array(errors.clone()));
            return Err(Error::GraphQl(errors.clone()));
        }
    }

    serde_json::from_value(value).map_err(|e| invalid_payload(e, body))
}

/// Best-effort representation of a 4xx/5xx body: the parsed JSON document if
/// there is one, otherwise a truncated string.
pub fn error_body(body: &str) -> Value {
    serde_json::from_str(strip_hijack_prefix(body))
        .unwrap_or_else(|_| Value::String(truncate(body, SAMPLE_LEN)))
}

/// Returns at most `max` characters of `body`, never splitting a character.
pub fn truncate(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((idx, _)) => body[..idx].to_string(),
        None => body.to_string(),
    }
}

fn invalid_payload(err: serde_json::Error, raw: &str) -> Error {
    let sample = truncate(raw, SAMPLE_LEN);
    tracing::error!("Failed to decode upstream JSON: {} | body: {}", err, sample);
    Error::InvalidPayload {
        reason: err.to_string(),
        sample,
    }
}
