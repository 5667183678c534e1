use medium_api::{FeedMode, TagFeedQuery};
use serde_json::{Map, Value};

use crate::error::ValidationError;

pub const TAG_SLUG_FIELD: &str = "tagSlug";
pub const MODE_FIELD: &str = "mode";

/// A client request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub tag_slug: String,
    pub mode: FeedMode,
}

impl From<FeedRequest> for TagFeedQuery {
    fn from(request: FeedRequest) -> Self {
        TagFeedQuery::new(request.tag_slug, request.mode)
    }
}

/// Validate a raw request body.
///
/// An absent, blank, unparseable, non-object or empty-object body is
/// `MissingBody`. Fields are checked in order: `tagSlug`, then `mode`.
pub fn validate_request(body: &[u8]) -> Result<FeedRequest, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::MissingBody);
    }
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Error decoding JSON from request: {}", e);
        ValidationError::MissingBody
    })?;
    validate_value(&value)
}

/// Validate an already-parsed JSON body.
pub fn validate_value(value: &Value) -> Result<FeedRequest, ValidationError> {
    let fields = match value.as_object() {
        Some(fields) if !fields.is_empty() => fields,
        _ => {
            tracing::warn!("Received empty/invalid JSON data in request body.");
            return Err(ValidationError::MissingBody);
        }
    };

    let tag_slug = required_str(fields, TAG_SLUG_FIELD)?;
    let mode = match fields.get(MODE_FIELD) {
        None | Some(Value::Null) => return Err(ValidationError::MissingField(MODE_FIELD)),
        Some(Value::String(mode)) if mode.is_empty() => {
            return Err(ValidationError::MissingField(MODE_FIELD))
        }
        Some(Value::String(mode)) => validate_mode(mode)?,
        // Numbers, booleans and the like are never a mode, but they were sent.
        Some(other) => validate_mode(&other.to_string())?,
    };

    Ok(FeedRequest {
        tag_slug: tag_slug.to_string(),
        mode,
    })
}

/// Validate a mode string: trimmed and case-insensitive.
pub fn validate_mode(input: &str) -> Result<FeedMode, ValidationError> {
    input
        .parse::<FeedMode>()
        .map_err(|e| ValidationError::InvalidMode(e.0))
}

/// A present, non-empty string field. `null`, non-strings and `""` count as missing.
fn required_str<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, ValidationError> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingField(name))
}
