use serde::{Deserialize, Serialize};

/// Generic GraphQL response envelope. Medium may return HTTP 200 with a
/// populated `errors` array, so both halves are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<serde_json::Value>>,
}
