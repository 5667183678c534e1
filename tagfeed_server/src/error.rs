//! Conversion of pipeline failures into HTTP responses.

use std::fmt;

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use tagfeed_lib::FeedError;

/// [`FeedError`] as an actix response: status from the error taxonomy,
/// body `{"error": ..., "details": ...}`.
#[derive(Debug)]
pub struct ApiError(pub FeedError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FeedError> for ApiError {
    fn from(e: FeedError) -> Self {
        Self(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.0.to_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use tagfeed_lib::ValidationError;

    #[actix_web::test]
    async fn renders_error_body() {
        let err = ApiError(FeedError::Validation(ValidationError::MissingField("mode")));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let resp = err.error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Missing 'mode' in request body.");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn passthrough_status() {
        let err = ApiError(FeedError::UpstreamHttp {
            status: 429,
            body: serde_json::Value::Null,
        });
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }
}
