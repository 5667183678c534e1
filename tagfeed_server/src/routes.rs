use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use tagfeed_lib::{FeedError, ValidationError};

use crate::error::ApiError;
use crate::SharedService;

/// Largest request body `/get-tag-feed` will read.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

pub const HOME_STATUS: &str = "Medium TagFeed Proxy is running correctly!";

#[derive(Serialize)]
struct HomeResponse {
    status: &'static str,
    message: &'static str,
}

/// `GET /`: liveness check.
pub async fn home() -> HttpResponse {
    tracing::info!("Home route accessed.");
    HttpResponse::Ok().json(HomeResponse {
        status: HOME_STATUS,
        message: "Welcome!",
    })
}

/// `POST /get-tag-feed`: body `{"tagSlug": ..., "mode": ...}`.
///
/// Reads the payload itself so that oversized, missing or malformed bodies
/// are reported with this service's own error body rather than actix's
/// extractor errors.
pub async fn get_tag_feed(
    req: HttpRequest,
    service: web::Data<SharedService>,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let peer = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();
    tracing::info!("Received request for /get-tag-feed from IP: {}", peer);

    let feed = match read_body(payload).await {
        Ok(body) => service.handle(&body).await,
        Err(e) => Err(e),
    }
    .map_err(|e| {
        e.log();
        ApiError(e)
    })?;
    Ok(HttpResponse::Ok().json(feed))
}

async fn read_body(payload: web::Payload) -> Result<web::Bytes, FeedError> {
    match payload.to_bytes_limited(MAX_BODY_BYTES).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(e)) => {
            tracing::warn!("Failed to read request body: {}", e);
            Err(ValidationError::MissingBody.into())
        }
        Err(_) => Err(FeedError::PayloadTooLarge {
            limit: MAX_BODY_BYTES,
        }),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/get-tag-feed", web::post().to(get_tag_feed));
}
