//! The `/get-tag-feed` pipeline:
//! check configuration, validate, send upstream, clean and parse, normalize.

use medium_api::response::read_response;
use medium_api::types::TagFeedResponse;
use medium_api::{Query, TagFeedQuery};
use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::normalize::{normalize_items, Article};
use crate::source::FeedSource;
use crate::validation::{validate_request, FeedRequest};

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub articles: Vec<Article>,
}

/// Translates client feed requests into upstream calls and back.
///
/// Stateless apart from the read-only source, so one instance serves every
/// concurrent request.
pub struct TagFeedService<S> {
    source: S,
}

impl<S: FeedSource> TagFeedService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the whole pipeline on a raw request body.
    pub async fn handle(&self, body: &[u8]) -> Result<FeedResponse, FeedError> {
        if !self.source.is_configured() {
            return Err(FeedError::Configuration);
        }
        let request = validate_request(body)?;
        self.fetch(request).await
    }

    /// Fetch and normalize the feed for an already validated request.
    pub async fn fetch(&self, request: FeedRequest) -> Result<FeedResponse, FeedError> {
        tracing::info!(
            "Processing TagFeed request: tagSlug='{}', mode='{}'",
            request.tag_slug,
            request.mode
        );
        let query = TagFeedQuery::from(request);

        let raw = self.source.send(&query.to_request()).await?;
        let response: TagFeedResponse = read_response(&raw)?;

        let items = response.into_items();
        tracing::info!(
            "Received {} items from Medium for tag '{}'.",
            items.len(),
            query.tag_slug
        );
        let articles = normalize_items(items);
        tracing::info!("Successfully processed {} articles.", articles.len());

        Ok(FeedResponse { articles })
    }
}
