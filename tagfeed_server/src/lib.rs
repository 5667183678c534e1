//! HTTP surface of the Medium tag-feed proxy.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use tagfeed_lib::{FeedSource, TagFeedService};

/// The service type shared by every worker.
pub type SharedService = TagFeedService<Arc<dyn FeedSource>>;

/// Wrap any [`FeedSource`] into the shared service type.
pub fn shared_service<S: FeedSource + 'static>(source: S) -> SharedService {
    TagFeedService::new(Arc::new(source) as Arc<dyn FeedSource>)
}
