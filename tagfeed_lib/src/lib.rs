//! Library layer for the Medium tag-feed proxy: request validation, the
//! upstream seam, response normalization and the error taxonomy.
//!
//! Wraps the `medium_api` crate; the HTTP surface lives in `tagfeed_server`.

pub mod config;
pub mod error;
pub mod normalize;
pub mod service;
pub mod source;
pub mod validation;

pub use medium_api;
pub use medium_api::{FeedMode, TagFeedQuery};

pub use config::ProxyConfig;
pub use error::{ErrorBody, FeedError, ValidationError};
pub use normalize::Article;
pub use service::{FeedResponse, TagFeedService};
pub use source::FeedSource;
pub use validation::FeedRequest;
