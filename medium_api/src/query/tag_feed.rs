//! The `TagFeed` operation and its [`FeedMode`] sort argument.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::common::Query;

const TAG_FEED_DOCUMENT: &str = r#"query TagFeed($tagSlug: String!, $mode: TagFeedMode!) {
  tagFeed(tagSlug: $tagSlug, mode: $mode) {
    items {
      feedId
      post {
        id
        title
        mediumUrl
        uniqueSlug
        creator {
          id
          name
          username
        }
      }
    }
  }
}"#;

/// Sort mode accepted by the `tagFeed` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedMode {
    Hot,
    New,
    TopAllTime,
    TopMonth,
    TopWeek,
    TopYear,
}

impl FeedMode {
    /// Every mode, in the order they are listed to clients.
    pub const ALL: [FeedMode; 6] = [
        FeedMode::Hot,
        FeedMode::New,
        FeedMode::TopAllTime,
        FeedMode::TopMonth,
        FeedMode::TopWeek,
        FeedMode::TopYear,
    ];

    /// The wire name of the mode (`HOT`, `TOP_ALL_TIME`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedMode::Hot => "HOT",
            FeedMode::New => "NEW",
            FeedMode::TopAllTime => "TOP_ALL_TIME",
            FeedMode::TopMonth => "TOP_MONTH",
            FeedMode::TopWeek => "TOP_WEEK",
            FeedMode::TopYear => "TOP_YEAR",
        }
    }

    /// Comma separated list of every wire name, e.g. for error messages.
    pub fn valid_values() -> String {
        FeedMode::ALL
            .iter()
            .map(FeedMode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the six feed modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFeedModeError(pub String);

impl fmt::Display for ParseFeedModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown feed mode '{}', expected one of: {}",
            self.0,
            FeedMode::valid_values()
        )
    }
}

impl std::error::Error for ParseFeedModeError {}

impl FromStr for FeedMode {
    type Err = ParseFeedModeError;

    /// Case-insensitive and whitespace-tolerant: `" top_week "` parses as `TOP_WEEK`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        FeedMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or(ParseFeedModeError(normalized))
    }
}

/// Query for the articles of one tag, sorted by `mode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFeedQuery {
    pub tag_slug: String,
    pub mode: FeedMode,
}

impl TagFeedQuery {
    pub fn new(tag_slug: impl Into<String>, mode: FeedMode) -> Self {
        Self {
            tag_slug: tag_slug.into(),
            mode,
        }
    }
}

impl Query for TagFeedQuery {
    fn document(&self) -> &'static str {
        TAG_FEED_DOCUMENT
    }

    fn variables(&self) -> serde_json::Value {
        json!({
            "tagSlug": self.tag_slug,
            "mode": self.mode,
        })
    }
}
