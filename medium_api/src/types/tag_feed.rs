//! Wire types for the `tagFeed` query.
//!
//! Medium omits or nulls fields freely, so every field is optional.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::GraphQlResponse;

/// Full response to a [`crate::TagFeedQuery`].
pub type TagFeedResponse = GraphQlResponse<TagFeedData>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagFeedData {
    pub tag_feed: Option<TagFeed>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagFeed {
    /// Items that fail to decode are dropped one by one, so a single odd
    /// entry does not sink the rest of the feed.
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Option<Vec<TagFeedItem>>,
}

/// One entry of the feed. `post` is null for non-article entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagFeedItem {
    #[serde(default, deserialize_with = "string_or_number")]
    pub feed_id: Option<String>,
    pub post: Option<Post>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque post identifier (hex string).
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub title: Option<String>,
    /// Canonical URL; preferred over any constructed link.
    pub medium_url: Option<String>,
    /// Slug used to build `https://{username}.medium.com/{uniqueSlug}`.
    pub unique_slug: Option<String>,
    pub creator: Option<Creator>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
}

impl Post {
    /// True when Medium sent `"post": {}` or only nulls.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.medium_url.is_none()
            && self.unique_slug.is_none()
            && self.creator.is_none()
    }
}

/// Accepts a string or a number for identifier fields; anything else is `None`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<TagFeedItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw.map(|items| {
        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Item {} skipped: undecodable feed item: {}", index, e);
                    None
                }
            })
            .collect()
    }))
}

impl TagFeedResponse {
    /// Items at `data.tagFeed.items`, empty when any segment of the path is missing.
    pub fn into_items(self) -> Vec<TagFeedItem> {
        self.data
            .and_then(|data| data.tag_feed)
            .and_then(|feed| feed.items)
            .unwrap_or_default()
    }
}
