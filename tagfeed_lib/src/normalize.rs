//! Reshapes upstream feed items into flat [`Article`] summaries.
//!
//! Link resolution walks a fixed fallback chain, first match wins:
//!
//! 1. `post.mediumUrl`
//! 2. `https://{creator.username}.medium.com/{uniqueSlug}`
//! 3. `https://medium.com/p/{post.id or uniqueSlug}` when there is no username
//! 4. `https://medium.com/p/{feedId}` when there is no slug at all. Legacy
//!    best-effort fallback; not known to be a stable upstream URL shape.
//! 5. a diagnostic placeholder naming `feedId` and `post.id`
//!
//! Empty strings count as absent at every step.

use medium_api::types::{Post, TagFeedItem};
use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One article in the proxy's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub author: String,
    pub link: String,
}

/// Normalize a feed, dropping items without a post. Order is preserved.
pub fn normalize_items(items: Vec<TagFeedItem>) -> Vec<Article> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let article = normalize_item(item);
            if article.is_none() {
                tracing::debug!("Item {} skipped: no 'post' object.", index);
            }
            article
        })
        .collect()
}

/// Normalize one item. `None` when the item carries no post, or an empty one.
pub fn normalize_item(item: TagFeedItem) -> Option<Article> {
    let post = item.post.filter(|post| !post.is_empty())?;
    let creator = post.creator.as_ref();

    let title = non_empty(&post.title).unwrap_or(UNTITLED).to_string();
    let author = creator
        .and_then(|c| non_empty(&c.name))
        .unwrap_or(UNKNOWN_AUTHOR)
        .to_string();
    let link = resolve_link(non_empty(&item.feed_id), &post);

    Some(Article {
        title,
        author,
        link,
    })
}

/// Pick the article link for `post`; see the module docs for the order.
pub fn resolve_link(feed_id: Option<&str>, post: &Post) -> String {
    if let Some(url) = non_empty(&post.medium_url) {
        return url.to_string();
    }

    let post_id = non_empty(&post.id);
    let username = post.creator.as_ref().and_then(|c| non_empty(&c.username));

    match (non_empty(&post.unique_slug), username, feed_id) {
        (Some(slug), Some(username), _) => format!("https://{}.medium.com/{}", username, slug),
        (Some(slug), None, _) => format!("https://medium.com/p/{}", post_id.unwrap_or(slug)),
        (None, _, Some(feed_id)) => format!("https://medium.com/p/{}", feed_id),
        (None, _, None) => format!(
            "Link construction failed (feedId: {}, postId: {})",
            feed_id.unwrap_or("None"),
            post_id.unwrap_or("None")
        ),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
