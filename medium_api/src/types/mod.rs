mod graphql;
pub use self::graphql::GraphQlResponse;

mod tag_feed;
pub use self::tag_feed::{Creator, Post, TagFeed, TagFeedData, TagFeedItem, TagFeedResponse};
