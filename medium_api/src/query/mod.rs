mod common;
pub use self::common::{GraphQlRequest, Query};

mod tag_feed;
pub use self::tag_feed::{FeedMode, ParseFeedModeError, TagFeedQuery};
