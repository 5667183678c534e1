mod client;
mod errors;
mod query;
pub mod response;
pub mod types;
mod user_agent;
pub use self::client::{Client, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{FeedMode, GraphQlRequest, ParseFeedModeError, Query, TagFeedQuery};
pub use self::response::RawResponse;
pub use self::user_agent::USER_AGENT;
