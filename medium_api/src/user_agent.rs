/// User agent sent with every upstream request.
pub const USER_AGENT: &str = concat!(
    "medium-tagfeed-proxy/",
    env!("CARGO_PKG_VERSION"),
    " (MediumFeedFetcher; +https://github.com/medium-tagfeed-proxy)"
);
