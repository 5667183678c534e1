use medium_api::{FeedMode, Query, TagFeedQuery};

#[test]
fn feed_mode_parses_case_insensitively() {
    assert_eq!("hot".parse::<FeedMode>().unwrap(), FeedMode::Hot);
    assert_eq!("  New ".parse::<FeedMode>().unwrap(), FeedMode::New);
    assert_eq!("top_all_time".parse::<FeedMode>().unwrap(), FeedMode::TopAllTime);
    assert_eq!("TOP_MONTH".parse::<FeedMode>().unwrap(), FeedMode::TopMonth);
    assert_eq!("Top_Week".parse::<FeedMode>().unwrap(), FeedMode::TopWeek);
    assert_eq!("top_year\n".parse::<FeedMode>().unwrap(), FeedMode::TopYear);
}

#[test]
fn feed_mode_rejects_unknown_values() {
    let err = "sideways".parse::<FeedMode>().unwrap_err();
    assert_eq!(err.0, "SIDEWAYS");
    assert!(err.to_string().contains("HOT, NEW, TOP_ALL_TIME, TOP_MONTH, TOP_WEEK, TOP_YEAR"));

    assert!("top all time".parse::<FeedMode>().is_err());
    assert!("".parse::<FeedMode>().is_err());
}

#[test]
fn feed_mode_display_round_trips_wire_names() {
    for mode in FeedMode::ALL {
        assert_eq!(mode.to_string(), mode.as_str());
        assert_eq!(serde_json::to_value(mode).unwrap(), mode.as_str());
    }
}

#[test]
fn tag_feed_request_body() {
    let query = TagFeedQuery::new("rust", FeedMode::TopWeek);
    let body = serde_json::to_value(query.to_request()).unwrap();

    assert_eq!(body["variables"]["tagSlug"], "rust");
    assert_eq!(body["variables"]["mode"], "TOP_WEEK");

    let document = body["query"].as_str().unwrap();
    assert!(document.starts_with("query TagFeed($tagSlug: String!, $mode: TagFeedMode!)"));
    for field in ["feedId", "mediumUrl", "uniqueSlug", "creator", "username"] {
        assert!(document.contains(field), "missing field {}", field);
    }
}
