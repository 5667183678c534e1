use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tagfeed_lib::medium_api::response::HIJACK_PREFIX;
use tagfeed_lib::medium_api::{self, GraphQlRequest, RawResponse};
use tagfeed_lib::{FeedError, FeedSource, ProxyConfig, TagFeedService, ValidationError};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

enum Reply {
    Raw(u16, String),
    Timeout,
    Refused,
}

struct StubSource {
    configured: bool,
    reply: Reply,
    calls: AtomicUsize,
}

impl StubSource {
    fn new(reply: Reply) -> Self {
        Self {
            configured: true,
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(Reply::Raw(200, String::new()))
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for StubSource {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse, medium_api::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert!(request.query.contains("tagFeed"));
        match &self.reply {
            Reply::Raw(status, body) => Ok(RawResponse::new(*status, body.clone())),
            Reply::Timeout => Err(medium_api::Error::Timeout),
            Reply::Refused => Err(medium_api::Error::Network("connection refused".to_string())),
        }
    }
}

fn rust_hot() -> &'static [u8] {
    br#"{"tagSlug":"rust","mode":"hot"}"#
}

fn two_items() -> String {
    json!({
        "data": {
            "tagFeed": {
                "items": [
                    {
                        "feedId": "f1",
                        "post": {
                            "id": "123",
                            "title": "Zero-Cost Abstractions",
                            "uniqueSlug": "zero-cost-abstractions-123",
                            "creator": {"id": "u1", "name": "Alice", "username": "alice"}
                        }
                    },
                    {"feedId": "f2", "post": null}
                ]
            }
        }
    })
    .to_string()
}

#[tokio::test]
async fn configuration_is_checked_before_validation() {
    let service = TagFeedService::new(StubSource::unconfigured());
    let err = service.handle(b"").await.unwrap_err();
    assert!(matches!(err, FeedError::Configuration));
    assert_eq!(err.status_code(), 500);
    assert_eq!(service.source().calls(), 0);
}

#[tokio::test]
async fn invalid_requests_never_reach_upstream() {
    let service = TagFeedService::new(StubSource::new(Reply::Raw(200, two_items())));

    let err = service.handle(br#"{"mode":"hot"}"#).await.unwrap_err();
    assert!(matches!(
        err,
        FeedError::Validation(ValidationError::MissingField("tagSlug"))
    ));

    let err = service
        .handle(br#"{"tagSlug":"rust","mode":"sideways"}"#)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(service.source().calls(), 0);
}

#[tokio::test]
async fn prefixed_payload_is_normalized() {
    let body = format!("{}{}", HIJACK_PREFIX, two_items());
    let service = TagFeedService::new(StubSource::new(Reply::Raw(200, body)));

    let resp = service.handle(rust_hot()).await.unwrap();
    assert_eq!(resp.articles.len(), 1);
    let article = &resp.articles[0];
    assert_eq!(article.title, "Zero-Cost Abstractions");
    assert_eq!(article.author, "Alice");
    assert_eq!(article.link, "https://alice.medium.com/zero-cost-abstractions-123");
}

#[tokio::test]
async fn upstream_failures_map_to_statuses() {
    let cases = [
        (Reply::Timeout, 504),
        (Reply::Refused, 503),
        (Reply::Raw(403, "Forbidden".to_string()), 403),
        (Reply::Raw(500, "{\"message\":\"boom\"}".to_string()), 500),
        (Reply::Raw(200, "<html>oops</html>".to_string()), 502),
    ];
    for (reply, expected) in cases {
        let service = TagFeedService::new(StubSource::new(reply));
        let err = service.handle(rust_hot()).await.unwrap_err();
        assert_eq!(err.status_code(), expected, "error: {err:?}");
        assert!(!err.to_body().error.is_empty());
    }
}

#[tokio::test]
async fn graphql_errors_are_bad_request_with_details() {
    let errors = json!([{"message": "Unknown tag"}]);
    let body = json!({"errors": errors, "data": null}).to_string();
    let service = TagFeedService::new(StubSource::new(Reply::Raw(200, body)));

    let err = service.handle(rust_hot()).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_body().details, Some(errors));
}

#[tokio::test]
async fn real_client_against_stub_upstream() {
    let mock_server = MockServer::start().await;
    let body = format!(
        "{}{}",
        HIJACK_PREFIX,
        std::fs::read_to_string("tests/fixtures/tag_feed.json").unwrap()
    );

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"tagSlug": "rust", "mode": "TOP_YEAR"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ProxyConfig {
        endpoint: mock_server.uri(),
        api_key: Some("test-key".to_string()),
        timeout: Duration::from_secs(5),
    };
    let service = TagFeedService::new(config.build_client().unwrap());

    let resp = service
        .handle(br#"{"tagSlug":"rust","mode":" Top_Year "}"#)
        .await
        .unwrap();
    let links: Vec<&str> = resp.articles.iter().map(|a| a.link.as_str()).collect();
    assert_eq!(
        links,
        vec![
            "https://medium.com/@alice/ownership-in-practice-a1b2c3d4e5f6",
            "https://bob.medium.com/lifetimes-without-tears-0f9e8d7c6b5a",
        ]
    );
}
