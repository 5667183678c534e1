//! The narrow seam between the pipeline and the upstream API.

use async_trait::async_trait;
use medium_api::{GraphQlRequest, RawResponse};

/// Something that can deliver a GraphQL request upstream and hand back the
/// raw answer. Implemented by [`medium_api::Client`]; tests use stubs.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Whether the source has the credentials it needs. Checked before the
    /// client's request is even validated.
    fn is_configured(&self) -> bool;

    /// Send `request` and return the status and body. Only transport-level
    /// failures are errors.
    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse, medium_api::Error>;
}

#[async_trait]
impl FeedSource for medium_api::Client {
    fn is_configured(&self) -> bool {
        self.has_api_key()
    }

    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse, medium_api::Error> {
        medium_api::Client::send(self, request).await
    }
}

#[async_trait]
impl<T: FeedSource + ?Sized> FeedSource for std::sync::Arc<T> {
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse, medium_api::Error> {
        (**self).send(request).await
    }
}
