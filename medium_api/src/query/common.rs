//! Shared query infrastructure: the [`Query`] trait and the [`GraphQlRequest`] envelope.

use serde::Serialize;

/// Trait implemented by all GraphQL operations the client can send.
pub trait Query {
    /// The GraphQL document for this operation.
    fn document(&self) -> &'static str;

    /// The variables object sent alongside the document.
    fn variables(&self) -> serde_json::Value;

    /// Builds the JSON body posted to the GraphQL endpoint.
    fn to_request(&self) -> GraphQlRequest {
        GraphQlRequest {
            query: self.document(),
            variables: self.variables(),
        }
    }
}

/// Body of a GraphQL POST: `{"query": ..., "variables": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: serde_json::Value,
}
