use crate::content::error::ContentError;
use crate::content::types::{FetchOptions, QueryParams};
use async_trait::async_trait;
use serde_json::Value;

/// Read-only access to a content store that understands GROQ queries.
/// Views only ever hold one of these, so a cache or a test double can stand
/// in for the real client.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run a query and return the raw `result` value
    async fn fetch(
        &self,
        query: &str,
        params: &QueryParams,
        options: &FetchOptions,
    ) -> Result<Value, ContentError>;

    /// Get the name of the backing store
    fn source_name(&self) -> &'static str;
}
