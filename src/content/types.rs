use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Named query parameters, referenced from GROQ as `$name`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Stable textual form, used as part of the cache key
    pub fn cache_key(&self) -> String {
        // BTreeMap keeps the names ordered
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

/// Per-call caching options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Seconds a cached result may be served before the store is asked
    /// again. Zero bypasses the cache.
    pub revalidate: u64,
}

impl FetchOptions {
    pub fn revalidate(seconds: u64) -> Self {
        Self {
            revalidate: seconds,
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { revalidate: 60 }
    }
}

/// Envelope returned by the query endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub result: Value,
    /// Server-side query time in milliseconds
    #[serde(default)]
    pub ms: Option<u64>,
}
