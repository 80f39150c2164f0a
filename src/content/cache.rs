use crate::content::error::ContentError;
use crate::content::traits::ContentSource;
use crate::content::types::{FetchOptions, QueryParams};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use moka::future::Cache;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone)]
struct CachedResult {
    fetched_at: DateTime<Utc>,
    value: Value,
}

/// Time-based revalidation in front of another content source.
///
/// Results are keyed by query text and parameters. A hit younger than the
/// caller's `revalidate` window is served as-is; anything older is fetched
/// again and replaced. Failed fetches are never cached.
pub struct RevalidatingSource<S> {
    inner: S,
    cache: Cache<String, CachedResult>,
}

impl<S: ContentSource> RevalidatingSource<S> {
    pub fn new(inner: S, max_capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(max_capacity),
        }
    }
}

#[async_trait]
impl<S: ContentSource> ContentSource for RevalidatingSource<S> {
    async fn fetch(
        &self,
        query: &str,
        params: &QueryParams,
        options: &FetchOptions,
    ) -> Result<Value, ContentError> {
        if options.revalidate == 0 {
            return self.inner.fetch(query, params, options).await;
        }

        let key = format!("{}\u{0}{}", query, params.cache_key());
        // None: window too large to represent, entries never go stale
        let window = i64::try_from(options.revalidate)
            .ok()
            .and_then(Duration::try_seconds);

        if let Some(entry) = self.cache.get(&key).await {
            let fresh = match window {
                Some(window) => Utc::now() - entry.fetched_at < window,
                None => true,
            };
            if fresh {
                debug!("Serving cached result from {}", self.inner.source_name());
                return Ok(entry.value);
            }
            debug!("Cached result is stale, revalidating");
        }

        let value = self.inner.fetch(query, params, options).await?;
        self.cache
            .insert(
                key,
                CachedResult {
                    fetched_at: Utc::now(),
                    value: value.clone(),
                },
            )
            .await;

        Ok(value)
    }

    fn source_name(&self) -> &'static str {
        self.inner.source_name()
    }
}
