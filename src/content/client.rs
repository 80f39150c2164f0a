use crate::config::SanityConfig;
use crate::content::error::ContentError;
use crate::content::traits::ContentSource;
use crate::content::types::{FetchOptions, QueryParams, QueryResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// HTTP client for the Sanity query API
#[derive(Debug, Clone)]
pub struct SanityClient {
    client: Client,
    endpoint: Url,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("homie/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let endpoint = Url::parse(&format!(
            "{}/v{}/data/query/{}",
            config.api_base().trim_end_matches('/'),
            config.api_version,
            config.dataset
        ))?;

        Ok(Self { client, endpoint })
    }

    /// Build the GET url for a query. Parameter values travel JSON-encoded
    /// under `$name` keys.
    fn query_url(&self, query: &str, params: &QueryParams) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params.iter() {
                pairs.append_pair(&format!("${}", name), &value.to_string());
            }
        }
        url
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn fetch(
        &self,
        query: &str,
        params: &QueryParams,
        _options: &FetchOptions,
    ) -> Result<Value, ContentError> {
        let url = self.query_url(query, params);
        debug!("Querying {}", self.endpoint);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Content store returned status: {}", status);
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: QueryResponse = serde_json::from_str(&body)?;
        if let Some(ms) = envelope.ms {
            debug!("Query answered in {}ms", ms);
        }

        Ok(envelope.result)
    }

    fn source_name(&self) -> &'static str {
        "Sanity"
    }
}
