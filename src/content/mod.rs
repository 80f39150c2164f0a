pub mod cache;
pub mod client;
pub mod error;
pub mod queries;
pub mod traits;
pub mod types;

pub use cache::RevalidatingSource;
pub use client::SanityClient;
pub use traits::ContentSource;
pub use types::FetchOptions;

#[cfg(test)]
pub(crate) mod testing {
    use super::error::ContentError;
    use super::traits::ContentSource;
    use super::types::{FetchOptions, QueryParams};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// In-memory store that ignores GROQ filters: list queries return every
    /// document and `$slug` queries return the first slug match, published
    /// or not.
    pub struct StaticSource {
        documents: Vec<Value>,
        log: Mutex<Vec<String>>,
    }

    impl StaticSource {
        pub fn new(documents: Vec<Value>) -> Self {
            Self {
                documents,
                log: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.log.lock().unwrap().len()
        }

        pub fn last_query(&self) -> Option<String> {
            self.log.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl ContentSource for StaticSource {
        async fn fetch(
            &self,
            query: &str,
            params: &QueryParams,
            _options: &FetchOptions,
        ) -> Result<Value, ContentError> {
            self.log.lock().unwrap().push(query.to_string());

            let slug = params
                .iter()
                .find(|(name, _)| name.as_str() == "slug")
                .map(|(_, value)| value);

            match slug {
                Some(slug) => Ok(self
                    .documents
                    .iter()
                    .find(|doc| &doc["slug"]["current"] == slug)
                    .cloned()
                    .unwrap_or(Value::Null)),
                None => Ok(Value::Array(self.documents.clone())),
            }
        }

        fn source_name(&self) -> &'static str {
            "static"
        }
    }

    /// Store that is always down
    pub struct UnavailableSource;

    #[async_trait]
    impl ContentSource for UnavailableSource {
        async fn fetch(
            &self,
            _query: &str,
            _params: &QueryParams,
            _options: &FetchOptions,
        ) -> Result<Value, ContentError> {
            Err(ContentError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            })
        }

        fn source_name(&self) -> &'static str {
            "unavailable"
        }
    }

    /// A published, schema-valid property document
    pub fn property_doc(slug: &str, title: &str) -> Value {
        json!({
            "_id": format!("property-{slug}"),
            "title": title,
            "slug": { "current": slug },
            "description": format!("{title} is a bright home close to the park."),
            "price": 350000.0,
            "location": "Riverside",
            "isPublished": true,
            "bedrooms": 3.0,
            "bathrooms": 2.0,
            "area": 1450.0,
            "parking": 1.0,
            "banner": {
                "_type": "image",
                "asset": { "_type": "reference", "_ref": format!("image-{slug}banner-1600x1200-jpg") }
            },
            "amenities": ["wifi", "pool"],
            "images": [
                {
                    "_type": "image",
                    "asset": { "_type": "reference", "_ref": format!("image-{slug}kitchen-800x600-png") }
                }
            ]
        })
    }
}
