use crate::content::error::ContentError;
use crate::content::traits::ContentSource;
use crate::content::types::{FetchOptions, QueryParams};
use crate::models::{Property, PropertySummary};
use crate::schema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

pub const PROPERTY_QUERY: &str = r#"*[_type == "property" && isPublished == true]{
  _id,
  title,
  slug,
  description,
  price,
  location,
  isPublished,
  bedrooms,
  bathrooms,
  area,
  banner
}"#;

pub const PROPERTY_DETAIL_QUERY: &str = r#"*[_type == "property" && isPublished == true && slug.current == $slug][0]{
  _id,
  title,
  slug,
  description,
  price,
  location,
  isPublished,
  bedrooms,
  bathrooms,
  area,
  parking,
  banner,
  amenities,
  images
}"#;

/// All published properties, in whatever order the store returns them.
/// Documents that don't fit the listing projection are skipped.
pub async fn published_properties(
    source: &dyn ContentSource,
    options: &FetchOptions,
) -> Result<Vec<PropertySummary>, ContentError> {
    let result = source
        .fetch(PROPERTY_QUERY, &QueryParams::new(), options)
        .await?;

    let documents = match result {
        Value::Array(documents) => documents,
        Value::Null => Vec::new(),
        other => {
            warn!("Expected a list of properties, got {}", type_name(&other));
            Vec::new()
        }
    };

    let properties: Vec<PropertySummary> = documents
        .into_iter()
        .filter_map(decode_document)
        .filter(|property: &PropertySummary| property.is_published)
        .collect();

    debug!("Fetched {} published properties", properties.len());
    Ok(properties)
}

/// The published property with this slug, if there is one
pub async fn property_by_slug(
    source: &dyn ContentSource,
    slug: &str,
    options: &FetchOptions,
) -> Result<Option<Property>, ContentError> {
    let params = QueryParams::new().with("slug", slug);
    let result = source.fetch(PROPERTY_DETAIL_QUERY, &params, options).await?;

    if result.is_null() {
        return Ok(None);
    }

    if let Err(errors) = schema::validate_property(&result) {
        for error in &errors {
            warn!(slug, "Property violates schema: {}", error);
        }
    }

    Ok(decode_document::<Property>(result).filter(|property| property.is_published))
}

fn decode_document<T: DeserializeOwned>(document: Value) -> Option<T> {
    let id = document
        .get("_id")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    match serde_json::from_value(document) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            warn!("Skipping property {}: {}", id, err);
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
