mod amenity;

pub use amenity::Amenity;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

/// URL-safe identifier derived from a property's title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// Opaque image field as stored on a document.
///
/// Any JSON shape is accepted: when no asset reference can be found the
/// reference is simply absent and the image renders as a placeholder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct ImageRef {
    pub asset_ref: Option<String>,
}

impl From<Value> for ImageRef {
    fn from(value: Value) -> Self {
        let asset = value.get("asset");
        let asset_ref = asset
            .and_then(|a| a.get("_ref").or_else(|| a.get("_id")))
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { asset_ref }
    }
}

impl From<ImageRef> for Value {
    fn from(image: ImageRef) -> Self {
        match image.asset_ref {
            Some(reference) => json!({
                "_type": "image",
                "asset": { "_type": "reference", "_ref": reference }
            }),
            None => json!({ "_type": "image" }),
        }
    }
}

/// Listing projection of a property document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub description: String,
    pub price: f64,
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_published: bool,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub area: f64,
    #[serde(default)]
    pub banner: Option<ImageRef>,
}

/// Full property document as returned by the detail query.
///
/// A matched document always renders: fields the editor left unset decode
/// to empty values and schema violations are only logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub slug: Slug,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_published: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bedrooms: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bathrooms: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: f64,
    #[serde(default = "default_parking", deserialize_with = "null_as_parking_default")]
    pub parking: f64,
    #[serde(default)]
    pub banner: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageRef>,
}

fn default_parking() -> f64 {
    1.0
}

fn null_as_parking_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(default_parking))
}

/// Projected fields that were never set come back as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
