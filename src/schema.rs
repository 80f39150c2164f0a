//! Declarative definition of the `property` document type.
//!
//! The studio registers these types with the content store, which enforces
//! the rules on write. [`validate_property`] applies the same rules locally so
//! documents that slipped past them can be reported.

use crate::models::Amenity;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

pub const SLUG_MAX_LENGTH: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Image,
    Array,
    Slug,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rules {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListOption {
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<ListOption>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayMember {
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub validation: Rules,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub of: Vec<ArrayMember>,
}

impl FieldDef {
    fn new(name: &'static str, title: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            title,
            field_type,
            validation: Rules::default(),
            initial_value: None,
            options: None,
            of: Vec::new(),
        }
    }

    fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    fn initial(mut self, value: Value) -> Self {
        self.initial_value = Some(value);
        self
    }

    fn options(mut self, options: FieldOptions) -> Self {
        self.options = Some(options);
        self
    }

    fn of(mut self, member: FieldType) -> Self {
        self.of.push(ArrayMember { field_type: member });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentType {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub fields: Vec<FieldDef>,
}

pub fn property_type() -> DocumentType {
    let amenity_options = Amenity::ALL
        .into_iter()
        .map(|amenity| ListOption {
            title: amenity.option_title(),
            value: amenity.tag(),
        })
        .collect();

    DocumentType {
        name: "property",
        title: "Property",
        kind: "document",
        fields: vec![
            FieldDef::new("title", "Title", FieldType::String).required(),
            FieldDef::new("slug", "Slug", FieldType::Slug)
                .required()
                .options(FieldOptions {
                    source: Some("title"),
                    max_length: Some(SLUG_MAX_LENGTH),
                    ..Default::default()
                }),
            FieldDef::new("location", "Location", FieldType::String).required(),
            FieldDef::new("price", "Price", FieldType::Number).required().min(0.0),
            FieldDef::new("description", "Description", FieldType::String).required(),
            FieldDef::new("isPublished", "Is Published", FieldType::Boolean).initial(json!(false)),
            FieldDef::new("banner", "Banner Image", FieldType::Image)
                .required()
                .options(FieldOptions {
                    hotspot: Some(true),
                    ..Default::default()
                }),
            FieldDef::new("images", "Images", FieldType::Array)
                .of(FieldType::Image)
                .options(FieldOptions {
                    layout: Some("grid"),
                    ..Default::default()
                }),
            FieldDef::new("bedrooms", "Bedrooms", FieldType::Number).required().min(0.0),
            FieldDef::new("bathrooms", "Bathrooms", FieldType::Number).required().min(0.0),
            FieldDef::new("area", "Area", FieldType::Number).required().min(0.0),
            FieldDef::new("parking", "Parking", FieldType::Number)
                .required()
                .min(0.0)
                .initial(json!(1)),
            FieldDef::new("amenities", "Amenities", FieldType::Array)
                .of(FieldType::String)
                .options(FieldOptions {
                    list: Some(amenity_options),
                    layout: Some("list"),
                    ..Default::default()
                }),
        ],
    }
}

/// Every document type registered with the studio
pub fn schema_types() -> Vec<DocumentType> {
    vec![property_type()]
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("`{field}` is required")]
    Missing { field: &'static str },

    #[error("`{field}` should be a {expected:?}")]
    WrongType {
        field: &'static str,
        expected: FieldType,
    },

    #[error("`{field}` is {value}, below the minimum of {min}")]
    BelowMinimum {
        field: &'static str,
        min: f64,
        value: f64,
    },

    #[error("`{field}` is {length} characters, longer than {max}")]
    TooLong {
        field: &'static str,
        max: usize,
        length: usize,
    },
}

/// Check a raw property document against [`property_type`]
pub fn validate_property(document: &Value) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    for field in property_type().fields {
        check_field(&field, document.get(field.name), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_field(field: &FieldDef, value: Option<&Value>, errors: &mut Vec<ValidationError>) {
    let value = match value {
        Some(value) if !is_empty(field.field_type, value) => value,
        _ => {
            if field.validation.required {
                errors.push(ValidationError::Missing { field: field.name });
            }
            return;
        }
    };

    let well_typed = match field.field_type {
        FieldType::String => value.is_string(),
        FieldType::Number => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Array => value.is_array(),
        FieldType::Image => value.is_object(),
        FieldType::Slug => value["current"].is_string(),
    };
    if !well_typed {
        errors.push(ValidationError::WrongType {
            field: field.name,
            expected: field.field_type,
        });
        return;
    }

    if let (Some(min), Some(number)) = (field.validation.min, value.as_f64()) {
        if number < min {
            errors.push(ValidationError::BelowMinimum {
                field: field.name,
                min,
                value: number,
            });
        }
    }

    if let Some(max) = field.options.as_ref().and_then(|o| o.max_length) {
        if let Some(current) = value["current"].as_str() {
            let length = current.chars().count();
            if length > max {
                errors.push(ValidationError::TooLong {
                    field: field.name,
                    max,
                    length,
                });
            }
        }
    }
}

fn is_empty(field_type: FieldType, value: &Value) -> bool {
    match field_type {
        _ if value.is_null() => true,
        FieldType::String => value.as_str().is_some_and(str::is_empty),
        FieldType::Slug => value["current"].as_str().is_some_and(str::is_empty),
        FieldType::Image => value.get("asset").is_none() && value.is_object(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::property_doc;

    #[test]
    fn valid_document_passes() {
        assert_eq!(validate_property(&property_doc("villa", "Villa")), Ok(()));
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let mut doc = property_doc("villa", "Villa");
        let object = doc.as_object_mut().unwrap();
        object.remove("title");
        object.remove("banner");
        object.remove("images");
        object.remove("amenities");

        let errors = validate_property(&doc).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Missing { field: "title" },
                ValidationError::Missing { field: "banner" },
            ]
        );
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let mut doc = property_doc("villa", "Villa");
        doc["price"] = json!(-1);
        doc["parking"] = json!(-2.5);

        let errors = validate_property(&doc).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BelowMinimum {
                    field: "price",
                    min: 0.0,
                    value: -1.0
                },
                ValidationError::BelowMinimum {
                    field: "parking",
                    min: 0.0,
                    value: -2.5
                },
            ]
        );
    }

    #[test]
    fn overlong_slug_is_rejected() {
        let mut doc = property_doc("villa", "Villa");
        doc["slug"]["current"] = json!("a".repeat(SLUG_MAX_LENGTH + 1));

        let errors = validate_property(&doc).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TooLong {
                field: "slug",
                max: SLUG_MAX_LENGTH,
                length: SLUG_MAX_LENGTH + 1
            }]
        );
    }

    #[test]
    fn wrong_types_are_rejected() {
        let mut doc = property_doc("villa", "Villa");
        doc["bedrooms"] = json!("three");

        let errors = validate_property(&doc).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::WrongType {
                field: "bedrooms",
                expected: FieldType::Number
            }]
        );
    }

    #[test]
    fn schema_serializes_for_the_studio() {
        let schema = serde_json::to_value(property_type()).unwrap();
        let parking = schema["fields"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["name"] == "parking")
            .unwrap();

        assert_eq!(schema["type"], "document");
        assert_eq!(parking["initialValue"], 1);
        assert_eq!(parking["validation"], json!({"required": true, "min": 0.0}));

        let slug = &schema["fields"][1];
        assert_eq!(slug["options"], json!({"source": "title", "maxLength": 96}));

        let amenities = schema["fields"].as_array().unwrap().last().unwrap();
        assert_eq!(amenities["of"], json!([{"type": "string"}]));
        assert_eq!(amenities["options"]["list"][0], json!({"title": "Wi-Fi", "value": "wifi"}));
    }
}
