use crate::content::{queries, ContentSource, FetchOptions};
use crate::image::{Dimensions, ImageResolver};
use crate::models::{Amenity, Property};
use crate::views::{format_number, render_page, AppState, ImageView};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmenityView {
    pub tag: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

impl From<Amenity> for AmenityView {
    fn from(amenity: Amenity) -> Self {
        Self {
            tag: amenity.tag(),
            title: amenity.title(),
            icon: amenity.icon(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyDetail {
    pub title: String,
    pub location: String,
    pub price: String,
    pub description: String,
    pub banner: ImageView,
    pub gallery: Vec<ImageView>,
    pub stats: Vec<Stat>,
    pub amenities: Vec<AmenityView>,
}

impl PropertyDetail {
    fn new(property: Property, images: &ImageResolver) -> Self {
        let banner = ImageView::new(
            images,
            property.banner.as_ref(),
            property.title.as_str(),
            Dimensions::DETAIL_BANNER,
        );

        // The banner is image 1
        let gallery = property
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                ImageView::new(
                    images,
                    Some(image),
                    format!("{} - Image {}", property.title, index + 2),
                    Dimensions::GALLERY_THUMBNAIL,
                )
            })
            .collect();

        let stats = vec![
            Stat {
                label: "Bedrooms",
                icon: "bed",
                value: format_number(property.bedrooms),
            },
            Stat {
                label: "Bathrooms",
                icon: "bath",
                value: format_number(property.bathrooms),
            },
            Stat {
                label: "Sq Ft",
                icon: "square",
                value: format_number(property.area),
            },
            Stat {
                label: "Parking",
                icon: "car",
                value: format_number(property.parking),
            },
        ];

        Self {
            banner,
            gallery,
            stats,
            amenities: amenity_views(&property.amenities),
            price: format_number(property.price),
            title: property.title,
            location: property.location,
            description: property.description,
        }
    }
}

/// Known tags in document order, each once. Unknown tags render nothing.
fn amenity_views(tags: &[String]) -> Vec<AmenityView> {
    let mut seen = Vec::new();
    for amenity in tags.iter().filter_map(|tag| Amenity::from_tag(tag)) {
        if !seen.contains(&amenity) {
            seen.push(amenity);
        }
    }
    seen.into_iter().map(AmenityView::from).collect()
}

#[derive(Debug, Clone)]
pub enum DetailPage {
    Found(Box<PropertyDetail>),
    NotFound { slug: String },
}

/// A store failure is indistinguishable from a missing property
pub async fn load_detail(
    content: &dyn ContentSource,
    images: &ImageResolver,
    slug: &str,
    options: &FetchOptions,
) -> DetailPage {
    match queries::property_by_slug(content, slug, options).await {
        Ok(Some(property)) => DetailPage::Found(Box::new(PropertyDetail::new(property, images))),
        Ok(None) => DetailPage::NotFound {
            slug: slug.to_string(),
        },
        Err(err) => {
            warn!(slug, "Detail fetch from {} failed: {}", content.source_name(), err);
            DetailPage::NotFound {
                slug: slug.to_string(),
            }
        }
    }
}

#[derive(Serialize)]
struct FoundContext<'a> {
    property: &'a PropertyDetail,
}

#[derive(Serialize)]
struct NotFoundContext<'a> {
    slug: &'a str,
}

#[tracing::instrument(skip(state))]
pub async fn handle_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let page = load_detail(
        state.content.as_ref(),
        &state.images,
        &slug,
        &state.fetch_options(),
    )
    .await;

    match &page {
        DetailPage::Found(property) => render_page(
            &state.templates,
            "detail.html",
            &FoundContext { property },
            StatusCode::OK,
        ),
        DetailPage::NotFound { slug } => render_page(
            &state.templates,
            "not_found.html",
            &NotFoundContext { slug },
            StatusCode::NOT_FOUND,
        ),
    }
}
