use crate::content::{queries, ContentSource, FetchOptions};
use crate::image::{Dimensions, ImageResolver};
use crate::models::PropertySummary;
use crate::views::{format_number, render_page, AppState, ImageView};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::warn;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub banner: ImageView,
}

impl PropertyCard {
    fn new(property: PropertySummary, images: &ImageResolver) -> Self {
        let banner = ImageView::new(
            images,
            property.banner.as_ref(),
            property.title.as_str(),
            Dimensions::LISTING_BANNER,
        );

        Self {
            href: property_href(&property.slug.current),
            title: property.title,
            description: property.description,
            price: format_number(property.price),
            location: property.location,
            bedrooms: format_number(property.bedrooms),
            bathrooms: format_number(property.bathrooms),
            area: format_number(property.area),
            banner,
        }
    }
}

/// Detail page path with the slug encoded as a single path segment
fn property_href(slug: &str) -> String {
    // form encoding writes spaces as '+' and escapes a literal '+'
    let segment: String = form_urlencoded::byte_serialize(slug.as_bytes()).collect();
    format!("/property/{}", segment.replace('+', "%20"))
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub cards: Vec<PropertyCard>,
    pub year: i32,
}

/// Fetch and shape the catalog. A store failure renders as an empty grid.
pub async fn load_listing(
    content: &dyn ContentSource,
    images: &ImageResolver,
    options: &FetchOptions,
) -> ListingPage {
    let properties = match queries::published_properties(content, options).await {
        Ok(properties) => properties,
        Err(err) => {
            warn!("Listing fetch from {} failed: {}", content.source_name(), err);
            Vec::new()
        }
    };

    ListingPage {
        cards: properties
            .into_iter()
            .map(|property| PropertyCard::new(property, images))
            .collect(),
        year: Utc::now().year(),
    }
}

#[tracing::instrument(skip(state))]
pub async fn handle_listing(State(state): State<AppState>) -> Response {
    let page = load_listing(
        state.content.as_ref(),
        &state.images,
        &state.fetch_options(),
    )
    .await;

    render_page(&state.templates, "listing.html", &page, StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::{property_doc, StaticSource, UnavailableSource};
    use crate::image::PLACEHOLDER_PATH;
    use crate::views::test_support::{get_page, state_with};
    use scraper::{Html, Selector};
    use serde_json::Value;

    fn select_text(html: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        html.select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    #[tokio::test]
    async fn renders_a_card_per_published_property() {
        let mut draft = property_doc("draft", "Draft Cottage");
        draft["isPublished"] = Value::Bool(false);
        let source = StaticSource::new(vec![
            property_doc("sunny-loft", "Sunny Loft"),
            draft,
            property_doc("harbor-view", "Harbor View"),
        ]);

        let (status, body) = get_page(state_with(source), "/").await;
        assert_eq!(status, StatusCode::OK);

        let html = Html::parse_document(&body);
        assert_eq!(
            select_text(&html, ".property-card .title"),
            vec!["Sunny Loft", "Harbor View"]
        );

        let link = Selector::parse("a.property-card").unwrap();
        let hrefs: Vec<_> = html
            .select(&link)
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/property/sunny-loft", "/property/harbor-view"]);
    }

    #[test]
    fn card_links_encode_the_slug() {
        assert_eq!(property_href("sunny-loft"), "/property/sunny-loft");
        assert_eq!(property_href("a?b#c/d"), "/property/a%3Fb%23c%2Fd");
        assert_eq!(property_href("two words+more"), "/property/two%20words%2Bmore");
    }

    #[tokio::test]
    async fn card_link_reaches_the_detail_page() {
        let source = StaticSource::new(vec![property_doc("a?b#c/d", "Odd Slug")]);
        let state = state_with(source);

        let (_, body) = get_page(state.clone(), "/").await;
        let html = Html::parse_document(&body);
        let link = Selector::parse("a.property-card").unwrap();
        let href = html
            .select(&link)
            .find_map(|a| a.value().attr("href"))
            .unwrap()
            .to_string();
        assert_eq!(href, "/property/a%3Fb%23c%2Fd");

        let (status, body) = get_page(state, &href).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(select_text(&Html::parse_document(&body), "h1.title"), vec!["Odd Slug"]);
    }

    #[tokio::test]
    async fn card_shows_summary_fields() {
        let source = StaticSource::new(vec![property_doc("sunny-loft", "Sunny Loft")]);

        let (_, body) = get_page(state_with(source), "/").await;
        let html = Html::parse_document(&body);

        assert_eq!(select_text(&html, ".price"), vec!["$350000"]);
        assert_eq!(select_text(&html, ".bedrooms"), vec!["3 bed"]);
        assert_eq!(select_text(&html, ".bathrooms"), vec!["2 bath"]);
        assert_eq!(select_text(&html, ".area"), vec!["1450 sqft"]);
        assert_eq!(select_text(&html, ".location"), vec!["Riverside"]);

        let img = Selector::parse("img.banner").unwrap();
        let banner = html.select(&img).next().unwrap();
        assert_eq!(banner.value().attr("width"), Some("400"));
        assert_eq!(banner.value().attr("height"), Some("300"));
        assert!(banner
            .value()
            .attr("src")
            .unwrap()
            .starts_with("https://cdn.sanity.io/images/abc123/production/"));
    }

    #[tokio::test]
    async fn unresolvable_banner_uses_placeholder() {
        let mut doc = property_doc("sunny-loft", "Sunny Loft");
        doc["banner"] = serde_json::json!({ "_type": "image" });
        let source = StaticSource::new(vec![doc]);

        let (_, body) = get_page(state_with(source), "/").await;
        let html = Html::parse_document(&body);

        let img = Selector::parse("img.banner").unwrap();
        let banner = html.select(&img).next().unwrap();
        assert_eq!(banner.value().attr("src"), Some(PLACEHOLDER_PATH));
    }

    #[tokio::test]
    async fn empty_store_renders_empty_grid() {
        let (status, body) = get_page(state_with(StaticSource::new(vec![])), "/").await;
        assert_eq!(status, StatusCode::OK);

        let html = Html::parse_document(&body);
        assert_eq!(select_text(&html, ".property-grid").len(), 1);
        assert!(select_text(&html, ".property-card").is_empty());
    }

    #[tokio::test]
    async fn store_failure_renders_empty_grid() {
        let (status, body) = get_page(state_with(UnavailableSource), "/").await;
        assert_eq!(status, StatusCode::OK);

        let html = Html::parse_document(&body);
        assert!(select_text(&html, ".property-card").is_empty());
    }

    #[tokio::test]
    async fn titles_are_escaped() {
        let source = StaticSource::new(vec![property_doc("xss", "<b>Bold</b> Home")]);

        let (_, body) = get_page(state_with(source), "/").await;
        assert!(!body.contains("<b>Bold</b>"));
        assert!(body.contains("&lt;b&gt;Bold&lt;&#x2F;b&gt; Home"));
    }
}
