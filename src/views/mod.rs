pub mod assets;
pub mod detail;
pub mod listing;
pub mod studio;
pub mod templates;

use crate::config::Config;
use crate::content::{ContentSource, FetchOptions};
use crate::image::{Dimensions, ImageResolver};
use crate::models::ImageRef;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use std::sync::Arc;
use tera::Tera;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    pub images: Arc<ImageResolver>,
    pub templates: Arc<Tera>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions::revalidate(self.config.revalidate_secs)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(listing::handle_listing))
        .route("/property/{slug}", get(detail::handle_detail))
        .merge(studio::router())
        .merge(assets::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Everything an `<img>` element needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

impl ImageView {
    pub fn new(
        resolver: &ImageResolver,
        image: Option<&ImageRef>,
        alt: impl Into<String>,
        size: Dimensions,
    ) -> Self {
        Self {
            src: resolver.src(image, size),
            alt: alt.into(),
            width: size.width,
            height: size.height,
        }
    }
}

/// Numbers are stored as floats; whole values print without a fraction
pub(crate) fn format_number(value: f64) -> String {
    value.to_string()
}

pub(crate) fn render_page<T: Serialize>(
    templates: &Tera,
    name: &str,
    page: &T,
    status: StatusCode,
) -> Response {
    let context = match tera::Context::from_serialize(page) {
        Ok(context) => context,
        Err(err) => {
            tracing::error!(error=?err, template=name, "error building template context");
            return (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response();
        }
    };

    match templates.render(name, &context) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error=?err, template=name, "error rendering template");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(350000.0), "350000");
    }
}
