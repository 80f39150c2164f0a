//! Host page for the content studio.
//!
//! The studio itself is a browser bundle. This page only ships a loading
//! shell plus a module script that imports the bundle and the configuration
//! below, then mounts the studio in place of the indicator. The shell has two
//! phases: it is served in `loading` and the script flips it to `ready` once
//! the one-shot load completes. A failed load is logged to the browser console
//! and the indicator stays up.

use crate::schema::{self, DocumentType};
use crate::views::{render_page, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

pub const BASE_PATH: &str = "/studio";
const CONFIG_PATH: &str = "/studio/config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StudioPhase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudioSchema {
    pub types: Vec<DocumentType>,
}

/// Configuration handed to the studio bundle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub project_id: String,
    pub dataset: String,
    pub base_path: &'static str,
    pub schema: StudioSchema,
}

impl StudioConfig {
    pub fn new(project_id: &str, dataset: &str) -> Self {
        Self {
            name: "default",
            title: "real-estate-listing",
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
            base_path: BASE_PATH,
            schema: StudioSchema {
                types: schema::schema_types(),
            },
        }
    }
}

#[derive(Serialize)]
struct ShellContext<'a> {
    phase: StudioPhase,
    loading_phase: StudioPhase,
    ready_phase: StudioPhase,
    bundle_url: &'a str,
    config_url: &'static str,
}

#[tracing::instrument(skip(state))]
pub async fn handle_studio(State(state): State<AppState>) -> Response {
    let context = ShellContext {
        phase: StudioPhase::Loading,
        loading_phase: StudioPhase::Loading,
        ready_phase: StudioPhase::Ready,
        bundle_url: &state.config.studio_bundle_url,
        config_url: CONFIG_PATH,
    };
    render_page(&state.templates, "studio.html", &context, StatusCode::OK)
}

pub async fn handle_studio_config(State(state): State<AppState>) -> Json<StudioConfig> {
    let sanity = &state.config.sanity;
    Json(StudioConfig::new(&sanity.project_id, &sanity.dataset))
}

/// `/studio` and everything under it serve the same shell; the studio does
/// its own client-side routing below the base path.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(BASE_PATH, get(handle_studio))
        .route("/studio/{*rest}", get(handle_studio))
        .route(CONFIG_PATH, get(handle_studio_config))
}
