mod config;
mod content;
mod image;
mod models;
mod schema;
mod views;

use anyhow::Context;
use config::Config;
use content::{RevalidatingSource, SanityClient};
use image::ImageResolver;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use views::AppState;

/// Distinct (query, params) pairs kept for revalidation
const CACHE_CAPACITY: u64 = 1_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("missing environment variables")?;

    let client = SanityClient::new(&config.sanity).context("Failed to create content client")?;
    let images = ImageResolver::new(&config.sanity.project_id, &config.sanity.dataset)
        .context("Failed to build image CDN url")?;
    let templates = views::templates::build().context("Failed to load page templates")?;

    let port = config.port;
    info!("🏠 Homie");
    info!(
        "project: {}, dataset: {}, revalidate: {}s",
        config.sanity.project_id, config.sanity.dataset, config.revalidate_secs
    );

    let state = AppState {
        content: Arc::new(RevalidatingSource::new(client, CACHE_CAPACITY)),
        images: Arc::new(images),
        templates: Arc::new(templates),
        config: Arc::new(config),
    };

    let app = views::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on port {}", port);

    axum::serve(listener, app)
        .await
        .context("error starting service")
}
