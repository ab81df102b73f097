mod config;
mod errors;
mod layout;
mod leads;
mod llm_client;
mod render;
mod report;
mod routes;
mod scrape;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::{PageGeometry, StyleSheet};
use crate::leads::FirestoreLeadStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scrape::HttpContentFetcher;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting growth report API v{}", env!("CARGO_PKG_VERSION"));

    let generator = Arc::new(LlmClient::new(config.gemini_api_key.clone())?);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let fetcher = Arc::new(HttpContentFetcher::new()?);

    let lead_store = Arc::new(FirestoreLeadStore::new(config.firebase.clone())?);
    info!("Lead store initialized (project: {})", config.firebase.project_id);

    let page_geometry = PageGeometry::default();
    info!(
        "Page geometry: {}x{}pt",
        page_geometry.width, page_geometry.height
    );

    let state = AppState {
        generator,
        fetcher,
        lead_store,
        page_geometry,
        styles: StyleSheet::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
