use std::sync::Arc;

use crate::layout::{PageGeometry, StyleSheet};
use crate::leads::LeadStore;
use crate::llm_client::TextGenerator;
use crate::scrape::ContentFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Report text generator. Production: `LlmClient` against Gemini.
    pub generator: Arc<dyn TextGenerator>,
    pub fetcher: Arc<dyn ContentFetcher>,
    /// Lead persistence, written fire-and-forget on every valid request.
    pub lead_store: Arc<dyn LeadStore>,
    pub page_geometry: PageGeometry,
    pub styles: StyleSheet,
}
