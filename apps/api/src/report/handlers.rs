//! Axum route handlers for the Report API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::report::generator::generate_report;
use crate::report::models::GenerateReportRequest;
use crate::state::AppState;

/// POST /api/generate-report
///
/// Validates the form, runs the report pipeline and streams the PDF back as a download.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    payload: Result<Json<GenerateReportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected report request body: {e}");
        AppError::Validation("Invalid request body.".to_string())
    })?;

    let details = request.validate()?;
    let report = generate_report(&state, details).await?;
    info!("Serving {} ({} pages)", report.filename, report.page_count);

    let disposition = format!("attachment; filename=\"{}\"", report.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.pdf,
    )
        .into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::layout::{PageGeometry, StyleSheet};
    use crate::leads::{LeadRecord, LeadStore, StoreError};
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::routes::build_router;
    use crate::scrape::ContentFetcher;

    const REPORT_TEXT: &str = "# Comprehensive Strategic Growth Blueprint for Ada\n\n\
        ## 1. Executive Summary & Strategic Overview\n\
        Ada, your engines are ready for a much wider market.\n\n\
        - **Lever 1:** Digital presence";

    #[derive(Default)]
    struct FakeFetcher {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ContentFetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> String {
            self.urls.lock().unwrap().push(url.to_string());
            "Analytical engines, hand built in London.".to_string()
        }
    }

    struct FakeGenerator {
        prompts: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                Err(LlmError::EmptyContent)
            } else {
                Ok(REPORT_TEXT.to_string())
            }
        }
    }

    struct FakeStore {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl LeadStore for FakeStore {
        async fn append(&self, _record: &LeadRecord) -> Result<String, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(StoreError::MissingDocumentName)
            } else {
                Ok("lead-1".to_string())
            }
        }
    }

    struct Harness {
        server: TestServer,
        fetcher: Arc<FakeFetcher>,
        generator: Arc<FakeGenerator>,
        store: Arc<FakeStore>,
    }

    fn harness(generation_fails: bool, store_fails: bool) -> Harness {
        let fetcher = Arc::new(FakeFetcher::default());
        let generator = Arc::new(FakeGenerator {
            prompts: Mutex::new(Vec::new()),
            fail: generation_fails,
        });
        let store = Arc::new(FakeStore {
            calls: AtomicUsize::new(0),
            fail: store_fails,
        });

        let state = AppState {
            generator: generator.clone(),
            fetcher: fetcher.clone(),
            lead_store: store.clone(),
            page_geometry: PageGeometry::default(),
            styles: StyleSheet::default(),
        };

        Harness {
            server: TestServer::new(build_router(state)).unwrap(),
            fetcher,
            generator,
            store,
        }
    }

    fn valid_body() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "website": "https://engines.example",
            "businessDetails": "We design and build programmable analytical engines for research.",
            "targetAudience": "University research departments"
        })
    }

    async fn wait_for_store_calls(store: &FakeStore, expected: usize) {
        for _ in 0..100 {
            if store.calls.load(Ordering::SeqCst) >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_missing_field_returns_400_without_downstream_calls() {
        let h = harness(false, false);
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("targetAudience");

        let response = h.server.post("/api/generate-report").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<Value>();
        assert_eq!(json["message"], "Missing required fields.");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(h.fetcher.urls.lock().unwrap().is_empty());
        assert!(h.generator.prompts.lock().unwrap().is_empty());
        assert_eq!(h.store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_field_returns_400() {
        let h = harness(false, false);
        let mut body = valid_body();
        body["name"] = json!("");

        let response = h.server.post("/api/generate-report").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(h.generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() {
        let h = harness(false, false);
        let response = h.server.post("/api/generate-report").text("not json").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(h.fetcher.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_success_returns_pdf_attachment() {
        let h = harness(false, false);
        let response = h.server.post("/api/generate-report").json(&valid_body()).await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "application/pdf");
        assert_eq!(
            response.header("content-disposition"),
            "attachment; filename=\"OryginAI_Business_Report_for_Ada_Lovelace.pdf\""
        );
        assert!(response.as_bytes().starts_with(b"%PDF-"));

        assert_eq!(
            *h.fetcher.urls.lock().unwrap(),
            vec!["https://engines.example".to_string()]
        );
        let prompts = h.generator.prompts.lock().unwrap().clone();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Analytical engines, hand built in London."));
        assert!(prompts[0].contains("University research departments"));

        wait_for_store_calls(&h.store, 1).await;
        assert_eq!(h.store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_store_failure_does_not_affect_report() {
        let h = harness(false, true);
        let response = h.server.post("/api/generate-report").json(&valid_body()).await;

        response.assert_status_ok();
        assert!(response.as_bytes().starts_with(b"%PDF-"));
        wait_for_store_calls(&h.store, 1).await;
        assert_eq!(h.store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generation_failure_returns_generic_500() {
        let h = harness(true, false);
        let response = h.server.post("/api/generate-report").json(&valid_body()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json::<Value>();
        assert_eq!(json["message"], "An internal server error occurred.");
        assert!(json.get("code").is_none());
    }

    #[tokio::test]
    async fn test_health() {
        let h = harness(false, false);
        let response = h.server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }
}
