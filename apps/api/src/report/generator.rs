//! Report Generation — orchestrates the full report pipeline.
//!
//! Flow: dispatch lead persistence (side channel) → fetch website text →
//!       build prompt → LLM generate → layout + PDF encode → return bytes.
//!
//! Persistence and scraping never fail the request. Generation and encoding do.

use chrono::Utc;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::layout::layout_document;
use crate::leads::spawn_persist_lead;
use crate::render::{encode_pdf, PdfMetadata};
use crate::report::models::ReportDetails;
use crate::report::prompts::{REPORT_AUTHOR, REPORT_FILE_PREFIX, REPORT_PROMPT_TEMPLATE};
use crate::state::AppState;

/// A rendered report ready to be sent to the browser.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub filename: String,
    pub pdf: Vec<u8>,
    pub page_count: usize,
}

/// Runs the report pipeline for one validated request.
#[instrument(skip_all, fields(report_id = %uuid::Uuid::new_v4()))]
pub async fn generate_report(
    state: &AppState,
    details: ReportDetails,
) -> Result<GeneratedReport, AppError> {
    // Step 1: best-effort persistence, not awaited
    spawn_persist_lead(
        state.lead_store.clone(),
        details.to_lead_record(Utc::now()),
    );

    // Step 2: website text (falls back to a fixed sentence on any failure)
    let scraped_text = state.fetcher.fetch(&details.website).await;

    // Step 3: generate
    let prompt = build_prompt(&details, &scraped_text);
    let content = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Report generation failed: {e}")))?;
    info!("Report text generated: {} chars", content.len());

    // Step 4: layout + encode. CPU-bound, so it runs on the blocking pool.
    let geometry = state.page_geometry;
    let styles = state.styles.clone();
    let metadata = PdfMetadata {
        title: format!("Comprehensive Strategic Growth Blueprint for {}", details.name),
        author: REPORT_AUTHOR.to_string(),
    };

    let (pdf, page_count) = tokio::task::spawn_blocking(move || {
        let layout = layout_document(&content, geometry, &styles);
        info!("Laid out {} lines", layout.instruction_count());
        encode_pdf(&layout, &metadata).map(|pdf| (pdf, layout.pages.len()))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in report rendering: {e}")))?
    .map_err(|e| AppError::Render(e.to_string()))?;

    info!("Report rendered: {page_count} pages, {} bytes", pdf.len());

    Ok(GeneratedReport {
        filename: report_filename(&details.name),
        pdf,
        page_count,
    })
}

/// Fills the report prompt template in a single pass over the template, so
/// placeholder-looking text inside any substituted value stays literal.
pub fn build_prompt(details: &ReportDetails, scraped_text: &str) -> String {
    let values: [(&str, &str); 5] = [
        ("{name}", &details.name),
        ("{website}", &details.website),
        ("{business_details}", &details.business_details),
        ("{target_audience}", &details.target_audience),
        ("{scraped_text}", scraped_text),
    ];

    let mut out = String::with_capacity(REPORT_PROMPT_TEMPLATE.len() + scraped_text.len());
    let mut rest = REPORT_PROMPT_TEMPLATE;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match values.iter().find(|(key, _)| tail.starts_with(*key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// `OryginAI_Business_Report_for_<name>.pdf`, with whitespace in the name turned
/// into `_` and anything unsafe inside a quoted header parameter dropped.
pub fn report_filename(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_graphic() && *c != '"' && *c != '\\')
        .collect();
    format!("{REPORT_FILE_PREFIX}{safe}.pdf")
}
