//! Content fetcher — downloads a prospect's website and extracts its visible copy.
//!
//! Never fails: any network, status or rewriting problem degrades to
//! [`FALLBACK_TEXT`] so the report can still be generated from the form details.

pub mod extract;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};

pub use extract::extract_text;

/// Returned whenever the website cannot be fetched or read.
pub const FALLBACK_TEXT: &str = "Could not access the website. Relying on user-provided details.";

/// Maximum number of characters of website text handed to the prompt.
pub const MAX_CHARS: usize = 4000;

const USER_AGENT: &str = "Mozilla/5.0";
const FETCH_TIMEOUT_SECS: u64 = 15;

/// Source of website text for the prompt.
///
/// Carried in `AppState` as `Arc<dyn ContentFetcher>`.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> String;
}

/// Fetches over HTTP and extracts text with [`extract_text`].
#[derive(Clone)]
pub struct HttpContentFetcher {
    client: Client,
}

impl HttpContentFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()?,
        })
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch(&self, url: &str) -> String {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("Error scraping {url}: {e}");
                return FALLBACK_TEXT.to_string();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Failed to fetch {url}, status: {status}");
            return FALLBACK_TEXT.to_string();
        }

        let html = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Error reading body of {url}: {e}");
                return FALLBACK_TEXT.to_string();
            }
        };

        match extract_text(&html, MAX_CHARS) {
            Ok(text) => {
                debug!("Extracted {} chars from {url}", text.chars().count());
                text
            }
            Err(e) => {
                error!("Error extracting text from {url}: {e}");
                FALLBACK_TEXT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_falls_back() {
        let fetcher = HttpContentFetcher::new().unwrap();
        assert_eq!(fetcher.fetch("not a url").await, FALLBACK_TEXT);
    }
}
