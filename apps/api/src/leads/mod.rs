//! Lead persistence — best-effort storage of the prospect's form submission.
//!
//! Persistence is a side channel: the report pipeline dispatches it with
//! [`spawn_persist_lead`] and never waits on or reacts to the outcome.

pub mod firestore;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub use firestore::{FirebaseConfig, FirestoreLeadStore};

/// One captured lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub website: String,
    pub business_details: String,
    pub target_audience: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Store response did not contain a document name")]
    MissingDocumentName,
}

/// Append-only lead store.
///
/// Carried in `AppState` as `Arc<dyn LeadStore>`.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Appends a record and returns the id the store assigned to it.
    async fn append(&self, record: &LeadRecord) -> Result<String, StoreError>;
}

/// Dispatches the append on a detached task. Failures are logged and dropped.
pub fn spawn_persist_lead(store: Arc<dyn LeadStore>, record: LeadRecord) -> JoinHandle<()> {
    tokio::spawn(async move {
        match store.append(&record).await {
            Ok(id) => info!("Lead saved with ID: {id}"),
            Err(e) => error!("Error saving lead: {e}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LeadStore for FailingStore {
        async fn append(&self, _record: &LeadRecord) -> Result<String, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    fn record() -> LeadRecord {
        LeadRecord {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            website: "https://example.com".to_string(),
            business_details: "Bespoke analytical engines".to_string(),
            target_audience: "Victorian mathematicians".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_failed_append_is_swallowed() {
        let store = Arc::new(FailingStore {
            calls: AtomicUsize::new(0),
        });
        let handle = spawn_persist_lead(store.clone(), record());
        assert!(handle.await.is_ok(), "task must not panic on store failure");
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["businessDetails"], "Bespoke analytical engines");
        assert_eq!(json["targetAudience"], "Victorian mathematicians");
        assert!(json.get("createdAt").is_some());
    }
}
