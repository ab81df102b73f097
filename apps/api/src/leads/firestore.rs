//! Firestore REST implementation of [`LeadStore`].
//!
//! Documents are appended to the `leads` collection with
//! `POST /v1/projects/{projectId}/databases/(default)/documents/leads?key={apiKey}`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::leads::{LeadRecord, LeadStore, StoreError};

const FIRESTORE_API_BASE: &str = "https://firestore.googleapis.com/v1";
const LEADS_COLLECTION: &str = "leads";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// The subset of a Firebase web-app config the store needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub project_id: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    name: Option<String>,
}

#[derive(Clone)]
pub struct FirestoreLeadStore {
    client: Client,
    config: FirebaseConfig,
}

impl FirestoreLeadStore {
    pub fn new(config: FirebaseConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            config,
        })
    }

    fn collection_url(&self) -> String {
        format!(
            "{FIRESTORE_API_BASE}/projects/{}/databases/(default)/documents/{LEADS_COLLECTION}",
            self.config.project_id
        )
    }
}

#[async_trait]
impl LeadStore for FirestoreLeadStore {
    async fn append(&self, record: &LeadRecord) -> Result<String, StoreError> {
        let response = self
            .client
            .post(self.collection_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&to_document(record))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let created: CreatedDocument = response.json().await?;
        created
            .name
            .as_deref()
            .and_then(document_id)
            .map(str::to_string)
            .ok_or(StoreError::MissingDocumentName)
    }
}

/// Encodes a record as a Firestore document with typed field values.
fn to_document(record: &LeadRecord) -> Value {
    json!({
        "fields": {
            "name": { "stringValue": record.name },
            "email": { "stringValue": record.email },
            "website": { "stringValue": record.website },
            "businessDetails": { "stringValue": record.business_details },
            "targetAudience": { "stringValue": record.target_audience },
            "createdAt": {
                "timestampValue": record.created_at.to_rfc3339_opts(SecondsFormat::Micros, true)
            },
        }
    })
}

/// Last path segment of a Firestore document name.
fn document_id(name: &str) -> Option<&str> {
    name.rsplit('/').next().filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record() -> LeadRecord {
        LeadRecord {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            website: "https://example.com".to_string(),
            business_details: "Bespoke analytical engines".to_string(),
            target_audience: "Mathematicians".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_document_fields_are_typed() {
        let doc = to_document(&record());
        assert_eq!(doc["fields"]["name"]["stringValue"], "Ada");
        assert_eq!(
            doc["fields"]["businessDetails"]["stringValue"],
            "Bespoke analytical engines"
        );
        assert_eq!(
            doc["fields"]["createdAt"]["timestampValue"],
            "2024-05-01T12:30:00.000000Z"
        );
    }

    #[test]
    fn test_document_id_from_name() {
        let name = "projects/p/databases/(default)/documents/leads/AbC123";
        assert_eq!(document_id(name), Some("AbC123"));
        assert_eq!(document_id("projects/p/documents/leads/"), None);
    }

    #[test]
    fn test_collection_url() {
        let store = FirestoreLeadStore::new(FirebaseConfig {
            project_id: "orygin-leads".to_string(),
            api_key: "k".to_string(),
        })
        .unwrap();
        assert_eq!(
            store.collection_url(),
            "https://firestore.googleapis.com/v1/projects/orygin-leads/databases/(default)/documents/leads"
        );
    }

    #[test]
    fn test_firebase_web_config_parses() {
        let raw = r#"{
            "apiKey": "AIza-test",
            "authDomain": "orygin-leads.firebaseapp.com",
            "projectId": "orygin-leads",
            "storageBucket": "orygin-leads.appspot.com"
        }"#;
        let config: FirebaseConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.project_id, "orygin-leads");
        assert_eq!(config.api_key, "AIza-test");
    }
}
