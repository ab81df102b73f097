//! Request model and validation for report generation.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::leads::LeadRecord;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields.";

/// Raw request body. Every field is optional here so that absence is reported
/// as a validation error instead of a deserialisation failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub business_details: Option<String>,
    pub target_audience: Option<String>,
}

/// A validated request: all five fields present and non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDetails {
    pub name: String,
    pub email: String,
    pub website: String,
    pub business_details: String,
    pub target_audience: String,
}

impl GenerateReportRequest {
    pub fn validate(self) -> Result<ReportDetails, AppError> {
        Ok(ReportDetails {
            name: required(self.name)?,
            email: required(self.email)?,
            website: required(self.website)?,
            business_details: required(self.business_details)?,
            target_audience: required(self.target_audience)?,
        })
    }
}

fn required(value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
    }
}

impl ReportDetails {
    pub fn to_lead_record(&self, created_at: DateTime<Utc>) -> LeadRecord {
        LeadRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            website: self.website.clone(),
            business_details: self.business_details.clone(),
            target_audience: self.target_audience.clone(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> GenerateReportRequest {
        GenerateReportRequest {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            website: Some("https://example.com".to_string()),
            business_details: Some("We build analytical engines.".to_string()),
            target_audience: Some("Mathematicians".to_string()),
        }
    }

    #[test]
    fn test_complete_request_validates() {
        let details = full_request().validate().unwrap();
        assert_eq!(details.name, "Ada");
        assert_eq!(details.target_audience, "Mathematicians");
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        let clears: [fn(&mut GenerateReportRequest); 5] = [
            |r| r.name = None,
            |r| r.email = None,
            |r| r.website = None,
            |r| r.business_details = None,
            |r| r.target_audience = None,
        ];
        for clear in clears {
            let mut request = full_request();
            clear(&mut request);
            assert!(matches!(
                request.validate(),
                Err(AppError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE
            ));
        }
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut request = full_request();
        request.email = Some("   ".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_body_deserializes_camel_case() {
        let request: GenerateReportRequest = serde_json::from_str(
            r#"{"name":"Ada","businessDetails":"Engines","targetAudience":"Everyone"}"#,
        )
        .unwrap();
        assert_eq!(request.business_details.as_deref(), Some("Engines"));
        assert!(request.email.is_none());
    }

    #[test]
    fn test_lead_record_copies_fields() {
        let details = full_request().validate().unwrap();
        let now = Utc::now();
        let record = details.to_lead_record(now);
        assert_eq!(record.website, "https://example.com");
        assert_eq!(record.created_at, now);
    }
}
