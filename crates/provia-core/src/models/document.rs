use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Review lifecycle of a persisted document.
///
/// The intake pipeline only ever writes `Pending`; later transitions belong
/// to the external review process and never happen through this codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    UnderReview,
    Rejected,
}

impl VerificationStatus {
    /// Whether a document in this status counts toward the required set.
    pub fn counts_toward_requirements(&self) -> bool {
        !matches!(self, VerificationStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::UnderReview => "under_review",
            VerificationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for VerificationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VerificationStatus::Pending),
            "verified" => Ok(VerificationStatus::Verified),
            "under_review" => Ok(VerificationStatus::UnderReview),
            "rejected" => Ok(VerificationStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid verification status: {}", s)),
        }
    }
}

impl Display for VerificationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A persisted business document row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub business_id: Uuid,
    pub document_type: String,
    pub file_name: String,
    pub storage_key: String,
    pub url: String,
    pub file_size: i64,
    pub status: VerificationStatus,
    pub uploaded_at: DateTime<Utc>,
}

/// Fields for inserting a new document row; id and timestamp are assigned by
/// the database.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub business_id: Uuid,
    pub document_type: String,
    pub file_name: String,
    pub storage_key: String,
    pub url: String,
    pub file_size: i64,
    pub status: VerificationStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub document_type: String,
    pub file_name: String,
    pub url: String,
    pub file_size: i64,
    pub status: VerificationStatus,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        DocumentResponse {
            id: doc.id,
            document_type: doc.document_type,
            file_name: doc.file_name,
            url: doc.url,
            file_size: doc.file_size,
            status: doc.status,
            uploaded_at: doc.uploaded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            VerificationStatus::Pending,
            VerificationStatus::Verified,
            VerificationStatus::UnderReview,
            VerificationStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<VerificationStatus>().unwrap(), status);
        }
        assert!("bogus".parse::<VerificationStatus>().is_err());
    }

    #[test]
    fn only_rejected_is_excluded_from_requirements() {
        assert!(VerificationStatus::Pending.counts_toward_requirements());
        assert!(VerificationStatus::Verified.counts_toward_requirements());
        assert!(VerificationStatus::UnderReview.counts_toward_requirements());
        assert!(!VerificationStatus::Rejected.counts_toward_requirements());
    }

    #[test]
    fn test_document_response_from_document() {
        let doc_id = Uuid::new_v4();
        let business_id = Uuid::new_v4();
        let uploaded_at = Utc::now();

        let document = Document {
            id: doc_id,
            business_id,
            document_type: "drivers_license".to_string(),
            file_name: "license.pdf".to_string(),
            storage_key: format!("provider-documents/{}/drivers_license_1.pdf", business_id),
            url: "http://localhost:3000/files/provider-documents/x/drivers_license_1.pdf"
                .to_string(),
            file_size: 204800,
            status: VerificationStatus::Pending,
            uploaded_at,
        };

        let response = DocumentResponse::from(document);

        assert_eq!(response.id, doc_id);
        assert_eq!(response.document_type, "drivers_license");
        assert_eq!(response.file_name, "license.pdf");
        assert_eq!(response.file_size, 204800);
        assert_eq!(response.status, VerificationStatus::Pending);
        assert_eq!(response.uploaded_at, uploaded_at);
    }
}
