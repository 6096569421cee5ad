//! Transient types for one document intake request and its outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::document::VerificationStatus;
use crate::mapping::DocumentMapping;

/// One file as received from the caller. Lives only for the duration of the
/// request; the raw bytes are moved into the store, never persisted here.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

impl UploadedFile {
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// A full intake request: who is uploading, for which business, which files,
/// and the caller-declared filename-to-type mapping.
#[derive(Debug, Clone)]
pub struct DocumentBatch {
    pub business_id: Uuid,
    pub requested_by: Uuid,
    pub files: Vec<UploadedFile>,
    pub mapping: DocumentMapping,
}

/// Summary of one successfully persisted document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedDocument {
    pub id: Uuid,
    pub document_type: String,
    pub file_name: String,
    pub url: String,
    pub status: VerificationStatus,
    pub uploaded_at: DateTime<Utc>,
}

/// Structured result of a batch. Per-file failures land in `errors` as
/// human-readable strings; only precondition failures abort the request as a
/// whole and are reported through `AppError` instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IntakeOutcome {
    pub uploaded: Vec<UploadedDocument>,
    pub errors: Vec<String>,
    pub all_required_uploaded: bool,
    pub required_documents: Vec<String>,
    pub uploaded_document_types: Vec<String>,
}
