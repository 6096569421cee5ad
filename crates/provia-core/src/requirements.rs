//! Requirement evaluation for a business's document set.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Document, LegalForm};

/// Documents every business must provide, regardless of legal form.
pub const BASE_REQUIRED_DOCUMENTS: [&str; 4] = [
    "drivers_license",
    "proof_of_address",
    "professional_license",
    "professional_certificate",
];

/// Additionally required unless the business is a sole proprietorship.
pub const BUSINESS_LICENSE: &str = "business_license";

/// The required document-type labels for a business with the given legal form.
pub fn required_documents(legal_form: &LegalForm) -> Vec<String> {
    let mut required: Vec<String> = BASE_REQUIRED_DOCUMENTS
        .iter()
        .map(|s| s.to_string())
        .collect();
    if !legal_form.is_sole_proprietorship() {
        required.push(BUSINESS_LICENSE.to_string());
    }
    required
}

/// Readiness of a business's document set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequirementStatus {
    pub required_documents: Vec<String>,
    pub uploaded_document_types: Vec<String>,
    pub all_required_uploaded: bool,
}

/// Evaluate whether the required document set is fully satisfied.
///
/// Only documents whose status still counts (anything but rejected)
/// contribute. All-or-nothing: no partial credit.
pub fn evaluate_requirements(legal_form: &LegalForm, documents: &[Document]) -> RequirementStatus {
    let required = required_documents(legal_form);

    let mut uploaded: Vec<String> = Vec::new();
    for doc in documents {
        if doc.status.counts_toward_requirements() && !uploaded.contains(&doc.document_type) {
            uploaded.push(doc.document_type.clone());
        }
    }

    let satisfied = required.iter().all(|label| uploaded.contains(label));

    RequirementStatus {
        required_documents: required,
        uploaded_document_types: uploaded,
        all_required_uploaded: satisfied,
    }
}
