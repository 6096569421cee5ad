//! API handlers for the onboarding document endpoints.

pub mod document_list;
pub mod document_requirements;
pub mod document_upload;
