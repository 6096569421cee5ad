//! Shared constants for the onboarding document pipeline.

/// Maximum size of a single business document accepted by the intake pipeline.
///
/// Enforced per file inside the orchestrator, independently of the HTTP
/// request body ceiling below. A request that clears the body ceiling can
/// still carry an individual file that fails this check.
pub const MAX_DOCUMENT_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// Maximum size of a whole intake request body, enforced at the HTTP boundary.
pub const MAX_REQUEST_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Key prefix for all business document objects in the store.
pub const DOCUMENT_STORAGE_PREFIX: &str = "provider-documents";

/// Setup-progress value a business reaches once its first document is persisted.
pub const SETUP_STEP_DOCUMENTS_UPLOADED: i32 =
    crate::models::OnboardingStep::Documents.step_number();

/// Provider role that may upload documents for a business.
pub const ROLE_OWNER: &str = "owner";
