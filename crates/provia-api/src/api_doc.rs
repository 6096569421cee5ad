//! OpenAPI documentation for the onboarding document endpoints.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use provia_core::models::{DocumentResponse, IntakeOutcome, UploadedDocument, VerificationStatus};
use provia_core::RequirementStatus;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Provia API",
        description = "Provider onboarding document intake service"
    ),
    paths(
        crate::handlers::document_upload::upload_documents,
        crate::handlers::document_list::list_documents,
        crate::handlers::document_requirements::document_requirements,
    ),
    components(schemas(
        IntakeOutcome,
        UploadedDocument,
        DocumentResponse,
        VerificationStatus,
        RequirementStatus,
        ErrorResponse,
    )),
    tags(
        (name = "documents", description = "Business document intake and readiness")
    )
)]
pub struct ApiDoc;
