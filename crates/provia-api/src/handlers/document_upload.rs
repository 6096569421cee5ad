use crate::auth::ProviderContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_document_batch;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use provia_core::models::{DocumentBatch, IntakeOutcome};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/v0/businesses/{business_id}/documents",
    tag = "documents",
    params(
        ("business_id" = Uuid, Path, description = "Business the documents belong to")
    ),
    responses(
        (status = 200, description = "Batch processed; per-file failures are listed in `errors`", body = IntakeOutcome),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing provider identity", body = ErrorResponse),
        (status = 403, description = "Requester does not own the business", body = ErrorResponse),
        (status = 404, description = "Business not found", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_documents(
    State(state): State<Arc<AppState>>,
    provider: ProviderContext,
    Path(business_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<IntakeOutcome>, HttpAppError> {
    let (files, mapping) = extract_document_batch(multipart)
        .await
        .map_err(HttpAppError::from)?;

    tracing::debug!(
        business_id = %business_id,
        user_id = %provider.user_id,
        file_count = files.len(),
        "Received document intake request"
    );

    let batch = DocumentBatch {
        business_id,
        requested_by: provider.user_id,
        files,
        mapping,
    };

    let outcome = state
        .intake
        .process_batch(batch)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(outcome))
}
