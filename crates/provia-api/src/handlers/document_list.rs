use crate::auth::ProviderContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use provia_core::models::DocumentResponse;
use provia_core::AppError;
use provia_db::{DocumentRepositoryTrait, ProviderRepositoryTrait};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v0/businesses/{business_id}/documents",
    tag = "documents",
    params(
        ("business_id" = Uuid, Path, description = "Business the documents belong to")
    ),
    responses(
        (status = 200, description = "Documents for the business, newest first", body = [DocumentResponse]),
        (status = 401, description = "Missing provider identity", body = ErrorResponse),
        (status = 403, description = "Requester does not own the business", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    provider: ProviderContext,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Vec<DocumentResponse>>, HttpAppError> {
    if !state
        .providers
        .is_owner(provider.user_id, business_id)
        .await
        .map_err(HttpAppError::from)?
    {
        return Err(HttpAppError(AppError::Forbidden(
            "Not an owner of this business".to_string(),
        )));
    }

    let documents = state
        .documents
        .list_for_business(business_id)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(
        documents.into_iter().map(DocumentResponse::from).collect(),
    ))
}
