use crate::auth::ProviderContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use provia_core::{evaluate_requirements, AppError, RequirementStatus};
use provia_db::{
    BusinessProfileRepositoryTrait, DocumentRepositoryTrait, ProviderRepositoryTrait,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v0/businesses/{business_id}/documents/requirements",
    tag = "documents",
    params(
        ("business_id" = Uuid, Path, description = "Business to evaluate")
    ),
    responses(
        (status = 200, description = "Required set, qualifying uploads, and readiness flag", body = RequirementStatus),
        (status = 401, description = "Missing provider identity", body = ErrorResponse),
        (status = 403, description = "Requester does not own the business", body = ErrorResponse),
        (status = 404, description = "Business not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn document_requirements(
    State(state): State<Arc<AppState>>,
    provider: ProviderContext,
    Path(business_id): Path<Uuid>,
) -> Result<Json<RequirementStatus>, HttpAppError> {
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

    let profile = state
        .businesses
        .get_profile(business_id)
        .await
        .map_err(HttpAppError::from)?
        .ok_or_else(|| {
            HttpAppError(AppError::NotFound(format!(
                "Business profile {} not found",
                business_id
            )))
        })?;

    let documents = state
        .documents
        .list_for_business(business_id)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(evaluate_requirements(&profile.legal_form, &documents)))
}
