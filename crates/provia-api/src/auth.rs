//! Provider identity extraction.
//!
//! Token issuance and verification live at the edge gateway; by the time a
//! request reaches this service the verified provider id arrives in the
//! `x-provider-user-id` header. Requests without it are rejected.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use provia_core::AppError;
use uuid::Uuid;

use crate::error::HttpAppError;

pub const PROVIDER_USER_HEADER: &str = "x-provider-user-id";

/// The authenticated provider making the request.
#[derive(Debug, Clone, Copy)]
pub struct ProviderContext {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for ProviderContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(PROVIDER_USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Missing provider identity header".to_string(),
                ))
            })?;

        let user_id = Uuid::parse_str(raw).map_err(|_| {
            HttpAppError(AppError::Unauthorized(
                "Invalid provider identity header".to_string(),
            ))
        })?;

        Ok(ProviderContext { user_id })
    }
}
