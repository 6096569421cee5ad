use provia_core::constants::ROLE_OWNER;
use provia_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Trait for provider membership lookups
#[async_trait::async_trait]
pub trait ProviderRepositoryTrait: Send + Sync {
    /// Whether the user is registered as the owner of the business.
    async fn is_owner(&self, user_id: Uuid, business_id: Uuid) -> Result<bool, AppError>;
}

/// PostgreSQL provider repository
#[derive(Clone)]
pub struct PostgresProviderRepository {
    pool: PgPool,
}

impl PostgresProviderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProviderRepositoryTrait for PostgresProviderRepository {
    async fn is_owner(&self, user_id: Uuid, business_id: Uuid) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM providers
                WHERE user_id = $1 AND business_id = $2 AND role = $3
            )
            "#,
        )
        .bind(user_id)
        .bind(business_id)
        .bind(ROLE_OWNER)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }
}
