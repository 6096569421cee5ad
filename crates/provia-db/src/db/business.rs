use chrono::{DateTime, Utc};
use provia_core::models::{BusinessProfile, LegalForm};
use provia_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct BusinessProfileRow {
    id: Uuid,
    business_name: String,
    legal_form: String,
    setup_step: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BusinessProfileRow {
    fn into_profile(self) -> BusinessProfile {
        BusinessProfile {
            id: self.id,
            business_name: self.business_name,
            legal_form: LegalForm::parse_lenient(&self.legal_form),
            setup_step: self.setup_step,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Trait for business profile repository operations
#[async_trait::async_trait]
pub trait BusinessProfileRepositoryTrait: Send + Sync {
    async fn get_profile(&self, business_id: Uuid) -> Result<Option<BusinessProfile>, AppError>;

    /// Raise the setup-progress marker to at least `min_step`.
    ///
    /// Monotonic by construction (GREATEST in SQL), so concurrent duplicate
    /// advances are idempotent and need no transactional coupling with the
    /// document inserts that trigger them.
    async fn advance_setup_step(&self, business_id: Uuid, min_step: i32) -> Result<(), AppError>;
}

/// PostgreSQL business profile repository
#[derive(Clone)]
pub struct PostgresBusinessProfileRepository {
    pool: PgPool,
}

impl PostgresBusinessProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BusinessProfileRepositoryTrait for PostgresBusinessProfileRepository {
    async fn get_profile(&self, business_id: Uuid) -> Result<Option<BusinessProfile>, AppError> {
        let row: Option<BusinessProfileRow> = sqlx::query_as::<Postgres, BusinessProfileRow>(
            r#"
            SELECT id, business_name, legal_form, setup_step, created_at, updated_at
            FROM business_profiles
            WHERE id = $1
            "#,
        )
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BusinessProfileRow::into_profile))
    }

    async fn advance_setup_step(&self, business_id: Uuid, min_step: i32) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE business_profiles
            SET setup_step = GREATEST(setup_step, $2), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(business_id)
        .bind(min_step)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Business profile {} not found",
                business_id
            )));
        }

        tracing::debug!(
            business_id = %business_id,
            min_step,
            "Setup step advanced"
        );

        Ok(())
    }
}
