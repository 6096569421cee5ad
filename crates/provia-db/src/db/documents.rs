use chrono::{DateTime, Utc};
use provia_core::models::{Document, NewDocument, VerificationStatus};
use provia_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Raw row shape of the business_documents table. Status is stored as text
/// and parsed into [`VerificationStatus`] when mapping to the domain model.
#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    business_id: Uuid,
    document_type: String,
    file_name: String,
    storage_key: String,
    url: String,
    file_size: i64,
    status: String,
    uploaded_at: DateTime<Utc>,
}

impl DocumentRow {
    fn into_document(self) -> Result<Document, AppError> {
        let status: VerificationStatus = self
            .status
            .parse()
            .map_err(|e| AppError::Internal(format!("Corrupt document row {}: {}", self.id, e)))?;
        Ok(Document {
            id: self.id,
            business_id: self.business_id,
            document_type: self.document_type,
            file_name: self.file_name,
            storage_key: self.storage_key,
            url: self.url,
            file_size: self.file_size,
            status,
            uploaded_at: self.uploaded_at,
        })
    }
}

/// Trait for document repository operations
/// This abstracts the database implementation (PostgreSQL)
#[async_trait::async_trait]
pub trait DocumentRepositoryTrait: Send + Sync {
    /// Insert one document row and return the persisted document.
    async fn insert(&self, document: NewDocument) -> Result<Document, AppError>;

    /// All documents for a business, newest first.
    async fn list_for_business(&self, business_id: Uuid) -> Result<Vec<Document>, AppError>;

    /// Number of documents persisted for a business.
    async fn count_for_business(&self, business_id: Uuid) -> Result<i64, AppError>;
}

/// PostgreSQL document repository
#[derive(Clone)]
pub struct PostgresDocumentRepository {
    pool: PgPool,
}

impl PostgresDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DocumentRepositoryTrait for PostgresDocumentRepository {
    async fn insert(&self, document: NewDocument) -> Result<Document, AppError> {
        let row: DocumentRow = sqlx::query_as::<Postgres, DocumentRow>(
            r#"
            INSERT INTO business_documents
                (business_id, document_type, file_name, storage_key, url, file_size, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, business_id, document_type, file_name, storage_key, url,
                      file_size, status, uploaded_at
            "#,
        )
        .bind(document.business_id)
        .bind(&document.document_type)
        .bind(&document.file_name)
        .bind(&document.storage_key)
        .bind(&document.url)
        .bind(document.file_size)
        .bind(document.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.into_document()
    }

    async fn list_for_business(&self, business_id: Uuid) -> Result<Vec<Document>, AppError> {
        let rows: Vec<DocumentRow> = sqlx::query_as::<Postgres, DocumentRow>(
            r#"
            SELECT id, business_id, document_type, file_name, storage_key, url,
                   file_size, status, uploaded_at
            FROM business_documents
            WHERE business_id = $1
            ORDER BY uploaded_at DESC
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DocumentRow::into_document).collect()
    }

    async fn count_for_business(&self, business_id: Uuid) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM business_documents WHERE business_id = $1")
                .bind(business_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }
}
