//! Application state shared across handlers.

use provia_core::Config;
use provia_db::{
    PostgresBusinessProfileRepository, PostgresDocumentRepository, PostgresProviderRepository,
};
use provia_services::DocumentIntakeService;
use provia_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub storage: Arc<dyn Storage>,
    pub intake: DocumentIntakeService,
    pub documents: PostgresDocumentRepository,
    pub businesses: PostgresBusinessProfileRepository,
    pub providers: PostgresProviderRepository,
}
