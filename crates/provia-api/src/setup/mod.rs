//! Application setup: database, storage, services, routes.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use anyhow::Result;
use axum::Router;
use provia_core::Config;
use provia_db::{
    PostgresBusinessProfileRepository, PostgresDocumentRepository, PostgresProviderRepository,
};
use provia_services::DocumentIntakeService;
use std::sync::Arc;

use crate::state::AppState;

/// Wire up the application: connect the database, initialize storage, build
/// repositories and services, and assemble the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let pool = database::setup_database(&config).await?;
    let storage = storage::setup_storage(&config).await?;

    let documents = PostgresDocumentRepository::new(pool.clone());
    let businesses = PostgresBusinessProfileRepository::new(pool.clone());
    let providers = PostgresProviderRepository::new(pool.clone());

    let intake = DocumentIntakeService::new(
        storage.clone(),
        Arc::new(documents.clone()),
        Arc::new(businesses.clone()),
        Arc::new(providers.clone()),
    );

    let state = Arc::new(AppState {
        config,
        pool,
        storage,
        intake,
        documents,
        businesses,
        providers,
    });

    let router = routes::build_router(state.clone());

    Ok((state, router))
}
