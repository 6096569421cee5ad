//! Storage backend initialization

use anyhow::{Context, Result};
use provia_core::Config;
use provia_storage::Storage;
use std::sync::Arc;

/// Create the configured storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = provia_storage::create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(backend = %storage.backend_type(), "Storage initialized");

    Ok(storage)
}
