//! Configuration module
//!
//! Env-based configuration for the API binary and services: server, database
//! pool, storage backend selection, and intake limits. `.env` files are
//! honored for local development.

use std::env;
use std::str::FromStr;

use crate::constants::{MAX_DOCUMENT_SIZE_BYTES, MAX_REQUEST_SIZE_BYTES};
use crate::storage_types::StorageBackend;
use crate::AppError;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    environment: String,
    database_url: String,
    db_max_connections: u32,
    db_timeout_seconds: u64,
    // Storage configuration
    storage_backend: Option<StorageBackend>,
    s3_bucket: Option<String>,
    s3_region: Option<String>,
    s3_endpoint: Option<String>,
    local_storage_path: Option<String>,
    local_storage_base_url: Option<String>,
    // Intake limits
    max_document_size_bytes: usize,
    max_request_size_bytes: usize,
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env_opt(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("Invalid value for {}: {}", key, raw))),
        None => Ok(default),
    }
}

impl Config {
    /// Load configuration from the environment (and `.env` when present).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let database_url = env_opt("DATABASE_URL")
            .ok_or_else(|| AppError::InvalidInput("DATABASE_URL is not set".to_string()))?;

        let storage_backend = match env_opt("STORAGE_BACKEND") {
            Some(raw) => Some(StorageBackend::from_str(&raw).map_err(|e| {
                AppError::InvalidInput(format!("Invalid STORAGE_BACKEND: {}", e))
            })?),
            None => None,
        };

        let config = Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            environment: env_opt("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", DEFAULT_CONNECTION_TIMEOUT_SECS)?,
            storage_backend,
            s3_bucket: env_opt("S3_BUCKET"),
            s3_region: env_opt("S3_REGION").or_else(|| env_opt("AWS_REGION")),
            s3_endpoint: env_opt("S3_ENDPOINT"),
            local_storage_path: env_opt("LOCAL_STORAGE_PATH"),
            local_storage_base_url: env_opt("LOCAL_STORAGE_BASE_URL"),
            max_document_size_bytes: env_parse(
                "MAX_DOCUMENT_SIZE_BYTES",
                MAX_DOCUMENT_SIZE_BYTES,
            )?,
            max_request_size_bytes: env_parse("MAX_REQUEST_SIZE_BYTES", MAX_REQUEST_SIZE_BYTES)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        match self.storage_backend {
            Some(StorageBackend::Local) => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    return Err(AppError::InvalidInput(
                        "Local storage requires LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL"
                            .to_string(),
                    ));
                }
            }
            Some(StorageBackend::S3) => {
                if self.s3_bucket.is_none() || self.s3_region.is_none() {
                    return Err(AppError::InvalidInput(
                        "S3 storage requires S3_BUCKET and S3_REGION (or AWS_REGION)".to_string(),
                    ));
                }
            }
            None => {}
        }
        if self.max_document_size_bytes > self.max_request_size_bytes {
            return Err(AppError::InvalidInput(
                "MAX_DOCUMENT_SIZE_BYTES cannot exceed MAX_REQUEST_SIZE_BYTES".to_string(),
            ));
        }
        Ok(())
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn storage_backend(&self) -> Option<StorageBackend> {
        self.storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.s3_endpoint.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.local_storage_base_url.as_deref()
    }

    pub fn max_document_size_bytes(&self) -> usize {
        self.max_document_size_bytes
    }

    pub fn max_request_size_bytes(&self) -> usize {
        self.max_request_size_bytes
    }

    /// Test configuration pointing at local storage; never reads the environment.
    pub fn for_tests(database_url: impl Into<String>, storage_path: impl Into<String>) -> Self {
        Config {
            server_port: 0,
            environment: "test".to_string(),
            database_url: database_url.into(),
            db_max_connections: 2,
            db_timeout_seconds: 5,
            storage_backend: Some(StorageBackend::Local),
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            local_storage_path: Some(storage_path.into()),
            local_storage_base_url: Some("http://localhost:3000/files".to_string()),
            max_document_size_bytes: MAX_DOCUMENT_SIZE_BYTES,
            max_request_size_bytes: MAX_REQUEST_SIZE_BYTES,
        }
    }
}
