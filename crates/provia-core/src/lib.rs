//! Provia Core Library
//!
//! This crate provides core domain models, error types, configuration, and validation
//! that are shared across all Provia components.

pub mod config;
pub mod constants;
pub mod error;
pub mod mapping;
pub mod models;
pub mod requirements;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use mapping::{resolve_document_type, DocumentMapping};
pub use requirements::{evaluate_requirements, required_documents, RequirementStatus};
pub use storage_types::StorageBackend;
