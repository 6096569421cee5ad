//! Provia Storage Library
//!
//! This crate provides storage abstraction and implementations for Provia.
//! It includes the Storage trait and implementations for S3 and local filesystem.
//!
//! # Storage key format
//!
//! Business document objects all share one key layout:
//!
//! `provider-documents/{business_id}/{document_type}_{timestamp}.{extension}`
//!
//! Keys must not contain `..` or a leading `/`. Key generation is centralized in the
//! `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::document_storage_key;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use provia_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
