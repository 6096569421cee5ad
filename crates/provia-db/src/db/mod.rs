//! Database repositories for data access layer
//!
//! This module contains all repository implementations for database operations.
//! Each repository is responsible for a specific domain entity and provides
//! CRUD operations and specialized queries.

pub mod business;
pub mod documents;
pub mod providers;

pub use business::{BusinessProfileRepositoryTrait, PostgresBusinessProfileRepository};
pub use documents::{DocumentRepositoryTrait, PostgresDocumentRepository};
pub use providers::{PostgresProviderRepository, ProviderRepositoryTrait};
