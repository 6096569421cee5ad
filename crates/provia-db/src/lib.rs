//! Provia Database Library
//!
//! Repository implementations for the onboarding data access layer. Each
//! repository owns one domain entity and exposes a trait so services can be
//! tested against in-memory fakes.

pub mod db;

pub use db::{
    BusinessProfileRepositoryTrait, DocumentRepositoryTrait, PostgresBusinessProfileRepository,
    PostgresDocumentRepository, PostgresProviderRepository, ProviderRepositoryTrait,
};
