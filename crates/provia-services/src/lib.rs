//! Provia Services Library
//!
//! Domain services that orchestrate storage and database operations. The
//! intake service drives the per-file upload pipeline for business
//! documents.

pub mod intake;

pub use intake::DocumentIntakeService;
