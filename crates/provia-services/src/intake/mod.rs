//! Document intake pipeline
//!
//! Per file: validate → resolve type → store blob → persist row, with a
//! compensating blob delete when the row write fails. A single file's
//! failure never aborts the batch.

pub mod service;

pub use service::DocumentIntakeService;
