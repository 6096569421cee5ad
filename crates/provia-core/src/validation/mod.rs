//! Validation modules

pub mod filename;

pub use filename::{
    file_extension, normalize_filename, sanitize_filename, validate_document_size,
    MAX_FILENAME_LENGTH,
};
