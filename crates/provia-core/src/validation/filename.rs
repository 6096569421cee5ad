//! Filename handling for document intake.
//!
//! Two distinct transforms live here and must not be conflated:
//! `normalize_filename` produces a throwaway form used only for fuzzy
//! comparison against mapping keys, while `sanitize_filename` produces the
//! form that is actually persisted on the document record.

use crate::constants::MAX_DOCUMENT_SIZE_BYTES;
use crate::AppError;

pub const MAX_FILENAME_LENGTH: usize = 255;

/// Canonicalize a filename for equality comparison.
///
/// Every character outside alphanumerics, whitespace, `.` and `-` becomes a
/// space, runs of whitespace collapse to a single space, and the result is
/// trimmed. Pure and idempotent; never used for persisted values.
pub fn normalize_filename(filename: &str) -> String {
    let replaced: String = filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '.' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize filename to prevent path traversal and invalid characters.
/// Returns an error if the filename contains path traversal attempts.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(AppError::InvalidInput(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() || sanitized.len() < 3 {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

/// Extension of the original filename, lowercased. Files without a usable
/// extension fall back to `bin` so storage keys stay well-formed.
pub fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
        _ => "bin".to_string(),
    }
}

/// Validate a single document against the per-file size ceiling.
///
/// The error message carries the file's size and the ceiling, both in MB,
/// because it is surfaced verbatim in the batch error list.
pub fn validate_document_size(file_name: &str, file_size: usize) -> Result<(), AppError> {
    if file_size > MAX_DOCUMENT_SIZE_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "{}: file is {:.2} MB, exceeds the maximum allowed size of {} MB",
            file_name,
            file_size as f64 / 1024.0 / 1024.0,
            MAX_DOCUMENT_SIZE_BYTES / 1024 / 1024
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_replaces_special_characters_with_spaces() {
        assert_eq!(normalize_filename("my_license(1).pdf"), "my license 1 .pdf");
        assert_eq!(normalize_filename("proof@of#address"), "proof of address");
    }

    #[test]
    fn normalize_collapses_and_trims_whitespace() {
        assert_eq!(normalize_filename("  a   b  "), "a b");
        assert_eq!(normalize_filename("a\t\nb"), "a b");
    }

    #[test]
    fn normalize_keeps_dots_and_dashes() {
        assert_eq!(normalize_filename("drivers-license.pdf"), "drivers-license.pdf");
    }

    #[test]
    fn normalize_is_idempotent() {
        for name in [
            "my_license(1).pdf",
            "  a   b  ",
            "drivers-license.pdf",
            "çà&é.png",
            "",
        ] {
            let once = normalize_filename(name);
            assert_eq!(normalize_filename(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn sanitize_filename_rejects_path_traversal() {
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("foo/../bar").is_err());
        assert!(sanitize_filename("....").is_err());
    }

    #[test]
    fn sanitize_filename_accepts_valid_names() {
        assert_eq!(sanitize_filename("license.pdf").unwrap(), "license.pdf");
        assert_eq!(sanitize_filename("my-file_1.jpg").unwrap(), "my-file_1.jpg");
    }

    #[test]
    fn file_extension_lowercases_and_falls_back() {
        assert_eq!(file_extension("scan.PDF"), "pdf");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("noextension"), "bin");
        assert_eq!(file_extension(".hidden"), "bin");
    }

    #[test]
    fn document_size_ceiling_is_enforced_with_mb_message() {
        let err = validate_document_size("big.pdf", 6 * 1024 * 1024).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("6.00 MB"));
        assert!(msg.contains("5 MB"));

        assert!(validate_document_size("ok.pdf", 5 * 1024 * 1024).is_ok());
    }
}
