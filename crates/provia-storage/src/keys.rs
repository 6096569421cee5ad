//! Shared key generation for storage backends.
//!
//! Key format: `provider-documents/{business_id}/{document_type}_{timestamp}.{extension}`.

use provia_core::constants::DOCUMENT_STORAGE_PREFIX;
use uuid::Uuid;

/// Generate the storage key for a business document.
///
/// The nanosecond timestamp is captured per file by the caller (not shared
/// across a batch), which keeps keys unique even when several files in one
/// batch resolve to the same document type. All backends must use this
/// format for consistency.
pub fn document_storage_key(
    business_id: Uuid,
    document_type: &str,
    timestamp_nanos: i64,
    extension: &str,
) -> String {
    format!(
        "{}/{}/{}_{}.{}",
        DOCUMENT_STORAGE_PREFIX, business_id, document_type, timestamp_nanos, extension
    )
}
