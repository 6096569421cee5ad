//! Common utilities for document upload handlers

use axum::extract::Multipart;
use provia_core::models::UploadedFile;
use provia_core::{AppError, DocumentMapping};

/// Extract the uploaded files and the filename-to-type mapping from a
/// multipart form.
///
/// Repeated `files` fields carry the documents; an optional `mapping` field
/// carries a JSON object keyed by original filename. A mapping that fails to
/// parse is a precondition failure for the whole request. Unknown fields are
/// ignored.
pub async fn extract_document_batch(
    mut multipart: Multipart,
) -> Result<(Vec<UploadedFile>, DocumentMapping), AppError> {
    let mut files: Vec<UploadedFile> = Vec::new();
    let mut mapping = DocumentMapping::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "files" | "file" => {
                let file_name = field
                    .file_name()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                files.push(UploadedFile {
                    data: data.to_vec(),
                    file_name,
                    content_type,
                });
            }
            "mapping" => {
                let raw = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read mapping field: {}", e))
                })?;
                mapping = serde_json::from_str(&raw).map_err(|e| {
                    AppError::InvalidInput(format!("Malformed document mapping: {}", e))
                })?;
            }
            _ => {}
        }
    }

    Ok((files, mapping))
}
