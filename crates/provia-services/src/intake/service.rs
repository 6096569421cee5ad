//! Batch document intake orchestration.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use provia_core::constants::{MAX_DOCUMENT_SIZE_BYTES, SETUP_STEP_DOCUMENTS_UPLOADED};
use provia_core::models::{
    DocumentBatch, IntakeOutcome, NewDocument, UploadedDocument, UploadedFile, VerificationStatus,
};
use provia_core::validation::{file_extension, sanitize_filename, validate_document_size};
use provia_core::{
    evaluate_requirements, required_documents, resolve_document_type, AppError, DocumentMapping,
    ErrorMetadata, RequirementStatus,
};
use provia_db::{BusinessProfileRepositoryTrait, DocumentRepositoryTrait, ProviderRepositoryTrait};
use provia_storage::{document_storage_key, Storage, StorageError};

/// Orchestrates one intake batch against the object store and the database.
///
/// All collaborators are injected so tests can substitute fakes. Files are
/// processed sequentially and independently: each file's write → URL →
/// insert sequence runs to completion or explicit failure before the next
/// file starts, and a per-file failure only lands in the outcome's error
/// list.
#[derive(Clone)]
pub struct DocumentIntakeService {
    storage: Arc<dyn Storage>,
    documents: Arc<dyn DocumentRepositoryTrait>,
    businesses: Arc<dyn BusinessProfileRepositoryTrait>,
    providers: Arc<dyn ProviderRepositoryTrait>,
}

impl DocumentIntakeService {
    pub fn new(
        storage: Arc<dyn Storage>,
        documents: Arc<dyn DocumentRepositoryTrait>,
        businesses: Arc<dyn BusinessProfileRepositoryTrait>,
        providers: Arc<dyn ProviderRepositoryTrait>,
    ) -> Self {
        Self {
            storage,
            documents,
            businesses,
            providers,
        }
    }

    /// Process a batch of uploaded documents for one business.
    ///
    /// Precondition failures (missing business, empty batch, ownership)
    /// return an `AppError` before any file is touched. Once processing
    /// starts, the call always returns a structured [`IntakeOutcome`]
    /// partitioning successes from per-file error messages.
    pub async fn process_batch(&self, batch: DocumentBatch) -> Result<IntakeOutcome, AppError> {
        let DocumentBatch {
            business_id,
            requested_by,
            files,
            mapping,
        } = batch;

        if business_id.is_nil() {
            return Err(AppError::InvalidInput("Business id is required".to_string()));
        }
        if files.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one file is required".to_string(),
            ));
        }
        if !self.providers.is_owner(requested_by, business_id).await? {
            return Err(AppError::Forbidden(
                "Not an owner of this business".to_string(),
            ));
        }
        let profile = self
            .businesses
            .get_profile(business_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Business profile {} not found", business_id))
            })?;

        // Captured before any insert: the batch's successes must not count as
        // "pre-existing" when deciding whether to advance the setup step.
        let prior_documents = self.documents.count_for_business(business_id).await?;

        tracing::info!(
            business_id = %business_id,
            file_count = files.len(),
            mapping_entries = mapping.len(),
            "Processing document intake batch"
        );

        let mut uploaded: Vec<UploadedDocument> = Vec::new();
        let mut errors: Vec<String> = Vec::new();

        for (index, file) in files.into_iter().enumerate() {
            match self
                .process_file(business_id, file, &mapping, index)
                .await
            {
                Ok(document) => uploaded.push(document),
                Err(message) => errors.push(message),
            }
        }

        if !uploaded.is_empty() && prior_documents == 0 {
            if let Err(e) = self
                .businesses
                .advance_setup_step(business_id, SETUP_STEP_DOCUMENTS_UPLOADED)
                .await
            {
                tracing::warn!(
                    error = %e,
                    business_id = %business_id,
                    "Failed to advance setup step after first document upload"
                );
            }
        }

        let requirements = self
            .evaluate_for_outcome(business_id, &profile.legal_form, &uploaded, &mut errors)
            .await;

        tracing::info!(
            business_id = %business_id,
            uploaded = uploaded.len(),
            failed = errors.len(),
            all_required_uploaded = requirements.all_required_uploaded,
            "Document intake batch finished"
        );

        Ok(IntakeOutcome {
            uploaded,
            errors,
            all_required_uploaded: requirements.all_required_uploaded,
            required_documents: requirements.required_documents,
            uploaded_document_types: requirements.uploaded_document_types,
        })
    }

    /// Drive one file through validate → resolve → store → persist.
    ///
    /// The returned error string is user-facing and lands in the batch error
    /// list; any storage or database detail has already been logged here.
    async fn process_file(
        &self,
        business_id: Uuid,
        file: UploadedFile,
        mapping: &DocumentMapping,
        index: usize,
    ) -> Result<UploadedDocument, String> {
        let file_size = file.size_bytes();
        let UploadedFile {
            data,
            file_name,
            content_type,
        } = file;

        if let Err(e) = validate_document_size(&file_name, file_size) {
            return Err(e.client_message());
        }

        let document_type = resolve_document_type(&file_name, mapping, index);
        let safe_name = sanitize_filename(&file_name)
            .map_err(|e| format!("{}: {}", file_name, e.client_message()))?;

        // Timestamp captured per file, after the previous file fully settled,
        // so two files of the same resolved type never share a key.
        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or_else(|| {
            // Past 2262 the nanosecond form overflows; microseconds keep keys valid.
            Utc::now().timestamp_micros()
        });
        let extension = file_extension(&file_name);
        let storage_key = document_storage_key(business_id, &document_type, timestamp, &extension);

        match self
            .storage
            .upload_with_key(&storage_key, data, &content_type)
            .await
        {
            Ok(()) => {}
            Err(StorageError::PayloadTooLarge(reason)) => {
                tracing::warn!(
                    reason = %reason,
                    file_name = %file_name,
                    key = %storage_key,
                    "Store rejected oversized document"
                );
                return Err(format!(
                    "{}: the store rejected the file: exceeds the maximum allowed size of {} MB",
                    file_name,
                    MAX_DOCUMENT_SIZE_BYTES / 1024 / 1024
                ));
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    file_name = %file_name,
                    key = %storage_key,
                    "Failed to store document"
                );
                return Err(format!("{}: failed to store file", file_name));
            }
        }

        let url = match self.storage.public_url(&storage_key).await {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    key = %storage_key,
                    "Failed to resolve public URL for stored document"
                );
                self.cleanup_blob(&storage_key).await;
                return Err(format!("{}: failed to resolve stored file URL", file_name));
            }
        };

        let new_document = NewDocument {
            business_id,
            document_type,
            file_name: safe_name,
            storage_key: storage_key.clone(),
            url,
            file_size: file_size as i64,
            status: VerificationStatus::Pending,
        };

        match self.documents.insert(new_document).await {
            Ok(document) => Ok(UploadedDocument {
                id: document.id,
                document_type: document.document_type,
                file_name: document.file_name,
                url: document.url,
                status: document.status,
                uploaded_at: document.uploaded_at,
            }),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    file_name = %file_name,
                    key = %storage_key,
                    "Failed to persist document record, removing stored blob"
                );
                self.cleanup_blob(&storage_key).await;
                Err(format!("{}: failed to save document record", file_name))
            }
        }
    }

    /// Best-effort compensation: delete a blob whose record never landed.
    /// A failed delete is logged and swallowed; the blob becomes a benign
    /// orphan.
    async fn cleanup_blob(&self, storage_key: &str) {
        if let Err(e) = self.storage.delete(storage_key).await {
            tracing::warn!(
                error = %e,
                key = %storage_key,
                "Failed to clean up stored object after persistence failure"
            );
        }
    }

    /// Read back the business's documents and evaluate the required set.
    ///
    /// A read failure here must not fail the batch (the uploads already
    /// happened), so it degrades to an extra batch error and a conservative
    /// "not satisfied" flag built from this batch's own successes.
    async fn evaluate_for_outcome(
        &self,
        business_id: Uuid,
        legal_form: &provia_core::models::LegalForm,
        uploaded: &[UploadedDocument],
        errors: &mut Vec<String>,
    ) -> RequirementStatus {
        match self.documents.list_for_business(business_id).await {
            Ok(documents) => evaluate_requirements(legal_form, &documents),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    business_id = %business_id,
                    "Failed to read documents for requirement evaluation"
                );
                errors.push("Failed to evaluate document requirements".to_string());
                let mut uploaded_types: Vec<String> = Vec::new();
                for document in uploaded {
                    if !uploaded_types.contains(&document.document_type) {
                        uploaded_types.push(document.document_type.clone());
                    }
                }
                RequirementStatus {
                    required_documents: required_documents(legal_form),
                    uploaded_document_types: uploaded_types,
                    all_required_uploaded: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provia_core::models::{BusinessProfile, Document, LegalForm};
    use provia_core::StorageBackend;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ----- Fakes -----

    #[derive(Default)]
    struct FakeStorage {
        objects: Mutex<HashMap<String, Vec<u8>>>,
        upload_calls: AtomicUsize,
        delete_calls: Mutex<Vec<String>>,
        fail_uploads: bool,
        reject_as_too_large: bool,
        fail_deletes: bool,
    }

    #[async_trait::async_trait]
    impl Storage for FakeStorage {
        async fn upload_with_key(
            &self,
            storage_key: &str,
            data: Vec<u8>,
            _content_type: &str,
        ) -> Result<(), StorageError> {
            self.upload_calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_as_too_large {
                return Err(StorageError::PayloadTooLarge("object limit".to_string()));
            }
            if self.fail_uploads {
                return Err(StorageError::UploadFailed("backend down".to_string()));
            }
            self.objects
                .lock()
                .unwrap()
                .insert(storage_key.to_string(), data);
            Ok(())
        }

        async fn public_url(&self, storage_key: &str) -> Result<String, StorageError> {
            Ok(format!("http://localhost:3000/files/{}", storage_key))
        }

        async fn download(&self, storage_key: &str) -> Result<Vec<u8>, StorageError> {
            self.objects
                .lock()
                .unwrap()
                .get(storage_key)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(storage_key.to_string()))
        }

        async fn delete(&self, storage_key: &str) -> Result<(), StorageError> {
            self.delete_calls
                .lock()
                .unwrap()
                .push(storage_key.to_string());
            if self.fail_deletes {
                return Err(StorageError::DeleteFailed("backend down".to_string()));
            }
            self.objects.lock().unwrap().remove(storage_key);
            Ok(())
        }

        async fn exists(&self, storage_key: &str) -> Result<bool, StorageError> {
            Ok(self.objects.lock().unwrap().contains_key(storage_key))
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::Local
        }
    }

    #[derive(Default)]
    struct FakeDocumentRepository {
        rows: Mutex<Vec<Document>>,
        fail_inserts: bool,
        fail_lists: bool,
    }

    impl FakeDocumentRepository {
        fn with_existing(documents: Vec<Document>) -> Self {
            Self {
                rows: Mutex::new(documents),
                ..Default::default()
            }
        }
    }

    #[async_trait::async_trait]
    impl DocumentRepositoryTrait for FakeDocumentRepository {
        async fn insert(&self, document: NewDocument) -> Result<Document, AppError> {
            if self.fail_inserts {
                return Err(AppError::Internal("insert refused".to_string()));
            }
            let row = Document {
                id: Uuid::new_v4(),
                business_id: document.business_id,
                document_type: document.document_type,
                file_name: document.file_name,
                storage_key: document.storage_key,
                url: document.url,
                file_size: document.file_size,
                status: document.status,
                uploaded_at: Utc::now(),
            };
            self.rows.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn list_for_business(&self, business_id: Uuid) -> Result<Vec<Document>, AppError> {
            if self.fail_lists {
                return Err(AppError::Internal("list refused".to_string()));
            }
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.business_id == business_id)
                .cloned()
                .collect())
        }

        async fn count_for_business(&self, business_id: Uuid) -> Result<i64, AppError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.business_id == business_id)
                .count() as i64)
        }
    }

    struct FakeBusinessRepository {
        profile: Option<BusinessProfile>,
        advance_calls: Mutex<Vec<i32>>,
    }

    impl FakeBusinessRepository {
        fn with_profile(business_id: Uuid, legal_form: LegalForm) -> Self {
            Self {
                profile: Some(BusinessProfile {
                    id: business_id,
                    business_name: "Test Plumbing Co".to_string(),
                    legal_form,
                    setup_step: 1,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }),
                advance_calls: Mutex::new(Vec::new()),
            }
        }

        fn missing() -> Self {
            Self {
                profile: None,
                advance_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl BusinessProfileRepositoryTrait for FakeBusinessRepository {
        async fn get_profile(
            &self,
            business_id: Uuid,
        ) -> Result<Option<BusinessProfile>, AppError> {
            Ok(self
                .profile
                .clone()
                .filter(|profile| profile.id == business_id))
        }

        async fn advance_setup_step(
            &self,
            _business_id: Uuid,
            min_step: i32,
        ) -> Result<(), AppError> {
            self.advance_calls.lock().unwrap().push(min_step);
            Ok(())
        }
    }

    struct FakeProviderRepository {
        owner: bool,
    }

    #[async_trait::async_trait]
    impl ProviderRepositoryTrait for FakeProviderRepository {
        async fn is_owner(&self, _user_id: Uuid, _business_id: Uuid) -> Result<bool, AppError> {
            Ok(self.owner)
        }
    }

    // ----- Helpers -----

    struct Harness {
        storage: Arc<FakeStorage>,
        documents: Arc<FakeDocumentRepository>,
        businesses: Arc<FakeBusinessRepository>,
        service: DocumentIntakeService,
        business_id: Uuid,
        user_id: Uuid,
    }

    fn harness_with(
        storage: FakeStorage,
        documents: FakeDocumentRepository,
        legal_form: LegalForm,
        owner: bool,
    ) -> Harness {
        let business_id = Uuid::new_v4();
        let storage = Arc::new(storage);
        let documents = Arc::new(documents);
        let businesses = Arc::new(FakeBusinessRepository::with_profile(business_id, legal_form));
        let providers = Arc::new(FakeProviderRepository { owner });
        let service = DocumentIntakeService::new(
            storage.clone(),
            documents.clone(),
            businesses.clone(),
            providers,
        );
        Harness {
            storage,
            documents,
            businesses,
            service,
            business_id,
            user_id: Uuid::new_v4(),
        }
    }

    fn harness() -> Harness {
        harness_with(
            FakeStorage::default(),
            FakeDocumentRepository::default(),
            LegalForm::SoleProprietorship,
            true,
        )
    }

    fn file(name: &str, size: usize) -> UploadedFile {
        UploadedFile {
            data: vec![0u8; size],
            file_name: name.to_string(),
            content_type: "application/pdf".to_string(),
        }
    }

    fn batch(h: &Harness, files: Vec<UploadedFile>, mapping: DocumentMapping) -> DocumentBatch {
        DocumentBatch {
            business_id: h.business_id,
            requested_by: h.user_id,
            files,
            mapping,
        }
    }

    // ----- Precondition tests -----

    #[tokio::test]
    async fn nil_business_id_is_fatal() {
        let h = harness();
        let mut b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        b.business_id = Uuid::nil();
        let err = h.service.process_batch(b).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(h.storage.upload_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_batch_is_fatal() {
        let h = harness();
        let b = batch(&h, vec![], DocumentMapping::new());
        let err = h.service.process_batch(b).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn non_owner_is_rejected_before_processing() {
        let h = harness_with(
            FakeStorage::default(),
            FakeDocumentRepository::default(),
            LegalForm::SoleProprietorship,
            false,
        );
        let b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        let err = h.service.process_batch(b).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(h.storage.upload_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_profile_is_fatal() {
        let business_id = Uuid::new_v4();
        let service = DocumentIntakeService::new(
            Arc::new(FakeStorage::default()),
            Arc::new(FakeDocumentRepository::default()),
            Arc::new(FakeBusinessRepository::missing()),
            Arc::new(FakeProviderRepository { owner: true }),
        );
        let b = DocumentBatch {
            business_id,
            requested_by: Uuid::new_v4(),
            files: vec![file("a.pdf", 10)],
            mapping: DocumentMapping::new(),
        };
        let err = service.process_batch(b).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    // ----- Per-file validation -----

    #[tokio::test]
    async fn oversized_file_never_reaches_the_store() {
        let h = harness();
        let b = batch(
            &h,
            vec![file("big.pdf", 5 * 1024 * 1024 + 1)],
            DocumentMapping::new(),
        );
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert!(outcome.uploaded.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("5.00 MB"));
        assert!(outcome.errors[0].contains("5 MB"));
        assert_eq!(h.storage.upload_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn mixed_batch_partitions_successes_and_errors() {
        let h = harness();
        let b = batch(
            &h,
            vec![file("ok.pdf", 1024), file("big.pdf", 6 * 1024 * 1024)],
            DocumentMapping::new(),
        );
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert_eq!(outcome.uploaded.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.uploaded[0].file_name, "ok.pdf");
        assert_eq!(h.storage.upload_calls.load(Ordering::SeqCst), 1);
    }

    // ----- Type resolution through the pipeline -----

    #[tokio::test]
    async fn mapping_and_positional_fallback_resolve_types() {
        let h = harness();
        let mapping = DocumentMapping::from_entries([("a.pdf", "drivers_license")]);
        let b = batch(&h, vec![file("a.pdf", 10), file("b.png", 10)], mapping);
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert_eq!(outcome.uploaded.len(), 2);
        assert_eq!(outcome.uploaded[0].document_type, "drivers_license");
        assert_eq!(outcome.uploaded[1].document_type, "document_1");
    }

    #[tokio::test]
    async fn same_type_files_get_distinct_storage_keys() {
        let h = harness();
        let mapping = DocumentMapping::from_entries([
            ("front.jpg", "drivers_license"),
            ("back.jpg", "drivers_license"),
        ]);
        let b = batch(
            &h,
            vec![file("front.jpg", 10), file("back.jpg", 10)],
            mapping,
        );
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert_eq!(outcome.uploaded.len(), 2);
        assert_eq!(h.storage.objects.lock().unwrap().len(), 2);
    }

    // ----- Storage failures -----

    #[tokio::test]
    async fn store_write_failure_skips_insert_and_cleanup() {
        let h = harness_with(
            FakeStorage {
                fail_uploads: true,
                ..Default::default()
            },
            FakeDocumentRepository::default(),
            LegalForm::SoleProprietorship,
            true,
        );
        let b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert!(outcome.uploaded.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert!(h.documents.rows.lock().unwrap().is_empty());
        assert!(h.storage.delete_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_size_rejection_names_the_ceiling() {
        let h = harness_with(
            FakeStorage {
                reject_as_too_large: true,
                ..Default::default()
            },
            FakeDocumentRepository::default(),
            LegalForm::SoleProprietorship,
            true,
        );
        let b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("5 MB"));
    }

    // ----- Persistence failure and compensation -----

    #[tokio::test]
    async fn insert_failure_reports_error_and_deletes_blob_once() {
        let h = harness_with(
            FakeStorage::default(),
            FakeDocumentRepository {
                fail_inserts: true,
                ..Default::default()
            },
            LegalForm::SoleProprietorship,
            true,
        );
        let b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert!(outcome.uploaded.is_empty());
        assert_eq!(outcome.errors.len(), 1);

        let deletes = h.storage.delete_calls.lock().unwrap();
        assert_eq!(deletes.len(), 1, "blob delete must be attempted exactly once");
        assert!(h.storage.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_cleanup_is_swallowed() {
        let h = harness_with(
            FakeStorage {
                fail_deletes: true,
                ..Default::default()
            },
            FakeDocumentRepository {
                fail_inserts: true,
                ..Default::default()
            },
            LegalForm::SoleProprietorship,
            true,
        );
        let b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        let outcome = h.service.process_batch(b).await.expect("outcome");

        // The per-file error is about the record write; the delete failure
        // stays out of the caller-visible result.
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("document record"));
        assert_eq!(h.storage.delete_calls.lock().unwrap().len(), 1);
    }

    // ----- Setup-step advancement -----

    #[tokio::test]
    async fn first_upload_advances_setup_step() {
        let h = harness();
        let b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        h.service.process_batch(b).await.expect("outcome");

        let calls = h.businesses.advance_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[SETUP_STEP_DOCUMENTS_UPLOADED]);
    }

    #[tokio::test]
    async fn later_uploads_do_not_advance_setup_step() {
        let business_id = Uuid::new_v4();
        let existing = Document {
            id: Uuid::new_v4(),
            business_id,
            document_type: "proof_of_address".to_string(),
            file_name: "bill.pdf".to_string(),
            storage_key: "provider-documents/x/proof_of_address_1.pdf".to_string(),
            url: "http://localhost/files/bill.pdf".to_string(),
            file_size: 10,
            status: VerificationStatus::Pending,
            uploaded_at: Utc::now(),
        };
        let storage = Arc::new(FakeStorage::default());
        let documents = Arc::new(FakeDocumentRepository::with_existing(vec![existing]));
        let businesses = Arc::new(FakeBusinessRepository::with_profile(
            business_id,
            LegalForm::SoleProprietorship,
        ));
        let service = DocumentIntakeService::new(
            storage,
            documents,
            businesses.clone(),
            Arc::new(FakeProviderRepository { owner: true }),
        );
        let b = DocumentBatch {
            business_id,
            requested_by: Uuid::new_v4(),
            files: vec![file("a.pdf", 10)],
            mapping: DocumentMapping::new(),
        };
        service.process_batch(b).await.expect("outcome");

        assert!(businesses.advance_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn all_failed_batch_does_not_advance_setup_step() {
        let h = harness_with(
            FakeStorage {
                fail_uploads: true,
                ..Default::default()
            },
            FakeDocumentRepository::default(),
            LegalForm::SoleProprietorship,
            true,
        );
        let b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        h.service.process_batch(b).await.expect("outcome");

        assert!(h.businesses.advance_calls.lock().unwrap().is_empty());
    }

    // ----- Requirement readiness in the outcome -----

    #[tokio::test]
    async fn uploading_full_required_set_flips_readiness() {
        let h = harness();
        let mapping = DocumentMapping::from_entries([
            ("dl.pdf", "drivers_license"),
            ("addr.pdf", "proof_of_address"),
            ("lic.pdf", "professional_license"),
            ("cert.pdf", "professional_certificate"),
        ]);
        let b = batch(
            &h,
            vec![
                file("dl.pdf", 10),
                file("addr.pdf", 10),
                file("lic.pdf", 10),
                file("cert.pdf", 10),
            ],
            mapping,
        );
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert!(outcome.all_required_uploaded);
        assert_eq!(outcome.required_documents.len(), 4);
        assert_eq!(outcome.uploaded_document_types.len(), 4);
    }

    #[tokio::test]
    async fn partial_set_is_not_ready() {
        let h = harness();
        let mapping = DocumentMapping::from_entries([("dl.pdf", "drivers_license")]);
        let b = batch(&h, vec![file("dl.pdf", 10)], mapping);
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert!(!outcome.all_required_uploaded);
        assert_eq!(
            outcome.uploaded_document_types,
            vec!["drivers_license".to_string()]
        );
    }

    #[tokio::test]
    async fn requirement_read_failure_degrades_to_extra_error() {
        let h = harness_with(
            FakeStorage::default(),
            FakeDocumentRepository {
                fail_lists: true,
                ..Default::default()
            },
            LegalForm::SoleProprietorship,
            true,
        );
        let b = batch(&h, vec![file("a.pdf", 10)], DocumentMapping::new());
        let outcome = h.service.process_batch(b).await.expect("outcome");

        assert_eq!(outcome.uploaded.len(), 1);
        assert!(!outcome.all_required_uploaded);
        assert!(outcome
            .errors
            .iter()
            .any(|e| e.contains("requirements")));
    }

    #[tokio::test]
    async fn success_summary_is_fully_populated() {
        let h = harness();
        let mapping = DocumentMapping::from_entries([("dl.pdf", "drivers_license")]);
        let b = batch(&h, vec![file("dl.pdf", 2048)], mapping);
        let outcome = h.service.process_batch(b).await.expect("outcome");

        let doc = &outcome.uploaded[0];
        assert_eq!(doc.document_type, "drivers_license");
        assert_eq!(doc.file_name, "dl.pdf");
        assert_eq!(doc.status, VerificationStatus::Pending);
        assert!(doc.url.contains("provider-documents"));
        assert!(doc.url.contains(&h.business_id.to_string()));
    }
}
