//! Envelope document service: seal and open encrypted records.

use crate::error::{RecordError, RecordResult};
use crate::record::{
    DocumentMetadata, DocumentView, EncryptedRecord, ReviewState, UploadMode, ALLOWED_MIME_TYPE,
    MAX_PAYLOAD_BYTES, PDF_DOCUMENT_TYPE,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use docvault_crypto::{
    decrypt, encrypt, generate_record_key, new_record_id, sign, unwrap_key, verify, wrap_key,
    CryptoError, RecordKey, SystemKeyPair,
};
use std::sync::Arc;
use tracing::debug;

/// Orchestrates the hybrid encryption scheme for one record at a time.
///
/// Holds only the shared read-only system key pair; every seal generates
/// its own record key and IVs, so concurrent seals share no mutable state.
pub struct DocumentService {
    keys: Arc<SystemKeyPair>,
}

impl DocumentService {
    pub fn new(keys: Arc<SystemKeyPair>) -> Self {
        Self { keys }
    }

    /// Seals a metadata-only document.
    ///
    /// Generates a fresh record key, encrypts the canonical metadata,
    /// signs the canonical plaintext, wraps the key, and assigns an
    /// opaque identifier. The returned record is fully assembled; the
    /// caller persists it as one unit.
    pub fn seal_metadata(
        &self,
        metadata: &DocumentMetadata,
        owner_ref: &str,
    ) -> RecordResult<EncryptedRecord> {
        let canonical = metadata.canonical_bytes()?;
        let record_key = generate_record_key();

        let (ciphertext, iv) = encrypt(&record_key, &canonical);
        let signature = sign(&canonical);
        let wrapped = wrap_key(&record_key, &self.keys.public)?;
        let id = new_record_id();

        debug!(record_id = %id, mode = "metadata-only", "sealed document");

        Ok(EncryptedRecord {
            id,
            owner_ref: owner_ref.to_string(),
            encrypted_metadata: hex::encode(ciphertext),
            metadata_iv: hex::encode(iv),
            encrypted_payload: None,
            payload_iv: None,
            wrapped_key: BASE64.encode(wrapped),
            integrity_signature: signature,
            upload_mode: UploadMode::MetadataOnly,
            mime_type: None,
            review_state: ReviewState::Pending,
            reviewer_ref: None,
            reviewed_at: None,
            review_comments: None,
            created_at: Utc::now(),
        })
    }

    /// Seals a document with an attached PDF payload.
    ///
    /// The MIME and size gates run before any key generation so a
    /// rejected upload leaves no partial state. Metadata and file share
    /// one record key; the integrity signature is computed over the raw
    /// file bytes, independent of the metadata.
    pub fn seal_with_file(
        &self,
        file_bytes: &[u8],
        file_name: &str,
        mime_type: &str,
        owner_ref: &str,
    ) -> RecordResult<EncryptedRecord> {
        if mime_type != ALLOWED_MIME_TYPE {
            return Err(RecordError::UnsupportedMediaType(mime_type.to_string()));
        }
        if file_bytes.len() > MAX_PAYLOAD_BYTES {
            return Err(RecordError::PayloadTooLarge {
                actual: file_bytes.len(),
                limit: MAX_PAYLOAD_BYTES,
            });
        }

        let record_key = generate_record_key();

        // Text-safe intermediate encoding, matching the stored layout
        let payload_text = BASE64.encode(file_bytes);
        let (payload_ct, payload_iv) = encrypt(&record_key, payload_text.as_bytes());

        let metadata = DocumentMetadata {
            document_type: PDF_DOCUMENT_TYPE.to_string(),
            file_name: Some(file_name.to_string()),
            description: None,
            uploaded_at: Utc::now(),
        };
        let canonical = metadata.canonical_bytes()?;
        let (meta_ct, meta_iv) = encrypt(&record_key, &canonical);

        // File integrity is checked against the original bytes, not the metadata
        let signature = sign(file_bytes);
        let wrapped = wrap_key(&record_key, &self.keys.public)?;
        let id = new_record_id();

        debug!(
            record_id = %id,
            mode = "file-attached",
            payload_len = file_bytes.len(),
            "sealed document"
        );

        Ok(EncryptedRecord {
            id,
            owner_ref: owner_ref.to_string(),
            encrypted_metadata: hex::encode(meta_ct),
            metadata_iv: hex::encode(meta_iv),
            encrypted_payload: Some(hex::encode(payload_ct)),
            payload_iv: Some(hex::encode(payload_iv)),
            wrapped_key: BASE64.encode(wrapped),
            integrity_signature: signature,
            upload_mode: UploadMode::FileAttached,
            mime_type: Some(mime_type.to_string()),
            review_state: ReviewState::Pending,
            reviewer_ref: None,
            reviewed_at: None,
            review_comments: None,
            created_at: Utc::now(),
        })
    }

    /// Opens a record into a plaintext view.
    ///
    /// Metadata-only records re-verify the integrity signature against the
    /// freshly decrypted plaintext; a mismatch aborts with
    /// [`RecordError::IntegrityViolation`] and returns no fields at all.
    /// File-attached records carry a digest over the raw file bytes that
    /// was verified at upload time and is not recomputed here — use
    /// [`DocumentService::verify_payload`] for an explicit re-check.
    pub fn open(&self, record: &EncryptedRecord) -> RecordResult<DocumentView> {
        let record_key = self.unwrap_record_key(record)?;

        let ciphertext = decode_hex(&record.encrypted_metadata)?;
        let iv = decode_hex(&record.metadata_iv)?;
        let plaintext = decrypt(&record_key, &ciphertext, &iv)?;

        if record.upload_mode == UploadMode::MetadataOnly
            && !verify(&plaintext, &record.integrity_signature)
        {
            return Err(RecordError::IntegrityViolation);
        }

        let metadata = DocumentMetadata::from_canonical_bytes(&plaintext)?;

        debug!(record_id = %record.id, "opened document");

        Ok(DocumentView {
            id: record.id.clone(),
            owner_ref: record.owner_ref.clone(),
            metadata,
            upload_mode: record.upload_mode,
            mime_type: record.mime_type.clone(),
            review_state: record.review_state,
            reviewer_ref: record.reviewer_ref.clone(),
            reviewed_at: record.reviewed_at,
            review_comments: record.review_comments.clone(),
            created_at: record.created_at,
        })
    }

    /// Decrypts the attached file payload of a file-attached record.
    pub fn open_payload(&self, record: &EncryptedRecord) -> RecordResult<Vec<u8>> {
        let (payload_hex, iv_hex) = match (&record.encrypted_payload, &record.payload_iv) {
            (Some(ct), Some(iv)) => (ct, iv),
            _ => return Err(RecordError::PayloadMissing),
        };

        let record_key = self.unwrap_record_key(record)?;
        let ciphertext = decode_hex(payload_hex)?;
        let iv = decode_hex(iv_hex)?;
        let payload_text = decrypt(&record_key, &ciphertext, &iv)?;

        BASE64
            .decode(&payload_text)
            .map_err(|_| CryptoError::Decryption("corrupted payload encoding".to_string()).into())
    }

    /// Explicitly re-verifies the file digest of a file-attached record.
    ///
    /// The open path trusts the digest computed at upload time to avoid
    /// re-hashing large payloads on every read; this pass closes that gap
    /// for callers that want to detect post-upload storage edits.
    pub fn verify_payload(&self, record: &EncryptedRecord) -> RecordResult<()> {
        let file_bytes = self.open_payload(record)?;
        if !verify(&file_bytes, &record.integrity_signature) {
            return Err(RecordError::IntegrityViolation);
        }
        Ok(())
    }

    fn unwrap_record_key(&self, record: &EncryptedRecord) -> RecordResult<RecordKey> {
        let wrapped = BASE64
            .decode(&record.wrapped_key)
            .map_err(|_| CryptoError::KeyUnwrap("corrupted wrapped key encoding".to_string()))?;
        Ok(unwrap_key(&wrapped, &self.keys.private)?)
    }
}

fn decode_hex(field: &str) -> RecordResult<Vec<u8>> {
    hex::decode(field)
        .map_err(|_| CryptoError::Decryption("malformed ciphertext encoding".to_string()).into())
}
