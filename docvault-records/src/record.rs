//! Persisted record types and the canonical metadata structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The only MIME type accepted for file-attached seals.
pub const ALLOWED_MIME_TYPE: &str = "application/pdf";

/// Maximum accepted file payload size (5 MiB).
pub const MAX_PAYLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Document-type marker used for file-attached records.
pub const PDF_DOCUMENT_TYPE: &str = "PDF_UPLOAD";

/// How a record was created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadMode {
    MetadataOnly,
    FileAttached,
}

/// Review lifecycle of a record.
///
/// Set to `Pending` at seal time; moved exactly once to a terminal state
/// by the review collaborator, never by the document service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewState {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewState::Pending => f.write_str("pending"),
            ReviewState::Accepted => f.write_str("accepted"),
            ReviewState::Rejected => f.write_str("rejected"),
        }
    }
}

/// Canonical document metadata.
///
/// This is a closed structure: unknown fields are rejected on parse so the
/// canonical-serialization contract for signing stays stable. Field order
/// is fixed by declaration order; [`DocumentMetadata::canonical_bytes`] is
/// the only serialization used for signing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentMetadata {
    pub document_type: String,
    pub file_name: Option<String>,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl DocumentMetadata {
    /// Deterministic byte serialization for signing and encryption.
    pub fn canonical_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Parses metadata from decrypted canonical bytes.
    pub fn from_canonical_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// The persisted unit: one sealed document.
///
/// Ciphertext fields are immutable once assigned; only the review fields
/// change afterwards, exactly once, through the review collaborator.
/// `encrypted_metadata` and `encrypted_payload` share the single
/// `wrapped_key`; a record with ciphertext but no wrapped key is
/// unrecoverable, so a seal always assembles the whole record before
/// anything is handed to storage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncryptedRecord {
    /// Opaque external identifier (Base64 over a UUID + timestamp).
    pub id: String,
    /// Owning principal; opaque to this crate.
    pub owner_ref: String,
    /// Hex ciphertext of the canonical metadata.
    pub encrypted_metadata: String,
    /// Hex IV paired with `encrypted_metadata`. Not secret.
    pub metadata_iv: String,
    /// Hex ciphertext of the Base64-encoded file bytes, if a file was attached.
    pub encrypted_payload: Option<String>,
    /// Hex IV paired with `encrypted_payload`.
    pub payload_iv: Option<String>,
    /// Base64 of the per-record AES key, OAEP-wrapped under the system public key.
    pub wrapped_key: String,
    /// Hex SHA-256 digest: over canonical metadata for metadata-only
    /// records, over the raw file bytes for file-attached records.
    pub integrity_signature: String,
    pub upload_mode: UploadMode,
    /// Declared MIME type of the attached file.
    pub mime_type: Option<String>,
    pub review_state: ReviewState,
    pub reviewer_ref: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Plaintext view of an opened record.
///
/// Combines decrypted metadata with the non-sensitive record fields. File
/// bytes are fetched separately via `DocumentService::open_payload`.
#[derive(Clone, Debug, Serialize)]
pub struct DocumentView {
    pub id: String,
    pub owner_ref: String,
    pub metadata: DocumentMetadata,
    pub upload_mode: UploadMode,
    pub mime_type: Option<String>,
    pub review_state: ReviewState,
    pub reviewer_ref: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
