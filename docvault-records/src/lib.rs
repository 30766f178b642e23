//! Encrypted record model and envelope document service.
//!
//! A "document" is a metadata structure plus an optional PDF payload,
//! stored at rest as an [`EncryptedRecord`]: both ciphertexts are
//! encrypted under a fresh per-record AES key, that key is wrapped under
//! the system RSA public key, and a SHA-256 integrity signature detects
//! tampering. External callers refer to records through opaque Base64
//! identifiers.
//!
//! The service performs no I/O of its own. Persistence goes through the
//! [`RecordStore`] collaborator; review-state transitions go through the
//! [`review`] module, which the service exposes no mutator for.

mod error;
mod record;
pub mod review;
mod service;
mod store;

pub use error::{RecordError, RecordResult};
pub use record::{
    DocumentMetadata, DocumentView, EncryptedRecord, ReviewState, UploadMode, ALLOWED_MIME_TYPE,
    MAX_PAYLOAD_BYTES, PDF_DOCUMENT_TYPE,
};
pub use review::{apply_review, ReviewDecision};
pub use service::DocumentService;
pub use store::{open_all, open_by_encoded_id, DecryptedListing, InMemoryRecordStore, RecordStore};
