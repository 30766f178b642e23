//! Record-layer error types.

use thiserror::Error;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur when sealing, opening, or reviewing records.
///
/// Every failure is a hard stop for that single operation: no retries, no
/// fallback to unencrypted data, no partial plaintext in messages.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("unsupported media type: {0} (only application/pdf is accepted)")]
    UnsupportedMediaType(String),

    #[error("payload too large: {actual} bytes exceeds the {limit}-byte limit")]
    PayloadTooLarge { actual: usize, limit: usize },

    #[error("integrity signature mismatch: record corrupted or tampered")]
    IntegrityViolation,

    #[error("record has no file payload")]
    PayloadMissing,

    #[error("record already reviewed: {current}")]
    AlreadyReviewed { current: String },

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("crypto error: {0}")]
    Crypto(#[from] docvault_crypto::CryptoError),

    #[error("metadata serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
