//! Crypto error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in the encryption layer.
///
/// Messages never carry key material or plaintext; decryption failures are
/// deliberately coarse so callers cannot distinguish a wrong key from a
/// corrupted ciphertext.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("key unwrap failed: {0}")]
    KeyUnwrap(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid record identifier: {0}")]
    InvalidIdentifier(String),

    #[error("key material error: {0}")]
    KeyMaterial(String),
}
