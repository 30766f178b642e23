//! Integrity signatures: SHA-256 digests over canonical plaintext.
//!
//! The digest is a signature of integrity only — it detects accidental
//! corruption and direct storage edits, not forgery by an adversary who
//! holds the encryption key.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Computes the hex-encoded SHA-256 digest of `data`.
///
/// Callers must pass a canonical byte serialization (stable field order)
/// so re-serialization does not change the digest.
pub fn sign(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Recomputes the digest of `data` and compares it to `expected`.
///
/// The comparison is constant-time. `expected` must be the hex digest
/// stored at seal time; verification always recomputes from freshly
/// decrypted plaintext, never trusting a stored "valid" flag.
pub fn verify(data: &[u8], expected: &str) -> bool {
    let actual = sign(data);
    actual.as_bytes().ct_eq(expected.as_bytes()).into()
}
