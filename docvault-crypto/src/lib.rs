//! Hybrid document-encryption primitives for docvault.
//!
//! Provides per-record envelope encryption using:
//! - AES-256-CBC for bulk metadata and file payloads
//! - RSA-2048 OAEP (SHA-256) for wrapping the per-record AES key
//! - SHA-256 digests as tamper-evident integrity signatures
//! - Base64 encoding for opaque external record identifiers
//!
//! # Architecture
//!
//! The encryption uses a two-tier key system:
//!
//! 1. **System key pair**: A long-lived RSA-2048 pair loaded once at
//!    startup from PEM key material. Never regenerated or rotated here.
//!
//! 2. **Record key**: A random 256-bit AES key generated fresh for each
//!    sealed record. The record key is wrapped (OAEP-encrypted) under the
//!    system public key and stored alongside the ciphertexts.
//!
//! Wrapping a short-lived symmetric key instead of encrypting payloads
//! directly with RSA avoids the OAEP payload-size ceiling and keeps bulk
//! encryption fast. All operations are synchronous and CPU-bound; the
//! system key pair is shared read-only across concurrent callers.

mod cipher;
mod error;
mod ident;
mod signature;
mod wrap;

pub use cipher::{decrypt, encrypt, generate_record_key, RecordKey, IV_SIZE, KEY_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use ident::{decode_id, encode_id, new_record_id};
pub use signature::{sign, verify};
pub use wrap::{unwrap_key, wrap_key, SystemKeyPair, RSA_KEY_BITS};
