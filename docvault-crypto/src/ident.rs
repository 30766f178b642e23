//! Opaque external record identifiers.
//!
//! Standard-alphabet Base64 over an internal unique value plus a time
//! component. The identifier is an opaque handle with no security
//! guarantee: decoding it reveals only a random UUID and a timestamp,
//! never record content.

use crate::error::{CryptoError, CryptoResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use uuid::Uuid;

/// Encodes raw bytes as a Base64 identifier string.
pub fn encode_id(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}

/// Decodes an external identifier back to its raw bytes.
///
/// # Errors
///
/// Returns `CryptoError::InvalidIdentifier` on malformed input (invalid
/// characters or wrong length).
pub fn decode_id(encoded: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| CryptoError::InvalidIdentifier(e.to_string()))
}

/// Generates a fresh external record identifier.
///
/// The plaintext is a random UUID concatenated with the current
/// millisecond timestamp, Base64-encoded. Identifiers are never reused
/// and never derived from record content.
pub fn new_record_id() -> String {
    let raw = format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Utc::now().timestamp_millis()
    );
    encode_id(raw.as_bytes())
}
