//! Symmetric cipher: AES-256-CBC with PKCS7 padding.
//!
//! Encrypts a byte payload under a caller-supplied 256-bit key and a fresh
//! random IV. The primitive produces no authentication tag; tamper
//! detection for metadata is delegated to the integrity signature layer.

use crate::error::{CryptoError, CryptoResult};
use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES key size in bytes (256-bit).
pub const KEY_SIZE: usize = 32;

/// CBC initialization vector size in bytes.
pub const IV_SIZE: usize = 16;

/// Per-record symmetric key, zeroized on drop.
///
/// The key lifecycle is owned by the caller: generated fresh per seal
/// operation, wrapped for storage, never cached across records.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RecordKey {
    bytes: [u8; KEY_SIZE],
}

impl RecordKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Try to create from a slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly `KEY_SIZE` bytes.
    pub fn try_from_slice(slice: &[u8]) -> CryptoResult<Self> {
        if slice.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: slice.len(),
            });
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self { bytes })
    }

    /// Get the raw key bytes.
    pub const fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

/// Generates a fresh random 256-bit record key from the OS CSPRNG.
pub fn generate_record_key() -> RecordKey {
    let mut bytes = [0u8; KEY_SIZE];
    OsRng.fill_bytes(&mut bytes);
    RecordKey::from_bytes(bytes)
}

/// Encrypts `plaintext` under `key` with a fresh random IV.
///
/// The IV is generated per call and returned alongside the ciphertext so
/// it can be persisted; it is not secret but must never be reused.
pub fn encrypt(key: &RecordKey, plaintext: &[u8]) -> (Vec<u8>, [u8; IV_SIZE]) {
    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    (ciphertext, iv)
}

/// Decrypts `ciphertext` under `key` and the IV persisted at encrypt time.
///
/// # Errors
///
/// Returns `CryptoError::Decryption` if the IV is malformed or padding
/// validation fails after decryption. A padding failure means the
/// ciphertext is corrupted or was produced under a different key; no
/// partial plaintext is ever returned.
pub fn decrypt(key: &RecordKey, ciphertext: &[u8], iv: &[u8]) -> CryptoResult<Vec<u8>> {
    if iv.len() != IV_SIZE {
        return Err(CryptoError::Decryption(format!(
            "malformed IV: expected {IV_SIZE} bytes, got {}",
            iv.len()
        )));
    }

    let mut iv_bytes = [0u8; IV_SIZE];
    iv_bytes.copy_from_slice(iv);

    Aes256CbcDec::new(key.as_bytes().into(), &iv_bytes.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Decryption("corrupted or tampered ciphertext".to_string()))
}
