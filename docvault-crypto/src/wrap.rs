//! Asymmetric key wrapping: RSA-2048 OAEP (SHA-256).
//!
//! Wraps the short-lived per-record AES key under the long-lived system
//! public key. OAEP padding only — never raw RSA. The system key pair is
//! loaded once at startup and treated as an opaque, immutable handle.

use crate::cipher::RecordKey;
use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rsa::pkcs8::{
    DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding,
};
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use std::path::Path;

/// RSA modulus size for the system key pair.
pub const RSA_KEY_BITS: usize = 2048;

/// Long-lived system RSA key pair.
///
/// Constructed explicitly at startup and passed by reference into the
/// document service — never a hidden singleton. All seal/open operations
/// share it as read-only state.
pub struct SystemKeyPair {
    pub public: RsaPublicKey,
    pub private: RsaPrivateKey,
}

impl SystemKeyPair {
    /// Generates a fresh RSA-2048 key pair.
    ///
    /// Intended for first-run bootstrap and tests; deployments load
    /// persisted PEM material via [`SystemKeyPair::from_pem`].
    pub fn generate() -> CryptoResult<Self> {
        let private = RsaPrivateKey::new(&mut OsRng, RSA_KEY_BITS)
            .map_err(|e| CryptoError::KeyMaterial(format!("key generation failed: {e}")))?;
        let public = RsaPublicKey::from(&private);
        Ok(Self { public, private })
    }

    /// Reconstructs the key pair from a PKCS#8 private key PEM.
    ///
    /// The public key is derived from the private key, so a single PEM
    /// string is the only input needed.
    pub fn from_pem(private_pem: &str) -> CryptoResult<Self> {
        let private = RsaPrivateKey::from_pkcs8_pem(private_pem)
            .map_err(|e| CryptoError::KeyMaterial(format!("invalid private key PEM: {e}")))?;
        let public = RsaPublicKey::from(&private);
        Ok(Self { public, private })
    }

    /// Loads the key pair from a PKCS#8 private key PEM file.
    pub fn from_pem_file(path: &Path) -> CryptoResult<Self> {
        let pem = std::fs::read_to_string(path)
            .map_err(|e| CryptoError::KeyMaterial(format!("cannot read key file: {e}")))?;
        Self::from_pem(&pem)
    }

    /// Exports the private key as PKCS#8 PEM.
    pub fn private_key_pem(&self) -> CryptoResult<String> {
        self.private
            .to_pkcs8_pem(LineEnding::LF)
            .map(|pem| pem.to_string())
            .map_err(|e| CryptoError::KeyMaterial(format!("cannot encode private key: {e}")))
    }

    /// Exports the public key as SPKI PEM.
    pub fn public_key_pem(&self) -> CryptoResult<String> {
        self.public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::KeyMaterial(format!("cannot encode public key: {e}")))
    }

    /// Parses a standalone SPKI public key PEM.
    ///
    /// Useful for seal-only deployments that hold no private key.
    pub fn public_from_pem(public_pem: &str) -> CryptoResult<RsaPublicKey> {
        RsaPublicKey::from_public_key_pem(public_pem)
            .map_err(|e| CryptoError::KeyMaterial(format!("invalid public key PEM: {e}")))
    }
}

/// Wraps a per-record key under the system public key with OAEP(SHA-256).
///
/// # Errors
///
/// Returns `CryptoError::Encryption` if the OAEP encryption fails (the
/// 32-byte record key is always well under the modulus-derived maximum).
pub fn wrap_key(key: &RecordKey, public: &RsaPublicKey) -> CryptoResult<Vec<u8>> {
    public
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), key.as_bytes())
        .map_err(|e| CryptoError::Encryption(format!("key wrap failed: {e}")))
}

/// Unwraps a per-record key under the system private key.
///
/// # Errors
///
/// Returns `CryptoError::KeyUnwrap` when OAEP padding validation fails
/// (wrong key pair or corrupted input) or the input exceeds the modulus
/// size. OAEP never yields a plausible-looking wrong key on mismatch.
pub fn unwrap_key(wrapped: &[u8], private: &RsaPrivateKey) -> CryptoResult<RecordKey> {
    let bytes = private
        .decrypt(Oaep::new::<Sha256>(), wrapped)
        .map_err(|_| CryptoError::KeyUnwrap("wrong key pair or corrupted input".to_string()))?;

    RecordKey::try_from_slice(&bytes)
}
