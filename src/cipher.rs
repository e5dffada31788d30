//! AES-256-GCM sealing.
//!
//! Sealed blob format (binary):
//! ```text
//! [12 bytes: random nonce][N bytes: ciphertext][16 bytes: GCM tag]
//! ```
//!
//! There is no header, version byte or length prefix, and no associated
//! data. A wrong key and a tampered blob fail the same way.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::error::{Result, SealpackError};
use crate::key::SealKey;

/// GCM nonce length (96 bits).
pub const NONCE_SIZE: usize = 12;

/// GCM authentication tag length.
pub const TAG_SIZE: usize = 16;

/// Borrowed view of a sealed blob: `nonce || ciphertext || tag`.
#[derive(Debug, Clone, Copy)]
pub struct SealedBlob<'a> {
    nonce: &'a [u8; NONCE_SIZE],
    body: &'a [u8],
}

impl<'a> SealedBlob<'a> {
    /// Split a blob at the nonce boundary.
    ///
    /// Only the nonce is required to be present. A body shorter than a tag
    /// is accepted here and rejected later by authentication.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < NONCE_SIZE {
            return Err(SealpackError::MalformedInput(bytes.len()));
        }
        let (nonce, body) = bytes.split_at(NONCE_SIZE);
        let nonce = nonce
            .try_into()
            .map_err(|_| SealpackError::MalformedInput(bytes.len()))?;
        Ok(Self { nonce, body })
    }

    pub fn nonce(&self) -> &'a [u8; NONCE_SIZE] {
        self.nonce
    }

    /// Everything after the nonce, as produced by the AEAD primitive.
    pub fn ciphertext_with_tag(&self) -> &'a [u8] {
        self.body
    }

    pub fn ciphertext(&self) -> Option<&'a [u8]> {
        self.split_tag().map(|(ciphertext, _)| ciphertext)
    }

    pub fn tag(&self) -> Option<&'a [u8]> {
        self.split_tag().map(|(_, tag)| tag)
    }

    fn split_tag(&self) -> Option<(&'a [u8], &'a [u8])> {
        let split = self.body.len().checked_sub(TAG_SIZE)?;
        Some(self.body.split_at(split))
    }
}

/// Encrypt `plaintext` under a raw key.
///
/// The key length is checked before any randomness is drawn.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let key = SealKey::from_slice(key)?;
    seal_with(&key, plaintext)
}

/// Decrypt and verify a sealed blob under a raw key.
pub fn open(key: &[u8], sealed: &[u8]) -> Result<Vec<u8>> {
    let key = SealKey::from_slice(key)?;
    open_with(&key, sealed)
}

/// Encrypt with a validated key.
///
/// Returns `[12-byte nonce][ciphertext][16-byte tag]`. A fresh nonce is
/// drawn from the OS random source on every call.
pub fn seal_with(key: &SealKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.try_fill_bytes(&mut nonce_bytes)?;

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|_| SealpackError::EncryptionFailed(plaintext.len()))?;

    let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);
    debug!(
        plaintext_len = plaintext.len(),
        sealed_len = sealed.len(),
        "sealed payload"
    );
    Ok(sealed)
}

/// Decrypt with a validated key.
pub fn open_with(key: &SealKey, sealed: &[u8]) -> Result<Vec<u8>> {
    let blob = SealedBlob::parse(sealed)?;

    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let plaintext = cipher
        .decrypt(Nonce::from_slice(blob.nonce()), blob.ciphertext_with_tag())
        .map_err(|_| SealpackError::AuthenticationFailed)?;

    debug!(
        sealed_len = sealed.len(),
        plaintext_len = plaintext.len(),
        "opened payload"
    );
    Ok(plaintext)
}
