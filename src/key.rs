//! The 256-bit sealing key.
//!
//! Keys are supplied pre-formed by the caller; nothing here derives or
//! stores them. Every constructor checks the length before the bytes can
//! reach the cipher.

use crate::error::{Result, SealpackError};
use zeroize::{Zeroize, Zeroizing};

/// Key length in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// A validated 32-byte key. Zeroized on drop.
#[derive(Clone)]
pub struct SealKey {
    bytes: [u8; KEY_SIZE],
}

impl SealKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Copy a key out of an arbitrary slice, rejecting anything that is not
    /// exactly [`KEY_SIZE`] bytes long.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = slice
            .try_into()
            .map_err(|_| SealpackError::InvalidKey(slice.len()))?;
        Ok(Self { bytes })
    }

    /// Use the UTF-8 bytes of a key string as the key.
    pub fn from_passphrase(key: &str) -> Result<Self> {
        Self::from_slice(key.as_bytes())
    }

    /// Decode a 64-digit hex string.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let decoded = Zeroizing::new(hex::decode(encoded.trim())?);
        Self::from_slice(&decoded)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for SealKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for SealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
