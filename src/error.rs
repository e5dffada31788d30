use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SealpackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Path is not valid UTF-8 and cannot be stored as an entry name: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("No input files given")]
    NoInputs,

    #[error("Invalid key: must be exactly 32 bytes, got {0}")]
    InvalidKey(usize),

    #[error("Invalid hex key: {0}")]
    InvalidKeyHex(#[from] hex::FromHexError),

    #[error("Malformed sealed blob: {0} bytes is shorter than the 12-byte nonce")]
    MalformedInput(usize),

    #[error("Authentication failed: wrong key or corrupted data")]
    AuthenticationFailed,

    #[error("Encryption failed for a {0}-byte payload")]
    EncryptionFailed(usize),

    #[error("Random source failure: {0}")]
    Random(#[from] rand::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, SealpackError>;
