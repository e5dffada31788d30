use crate::cipher::{SealedBlob, NONCE_SIZE, TAG_SIZE};
use crate::error::Result;
use crate::files::read_input;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Key-less description of a sealed blob
#[derive(Debug, Clone, Serialize)]
pub struct BlobInfo {
    pub file: String,
    pub size: usize,
    pub cipher: &'static str,
    pub nonce: String,
    /// `None` when the blob is too short to hold a tag
    pub ciphertext_len: Option<usize>,
    pub tag: Option<String>,
    pub sha256: String,
}

/// Inspect a sealed blob without a key
pub fn blob_info(path: &Path) -> Result<BlobInfo> {
    let bytes = read_input(path)?;
    let blob = SealedBlob::parse(&bytes)?;

    Ok(BlobInfo {
        file: path.display().to_string(),
        size: bytes.len(),
        cipher: "AES-256-GCM",
        nonce: hex::encode(blob.nonce()),
        ciphertext_len: blob.ciphertext().map(<[u8]>::len),
        tag: blob.tag().map(hex::encode),
        sha256: hex::encode(Sha256::digest(&bytes)),
    })
}

/// Display information about a sealed blob
pub fn show_info(path: &Path, json: bool) -> Result<String> {
    let info = blob_info(path)?;
    if json {
        let mut output = serde_json::to_string_pretty(&info)?;
        output.push('\n');
        return Ok(output);
    }

    let mut output = String::new();
    output.push_str("Sealed Blob Information\n");
    output.push_str("=======================\n\n");

    output.push_str(&format!("File: {}\n", info.file));
    output.push_str(&format!("Size: {}\n", format_size(info.size as u64)));
    output.push_str(&format!("SHA-256: {}\n", info.sha256));
    output.push('\n');

    output.push_str("Layout:\n");
    output.push_str(&format!("  Cipher: {}\n", info.cipher));
    output.push_str(&format!("  Nonce ({} bytes): {}\n", NONCE_SIZE, info.nonce));
    match (info.ciphertext_len, &info.tag) {
        (Some(len), Some(tag)) => {
            output.push_str(&format!("  Ciphertext: {} bytes\n", len));
            output.push_str(&format!("  Tag ({} bytes): {}\n", TAG_SIZE, tag));
        }
        _ => {
            output.push_str(&format!(
                "  Truncated: fewer than {} bytes follow the nonce, cannot authenticate\n",
                TAG_SIZE
            ));
        }
    }

    Ok(output)
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::seal;
    use crate::error::SealpackError;
    use tempfile::tempdir;

    const KEY: &[u8; 32] = b"01234567890123456789012345678901";

    #[test]
    fn test_show_info() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.aes");
        let sealed = seal(KEY, &[0u8; 100]).unwrap();
        std::fs::write(&path, &sealed).unwrap();

        let info = show_info(&path, false).unwrap();
        assert!(info.contains("Cipher: AES-256-GCM"));
        assert!(info.contains(&format!("Nonce (12 bytes): {}", hex::encode(&sealed[..12]))));
        assert!(info.contains("Ciphertext: 100 bytes"));
        assert!(info.contains("Size: 128 B"));
    }

    #[test]
    fn test_show_info_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.aes");
        std::fs::write(&path, seal(KEY, b"abc").unwrap()).unwrap();

        let output = show_info(&path, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["size"], 31);
        assert_eq!(value["ciphertext_len"], 3);
        assert_eq!(value["tag"].as_str().unwrap().len(), 32);
        assert_eq!(value["sha256"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_show_info_truncated_tag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.aes");
        std::fs::write(&path, [0u8; 20]).unwrap();

        let info = blob_info(&path).unwrap();
        assert_eq!(info.ciphertext_len, None);
        assert!(show_info(&path, false).unwrap().contains("Truncated"));
    }

    #[test]
    fn test_show_info_shorter_than_nonce() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.aes");
        std::fs::write(&path, [0u8; 4]).unwrap();

        assert!(matches!(
            show_info(&path, false),
            Err(SealpackError::MalformedInput(4))
        ));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1048576), "1.0 MB");
    }
}
