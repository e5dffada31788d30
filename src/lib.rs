//! Sealpack - pack files into one archive and seal it with AES-256-GCM
//!
//! The input files are written into a ZIP archive in memory, and the
//! archive is then encrypted into a single self-contained blob:
//!
//! ```text
//! Files → ZIP archive → AES-256-GCM → nonce || ciphertext || tag
//! ```
//!
//! - **Archive**: one entry per input path, in order, named by the path
//!   string verbatim
//! - **Seal**: fresh 96-bit random nonce per call, no associated data
//! - **Open**: splits off the nonce and verifies the tag; a wrong key and a
//!   tampered blob are reported identically
//!
//! ## Example
//!
//! ```no_run
//! use sealpack::cli::{open_file, seal_files, OpenOptions, SealOptions};
//! use sealpack::SealKey;
//! use std::path::{Path, PathBuf};
//!
//! let key = SealKey::from_passphrase("01234567890123456789012345678901").unwrap();
//!
//! // Archive and seal
//! let seal_opts = SealOptions { key: key.clone() };
//! seal_files(
//!     &[PathBuf::from("notes.txt")],
//!     Path::new("backup.zip.aes"),
//!     &seal_opts,
//! ).unwrap();
//!
//! // Recover the archive
//! let open_opts = OpenOptions { key };
//! open_file(
//!     Path::new("backup.zip.aes"),
//!     Path::new("backup.zip"),
//!     &open_opts,
//! ).unwrap();
//! ```

pub mod archive;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod files;
pub mod key;

pub use archive::{build_archive, build_archive_with_entries, Archive, ArchiveEntry};
pub use cipher::{open, open_with, seal, seal_with, SealedBlob, NONCE_SIZE, TAG_SIZE};
pub use error::{Result, SealpackError};
pub use key::{SealKey, KEY_SIZE};
