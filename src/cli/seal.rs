use crate::archive::build_archive_with_entries;
use crate::cipher::seal_with;
use crate::error::Result;
use crate::files::write_atomic;
use crate::key::SealKey;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output name used when none is given
pub const DEFAULT_SEALED_OUTPUT: &str = "backup.zip.aes";

/// Options for the seal command
#[derive(Debug, Clone)]
pub struct SealOptions {
    pub key: SealKey,
}

/// What a seal run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealSummary {
    pub entries: usize,
    pub archive_bytes: usize,
    pub sealed_bytes: usize,
}

/// Archive `inputs` and seal the archive into `output_path`
pub fn seal_files(
    inputs: &[PathBuf],
    output_path: &Path,
    options: &SealOptions,
) -> Result<SealSummary> {
    let archive = build_archive_with_entries(inputs)?;
    let sealed = seal_with(&options.key, &archive.bytes)?;

    write_atomic(output_path, &sealed)?;
    info!(
        entries = archive.entries.len(),
        archive_len = archive.bytes.len(),
        sealed_len = sealed.len(),
        output = %output_path.display(),
        "sealed archive"
    );

    Ok(SealSummary {
        entries: archive.entries.len(),
        archive_bytes: archive.bytes.len(),
        sealed_bytes: sealed.len(),
    })
}
