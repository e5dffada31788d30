//! ZIP archive construction.
//!
//! Each input path becomes one entry, in input order, stored under the path
//! string exactly as given. Nothing is normalized, deduplicated or resolved.

use crate::error::{Result, SealpackError};
use crate::files::open_input;
use chrono::{DateTime, Datelike, Local, Timelike};
use std::fs::Metadata;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Entries at or above this size need ZIP64 extensions.
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Metadata recorded for one archived file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Stored name (the input path string, verbatim)
    pub name: String,
    /// Content size in bytes
    pub size: u64,
}

/// An in-memory archive together with the entries written into it
#[derive(Debug)]
pub struct Archive {
    pub bytes: Vec<u8>,
    pub entries: Vec<ArchiveEntry>,
}

/// Build a ZIP archive from `paths` and return its bytes.
pub fn build_archive<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<u8>> {
    Ok(build_archive_with_entries(paths)?.bytes)
}

/// Build a ZIP archive from `paths`, also reporting what went into it.
///
/// Aborts on the first path that cannot be opened or read; no partial
/// archive is returned.
pub fn build_archive_with_entries<P: AsRef<Path>>(paths: &[P]) -> Result<Archive> {
    if paths.is_empty() {
        return Err(SealpackError::NoInputs);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        entries.push(add_file(&mut writer, path.as_ref())?);
    }

    let bytes = writer.finish()?.into_inner();
    debug!(entries = entries.len(), archive_len = bytes.len(), "built archive");
    Ok(Archive { bytes, entries })
}

fn add_file<W: Write + Seek>(writer: &mut ZipWriter<W>, path: &Path) -> Result<ArchiveEntry> {
    let name = path
        .to_str()
        .ok_or_else(|| SealpackError::NonUtf8Path(path.to_path_buf()))?
        .to_string();

    let mut file = open_input(path)?;
    let metadata = file.metadata()?;
    if !metadata.is_file() {
        return Err(SealpackError::NotAFile(path.to_path_buf()));
    }

    writer.start_file(name.as_str(), entry_options(&metadata))?;
    let size = std::io::copy(&mut file, writer)?;
    debug!(name = %name, size, "added archive entry");

    Ok(ArchiveEntry { name, size })
}

fn entry_options(metadata: &Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(metadata.len() >= ZIP64_THRESHOLD)
        .last_modified_time(zip_time(metadata.modified().ok()));

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    options
}

/// Convert a modification time to an MS-DOS timestamp in local time.
/// Times the format cannot represent fall back to the 1980 epoch.
fn zip_time(modified: Option<SystemTime>) -> zip::DateTime {
    let Some(modified) = modified else {
        return zip::DateTime::default();
    };
    let local: DateTime<Local> = modified.into();

    let fields = (
        u16::try_from(local.year()),
        u8::try_from(local.month()),
        u8::try_from(local.day()),
        u8::try_from(local.hour()),
        u8::try_from(local.minute()),
        u8::try_from(local.second()),
    );
    match fields {
        (Ok(year), Ok(month), Ok(day), Ok(hour), Ok(minute), Ok(second)) => {
            zip::DateTime::from_date_and_time(year, month, day, hour, minute, second)
                .unwrap_or_default()
        }
        _ => zip::DateTime::default(),
    }
}
