use crate::error::{Result, SealpackError};
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

fn map_open_error(path: &Path, err: std::io::Error) -> SealpackError {
    if err.kind() == ErrorKind::NotFound {
        SealpackError::NotFound(path.to_path_buf())
    } else {
        SealpackError::Io(err)
    }
}

/// Open an input file, reporting a missing file by name.
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| map_open_error(path, e))
}

/// Read a whole input file into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| map_open_error(path, e))
}

/// Write `data` to `path` so that `path` only ever holds a complete file.
///
/// The bytes go to a temporary file in the destination directory, which is
/// renamed over `path` once fully written and synced. On any failure the
/// temporary file is removed when it drops.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = parent_dir(path);
    let mut temp = NamedTempFile::new_in(&dir)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    debug!(temp = %temp.path().display(), dest = %path.display(), "persisting output");
    temp.persist(path).map_err(|e| SealpackError::Io(e.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
