//! Atomic file output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::ExportError;

/// Writes `bytes` to `path`, replacing any existing file only once the new
/// content is fully on disk. Returns the number of bytes written.
///
/// The temp file lives in the destination directory so the final rename stays
/// on one filesystem. On failure the temp file is removed and `path` is left
/// untouched.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<u64, ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ExportError::io(path, e))?;
    debug!(tmp = %tmp.path().display(), "writing temp file");

    tmp.write_all(bytes).map_err(|e| ExportError::io(path, e))?;
    tmp.flush().map_err(|e| ExportError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| ExportError::io(path, e))?;
    tmp.persist(path).map_err(|e| ExportError::io(path, e.error))?;

    let written = bytes.len() as u64;
    info!(path = %path.display(), bytes = written, "output written");
    Ok(written)
}
