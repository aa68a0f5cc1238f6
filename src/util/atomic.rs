//! Atomic report writing via tempfile + rename.
//!
//! Writes into a [`tempfile::NamedTempFile`] next to the target, then
//! persists it over the target path, so a reader never sees a half-written
//! report.

use std::io::Write;
use std::path::Path;

use crate::error::{AlignError, AlignResult};

/// Atomically write `content` to `path`.
///
/// A bare file name is written relative to the current directory.
///
/// # Errors
///
/// Returns [`AlignError::Io`] if the temp file cannot be created, written
/// or renamed over `path`.
pub fn atomic_write(path: &Path, content: &str) -> AlignResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let io_err = |source| AlignError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}
