pub mod plan_io;

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Writes `content` to `path` via a temporary file in the same directory,
/// so a crash mid-write never leaves a truncated plan on disk. On
/// platforms where rename refuses to replace an existing file, the old
/// file is removed and the rename retried.
pub(crate) fn atomic_write_string(path: &Path, content: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;

    match staged.persist(path) {
        Ok(_) => Ok(()),
        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
            std::fs::remove_file(path)?;
            err.file.persist(path).map(|_| ()).map_err(|e| e.error)
        }
        Err(err) => Err(err.error),
    }
}
