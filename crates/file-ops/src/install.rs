//! Installing and clearing a single destination file.

use std::io;
use std::path::Path;

/// Copies `src` over `dest`, creating the destination directory if needed.
///
/// Returns the number of bytes copied.
pub fn install_file(src: &Path, dest: &Path) -> io::Result<u64> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let bytes = std::fs::copy(src, dest)?;
    tracing::debug!(src = %src.display(), dest = %dest.display(), bytes, "installed file");
    Ok(bytes)
}

/// Removes `path` if it exists.
///
/// Returns whether a file was removed. A missing file is not an error.
pub fn remove_if_present(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(file = %path.display(), "removed");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
