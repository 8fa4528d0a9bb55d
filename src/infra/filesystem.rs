//! Filesystem operations
//!
//! Byte-level read, write, delete and existence checks on resolved paths.
//! Each call opens and releases its own handles.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{DocumentError, Operation};

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), DocumentError> {
    fs::create_dir_all(path).map_err(|e| DocumentError::Io {
        operation: Operation::CreateDir,
        path: path.to_path_buf(),
        error: e,
    })
}

/// Replace the file at `path` with `bytes`
///
/// The bytes go to a temporary file in the same directory, which is synced
/// and then renamed over the target. Readers see either the old or the new
/// contents. The parent directory must already exist.
///
/// An existing file keeps its permissions; a new file gets the process
/// umask default. A symlink is followed and its target is replaced, so the
/// link stays in place. Dangling links are replaced by a regular file.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), DocumentError> {
    let write_error = |error: io::Error| DocumentError::Io {
        operation: Operation::Write,
        path: path.to_path_buf(),
        error,
    };

    let target = resolve_symlink(path);
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut temp = builder.tempfile_in(parent).map_err(write_error)?;
    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_error)?;
    }
    temp.write_all(bytes).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;
    temp.persist(&target).map_err(|e| write_error(e.error))?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), target.display());
    Ok(())
}

/// Follow a symlink at `path` to an existing target
fn resolve_symlink(path: &Path) -> PathBuf {
    if path.is_symlink() {
        if let Ok(target) = fs::canonicalize(path) {
            return target;
        }
    }
    path.to_path_buf()
}

/// Read the whole file at `path`
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, DocumentError> {
    tracing::debug!("Reading data from {}", path.display());
    fs::read(path).map_err(|e| map_io_error(Operation::Read, path, e))
}

/// Check whether a regular file exists at `path`
///
/// Never fails: paths that cannot be inspected are reported as absent.
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Remove the file at `path`
pub fn remove_file(path: &Path) -> Result<(), DocumentError> {
    fs::remove_file(path).map_err(|e| map_io_error(Operation::Delete, path, e))?;
    tracing::debug!("Deleted {}", path.display());
    Ok(())
}

fn map_io_error(operation: Operation, path: &Path, error: io::Error) -> DocumentError {
    if error.kind() == io::ErrorKind::NotFound {
        DocumentError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        DocumentError::Io {
            operation,
            path: path.to_path_buf(),
            error,
        }
    }
}
