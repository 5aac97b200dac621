//! File-system collaborator: directory creation and file writes with a typed
//! failure taxonomy.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Disk failure surfaced for directory creation and file writes. The only
/// locally recovered case is a pre-existing directory, which is success.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("path not found: {}", path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Creates `path` as a directory. A pre-existing directory is success; the
/// parent must already exist.
pub fn create_directory(path: &Path) -> Result<(), FsError> {
    match fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "directory already exists");
            Ok(())
        }
        Err(error) => Err(classify(path, error)),
    }
}

/// Writes `data` to `path`, replacing any existing file.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), FsError> {
    fs::write(path, data).map_err(|error| classify(path, error))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}

pub(crate) fn classify(path: &Path, source: io::Error) -> FsError {
    let path = path.to_path_buf();
    match source.kind() {
        io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path, source },
        io::ErrorKind::NotFound => FsError::PathNotFound { path, source },
        _ => FsError::Other { path, source },
    }
}
