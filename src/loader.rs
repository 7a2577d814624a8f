//! File content loading.
//!
//! The loader is the one external collaborator of the comparison core:
//! given a path it returns the file's full byte content or fails with a
//! per-file error. The core never retries or caches a load; an unreadable
//! file is unrecoverable for the work unit that needed it and irrelevant
//! to every other unit.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bytesize::ByteSize;

/// Errors that can occur while loading a file's content.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Source of raw file content for comparison workers.
///
/// Implement this trait to substitute the filesystem in tests. Workers hold
/// the loader behind `Arc<dyn ContentLoader>`, so implementations must be
/// shareable across threads.
pub trait ContentLoader: Send + Sync {
    /// Read the full content of the file at `path`.
    fn load(&self, path: &Path) -> Result<Vec<u8>, LoadError>;
}

/// Filesystem-backed loader.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl ContentLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        match std::fs::read(path) {
            Ok(content) => {
                log::debug!(
                    "Read {} ({})",
                    path.display(),
                    ByteSize(content.len() as u64)
                );
                Ok(content)
            }
            Err(e) => Err(match e.kind() {
                ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
                ErrorKind::PermissionDenied => LoadError::PermissionDenied(path.to_path_buf()),
                _ => LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                },
            }),
        }
    }
}
