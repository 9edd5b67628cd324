use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// What kind of filesystem object an operation expected to find.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Directory => f.write_str("directory"),
            PathKind::File => f.write_str("regular file"),
        }
    }
}

/// Errors surfaced by catalog operations. There is no partial result: a call
/// either returns everything it found or one of these.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The path does not exist or is not the kind of object the call needs.
    #[error("invalid path {}: not an existing {expected}", .path.display())]
    InvalidPath { path: PathBuf, expected: PathKind },

    /// Permission denied or another I/O failure while statting or walking.
    #[error("cannot access {}: {source}", .path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `recently_added` only accepts a finite, positive number of days.
    #[error("invalid recently-added window: {days} days (must be greater than zero)")]
    InvalidWindow { days: f64 },
}

impl CatalogError {
    pub(crate) fn invalid_path(path: impl Into<PathBuf>, expected: PathKind) -> Self {
        CatalogError::InvalidPath {
            path: path.into(),
            expected,
        }
    }

    pub(crate) fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CatalogError::FilesystemAccess {
            path: path.into(),
            source,
        }
    }

    /// Map a failed `stat` on a path the caller handed us. A missing path (or
    /// a path running through a non-directory) is the caller's mistake, not an
    /// access failure.
    pub(crate) fn from_stat(path: impl Into<PathBuf>, expected: PathKind, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                Self::invalid_path(path, expected)
            }
            _ => Self::access(path, err),
        }
    }

    pub(crate) fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        Self::access(path, io::Error::from(err))
    }
}
