use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapdocError {
    /// Reading a file's content or writing the document failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Traversal failed; the walk aborts rather than return a partial
    /// listing.
    #[error("walk failed at {path}: {source}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SnapdocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapdocError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn walk(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapdocError::Walk {
            path: path.into(),
            source,
        }
    }
}
