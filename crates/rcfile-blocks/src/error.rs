//! Error types for rcfile-blocks

use std::path::PathBuf;

/// Result type for rcfile-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling a managed block
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to manage {path}: not a regular file")]
    NotAFile { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
