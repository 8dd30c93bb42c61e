use std::{io, path::PathBuf};
use thiserror::Error;

/// Failure of the OS launcher for a file.
#[derive(Debug, Error)]
#[error("could not open {}: {source}", .path.display())]
pub struct OpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum BrowseError {
    /// The path is missing or cannot be listed.
    #[error("cannot access {}: {source}", .path.display())]
    NotAccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Open(#[from] OpenError),
}

impl BrowseError {
    pub fn not_accessible(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BrowseError::NotAccessible {
            path: path.into(),
            source,
        }
    }
}

pub type BrowseResult<T> = Result<T, BrowseError>;
