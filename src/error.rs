//! Fatal error types
//!
//! Only failures that end the run live here. Per-entry problems found while
//! walking (unreadable children, broken symlinks) are skipped by the builder
//! and never surface as a `TreeError`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// The target path does not exist.
    #[error("directory '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The target exists but could not be inspected or listed.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a report (HTML file, JSON dump) failed.
    #[error("cannot write '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid sort method '{0}', use 'name' or 'size'")]
    InvalidSortKey(String),
}

impl TreeError {
    /// Wrap an I/O error for `path`, mapping `NotFound` to its own variant.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            TreeError::NotFound(path)
        } else {
            TreeError::Io { path, source }
        }
    }
}
