/// Scan failures.
///
/// None of these ever escape [`crate::scan`]: each one is logged where it
/// happens and kept in the `ScanResult` so callers can tell a partial scan
/// from a complete one.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory.
    #[error("path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// An enumerated entry vanished or could not be stat'ed before it was classified.
    #[error("cannot classify {}: {source}", path.display())]
    EntryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Listing the children of one directory failed (e.g. access denied).
    #[error("cannot read directory {}: {message}", path.display())]
    ReadDir { path: PathBuf, message: String },
}

impl ScanError {
    /// The path the failure is attributed to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotADirectory { path }
            | Self::EntryUnreadable { path, .. }
            | Self::ReadDir { path, .. } => path,
        }
    }
}
