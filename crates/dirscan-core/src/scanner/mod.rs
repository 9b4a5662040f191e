/// Scanner module — classifies entries and walks directory trees.
///
/// - [`classify`] turns one enumerated path into an [`EntryRecord`].
/// - [`walk`] drives a serial, depth-first `jwalk` traversal and feeds every
///   child through the classifier.
///
/// [`scan`] is the only entry point callers need. It never fails: every
/// problem is logged, kept in [`ScanResult::errors`], and contained to the
/// single entry or directory where it happened.
///
/// [`EntryRecord`]: crate::model::EntryRecord
pub mod classify;
pub mod walk;

use crate::error::ScanError;
use crate::model::ScanResult;
use std::path::Path;
use tracing::{error, info};

/// Traversal policy for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into subdirectories instead of listing only the root's children.
    pub recursive: bool,
}

impl ScanOptions {
    /// Immediate children of the root only.
    pub const fn flat() -> Self {
        Self { recursive: false }
    }

    /// The whole tree beneath the root.
    pub const fn recursive() -> Self {
        Self { recursive: true }
    }

    /// Human-readable mode name used in reports.
    pub fn mode_label(self) -> &'static str {
        if self.recursive {
            "recursive"
        } else {
            "flat"
        }
    }
}

/// Scan `root` and return every entry found beneath it.
///
/// The root itself is never part of the result. If `root` is not a directory
/// the result is empty and carries a single [`ScanError::NotADirectory`].
pub fn scan(root: &Path, options: ScanOptions) -> ScanResult {
    info!("Starting {} scan of directory: {}", options.mode_label(), root.display());

    let mut result = ScanResult::new();

    if !root.is_dir() {
        record_error(
            &mut result,
            ScanError::NotADirectory {
                path: root.to_path_buf(),
            },
        );
        return result;
    }

    walk::walk_tree(root, options, &mut result);

    info!(
        "Finished scanning directory: {} ({} objects, {} errors)",
        root.display(),
        result.len(),
        result.errors().len()
    );
    result
}

/// Log a contained failure and keep it with the result.
pub(crate) fn record_error(result: &mut ScanResult, err: ScanError) {
    error!("{err}");
    result.push_error(err);
}
