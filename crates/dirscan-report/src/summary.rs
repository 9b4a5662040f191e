/// The report model for one scan.
///
/// Built once after the walk and aggregation complete, then handed to a
/// renderer in [`crate::output`].
use dirscan_core::clock::DateTimeInfo;
use dirscan_core::{Aggregate, ExtensionCount, ScanOptions, ScanResult};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    /// Scan root as given on the command line.
    pub path: String,
    /// `"recursive"` or `"flat"`.
    pub mode: &'static str,
    pub scanned_at: DateTimeInfo,
    pub total: u64,
    pub log_file: String,
    pub directories: u64,
    pub files: u64,
    /// Entries or directories that could not be read.
    pub errors: u64,
    /// Sorted by descending count, ties by extension.
    pub extensions: Vec<ExtensionCount>,
}

impl ScanSummary {
    pub fn new(
        root: &Path,
        options: ScanOptions,
        result: &ScanResult,
        aggregate: &Aggregate,
        log_file: &Path,
        scanned_at: DateTimeInfo,
    ) -> Self {
        Self {
            path: root.display().to_string(),
            mode: options.mode_label(),
            scanned_at,
            total: result.len() as u64,
            log_file: log_file.display().to_string(),
            directories: aggregate.directory_count,
            files: aggregate.file_count,
            errors: result.errors().len() as u64,
            extensions: aggregate.histogram.sorted(),
        }
    }
}
