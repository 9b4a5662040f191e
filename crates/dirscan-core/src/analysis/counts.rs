/// Kind counts and the extension histogram for one completed scan.
use super::extensions::ExtensionHistogram;
use crate::model::ScanResult;

/// Summary statistics derived from a `ScanResult`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub directory_count: u64,
    pub file_count: u64,
    pub histogram: ExtensionHistogram,
}

impl Aggregate {
    /// Total number of records counted. Always equals the result's length.
    pub fn total(&self) -> u64 {
        self.directory_count + self.file_count
    }
}

/// Count directories and files and build the extension histogram.
///
/// Directories and extensionless files add nothing to the histogram.
pub fn aggregate(result: &ScanResult) -> Aggregate {
    let directory_count = result.iter().filter(|r| r.is_directory).count() as u64;
    let file_count = result.len() as u64 - directory_count;

    Aggregate {
        directory_count,
        file_count,
        histogram: ExtensionHistogram::from_records(result),
    }
}
