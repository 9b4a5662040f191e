/// Data model for a single scan.
///
/// Re-exports the per-entry record and the append-only result list.
pub mod entry;
pub mod scan_result;

pub use entry::EntryRecord;
pub use scan_result::ScanResult;
