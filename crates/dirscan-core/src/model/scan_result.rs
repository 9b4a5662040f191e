/// Append-only list of records produced by one scan.
///
/// Insertion order is discovery order: a directory's own record precedes
/// every record found beneath it. Order between siblings is whatever the
/// filesystem yields and must not be relied upon.
use super::entry::EntryRecord;
use crate::error::ScanError;

#[derive(Debug, Default)]
pub struct ScanResult {
    records: Vec<EntryRecord>,
    errors: Vec<ScanError>,
}

impl ScanResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records are never removed or modified once pushed.
    pub(crate) fn push(&mut self, record: EntryRecord) {
        self.records.push(record);
    }

    /// Remember a contained failure.
    pub(crate) fn push_error(&mut self, error: ScanError) {
        self.errors.push(error);
    }

    /// All records in discovery order.
    pub fn records(&self) -> &[EntryRecord] {
        &self.records
    }

    /// Failures encountered during the scan, in the order they occurred.
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if no records were collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `true` if at least one entry or directory could not be read, so the
    /// result may be smaller than the tree on disk.
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Iterate records in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, EntryRecord> {
        self.records.iter()
    }

    /// Consume the result, keeping only the records.
    pub fn into_records(self) -> Vec<EntryRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a EntryRecord;
    type IntoIter = std::slice::Iter<'a, EntryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
