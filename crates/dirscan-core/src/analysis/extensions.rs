/// Extension frequency histogram.
///
/// Keys are extensions exactly as found on disk; `txt` and `TXT` are counted
/// separately.
use crate::model::EntryRecord;
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;

/// Mapping from extension to the number of files carrying it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtensionHistogram {
    counts: HashMap<CompactString, u64>,
}

/// One histogram row, as reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    pub extension: CompactString,
    pub count: u64,
}

impl ExtensionHistogram {
    /// Build a histogram from records that carry a non-empty extension.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a EntryRecord>) -> Self {
        let mut counts: HashMap<CompactString, u64> = HashMap::new();
        for record in records {
            if record.has_extension() {
                *counts.entry(record.extension.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `extension`, or 0 if it was never seen.
    pub fn get(&self, extension: &str) -> u64 {
        self.counts.get(extension).copied().unwrap_or(0)
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rows sorted by descending count. Equal counts are ordered by
    /// ascending byte-wise extension, so `TXT` comes before `txt`.
    pub fn sorted(&self) -> Vec<ExtensionCount> {
        let mut rows: Vec<ExtensionCount> = self
            .counts
            .iter()
            .map(|(extension, &count)| ExtensionCount {
                extension: extension.clone(),
                count,
            })
            .collect();
        rows.sort_unstable_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.extension.cmp(&b.extension))
        });
        rows
    }
}
