/// One classified filesystem entry.
///
/// Records are created once by the classifier and never mutated afterwards;
/// a [`ScanResult`](super::ScanResult) only hands out shared references.
use compact_str::CompactString;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntryRecord {
    /// Base name without the extension for files; the full base name for directories.
    pub name: CompactString,

    /// Suffix after the final `.`, without the dot and with its case preserved.
    /// Always empty for directories.
    pub extension: CompactString,

    /// `true` if the entry is (or resolves to) a directory.
    pub is_directory: bool,

    /// Base name of the directory that was being listed when this entry was found.
    pub parent_directory: CompactString,

    /// Scan root joined with every path component down to this entry.
    /// Serialized lossily: bytes that are not valid UTF-8 become `U+FFFD`.
    #[serde(serialize_with = "serialize_lossy_path")]
    pub full_path: PathBuf,
}

fn serialize_lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl EntryRecord {
    /// Create a directory record. Directories never carry an extension.
    pub fn directory(
        name: impl Into<CompactString>,
        parent_directory: impl Into<CompactString>,
        full_path: PathBuf,
    ) -> Self {
        Self {
            name: name.into(),
            extension: CompactString::default(),
            is_directory: true,
            parent_directory: parent_directory.into(),
            full_path,
        }
    }

    /// Create a file record from an already-split name and extension.
    pub fn file(
        name: impl Into<CompactString>,
        extension: impl Into<CompactString>,
        parent_directory: impl Into<CompactString>,
        full_path: PathBuf,
    ) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            is_directory: false,
            parent_directory: parent_directory.into(),
            full_path,
        }
    }

    /// `true` if this record contributes to the extension histogram.
    #[inline]
    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }
}
