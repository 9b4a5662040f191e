/// dirscan core — entry classification, tree walking, and aggregation.
///
/// This crate contains all scanning logic with no terminal or log-sink code.
/// Events are emitted through `tracing`; the binary decides where they go.
///
/// # Modules
///
/// - [`model`] — `EntryRecord` and the append-only `ScanResult`.
/// - [`scanner`] — Entry classifier and the depth-first tree walker.
/// - [`analysis`] — Post-scan aggregation (kind counts, extension histogram).
/// - [`clock`] — Wall-clock collaborator used for timestamps.
/// - [`error`] — Per-entry and per-directory scan failures.
pub mod analysis;
pub mod clock;
pub mod error;
pub mod model;
pub mod scanner;

pub use analysis::{aggregate, Aggregate, ExtensionCount, ExtensionHistogram};
pub use error::ScanError;
pub use model::{EntryRecord, ScanResult};
pub use scanner::{scan, ScanOptions};
