/// dirscan reporting — everything that turns a finished scan into output.
///
/// Scanning lives in `dirscan-core`; this crate decides where log events go
/// and how results are rendered.
///
/// - [`logging`] — severity-band routing of `tracing` events to sinks.
/// - [`summary`] — the report model built from a scan and its aggregate.
/// - [`output`] — plain, JSON and CSV renderers.
pub mod logging;
pub mod output;
pub mod summary;

pub use logging::LogConfig;
pub use output::{render, OutputFormat};
pub use summary::ScanSummary;
