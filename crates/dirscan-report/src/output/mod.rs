/// Output renderers for a finished scan.
///
/// Everything here writes to a caller-supplied `Write`, normally stdout.
/// Log lines never go through these renderers.
pub mod csv_rows;
pub mod json;
pub mod text;

use crate::summary::ScanSummary;
use clap::ValueEnum;
use dirscan_core::ScanResult;
use std::io::Write;

/// Output format for the scan report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Plain,
    /// Summary and every record as one JSON document
    Json,
    /// One CSV row per record
    Csv,
}

/// Render `summary` (and, for machine formats, the records) to `out`.
pub fn render<W: Write>(
    format: OutputFormat,
    out: &mut W,
    summary: &ScanSummary,
    result: &ScanResult,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => text::write_summary(out, summary)?,
        OutputFormat::Json => json::write_report(out, summary, result)?,
        OutputFormat::Csv => csv_rows::write_records(out, result)?,
    }
    out.flush()?;
    Ok(())
}
