/// Plain-text console summary.
use crate::summary::ScanSummary;
use std::io::{self, Write};

/// Write the human-readable summary.
///
/// The extension section is omitted when no file carried an extension; the
/// error line only appears when something could not be read.
pub fn write_summary<W: Write>(out: &mut W, summary: &ScanSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Scan results for directory: {}", summary.path)?;
    writeln!(out, "Scan mode: {}", summary.mode)?;
    writeln!(out, "Scanned at: {}", summary.scanned_at)?;
    writeln!(out, "Total objects: {}", summary.total)?;
    writeln!(out, "Log saved to: {}", summary.log_file)?;
    writeln!(out, "Directories: {}", summary.directories)?;
    writeln!(out, "Files: {}", summary.files)?;
    if summary.errors > 0 {
        writeln!(
            out,
            "Errors: {} (some entries could not be read, see the log)",
            summary.errors
        )?;
    }

    if !summary.extensions.is_empty() {
        writeln!(out)?;
        writeln!(out, "File extensions found:")?;
        for row in &summary.extensions {
            writeln!(out, " - {}: {} files", row.extension, row.count)?;
        }
    }
    Ok(())
}
