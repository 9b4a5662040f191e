/// JSON report: the summary fields plus every record.
use crate::summary::ScanSummary;
use dirscan_core::{EntryRecord, ScanResult};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a ScanSummary,
    records: &'a [EntryRecord],
}

/// Write one pretty-printed JSON document followed by a newline.
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &ScanSummary,
    result: &ScanResult,
) -> serde_json::Result<()> {
    let report = JsonReport {
        summary,
        records: result.records(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
