//! dirscan — directory scanner with extension statistics.
//!
//! Thin binary entry point. Scanning lives in `dirscan-core`, log routing
//! and report rendering in `dirscan-report`.

mod cli;

use clap::Parser;
use dirscan_core::clock::{DateTimeInfo, SystemClock};
use dirscan_report::ScanSummary;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    dirscan_report::logging::init(&cli.log_config())?;

    let options = cli.scan_options();
    let scanned_at = DateTimeInfo::now(&SystemClock);

    // Failures inside the tree are contained and logged by the scanner; the
    // process still reports and exits 0.
    let result = dirscan_core::scan(&cli.directory, options);
    let aggregate = dirscan_core::aggregate(&result);

    if result.is_partial() {
        tracing::warn!(
            "Scan of {} is incomplete: {} entries or directories could not be read",
            cli.directory.display(),
            result.errors().len()
        );
    }

    let summary = ScanSummary::new(
        &cli.directory,
        options,
        &result,
        &aggregate,
        &cli.log,
        scanned_at,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dirscan_report::render(cli.format, &mut out, &summary, &result)?;

    Ok(())
}
