use std::path::PathBuf;

use clap::Parser;
use dirscan_core::ScanOptions;
use dirscan_report::logging::DEFAULT_LOG_FILE;
use dirscan_report::{LogConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "dirscan")]
#[command(author, version, about = "Scan a directory and report what it contains")]
#[command(long_about = "Scan a directory, classify every entry as a file or a directory, \
    and report counts and file extension statistics.\n\n\
    The exit code is 0 even when parts of the tree could not be read; \
    check the log (or the `errors` field of --format json) for failures.")]
pub struct Cli {
    /// Directory to scan
    pub directory: PathBuf,

    /// Log file path
    #[arg(long = "log", value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// Scan subdirectories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Send warnings and errors to this file; --log then keeps only debug/info lines
    #[arg(long, value_name = "PATH")]
    pub split_log: Option<PathBuf>,

    /// Also log every recorded object (DEBUG level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not echo log lines to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            recursive: self.recursive,
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            log_file: self.log.clone(),
            split_file: self.split_log.clone(),
            verbose: self.verbose,
            console: !self.quiet,
        }
    }
}
