/// Rendering tests.
///
/// A real tree is scanned with `dirscan-core`, summarised, and pushed through
/// each renderer into an in-memory buffer. The clock is pinned so the
/// "scanned at" details are deterministic.
use chrono::NaiveDate;
use dirscan_core::clock::{DateTimeInfo, FixedClock};
use dirscan_core::{aggregate, scan, ScanOptions, ScanResult};
use dirscan_report::{render, OutputFormat, ScanSummary};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// ```text
/// root/
///   a.txt
///   b.TXT
///   readme
///   sub/
///     c.txt
/// ```
fn build_test_tree(root: &Path) {
    fs::write(root.join("a.txt"), b"a").unwrap();
    fs::write(root.join("b.TXT"), b"b").unwrap();
    fs::write(root.join("readme"), b"r").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("c.txt"), b"c").unwrap();
}

fn scanned_at() -> DateTimeInfo {
    let at = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 30, 5)
        .unwrap();
    DateTimeInfo::now(&FixedClock(at))
}

fn summarise(root: &Path, options: ScanOptions) -> (ScanSummary, ScanResult) {
    let result = scan(root, options);
    let agg = aggregate(&result);
    let summary = ScanSummary::new(
        root,
        options,
        &result,
        &agg,
        Path::new("directory_info.log"),
        scanned_at(),
    );
    (summary, result)
}

fn render_to_string(format: OutputFormat, summary: &ScanSummary, result: &ScanResult) -> String {
    let mut buf = Vec::new();
    render(format, &mut buf, summary, result).expect("render failed");
    String::from_utf8(buf).unwrap()
}

// ── Plain ────────────────────────────────────────────────────────────────────

#[test]
fn plain_summary_lists_counts_and_histogram() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());
    let (summary, result) = summarise(tmp.path(), ScanOptions::recursive());

    let text = render_to_string(OutputFormat::Plain, &summary, &result);

    assert!(text.contains(&format!("Scan results for directory: {}", tmp.path().display())));
    assert!(text.contains("Scan mode: recursive\n"));
    assert!(text.contains("Scanned at: 2024-01-01 09:30:05 (Monday, ISO week 1, day 001)\n"));
    assert!(text.contains("Total objects: 5\n"));
    assert!(text.contains("Log saved to: directory_info.log\n"));
    assert!(text.contains("Directories: 1\n"));
    assert!(text.contains("Files: 4\n"));
    assert!(!text.contains("Errors:"));
    assert!(text.ends_with("File extensions found:\n - txt: 2 files\n - TXT: 1 files\n"));
}

/// A failed scan still reports, with zero counts and no histogram.
#[test]
fn plain_summary_for_missing_root() {
    let tmp = TempDir::new().unwrap();
    let (summary, result) = summarise(&tmp.path().join("missing"), ScanOptions::flat());

    let text = render_to_string(OutputFormat::Plain, &summary, &result);

    assert!(text.contains("Scan mode: flat\n"));
    assert!(text.contains("Total objects: 0\n"));
    assert!(text.contains("Directories: 0\n"));
    assert!(text.contains("Files: 0\n"));
    assert!(text.contains("Errors: 1"));
    assert!(!text.contains("File extensions found:"));
}

// ── JSON ─────────────────────────────────────────────────────────────────────

#[test]
fn json_report_contains_summary_and_records() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());
    let (summary, result) = summarise(tmp.path(), ScanOptions::flat());

    let json = render_to_string(OutputFormat::Json, &summary, &result);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(value["mode"], "flat");
    assert_eq!(value["total"], 4);
    assert_eq!(value["directories"], 1);
    assert_eq!(value["files"], 3);
    assert_eq!(value["errors"], 0);
    assert_eq!(value["scanned_at"]["day_of_week"], "Monday");
    assert_eq!(value["extensions"][0]["extension"], "TXT");
    assert_eq!(value["extensions"][1]["extension"], "txt");

    let records = value["records"].as_array().expect("records array");
    assert_eq!(records.len(), 4);
    let sub = records
        .iter()
        .find(|r| r["name"] == "sub")
        .expect("sub record");
    assert_eq!(sub["is_directory"], true);
    assert_eq!(sub["extension"], "");
}

// ── CSV ──────────────────────────────────────────────────────────────────────

#[test]
fn csv_has_header_and_one_row_per_record() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());
    let (summary, result) = summarise(tmp.path(), ScanOptions::recursive());

    let csv = render_to_string(OutputFormat::Csv, &summary, &result);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "name,extension,is_directory,parent_directory,full_path"
    );
    assert_eq!(lines.len(), 1 + result.len());
    assert!(lines.iter().any(|l| l.starts_with("c,txt,false,sub,")));
    assert!(lines.iter().any(|l| l.starts_with("readme,,false,")));
}

#[test]
fn csv_for_empty_result_is_header_only() {
    let tmp = TempDir::new().unwrap();
    let (summary, result) = summarise(tmp.path(), ScanOptions::flat());

    let csv = render_to_string(OutputFormat::Csv, &summary, &result);
    assert_eq!(csv, "name,extension,is_directory,parent_directory,full_path\n");
}

// ── Non-UTF-8 names ──────────────────────────────────────────────────────────

/// Creates `root/bad\xff.txt`, a name that is not valid UTF-8.
#[cfg(target_os = "linux")]
fn non_utf8_tree(root: &Path) -> std::path::PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let path = root.join(OsStr::from_bytes(b"bad\xff.txt"));
    fs::write(&path, b"x").unwrap();
    path
}

#[cfg(target_os = "linux")]
#[test]
fn json_renders_non_utf8_path_lossily() {
    let tmp = TempDir::new().unwrap();
    non_utf8_tree(tmp.path());
    let (summary, result) = summarise(tmp.path(), ScanOptions::flat());

    let json = render_to_string(OutputFormat::Json, &summary, &result);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    let records = value["records"].as_array().expect("records array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "bad\u{FFFD}");
    assert_eq!(records[0]["extension"], "txt");
    let full_path = records[0]["full_path"].as_str().expect("string path");
    assert!(full_path.ends_with("bad\u{FFFD}.txt"), "{full_path}");
}

#[cfg(target_os = "linux")]
#[test]
fn csv_renders_non_utf8_path_lossily() {
    let tmp = TempDir::new().unwrap();
    non_utf8_tree(tmp.path());
    let (summary, result) = summarise(tmp.path(), ScanOptions::recursive());

    let csv = render_to_string(OutputFormat::Csv, &summary, &result);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("bad\u{FFFD},txt,false,"), "{}", lines[1]);
    assert!(lines[1].ends_with("bad\u{FFFD}.txt"), "{}", lines[1]);
}
