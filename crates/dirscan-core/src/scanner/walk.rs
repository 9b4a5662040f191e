/// Depth-first tree walker built on `jwalk`.
///
/// `jwalk` runs in [`Parallelism::Serial`] mode so the whole walk happens on
/// the calling thread. It keeps its own queue of pending directories rather
/// than recursing, so deep trees cost heap, not stack. Each directory handle
/// is closed by `jwalk` as soon as that directory has been listed, on success
/// and on error alike.
///
/// # Ordering
///
/// Entries arrive depth-first: a directory is yielded before anything inside
/// it, and its whole subtree is yielded before its next sibling. Siblings are
/// not sorted.
///
/// # Read failures
///
/// `jwalk` lists a directory just before yielding that directory's own entry
/// and parks any failure in [`DirEntry::read_children_error`] instead of
/// yielding an `Err`. That field is checked on every entry, the root included.
///
/// # Links
///
/// In recursive mode symlinks are followed, so a link to a directory is
/// recorded as a directory and its contents are listed under the link's path.
/// Every directory listing carries the canonical paths of the directories
/// above it; a link that resolves to one of those is recorded but not
/// descended, and the cycle is kept as a [`ScanError::ReadDir`]. Flat scans
/// never follow links.
///
/// [`Parallelism::Serial`]: jwalk::Parallelism::Serial
/// [`DirEntry::read_children_error`]: jwalk::DirEntry::read_children_error
use super::classify::{base_name, classify};
use super::{record_error, ScanOptions};
use crate::error::ScanError;
use crate::model::{EntryRecord, ScanResult};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Per-listing state: canonical ancestors of the directory being read.
/// Per-entry state: `true` when the entry closes a directory cycle.
type WalkState = (Vec<PathBuf>, bool);

type Entry = jwalk::DirEntry<WalkState>;

/// Walk `root` and append every entry below it to `result`.
///
/// `root` must already be known to be a directory.
pub fn walk_tree(root: &Path, options: ScanOptions, result: &mut ScanResult) {
    let mut walker = jwalk::WalkDirGeneric::<WalkState>::new(root)
        .skip_hidden(false)
        .follow_links(options.recursive)
        .sort(false)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(mark_cycles);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    // Directories whose own classification failed. Anything beneath them is
    // dropped so no record ever appears without its parent's record. Children
    // of a skipped directory that are directories themselves join the set, so
    // checking the immediate parent is enough.
    let mut skipped: HashSet<PathBuf> = HashSet::new();

    for entry_result in walker {
        let mut entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                record_failed_entry(root, err, &skipped, result);
                continue;
            }
        };

        let path = entry.path();

        if path != root && skipped.contains(entry.parent_path()) {
            if entry.file_type().is_dir() {
                skipped.insert(path);
            }
            continue;
        }

        if let Some(err) = entry.read_children_error.take() {
            let path = err.path().map_or_else(|| path.clone(), Path::to_path_buf);
            record_error(
                result,
                ScanError::ReadDir {
                    path,
                    message: io_message(&err),
                },
            );
        }

        // Skip the root itself.
        if path == root {
            continue;
        }

        let parent_directory = base_name(entry.parent_path());

        let record = match classify(&path, &parent_directory) {
            Ok(record) => record,
            Err(err) => {
                if entry.file_type().is_dir() {
                    skipped.insert(path);
                }
                record_error(result, err);
                continue;
            }
        };

        let descending = options.recursive && entry.read_children_path.is_some();
        log_record(&record, &path, descending);
        result.push(record);

        if entry.client_state {
            record_cycle(&path, result);
        }
    }
}

/// `process_read_dir` hook: extend the ancestor chain with the directory just
/// listed and stop descent into any followed link that points back into it.
fn mark_cycles(
    depth: Option<usize>,
    dir: &Path,
    ancestors: &mut Vec<PathBuf>,
    children: &mut Vec<jwalk::Result<Entry>>,
) {
    // `None` is the pass over the root entry itself; nothing has been listed yet.
    if depth.is_none() {
        return;
    }
    if let Ok(canonical) = fs::canonicalize(dir) {
        ancestors.push(canonical);
    }

    for child in children.iter_mut().flatten() {
        if child.read_children_path.is_none() || !child.path_is_symlink() {
            continue;
        }
        let Ok(target) = fs::canonicalize(child.path()) else {
            continue;
        };
        if ancestors.contains(&target) {
            child.read_children_path = None;
            child.client_state = true;
        }
    }
}

/// Handle an entry `jwalk` could not turn into a `DirEntry`.
///
/// With links followed this covers dangling links and the cycles `jwalk`
/// detects itself; both still name a real entry, so it is classified like any
/// other. A cycle keeps its directory record and adds a contained error.
fn record_failed_entry(
    root: &Path,
    err: jwalk::Error,
    skipped: &HashSet<PathBuf>,
    result: &mut ScanResult,
) {
    let Some(path) = err.path().map(Path::to_path_buf).filter(|p| p != root) else {
        record_error(
            result,
            ScanError::ReadDir {
                path: root.to_path_buf(),
                message: io_message(&err),
            },
        );
        return;
    };

    let parent = path.parent().unwrap_or(root);
    if skipped.contains(parent) {
        return;
    }

    match classify(&path, &base_name(parent)) {
        Ok(record) => {
            let is_directory = record.is_directory;
            log_record(&record, &path, false);
            result.push(record);
            if err.loop_ancestor().is_some() {
                record_cycle(&path, result);
            } else if is_directory {
                record_error(
                    result,
                    ScanError::ReadDir {
                        path,
                        message: io_message(&err),
                    },
                );
            }
        }
        Err(classify_err) => record_error(result, classify_err),
    }
}

fn log_record(record: &EntryRecord, path: &Path, descending: bool) {
    if record.is_directory {
        info!("Found directory: {}", path.display());
        if descending {
            info!("Descending into directory: {}", path.display());
        }
    } else {
        info!(
            "Found file: {} (name: {}, extension: {})",
            path.display(),
            record.name,
            record.extension
        );
    }
    debug!("Recorded object: {record:?}");
}

fn record_cycle(path: &Path, result: &mut ScanResult) {
    record_error(
        result,
        ScanError::ReadDir {
            path: path.to_path_buf(),
            message: "link resolves to an ancestor directory; not descended".to_owned(),
        },
    );
}

fn io_message(err: &jwalk::Error) -> String {
    err.io_error()
        .map(ToString::to_string)
        .unwrap_or_else(|| err.to_string())
}
