/// Entry classifier — one stat per entry, one record out.
///
/// The classifier trusts that its input came from listing a readable
/// directory. The only call that can fail is the stat that decides
/// file-vs-directory; when it does, the walker skips that single entry.
use crate::error::ScanError;
use crate::model::EntryRecord;
use std::fs;
use std::io;
use std::path::Path;

/// Classify `path`, found while listing the directory named `parent_directory`.
pub fn classify(path: &Path, parent_directory: &str) -> Result<EntryRecord, ScanError> {
    let is_directory = match fs::metadata(path) {
        Ok(meta) => meta.is_dir(),
        // Dangling symlink: the link itself exists, its target does not.
        Err(err) if err.kind() == io::ErrorKind::NotFound && fs::symlink_metadata(path).is_ok() => {
            false
        }
        Err(source) => {
            return Err(ScanError::EntryUnreadable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let file_name = base_name(path);

    if is_directory {
        return Ok(EntryRecord::directory(
            file_name.as_str(),
            parent_directory,
            path.to_path_buf(),
        ));
    }

    let (name, extension) = split_extension(&file_name);
    Ok(EntryRecord::file(
        name,
        extension,
        parent_directory,
        path.to_path_buf(),
    ))
}

/// Split a file name into `(name, extension)` at its last `.`.
///
/// Leading dots belong to the name, so `.bashrc` has no extension. A trailing
/// dot yields an empty extension. Only the final suffix is stripped:
/// `a.tar.gz` becomes `("a.tar", "gz")`.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(offset) => {
            let dot = stem_start + offset;
            (&file_name[..dot], &file_name[dot + 1..])
        }
        None => (file_name, ""),
    }
}

/// Base name of `path`, falling back to the whole path for roots such as `/` or `.`.
pub fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // ── split_extension ─────────────────────────────────────────────────

    #[test]
    fn split_simple_extension() {
        assert_eq!(split_extension("a.txt"), ("a", "txt"));
    }

    #[test]
    fn split_keeps_case() {
        assert_eq!(split_extension("b.TXT"), ("b", "TXT"));
    }

    #[test]
    fn split_only_strips_last_suffix() {
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_extension("a..b"), ("a.", "b"));
    }

    #[test]
    fn split_without_dot_has_no_extension() {
        assert_eq!(split_extension("readme"), ("readme", ""));
    }

    /// Dotfiles are names, not extensions.
    #[test]
    fn split_leading_dots_are_not_separators() {
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
        assert_eq!(split_extension("..hidden"), ("..hidden", ""));
        assert_eq!(split_extension(".config.toml"), (".config", "toml"));
        assert_eq!(split_extension("..."), ("...", ""));
    }

    #[test]
    fn split_trailing_dot_gives_empty_extension() {
        assert_eq!(split_extension("file."), ("file", ""));
    }

    // ── base_name ───────────────────────────────────────────────────────

    #[test]
    fn base_name_of_nested_path() {
        assert_eq!(base_name(Path::new("root/sub/c.txt")), "c.txt");
        assert_eq!(base_name(Path::new("root/sub/")), "sub");
    }

    #[test]
    fn base_name_falls_back_to_full_path() {
        assert_eq!(base_name(Path::new(".")), ".");
    }

    // ── classify ────────────────────────────────────────────────────────

    #[test]
    fn classify_file_splits_name() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.md");
        fs::write(&path, b"x").unwrap();

        let record = classify(&path, "root").unwrap();
        assert_eq!(record.name, "notes");
        assert_eq!(record.extension, "md");
        assert!(!record.is_directory);
        assert_eq!(record.parent_directory, "root");
        assert_eq!(record.full_path, path);
    }

    /// Directory names are never split, even when they contain a dot.
    #[test]
    fn classify_directory_keeps_full_name() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("v1.2");
        fs::create_dir(&path).unwrap();

        let record = classify(&path, "root").unwrap();
        assert_eq!(record.name, "v1.2");
        assert_eq!(record.extension, "");
        assert!(record.is_directory);
    }

    #[test]
    fn classify_vanished_entry_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone.txt");

        let err = classify(&path, "root").unwrap_err();
        assert!(matches!(err, ScanError::EntryUnreadable { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn classify_dangling_symlink_as_file() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("broken.lnk");
        std::os::unix::fs::symlink(tmp.path().join("missing"), &link).unwrap();

        let record = classify(&link, "root").unwrap();
        assert!(!record.is_directory);
        assert_eq!(record.name, "broken");
        assert_eq!(record.extension, "lnk");
    }
}
