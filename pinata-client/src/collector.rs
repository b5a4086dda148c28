//! File collection for uploads.
//!
//! Turns a path into the ordered list of files a pin request uploads.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use pinata_core::error::{PinataError, Result};

/// Enumerates the files under a path.
///
/// Directories are walked depth-first with entries sorted by file name at
/// each level, so identical trees always yield the same order. Only regular
/// files are returned; symlinks inside a directory are not followed.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryCollector;

impl DirectoryCollector {
    /// Creates a collector.
    pub fn new() -> Self {
        Self
    }

    /// Returns the files to upload for `path`.
    ///
    /// A regular file yields itself. A directory yields every regular file
    /// beneath it, which may be none.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn collect(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PinataError::NotFound(path.to_path_buf()),
            _ => PinataError::Io(e),
        })?;

        if metadata.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }

        if !metadata.is_dir() {
            return Err(PinataError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a regular file or directory: {}", path.display()),
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(path).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        debug!(count = files.len(), "Collected files");
        Ok(files)
    }

    /// File name sent to the service for `file`, collected from `root`.
    ///
    /// A single file is sent under its own name. Files from a directory are
    /// sent as `<dir name>/<relative path>` with `/` separators, which gives
    /// the service one common root for the whole upload. Roots such as `.`
    /// or `site/..` are named after the directory they resolve to; only the
    /// filesystem root has no name.
    pub fn upload_name(&self, root: &Path, file: &Path) -> String {
        if root == file {
            return file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
        }

        let relative = file.strip_prefix(root).unwrap_or(file);
        let mut segments: Vec<String> = Vec::new();
        if let Some(dir_name) = root_name(root) {
            segments.push(dir_name);
        }
        segments.extend(relative.components().filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        }));

        segments.join("/")
    }
}

/// Name of the directory `root` refers to, resolving `.` and `..` on disk.
fn root_name(root: &Path) -> Option<String> {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            let resolved = root.canonicalize().ok()?;
            resolved.file_name().map(|n| n.to_string_lossy().into_owned())
        })
}

/// Keeps the underlying I/O error when traversal fails on the filesystem.
fn walk_error(e: walkdir::Error) -> PinataError {
    let message = e.to_string();
    match e.into_io_error() {
        Some(io) => PinataError::Io(io),
        None => PinataError::Walk(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;

    use proptest::prelude::*;
    use tempfile::TempDir;
    use test_case::test_case;

    fn write(root: &Path, rel: &str, contents: &str) -> PathBuf {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_single_file() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "report.json", "{}");

        let files = DirectoryCollector::new().collect(&file).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_nested_directory() {
        let dir = TempDir::new().unwrap();
        let a = write(dir.path(), "a.txt", "a");
        let b = write(dir.path(), "sub/b.txt", "b");

        let files = DirectoryCollector::new().collect(dir.path()).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_order_is_by_name_at_each_level() {
        let dir = TempDir::new().unwrap();
        let z = write(dir.path(), "z.txt", "z");
        let nested = write(dir.path(), "m/inner.txt", "i");
        let a = write(dir.path(), "a.txt", "a");

        let files = DirectoryCollector::new().collect(dir.path()).unwrap();
        assert_eq!(files, vec![a, nested, z]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("only/dirs/here")).unwrap();

        let files = DirectoryCollector::new().collect(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = DirectoryCollector::new().collect(&missing).unwrap_err();
        assert!(matches!(err, PinataError::NotFound(p) if p == missing));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_in_directory_are_skipped() {
        let dir = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        write(target.path(), "outside.txt", "o");
        let inside = write(dir.path(), "inside.txt", "i");
        std::os::unix::fs::symlink(target.path(), dir.path().join("link")).unwrap();

        let files = DirectoryCollector::new().collect(dir.path()).unwrap();
        assert_eq!(files, vec![inside]);
    }

    #[test]
    fn test_upload_name_single_file() {
        let collector = DirectoryCollector::new();
        let file = Path::new("/data/report.json");
        assert_eq!(collector.upload_name(file, file), "report.json");
    }

    #[test_case("/data/site", "/data/site/a.txt", "site/a.txt" ; "top level")]
    #[test_case("/data/site", "/data/site/sub/b.txt", "site/sub/b.txt" ; "nested")]
    #[test_case("site", "site/deep/er/c.txt", "site/deep/er/c.txt" ; "relative root")]
    #[test_case("/", "/etc/hosts", "etc/hosts" ; "filesystem root")]
    fn test_upload_name_in_directory(root: &str, file: &str, expected: &str) {
        let collector = DirectoryCollector::new();
        assert_eq!(collector.upload_name(Path::new(root), Path::new(file)), expected);
    }

    #[test]
    fn test_upload_name_resolves_parent_root() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("site");
        let a = write(&site, "a.txt", "a");
        write(&site, "sub/b.txt", "b");

        let collector = DirectoryCollector::new();
        let root = site.join("sub").join("..");
        let files = collector.collect(&root).unwrap();
        let names: Vec<String> = files.iter().map(|f| collector.upload_name(&root, f)).collect();

        assert_eq!(names, vec!["site/a.txt", "site/sub/b.txt"]);
        assert_eq!(collector.upload_name(&site.join("."), &a), "site/a.txt");
    }

    #[test]
    fn test_upload_name_current_dir_keeps_root() {
        let cwd = std::env::current_dir().unwrap();
        let dir_name = cwd.file_name().unwrap().to_string_lossy().into_owned();

        let collector = DirectoryCollector::new();
        assert_eq!(
            collector.upload_name(Path::new("."), Path::new("./a.txt")),
            format!("{}/a.txt", dir_name)
        );
        assert_eq!(
            collector.upload_name(Path::new("."), Path::new("./sub/b.txt")),
            format!("{}/sub/b.txt", dir_name)
        );
    }

    #[test]
    fn test_walk_error_keeps_io_kind() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("vanished");

        let walk_err = WalkDir::new(&missing).into_iter().next().unwrap().unwrap_err();
        match walk_error(walk_err) {
            PinataError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_collects_exactly_the_files(
            names in prop::collection::btree_set("[a-z]{1,6}", 1..8),
            nest in prop::collection::vec(any::<bool>(), 8),
        ) {
            let dir = TempDir::new().unwrap();
            let mut expected = BTreeSet::new();
            for (i, name) in names.iter().enumerate() {
                let rel = if nest[i] {
                    format!("d_{}/{}.bin", name, name)
                } else {
                    format!("{}.bin", name)
                };
                expected.insert(write(dir.path(), &rel, name));
            }

            let collector = DirectoryCollector::new();
            let first = collector.collect(dir.path()).unwrap();
            let second = collector.collect(dir.path()).unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), expected.len());
            prop_assert_eq!(first.into_iter().collect::<BTreeSet<_>>(), expected);
        }
    }
}
