//! Non-destructive merge copy of a skill template tree.
//!
//! The scaffolder walks the bundled tree depth-first and mirrors it under
//! the destination, classifying every regular file as created or skipped.
//! Files that already exist at the destination are never touched; the
//! merge is per-file, so directories are always entered. Re-running over
//! a fully installed tree converges to a no-op.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything the scaffolder needs for one installation.
///
/// Constructed once per invocation and never mutated.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    /// Root of the bundled template tree.
    pub source_root: PathBuf,
    /// Root the tree is mirrored under.
    pub dest_root: PathBuf,
    /// Replace existing destination files. Always false for this tool;
    /// the flag exists so the invariant is explicit at the call site.
    pub overwrite: bool,
    /// Create the destination root (and intermediate directories) if absent.
    pub force_create_dirs: bool,
}

impl InstallRequest {
    /// A standard non-overwriting install of `source_root` into `dest_root`.
    pub fn new(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            overwrite: false,
            force_create_dirs: true,
        }
    }
}

/// What happened to one regular file during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileAction {
    /// The file did not exist at the destination and was copied.
    Created,
    /// The file already existed at the destination and was left untouched.
    Skipped,
}

/// Per-file classification, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Path relative to both roots.
    pub relative_path: PathBuf,
    pub action: FileAction,
}

/// Aggregate result of one installation.
///
/// `created + skipped` always equals the number of regular files under
/// the source root; directories are never recorded.
#[derive(Debug, Default)]
pub struct InstallResult {
    pub created: usize,
    pub skipped: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl InstallResult {
    fn record(&mut self, relative_path: PathBuf, action: FileAction) {
        match action {
            FileAction::Created => self.created += 1,
            FileAction::Skipped => self.skipped += 1,
        }
        self.outcomes.push(FileOutcome {
            relative_path,
            action,
        });
    }
}

/// Failures surfaced by [`install`].
///
/// Neither variant is retried; an I/O failure mid-walk leaves
/// already-copied files in place.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The template tree is absent. Raised before anything is written.
    #[error("template tree not found at {}", .0.display())]
    MissingSource(PathBuf),

    /// Directory creation, enumeration, or file copy failed.
    #[error("failed to {op} {}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn io_error(op: &'static str, path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

/// Mirror the source tree under the destination root.
///
/// Verifies the source exists before any write, then walks it depth-first.
/// Existing destination files are recorded as [`FileAction::Skipped`] and
/// left byte-for-byte intact; everything else is copied verbatim with the
/// executable bit preserved on Unix.
pub fn install(request: &InstallRequest) -> Result<InstallResult, ScaffoldError> {
    if !request.source_root.exists() {
        return Err(ScaffoldError::MissingSource(request.source_root.clone()));
    }

    if request.force_create_dirs {
        fs::create_dir_all(&request.dest_root)
            .map_err(|e| io_error("create directory", &request.dest_root, e))?;
    }

    let mut result = InstallResult::default();
    copy_tree(request, Path::new(""), &mut result)?;
    Ok(result)
}

/// Copy one directory level, recursing into subdirectories.
///
/// `relative_dir` is the directory being copied, relative to both roots;
/// carrying it through the recursion keeps outcome paths root-relative
/// without any prefix stripping.
fn copy_tree(
    request: &InstallRequest,
    relative_dir: &Path,
    result: &mut InstallResult,
) -> Result<(), ScaffoldError> {
    let src_dir = request.source_root.join(relative_dir);
    let dest_dir = request.dest_root.join(relative_dir);

    // The destination root itself is handled in `install`; here only
    // mirrored subdirectories are created.
    if !relative_dir.as_os_str().is_empty() {
        fs::create_dir_all(&dest_dir).map_err(|e| io_error("create directory", &dest_dir, e))?;
    }

    for entry in fs::read_dir(&src_dir).map_err(|e| io_error("read directory", &src_dir, e))? {
        let entry = entry.map_err(|e| io_error("read directory", &src_dir, e))?;
        let relative = relative_dir.join(entry.file_name());
        let src_path = entry.path();

        if src_path.is_dir() {
            // Always entered; force/overwrite never applies to directories.
            copy_tree(request, &relative, result)?;
        } else {
            let dest_path = request.dest_root.join(&relative);

            if dest_path.exists() && !request.overwrite {
                result.record(relative, FileAction::Skipped);
                continue;
            }

            fs::copy(&src_path, &dest_path).map_err(|e| io_error("copy", &src_path, e))?;
            preserve_executable_bit(&src_path, &dest_path)?;
            result.record(relative, FileAction::Created);
        }
    }

    Ok(())
}

#[cfg(unix)]
fn preserve_executable_bit(src_path: &Path, dest_path: &Path) -> Result<(), ScaffoldError> {
    use std::os::unix::fs::PermissionsExt;

    let src_mode = fs::metadata(src_path)
        .map_err(|e| io_error("stat", src_path, e))?
        .permissions()
        .mode();
    if src_mode & 0o111 != 0 {
        let mut perms = fs::metadata(dest_path)
            .map_err(|e| io_error("stat", dest_path, e))?
            .permissions();
        perms.set_mode(src_mode);
        fs::set_permissions(dest_path, perms)
            .map_err(|e| io_error("set permissions on", dest_path, e))?;
    }

    Ok(())
}

#[cfg(not(unix))]
fn preserve_executable_bit(_src_path: &Path, _dest_path: &Path) -> Result<(), ScaffoldError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_tree(root: &Path, files: &[(&str, &str)]) {
        for (rel, content) in files {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
        }
    }

    fn outcome_set(result: &InstallResult) -> Vec<(String, FileAction)> {
        let mut set: Vec<_> = result
            .outcomes
            .iter()
            .map(|o| (o.relative_path.to_string_lossy().into_owned(), o.action))
            .collect();
        set.sort();
        set
    }

    #[test]
    fn test_fresh_install_mirrors_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_tree(&src, &[("a.md", "alpha"), ("sub/b.md", "beta")]);

        let result = install(&InstallRequest::new(&src, &dest)).unwrap();

        assert_eq!(result.created, 2);
        assert_eq!(result.skipped, 0);
        assert_eq!(
            outcome_set(&result),
            vec![
                ("a.md".to_string(), FileAction::Created),
                ("sub/b.md".to_string(), FileAction::Created),
            ]
        );
        assert_eq!(fs::read_to_string(dest.join("a.md")).unwrap(), "alpha");
        assert_eq!(fs::read_to_string(dest.join("sub/b.md")).unwrap(), "beta");
    }

    #[test]
    fn test_existing_files_are_never_touched() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_tree(&src, &[("a.md", "from bundle"), ("sub/b.md", "beta")]);
        write_tree(&dest, &[("a.md", "local edits")]);

        let result = install(&InstallRequest::new(&src, &dest)).unwrap();

        assert_eq!(result.created, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(fs::read_to_string(dest.join("a.md")).unwrap(), "local edits");
        assert_eq!(fs::read_to_string(dest.join("sub/b.md")).unwrap(), "beta");
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_tree(
            &src,
            &[
                ("a.md", "alpha"),
                ("sub/b.md", "beta"),
                ("sub/deep/c.md", "gamma"),
            ],
        );

        let request = InstallRequest::new(&src, &dest);
        let first = install(&request).unwrap();
        assert_eq!(first.created, 3);

        let second = install(&request).unwrap();
        assert_eq!(second.created, 0);
        assert_eq!(second.skipped, 3);
        assert_eq!(second.created + second.skipped, first.outcomes.len());
    }

    #[test]
    fn test_directories_never_appear_in_outcomes() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_tree(&src, &[("sub/deep/c.md", "gamma")]);
        fs::create_dir_all(src.join("empty")).unwrap();

        let result = install(&InstallRequest::new(&src, &dest)).unwrap();

        assert_eq!(result.outcomes.len(), 1);
        assert_eq!(
            result.outcomes[0].relative_path,
            PathBuf::from("sub/deep/c.md")
        );
        // Empty source directories are still mirrored.
        assert!(dest.join("empty").is_dir());
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("does-not-exist");
        let dest = temp.path().join("dest");

        let err = install(&InstallRequest::new(&src, &dest)).unwrap_err();

        assert!(matches!(err, ScaffoldError::MissingSource(_)));
        assert!(!dest.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_bit_is_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_tree(&src, &[("bin/run.sh", "#!/bin/sh\n")]);
        let script = src.join("bin/run.sh");
        let mut perms = fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).unwrap();

        install(&InstallRequest::new(&src, &dest)).unwrap();

        let mode = fs::metadata(dest.join("bin/run.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
