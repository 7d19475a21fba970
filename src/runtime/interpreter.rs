//! Interpreter resolution for measurement probes.
//!
//! Paths are made absolute lexically and never canonicalized, so venv
//! launcher symlinks are kept as given.

use crate::utils::config::{FALLBACK_INTERPRETERS, VENV_INTERPRETER_CANDIDATES};
use crate::utils::error::RuntimeError;
use log::debug;
use std::path::{Component, Path, PathBuf};

/// Make a path absolute without following symlinks
///
/// `.` and `..` are collapsed lexically, so `venv/bin/../bin/python`
/// becomes `venv/bin/python` even when `bin` is a symlink.
pub fn absolute_no_symlink(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Pick the Python interpreter used for every probe
///
/// **Public** - called once per scan
///
/// # Arguments
/// * `project_root` - Scanned project, searched for a local venv
/// * `requested` - Explicit interpreter override
///
/// # Errors
/// * `RuntimeError::InvalidExecutable` - override missing or not a file
/// * `RuntimeError::InterpreterNotFound` - no venv and nothing on PATH
pub fn resolve_interpreter(project_root: &Path, requested: Option<&Path>) -> Result<PathBuf, RuntimeError> {
    if let Some(requested) = requested {
        let candidate = absolute_no_symlink(requested);
        // is_file follows symlinks, so a launcher pointing at a real file passes
        if !candidate.is_file() {
            return Err(RuntimeError::InvalidExecutable(candidate));
        }
        return Ok(candidate);
    }

    for parts in VENV_INTERPRETER_CANDIDATES {
        let candidate: PathBuf = parts.iter().fold(project_root.to_path_buf(), |p, s| p.join(s));
        if candidate.is_file() {
            debug!("Using project interpreter: {}", candidate.display());
            return Ok(absolute_no_symlink(&candidate));
        }
    }

    FALLBACK_INTERPRETERS
        .iter()
        .find_map(|name| which::which(name).ok())
        .map(|found| {
            debug!("Using interpreter from PATH: {}", found.display());
            absolute_no_symlink(&found)
        })
        .ok_or_else(|| RuntimeError::InterpreterNotFound(FALLBACK_INTERPRETERS.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_explicit_missing_interpreter() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_interpreter(dir.path(), Some(&dir.path().join("nope")));
        assert!(matches!(result, Err(RuntimeError::InvalidExecutable(_))));
    }

    #[test]
    fn test_explicit_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_interpreter(dir.path(), Some(dir.path()));
        assert!(matches!(result, Err(RuntimeError::InvalidExecutable(_))));
    }

    #[test]
    fn test_venv_candidate_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join(".venv").join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("python"), "").unwrap();

        let resolved = resolve_interpreter(dir.path(), None).unwrap();
        assert_eq!(resolved, bin.join("python"));
    }

    #[test]
    fn test_windows_layout_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let scripts = dir.path().join("env").join("Scripts");
        fs::create_dir_all(&scripts).unwrap();
        fs::write(scripts.join("python.exe"), "").unwrap();

        let resolved = resolve_interpreter(dir.path(), None).unwrap();
        assert_eq!(resolved, scripts.join("python.exe"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_collapses_dot_segments() {
        assert_eq!(
            absolute_no_symlink(Path::new("/opt/venv/bin/../bin/./python")),
            PathBuf::from("/opt/venv/bin/python")
        );
        assert_eq!(absolute_no_symlink(Path::new("/../python")), PathBuf::from("/python"));
    }

    #[test]
    fn test_explicit_interpreter_with_parent_segments() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("venv").join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("python"), "").unwrap();

        let requested = bin.join("..").join("bin").join("python");
        let resolved = resolve_interpreter(dir.path(), Some(&requested)).unwrap();
        assert_eq!(resolved, bin.join("python"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_kept_unresolved() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real-python");
        fs::write(&real, "").unwrap();
        let link = dir.path().join("python-link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let resolved = resolve_interpreter(dir.path(), Some(&link)).unwrap();
        assert_eq!(resolved, link);
    }
}
