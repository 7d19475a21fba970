//! Walk a project tree and turn eligible source files into module targets.

use super::exclusions::{path_segments, ExclusionRules};
use crate::utils::config::{PACKAGE_INIT_FILE, SOURCE_EXTENSION};
use crate::utils::error::DiscoveryError;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An importable module found under the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTarget {
    /// Dotted module name
    pub name: String,

    /// Source file path (under the scan root)
    pub file: PathBuf,
}

/// Result of a discovery run
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Targets sorted by path
    pub targets: Vec<ModuleTarget>,

    /// Candidate files dropped by an exclusion rule
    pub excluded_count: usize,
}

/// Discover importable modules under `scan_root`
///
/// **Public** - main entry point for discovery
///
/// # Arguments
/// * `scan_root` - Project directory to walk
/// * `rules` - Compiled exclusion rules
///
/// # Returns
/// Targets in path order plus the number of excluded candidates
///
/// # Errors
/// * `DiscoveryError::InvalidPath` - root missing or not a directory
pub fn discover_modules(scan_root: &Path, rules: &ExclusionRules) -> Result<Discovery, DiscoveryError> {
    if !scan_root.is_dir() {
        return Err(DiscoveryError::InvalidPath(scan_root.to_path_buf()));
    }

    debug!("Discovering modules under {}", scan_root.display());

    let mut discovery = Discovery::default();

    // Sorting by file name per directory yields full-path order
    for entry in WalkDir::new(scan_root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !is_source_file(path) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(scan_root) else {
            continue;
        };

        if let Some(reason) = rules.check(relative) {
            debug!("Excluded {} ({:?})", relative.display(), reason);
            discovery.excluded_count += 1;
            continue;
        }

        let Some(name) = module_name(relative) else {
            continue;
        };

        discovery.targets.push(ModuleTarget {
            name,
            file: path.to_path_buf(),
        });
    }

    debug!(
        "Discovered {} modules ({} excluded)",
        discovery.targets.len(),
        discovery.excluded_count
    );

    Ok(discovery)
}

fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) && path.is_file()
}

/// Derive a dotted module name from a path relative to the scan root
///
/// A package initializer maps to its package; other files drop their
/// extension. Returns None when nothing is left.
pub fn module_name(relative: &Path) -> Option<String> {
    let mut segments = path_segments(relative);
    let last = segments.pop()?;

    if last != PACKAGE_INIT_FILE {
        let stem = Path::new(&last).file_stem()?.to_string_lossy().into_owned();
        segments.push(stem);
    }

    if segments.is_empty() || segments.iter().any(String::is_empty) {
        return None;
    }

    Some(segments.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_plain_file() {
        assert_eq!(module_name(Path::new("pkg/sub/mod.py")).as_deref(), Some("pkg.sub.mod"));
        assert_eq!(module_name(Path::new("top.py")).as_deref(), Some("top"));
    }

    #[test]
    fn test_module_name_package_init() {
        assert_eq!(module_name(Path::new("pkg/sub/__init__.py")).as_deref(), Some("pkg.sub"));
    }

    #[test]
    fn test_module_name_root_init_is_empty() {
        assert_eq!(module_name(Path::new("__init__.py")), None);
    }

    #[test]
    fn test_invalid_root() {
        let result = discover_modules(Path::new("/definitely/not/here"), &ExclusionRules::default());
        assert!(matches!(result, Err(DiscoveryError::InvalidPath(_))));
    }
}
