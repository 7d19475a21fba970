//! Exclusion rules applied to candidate source files.
//!
//! Rules are checked in a fixed order and the first match wins:
//! 1. Hidden path segment (leading ".")
//! 2. Containing directory in the fixed excluded set
//! 3. Test-file naming (`test_*.py`, `*_test.py`)
//! 4. User/default glob patterns

use crate::utils::config::{
    BUILTIN_RULE_LABELS, DEFAULT_EXCLUDE_PATTERNS, EXCLUDED_DIRS, SOURCE_EXTENSION,
};
use glob::{MatchOptions, Pattern};
use log::warn;
use std::path::{Component, Path};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Which rule excluded a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    Hidden,
    ExcludedDir,
    TestFile,
    Pattern,
}

/// One compiled exclusion pattern
#[derive(Debug, Clone)]
struct ExcludePattern {
    /// None when the glob syntax is invalid; only the prefix rule applies then
    glob: Option<Pattern>,
    /// Pattern with trailing "/" and "*" stripped
    prefix: String,
}

impl ExcludePattern {
    fn compile(raw: &str) -> Self {
        let glob = match Pattern::new(raw) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("Invalid exclude pattern '{}': {}; using prefix match only", raw, e);
                None
            }
        };

        Self {
            glob,
            prefix: raw.trim_end_matches(['/', '*']).to_string(),
        }
    }

    /// Right-anchored glob match on any trailing component suffix, or literal prefix
    fn matches(&self, segments: &[String], path_str: &str) -> bool {
        if let Some(glob) = &self.glob {
            let suffix_match = (0..segments.len()).any(|start| {
                let candidate = segments[start..].join("/");
                glob.matches_with(&candidate, MATCH_OPTIONS)
            });
            if suffix_match {
                return true;
            }
        }

        path_str.starts_with(&self.prefix)
    }
}

/// Compiled exclusion rule set for one discovery run
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    patterns: Vec<ExcludePattern>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::new::<&str>(&[])
    }
}

impl ExclusionRules {
    /// Compile the given glob patterns; an empty list means the defaults
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = if patterns.is_empty() {
            DEFAULT_EXCLUDE_PATTERNS.iter().map(|p| ExcludePattern::compile(p)).collect()
        } else {
            patterns.iter().map(|p| ExcludePattern::compile(p.as_ref())).collect()
        };

        Self { patterns }
    }

    /// Decide whether a path relative to the scan root is excluded
    pub fn check(&self, relative: &Path) -> Option<ExclusionReason> {
        let segments = path_segments(relative);

        if segments.iter().any(|s| s.starts_with('.')) {
            return Some(ExclusionReason::Hidden);
        }

        let (file_name, parents) = segments.split_last()?;

        if parents.iter().any(|p| EXCLUDED_DIRS.contains(&p.as_str())) {
            return Some(ExclusionReason::ExcludedDir);
        }

        if is_test_file(file_name) {
            return Some(ExclusionReason::TestFile);
        }

        let path_str = segments.join(std::path::MAIN_SEPARATOR_STR);
        if self.patterns.iter().any(|p| p.matches(&segments, &path_str)) {
            return Some(ExclusionReason::Pattern);
        }

        None
    }
}

fn is_test_file(file_name: &str) -> bool {
    file_name.starts_with("test_") || file_name.ends_with(&format!("_test.{}", SOURCE_EXTENSION))
}

/// Normal components of a relative path as strings
pub(crate) fn path_segments(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// File-matching patterns: defaults plus user patterns not already present
pub fn effective_patterns(user_patterns: &[String]) -> Vec<String> {
    let mut patterns: Vec<String> = DEFAULT_EXCLUDE_PATTERNS.iter().map(|p| p.to_string()).collect();
    for pattern in user_patterns {
        if !patterns.contains(pattern) {
            patterns.push(pattern.clone());
        }
    }
    patterns
}

/// Display labels for every active rule plus user patterns not already present
pub fn exclusion_labels(user_patterns: &[String]) -> Vec<String> {
    let mut dirs: Vec<&str> = EXCLUDED_DIRS.to_vec();
    dirs.sort_unstable();

    let mut labels: Vec<String> = dirs
        .into_iter()
        .chain(BUILTIN_RULE_LABELS.iter().copied())
        .chain(DEFAULT_EXCLUDE_PATTERNS.iter().copied())
        .map(str::to_string)
        .collect();

    for pattern in user_patterns {
        if !labels.contains(pattern) {
            labels.push(pattern.clone());
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(path: &str) -> Option<ExclusionReason> {
        ExclusionRules::default().check(Path::new(path))
    }

    #[test]
    fn test_hidden_segments() {
        assert_eq!(check(".hidden/mod.py"), Some(ExclusionReason::Hidden));
        assert_eq!(check("pkg/.secret.py"), Some(ExclusionReason::Hidden));
    }

    #[test]
    fn test_excluded_dirs() {
        assert_eq!(check("venv/lib/x.py"), Some(ExclusionReason::ExcludedDir));
        assert_eq!(check("pkg/tests/helper.py"), Some(ExclusionReason::ExcludedDir));
        assert_eq!(check("pkg/__pycache__/m.py"), Some(ExclusionReason::ExcludedDir));
        // only directories count, not the file name itself
        assert_eq!(check("build.py"), None);
    }

    #[test]
    fn test_test_file_naming() {
        assert_eq!(check("pkg/test_core.py"), Some(ExclusionReason::TestFile));
        assert_eq!(check("pkg/core_test.py"), Some(ExclusionReason::TestFile));
        assert_eq!(check("pkg/testing.py"), None);
    }

    #[test]
    fn test_default_patterns() {
        assert_eq!(check("migrations/0001_initial.py"), Some(ExclusionReason::Pattern));
        assert_eq!(check("app/migrations/0001.py"), Some(ExclusionReason::Pattern));
        assert_eq!(check("alembic/env.py"), Some(ExclusionReason::Pattern));
        assert_eq!(check("app/models.py"), None);
    }

    #[test]
    fn test_literal_prefix_rule_is_loose() {
        // "alembic/**" strips to "alembic", which also prefixes sibling files
        assert_eq!(check("alembic_utils.py"), Some(ExclusionReason::Pattern));
    }

    #[test]
    fn test_custom_pattern_replaces_defaults() {
        let rules = ExclusionRules::new(&["legacy/*"]);
        assert_eq!(rules.check(Path::new("legacy/old.py")), Some(ExclusionReason::Pattern));
        assert_eq!(rules.check(Path::new("migrations/0001.py")), None);
    }

    #[test]
    fn test_right_anchored_file_glob() {
        let rules = ExclusionRules::new(&["*_pb2.py"]);
        assert_eq!(rules.check(Path::new("proto/api_pb2.py")), Some(ExclusionReason::Pattern));
    }

    #[test]
    fn test_invalid_glob_falls_back_to_prefix() {
        let rules = ExclusionRules::new(&["gen[/**"]);
        assert_eq!(rules.check(Path::new("gen[/x.py")), Some(ExclusionReason::Pattern));
        assert_eq!(rules.check(Path::new("app.py")), None);
    }

    #[test]
    fn test_effective_patterns_dedup() {
        let patterns = effective_patterns(&["migrations/**".to_string(), "legacy/**".to_string()]);
        assert_eq!(patterns.len(), DEFAULT_EXCLUDE_PATTERNS.len() + 1);
        assert_eq!(patterns.last().unwrap(), "legacy/**");
    }

    #[test]
    fn test_exclusion_labels_layout() {
        let labels = exclusion_labels(&["legacy/**".to_string()]);
        assert_eq!(labels[0], ".git");
        assert!(labels.contains(&"hidden.*".to_string()));
        assert!(labels.contains(&"**/migrations/**".to_string()));
        assert_eq!(labels.last().unwrap(), "legacy/**");
    }
}
