mod common;

use coldimport::discovery::{discover_modules, effective_patterns, ExclusionRules};
use common::write_file;
use pretty_assertions::assert_eq;

fn names(root: &std::path::Path, rules: &ExclusionRules) -> (Vec<String>, usize) {
    let discovery = discover_modules(root, rules).unwrap();
    let names = discovery.targets.iter().map(|t| t.name.clone()).collect();
    (names, discovery.excluded_count)
}

#[test]
fn test_discovers_sorted_names_and_counts_exclusions() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_file(root, "app.py", "");
    write_file(root, "pkg/__init__.py", "");
    write_file(root, "pkg/core.py", "");
    write_file(root, "pkg/sub/__init__.py", "");
    write_file(root, "pkg/sub/leaf.py", "");
    write_file(root, "pkg/test_core.py", "");
    write_file(root, "pkg/core_test.py", "");
    write_file(root, "tests/test_app.py", "");
    write_file(root, "tests/helpers.py", "");
    write_file(root, ".venv/lib/site.py", "");
    write_file(root, "build/lib/app.py", "");
    write_file(root, "migrations/0001_initial.py", "");
    write_file(root, "pkg/migrations/0002.py", "");
    write_file(root, "README.md", "");
    write_file(root, "__init__.py", "");

    let (names, excluded) = names(root, &ExclusionRules::default());

    assert_eq!(names, vec!["app", "pkg", "pkg.core", "pkg.sub", "pkg.sub.leaf"]);
    assert_eq!(excluded, 8);
}

#[test]
fn test_names_have_no_empty_segments_or_init() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    for path in ["a/__init__.py", "a/b/__init__.py", "a/b/c.py", "x.py", "deep/er/still/mod.py"] {
        write_file(root, path, "");
    }

    let discovery = discover_modules(root, &ExclusionRules::default()).unwrap();
    assert_eq!(discovery.targets.len(), 5);

    for target in &discovery.targets {
        assert!(target.name.split('.').all(|s| !s.is_empty()), "{}", target.name);
        assert!(!target.name.ends_with("__init__"), "{}", target.name);
        assert!(target.file.is_absolute());
    }
}

#[test]
fn test_user_patterns_extend_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_file(root, "keep.py", "");
    write_file(root, "generated/api.py", "");
    write_file(root, "migrations/0001.py", "");

    let patterns = effective_patterns(&["generated/**".to_string()]);
    let (names, excluded) = names(root, &ExclusionRules::new(&patterns));

    assert_eq!(names, vec!["keep"]);
    assert_eq!(excluded, 2);
}

#[test]
fn test_file_as_root_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "single.py", "");

    let err = discover_modules(&file, &ExclusionRules::default()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid scan path"));
}
