use coldimport::output::{cache_path, read_cache, validate_path, write_cache, write_payload};
use coldimport::report::{ModuleResult, ScanPayload, ScanSettings};
use coldimport::utils::error::CacheError;
use pretty_assertions::assert_eq;
use std::path::Path;

fn create_test_payload() -> ScanPayload {
    let settings = ScanSettings {
        threshold_ms: 1.0,
        threshold_mb: 0.001,
        exclusions: vec!["tests".to_string(), "hidden.*".to_string()],
    };
    let modules = vec![
        ModuleResult::success("pkg", "/proj/pkg/__init__.py", 3.25, 0.012, vec![]),
        ModuleResult::failure("pkg.broken", "/proj/pkg/broken.py", "RuntimeError: boom"),
    ];
    ScanPayload::new("/proj", settings, modules)
}

#[test]
fn test_cache_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let payload = create_test_payload();

    let written = write_cache(&payload, dir.path()).unwrap();
    assert_eq!(written, cache_path(dir.path()));

    let loaded = read_cache(dir.path()).unwrap();
    assert_eq!(loaded, payload);
}

#[test]
fn test_missing_cache_tells_user_to_scan() {
    let dir = tempfile::tempdir().unwrap();

    let err = read_cache(dir.path()).unwrap_err();
    assert!(matches!(err, CacheError::NotFound(_)));
    assert!(err.to_string().contains("Run `coldimport scan <path>` first"));
}

#[test]
fn test_cache_with_broken_invariant_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let mut payload = create_test_payload();
    payload.modules[1].memory_mb = Some(1.0);
    write_cache(&payload, dir.path()).unwrap();

    let err = read_cache(dir.path()).unwrap_err();
    assert!(matches!(err, CacheError::InvalidFormat { .. }));
}

#[test]
fn test_export_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("reports/nightly/scan.json");

    write_payload(&create_test_payload(), &nested).unwrap();

    let raw = std::fs::read_to_string(&nested).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["summary"]["failed_modules"], 1);
    assert!(value["modules"][1]["import_time_ms"].is_null());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}
