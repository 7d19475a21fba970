//! Scan command implementation.
//!
//! The scan command:
//! 1. Resolves the interpreter and probe environment
//! 2. Discovers modules
//! 3. Measures each module in a fresh interpreter
//! 4. Renders the report
//! 5. Writes the cache and optional JSON export

use super::models::ScanArgs;
use crate::aggregator::{scan_modules, sort_modules, SortKey};
use crate::discovery::{discover_modules, effective_patterns, exclusion_labels, ExclusionRules};
use crate::output::{write_cache, write_payload};
use crate::probe::ProbeRunner;
use crate::report::{print_summary, render_modules_table, ScanPayload, ScanSettings};
use crate::runtime::{build_scan_environment, load_project_env, resolve_interpreter, LoadedEnv};
use crate::utils::error::DiscoveryError;
use anyhow::{Context, Result};
use colored::*;
use log::info;
use std::time::Duration;

/// Execute the scan command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The payload that was rendered and persisted. Per-module failures are
/// recorded in it; only configuration and output errors are `Err`.
///
/// # Errors
/// * Invalid scan path, interpreter, or env file
/// * No discoverable modules
/// * Cache or JSON export write failures
pub fn execute_scan(args: ScanArgs) -> Result<ScanPayload> {
    let project_root = args
        .path
        .canonicalize()
        .map_err(|_| DiscoveryError::InvalidPath(args.path.clone()))?;

    // Step 1: Runtime
    let interpreter = resolve_interpreter(&project_root, args.python.as_deref())?;

    let loaded_env = if !args.no_project_env || args.env_file.is_some() {
        load_project_env(&project_root, args.env_file.as_deref())?
    } else {
        LoadedEnv::default()
    };

    let scan_env = build_scan_environment(&loaded_env.values).with_overrides(args.extra_env.clone());

    // Step 2: Discovery
    let file_patterns = effective_patterns(&args.exclude);
    let rules = ExclusionRules::new(&file_patterns);
    let discovery = discover_modules(&project_root, &rules)?;

    if discovery.targets.is_empty() {
        anyhow::bail!("No Python modules found for scanning.");
    }

    // Step 3: Measurement
    let runner = ProbeRunner::new(&interpreter, &project_root, scan_env)
        .with_timeout(args.timeout_secs.and_then(|s| Duration::try_from_secs_f64(s).ok()));

    let settings = ScanSettings {
        threshold_ms: args.threshold_ms,
        threshold_mb: args.threshold_mb,
        exclusions: exclusion_labels(&args.exclude),
    };

    let payload = scan_modules(&runner, &project_root, &discovery.targets, settings);

    // Step 4: Report
    if args.print_report {
        println!("{}", format!("Runtime Python: {}", interpreter.display()).dimmed());
        if let Some(source) = &loaded_env.source {
            println!("{}", format!("Loaded env vars from: {}", source.display()).dimmed());
        }
        if discovery.excluded_count > 0 {
            println!(
                "{}",
                format!(
                    "Excluded modules/files: {} (patterns: {})",
                    discovery.excluded_count,
                    file_patterns.join(", ")
                )
                .dimmed()
            );
        }

        let sorted = sort_modules(&payload.modules, SortKey::Time);
        print!("{}", render_modules_table(&sorted, "Coldimport Scan Report"));
        print_summary(&payload.summary);
    }

    // Step 5: Persist
    if !args.no_cache {
        let path = write_cache(&payload, &project_root).context("Failed to write scan cache")?;
        info!("Cache written to: {}", path.display());
    }

    if let Some(json_path) = &args.json_output {
        write_payload(&payload, json_path).context("Failed to write JSON report")?;
    }

    Ok(payload)
}

/// Validate scan arguments
///
/// **Public** - can be called before execute_scan for early validation
pub fn validate_args(args: &ScanArgs) -> Result<()> {
    // NaN fails these comparisons too
    if !(args.threshold_ms >= 0.0) || !(args.threshold_mb >= 0.0) {
        anyhow::bail!("Threshold values must be >= 0");
    }

    if let Some(timeout) = args.timeout_secs {
        if !(timeout > 0.0) || Duration::try_from_secs_f64(timeout).is_err() {
            anyhow::bail!("Timeout must be a positive number of seconds");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_defaults() {
        assert!(validate_args(&ScanArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_negative_threshold() {
        let args = ScanArgs {
            threshold_ms: -1.0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());

        let args = ScanArgs {
            threshold_mb: f64::NAN,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_thresholds_allowed() {
        let args = ScanArgs {
            threshold_ms: 0.0,
            threshold_mb: 0.0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_bad_timeout() {
        let args = ScanArgs {
            timeout_secs: Some(0.0),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_overflowing_timeout() {
        let args = ScanArgs {
            timeout_secs: Some(1e30),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_scan_missing_path() {
        let args = ScanArgs {
            path: "/definitely/not/a/project".into(),
            print_report: false,
            ..Default::default()
        };
        let err = execute_scan(args).unwrap_err();
        assert!(err.to_string().contains("Invalid scan path"));
    }

    #[test]
    fn test_scan_with_no_modules() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("test_only.py"), "").unwrap();
        let fake_python = dir.path().join("python");
        std::fs::write(&fake_python, "").unwrap();

        let args = ScanArgs {
            path: dir.path().to_path_buf(),
            python: Some(fake_python),
            print_report: false,
            no_cache: true,
            ..Default::default()
        };
        let err = execute_scan(args).unwrap_err();
        assert!(err.to_string().contains("No Python modules found"));
    }
}
