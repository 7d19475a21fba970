//! Persisted JSON schema for scan results.
//!
//! This module defines the structure of the cache file and JSON exports.
//! Schema is versioned to allow future evolution.

use crate::utils::config::SCHEMA_VERSION;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome tag of a single module measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Ok,
    Error,
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleStatus::Ok => write!(f, "ok"),
            ModuleStatus::Error => write!(f, "error"),
        }
    }
}

/// One measured module, as written to the cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleResult {
    /// Dotted module name (e.g. "pkg.sub.mod")
    pub name: String,

    /// Absolute source file path
    pub file: String,

    /// Import wall time in milliseconds (ok only)
    pub import_time_ms: Option<f64>,

    /// Peak traced memory in megabytes (ok only)
    pub memory_mb: Option<f64>,

    pub status: ModuleStatus,

    /// "<kind>: <message>" (error only)
    #[serde(default)]
    pub error: Option<String>,

    /// Advisory annotations, in order
    #[serde(default)]
    pub notes: Vec<String>,
}

impl ModuleResult {
    /// Build a successful result; values are stored as given
    pub fn success(
        name: impl Into<String>,
        file: impl Into<String>,
        import_time_ms: f64,
        memory_mb: f64,
        notes: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            import_time_ms: Some(import_time_ms),
            memory_mb: Some(memory_mb),
            status: ModuleStatus::Ok,
            error: None,
            notes,
        }
    }

    /// Build a failed result carrying the formatted error string
    pub fn failure(name: impl Into<String>, file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            import_time_ms: None,
            memory_mb: None,
            status: ModuleStatus::Error,
            error: Some(error.into()),
            notes: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ModuleStatus::Ok
    }

    /// Check the status/field consistency invariant
    ///
    /// `ok` requires both numbers and no error; `error` requires
    /// neither number and an error string.
    pub fn check_invariant(&self) -> Result<(), String> {
        let has_numbers = self.import_time_ms.is_some() && self.memory_mb.is_some();
        let has_no_numbers = self.import_time_ms.is_none() && self.memory_mb.is_none();

        match self.status {
            ModuleStatus::Ok if has_numbers && self.error.is_none() => Ok(()),
            ModuleStatus::Error if has_no_numbers && self.error.is_some() => Ok(()),
            status => Err(format!(
                "module '{}' has status '{}' with inconsistent fields",
                self.name, status
            )),
        }
    }
}

/// Configuration a scan ran under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSettings {
    pub threshold_ms: f64,
    pub threshold_mb: f64,

    /// Display labels of the effective exclusion rules
    pub exclusions: Vec<String>,
}

/// Module counts for a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_modules: usize,
    pub scanned_modules: usize,
    pub failed_modules: usize,
}

impl ScanSummary {
    /// Partition results by status
    pub fn from_modules(modules: &[ModuleResult]) -> Self {
        let scanned_modules = modules.iter().filter(|m| m.is_ok()).count();
        Self {
            total_modules: modules.len(),
            scanned_modules,
            failed_modules: modules.len() - scanned_modules,
        }
    }

    /// One-line digest for terminal output
    pub fn digest(&self) -> String {
        format!(
            "Scanned: {}/{} modules, Failed: {}",
            self.scanned_modules, self.total_modules, self.failed_modules
        )
    }
}

/// Top-level payload written to the cache and JSON exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanPayload {
    /// Schema version for compatibility checking
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// RFC 3339 UTC timestamp, seconds precision
    #[serde(default = "current_timestamp")]
    pub generated_at: String,

    pub project_root: String,

    pub settings: ScanSettings,

    pub summary: ScanSummary,

    /// Results in discovery order
    pub modules: Vec<ModuleResult>,
}

impl ScanPayload {
    /// Build a payload stamped with the current time
    pub fn new(project_root: impl Into<String>, settings: ScanSettings, modules: Vec<ModuleResult>) -> Self {
        Self {
            schema_version: default_schema_version(),
            generated_at: current_timestamp(),
            project_root: project_root.into(),
            settings,
            summary: ScanSummary::from_modules(&modules),
            modules,
        }
    }

    /// Check every structural invariant of a (possibly deserialized) payload
    pub fn validate(&self) -> Result<(), String> {
        let summary = &self.summary;
        if summary.scanned_modules + summary.failed_modules != summary.total_modules {
            return Err(format!(
                "summary counts do not add up: {} scanned + {} failed != {} total",
                summary.scanned_modules, summary.failed_modules, summary.total_modules
            ));
        }

        self.modules.iter().try_for_each(ModuleResult::check_invariant)
    }
}

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}
