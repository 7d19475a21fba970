//! Environment handed to every probe subprocess.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Immutable-once-built environment mapping for a scan
///
/// Starts from the current process environment; overrides are layered on
/// top with last-write-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanEnvironment {
    vars: BTreeMap<OsString, OsString>,
}

impl ScanEnvironment {
    /// Snapshot of the current process environment
    pub fn from_current() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    /// Empty mapping (children see only explicit overrides)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Layer a set of overrides on top
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        for (key, value) in overrides {
            self.vars.insert(key.into(), value.into());
        }
        self
    }

    /// Layer a single override on top
    pub fn with_var(self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        let pair: (OsString, OsString) = (key.into(), value.into());
        self.with_overrides([pair])
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsString, &OsString)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Current environment with env-file values layered on top
pub fn build_scan_environment(extra: &BTreeMap<String, String>) -> ScanEnvironment {
    ScanEnvironment::from_current().with_overrides(extra.clone())
}
