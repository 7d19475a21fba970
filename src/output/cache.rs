//! Project-local scan cache (`<project>/.coldimport/cache.json`).

use super::json::write_payload;
use crate::report::ScanPayload;
use crate::utils::config::{CACHE_DIR_NAME, CACHE_FILE_NAME};
use crate::utils::error::{CacheError, OutputError};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Cache file location for a project
pub fn cache_path(project_root: &Path) -> PathBuf {
    project_root.join(CACHE_DIR_NAME).join(CACHE_FILE_NAME)
}

/// Write the payload to the project cache, returning its path
///
/// # Errors
/// Any I/O or serialization failure is propagated.
pub fn write_cache(payload: &ScanPayload, project_root: &Path) -> Result<PathBuf, OutputError> {
    let target = cache_path(project_root);
    write_payload(payload, &target)?;
    Ok(target)
}

/// Read and validate the project cache
///
/// # Errors
/// * `CacheError::NotFound` - no cache yet; run a scan first
/// * `CacheError::InvalidJson` - file is not JSON
/// * `CacheError::InvalidFormat` - JSON does not match the schema or its invariants
/// * `CacheError::ReadFailed` - other I/O failure
pub fn read_cache(project_root: &Path) -> Result<ScanPayload, CacheError> {
    let path = cache_path(project_root);
    debug!("Reading cache from: {}", path.display());

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(CacheError::NotFound(path)),
        Err(source) => return Err(CacheError::ReadFailed { path, source }),
    };

    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(source) => return Err(CacheError::InvalidJson { path, source }),
    };

    let payload: ScanPayload = match serde_json::from_value(value) {
        Ok(p) => p,
        Err(e) => {
            return Err(CacheError::InvalidFormat {
                path,
                reason: e.to_string(),
            })
        }
    };

    if let Err(reason) = payload.validate() {
        return Err(CacheError::InvalidFormat { path, reason });
    }

    debug!(
        "Cache loaded: schema {}, {} modules",
        payload.schema_version,
        payload.modules.len()
    );

    Ok(payload)
}
