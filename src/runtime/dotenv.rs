//! Minimal `.env` file support.

use crate::utils::config::DEFAULT_ENV_FILES;
use crate::utils::error::RuntimeError;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Variables read from an env file, plus where they came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedEnv {
    pub values: BTreeMap<String, String>,
    pub source: Option<PathBuf>,
}

fn strip_wrapping_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && bytes[0] == bytes[bytes.len() - 1] && (bytes[0] == b'"' || bytes[0] == b'\'') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Parse dotenv text into key/value pairs
///
/// Later duplicates overwrite earlier ones.
pub fn parse_dotenv(content: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        values.insert(key.to_string(), strip_wrapping_quotes(value.trim()).to_string());
    }

    values
}

/// Read and parse one env file
pub fn parse_dotenv_file(path: &Path) -> Result<BTreeMap<String, String>, RuntimeError> {
    let content = fs::read_to_string(path).map_err(|source| RuntimeError::EnvFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_dotenv(&content))
}

/// Load project env values
///
/// **Public** - called once per scan
///
/// An explicit file must exist; otherwise `.env` then `.env.local`
/// under the project root are probed and the first found is used.
///
/// # Errors
/// * `RuntimeError::InvalidEnvFile` - explicit file missing or not a file
/// * `RuntimeError::EnvFileRead` - file could not be read
pub fn load_project_env(project_root: &Path, env_file: Option<&Path>) -> Result<LoadedEnv, RuntimeError> {
    if let Some(env_file) = env_file {
        let resolved = env_file
            .canonicalize()
            .unwrap_or_else(|_| super::interpreter::absolute_no_symlink(env_file));
        if !resolved.is_file() {
            return Err(RuntimeError::InvalidEnvFile(resolved));
        }
        return Ok(LoadedEnv {
            values: parse_dotenv_file(&resolved)?,
            source: Some(resolved),
        });
    }

    for name in DEFAULT_ENV_FILES {
        let candidate = project_root.join(name);
        if candidate.is_file() {
            debug!("Loading env file: {}", candidate.display());
            return Ok(LoadedEnv {
                values: parse_dotenv_file(&candidate)?,
                source: Some(candidate),
            });
        }
    }

    Ok(LoadedEnv::default())
}
