use crate::aggregator::SortKey;
use crate::utils::config::{DEFAULT_THRESHOLD_MB, DEFAULT_THRESHOLD_MS, DEFAULT_TOP_COUNT};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Arguments for the scan command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Project directory to scan
    pub path: PathBuf,

    /// Optional JSON export path
    pub json_output: Option<PathBuf>,

    /// Annotate imports slower than this (ms)
    pub threshold_ms: f64,

    /// Annotate imports heavier than this (MB)
    pub threshold_mb: f64,

    /// Skip writing the project cache
    pub no_cache: bool,

    /// Interpreter override
    pub python: Option<PathBuf>,

    /// Env file override
    pub env_file: Option<PathBuf>,

    /// Disable automatic `.env` / `.env.local` loading
    pub no_project_env: bool,

    /// Extra glob exclusions
    pub exclude: Vec<String>,

    /// Per-module timeout in seconds (None = wait forever)
    pub timeout_secs: Option<f64>,

    /// Ad-hoc variables layered over the loaded env file
    pub extra_env: BTreeMap<String, String>,

    /// Print the report table to stdout
    pub print_report: bool,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            json_output: None,
            threshold_ms: DEFAULT_THRESHOLD_MS,
            threshold_mb: DEFAULT_THRESHOLD_MB,
            no_cache: false,
            python: None,
            env_file: None,
            no_project_env: false,
            exclude: Vec::new(),
            timeout_secs: None,
            extra_env: BTreeMap::new(),
            print_report: true,
        }
    }
}

/// Arguments for the top command
#[derive(Debug, Clone)]
pub struct TopArgs {
    /// Project directory holding the cache
    pub path: PathBuf,

    /// Number of rows to show
    pub count: usize,

    pub sort: SortKey,

    pub threshold_ms: f64,

    pub threshold_mb: f64,

    /// Print the table / warning to stdout
    pub print_report: bool,
}

impl Default for TopArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            count: DEFAULT_TOP_COUNT,
            sort: SortKey::Time,
            threshold_ms: DEFAULT_THRESHOLD_MS,
            threshold_mb: DEFAULT_THRESHOLD_MB,
            print_report: true,
        }
    }
}
