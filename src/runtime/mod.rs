//! Probe runtime resolution: interpreter and environment.
//!
//! This module handles:
//! - Choosing the Python executable (override, project venv, PATH)
//! - Loading `.env` values from the project
//! - Composing the subprocess environment

pub mod dotenv;
pub mod environment;
pub mod interpreter;

// Re-export main types and functions
pub use dotenv::{load_project_env, parse_dotenv, parse_dotenv_file, LoadedEnv};
pub use environment::{build_scan_environment, ScanEnvironment};
pub use interpreter::{absolute_no_symlink, resolve_interpreter};
