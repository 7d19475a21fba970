//! Writers and readers for scan payloads on disk.
//!
//! This module handles:
//! - Pretty JSON exports to caller-chosen paths
//! - The project-local cache read back by `top`

pub mod cache;
pub mod json;

// Re-export main functions
pub use cache::{cache_path, read_cache, write_cache};
pub use json::{validate_path, write_payload};
