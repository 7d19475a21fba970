//! Aggregation of per-module measurements into reports.
//!
//! This module turns probe outcomes into:
//! - Annotated, rounded module results
//! - A scan payload with summary counts
//! - Filtered/ranked views for the `top` command

pub mod ranking;
pub mod scan;

// Re-export main types and functions
pub use ranking::{filter_successful, sort_modules, top_modules, SortKey};
pub use scan::{is_heavy, module_result, round3, scan_modules};
