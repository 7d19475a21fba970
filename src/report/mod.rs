//! Scan result schema and terminal presentation.
//!
//! This module handles:
//! - The versioned payload written to cache and JSON exports
//! - Table rendering of module results

pub mod schema;
pub mod table;

// Re-export main types
pub use schema::{ModuleResult, ModuleStatus, ScanPayload, ScanSettings, ScanSummary};
pub use table::{format_value, print_summary, render_modules_table};
