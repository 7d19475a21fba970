//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod scan;
pub mod top;
pub mod utils;

// Re-export main command functions
pub use models::{ScanArgs, TopArgs};
pub use scan::{execute_scan, validate_args};
pub use top::{execute_top, validate_top_args};
pub use utils::display_schema;
