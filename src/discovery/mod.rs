//! Module discovery for Python project trees.
//!
//! This module handles:
//! - Walking the project tree in stable path order
//! - Applying hidden/directory/test-file/glob exclusions
//! - Deriving dotted module names from file paths

pub mod exclusions;
pub mod modules;

// Re-export main types and functions
pub use exclusions::{effective_patterns, exclusion_labels, ExclusionReason, ExclusionRules};
pub use modules::{discover_modules, module_name, Discovery, ModuleTarget};
