//! Top command implementation.
//!
//! Reads the project cache, keeps successful modules at or above the
//! thresholds, and shows the N heaviest by the chosen metric.

use super::models::TopArgs;
use crate::aggregator::top_modules;
use crate::output::read_cache;
use crate::report::{render_modules_table, ModuleResult};
use anyhow::Result;
use colored::*;
use log::debug;

/// Execute the top command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The ranked modules (possibly empty; a warning is printed then)
///
/// # Errors
/// * Cache missing, not JSON, or structurally invalid
pub fn execute_top(args: TopArgs) -> Result<Vec<ModuleResult>> {
    let payload = read_cache(&args.path)?;

    debug!(
        "Ranking {} cached modules by {} (generated {})",
        payload.modules.len(),
        args.sort,
        payload.generated_at
    );

    let ranked = top_modules(
        &payload.modules,
        args.sort,
        args.count,
        args.threshold_ms,
        args.threshold_mb,
    );

    if args.print_report {
        if ranked.is_empty() {
            println!("{}", "No modules match the requested thresholds.".yellow());
        } else {
            print!("{}", render_modules_table(&ranked, "Coldimport Top Imports"));
        }
    }

    Ok(ranked)
}

/// Validate top arguments
pub fn validate_top_args(args: &TopArgs) -> Result<()> {
    if args.count == 0 {
        anyhow::bail!("Count must be at least 1");
    }

    if !(args.threshold_ms >= 0.0) || !(args.threshold_mb >= 0.0) {
        anyhow::bail!("Threshold values must be >= 0");
    }

    Ok(())
}
