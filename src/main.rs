//! Coldimport CLI
//!
//! Profiles the cold-start import cost of every module in a Python project.
//! Results are rendered as a table and cached for the `top` command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use coldimport::aggregator::SortKey;
use coldimport::commands::{
    display_schema, execute_scan, execute_top, validate_args, validate_top_args, ScanArgs, TopArgs,
};
use coldimport::utils::config::{DEFAULT_THRESHOLD_MB, DEFAULT_THRESHOLD_MS, DEFAULT_TOP_COUNT};
use env_logger::Env;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Coldimport - Python import time + memory profiler
#[derive(Parser, Debug)]
#[command(name = "coldimport")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a Python project for import time and memory cost
    Scan {
        /// Project path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Write JSON report to file
        #[arg(long = "json")]
        json_output: Option<PathBuf>,

        /// Annotate imports slower than this many milliseconds
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_MS)]
        threshold_ms: f64,

        /// Annotate imports using more than this many megabytes
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_MB)]
        threshold_mb: f64,

        /// Do not write <path>/.coldimport/cache.json
        #[arg(long)]
        no_cache: bool,

        /// Python executable to use for imports (defaults to project venv if found)
        #[arg(long)]
        python: Option<PathBuf>,

        /// Path to .env file to load for scanned imports
        #[arg(long)]
        env_file: Option<PathBuf>,

        /// Disable automatic loading of .env/.env.local from the project path
        #[arg(long)]
        no_project_env: bool,

        /// Glob pattern to exclude files/modules (repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// Kill a module's import after this many seconds
        #[arg(long)]
        timeout: Option<f64>,
    },

    /// Show top heavy imports from the latest cache
    Top {
        /// Number of modules to show
        #[arg(default_value_t = DEFAULT_TOP_COUNT)]
        n: usize,

        /// Sort by time or memory
        #[arg(long, value_enum, default_value_t = SortKey::Time)]
        sort: SortKey,

        /// Only show modules at or above this many milliseconds (or the MB threshold)
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_MS)]
        threshold_ms: f64,

        /// Only show modules at or above this many megabytes (or the ms threshold)
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_MB)]
        threshold_mb: f64,

        /// Project directory holding the cache
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },

    /// Display cache schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Scan {
            path,
            json_output,
            threshold_ms,
            threshold_mb,
            no_cache,
            python,
            env_file,
            no_project_env,
            exclude,
            timeout,
        } => {
            let args = ScanArgs {
                path,
                json_output,
                threshold_ms,
                threshold_mb,
                no_cache,
                python,
                env_file,
                no_project_env,
                exclude,
                timeout_secs: timeout,
                extra_env: BTreeMap::new(),
                print_report: true,
            };

            // Validate args first
            validate_args(&args)?;

            let payload = execute_scan(args)?;

            if payload.summary.scanned_modules == 0 {
                anyhow::bail!("No modules were imported successfully");
            }
        }

        Commands::Top {
            n,
            sort,
            threshold_ms,
            threshold_mb,
            path,
        } => {
            let args = TopArgs {
                path,
                count: n,
                sort,
                threshold_ms,
                threshold_mb,
                print_report: true,
            };

            validate_top_args(&args)?;
            execute_top(args)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }
    }

    Ok(())
}
