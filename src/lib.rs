//! Coldimport
//!
//! Cold-start import profiling for Python projects: every discoverable
//! module is imported in a fresh interpreter and its wall time and peak
//! traced memory are recorded, annotated, and cached.
//!
//! This crate provides the core implementation for the
//! `coldimport` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install coldimport
//! coldimport scan path/to/project
//! coldimport top 10 --sort memory
//! ```

pub mod aggregator;
pub mod commands;
pub mod discovery;
pub mod output;
pub mod probe;
pub mod report;
pub mod runtime;
pub mod utils;
