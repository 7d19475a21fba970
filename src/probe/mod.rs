//! Isolated per-module import measurement.
//!
//! Every module is imported in a brand-new interpreter process so no
//! import side effect can leak into another module's numbers.

pub mod outcome;
pub mod runner;
pub mod script;

// Re-export main types
pub use outcome::{classify_output, MeasurementOutcome, ProbeOutput, PARSE_ERROR, SUBPROCESS_ERROR, TIMEOUT_ERROR};
pub use runner::{Measure, ProbeRunner};
pub use script::PROBE_SCRIPT;
