//! Parent-side classification of probe output.
//!
//! Priority order:
//! 1. Non-zero exit with blank stdout -> `SubprocessError`
//! 2. No stdout lines after trimming -> `ParseError`
//! 3. Last stdout line is not a probe record -> `ParseError`
//! 4. The record's own status decides

use log::debug;
use serde::Deserialize;

pub const SUBPROCESS_ERROR: &str = "SubprocessError";
pub const PARSE_ERROR: &str = "ParseError";
pub const TIMEOUT_ERROR: &str = "TimeoutError";

// Defaults for child failure records missing their fields
const DEFAULT_ERROR_KIND: &str = "ImportError";
const DEFAULT_ERROR_MESSAGE: &str = "Unknown import error";

/// Result of probing one module
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementOutcome {
    Success {
        elapsed_time_ms: f64,
        peak_memory_mb: f64,
    },
    Failure {
        error_kind: String,
        error_message: String,
    },
}

impl MeasurementOutcome {
    pub fn failure(kind: impl Into<String>, message: impl Into<String>) -> Self {
        MeasurementOutcome::Failure {
            error_kind: kind.into(),
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MeasurementOutcome::Success { .. })
    }
}

/// Captured output of a finished child
#[derive(Debug, Clone, Default)]
pub struct ProbeOutput {
    /// Child exited with status zero
    pub exited_ok: bool,
    pub stdout: String,
    pub stderr: String,
}

/// One JSON line emitted by the probe script
#[derive(Debug, Deserialize)]
struct ProbeRecord {
    /// Anything other than the string "ok" is a failure record
    #[serde(default)]
    status: Option<serde_json::Value>,
    import_time_ms: Option<f64>,
    memory_mb: Option<f64>,
    error_type: Option<String>,
    error_message: Option<String>,
}

/// Classify a finished child's output into exactly one outcome
pub fn classify_output(output: &ProbeOutput) -> MeasurementOutcome {
    if !output.exited_ok && output.stdout.trim().is_empty() {
        let stderr = output.stderr.trim();
        let message = if stderr.is_empty() {
            "Child process exited unexpectedly."
        } else {
            stderr
        };
        return MeasurementOutcome::failure(SUBPROCESS_ERROR, message);
    }

    let Some(last_line) = output
        .stdout
        .trim()
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
    else {
        return MeasurementOutcome::failure(PARSE_ERROR, "No scanner output received from child process.");
    };

    let invalid = || MeasurementOutcome::failure(PARSE_ERROR, format!("Invalid scanner output: {}", last_line));

    let record: ProbeRecord = match serde_json::from_str(last_line) {
        Ok(r) => r,
        Err(e) => {
            debug!("Probe output did not parse: {}", e);
            return invalid();
        }
    };

    if record.status.as_ref().and_then(|s| s.as_str()) == Some("ok") {
        return match (record.import_time_ms, record.memory_mb) {
            (Some(elapsed_time_ms), Some(peak_memory_mb)) => MeasurementOutcome::Success {
                elapsed_time_ms,
                peak_memory_mb,
            },
            _ => invalid(),
        };
    }

    MeasurementOutcome::failure(
        record.error_type.unwrap_or_else(|| DEFAULT_ERROR_KIND.to_string()),
        record.error_message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
    )
}
