//! Fold per-module measurements into a scan payload.

use crate::discovery::ModuleTarget;
use crate::probe::{Measure, MeasurementOutcome};
use crate::report::{ModuleResult, ScanPayload, ScanSettings};
use crate::utils::config::HEAVY_IMPORT_NOTE;
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Round to three decimal places
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Strict "greater than" on either metric
pub fn is_heavy(import_time_ms: f64, memory_mb: f64, threshold_ms: f64, threshold_mb: f64) -> bool {
    import_time_ms > threshold_ms || memory_mb > threshold_mb
}

/// Turn one outcome into a persisted result
///
/// Thresholds are compared against the raw values; stored values are
/// rounded afterwards.
pub fn module_result(target: &ModuleTarget, outcome: MeasurementOutcome, settings: &ScanSettings) -> ModuleResult {
    let file = target.file.display().to_string();

    match outcome {
        MeasurementOutcome::Success {
            elapsed_time_ms,
            peak_memory_mb,
        } => {
            let mut notes = Vec::new();
            if is_heavy(elapsed_time_ms, peak_memory_mb, settings.threshold_ms, settings.threshold_mb) {
                notes.push(HEAVY_IMPORT_NOTE.to_string());
            }
            ModuleResult::success(&target.name, file, round3(elapsed_time_ms), round3(peak_memory_mb), notes)
        }
        MeasurementOutcome::Failure {
            error_kind,
            error_message,
        } => ModuleResult::failure(&target.name, file, format!("{}: {}", error_kind, error_message)),
    }
}

/// Measure every target in order and build the payload
///
/// **Public** - main entry point for a scan
///
/// # Arguments
/// * `measurer` - Probe used for each module, one at a time
/// * `project_root` - Recorded in the payload
/// * `targets` - Discovery output, in path order
/// * `settings` - Thresholds and exclusion labels
///
/// # Returns
/// Payload with modules in discovery order
pub fn scan_modules<M: Measure>(
    measurer: &M,
    project_root: &Path,
    targets: &[ModuleTarget],
    settings: ScanSettings,
) -> ScanPayload {
    let start_time = Instant::now();
    info!("Scanning {} modules", targets.len());

    let modules: Vec<ModuleResult> = targets
        .iter()
        .enumerate()
        .map(|(i, target)| {
            debug!("[{}/{}] {}", i + 1, targets.len(), target.name);
            let outcome = measurer.measure(target);
            module_result(target, outcome, &settings)
        })
        .collect();

    let payload = ScanPayload::new(project_root.display().to_string(), settings, modules);

    info!(
        "Scan completed in {:.2}s: {}",
        start_time.elapsed().as_secs_f64(),
        payload.summary.digest()
    );

    payload
}
