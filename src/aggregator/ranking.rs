//! Filter and rank cached results for the `top` view.
//!
//! Filtering uses "greater than or equal", independent of the strict
//! comparison used when annotating heavy imports.

use crate::report::ModuleResult;
use clap::ValueEnum;
use std::fmt;

/// Metric used to rank modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Time,
    Memory,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Time => write!(f, "time"),
            SortKey::Memory => write!(f, "memory"),
        }
    }
}

impl SortKey {
    /// Metric value, absent metrics rank below any present value
    fn value(&self, module: &ModuleResult) -> f64 {
        let metric = match self {
            SortKey::Time => module.import_time_ms,
            SortKey::Memory => module.memory_mb,
        };
        metric.unwrap_or(-1.0)
    }
}

/// Keep ok modules whose time OR memory reaches its threshold
pub fn filter_successful(modules: &[ModuleResult], threshold_ms: f64, threshold_mb: f64) -> Vec<ModuleResult> {
    modules
        .iter()
        .filter(|m| m.is_ok())
        .filter(|m| {
            m.import_time_ms.unwrap_or(0.0) >= threshold_ms || m.memory_mb.unwrap_or(0.0) >= threshold_mb
        })
        .cloned()
        .collect()
}

/// Stable sort, descending by the chosen metric
pub fn sort_modules(modules: &[ModuleResult], key: SortKey) -> Vec<ModuleResult> {
    let mut sorted = modules.to_vec();
    sorted.sort_by(|a, b| key.value(b).total_cmp(&key.value(a)));
    sorted
}

/// Filter, sort, and truncate to `count`
pub fn top_modules(
    modules: &[ModuleResult],
    key: SortKey,
    count: usize,
    threshold_ms: f64,
    threshold_mb: f64,
) -> Vec<ModuleResult> {
    let filtered = filter_successful(modules, threshold_ms, threshold_mb);
    let mut ranked = sort_modules(&filtered, key);
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules() -> Vec<ModuleResult> {
        vec![
            ModuleResult::success("a", "/a.py", 10.0, 5.0, vec![]),
            ModuleResult::success("b", "/b.py", 30.0, 1.0, vec![]),
            ModuleResult::failure("c", "/c.py", "ImportError: x"),
            ModuleResult::success("d", "/d.py", 20.0, 9.0, vec![]),
        ]
    }

    fn names(modules: &[ModuleResult]) -> Vec<&str> {
        modules.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_filter_is_inclusive() {
        let filtered = filter_successful(&modules(), 20.0, 100.0);
        assert_eq!(names(&filtered), vec!["b", "d"]);
    }

    #[test]
    fn test_filter_drops_errors() {
        let filtered = filter_successful(&modules(), 0.0, 0.0);
        assert_eq!(names(&filtered), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_sort_by_time_and_memory() {
        assert_eq!(names(&sort_modules(&modules(), SortKey::Time)), vec!["b", "d", "a", "c"]);
        assert_eq!(names(&sort_modules(&modules(), SortKey::Memory)), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let tied = vec![
            ModuleResult::success("first", "/1.py", 5.0, 1.0, vec![]),
            ModuleResult::success("second", "/2.py", 5.0, 1.0, vec![]),
        ];
        assert_eq!(names(&sort_modules(&tied, SortKey::Time)), vec!["first", "second"]);
    }

    #[test]
    fn test_top_truncates() {
        let top = top_modules(&modules(), SortKey::Memory, 2, 0.0, 0.0);
        assert_eq!(names(&top), vec!["d", "a"]);
    }
}
