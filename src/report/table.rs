//! Terminal table rendering for module results.
//!
//! Column widths are computed from the plain cell text; colors are
//! applied after padding so ANSI codes never skew alignment.

use super::schema::{ModuleResult, ModuleStatus, ScanSummary};
use colored::*;

const HEADERS: [&str; 5] = ["Module", "Import Time (ms)", "Memory (MB)", "Status", "Notes"];

// Numeric columns are right-aligned
const RIGHT_ALIGNED: [bool; 5] = [false, true, true, false, false];

/// Format an optional metric, `-` when absent
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "-".to_string(),
    }
}

/// Notes joined with "; ", or the error string when there are none
fn notes_cell(module: &ModuleResult) -> String {
    if module.notes.is_empty() {
        module.error.clone().unwrap_or_default()
    } else {
        module.notes.join("; ")
    }
}

fn row_cells(module: &ModuleResult) -> [String; 5] {
    [
        module.name.clone(),
        format_value(module.import_time_ms),
        format_value(module.memory_mb),
        module.status.to_string(),
        notes_cell(module),
    ]
}

fn pad(text: &str, width: usize, right: bool) -> String {
    if right {
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:<width$}", text, width = width)
    }
}

/// Render a titled table of module results
///
/// **Public** - used by the scan and top commands
pub fn render_modules_table(modules: &[ModuleResult], title: &str) -> String {
    let rows: Vec<[String; 5]> = modules.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let total_width = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    let separator = "-".repeat(total_width);

    let mut out = String::new();
    out.push_str(&format!("{}\n", title.bold()));
    out.push_str(&separator);
    out.push('\n');

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .zip(RIGHT_ALIGNED.iter())
        .map(|((h, w), right)| pad(h, *w, *right))
        .collect();
    out.push_str(header.join(" | ").trim_end());
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for (module, row) in modules.iter().zip(rows.iter()) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .zip(RIGHT_ALIGNED.iter())
            .enumerate()
            .map(|(i, ((cell, w), right))| {
                let padded = pad(cell, *w, *right);
                if i == 3 {
                    colorize_status(&padded, module.status)
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(cells.join(" | ").trim_end());
        out.push('\n');
    }

    out
}

fn colorize_status(text: &str, status: ModuleStatus) -> String {
    match status {
        ModuleStatus::Ok => text.green().to_string(),
        ModuleStatus::Error => text.red().to_string(),
    }
}

/// Print the one-line scan digest
pub fn print_summary(summary: &ScanSummary) {
    println!("{}", summary.digest());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(1.23456)), "1.235");
        assert_eq!(format_value(Some(0.0)), "0.000");
        assert_eq!(format_value(None), "-");
    }

    #[test]
    fn test_render_contains_headers_and_rows() {
        colored::control::set_override(false);
        let modules = vec![
            ModuleResult::success("fast", "/p/fast.py", 0.5, 0.01, vec![]),
            ModuleResult::failure("broken", "/p/broken.py", "RuntimeError: boom"),
        ];

        let table = render_modules_table(&modules, "Report");

        assert!(table.starts_with("Report\n"));
        assert!(table.contains("Import Time (ms)"));
        assert!(table.contains("0.500"));
        assert!(table.contains("RuntimeError: boom"));
        // error rows show placeholders for both metrics
        let broken_line = table.lines().find(|l| l.starts_with("broken")).unwrap();
        assert_eq!(broken_line.matches(" - ").count(), 2);
    }

    #[test]
    fn test_notes_preferred_over_error() {
        let mut module = ModuleResult::success("heavy", "/p/heavy.py", 500.0, 1.0, vec![]);
        module.notes = vec!["a".to_string(), "b".to_string()];

        assert_eq!(notes_cell(&module), "a; b");
    }
}
