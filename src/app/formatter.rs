use crate::app::models::ScanReport;
use std::collections::BTreeSet;
use std::path::Path;

const RULE_WIDTH: usize = 50;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_header(root: &Path, exclude: &[String], extensions: &BTreeSet<&str>) -> String {
        let extensions: Vec<&str> = extensions.iter().copied().collect();
        format!(
            "Analyzing code in: {}\nExcluded directories: {:?}\nSupported file extensions: {:?}\n{}",
            root.display(),
            exclude,
            extensions,
            rule()
        )
    }

    pub fn format_summary(report: &ScanReport) -> String {
        format!(
            "Total lines of code: {}\nTotal files counted: {}",
            format_thousands(report.total_lines),
            format_thousands(report.file_count as u64)
        )
    }

    /// One row per file with a nonzero count, largest first.
    pub fn format_file_breakdown(report: &ScanReport) -> String {
        let mut out = format!("\nFile-by-file breakdown:\n{}", rule());
        for (path, lines) in report.sorted_files() {
            out.push_str(&format!(
                "\n{:>8} lines | {}",
                format_thousands(lines),
                path.display()
            ));
        }
        out
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Formats a number with comma thousand separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
