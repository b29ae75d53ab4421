use std::collections::BTreeMap;
use std::path::PathBuf;

/// Aggregate result of a single scan.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanReport {
    pub total_lines: u64,
    /// Every accepted file, including those that counted zero lines.
    pub file_count: usize,
    /// Absolute path to non-blank line count. Only counts above zero are kept.
    pub files: BTreeMap<PathBuf, u64>,
}

impl ScanReport {
    pub fn record(&mut self, path: PathBuf, lines: u64) {
        self.total_lines += lines;
        self.file_count += 1;
        if lines > 0 {
            self.files.insert(path, lines);
        }
    }

    /// Files ordered by descending count, ties by ascending path string.
    pub fn sorted_files(&self) -> Vec<(&PathBuf, u64)> {
        let mut rows: Vec<(&PathBuf, u64)> = self.files.iter().map(|(p, n)| (p, *n)).collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_os_str().cmp(b.0.as_os_str())));
        rows
    }
}
