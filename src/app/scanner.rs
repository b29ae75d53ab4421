use crate::app::counter::count_lines;
use crate::app::models::ScanReport;
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

/// Walks a tree and counts lines in every accepted file.
///
/// The result depends only on the root, the exclusion substrings and the
/// extension allow-list, so it can be driven directly against a scratch tree.
pub struct Scanner {
    root: PathBuf,
    exclude: Vec<String>,
    extensions: BTreeSet<String>,
}

impl Scanner {
    pub fn new(root: PathBuf, exclude: &[String], extensions: &BTreeSet<&str>) -> Self {
        Self {
            root,
            exclude: exclude.to_vec(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn scan(&self) -> ScanReport {
        let mut report = ScanReport::default();

        // Plain walk: no gitignore or hidden-file rules, symlinked dirs not followed.
        let prune = self.exclude.clone();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                entry.depth() == 0 || !is_dir || !is_excluded(entry.path(), &prune)
            })
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    if let Some(lines) = self.process_entry(entry.path()) {
                        report.record(entry.into_path(), lines);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        log::debug!(
            "Scanned {} files under {}",
            report.file_count,
            self.root.display()
        );
        report
    }

    fn process_entry(&self, path: &Path) -> Option<u64> {
        // Follows links, so a link to a directory is a directory. Dangling
        // links stay in and count as unreadable files.
        if let Ok(meta) = fs::metadata(path) {
            if meta.is_dir() || is_special(&meta.file_type()) {
                return None;
            }
        }
        if is_excluded(path, &self.exclude) || !self.accepts_extension(path) {
            return None;
        }
        Some(count_lines(path))
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

// Reading a FIFO or device would block or never end.
#[cfg(unix)]
fn is_special(file_type: &FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file_type.is_fifo()
        || file_type.is_socket()
        || file_type.is_char_device()
        || file_type.is_block_device()
}

#[cfg(not(unix))]
fn is_special(_file_type: &FileType) -> bool {
    false
}

/// True when the path's string form contains any of the substrings.
pub fn is_excluded(path: &Path, patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    patterns.iter().any(|p| path_str.contains(p.as_str()))
}
