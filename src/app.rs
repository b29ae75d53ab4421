// Declare modules
pub mod cli;
pub mod config;
pub mod counter;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{self, Component, Path, PathBuf};

use self::cli::Cli;
use self::config::{load_config, save_config, supported_extensions};
use self::formatter::ReportFormatter;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Load Configuration (missing or broken files fall back to defaults)
    let config = load_config(&args.config);

    if args.save_config {
        save_config(&args.config, &config)?;
        log::info!("Saved configuration to {}", args.config.display());
        return Ok(());
    }

    // 3. Resolve Target
    let root = resolve_root(&args.directory)?;
    if !root.is_dir() {
        eprintln!("Error: {} is not a directory", root.display());
        return Ok(());
    }

    // 4. Scan Directory
    let extensions = supported_extensions();
    println!(
        "{}",
        ReportFormatter::format_header(&root, &config.exclude_directories, &extensions)
    );

    let scanner = Scanner::new(root, &config.exclude_directories, &extensions);
    let report = scanner.scan();

    // 5. Print Report
    println!("{}", ReportFormatter::format_summary(&report));
    if args.show_files {
        println!("{}", ReportFormatter::format_file_breakdown(&report));
    }

    Ok(())
}

/// Absolute form of `directory` with `.` and `..` folded lexically.
///
/// Symlinks are left alone, so `link/..` collapses to the link's parent.
fn resolve_root(directory: &Path) -> Result<PathBuf> {
    let absolute = path::absolute(directory)
        .with_context(|| format!("Failed to resolve {}", directory.display()))?;

    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn resolve_root_folds_parent_and_current_components() {
        let root = resolve_root(Path::new("/work/build_tools/../proj/./src")).unwrap();
        assert_eq!(root, PathBuf::from("/work/proj/src"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_root_stops_at_filesystem_root() {
        assert_eq!(resolve_root(Path::new("/../..")).unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn resolve_root_makes_relative_paths_absolute() {
        let root = resolve_root(Path::new("some/../dir")).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("dir"));
        assert!(!root.components().any(|c| c == Component::ParentDir));
    }
}
