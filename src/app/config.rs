use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// Exclusion substrings that are always active, in the order they are reported.
pub const DEFAULT_EXCLUDE_DIRECTORIES: &[&str] = &[
    "node_modules",
    ".venv",
    "__pycache__",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "target",
    ".next",
    ".nuxt",
    "vendor",
    ".idea",
    ".vscode",
    ".pytest_cache",
    ".tox",
    "env",
    "venv",
    "ENV",
    ".bundle",
];

const SUPPORTED_EXTENSIONS: &[&str] = &[
    // Web / scripting
    ".py", ".js", ".ts", ".jsx", ".tsx",
    // C family / JVM
    ".java", ".cpp", ".c", ".h", ".hpp", ".cs",
    ".go", ".rs", ".swift", ".kt", ".kts", ".scala", ".rb", ".php",
    ".html", ".css", ".dart",
    // Objective-C
    ".m", ".mm",
    ".sql", ".sh",
    // Data, docs and config
    ".yaml", ".yml", ".json", ".md", ".txt", ".toml", ".ini", ".cfg", ".xml",
    // Component frameworks
    ".vue", ".svelte",
];

/// Contents of the JSON config file.
///
/// Keys other than `exclude_directories` are carried through untouched so a
/// `--save-config` does not drop them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineCounterConfig {
    #[serde(default)]
    pub exclude_directories: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for LineCounterConfig {
    fn default() -> Self {
        Self {
            exclude_directories: DEFAULT_EXCLUDE_DIRECTORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extra: Map::new(),
        }
    }
}

/// The fixed allow-list of lowercase extensions (leading dot included).
pub fn supported_extensions() -> BTreeSet<&'static str> {
    SUPPORTED_EXTENSIONS.iter().copied().collect()
}

/// Loads the config at `path`, never failing.
///
/// A missing file is created with the defaults. A file that cannot be read or
/// parsed is reported and replaced by the defaults for this run.
pub fn load_config(path: &Path) -> LineCounterConfig {
    if !path.exists() {
        let config = LineCounterConfig::default();
        match save_config(path, &config) {
            Ok(()) => log::info!("Created default configuration file at {}", path.display()),
            Err(err) => log::warn!("{:#}. Using defaults.", err),
        }
        return config;
    }

    match read_user_config(path) {
        Ok(user) => LineCounterConfig {
            exclude_directories: merge_exclusions(DEFAULT_EXCLUDE_DIRECTORIES, user.exclude_directories),
            extra: user.extra,
        },
        Err(err) => {
            log::warn!(
                "Could not parse config file {}: {:#}. Using defaults.",
                path.display(),
                err
            );
            LineCounterConfig::default()
        }
    }
}

/// Writes `config` as JSON with a two-space indent.
pub fn save_config(path: &Path, config: &LineCounterConfig) -> Result<()> {
    let mut json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    json.push('\n');
    fs::write(path, json)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

fn read_user_config(path: &Path) -> Result<LineCounterConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {:?}", path))?;
    let parsed: LineCounterConfig =
        serde_json::from_str(&content).context("Invalid JSON config")?;
    Ok(parsed)
}

/// Defaults first, then user items, keeping first occurrences only.
pub fn merge_exclusions(defaults: &[&str], user: Vec<String>) -> Vec<String> {
    let mut combined: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
    combined.extend(user);
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}
