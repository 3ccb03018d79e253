//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::ConfigPreset;
use super::types::{AppConfig, LimitsConfig};
use crate::diff::DiffMode;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".logdiff.yaml",
    ".logdiff.yml",
    "logdiff.yaml",
    "logdiff.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/logdiff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = cwd
        .as_deref()
        .and_then(find_git_root)
        .and_then(|root| find_config_in_dir(&root))
    {
        return Some(path);
    }

    if let Some(path) = dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("logdiff")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up from `start`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from their defaults count as set. A file that
    /// spells out a default value therefore leaves the preset alone; use
    /// [`ConfigOverrides`] when an explicit value must always win.
    pub fn merge(&mut self, other: &Self) {
        if other.compare.mode != DiffMode::default() {
            self.compare.mode = other.compare.mode;
        }
        if other.compare.ignore_case {
            self.compare.ignore_case = true;
        }
        if other.compare.trim {
            self.compare.trim = true;
        }

        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.width.is_some() {
            self.output.width = other.output.width;
        }
        if other.output.only_changes {
            self.output.only_changes = true;
        }
        if other.output.max_items.is_some() {
            self.output.max_items = other.output.max_items;
        }

        if other.behavior.fail_on_diff {
            self.behavior.fail_on_diff = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }

        let defaults = LimitsConfig::default();
        if other.limits.max_lines != defaults.max_lines {
            self.limits.max_lines = other.limits.max_lines;
        }
        if other.limits.max_cells != defaults.max_cells {
            self.limits.max_cells = other.limits.max_cells;
        }
    }

    /// Apply explicit overrides. Every value that is set wins, including
    /// one equal to the default.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(mode) = overrides.mode {
            self.compare.mode = mode;
        }
        if let Some(ignore_case) = overrides.ignore_case {
            self.compare.ignore_case = ignore_case;
        }
        if let Some(trim) = overrides.trim {
            self.compare.trim = trim;
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if let Some(no_color) = overrides.no_color {
            self.output.no_color = no_color;
        }
        if overrides.width.is_some() {
            self.output.width = overrides.width;
        }
        if let Some(only_changes) = overrides.only_changes {
            self.output.only_changes = only_changes;
        }
        if overrides.max_items.is_some() {
            self.output.max_items = overrides.max_items;
        }

        if let Some(fail_on_diff) = overrides.fail_on_diff {
            self.behavior.fail_on_diff = fail_on_diff;
        }
        if let Some(quiet) = overrides.quiet {
            self.behavior.quiet = quiet;
        }

        if let Some(max_lines) = overrides.max_lines {
            self.limits.max_lines = max_lines;
        }
    }

    /// Layer a preset, the discovered config file and explicit overrides.
    ///
    /// Returns the merged config and the path of the file it was read from.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        preset: Option<ConfigPreset>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let mut config = preset.map_or_else(Self::default, Self::from_preset);
        let (file_config, loaded_from) = load_or_default(config_path);
        config.merge(&file_config);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

/// Settings given explicitly on the command line.
///
/// `None` leaves the preset and file layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub mode: Option<DiffMode>,
    pub ignore_case: Option<bool>,
    pub trim: Option<bool>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: Option<bool>,
    pub width: Option<usize>,
    pub only_changes: Option<bool>,
    pub max_items: Option<usize>,
    pub fail_on_diff: Option<bool>,
    pub quiet: Option<bool>,
    pub max_lines: Option<usize>,
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# logdiff configuration file
# ==========================
#
# Place it at:
#   - .logdiff.yaml in your project root
#   - ~/.config/logdiff/logdiff.yaml for global config
#
# CLI arguments always override file settings.

# How lines are compared
compare:
  # ordered: minimal-edit alignment; unordered: match lines regardless of position
  mode: ordered
  # Treat 'Foo' and 'foo' as the same line
  ignore_case: false
  # Ignore leading/trailing whitespace
  trim: false

# Output configuration
output:
  # Format: auto, side-by-side, unified, summary, json
  format: auto
  # Output file path (omit for stdout)
  # file: diff.json
  # Disable colored output
  no_color: false
  # Total width of the side-by-side view
  # width: 120
  # Hide unchanged lines
  only_changes: false
  # Maximum missing/extra lines listed in the summary
  # max_items: 50

# Behavior flags
behavior:
  # Exit with code 1 if the inputs differ
  fail_on_diff: false
  # Suppress non-essential output
  quiet: false

# Input size limits
limits:
  # Maximum lines per side
  max_lines: 20000
  # Maximum comparison table size for ordered mode
  max_cells: 100000000
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
