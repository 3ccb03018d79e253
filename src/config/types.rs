//! Configuration types for logdiff operations.

use super::defaults::{DEFAULT_MAX_CELLS, DEFAULT_MAX_LINES};
use crate::diff::{table_cells, DiffEngine, DiffMode};
use crate::error::{InputErrorKind, LogDiffError, Result};
use crate::model::CompareOptions;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Comparison mode and normalization
    pub compare: CompareConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Input size limits
    pub limits: LimitsConfig,
}

impl AppConfig {
    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the diff mode.
    pub const fn mode(mut self, mode: DiffMode) -> Self {
        self.config.compare.mode = mode;
        self
    }

    /// Compare lines case-insensitively.
    pub const fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.config.compare.ignore_case = ignore_case;
        self
    }

    /// Trim surrounding whitespace before comparing.
    pub const fn trim(mut self, trim: bool) -> Self {
        self.config.compare.trim = trim;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Hide unchanged lines in text reports.
    pub const fn only_changes(mut self, only_changes: bool) -> Self {
        self.config.output.only_changes = only_changes;
        self
    }

    /// Exit with a non-zero code when the inputs differ.
    pub const fn fail_on_diff(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_diff = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Set the per-side line limit.
    pub const fn max_lines(mut self, max_lines: usize) -> Self {
        self.config.limits.max_lines = max_lines;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Where the two inputs come from
    pub inputs: DiffInputs,
    /// Comparison configuration
    pub compare: CompareConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Input size limits
    pub limits: LimitsConfig,
}

impl DiffConfig {
    /// Combine resolved application settings with the command's inputs.
    #[must_use]
    pub fn from_app_config(config: AppConfig, inputs: DiffInputs) -> Self {
        Self {
            inputs,
            compare: config.compare,
            output: config.output,
            behavior: config.behavior,
            limits: config.limits,
        }
    }
}

/// Inputs for a diff operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffInputs {
    /// Two text inputs; `-` reads from stdin
    Paths {
        /// Path to the expected (baseline) text
        expected: PathBuf,
        /// Path to the current text
        current: PathBuf,
    },
    /// A JSON diff request carrying both line sequences and options
    Request(PathBuf),
}

impl DiffInputs {
    /// Display labels for the two sides.
    #[must_use]
    pub fn labels(&self) -> (String, String) {
        match self {
            Self::Paths { expected, current } => (
                expected.display().to_string(),
                current.display().to_string(),
            ),
            Self::Request(path) => {
                let name = path.display();
                (format!("{name}#expected"), format!("{name}#current"))
            }
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Comparison configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CompareConfig {
    /// Diff mode: ordered (LCS alignment) or unordered (multiset matching)
    pub mode: DiffMode,
    /// Lower-case lines before comparing
    pub ignore_case: bool,
    /// Trim leading/trailing whitespace before comparing
    pub trim: bool,
}

impl CompareConfig {
    /// Normalization options for the engine.
    #[must_use]
    pub const fn to_options(&self) -> CompareOptions {
        CompareOptions {
            ignore_case: self.ignore_case,
            trim: self.trim,
        }
    }

    /// Build the diff engine described by this configuration.
    #[must_use]
    pub fn to_engine(&self) -> DiffEngine {
        DiffEngine::new()
            .with_mode(self.mode)
            .with_options(self.to_options())
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Total width of the side-by-side view (default: 120)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 20))]
    pub width: Option<usize>,
    /// Hide unchanged lines in text reports
    pub only_changes: bool,
    /// Maximum missing/extra lines listed in the summary report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            width: None,
            only_changes: false,
            max_items: None,
        }
    }
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if the inputs differ
    pub fail_on_diff: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Input size limits, enforced before the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of lines on either side
    #[schemars(range(min = 1))]
    pub max_lines: usize,
    /// Maximum LCS table cells, `(expected + 1) * (current + 1)`, for ordered mode
    #[schemars(range(min = 1))]
    pub max_cells: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl LimitsConfig {
    /// Limits that accept any input.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_lines: usize::MAX,
            max_cells: u64::MAX,
        }
    }

    /// Check input sizes against the limits.
    pub fn check(&self, expected_len: usize, current_len: usize, mode: DiffMode) -> Result<()> {
        if expected_len > self.max_lines {
            return Err(LogDiffError::too_many_lines(
                "expected",
                expected_len,
                self.max_lines,
            ));
        }
        if current_len > self.max_lines {
            return Err(LogDiffError::too_many_lines(
                "current",
                current_len,
                self.max_lines,
            ));
        }
        if mode == DiffMode::Ordered {
            let cells = table_cells(expected_len, current_len);
            if cells > self.max_cells {
                return Err(LogDiffError::input(
                    "input size limit exceeded",
                    InputErrorKind::TooManyCells {
                        cells,
                        limit: self.max_cells,
                    },
                ));
            }
        }
        Ok(())
    }
}
