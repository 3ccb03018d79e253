//! Default configurations and presets for logdiff.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, CompareConfig, LimitsConfig, OutputConfig};
use crate::diff::DiffMode;
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Ordered, exact comparison with automatic output
    Default,
    /// Ignore case and surrounding whitespace
    #[value(alias = "loose")]
    Lenient,
    /// Exact comparison that fails when anything differs
    #[value(alias = "exact")]
    Strict,
    /// Summary output without colors, fails on differences
    #[value(aliases = ["ci-cd", "pipeline"])]
    Ci,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lenient => "lenient",
            Self::Strict => "strict",
            Self::Ci => "ci",
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Ordered, exact comparison",
            Self::Lenient => "Case-insensitive comparison of trimmed lines",
            Self::Strict => "Exact comparison, exit code 1 on any difference",
            Self::Ci => "Plain summary output for CI logs, exit code 1 on any difference",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Lenient, Self::Strict, Self::Ci]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Lenient => Self::lenient_preset(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Ci => Self::ci_preset(),
        }
    }

    /// Lenient preset.
    ///
    /// - Case-insensitive
    /// - Whitespace-trimmed
    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            compare: CompareConfig {
                mode: DiffMode::Ordered,
                ignore_case: true,
                trim: true,
            },
            ..Self::default()
        }
    }

    /// Strict preset: exact comparison, fail on any difference.
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            behavior: BehaviorConfig {
                fail_on_diff: true,
                quiet: false,
            },
            ..Self::default()
        }
    }

    /// CI preset.
    ///
    /// - Summary output, no colors
    /// - Only changed lines
    /// - Fail on any difference, quiet logs
    #[must_use]
    pub fn ci_preset() -> Self {
        Self {
            compare: CompareConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Summary,
                no_color: true,
                only_changes: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on_diff: true,
                quiet: true,
            },
            limits: LimitsConfig::default(),
        }
    }
}

// ============================================================================
// Default Value Constants
// ============================================================================

/// Default maximum number of lines per side.
pub const DEFAULT_MAX_LINES: usize = 20_000;

/// Default maximum number of LCS table cells for ordered mode.
pub const DEFAULT_MAX_CELLS: u64 = 100_000_000;

/// Default total width of the side-by-side view.
pub const DEFAULT_WIDTH: usize = 120;

/// Default number of missing/extra lines listed in the summary report.
pub const DEFAULT_MAX_ITEMS: usize = 50;
