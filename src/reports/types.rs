//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Auto-detect: side-by-side if TTY, summary otherwise
    #[default]
    Auto,
    /// Two-column terminal view with line numbers
    #[value(alias = "sbs")]
    SideBySide,
    /// Single-column listing with `-`/`+` markers
    Unified,
    /// Counts plus the missing and extra lines
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::SideBySide => write!(f, "side-by-side"),
            Self::Unified => write!(f, "unified"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum missing/extra lines listed in the summary
    pub max_items: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
    /// Only show changed lines (hide `same` rows)
    pub only_changes: bool,
}

impl ReportConfig {
    /// Label for the expected side.
    #[must_use]
    pub fn expected_label(&self) -> &str {
        self.metadata.expected_path.as_deref().unwrap_or("expected")
    }

    /// Label for the current side.
    #[must_use]
    pub fn current_label(&self) -> &str {
        self.metadata.current_path.as_deref().unwrap_or("current")
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Expected input path (`-` for stdin)
    pub expected_path: Option<String>,
    /// Current input path (`-` for stdin)
    pub current_path: Option<String>,
    /// Generation timestamp
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    /// Metadata for a pair of named inputs.
    pub fn for_inputs(expected: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            expected_path: Some(expected.into()),
            current_path: Some(current.into()),
            ..Self::default()
        }
    }
}
