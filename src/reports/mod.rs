//! Report generation for diff results.
//!
//! This module provides multiple output formats for line diff results:
//! - Side-by-side: two-column terminal view with line numbers
//! - Unified: single-column `-`/`+` listing
//! - Summary: counts plus the missing and extra lines
//! - JSON: structured data for programmatic integration

mod json;
mod sidebyside;
mod summary;
mod types;
mod unified;

pub use json::JsonReporter;
pub use sidebyside::SideBySideReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};
pub use unified::UnifiedReporter;

use crate::diff::DiffResult;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color and width control
///
/// `Auto` falls back to the summary; callers that know whether stdout is a
/// terminal resolve it first.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    width: Option<usize>,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::SideBySide => {
            let mut reporter = SideBySideReporter::new();
            if let Some(width) = width {
                reporter = reporter.width(width);
            }
            if !use_color {
                reporter = reporter.no_colors();
            }
            Box::new(reporter)
        }
        ReportFormat::Unified => {
            if use_color {
                Box::new(UnifiedReporter::new())
            } else {
                Box::new(UnifiedReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
