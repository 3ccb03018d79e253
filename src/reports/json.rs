//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffEntry, DiffMode, DiffResult, DiffSummary};
use crate::model::CompareOptions;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "logdiff",
                    version: env!("CARGO_PKG_VERSION"),
                },
                generated_at: config
                    .metadata
                    .generated_at
                    .clone()
                    .unwrap_or_else(|| Utc::now().to_rfc3339()),
                expected: InputInfo {
                    path: config.metadata.expected_path.as_deref(),
                    line_count: result.summary.expected_lines,
                },
                current: InputInfo {
                    path: config.metadata.current_path.as_deref(),
                    line_count: result.summary.current_lines,
                },
                mode: result.mode,
                options: result.options,
            },
            summary: &result.summary,
            entries: &result.entries,
            missing_lines: &result.missing_lines,
            extra_lines: &result.extra_lines,
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: &'a DiffSummary,
    entries: &'a [DiffEntry],
    missing_lines: &'a [String],
    extra_lines: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    expected: InputInfo<'a>,
    current: InputInfo<'a>,
    mode: DiffMode,
    options: CompareOptions,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InputInfo<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    line_count: usize,
}
