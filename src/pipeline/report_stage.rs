//! Report output stage.

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use anyhow::Result;

/// Build the report configuration for a diff run.
#[must_use]
pub fn build_report_config(
    config: &DiffConfig,
    expected_label: &str,
    current_label: &str,
) -> ReportConfig {
    ReportConfig {
        max_items: config.output.max_items,
        metadata: ReportMetadata::for_inputs(expected_label, current_label),
        only_changes: config.output.only_changes,
    }
}

/// Render a diff report and write it to the configured destination.
pub fn output_report(
    config: &DiffConfig,
    result: &DiffResult,
    report_config: &ReportConfig,
) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let use_color = should_use_color(config.output.no_color, &target);

    let reporter = create_reporter_with_options(format, use_color, config.output.width);
    tracing::debug!(format = %reporter.format(), use_color, "rendering report");

    let report = reporter.generate(result, report_config)?;

    write_output(&report, &target, config.behavior.quiet)
}
