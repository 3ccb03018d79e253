//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two texts line by line.

use crate::config::{DiffConfig, Validatable};
use crate::diff::DiffResult;
use crate::error::LogDiffError;
use crate::pipeline::{
    build_report_config, compute_diff, exit_codes, load_inputs, output_report, PipelineError,
};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let problems = config.validate();
    if let Some(first) = problems.first() {
        for problem in &problems {
            tracing::debug!("config problem: {problem}");
        }
        return Err(PipelineError::LoadFailed {
            source: LogDiffError::validation(first.to_string()),
        }
        .into());
    }

    let inputs = load_inputs(&config).map_err(|source| PipelineError::LoadFailed { source })?;
    let result =
        compute_diff(&config, &inputs).map_err(|source| PipelineError::DiffFailed { source })?;

    let exit_code = determine_exit_code(&config, &result);

    let report_config = build_report_config(&config, &inputs.expected_label, &inputs.current_label);
    output_report(&config, &result, &report_config)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_diff && result.has_changes() {
        return exit_codes::DIFFERENCES_FOUND;
    }
    exit_codes::SUCCESS
}
