//! Diff computation stage.
//!
//! Enforces the size limits, picks the engine and runs the diff.

use super::parse::LoadedInputs;
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::error::{ErrorContext, Result};

/// Run the diff between two loaded inputs.
///
/// A JSON request brings its own engine; otherwise the configured comparison
/// settings apply.
pub fn compute_diff(config: &DiffConfig, inputs: &LoadedInputs) -> Result<DiffResult> {
    let engine = inputs
        .request_engine
        .unwrap_or_else(|| config.compare.to_engine());

    config
        .limits
        .check(inputs.expected.len(), inputs.current.len(), engine.mode())
        .context("checking input size")?;

    if !config.behavior.quiet {
        tracing::info!(
            "Computing {} diff ({})...",
            engine.mode(),
            engine.options().label()
        );
    }

    let result = engine.diff(&inputs.expected, &inputs.current);

    if !config.behavior.quiet {
        tracing::info!(
            "Diff complete: {} same, {} missing, {} extra",
            result.summary.same,
            result.missing_lines.len(),
            result.extra_lines.len()
        );
    }

    Ok(result)
}
