//! Pipeline orchestration for diff operations.
//!
//! Shared load → diff → report stages used by the CLI command handlers.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{decode_lossy, load_inputs, InputSource, LoadedInputs};
pub use report_stage::{build_report_config, output_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or validate the inputs
    #[error("Loading inputs failed: {source}")]
    LoadFailed {
        #[source]
        source: crate::error::LogDiffError,
    },

    /// Diff computation was refused
    #[error("Diff failed: {source}")]
    DiffFailed {
        #[source]
        source: crate::error::LogDiffError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - inputs match (or differences without --fail-on-diff)
    pub const SUCCESS: i32 = 0;
    /// Differences were found and --fail-on-diff is set
    pub const DIFFERENCES_FOUND: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
