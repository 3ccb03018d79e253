//! **Line-based diffing for logs, query output and other text.**
//!
//! `logdiff` compares an *expected* sequence of lines against a *current* one
//! and classifies every line as `same`, `added` or `removed`. It powers both a
//! command-line tool and a Rust library.
//!
//! ## Key Features
//!
//! - **Ordered diff**: minimal-edit alignment via a longest common subsequence,
//!   with a fixed tie-break so identical inputs always yield identical rows.
//! - **Unordered diff**: multiset matching for outputs whose row order is not
//!   meaningful (SQL results without `ORDER BY`, parallel test logs).
//! - **Normalization**: optional case-insensitive and whitespace-trimmed
//!   comparison, while rows keep the original text from both sides.
//! - **Reports**: side-by-side, unified, summary and JSON output.
//!
//! ## Core Concepts & Modules
//!
//! - **[`diff`]**: the [`DiffEngine`], the two algorithms, and [`DiffRequest`]
//!   for untyped (JSON) callers.
//! - **[`model`]**: comparison keys ([`CompareOptions`]) and the text splitter.
//! - **[`config`]**: layered configuration (presets, YAML file, CLI).
//! - **[`pipeline`]**: load → diff → report stages shared by CLI handlers.
//! - **[`reports`]**: output generators.
//!
//! ## Getting Started
//!
//! ```
//! use logdiff::{DiffEngine, EntryKind};
//!
//! let expected = ["a", "b", "c"];
//! let current = ["a", "x", "c"];
//!
//! let result = DiffEngine::new().diff(&expected, &current);
//!
//! let kinds: Vec<EntryKind> = result.entries.iter().map(|e| e.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [EntryKind::Same, EntryKind::Removed, EntryKind::Added, EntryKind::Same]
//! );
//! assert_eq!(result.missing_lines, ["b"]);
//! assert_eq!(result.extra_lines, ["x"]);
//! ```
//!
//! ### Diffing Raw Text
//!
//! ```
//! use logdiff::{CompareOptions, DiffEngine, DiffMode};
//!
//! let engine = DiffEngine::new()
//!     .with_mode(DiffMode::Unordered)
//!     .with_options(CompareOptions::lenient());
//!
//! let result = engine.diff_text("Alice\nBob\n", "  bob\nalice\n");
//! assert!(!result.has_changes());
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions,
    // `expected`/`current` and `same`/`sum` read fine in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, DiffConfig, DiffInputs};
pub use config::{BehaviorConfig, CompareConfig, LimitsConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{
    diff_ordered, diff_unordered, DiffEngine, DiffEntry, DiffMode, DiffRequest, DiffResult,
    DiffSummary, EntryKind,
};
pub use error::{ErrorContext, InputErrorKind, LogDiffError, Result};
pub use model::{split_lines, CompareOptions};
pub use reports::{ReportFormat, ReportGenerator};
