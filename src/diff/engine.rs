//! Line diff engine implementation.

use super::{diff_ordered, diff_unordered, DiffMode, DiffResult};
use crate::model::{split_lines, CompareOptions};

/// Diff engine for comparing two line sequences.
///
/// The engine only holds configuration, so it is cheap to copy and safe to
/// share between threads. Every call computes a fresh result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffEngine {
    mode: DiffMode,
    options: CompareOptions,
}

impl DiffEngine {
    /// Create a new diff engine with default settings (ordered, exact)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diff mode
    #[must_use]
    pub const fn with_mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the comparison options
    #[must_use]
    pub const fn with_options(mut self, options: CompareOptions) -> Self {
        self.options = options;
        self
    }

    /// Compare lines case-insensitively
    #[must_use]
    pub const fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.options.ignore_case = ignore_case;
        self
    }

    /// Trim surrounding whitespace before comparing
    #[must_use]
    pub const fn trim(mut self, trim: bool) -> Self {
        self.options.trim = trim;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> DiffMode {
        self.mode
    }

    #[must_use]
    pub const fn options(&self) -> CompareOptions {
        self.options
    }

    /// Compare two line sequences and return the diff result
    pub fn diff<S: AsRef<str>>(&self, expected: &[S], current: &[S]) -> DiffResult {
        tracing::debug!(
            mode = self.mode.name(),
            expected = expected.len(),
            current = current.len(),
            "computing line diff"
        );

        let result = match self.mode {
            DiffMode::Ordered => diff_ordered(expected, current, self.options),
            DiffMode::Unordered => diff_unordered(expected, current, self.options),
        };

        tracing::debug!(
            same = result.summary.same,
            added = result.summary.added,
            removed = result.summary.removed,
            "line diff complete"
        );
        result
    }

    /// Split two blocks of raw text into lines and compare them
    pub fn diff_text(&self, expected: &str, current: &str) -> DiffResult {
        self.diff(&split_lines(expected), &split_lines(current))
    }
}
