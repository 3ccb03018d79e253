//! Comparison keys for line equality.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Normalization applied to a line before it is compared.
///
/// Only the comparison decision uses the normalized key. Display text is
/// always the untransformed line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareOptions {
    /// Lower-case both sides of the comparison
    #[serde(alias = "ignore_case")]
    pub ignore_case: bool,
    /// Strip leading and trailing whitespace from both sides of the comparison
    pub trim: bool,
}

impl CompareOptions {
    /// Exact comparison: no normalization.
    #[must_use]
    pub const fn exact() -> Self {
        Self {
            ignore_case: false,
            trim: false,
        }
    }

    /// Case-insensitive, whitespace-trimmed comparison.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            ignore_case: true,
            trim: true,
        }
    }

    /// Set case-insensitive comparison.
    #[must_use]
    pub const fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Set whitespace trimming.
    #[must_use]
    pub const fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Derive the comparison key for a line.
    ///
    /// Borrows when no lower-casing is needed.
    #[must_use]
    pub fn key<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let line = if self.trim { line.trim() } else { line };
        if self.ignore_case {
            Cow::Owned(line.to_lowercase())
        } else {
            Cow::Borrowed(line)
        }
    }

    /// Derive keys for a whole sequence, preserving order.
    pub fn keys<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> Vec<Cow<'a, str>> {
        lines.iter().map(|line| self.key(line.as_ref())).collect()
    }

    /// Check whether two lines are equal under these options.
    #[must_use]
    pub fn lines_equal(&self, a: &str, b: &str) -> bool {
        self.key(a) == self.key(b)
    }

    /// Short human-readable label, e.g. `"ignore-case, trim"`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match (self.ignore_case, self.trim) {
            (false, false) => "exact",
            (true, false) => "ignore-case",
            (false, true) => "trim",
            (true, true) => "ignore-case, trim",
        }
    }
}
