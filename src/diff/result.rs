//! Diff result structures.

use super::DiffMode;
use crate::model::CompareOptions;
use serde::{Deserialize, Serialize};

/// Classification of a single diff row.
///
/// There is no `Modified` kind: a modified line shows up as a `Removed` row
/// followed by an `Added` row, and renderers may pair them visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Present on both sides
    Same,
    /// Present only in `current`
    Added,
    /// Present only in `expected`
    Removed,
}

impl EntryKind {
    /// Single-character marker used by text renderers.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Same => ' ',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a diff result.
///
/// `Same` rows carry both indices and both texts. `Removed` rows carry only
/// the expected side and `Added` rows only the current side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    /// Display text: the expected line for `Same`/`Removed`, the current line for `Added`
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_text: Option<String>,
    /// Actual current-side text, which may differ from `text` in normalized-away respects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_text: Option<String>,
}

impl DiffEntry {
    /// A row matched on both sides.
    #[must_use]
    pub fn same(
        original_index: usize,
        current_index: usize,
        expected_text: &str,
        current_text: &str,
    ) -> Self {
        Self {
            text: expected_text.to_string(),
            kind: EntryKind::Same,
            original_index: Some(original_index),
            current_index: Some(current_index),
            expected_text: Some(expected_text.to_string()),
            current_text: Some(current_text.to_string()),
        }
    }

    /// An expected line with no counterpart in `current`.
    #[must_use]
    pub fn removed(original_index: usize, text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: EntryKind::Removed,
            original_index: Some(original_index),
            current_index: None,
            expected_text: Some(text.to_string()),
            current_text: None,
        }
    }

    /// A current line with no counterpart in `expected`.
    #[must_use]
    pub fn added(current_index: usize, text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: EntryKind::Added,
            original_index: None,
            current_index: Some(current_index),
            expected_text: None,
            current_text: Some(text.to_string()),
        }
    }

    /// 1-based expected line number, for display.
    #[must_use]
    pub fn original_line_number(&self) -> Option<usize> {
        self.original_index.map(|i| i + 1)
    }

    /// 1-based current line number, for display.
    #[must_use]
    pub fn current_line_number(&self) -> Option<usize> {
        self.current_index.map(|i| i + 1)
    }
}

/// Row counts for a diff result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub same: usize,
    pub added: usize,
    pub removed: usize,
    /// Number of expected lines (`same + removed`)
    pub expected_lines: usize,
    /// Number of current lines (`same + added`)
    pub current_lines: usize,
    /// Number of rows that are not `same`
    pub total_changes: usize,
}

/// Complete result of a line diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct DiffResult {
    /// Algorithm that produced this result
    pub mode: DiffMode,
    /// Normalization used for comparison
    pub options: CompareOptions,
    pub summary: DiffSummary,
    pub entries: Vec<DiffEntry>,
    /// Expected lines with no match, in expected order
    pub missing_lines: Vec<String>,
    /// Current lines with no match, in current order
    pub extra_lines: Vec<String>,
}

impl DiffResult {
    /// Create an empty result for the given mode and options.
    pub fn new(mode: DiffMode, options: CompareOptions) -> Self {
        Self {
            mode,
            options,
            summary: DiffSummary::default(),
            entries: Vec::new(),
            missing_lines: Vec::new(),
            extra_lines: Vec::new(),
        }
    }

    /// Recount the summary from the entries.
    pub fn calculate_summary(&mut self) {
        let mut summary = DiffSummary::default();
        for entry in &self.entries {
            match entry.kind {
                EntryKind::Same => summary.same += 1,
                EntryKind::Added => summary.added += 1,
                EntryKind::Removed => summary.removed += 1,
            }
        }
        summary.expected_lines = summary.same + summary.removed;
        summary.current_lines = summary.same + summary.added;
        summary.total_changes = summary.added + summary.removed;
        self.summary = summary;
    }

    /// Check if the two inputs differ under the configured normalization.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.missing_lines.is_empty() || !self.extra_lines.is_empty()
    }

    /// Number of rows of the given kind.
    #[must_use]
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}
