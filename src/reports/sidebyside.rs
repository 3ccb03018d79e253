//! Side-by-side diff output similar to difftastic.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::config::DEFAULT_WIDTH;
use crate::diff::{DiffEntry, DiffResult, EntryKind};
use std::fmt::Write;
use unicode_width::UnicodeWidthChar;

/// ANSI color codes
pub(super) mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const LINE_NUM: &str = "\x1b[38;5;242m"; // Gray for line numbers
}

const NUM_WIDTH: usize = 5;
/// Line number, marker and the spaces around them.
const GUTTER: usize = NUM_WIDTH + 3;
const SEPARATOR: &str = " │ ";
const TAB: &str = "    ";

/// Side-by-side diff reporter
pub struct SideBySideReporter {
    /// Total output width in columns
    width: usize,
    /// Use colors
    use_colors: bool,
}

/// One visual row: a left cell from `expected`, a right cell from `current`.
struct Row<'a> {
    left: Option<&'a DiffEntry>,
    right: Option<&'a DiffEntry>,
}

impl SideBySideReporter {
    /// Create a new side-by-side reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            use_colors: true,
        }
    }

    /// Set total width
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Disable colors
    #[must_use]
    pub const fn no_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    const fn col(&self, code: &'static str) -> &'static str {
        if self.use_colors {
            code
        } else {
            ""
        }
    }

    /// Display columns available for line text on each side.
    fn text_width(&self) -> usize {
        (self.width.saturating_sub(SEPARATOR.len()) / 2)
            .saturating_sub(GUTTER)
            .max(4)
    }

    fn format_header(&self, expected: &str, current: &str) -> String {
        let half_width = self.text_width() + GUTTER;
        format!(
            "{}{}{}{SEPARATOR}{}{}{}\n",
            self.col(colors::BOLD),
            fit(expected, half_width),
            self.col(colors::RESET),
            self.col(colors::BOLD),
            fit(current, half_width),
            self.col(colors::RESET),
        )
    }

    fn format_separator(&self) -> String {
        let half_width = self.text_width() + GUTTER;
        format!(
            "{}{}─┼─{}{}\n",
            self.col(colors::DIM),
            "─".repeat(half_width),
            "─".repeat(half_width),
            self.col(colors::RESET)
        )
    }

    fn format_cell(&self, number: Option<usize>, kind: Option<EntryKind>, text: &str) -> String {
        let (color, num_color) = match kind {
            Some(EntryKind::Removed) => (colors::RED, colors::RED),
            Some(EntryKind::Added) => (colors::GREEN, colors::GREEN),
            Some(EntryKind::Same) => ("", colors::LINE_NUM),
            None => ("", colors::DIM),
        };
        let marker = kind.map_or(' ', |k| k.symbol());
        let number = number.map_or_else(|| ".".to_string(), |n| n.to_string());

        format!(
            "{}{number:>NUM_WIDTH$}{} {}{marker} {}{}",
            self.col(num_color),
            self.col(colors::RESET),
            self.col(color),
            fit(text, self.text_width()),
            self.col(colors::RESET),
        )
    }

    fn format_row(&self, row: &Row<'_>) -> String {
        let left = row.left.map_or_else(
            || self.format_cell(None, None, ""),
            |entry| {
                let text = entry.expected_text.as_deref().unwrap_or(&entry.text);
                self.format_cell(entry.original_line_number(), Some(entry.kind), text)
            },
        );
        let right = row.right.map_or_else(
            || self.format_cell(None, None, ""),
            |entry| {
                let text = entry.current_text.as_deref().unwrap_or(&entry.text);
                self.format_cell(entry.current_line_number(), Some(entry.kind), text)
            },
        );
        format!("{left}{SEPARATOR}{right}\n")
    }

    fn format_footer(&self, result: &DiffResult) -> String {
        let summary = &result.summary;
        format!(
            "{} same  {}-{} missing{}  {}+{} extra{}\n",
            summary.same,
            self.col(colors::RED),
            result.missing_lines.len(),
            self.col(colors::RESET),
            self.col(colors::GREEN),
            result.extra_lines.len(),
            self.col(colors::RESET),
        )
    }
}

impl Default for SideBySideReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SideBySideReporter {
    fn generate(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(
            out,
            "{}logdiff{} --- {} ({})",
            self.col(colors::CYAN),
            self.col(colors::RESET),
            result.mode,
            result.options.label()
        )?;

        out.push_str(&self.format_header(config.expected_label(), config.current_label()));
        out.push_str(&self.format_separator());

        let rows = pair_rows(&result.entries);
        let mut shown = 0;
        for row in &rows {
            let unchanged = row.left.is_some_and(|entry| entry.kind == EntryKind::Same);
            if config.only_changes && unchanged {
                continue;
            }
            out.push_str(&self.format_row(row));
            shown += 1;
        }

        if shown == 0 {
            let message = if result.entries.is_empty() {
                "Both inputs are empty"
            } else {
                "No differences"
            };
            writeln!(out, "{}{message}{}", self.col(colors::DIM), self.col(colors::RESET))?;
        }

        out.push_str(&self.format_separator());
        out.push_str(&self.format_footer(result));
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::SideBySide
    }
}

/// Group entries into visual rows.
///
/// A `same` entry fills both cells. Within each run of changes, the k-th
/// removed line sits beside the k-th added line.
fn pair_rows(entries: &[DiffEntry]) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(entries.len());
    let mut index = 0;

    while index < entries.len() {
        let entry = &entries[index];
        if entry.kind == EntryKind::Same {
            rows.push(Row {
                left: Some(entry),
                right: Some(entry),
            });
            index += 1;
            continue;
        }

        let end = entries[index..]
            .iter()
            .position(|e| e.kind == EntryKind::Same)
            .map_or(entries.len(), |offset| index + offset);
        let run = &entries[index..end];
        let removed: Vec<&DiffEntry> = run.iter().filter(|e| e.kind == EntryKind::Removed).collect();
        let added: Vec<&DiffEntry> = run.iter().filter(|e| e.kind == EntryKind::Added).collect();

        for k in 0..removed.len().max(added.len()) {
            rows.push(Row {
                left: removed.get(k).copied(),
                right: added.get(k).copied(),
            });
        }
        index = end;
    }

    rows
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate or pad `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let text = text.replace('\t', TAB);
    let total: usize = text.chars().map(char_width).sum();
    let mut out = String::with_capacity(width + 4);

    if total <= width {
        out.push_str(&text);
        out.push_str(&" ".repeat(width - total));
        return out;
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
