//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::config::DEFAULT_MAX_ITEMS;
use crate::diff::DiffResult;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn push_listing(
        &self,
        lines: &mut Vec<String>,
        title: &str,
        items: &[String],
        marker: &str,
        color: &str,
        max_items: usize,
    ) {
        if items.is_empty() {
            return;
        }
        lines.push(String::new());
        lines.push(self.color(&format!("{title} ({}):", items.len()), "bold"));
        for item in items.iter().take(max_items) {
            lines.push(format!("  {} {item}", self.color(marker, color)));
        }
        if items.len() > max_items {
            lines.push(format!(
                "  {}",
                self.color(&format!("... and {} more", items.len() - max_items), "dim")
            ));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &result.summary;

        lines.push(self.color("Line Diff Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            config.expected_label(),
            config.current_label()
        ));
        lines.push(format!(
            "{}  {} → {} lines",
            self.color("Size:", "cyan"),
            summary.expected_lines,
            summary.current_lines
        ));
        lines.push(format!(
            "{}  {} ({})",
            self.color("Mode:", "cyan"),
            result.mode,
            result.options.label()
        ));

        lines.push(String::new());
        lines.push(self.color("Changes:", "bold"));

        let missing = result.missing_lines.len();
        let extra = result.extra_lines.len();

        if missing > 0 {
            lines.push(format!(
                "  {} {} missing",
                self.color(&format!("-{missing}"), "red"),
                plural(missing, "line", "lines")
            ));
        }
        if extra > 0 {
            lines.push(format!(
                "  {} {} extra",
                self.color(&format!("+{extra}"), "green"),
                plural(extra, "line", "lines")
            ));
        }
        if missing == 0 && extra == 0 {
            lines.push(format!("  {}", self.color("No differences", "dim")));
        }
        lines.push(format!(
            "  {} {} unchanged",
            summary.same,
            plural(summary.same, "line", "lines")
        ));

        let max_items = config.max_items.unwrap_or(DEFAULT_MAX_ITEMS);
        self.push_listing(
            &mut lines,
            "Missing lines",
            &result.missing_lines,
            "-",
            "red",
            max_items,
        );
        self.push_listing(
            &mut lines,
            "Extra lines",
            &result.extra_lines,
            "+",
            "green",
            max_items,
        );

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
