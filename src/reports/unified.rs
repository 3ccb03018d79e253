//! Unified listing: one line per row with a `-`/`+` marker.

use super::sidebyside::colors;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, EntryKind};
use std::fmt::Write;

/// Unified reporter
pub struct UnifiedReporter {
    colored: bool,
}

impl UnifiedReporter {
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

    const fn col(&self, code: &'static str) -> &'static str {
        if self.colored {
            code
        } else {
            ""
        }
    }
}

impl Default for UnifiedReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for UnifiedReporter {
    fn generate(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(
            out,
            "{}--- {}{}",
            self.col(colors::RED),
            config.expected_label(),
            self.col(colors::RESET)
        )?;
        writeln!(
            out,
            "{}+++ {}{}",
            self.col(colors::GREEN),
            config.current_label(),
            self.col(colors::RESET)
        )?;

        for entry in &result.entries {
            let color = match entry.kind {
                EntryKind::Same if config.only_changes => continue,
                EntryKind::Same => "",
                EntryKind::Removed => colors::RED,
                EntryKind::Added => colors::GREEN,
            };
            writeln!(
                out,
                "{}{} {}{}",
                self.col(color),
                entry.kind.symbol(),
                entry.text,
                self.col(if color.is_empty() { "" } else { colors::RESET })
            )?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Unified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;

    #[test]
    fn test_unified_listing() {
        let result = DiffEngine::new().diff(&["a", "b", "c"], &["a", "x", "c"]);
        let report = UnifiedReporter::new()
            .no_color()
            .generate(&result, &ReportConfig::default())
            .unwrap();
        assert_eq!(report, "--- expected\n+++ current\n  a\n- b\n+ x\n  c\n");
    }

    #[test]
    fn test_only_changes() {
        let result = DiffEngine::new().diff(&["a", "b"], &["a"]);
        let report = UnifiedReporter::new()
            .no_color()
            .generate(&result, &ReportConfig {
                only_changes: true,
                ..ReportConfig::default()
            })
            .unwrap();
        assert_eq!(report, "--- expected\n+++ current\n- b\n");
    }

    #[test]
    fn test_colored_markers() {
        let result = DiffEngine::new().diff(&["a"], &["b"]);
        let report = UnifiedReporter::new()
            .generate(&result, &ReportConfig::default())
            .unwrap();
        assert!(report.contains("\x1b[31m- a\x1b[0m"));
        assert!(report.contains("\x1b[32m+ b\x1b[0m"));
    }
}
