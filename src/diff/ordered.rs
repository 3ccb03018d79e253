//! Ordered diff: sequence alignment via longest common subsequence.

use super::{DiffEntry, DiffMode, DiffResult};
use crate::model::CompareOptions;
use std::borrow::Cow;

/// Dense LCS length table of `(n + 1) × (m + 1)` cells.
///
/// `get(i, j)` is the LCS length of `expected[..i]` and `current[..j]` under
/// key equality. Cells hold `u32`: a value never exceeds `min(n, m)`, and a
/// table large enough to overflow it could not be allocated.
struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build(expected: &[Cow<'_, str>], current: &[Cow<'_, str>]) -> Self {
        let width = current.len() + 1;
        let mut cells = vec![0u32; (expected.len() + 1) * width];

        for i in 1..=expected.len() {
            for j in 1..=current.len() {
                cells[i * width + j] = if expected[i - 1] == current[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { width, cells }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Number of table cells an ordered diff of these sizes allocates.
#[must_use]
pub fn table_cells(expected_len: usize, current_len: usize) -> u64 {
    (expected_len as u64 + 1).saturating_mul(current_len as u64 + 1)
}

/// Diff two line sequences preserving relative order.
///
/// Backtracking prefers a match, then an `Added` row whenever
/// `lcs(i, j - 1) >= lcs(i - 1, j)`, then a `Removed` row. The `>=`
/// tie-break decides between equally long alignments and is part of the
/// output contract.
pub fn diff_ordered<S: AsRef<str>>(
    expected: &[S],
    current: &[S],
    options: CompareOptions,
) -> DiffResult {
    let expected_keys = options.keys(expected);
    let current_keys = options.keys(current);
    let table = LcsTable::build(&expected_keys, &current_keys);

    let mut result = DiffResult::new(DiffMode::Ordered, options);
    result.entries.reserve(expected.len() + current.len());

    let (mut i, mut j) = (expected.len(), current.len());
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && expected_keys[i - 1] == current_keys[j - 1] {
            result.entries.push(DiffEntry::same(
                i - 1,
                j - 1,
                expected[i - 1].as_ref(),
                current[j - 1].as_ref(),
            ));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            let text = current[j - 1].as_ref();
            result.entries.push(DiffEntry::added(j - 1, text));
            result.extra_lines.push(text.to_string());
            j -= 1;
        } else {
            let text = expected[i - 1].as_ref();
            result.entries.push(DiffEntry::removed(i - 1, text));
            result.missing_lines.push(text.to_string());
            i -= 1;
        }
    }

    // Backtracking walks from the end
    result.entries.reverse();
    result.missing_lines.reverse();
    result.extra_lines.reverse();

    result.calculate_summary();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::EntryKind;

    fn kinds(result: &DiffResult) -> Vec<EntryKind> {
        result.entries.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_lcs_table_lengths() {
        let a: Vec<Cow<str>> = ["a", "b", "c"].iter().map(|s| Cow::Borrowed(*s)).collect();
        let b: Vec<Cow<str>> = ["a", "x", "c"].iter().map(|s| Cow::Borrowed(*s)).collect();
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.get(3, 3), 2);
        assert_eq!(table.get(0, 3), 0);
        assert_eq!(table.get(1, 1), 1);
    }

    #[test]
    fn test_substitution_in_the_middle() {
        let result = diff_ordered(&["a", "b", "c"], &["a", "x", "c"], CompareOptions::default());

        assert_eq!(
            result.entries,
            vec![
                DiffEntry::same(0, 0, "a", "a"),
                DiffEntry::removed(1, "b"),
                DiffEntry::added(1, "x"),
                DiffEntry::same(2, 2, "c", "c"),
            ]
        );
        assert_eq!(result.missing_lines, vec!["b"]);
        assert_eq!(result.extra_lines, vec!["x"]);
    }

    #[test]
    fn test_tie_break_prefers_added() {
        // Both alignments of a single "A" are equally long; the later
        // current line is matched and the earlier one reported as added.
        let result = diff_ordered(&["A"], &["A", "A"], CompareOptions::default());

        assert_eq!(
            result.entries,
            vec![DiffEntry::added(0, "A"), DiffEntry::same(0, 1, "A", "A")]
        );
        assert!(result.missing_lines.is_empty());
        assert_eq!(result.extra_lines, vec!["A"]);
    }

    #[test]
    fn test_tie_break_orders_removed_before_added() {
        // Equal LCS either way: advancing `j` first means the added row is
        // emitted last during backtracking, so it lands after the removal.
        let result = diff_ordered(&["a"], &["b"], CompareOptions::default());
        assert_eq!(kinds(&result), vec![EntryKind::Removed, EntryKind::Added]);
    }

    #[test]
    fn test_empty_sides() {
        let result = diff_ordered::<&str>(&[], &["p", "q"], CompareOptions::default());
        assert_eq!(kinds(&result), vec![EntryKind::Added, EntryKind::Added]);
        assert_eq!(result.extra_lines, vec!["p", "q"]);

        let result = diff_ordered::<&str>(&["p", "q"], &[], CompareOptions::default());
        assert_eq!(kinds(&result), vec![EntryKind::Removed, EntryKind::Removed]);
        assert_eq!(result.missing_lines, vec!["p", "q"]);

        let result = diff_ordered::<&str>(&[], &[], CompareOptions::default());
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_ignore_case_keeps_both_texts() {
        let options = CompareOptions::default().ignore_case(true);
        let result = diff_ordered(&["SELECT 1"], &["select 1"], options);

        assert_eq!(result.entries.len(), 1);
        let row = &result.entries[0];
        assert_eq!(row.kind, EntryKind::Same);
        assert_eq!(row.text, "SELECT 1");
        assert_eq!(row.current_text.as_deref(), Some("select 1"));
    }

    #[test]
    fn test_table_cells() {
        assert_eq!(table_cells(0, 0), 1);
        assert_eq!(table_cells(2, 3), 12);
    }
}
