//! Unordered diff: multiset matching that ignores position.

use super::{DiffEntry, DiffMode, DiffResult};
use crate::model::CompareOptions;
use std::borrow::Cow;
use std::collections::{HashMap, VecDeque};

/// Diff two line sequences as multisets.
///
/// Each expected line consumes the earliest unconsumed current line with the
/// same key. Expected-derived rows come first in expected order, followed by
/// the leftover current lines in current order.
pub fn diff_unordered<S: AsRef<str>>(
    expected: &[S],
    current: &[S],
    options: CompareOptions,
) -> DiffResult {
    // Per-key queue of unconsumed current indices, ascending
    let mut pending: HashMap<Cow<'_, str>, VecDeque<usize>> = HashMap::new();
    for (index, line) in current.iter().enumerate() {
        pending
            .entry(options.key(line.as_ref()))
            .or_default()
            .push_back(index);
    }

    let mut result = DiffResult::new(DiffMode::Unordered, options);
    result.entries.reserve(expected.len() + current.len());

    for (index, line) in expected.iter().enumerate() {
        let line = line.as_ref();
        let matched = pending
            .get_mut(options.key(line).as_ref())
            .and_then(VecDeque::pop_front);

        match matched {
            Some(current_index) => result.entries.push(DiffEntry::same(
                index,
                current_index,
                line,
                current[current_index].as_ref(),
            )),
            None => {
                result.entries.push(DiffEntry::removed(index, line));
                result.missing_lines.push(line.to_string());
            }
        }
    }

    let mut leftover: Vec<usize> = pending.into_values().flatten().collect();
    leftover.sort_unstable();

    for index in leftover {
        let text = current[index].as_ref();
        result.entries.push(DiffEntry::added(index, text));
        result.extra_lines.push(text.to_string());
    }

    result.calculate_summary();
    result
}
