//! Integration tests for logdiff
//!
//! These tests verify end-to-end behavior of the diff engine through the
//! public API: both modes, normalization, duplicates and untyped requests.

use logdiff::{
    split_lines, CompareOptions, DiffEngine, DiffEntry, DiffMode, DiffRequest, EntryKind,
    InputErrorKind, LogDiffError,
};

fn ordered() -> DiffEngine {
    DiffEngine::new()
}

fn unordered() -> DiffEngine {
    DiffEngine::new().with_mode(DiffMode::Unordered)
}

fn kinds(entries: &[DiffEntry]) -> Vec<EntryKind> {
    entries.iter().map(|e| e.kind).collect()
}

// ============================================================================
// Ordered Diff Tests
// ============================================================================

mod ordered_tests {
    use super::*;

    #[test]
    fn test_single_substitution() {
        let result = ordered().diff(&["a", "b", "c"], &["a", "x", "c"]);

        assert_eq!(
            result.entries,
            vec![
                DiffEntry::same(0, 0, "a", "a"),
                DiffEntry::removed(1, "b"),
                DiffEntry::added(1, "x"),
                DiffEntry::same(2, 2, "c", "c"),
            ]
        );
        assert_eq!(result.missing_lines, ["b"]);
        assert_eq!(result.extra_lines, ["x"]);
        assert_eq!(result.summary.same, 2);
        assert_eq!(result.summary.total_changes, 2);
    }

    #[test]
    fn test_tie_break_prefers_added() {
        let result = ordered().diff(&["A"], &["A", "A"]);

        assert_eq!(
            result.entries,
            vec![DiffEntry::added(0, "A"), DiffEntry::same(0, 1, "A", "A")]
        );
        assert!(result.missing_lines.is_empty());
        assert_eq!(result.extra_lines, ["A"]);
    }

    #[test]
    fn test_removed_when_current_is_shorter() {
        let result = ordered().diff(&["a", "b"], &["a"]);

        assert_eq!(kinds(&result.entries), [EntryKind::Same, EntryKind::Removed]);
        assert_eq!(result.missing_lines, ["b"]);
        assert!(result.extra_lines.is_empty());
    }

    #[test]
    fn test_rows_follow_both_input_orders() {
        let expected = ["one", "two", "three", "four", "five"];
        let current = ["zero", "one", "three", "four", "six", "five"];
        let result = ordered().diff(&expected, &current);

        let originals: Vec<usize> = result
            .entries
            .iter()
            .filter_map(|e| e.original_index)
            .collect();
        let currents: Vec<usize> = result
            .entries
            .iter()
            .filter_map(|e| e.current_index)
            .collect();

        assert_eq!(originals, (0..expected.len()).collect::<Vec<_>>());
        assert_eq!(currents, (0..current.len()).collect::<Vec<_>>());
        assert_eq!(result.missing_lines, ["two"]);
        assert_eq!(result.extra_lines, ["zero", "six"]);
    }

    #[test]
    fn test_completely_different_inputs() {
        let result = ordered().diff(&["a", "b"], &["c", "d"]);

        assert_eq!(result.summary.same, 0);
        assert_eq!(result.missing_lines, ["a", "b"]);
        assert_eq!(result.extra_lines, ["c", "d"]);
    }
}

// ============================================================================
// Unordered Diff Tests
// ============================================================================

mod unordered_tests {
    use super::*;

    #[test]
    fn test_matches_regardless_of_position() {
        let result = unordered().diff(&["a", "b", "c"], &["c", "a", "d"]);

        assert_eq!(
            result.entries,
            vec![
                DiffEntry::same(0, 1, "a", "a"),
                DiffEntry::removed(1, "b"),
                DiffEntry::same(2, 0, "c", "c"),
                DiffEntry::added(2, "d"),
            ]
        );
        assert_eq!(result.missing_lines, ["b"]);
        assert_eq!(result.extra_lines, ["d"]);
    }

    #[test]
    fn test_duplicate_expected_lines() {
        let result = unordered().diff(&["X", "X"], &["X"]);

        assert_eq!(kinds(&result.entries), [EntryKind::Same, EntryKind::Removed]);
        assert_eq!(result.entries[0].current_index, Some(0));
        assert_eq!(result.missing_lines, ["X"]);
        assert!(result.extra_lines.is_empty());
    }

    #[test]
    fn test_duplicates_pair_first_in_first_out() {
        let result = unordered().diff(&["k"], &["k", "other", "k"]);

        assert_eq!(result.entries[0], DiffEntry::same(0, 0, "k", "k"));
        let extras: Vec<Option<usize>> = result
            .entries
            .iter()
            .filter(|e| e.kind == EntryKind::Added)
            .map(|e| e.current_index)
            .collect();
        assert_eq!(extras, [Some(1), Some(2)]);
        assert_eq!(result.extra_lines, ["other", "k"]);
    }

    #[test]
    fn test_extras_follow_current_order() {
        let result = unordered().diff(&["m"], &["z", "m", "y", "x"]);

        assert_eq!(result.extra_lines, ["z", "y", "x"]);
        let tail: Vec<&str> = result.entries[1..].iter().map(|e| e.text.as_str()).collect();
        assert_eq!(tail, ["z", "y", "x"]);
    }

    #[test]
    fn test_same_multiset_has_no_changes() {
        let result = unordered().diff(&["1", "2", "2", "3"], &["2", "3", "1", "2"]);

        assert!(!result.has_changes());
        assert_eq!(result.summary.same, 4);
    }
}

// ============================================================================
// Empty Input Tests
// ============================================================================

mod empty_input_tests {
    use super::*;

    #[test]
    fn test_empty_expected_in_both_modes() {
        for engine in [ordered(), unordered()] {
            let result = engine.diff(&[], &["p", "q"]);

            assert_eq!(kinds(&result.entries), [EntryKind::Added, EntryKind::Added]);
            assert!(result.missing_lines.is_empty());
            assert_eq!(result.extra_lines, ["p", "q"]);
        }
    }

    #[test]
    fn test_empty_current_in_both_modes() {
        for engine in [ordered(), unordered()] {
            let result = engine.diff(&["p", "q"], &[]);

            assert_eq!(
                kinds(&result.entries),
                [EntryKind::Removed, EntryKind::Removed]
            );
            assert_eq!(result.missing_lines, ["p", "q"]);
            assert!(result.extra_lines.is_empty());
        }
    }

    #[test]
    fn test_both_empty() {
        let empty: [&str; 0] = [];
        for engine in [ordered(), unordered()] {
            let result = engine.diff(&empty, &empty);
            assert!(result.entries.is_empty());
            assert!(!result.has_changes());
        }
    }
}

// ============================================================================
// Normalization Tests
// ============================================================================

mod normalization_tests {
    use super::*;

    #[test]
    fn test_case_sensitivity() {
        let strict = ordered().diff(&["Foo"], &["foo"]);
        assert_eq!(strict.missing_lines, ["Foo"]);
        assert_eq!(strict.extra_lines, ["foo"]);

        let lenient = ordered().ignore_case(true).diff(&["Foo"], &["foo"]);
        assert!(!lenient.has_changes());
    }

    #[test]
    fn test_trim() {
        let strict = unordered().diff(&["  a"], &["a"]);
        assert_eq!(strict.missing_lines, ["  a"]);
        assert_eq!(strict.extra_lines, ["a"]);

        let trimmed = unordered().trim(true).diff(&["  a"], &["a"]);
        assert!(!trimmed.has_changes());
    }

    #[test]
    fn test_rows_keep_original_text() {
        let engine = ordered().with_options(CompareOptions::lenient());
        let result = engine.diff(&["  Hello "], &["hello"]);

        let row = &result.entries[0];
        assert_eq!(row.kind, EntryKind::Same);
        assert_eq!(row.text, "  Hello ");
        assert_eq!(row.expected_text.as_deref(), Some("  Hello "));
        assert_eq!(row.current_text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_internal_whitespace_is_significant() {
        let result = ordered().trim(true).diff(&["a  b"], &["a b"]);
        assert!(result.has_changes());
    }
}

// ============================================================================
// Text Splitting Tests
// ============================================================================

mod text_tests {
    use super::*;

    #[test]
    fn test_split_keeps_blank_lines() {
        assert_eq!(split_lines("a\n\nb"), ["a", "", "b"]);
        assert_eq!(split_lines("a\r\nb\r\n"), ["a", "b", ""]);
    }

    #[test]
    fn test_diff_text_with_mixed_terminators() {
        let result = ordered().diff_text("a\r\nb\nc", "a\nb\r\nc");
        assert!(!result.has_changes());
        assert_eq!(result.summary.same, 3);
    }

    #[test]
    fn test_blank_line_is_a_change() {
        let result = ordered().diff_text("a\nb", "a\n\nb");
        assert_eq!(result.extra_lines, [""]);
    }
}

// ============================================================================
// Request Tests
// ============================================================================

mod request_tests {
    use super::*;

    fn invalid_argument(err: &LogDiffError) -> bool {
        matches!(
            err,
            LogDiffError::Input {
                source: InputErrorKind::InvalidArgument(_),
                ..
            }
        )
    }

    #[test]
    fn test_request_with_options() {
        let request = DiffRequest::from_json(
            r#"{"expected": ["A", "b"], "current": ["b", "a"], "ignoreCase": true, "mode": "unordered"}"#,
        )
        .expect("valid request");

        let result = request.run();
        assert_eq!(result.mode, DiffMode::Unordered);
        assert!(!result.has_changes());
    }

    #[test]
    fn test_missing_sequence_is_rejected() {
        let err = DiffRequest::from_json(r#"{"expected": ["a"]}"#).unwrap_err();
        assert!(invalid_argument(&err));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_null_sequence_is_rejected() {
        let err = DiffRequest::from_json(r#"{"expected": null, "current": []}"#).unwrap_err();
        assert!(invalid_argument(&err));
    }

    #[test]
    fn test_non_string_line_is_rejected() {
        let err = DiffRequest::from_json(r#"{"expected": ["a", 1], "current": []}"#).unwrap_err();
        assert!(invalid_argument(&err));
    }

    #[test]
    fn test_request_matches_engine() {
        let request = DiffRequest::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec!["a".into(), "x".into(), "c".into()],
        );
        let direct = ordered().diff(&request.expected, &request.current);
        assert_eq!(request.run(), direct);
    }
}
