#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the text splitter and the ordered diff over its output.
///
/// The input is cut in half at the first NUL byte; each half becomes one side
/// of the diff after lossy decoding.
fuzz_target!(|data: &[u8]| {
    let (left, right) = match data.iter().position(|&b| b == 0) {
        Some(pos) => (&data[..pos], &data[pos + 1..]),
        None => (data, &[][..]),
    };
    let expected = String::from_utf8_lossy(left);
    let current = String::from_utf8_lossy(right);

    // Keep the LCS table small
    if expected.len() > 4096 || current.len() > 4096 {
        return;
    }

    let lines = logdiff::split_lines(&expected);
    assert_eq!(lines.len(), logdiff::model::line_count(&expected));

    let result = logdiff::DiffEngine::new().diff_text(&expected, &current);
    assert_eq!(result.summary.expected_lines, lines.len());
});
