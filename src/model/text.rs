//! Splitting raw text into line sequences.

/// Split raw text into lines.
///
/// Both `\n` and `\r\n` terminate a line. No line is dropped: blank lines
/// become empty strings and a trailing terminator yields a trailing empty
/// line. Empty text yields an empty sequence. A lone `\r` is kept as content.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Number of lines [`split_lines`] would produce, without allocating.
#[must_use]
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.bytes().filter(|&b| b == b'\n').count() + 1
    }
}
