#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the JSON request boundary.
///
/// Arbitrary text must either be rejected as an invalid argument or produce a
/// request whose result accounts for every line.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(request) = logdiff::DiffRequest::from_json(s) else {
        return;
    };
    if request.expected.len().saturating_mul(request.current.len()) > 1_000_000 {
        return;
    }

    let result = request.run();
    assert_eq!(
        result.missing_lines.len() + result.summary.same,
        request.expected.len()
    );
    assert_eq!(
        result.extra_lines.len() + result.summary.same,
        request.current.len()
    );
});
