//! Input loading.
//!
//! Reads both sides of a diff from files or stdin and splits them into lines.

use crate::config::{DiffConfig, DiffInputs};
use crate::diff::{DiffEngine, DiffRequest};
use crate::error::{ErrorContext, InputErrorKind, LogDiffError, Result};
use crate::model::split_lines;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where one side of a diff is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, selected with `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Interpret a command-line path, treating `-` as stdin.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Name shown in reports and logs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "-".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the full input as text.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
    pub fn read_text(&self) -> Result<String> {
        let bytes = match self {
            Self::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .map_err(|e| LogDiffError::io("-", e))?;
                buf
            }
            Self::File(path) => std::fs::read(path).map_err(|e| LogDiffError::io(path, e))?,
        };
        Ok(decode_lossy(bytes))
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences.
#[must_use]
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Input is not valid UTF-8; invalid bytes were replaced");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Both sides of a diff, split into lines
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub expected: Vec<String>,
    pub current: Vec<String>,
    pub expected_label: String,
    pub current_label: String,
    /// Engine configured by a JSON request, replacing the configured comparison
    pub request_engine: Option<DiffEngine>,
}

fn to_owned_lines(text: &str) -> Vec<String> {
    split_lines(text).into_iter().map(str::to_string).collect()
}

/// Load the inputs named by the diff configuration.
pub fn load_inputs(config: &DiffConfig) -> Result<LoadedInputs> {
    let quiet = config.behavior.quiet;

    match &config.inputs {
        DiffInputs::Paths { expected, current } => {
            let expected = InputSource::from_path(expected);
            let current = InputSource::from_path(current);
            if expected.is_stdin() && current.is_stdin() {
                return Err(LogDiffError::input(
                    "diff inputs",
                    InputErrorKind::MultipleStdin,
                ));
            }

            let expected_text = expected
                .read_text()
                .with_context(|| format!("reading expected input {}", expected.label()))?;
            let current_text = current
                .read_text()
                .with_context(|| format!("reading current input {}", current.label()))?;

            let loaded = LoadedInputs {
                expected: to_owned_lines(&expected_text),
                current: to_owned_lines(&current_text),
                expected_label: expected.label(),
                current_label: current.label(),
                request_engine: None,
            };
            if !quiet {
                tracing::info!(
                    "Loaded {} expected and {} current lines",
                    loaded.expected.len(),
                    loaded.current.len()
                );
            }
            Ok(loaded)
        }
        DiffInputs::Request(path) => {
            let source = InputSource::from_path(path);
            let body = source
                .read_text()
                .with_context(|| format!("reading request {}", source.label()))?;
            let request = DiffRequest::from_json(&body)
                .with_context(|| format!("parsing request {}", source.label()))?;

            if !quiet {
                tracing::info!(
                    "Loaded request with {} expected and {} current lines",
                    request.expected.len(),
                    request.current.len()
                );
            }

            let engine = request.engine();
            let (expected_label, current_label) = config.inputs.labels();
            Ok(LoadedInputs {
                expected: request.expected,
                current: request.current,
                expected_label,
                current_label,
                request_engine: Some(engine),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::diff::DiffMode;
    use tempfile::TempDir;

    fn config_for(inputs: DiffInputs) -> DiffConfig {
        DiffConfig::from_app_config(AppConfig::builder().quiet(true).build(), inputs)
    }

    #[test]
    fn test_input_source_from_path() {
        assert_eq!(InputSource::from_path(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_path(Path::new("a.txt")),
            InputSource::File(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn test_decode_lossy_replaces_invalid_bytes() {
        assert_eq!(decode_lossy(b"ok".to_vec()), "ok");
        assert_eq!(decode_lossy(vec![b'a', 0xff, b'b']), "a\u{fffd}b");
    }

    #[test]
    fn test_load_paths() {
        let tmp = TempDir::new().unwrap();
        let expected = tmp.path().join("expected.txt");
        let current = tmp.path().join("current.txt");
        std::fs::write(&expected, "a\r\nb\n").unwrap();
        std::fs::write(&current, "a\nc").unwrap();

        let loaded = load_inputs(&config_for(DiffInputs::Paths {
            expected: expected.clone(),
            current,
        }))
        .unwrap();

        assert_eq!(loaded.expected, vec!["a", "b", ""]);
        assert_eq!(loaded.current, vec!["a", "c"]);
        assert_eq!(loaded.expected_label, expected.display().to_string());
        assert!(loaded.request_engine.is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_inputs(&config_for(DiffInputs::Paths {
            expected: PathBuf::from("/nonexistent/expected.txt"),
            current: PathBuf::from("/nonexistent/current.txt"),
        }))
        .unwrap_err();

        match err {
            LogDiffError::Io { path, message, .. } => {
                assert_eq!(path, Some(PathBuf::from("/nonexistent/expected.txt")));
                assert!(message.starts_with("reading expected input"), "{message}");
            }
            other => panic!("Expected IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_two_stdin_inputs_rejected() {
        let err = load_inputs(&config_for(DiffInputs::Paths {
            expected: PathBuf::from("-"),
            current: PathBuf::from("-"),
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            LogDiffError::Input {
                source: InputErrorKind::MultipleStdin,
                ..
            }
        ));
    }

    #[test]
    fn test_load_request() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"expected": ["a", "b"], "current": ["B", "a"], "ignoreCase": true, "mode": "unordered"}"#,
        )
        .unwrap();

        let loaded = load_inputs(&config_for(DiffInputs::Request(path))).unwrap();
        let engine = loaded.request_engine.expect("request engine");
        assert_eq!(engine.mode(), DiffMode::Unordered);
        assert!(engine.options().ignore_case);
        assert_eq!(loaded.current, vec!["B", "a"]);
    }

    #[test]
    fn test_bad_request_is_input_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("request.json");
        std::fs::write(&path, r#"{"expected": ["a"]}"#).unwrap();

        let err = load_inputs(&config_for(DiffInputs::Request(path))).unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("parsing request"));
    }
}
