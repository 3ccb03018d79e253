//! Unified error types for logdiff.
//!
//! The diff engine itself never fails. Errors come from the boundaries around
//! it: untyped requests, oversized inputs, unreadable files and bad
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for logdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LogDiffError {
    /// Input rejected at a boundary before reaching the engine
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{side} input has {lines} lines (limit: {limit})")]
    TooManyLines {
        side: String,
        lines: usize,
        limit: usize,
    },

    #[error("Ordered diff needs {cells} table cells (limit: {limit})")]
    TooManyCells { cells: u64, limit: u64 },

    #[error("Only one input may be read from stdin")]
    MultipleStdin,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for logdiff operations
pub type Result<T> = std::result::Result<T, LogDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl LogDiffError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid-argument input error
    pub fn invalid_argument(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::input(context, InputErrorKind::InvalidArgument(message.into()))
    }

    /// Create an error for an input exceeding the line limit
    pub fn too_many_lines(side: impl Into<String>, lines: usize, limit: usize) -> Self {
        Self::input(
            "input size limit exceeded",
            InputErrorKind::TooManyLines {
                side: side.into(),
                lines,
                limit,
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error was caused by the caller's input rather than the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Input { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<serde_json::Error> for LogDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_argument("diff request", err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to any existing context, so a failure deep
/// in the pipeline reads as `"outer: middle: inner"`.
///
/// # Example
///
/// ```ignore
/// use logdiff::error::ErrorContext;
///
/// let request = DiffRequest::from_json(&body).context("loading request file")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<LogDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: LogDiffError, new_ctx: &str) -> LogDiffError {
    match err {
        LogDiffError::Input {
            context: existing,
            source,
        } => LogDiffError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LogDiffError::Io {
            path,
            message,
            source,
        } => LogDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        LogDiffError::Validation(msg) => LogDiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// Returns just `new` when the existing context is empty, otherwise
/// `"new: existing"`.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LogDiffError::invalid_argument("request", "missing field `expected`");
        let display = err.to_string();
        assert!(display.contains("Invalid input"), "unexpected: {display}");
        assert!(err.is_input_error());

        let err = LogDiffError::too_many_lines("expected", 30_000, 20_000);
        let source = std::error::Error::source(&err).expect("should carry a source");
        assert_eq!(
            source.to_string(),
            "expected input has 30000 lines (limit: 20000)"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = LogDiffError::io("/path/to/expected.log", io_err);

        assert!(err.to_string().contains("/path/to/expected.log"));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_serde_error_becomes_invalid_argument() {
        let parse: std::result::Result<Vec<String>, _> = serde_json::from_str("null");
        let err: LogDiffError = parse.unwrap_err().into();
        match err {
            LogDiffError::Input {
                source: InputErrorKind::InvalidArgument(_),
                ..
            } => {}
            other => panic!("Expected invalid argument, got {other:?}"),
        }
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(LogDiffError::invalid_argument("base", "bad"))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(LogDiffError::Input { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            _ => panic!("Expected Input error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(LogDiffError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
        assert_eq!(
            chain_context("outer", "middle: inner"),
            "outer: middle: inner"
        );
    }
}
