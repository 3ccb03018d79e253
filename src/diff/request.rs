//! Untyped diff requests.
//!
//! A [`DiffRequest`] is how callers outside Rust (a UI over IPC, a JSON file
//! on the command line) hand inputs to the engine. Validation happens here so
//! that malformed input fails fast instead of reaching the algorithm.

use super::{DiffEngine, DiffMode, DiffResult};
use crate::error::Result;
use crate::model::CompareOptions;
use serde::{Deserialize, Serialize};

/// A complete diff invocation: both line sequences plus options.
///
/// `expected` and `current` are required and must be arrays of strings.
/// Everything else defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    pub expected: Vec<String>,
    pub current: Vec<String>,
    #[serde(default, alias = "ignore_case")]
    pub ignore_case: bool,
    #[serde(default)]
    pub trim: bool,
    #[serde(default)]
    pub mode: DiffMode,
}

impl DiffRequest {
    /// Build a request from already-split lines.
    pub fn new(expected: Vec<String>, current: Vec<String>) -> Self {
        Self {
            expected,
            current,
            ignore_case: false,
            trim: false,
            mode: DiffMode::default(),
        }
    }

    /// Parse a request from JSON.
    ///
    /// A missing or null `expected`/`current`, or a non-string element,
    /// is an invalid-argument error.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub const fn options(&self) -> CompareOptions {
        CompareOptions {
            ignore_case: self.ignore_case,
            trim: self.trim,
        }
    }

    /// The engine configured by this request.
    #[must_use]
    pub fn engine(&self) -> DiffEngine {
        DiffEngine::new()
            .with_mode(self.mode)
            .with_options(self.options())
    }

    /// Run the request.
    pub fn run(&self) -> DiffResult {
        self.engine().diff(&self.expected, &self.current)
    }
}
