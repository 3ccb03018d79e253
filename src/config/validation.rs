//! Configuration validation for logdiff.

use super::types::{AppConfig, DiffConfig, DiffInputs, LimitsConfig, OutputConfig};
use std::path::Path;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.limits.validate());
        errors
    }
}

/// Narrowest side-by-side view that still fits two gutters and a separator.
const MIN_WIDTH: usize = 20;

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        if let Some(width) = self.width {
            if width < MIN_WIDTH {
                errors.push(ConfigError::new(
                    "output.width",
                    format!("Width must be at least {MIN_WIDTH}, got {width}"),
                ));
            }
        }

        if self.max_items == Some(0) {
            errors.push(ConfigError::new(
                "output.max_items",
                "Max items must be at least 1",
            ));
        }

        errors
    }
}

impl Validatable for LimitsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_lines == 0 {
            errors.push(ConfigError::new(
                "limits.max_lines",
                "Max lines must be at least 1",
            ));
        }
        if self.max_cells == 0 {
            errors.push(ConfigError::new(
                "limits.max_cells",
                "Max cells must be at least 1",
            ));
        }
        errors
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        match &self.inputs {
            DiffInputs::Paths { expected, current } => {
                check_input_path(&mut errors, "inputs.expected", expected);
                check_input_path(&mut errors, "inputs.current", current);
                if is_stdin(expected) && is_stdin(current) {
                    errors.push(ConfigError::new(
                        "inputs",
                        "Only one input can be read from stdin",
                    ));
                }
            }
            DiffInputs::Request(path) => check_input_path(&mut errors, "inputs.request", path),
        }

        errors.extend(self.output.validate());
        errors.extend(self.limits.validate());
        errors
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn check_input_path(errors: &mut Vec<ConfigError>, field: &str, path: &Path) {
    if !is_stdin(path) && !path.exists() {
        errors.push(ConfigError::new(
            field,
            format!("File not found: {}", path.display()),
        ));
    }
}
