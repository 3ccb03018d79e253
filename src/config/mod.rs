//! Configuration module for logdiff.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use logdiff::config::{AppConfig, ConfigPreset};
//! use logdiff::diff::DiffMode;
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Lenient);
//! assert!(config.compare.ignore_case);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .mode(DiffMode::Unordered)
//!     .trim(true)
//!     .fail_on_diff(true)
//!     .build();
//! assert!(config.compare.to_options().trim);
//! ```
//!
//! # Configuration File
//!
//! Place a `.logdiff.yaml` file in your project root or `~/.config/logdiff/`:
//!
//! ```yaml
//! compare:
//!   mode: unordered
//!   trim: true
//! behavior:
//!   fail_on_diff: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_MAX_CELLS, DEFAULT_MAX_ITEMS, DEFAULT_MAX_LINES, DEFAULT_WIDTH,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, DiffConfig, DiffInputs,
    LimitsConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.logdiff.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
