//! Configuration types for the diff engine.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Algorithm used to pair expected lines with current lines.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Sequence alignment via longest common subsequence
    #[default]
    #[value(aliases = ["lcs", "sequence"])]
    Ordered,
    /// Multiset matching that ignores position
    #[value(aliases = ["multiset", "set"])]
    Unordered,
}

impl DiffMode {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ordered => "ordered",
            Self::Unordered => "unordered",
        }
    }
}

impl std::fmt::Display for DiffMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(DiffMode::default(), DiffMode::Ordered);
        assert_eq!(DiffMode::from_str("Multiset", true), Ok(DiffMode::Unordered));
        assert_eq!(DiffMode::from_str("lcs", false), Ok(DiffMode::Ordered));
        assert!(DiffMode::from_str("nope", true).is_err());
        assert_eq!(DiffMode::Unordered.to_string(), "unordered");
    }
}
