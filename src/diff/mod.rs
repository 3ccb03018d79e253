//! Line diff engine.
//!
//! Compares two ordered sequences of lines (`expected` and `current`) and
//! classifies every line as `same`, `added` or `removed`.
//!
//! # Modes
//!
//! - **Ordered** ([`diff_ordered`]): minimal-edit alignment via a longest
//!   common subsequence table. Rows follow the interleaved alignment order.
//! - **Unordered** ([`diff_unordered`]): multiset matching. Each expected line
//!   takes the earliest unconsumed current line with an equal key; leftovers
//!   are extras.
//!
//! Both modes share [`CompareOptions`](crate::model::CompareOptions) for
//! case-insensitive and whitespace-trimmed comparison.
//!
//! # Example
//!
//! ```
//! use logdiff::diff::{DiffEngine, DiffMode};
//!
//! let engine = DiffEngine::new().with_mode(DiffMode::Unordered);
//! let result = engine.diff(&["a", "b", "c"], &["c", "a", "d"]);
//!
//! assert_eq!(result.missing_lines, vec!["b"]);
//! assert_eq!(result.extra_lines, vec!["d"]);
//! ```

mod engine;
mod engine_config;
mod ordered;
mod request;
mod result;
mod unordered;

pub use engine::DiffEngine;
pub use engine_config::DiffMode;
pub use ordered::{diff_ordered, table_cells};
pub use request::DiffRequest;
pub use result::{DiffEntry, DiffResult, DiffSummary, EntryKind};
pub use unordered::diff_unordered;
