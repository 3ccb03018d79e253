//! Line model shared by the diff engine and its collaborators.
//!
//! A line is the atomic unit of comparison. This module defines how raw text
//! becomes a sequence of lines ([`split_lines`]) and how two lines are judged
//! equal ([`CompareOptions::key`]).

mod key;
mod text;

pub use key::CompareOptions;
pub use text::{line_count, split_lines};
