//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`tree`**: renders a [`Document`](crate::Document) as an indented text
//!   tree for `insta` snapshot testing
//! - **`invariants`**: structural checks every parsed document must pass
//!   (no leaked blank lines, header levels >= 1, no empty lists, block kinds
//!   only at the top level)

pub mod invariants;
pub mod tree;

pub use invariants::check as invariants;
pub use tree::format_tree;
