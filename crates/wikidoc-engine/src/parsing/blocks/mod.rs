//! # Block Parsing
//!
//! Two-phase block parsing over newline-terminated lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blank, indented, header, list marker,
//!    plain paragraph shape)
//!
//! 2. **Block Dispatch** (`parser`): a `BlockParser` walks the classified
//!    lines and tries the block productions in fixed priority order:
//!    Header, Unordered_List, Ordered_List, Preformat, Paragraph, Empty_Line
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types owning their line patterns
//! - **`classify`**: `WikiLineClassifier` produces `LineClass` for each line
//! - **`parser`**: `BlockParser` ordered dispatch producing block `Node`s
//!
//! ## Key Invariants
//!
//! - Preformatted lines are raw zones: no inline parsing inside
//! - Header, paragraph and list item text is inline-parsed from its byte
//!   span in the source, so inline errors carry source offsets

pub mod classify;
pub mod kinds;
pub mod parser;

pub use classify::{LineClass, WikiLineClassifier};
pub(crate) use parser::BlockParser;
