//! # Inline Parsing
//!
//! Cursor-based chunk dispatch over the text of a paragraph, header or list
//! item.
//!
//! ## Architecture
//!
//! At each position the parser tries the chunk alternatives in a fixed
//! order and commits to the first match:
//!
//! 1. whitespace run
//! 2. inline code `{...}` (raw zone, nesting-aware)
//! 3. bold `*...*`
//! 4. italic `~...~`
//! 5. link `[...]`
//! 6. escape `E<...>`
//! 7. keyword `%%...%%` (only with a keyword table)
//! 8. plain text, up to the next position where 1-7 would match
//!
//! Bold, italic and link labels re-run the parser on their interior; the
//! recursion depth is bounded by [`ParseOptions::max_depth`](crate::ParseOptions).
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters
//! - **`cursor`**: `Cursor` for char-by-char parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;

pub(crate) use parser::parse_inline_at;
pub use parser::{parse_inline, parse_link_content};
