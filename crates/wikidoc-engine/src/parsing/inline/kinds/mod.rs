//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser asks
//! these types for their [`Delimiter`](crate::parsing::balance::Delimiter);
//! it never hardcodes `{`, `*` or `[`.
//!
//! ## Types
//!
//! - **`InlineCode`**: `{...}`, nesting-aware, raw zone
//! - **`Bold`** / **`Italic`**: `*...*` / `~...~`, non-nested
//! - **`Link`**: `[...]`, nesting-aware, `|` splits label from target
//! - **`Escape`**: `E<...>`, kept verbatim
//! - **`Keyword`**: `%%...%%`, only when a keyword table is supplied

pub mod code;
pub mod emphasis;
pub mod escape;
pub mod keyword;
pub mod link;

pub use code::InlineCode;
pub use emphasis::{Bold, Italic};
pub use escape::Escape;
pub use keyword::Keyword;
pub use link::Link;
