pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    Parser,
    error::ParseError,
    inline::parse_inline,
    keywords::KeywordTable,
    node::{Document, LinkContent, ListItem, Node, NodeKind},
    options::{DEFAULT_MAX_DEPTH, ParseOptions},
    parse_document,
};
