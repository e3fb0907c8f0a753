pub mod balance;
pub mod blocks;
pub mod error;
pub mod inline;
pub mod keywords;
pub mod node;
pub mod options;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use blocks::BlockParser;
use error::ParseError;
use keywords::KeywordTable;
use node::{Document, Node};
use options::ParseOptions;

/// A configured wikidoc parser.
///
/// Parsing borrows the parser immutably and keeps all state on the stack of
/// the call, so one `Parser` can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses a whole document. Blank lines terminate blocks and are dropped
    /// from the result.
    pub fn parse(&self, text: &str) -> Result<Document, ParseError> {
        let src = source::normalize(text);
        let blocks = BlockParser::new(&src, &self.options)
            .parse()
            .inspect_err(|e| log::warn!("wikidoc parse failed: {e}"))?;

        let blocks: Vec<Node> = blocks
            .into_iter()
            .filter(|b| !matches!(b, Node::EmptyLine(_)))
            .collect();
        log::debug!("parsed {} blocks from {} bytes", blocks.len(), src.len());
        Ok(Document { blocks })
    }

    /// Parses `text` as inline content with this parser's options.
    pub fn parse_inline(&self, text: &str) -> Result<Vec<Node>, ParseError> {
        inline::parse_inline(text, &self.options)
    }
}

/// Parses a wikidoc document.
///
/// Supplying `keywords` enables the `%%name%%` grammar; keyword nodes are
/// left in the tree for [`Document::substitute_keywords`] to resolve.
pub fn parse_document(text: &str, keywords: Option<&KeywordTable>) -> Result<Document, ParseError> {
    let options = match keywords {
        Some(table) => ParseOptions::default().with_keywords(table.clone()),
        None => ParseOptions::default(),
    };
    Parser::new(options).parse(text)
}
