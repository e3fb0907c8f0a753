/// A top-level parse failure. Any error discards the whole parse.
///
/// Unclosed delimiters are not errors: the inline dispatcher falls through
/// to plain text for those.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no block rule matches line {line} (byte {offset})")]
    NoBlockMatch { line: usize, offset: usize },
    #[error("inline markup nested deeper than {limit} levels at byte {offset}")]
    NestingTooDeep { limit: usize, offset: usize },
}

impl ParseError {
    /// Byte offset into the normalized source where the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::NoBlockMatch { offset, .. } | ParseError::NestingTooDeep { offset, .. } => {
                *offset
            }
        }
    }
}
