use super::keywords::KeywordTable;

/// Default bound on inline recursion (bold, italic and link labels).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for one parser value. Holds no mutable state, so a single
/// `ParseOptions` can back any number of concurrent parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed nesting of recursive inline spans.
    pub max_depth: usize,
    /// When present, `%%name%%` spans are recognized as keywords.
    pub keywords: Option<KeywordTable>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            keywords: None,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn keywords_enabled(&self) -> bool {
        self.keywords.is_some()
    }
}
