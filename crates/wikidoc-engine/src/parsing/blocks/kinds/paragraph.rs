use std::sync::OnceLock;

use regex::Regex;

/// Paragraph block type.
///
/// Paragraphs have no delimiters. A plain line starts with neither
/// whitespace nor a list marker; `*` or `0` followed directly by a
/// non-whitespace character is ordinary text. Header lines are excluded by
/// the classifier, which knows the header pattern.
pub struct Paragraph;

impl Paragraph {
    fn pattern() -> &'static Regex {
        static PLAIN_REGEX: OnceLock<Regex> = OnceLock::new();
        PLAIN_REGEX.get_or_init(|| {
            Regex::new(r"^(?:[^*0\t \n]|[*0][^\t \n])[^\n]*\n$").expect("Invalid plain line regex")
        })
    }

    pub fn is_plain_shape(text: &str) -> bool {
        Self::pattern().is_match(text)
    }
}
