use std::sync::OnceLock;

use regex::Regex;

/// Blank line: tabs/spaces only, then the newline.
pub struct EmptyLine;

impl EmptyLine {
    fn pattern() -> &'static Regex {
        static EMPTY_REGEX: OnceLock<Regex> = OnceLock::new();
        EMPTY_REGEX.get_or_init(|| Regex::new(r"^([\t ]*)\n$").expect("Invalid empty line regex"))
    }

    /// Returns the whitespace run of a blank line, newline excluded.
    pub fn whitespace(text: &str) -> Option<&str> {
        let caps = Self::pattern().captures(text)?;
        caps.get(1).map(|m| m.as_str())
    }
}
