use std::sync::OnceLock;

use regex::Regex;

/// Preformatted block type.
///
/// An indented line is leading tabs/spaces, a non-whitespace run and the
/// rest of the line. Lines are kept verbatim and never inline-parsed.
pub struct Preformat;

impl Preformat {
    fn pattern() -> &'static Regex {
        static INDENTED_REGEX: OnceLock<Regex> = OnceLock::new();
        INDENTED_REGEX.get_or_init(|| {
            Regex::new(r"^([\t ]+)([^\t \n]+)([^\n]*\n)$").expect("Invalid indented line regex")
        })
    }

    /// Returns the indented line verbatim: indent, first run and remainder.
    pub fn indented_line(text: &str) -> Option<String> {
        let caps = Self::pattern().captures(text)?;
        Some(
            (1..=3)
                .filter_map(|i| caps.get(i))
                .map(|m| m.as_str())
                .collect(),
        )
    }
}
