//! # Delimiter Balancing
//!
//! Finds the balanced span opening at a given offset of an inline text.
//! Inline kinds own a [`Delimiter`] constant; the parser builds one
//! [`SpanIndex`] per inline text and asks it for spans. A `None` rejects that
//! chunk alternative and the dispatcher falls through.
//!
//! The index pairs every opener in one pass per delimiter, so querying each
//! position of a text full of unclosed delimiters stays linear.
//!
//! No span may cross a blank line.

use std::collections::HashMap;

/// How a span opens and closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// The same character opens and closes; the next occurrence closes.
    /// No nesting, no escaping.
    Symmetric(char),
    /// Distinct open/close characters with nesting depth tracking.
    Bracket { open: char, close: char },
    /// A string tag on both sides, shortest match, no nesting.
    Tag(&'static str),
}

impl Delimiter {
    /// Strips the delimiters from a span returned by [`SpanIndex::span`].
    pub fn interior(self, span: &str) -> &str {
        &span[self.open_len()..span.len() - self.close_len()]
    }

    /// Byte length of the opening delimiter.
    pub fn open_len(self) -> usize {
        match self {
            Delimiter::Symmetric(c) | Delimiter::Bracket { open: c, .. } => c.len_utf8(),
            Delimiter::Tag(tag) => tag.len(),
        }
    }

    fn close_len(self) -> usize {
        match self {
            Delimiter::Symmetric(c) | Delimiter::Bracket { close: c, .. } => c.len_utf8(),
            Delimiter::Tag(tag) => tag.len(),
        }
    }

    /// Every `(open offset, span length)` pair in `src`, blank lines ignored.
    fn pairs(self, src: &str) -> Vec<(usize, usize)> {
        match self {
            Delimiter::Symmetric(c) => {
                let at: Vec<usize> = src.match_indices(c).map(|(i, _)| i).collect();
                at.windows(2)
                    .map(|w| (w[0], w[1] + c.len_utf8() - w[0]))
                    .collect()
            }
            Delimiter::Bracket { open, close } => {
                let mut stack = vec![];
                let mut out = vec![];
                for (i, ch) in src.char_indices() {
                    if ch == open {
                        stack.push(i);
                    } else if ch == close {
                        if let Some(start) = stack.pop() {
                            out.push((start, i + ch.len_utf8() - start));
                        }
                    }
                }
                out
            }
            Delimiter::Tag(tag) => {
                // Overlapping occurrences: `%%%` holds a tag at 0 and at 1.
                let at: Vec<usize> = (0..src.len())
                    .filter(|&i| src.as_bytes()[i..].starts_with(tag.as_bytes()))
                    .collect();
                at.iter()
                    .filter_map(|&start| {
                        let from = at.partition_point(|&o| o < start + tag.len());
                        at.get(from).map(|&close| (start, close + tag.len() - start))
                    })
                    .collect()
            }
        }
    }
}

/// Balanced spans of one inline text, keyed by delimiter and open offset.
pub struct SpanIndex<'a> {
    src: &'a str,
    spans: Vec<(Delimiter, HashMap<usize, usize>)>,
}

impl<'a> SpanIndex<'a> {
    /// Indexes `src` for each of `delimiters`.
    pub fn new(src: &'a str, delimiters: &[Delimiter]) -> Self {
        let blanks = blank_lines(src);
        let spans = delimiters
            .iter()
            .map(|&d| {
                let table: HashMap<usize, usize> = d
                    .pairs(src)
                    .into_iter()
                    .filter(|&(start, len)| !crosses_blank_line(&blanks, start, start + len))
                    .collect();
                (d, table)
            })
            .collect();
        Self { src, spans }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    /// The balanced span opening at byte `at`, delimiters included.
    ///
    /// Only delimiters passed to [`SpanIndex::new`] are indexed; any other
    /// delimiter never matches.
    pub fn span(&self, delim: Delimiter, at: usize) -> Option<&'a str> {
        let (_, table) = self.spans.iter().find(|(d, _)| *d == delim)?;
        let len = table.get(&at)?;
        Some(&self.src[at..at + len])
    }
}

/// `(opening newline, closing newline)` offsets of every line holding only
/// tabs/spaces between two newlines, in source order.
fn blank_lines(src: &str) -> Vec<(usize, usize)> {
    let newlines: Vec<usize> = src.match_indices('\n').map(|(i, _)| i).collect();
    newlines
        .windows(2)
        .filter(|w| {
            src.as_bytes()[w[0] + 1..w[1]]
                .iter()
                .all(|&b| b == b' ' || b == b'\t')
        })
        .map(|w| (w[0], w[1]))
        .collect()
}

/// True if a blank line lies wholly inside `[start, end)`.
fn crosses_blank_line(blanks: &[(usize, usize)], start: usize, end: usize) -> bool {
    let first = blanks.partition_point(|&(open, _)| open < start);
    blanks.get(first).is_some_and(|&(_, close)| close < end)
}
