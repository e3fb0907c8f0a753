use crate::parsing::balance::Delimiter;

/// Link span, `[target]` or `[label|target]`.
pub struct Link;

impl Link {
    pub const DELIM: Delimiter = Delimiter::Bracket {
        open: '[',
        close: ']',
    };
    pub const LABEL_SEP: char = '|';

    /// Byte index of the first `|` outside any nested `[...]`, `{...}` or
    /// `E<...>` span.
    pub fn label_split(interior: &str) -> Option<usize> {
        let mut brackets = 0usize;
        let mut angles = 0usize;
        let mut prev = None;
        for (i, ch) in interior.char_indices() {
            match ch {
                '[' | '{' => brackets += 1,
                ']' | '}' => brackets = brackets.saturating_sub(1),
                '<' if angles > 0 || prev == Some('E') => angles += 1,
                '>' => angles = angles.saturating_sub(1),
                Self::LABEL_SEP if brackets == 0 && angles == 0 => return Some(i),
                _ => {}
            }
            prev = Some(ch);
        }
        None
    }
}
