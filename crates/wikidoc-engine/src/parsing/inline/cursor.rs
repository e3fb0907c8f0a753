/// A cursor for inline parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the normalized source (via `base` offset).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Base offset in the source (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`. Always on a char boundary.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. `n` must land on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes characters while `pred` holds, returning the consumed text.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.i;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.i += c.len_utf8();
        }
        &self.s[start..self.i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 10);
        assert_eq!(cur.pos(), 10);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some('h'));
        assert_eq!(cur.bump(), Some('h'));
        assert_eq!(cur.pos(), 11);
        assert_eq!(cur.rest(), "ello");
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_steps_over_multibyte_chars() {
        let mut cur = Cursor::new("éa", 0);
        assert_eq!(cur.bump(), Some('é'));
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.bump(), Some('a'));
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn eat_while_stops_at_predicate() {
        let mut cur = Cursor::new("  \tword", 0);
        assert_eq!(cur.eat_while(char::is_whitespace), "  \t");
        assert_eq!(cur.rest(), "word");
        assert_eq!(cur.eat_while(char::is_whitespace), "");
    }

    #[test]
    fn bump_n_advances_correctly() {
        let mut cur = Cursor::new("hello", 10);
        cur.bump_n(3);
        assert_eq!(cur.pos(), 13);
        assert_eq!(cur.peek(), Some('l'));
    }
}
