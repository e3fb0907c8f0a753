use crate::parsing::balance::Delimiter;

/// Bold span, `*...*`. The next `*` always closes.
pub struct Bold;

impl Bold {
    pub const DELIM: Delimiter = Delimiter::Symmetric('*');
}

/// Italic span, `~...~`. The next `~` always closes.
pub struct Italic;

impl Italic {
    pub const DELIM: Delimiter = Delimiter::Symmetric('~');
}
