pub mod empty_line;
pub mod header;
pub mod list;
pub mod paragraph;
pub mod preformat;

pub use empty_line::EmptyLine;
pub use header::{Header, HeaderSig};
pub use list::{ListKind, ListMarker};
pub use paragraph::Paragraph;
pub use preformat::Preformat;
