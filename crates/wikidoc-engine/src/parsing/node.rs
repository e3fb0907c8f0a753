//! # Document Tree
//!
//! The parser's only output type. Every [`Node`] variant carries exactly
//! one payload shape, so renderers pattern-match on the variant and never
//! inspect content at runtime.
//!
//! Payload shapes by kind:
//!
//! - leaf text (`WhiteSpace`, `InlineCode`, `EscapedChar`, `RegularText`,
//!   `KeyWord`, `EmptyLine`): a `String`
//! - recursive inline (`BoldText`, `ItalicText`, `Paragraph`, `Header`):
//!   child nodes produced by re-running the inline parser
//! - lists: [`ListItem`]s, each holding an inline sequence
//! - `Preformat`: raw lines, newline included, never inline-parsed
//! - `LinkText`: [`LinkContent`]
//!
//! The tree is serialized with adjacent tagging, `{"type": .., "content": ..}`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum Node {
    /// A `=`-marked header; `level` counts the `=` characters (always >= 1).
    Header { level: usize, content: Vec<Node> },
    UnorderedList(Vec<ListItem>),
    OrderedList(Vec<ListItem>),
    /// Verbatim lines of an indented block.
    Preformat(Vec<String>),
    Paragraph(Vec<Node>),
    /// A blank line. Consumed as a block terminator and filtered out of
    /// every [`Document`].
    EmptyLine(String),
    WhiteSpace(String),
    /// Interior of a `{...}` span, delimiters removed, otherwise verbatim.
    InlineCode(String),
    BoldText(Vec<Node>),
    ItalicText(Vec<Node>),
    LinkText(LinkContent),
    /// The full `E<...>` escape, undecoded.
    EscapedChar(String),
    RegularText(String),
    /// Name inside a `%%name%%` span.
    KeyWord(String),
}

/// One item of an ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: Vec<Node>,
}

/// Interior of a `[label|target]` or `[target]` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkContent {
    /// Inline-parsed label; `None` when the link has no `|`.
    pub label: Option<Vec<Node>>,
    /// Link target, taken verbatim.
    pub target: String,
}

/// The kind tag of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Header,
    UnorderedList,
    OrderedList,
    Preformat,
    Paragraph,
    EmptyLine,
    WhiteSpace,
    InlineCode,
    BoldText,
    ItalicText,
    LinkText,
    EscapedChar,
    RegularText,
    KeyWord,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Header => "Header",
            NodeKind::UnorderedList => "UnorderedList",
            NodeKind::OrderedList => "OrderedList",
            NodeKind::Preformat => "Preformat",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::EmptyLine => "EmptyLine",
            NodeKind::WhiteSpace => "WhiteSpace",
            NodeKind::InlineCode => "InlineCode",
            NodeKind::BoldText => "BoldText",
            NodeKind::ItalicText => "ItalicText",
            NodeKind::LinkText => "LinkText",
            NodeKind::EscapedChar => "EscapedChar",
            NodeKind::RegularText => "RegularText",
            NodeKind::KeyWord => "KeyWord",
        }
    }

    /// True for the kinds the block layer produces.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            NodeKind::Header
                | NodeKind::UnorderedList
                | NodeKind::OrderedList
                | NodeKind::Preformat
                | NodeKind::Paragraph
                | NodeKind::EmptyLine
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Header { .. } => NodeKind::Header,
            Node::UnorderedList(_) => NodeKind::UnorderedList,
            Node::OrderedList(_) => NodeKind::OrderedList,
            Node::Preformat(_) => NodeKind::Preformat,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::EmptyLine(_) => NodeKind::EmptyLine,
            Node::WhiteSpace(_) => NodeKind::WhiteSpace,
            Node::InlineCode(_) => NodeKind::InlineCode,
            Node::BoldText(_) => NodeKind::BoldText,
            Node::ItalicText(_) => NodeKind::ItalicText,
            Node::LinkText(_) => NodeKind::LinkText,
            Node::EscapedChar(_) => NodeKind::EscapedChar,
            Node::RegularText(_) => NodeKind::RegularText,
            Node::KeyWord(_) => NodeKind::KeyWord,
        }
    }

    /// Header level; `None` for every other kind.
    pub fn level(&self) -> Option<usize> {
        match self {
            Node::Header { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Inline children of recursive kinds. Lists, links and leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Header { content, .. } => content,
            Node::Paragraph(children) | Node::BoldText(children) | Node::ItalicText(children) => {
                children
            }
            _ => &[],
        }
    }

    /// String payload of leaf kinds.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::EmptyLine(s)
            | Node::WhiteSpace(s)
            | Node::InlineCode(s)
            | Node::EscapedChar(s)
            | Node::RegularText(s)
            | Node::KeyWord(s) => Some(s),
            _ => None,
        }
    }

    /// Flattens the node to its display text.
    ///
    /// Links render as their label, or as the target when unlabelled; list
    /// items are separated by newlines, preformatted lines are joined as is.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Node::UnorderedList(items) | Node::OrderedList(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    for n in &item.content {
                        n.push_plain_text(out);
                    }
                }
            }
            Node::Preformat(lines) => out.extend(lines.iter().map(String::as_str)),
            Node::LinkText(link) => match &link.label {
                Some(label) => label.iter().for_each(|n| n.push_plain_text(out)),
                None => out.push_str(&link.target),
            },
            Node::Header { content, .. }
            | Node::Paragraph(content)
            | Node::BoldText(content)
            | Node::ItalicText(content) => content.iter().for_each(|n| n.push_plain_text(out)),
            leaf => out.push_str(leaf.text().unwrap_or_default()),
        }
    }
}

/// A parsed document: block nodes in source order, blank lines removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Node>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.blocks.iter()
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
