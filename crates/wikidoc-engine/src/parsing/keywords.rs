use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::node::{Document, LinkContent, ListItem, Node};

/// Caller-supplied replacements for `%%name%%` keyword spans.
///
/// Supplying a table to the parser enables the keyword grammar; the parser
/// itself only extracts names; [`Document::substitute_keywords`] does the
/// replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable(BTreeMap<String, String>);

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for KeywordTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Document {
    /// Returns a copy of the document with every known keyword replaced by
    /// a `RegularText` node holding its value. Unknown keywords stay as
    /// `KeyWord` nodes.
    pub fn substitute_keywords(&self, table: &KeywordTable) -> Document {
        Document {
            blocks: substitute_all(&self.blocks, table),
        }
    }
}

fn substitute_all(nodes: &[Node], table: &KeywordTable) -> Vec<Node> {
    nodes.iter().map(|n| substitute(n, table)).collect()
}

fn substitute_items(items: &[ListItem], table: &KeywordTable) -> Vec<ListItem> {
    items
        .iter()
        .map(|item| ListItem {
            content: substitute_all(&item.content, table),
        })
        .collect()
}

fn substitute(node: &Node, table: &KeywordTable) -> Node {
    match node {
        Node::KeyWord(name) => match table.get(name) {
            Some(value) => Node::RegularText(value.to_string()),
            None => node.clone(),
        },
        Node::Header { level, content } => Node::Header {
            level: *level,
            content: substitute_all(content, table),
        },
        Node::Paragraph(children) => Node::Paragraph(substitute_all(children, table)),
        Node::BoldText(children) => Node::BoldText(substitute_all(children, table)),
        Node::ItalicText(children) => Node::ItalicText(substitute_all(children, table)),
        Node::UnorderedList(items) => Node::UnorderedList(substitute_items(items, table)),
        Node::OrderedList(items) => Node::OrderedList(substitute_items(items, table)),
        Node::LinkText(link) => Node::LinkText(LinkContent {
            label: link.label.as_ref().map(|l| substitute_all(l, table)),
            target: link.target.clone(),
        }),
        Node::Preformat(_)
        | Node::EmptyLine(_)
        | Node::WhiteSpace(_)
        | Node::InlineCode(_)
        | Node::EscapedChar(_)
        | Node::RegularText(_) => node.clone(),
    }
}
