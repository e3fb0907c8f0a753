use std::fmt::Write;

use crate::parsing::node::{Document, ListItem, Node};

/// Renders a document as one node per line, children indented two spaces.
///
/// Leaf text is shown with `{:?}` so whitespace and newlines stay visible.
pub fn format_tree(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc {
        write_node(&mut out, block, 0);
    }
    out
}

fn write_node(out: &mut String, node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Header { level, content } => {
            writeln!(out, "{prefix}Header level={level}").unwrap();
            write_nodes(out, content, indent + 1);
        }
        Node::UnorderedList(items) | Node::OrderedList(items) => {
            writeln!(out, "{prefix}{}", node.kind()).unwrap();
            write_items(out, items, indent + 1);
        }
        Node::Preformat(lines) => {
            writeln!(out, "{prefix}Preformat").unwrap();
            for line in lines {
                writeln!(out, "{prefix}  Line {line:?}").unwrap();
            }
        }
        Node::LinkText(link) => {
            writeln!(out, "{prefix}LinkText target={:?}", link.target).unwrap();
            if let Some(label) = &link.label {
                writeln!(out, "{prefix}  Label").unwrap();
                write_nodes(out, label, indent + 2);
            }
        }
        Node::Paragraph(children) | Node::BoldText(children) | Node::ItalicText(children) => {
            writeln!(out, "{prefix}{}", node.kind()).unwrap();
            write_nodes(out, children, indent + 1);
        }
        leaf => {
            writeln!(
                out,
                "{prefix}{} {:?}",
                leaf.kind(),
                leaf.text().unwrap_or_default()
            )
            .unwrap();
        }
    }
}

fn write_nodes(out: &mut String, nodes: &[Node], indent: usize) {
    for n in nodes {
        write_node(out, n, indent);
    }
}

fn write_items(out: &mut String, items: &[ListItem], indent: usize) {
    let prefix = "  ".repeat(indent);
    for item in items {
        writeln!(out, "{prefix}Item").unwrap();
        write_nodes(out, &item.content, indent + 1);
    }
}
