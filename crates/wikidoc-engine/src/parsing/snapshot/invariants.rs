use crate::parsing::node::{Document, ListItem, Node};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Only block kinds appear at the top level, and none inside inline content
/// - No `EmptyLine` survives into the document
/// - Header levels are at least 1
/// - Lists hold at least one item
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for block in doc {
        assert!(
            block.kind().is_block(),
            "inline node at top level: {block:?}"
        );
        match block {
            Node::EmptyLine(_) => panic!("EmptyLine leaked into document: {block:?}"),
            Node::Header { level, content } => {
                assert!(*level >= 1, "header level must be >= 1: {block:?}");
                check_inline(content);
            }
            Node::UnorderedList(items) | Node::OrderedList(items) => {
                assert!(!items.is_empty(), "empty list: {block:?}");
                check_items(items);
            }
            Node::Paragraph(children) => check_inline(children),
            _ => {}
        }
    }
}

fn check_items(items: &[ListItem]) {
    for item in items {
        check_inline(&item.content);
    }
}

fn check_inline(nodes: &[Node]) {
    for n in nodes {
        assert!(!n.kind().is_block(), "block node inside inline content: {n:?}");
        if let Node::LinkText(link) = n {
            if let Some(label) = &link.label {
                check_inline(label);
            }
        }
        check_inline(n.children());
    }
}
