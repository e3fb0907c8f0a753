//! Whole-document properties of the parser.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Parser,
    error::ParseError,
    inline::parse_inline,
    keywords::KeywordTable,
    node::{Document, LinkContent, ListItem, Node},
    options::ParseOptions,
    parse_document, snapshot,
};

/// Routes parser logs to the test output; run with `RUST_LOG=trace` to see
/// each block as it is matched.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse(text: &str) -> Document {
    init_logging();
    let doc = parse_document(text, None).unwrap();
    snapshot::invariants(&doc);
    doc
}

fn inline(text: &str) -> Vec<Node> {
    parse_inline(text, &ParseOptions::default()).unwrap()
}

fn leaf_text(nodes: &[Node]) -> String {
    nodes.iter().filter_map(Node::text).collect()
}

#[rstest]
#[case("Hello world")]
#[case("Hello, world! This is plain.")]
#[case("tabs\tand  double  spaces")]
#[case("unicode wörds, ünïcode too")]
fn plain_text_is_one_paragraph(#[case] line: &str) {
    let doc = parse(&format!("{line}\n"));
    assert_eq!(doc.len(), 1);

    let Node::Paragraph(children) = &doc.blocks[0] else {
        panic!("expected paragraph, got {doc:?}");
    };
    assert!(
        children
            .iter()
            .all(|n| matches!(n, Node::RegularText(_) | Node::WhiteSpace(_)))
    );
    for pair in children.windows(2) {
        assert_ne!(pair[0].kind(), pair[1].kind(), "runs must alternate");
    }
    assert_eq!(leaf_text(children), format!("{line}\n"));
}

#[test]
fn paragraph_leaves_reproduce_the_source_lines() {
    let src = "first line of text\nsecond line, same paragraph\n";
    let doc = parse(src);
    assert_eq!(doc.len(), 1);
    assert_eq!(leaf_text(doc.blocks[0].children()), src);
}

#[test]
fn recursive_content_is_stable_under_reparse() {
    let doc = parse("*bold ~and italic~ text*\n= Title *x*\n");

    let Node::Paragraph(children) = &doc.blocks[0] else {
        panic!("expected paragraph, got {doc:?}");
    };
    let Node::BoldText(bold) = &children[0] else {
        panic!("expected bold, got {children:?}");
    };
    assert_eq!(bold, &inline("bold ~and italic~ text"));

    let Node::ItalicText(italic) = &bold[2] else {
        panic!("expected italic, got {bold:?}");
    };
    assert_eq!(italic, &inline("and italic"));

    assert_eq!(doc.blocks[1].children(), inline("Title *x*").as_slice());
}

#[test]
fn header_level_counts_markers() {
    let doc = parse("=== Title\n");
    assert_eq!(
        doc.blocks,
        vec![Node::Header {
            level: 3,
            content: inline("Title"),
        }]
    );
    assert_eq!(doc.blocks[0].level(), Some(3));
}

#[test]
fn link_properties() {
    let doc = parse("[Label Text|http://example.com/] [http://example.com/]\n");
    assert_eq!(
        doc.blocks[0].children()[..3].to_vec(),
        vec![
            Node::LinkText(LinkContent {
                label: Some(inline("Label Text")),
                target: "http://example.com/".into(),
            }),
            Node::WhiteSpace(" ".into()),
            Node::LinkText(LinkContent {
                label: None,
                target: "http://example.com/".into(),
            }),
        ]
    );
}

#[test]
fn unordered_list_items() {
    let doc = parse("* item one\n* item two\n\n");
    assert_eq!(
        doc.blocks,
        vec![Node::UnorderedList(vec![
            ListItem {
                content: inline("item one"),
            },
            ListItem {
                content: inline("item two"),
            },
        ])]
    );
}

#[test]
fn preformat_is_verbatim() {
    let doc = parse("    code line one\n    code line two\n\n");
    assert_eq!(
        doc.blocks,
        vec![Node::Preformat(vec![
            "    code line one\n".into(),
            "    code line two\n".into(),
        ])]
    );
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case(" \n\t\n")]
#[case("a\n\n\nb\n")]
#[case("* a\n\n\n\n0 b\n\n")]
#[case("  pre\n\n\n\n  pre\n\n\n")]
#[case("= H\n\n\npara\n\n")]
fn empty_lines_never_reach_the_document(#[case] src: &str) {
    let doc = parse(src);
    assert!(
        doc.iter().all(|b| !matches!(b, Node::EmptyLine(_))),
        "{doc:?}"
    );
}

#[test]
fn blank_only_documents_are_empty() {
    assert!(parse("").is_empty());
    assert!(parse("\n \n\t\n").is_empty());
}

#[test]
fn missing_final_newline_is_tolerated() {
    assert_eq!(parse("abc").blocks, vec![Node::Paragraph(inline("abc\n"))]);
    assert_eq!(
        parse("* a").blocks,
        vec![Node::UnorderedList(vec![ListItem {
            content: inline("a"),
        }])]
    );
}

#[test]
fn crlf_parses_like_lf() {
    assert_eq!(
        parse("= T\r\n* a\r\nb\r\n\r\npara\r\n"),
        parse("= T\n* a\nb\n\npara\n")
    );
}

#[test]
fn keywords_are_extracted_then_substituted() {
    let table: KeywordTable = [("VERSION", "1.0")].into_iter().collect();
    let doc = parse_document("Version %%VERSION%% of %%NAME%%\n", Some(&table)).unwrap();
    assert_eq!(
        doc.blocks[0].children()[2..].to_vec(),
        vec![
            Node::KeyWord("VERSION".into()),
            Node::WhiteSpace(" ".into()),
            Node::RegularText("of".into()),
            Node::WhiteSpace(" ".into()),
            Node::KeyWord("NAME".into()),
            Node::WhiteSpace("\n".into()),
        ]
    );

    let resolved = doc.substitute_keywords(&table);
    assert_eq!(resolved.blocks[0].plain_text(), "Version 1.0 of NAME\n");
    assert_eq!(
        resolved.blocks[0].children()[2],
        Node::RegularText("1.0".into())
    );
    assert_eq!(resolved.blocks[0].children()[6], Node::KeyWord("NAME".into()));
}

#[test]
fn keyword_spans_are_text_without_a_table() {
    let doc = parse("Version %%VERSION%%\n");
    assert_eq!(
        doc.blocks[0].children()[2],
        Node::RegularText("%%VERSION%%".into())
    );
}

#[test]
fn nesting_failure_discards_the_parse() {
    init_logging();
    let parser = Parser::new(ParseOptions::default().with_max_depth(1));
    assert_eq!(
        parser.parse("fine\n\n*a ~b~*\n"),
        Err(ParseError::NestingTooDeep {
            limit: 1,
            offset: 10
        })
    );
    assert!(parser.parse("*a* ~b~\n").is_ok());
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = &Parser::default();
    let inputs = ["= One\n", "* two\n", "  three\n", "four\n"];
    let docs: Vec<Document> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|src| s.spawn(move || parser.parse(src)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    let kinds: Vec<_> = docs.iter().map(|d| d.blocks[0].kind().as_str()).collect();
    assert_eq!(kinds, ["Header", "UnorderedList", "Preformat", "Paragraph"]);
}

#[test]
fn tree_serializes_with_adjacent_tags() {
    let doc = parse("=== Title\n");
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "blocks": [{
                "type": "Header",
                "content": {
                    "level": 3,
                    "content": [{ "type": "RegularText", "content": "Title" }]
                }
            }]
        })
    );
    let back: Document = serde_json::from_value(value).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn unclosed_openers_parse_in_linear_time() {
    let src = format!("{}\n", "a[b {c E<d ".repeat(20_000));
    let started = std::time::Instant::now();
    let doc = parse(&src);
    let elapsed = started.elapsed();

    let Node::Paragraph(children) = &doc.blocks[0] else {
        panic!("expected paragraph, got {:?}", doc.blocks[0].kind());
    };
    assert!(
        children
            .iter()
            .all(|n| matches!(n, Node::RegularText(_) | Node::WhiteSpace(_)))
    );
    assert_eq!(leaf_text(children), src);
    assert!(
        elapsed < std::time::Duration::from_secs(5),
        "{} bytes took {elapsed:?}",
        src.len()
    );
}
