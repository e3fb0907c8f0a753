use wikidoc_engine::{
    KeywordTable, Node, ParseError, ParseOptions, Parser, parse_document, parsing::snapshot,
};

#[test]
fn fixture_headers_and_paragraphs() {
    assert_fixture("headers_and_paragraphs");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_preformat_and_links() {
    assert_fixture("preformat_and_links");
}

fn assert_fixture(name: &str) {
    let wiki = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.wiki",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let doc = parse_document(&wiki, None).unwrap();
    snapshot::invariants(&doc);

    insta::assert_snapshot!(name, snapshot::format_tree(&doc));
}

/// Code spans are raw zones: nothing inside them is parsed.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let doc = parse_document("{[not a link] *or bold*}\n", None).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.blocks[0].children()[0],
        Node::InlineCode("[not a link] *or bold*".into())
    );
}

#[test]
fn keyword_table_round_trip() {
    let keywords: KeywordTable = [("AUTHOR", "Tim")].into_iter().collect();
    let doc = parse_document("= By %%AUTHOR%%\n", Some(&keywords)).unwrap();
    assert_eq!(doc.blocks[0].children()[2], Node::KeyWord("AUTHOR".into()));
    assert_eq!(
        doc.substitute_keywords(&keywords).blocks[0].plain_text(),
        "By Tim"
    );
}

#[test]
fn pathological_nesting_is_an_error() {
    let deep = format!("{}x{}\n", "[".repeat(10_000), "|t]".repeat(10_000));
    let err = Parser::default().parse(&deep).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 64, .. }));
    assert!(err.to_string().contains("64 levels"));
}

#[test]
fn configured_depth_is_respected() {
    let parser = Parser::new(ParseOptions::default().with_max_depth(3));
    assert!(parser.parse("[[[x|a]|b]|c]\n").is_ok());
    assert!(parser.parse("[[[[x|a]|b]|c]|d]\n").is_err());
}
