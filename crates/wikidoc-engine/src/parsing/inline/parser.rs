use crate::parsing::{
    balance::{Delimiter, SpanIndex},
    error::ParseError,
    node::{LinkContent, Node},
    options::ParseOptions,
};

use super::{
    cursor::Cursor,
    kinds::{Bold, Escape, InlineCode, Italic, Keyword, Link},
};

/// Every delimiter an inline chunk can open with.
const INLINE_DELIMS: [Delimiter; 6] = [
    InlineCode::DELIM,
    Bold::DELIM,
    Italic::DELIM,
    Link::DELIM,
    Escape::DELIM,
    Keyword::DELIM,
];

/// Parses inline content into a sequence of chunk [`Node`]s.
///
/// Empty input yields an empty sequence. Non-empty input always parses:
/// plain text is the catch-all alternative. The only failure is nesting
/// beyond [`ParseOptions::max_depth`].
pub fn parse_inline(text: &str, options: &ParseOptions) -> Result<Vec<Node>, ParseError> {
    parse_inline_at(0, text, options, 0)
}

/// Parses the unwrapped interior of a link span (`label|target` or `target`).
pub fn parse_link_content(text: &str, options: &ParseOptions) -> Result<LinkContent, ParseError> {
    link_content_at(0, text, options, 1)
}

/// Inline parse of `s`, which starts at byte `base` of the source.
///
/// `depth` counts the recursive spans enclosing `s`.
pub(crate) fn parse_inline_at(
    base: usize,
    s: &str,
    options: &ParseOptions,
    depth: usize,
) -> Result<Vec<Node>, ParseError> {
    if depth > options.max_depth {
        log::warn!(
            "inline nesting exceeds {} levels at byte {base}",
            options.max_depth
        );
        return Err(ParseError::NestingTooDeep {
            limit: options.max_depth,
            offset: base,
        });
    }

    let index = SpanIndex::new(s, &INLINE_DELIMS);
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    while !cur.eof() {
        out.push(parse_chunk(&mut cur, &index, options, depth)?);
    }
    Ok(out)
}

/// Tries each chunk alternative in priority order and commits to the first
/// that matches. Plain text comes last and always succeeds.
fn parse_chunk(
    cur: &mut Cursor<'_>,
    index: &SpanIndex<'_>,
    options: &ParseOptions,
    depth: usize,
) -> Result<Node, ParseError> {
    if let Some(node) = try_parse_whitespace(cur) {
        return Ok(node);
    }
    if let Some(node) = try_parse_inline_code(cur, index) {
        return Ok(node);
    }
    if let Some(children) = try_parse_emphasis(cur, index, Bold::DELIM, options, depth)? {
        return Ok(Node::BoldText(children));
    }
    if let Some(children) = try_parse_emphasis(cur, index, Italic::DELIM, options, depth)? {
        return Ok(Node::ItalicText(children));
    }
    if let Some(node) = try_parse_link(cur, index, options, depth)? {
        return Ok(node);
    }
    if let Some(node) = try_parse_escape(cur, index) {
        return Ok(node);
    }
    if options.keywords_enabled() {
        if let Some(node) = try_parse_keyword(cur, index) {
            return Ok(node);
        }
    }
    Ok(parse_regular_text(cur, index, options))
}

fn try_parse_whitespace(cur: &mut Cursor<'_>) -> Option<Node> {
    let ws = cur.eat_while(char::is_whitespace);
    if ws.is_empty() {
        return None;
    }
    Some(Node::WhiteSpace(ws.to_string()))
}

/// Code spans are raw zones: the interior is kept as is.
fn try_parse_inline_code(cur: &mut Cursor<'_>, index: &SpanIndex<'_>) -> Option<Node> {
    let span = index.span(InlineCode::DELIM, cur.i)?;
    cur.bump_n(span.len());
    Some(Node::InlineCode(
        InlineCode::DELIM.interior(span).to_string(),
    ))
}

/// Bold and italic share a shape: a symmetric span whose interior is
/// inline-parsed one level deeper.
fn try_parse_emphasis(
    cur: &mut Cursor<'_>,
    index: &SpanIndex<'_>,
    delim: Delimiter,
    options: &ParseOptions,
    depth: usize,
) -> Result<Option<Vec<Node>>, ParseError> {
    let Some(span) = index.span(delim, cur.i) else {
        return Ok(None);
    };
    let inner_base = cur.pos() + delim.open_len();
    let children = parse_inline_at(inner_base, delim.interior(span), options, depth + 1)?;
    cur.bump_n(span.len());
    Ok(Some(children))
}

fn try_parse_link(
    cur: &mut Cursor<'_>,
    index: &SpanIndex<'_>,
    options: &ParseOptions,
    depth: usize,
) -> Result<Option<Node>, ParseError> {
    let Some(span) = index.span(Link::DELIM, cur.i) else {
        return Ok(None);
    };
    let inner_base = cur.pos() + Link::DELIM.open_len();
    let link = link_content_at(inner_base, Link::DELIM.interior(span), options, depth + 1)?;
    cur.bump_n(span.len());
    Ok(Some(Node::LinkText(link)))
}

/// Splits on the first unescaped `|`: the label is inline-parsed, the
/// target is opaque.
fn link_content_at(
    base: usize,
    interior: &str,
    options: &ParseOptions,
    depth: usize,
) -> Result<LinkContent, ParseError> {
    let Some(split) = Link::label_split(interior) else {
        return Ok(LinkContent {
            label: None,
            target: interior.to_string(),
        });
    };
    let label = parse_inline_at(base, &interior[..split], options, depth)?;
    Ok(LinkContent {
        label: Some(label),
        target: interior[split + Link::LABEL_SEP.len_utf8()..].to_string(),
    })
}

fn try_parse_escape(cur: &mut Cursor<'_>, index: &SpanIndex<'_>) -> Option<Node> {
    let span = Escape::extract(index, cur.i)?;
    cur.bump_n(span.len());
    Some(Node::EscapedChar(span.to_string()))
}

fn try_parse_keyword(cur: &mut Cursor<'_>, index: &SpanIndex<'_>) -> Option<Node> {
    let (span, name) = Keyword::extract(index, cur.i)?;
    cur.bump_n(span.len());
    Some(Node::KeyWord(name.to_string()))
}

/// Consumes non-whitespace up to the next position where a higher-priority
/// alternative would match.
///
/// Every earlier alternative already failed at the cursor, so the first
/// character is always taken.
fn parse_regular_text(
    cur: &mut Cursor<'_>,
    index: &SpanIndex<'_>,
    options: &ParseOptions,
) -> Node {
    let start = cur.i;
    cur.bump();
    while let Some(c) = cur.peek() {
        if c.is_whitespace() || opens_chunk(index, cur.i, options) {
            break;
        }
        cur.bump();
    }
    Node::RegularText(cur.s[start..cur.i].to_string())
}

fn opens_chunk(index: &SpanIndex<'_>, at: usize, options: &ParseOptions) -> bool {
    [InlineCode::DELIM, Bold::DELIM, Italic::DELIM, Link::DELIM]
        .into_iter()
        .any(|delim| index.span(delim, at).is_some())
        || Escape::extract(index, at).is_some()
        || (options.keywords_enabled() && Keyword::extract(index, at).is_some())
}
