use crate::parsing::{
    error::ParseError,
    inline::parse_inline_at,
    node::{ListItem, Node},
    options::ParseOptions,
    source::{self, Span, lines_with_spans},
};

use super::{
    classify::{LineClass, WikiLineClassifier},
    kinds::ListKind,
};

/// Phase 2 of block parsing: ordered block dispatch over classified lines.
///
/// Every `try_*` production either consumes lines and returns a node, or
/// leaves the position untouched and returns `None`.
pub(crate) struct BlockParser<'a, 'o> {
    src: &'a str,
    lines: Vec<LineClass<'a>>,
    pos: usize,
    options: &'o ParseOptions,
}

impl<'a, 'o> BlockParser<'a, 'o> {
    /// `src` must be normalized (see [`source::normalize`]).
    pub fn new(src: &'a str, options: &'o ParseOptions) -> Self {
        let classifier = WikiLineClassifier;
        let lines = lines_with_spans(src)
            .map(|lr| classifier.classify(&lr))
            .collect();
        Self {
            src,
            lines,
            pos: 0,
            options,
        }
    }

    /// Parses every block, blank lines included, in source order.
    pub fn parse(mut self) -> Result<Vec<Node>, ParseError> {
        let mut out = vec![];
        while self.pos < self.lines.len() {
            out.push(self.next_block()?);
        }
        Ok(out)
    }

    /// Block alternatives in priority order; the first match wins.
    fn next_block(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        let block = if let Some(node) = self.try_header()? {
            node
        } else if let Some(items) = self.try_list(ListKind::Bullet)? {
            Node::UnorderedList(items)
        } else if let Some(items) = self.try_list(ListKind::Numbered)? {
            Node::OrderedList(items)
        } else if let Some(node) = self.try_preformat() {
            node
        } else if let Some(node) = self.try_paragraph()? {
            node
        } else if let Some(node) = self.try_empty_line() {
            node
        } else {
            let offset = self.lines[start].line.start;
            return Err(ParseError::NoBlockMatch {
                line: source::line_number(self.src, offset),
                offset,
            });
        };
        log::trace!(
            "{} at line {} ({} lines)",
            block.kind(),
            start + 1,
            self.pos - start
        );
        Ok(block)
    }

    fn current(&self) -> Option<&LineClass<'a>> {
        self.lines.get(self.pos)
    }

    fn inline(&self, span: Span) -> Result<Vec<Node>, ParseError> {
        parse_inline_at(span.start, span.slice(self.src), self.options, 0)
    }

    /// `=+ text`
    fn try_header(&mut self) -> Result<Option<Node>, ParseError> {
        let Some(sig) = self.current().and_then(|c| c.header) else {
            return Ok(None);
        };
        let content = self.inline(sig.content)?;
        self.pos += 1;
        Ok(Some(Node::Header {
            level: sig.level,
            content,
        }))
    }

    /// One or more items of `kind`, then an optional blank line.
    fn try_list(&mut self, kind: ListKind) -> Result<Option<Vec<ListItem>>, ParseError> {
        let mut items = vec![];
        while let Some(item) = self.try_list_item(kind)? {
            items.push(item);
        }
        if items.is_empty() {
            return Ok(None);
        }
        self.skip_blank_line();
        Ok(Some(items))
    }

    /// A marker line plus any continuation lines.
    ///
    /// The item text is the marker content and each continuation line joined
    /// with newlines. That join is exactly the source from the marker content
    /// up to the last line's newline, so it is parsed as one span.
    fn try_list_item(&mut self, kind: ListKind) -> Result<Option<ListItem>, ParseError> {
        let Some(first) = self.current().and_then(|c| c.marker_content(kind)) else {
            return Ok(None);
        };
        let start = self.pos;
        self.pos += 1;

        let mut end = first.end;
        while let Some(next) = self.current().filter(|c| c.is_continuation()) {
            end = next.content().end;
            self.pos += 1;
        }

        match self.inline(Span::new(first.start, end)) {
            Ok(content) => Ok(Some(ListItem { content })),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }

    /// Indented lines, then any runs of blank lines followed by more
    /// indented lines, then an optional blank line.
    fn try_preformat(&mut self) -> Option<Node> {
        let mut lines = self.take_indented();
        if lines.is_empty() {
            return None;
        }

        loop {
            let save = self.pos;
            let blanks = self.take_blank_lines();
            if blanks.is_empty() {
                break;
            }
            let more = self.take_indented();
            if more.is_empty() {
                self.pos = save;
                break;
            }
            lines.extend(blanks);
            lines.extend(more);
        }

        self.skip_blank_line();
        Some(Node::Preformat(lines))
    }

    fn take_indented(&mut self) -> Vec<String> {
        let mut out = vec![];
        while let Some(text) = self.current().and_then(|c| c.indented.clone()) {
            out.push(text);
            self.pos += 1;
        }
        out
    }

    fn take_blank_lines(&mut self) -> Vec<String> {
        let mut out = vec![];
        while let Some(c) = self.current().filter(|c| c.is_blank()) {
            out.push(c.text.to_string());
            self.pos += 1;
        }
        out
    }

    /// Consecutive plain lines, concatenated verbatim.
    fn try_paragraph(&mut self) -> Result<Option<Node>, ParseError> {
        let start = self.pos;
        while self.current().is_some_and(LineClass::is_plain) {
            self.pos += 1;
        }
        if self.pos == start {
            return Ok(None);
        }

        let span = Span::new(self.lines[start].line.start, self.lines[self.pos - 1].line.end);
        match self.inline(span) {
            Ok(content) => Ok(Some(Node::Paragraph(content))),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }

    fn try_empty_line(&mut self) -> Option<Node> {
        let ws = self.current()?.blank?;
        self.pos += 1;
        Some(Node::EmptyLine(ws.to_string()))
    }

    fn skip_blank_line(&mut self) {
        if self.current().is_some_and(LineClass::is_blank) {
            self.pos += 1;
        }
    }
}
