//! Default engine: a block-incremental adapter over `pulldown-cmark`.
//!
//! # Incrementality
//!
//! The adapter never re-parses what it has already emitted. It buffers the
//! open trailing region of the source; whenever a blank-line boundary
//! (outside fenced code) passes, the completed region is parsed once and
//! promoted to finalized blocks. The still-open remainder is re-rendered
//! as the surface's provisional tail, so a half-arrived paragraph is
//! visible the moment its first chunk lands.

use super::parser::StreamParser;
use crate::surface::{Block, BlockKind, Line, Span, StyleFlags, Surface};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Incremental Markdown parse session backed by `pulldown-cmark`.
pub struct CmarkParser {
    /// Source not yet promoted past a block boundary.
    pending: String,
}

impl CmarkParser {
    /// Create a fresh session with no buffered source.
    pub const fn new() -> Self {
        Self {
            pending: String::new(),
        }
    }
}

impl Default for CmarkParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamParser for CmarkParser {
    fn write(&mut self, text: &str, sink: &mut Surface) {
        self.pending.push_str(text);

        let boundary = complete_boundary(&self.pending);
        if boundary > 0 {
            let rest = self.pending.split_off(boundary);
            for block in render_blocks(&self.pending) {
                sink.push_block(block);
            }
            self.pending = rest;
        }

        sink.set_tail(render_blocks(&self.pending));
    }

    fn end(&mut self, sink: &mut Surface) {
        sink.set_tail(Vec::new());
        if !self.pending.is_empty() {
            let pending = std::mem::take(&mut self.pending);
            for block in render_blocks(&pending) {
                sink.push_block(block);
            }
        }
    }
}

/// Byte offset of the last blank-line boundary outside fenced code.
///
/// Everything before the boundary parses as complete blocks; a boundary
/// of zero means the whole buffer is still open.
fn complete_boundary(text: &str) -> usize {
    let mut in_fence = false;
    let mut boundary = 0;
    let mut pos = 0;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if !in_fence && trimmed.is_empty() && line.ends_with('\n') {
            boundary = pos + line.len();
        }
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
        }
        pos += line.len();
    }

    boundary
}

fn flush_line(spans: &mut Vec<Span>, lines: &mut Vec<Line>, keep_empty: bool) {
    if spans.is_empty() {
        if keep_empty {
            lines.push(Line::empty());
        }
    } else {
        lines.push(Line::new(std::mem::take(spans)));
    }
}

fn flush_block(
    kind: BlockKind,
    spans: &mut Vec<Span>,
    lines: &mut Vec<Line>,
    blocks: &mut Vec<Block>,
) {
    flush_line(spans, lines, false);
    if !lines.is_empty() {
        blocks.push(Block::new(kind, std::mem::take(lines)));
    }
}

/// Render a piece of Markdown source into blocks.
///
/// Runs the source through `pulldown-cmark` once, folding inline events
/// into styled spans and container events into blocks.
#[allow(clippy::too_many_lines)]
fn render_blocks(text: &str) -> Vec<Block> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(text, options);

    let mut blocks: Vec<Block> = Vec::new();
    let mut lines: Vec<Line> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut style = StyleFlags::empty();
    let mut quote_depth = 0usize;
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::BlockQuote(_) => quote_depth += 1,
                Tag::CodeBlock(_) => {
                    in_code_block = true;
                    style.insert(StyleFlags::CODE);
                }
                Tag::List(start) => list_stack.push(start),
                Tag::Item => {
                    let marker = match list_stack.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{n}. ");
                            *n += 1;
                            marker
                        }
                        _ => "• ".to_string(),
                    };
                    let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                    spans.push(Span::plain(format!("{indent}{marker}")));
                }
                Tag::Emphasis => style.insert(StyleFlags::ITALIC),
                Tag::Strong => style.insert(StyleFlags::BOLD),
                Tag::Strikethrough => style.insert(StyleFlags::STRIKETHROUGH),
                _ => {}
            },
            Event::End(end) => match end {
                TagEnd::Heading(level) => {
                    if quote_depth == 0 {
                        flush_block(
                            BlockKind::Heading(level as u8),
                            &mut spans,
                            &mut lines,
                            &mut blocks,
                        );
                    } else {
                        flush_line(&mut spans, &mut lines, false);
                    }
                }
                TagEnd::Paragraph | TagEnd::HtmlBlock => {
                    if list_stack.is_empty() && quote_depth == 0 {
                        flush_block(BlockKind::Paragraph, &mut spans, &mut lines, &mut blocks);
                    } else {
                        flush_line(&mut spans, &mut lines, false);
                    }
                }
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    style.remove(StyleFlags::CODE);
                    if list_stack.is_empty() && quote_depth == 0 {
                        flush_block(BlockKind::CodeBlock, &mut spans, &mut lines, &mut blocks);
                    } else {
                        flush_line(&mut spans, &mut lines, false);
                    }
                }
                TagEnd::Item => flush_line(&mut spans, &mut lines, false),
                TagEnd::List(_) => {
                    list_stack.pop();
                    if list_stack.is_empty() && quote_depth == 0 {
                        flush_block(BlockKind::List, &mut spans, &mut lines, &mut blocks);
                    }
                }
                TagEnd::BlockQuote(_) => {
                    quote_depth = quote_depth.saturating_sub(1);
                    if quote_depth == 0 {
                        flush_block(BlockKind::Quote, &mut spans, &mut lines, &mut blocks);
                    }
                }
                TagEnd::Emphasis => style.remove(StyleFlags::ITALIC),
                TagEnd::Strong => style.remove(StyleFlags::BOLD),
                TagEnd::Strikethrough => style.remove(StyleFlags::STRIKETHROUGH),
                _ => {}
            },
            Event::Text(t) | Event::Html(t) | Event::InlineHtml(t) => {
                let mut first = true;
                for part in t.split('\n') {
                    if !first {
                        flush_line(&mut spans, &mut lines, in_code_block);
                    }
                    if !part.is_empty() {
                        spans.push(Span::new(part, style));
                    }
                    first = false;
                }
            }
            Event::Code(t) => {
                spans.push(Span::new(t.into_string(), style | StyleFlags::CODE));
            }
            Event::SoftBreak | Event::HardBreak => flush_line(&mut spans, &mut lines, false),
            Event::Rule => blocks.push(Block::new(BlockKind::Rule, vec![Line::empty()])),
            Event::TaskListMarker(checked) => {
                spans.push(Span::plain(if checked { "[x] " } else { "[ ] " }));
            }
            _ => {}
        }
    }

    // Anything still open (mid-stream source) lands as a paragraph.
    flush_block(BlockKind::Paragraph, &mut spans, &mut lines, &mut blocks);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(surface: &Surface) -> Vec<BlockKind> {
        surface.blocks().map(|b| b.kind).collect()
    }

    #[test]
    fn test_boundary_at_blank_line() {
        assert_eq!(complete_boundary("para one\n\npara two"), 10);
        assert_eq!(complete_boundary("no boundary yet"), 0);
        assert_eq!(complete_boundary("trailing\n\n"), 10);
    }

    #[test]
    fn test_boundary_ignores_blank_lines_in_fences() {
        let src = "```\ncode\n\nmore\n```\nafter";
        assert_eq!(complete_boundary(src), 0);

        let closed = "```\ncode\n\nmore\n```\n\nafter";
        assert_eq!(complete_boundary(closed), closed.len() - "after".len());
    }

    #[test]
    fn test_heading_renders_immediately() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();
        parser.write("# Hi\n", &mut surface);

        assert_eq!(surface.block_count(), 1);
        let block = surface.blocks().next().unwrap();
        assert_eq!(block.kind, BlockKind::Heading(1));
        assert_eq!(block.text(), "Hi");
    }

    #[test]
    fn test_partial_paragraph_is_visible() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();
        parser.write("Hello ", &mut surface);

        assert!(surface.text().contains("Hello"));
        assert_eq!(kinds(&surface), vec![BlockKind::Paragraph]);
    }

    #[test]
    fn test_blank_line_promotes_block() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();

        parser.write("first paragraph\n\n", &mut surface);
        parser.write("second", &mut surface);

        assert_eq!(surface.block_count(), 2);
        assert_eq!(surface.text(), "first paragraph\nsecond");

        // Growing the tail must not duplicate the promoted block.
        parser.write(" paragraph", &mut surface);
        assert_eq!(surface.block_count(), 2);
        assert_eq!(surface.text(), "first paragraph\nsecond paragraph");
    }

    #[test]
    fn test_inline_styles() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();
        parser.write("plain **bold** and `code`", &mut surface);

        let block = surface.blocks().next().unwrap();
        let line = &block.lines[0];
        assert!(line
            .spans
            .iter()
            .any(|s| s.text == "bold" && s.style.contains(StyleFlags::BOLD)));
        assert!(line
            .spans
            .iter()
            .any(|s| s.text == "code" && s.style.contains(StyleFlags::CODE)));
    }

    #[test]
    fn test_code_block_keeps_blank_lines() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();
        parser.write("```\nfn a() {}\n\nfn b() {}\n```\n", &mut surface);

        let block = surface.blocks().next().unwrap();
        assert_eq!(block.kind, BlockKind::CodeBlock);
        assert_eq!(block.lines.len(), 3);
        assert_eq!(block.lines[1].text(), "");
    }

    #[test]
    fn test_lists_get_markers() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();
        parser.write("- alpha\n- beta\n\n1. one\n2. two\n", &mut surface);

        let blocks: Vec<_> = surface.blocks().collect();
        assert_eq!(blocks[0].kind, BlockKind::List);
        assert_eq!(blocks[0].text(), "• alpha\n• beta");
        assert_eq!(blocks[1].kind, BlockKind::List);
        assert_eq!(blocks[1].text(), "1. one\n2. two");
    }

    #[test]
    fn test_quote_and_rule() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();
        parser.write("> quoted\n\n---\n\n", &mut surface);

        assert_eq!(kinds(&surface), vec![BlockKind::Quote, BlockKind::Rule]);
    }

    #[test]
    fn test_end_promotes_open_tail() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();

        parser.write("unterminated *emphas", &mut surface);
        parser.end(&mut surface);

        assert_eq!(surface.block_count(), 1);
        assert!(surface.text().contains("unterminated"));
    }

    #[test]
    fn test_end_twice_is_harmless() {
        let mut parser = CmarkParser::new();
        let mut surface = Surface::default();

        parser.write("some text", &mut surface);
        parser.end(&mut surface);
        let after_first = surface.text();
        let count = surface.block_count();

        parser.end(&mut surface);
        assert_eq!(surface.text(), after_first);
        assert_eq!(surface.block_count(), count);
    }
}
