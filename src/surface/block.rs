//! Rendered block structure: spans, lines, and blocks.
//!
//! The Markdown engine emits structured output as a sequence of blocks
//! (paragraphs, headings, code blocks, ...), each made of styled lines.
//! Styling decisions (colors, attributes) are deliberately left to the
//! presenter; the block model only records structure and style flags.

use super::style::StyleFlags;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The text content of the run.
    pub text: String,
    /// Inline style flags for the run.
    pub style: StyleFlags,
}

impl Span {
    /// Create a styled span.
    pub fn new(text: impl Into<String>, style: StyleFlags) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleFlags::empty())
    }

    /// Display width of the span in terminal columns.
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }
}

/// A single logical line of styled spans.
///
/// Logical lines are produced by the engine; the surface wraps them to
/// display rows when the viewport width demands it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// The spans making up the line, in display order.
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from spans.
    pub const fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Create an empty line.
    pub const fn empty() -> Self {
        Self { spans: Vec::new() }
    }

    /// Concatenated text content, structure discarded.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Total display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Wrap the line to the given column budget.
    ///
    /// Splits greedily at grapheme boundaries, preserving span styles
    /// across the split. An empty line yields a single empty row, and a
    /// zero-width budget disables wrapping.
    pub fn wrap(&self, cols: usize) -> Vec<Self> {
        if cols == 0 {
            return vec![self.clone()];
        }

        let mut rows = Vec::new();
        let mut current = Self::empty();
        let mut used = 0usize;

        for span in &self.spans {
            let mut piece = String::new();
            for grapheme in span.text.graphemes(true) {
                let width = UnicodeWidthStr::width(grapheme);
                if used + width > cols && used > 0 {
                    if !piece.is_empty() {
                        current
                            .spans
                            .push(Span::new(std::mem::take(&mut piece), span.style));
                    }
                    rows.push(std::mem::replace(&mut current, Self::empty()));
                    used = 0;
                }
                piece.push_str(grapheme);
                used += width;
            }
            if !piece.is_empty() {
                current.spans.push(Span::new(piece, span.style));
            }
        }

        rows.push(current);
        rows
    }

    /// Number of display rows the line occupies at the given width.
    pub fn wrapped_height(&self, cols: usize) -> usize {
        self.wrap(cols).len()
    }
}

/// The structural kind of a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Plain paragraph text.
    Paragraph,
    /// Heading with level 1-6.
    Heading(u8),
    /// Fenced or indented code block.
    CodeBlock,
    /// Ordered or unordered list.
    List,
    /// Block quote.
    Quote,
    /// Thematic break (horizontal rule).
    Rule,
}

/// A rendered block: the unit of structure the engine emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The structural kind of the block.
    pub kind: BlockKind,
    /// The lines of the block, top to bottom.
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block.
    pub const fn new(kind: BlockKind, lines: Vec<Line>) -> Self {
        Self { kind, lines }
    }

    /// Concatenated text of all lines, joined with newlines.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of display rows the block occupies at the given width.
    pub fn wrapped_height(&self, cols: usize) -> usize {
        self.lines.iter().map(|l| l.wrapped_height(cols)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text_concatenates_spans() {
        let line = Line::new(vec![
            Span::plain("Hello, "),
            Span::new("world", StyleFlags::BOLD),
        ]);
        assert_eq!(line.text(), "Hello, world");
        assert_eq!(line.width(), 12);
    }

    #[test]
    fn test_wrap_splits_at_budget() {
        let line = Line::new(vec![Span::plain("abcdefghij")]);
        let rows = line.wrap(4);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].text(), "abcd");
        assert_eq!(rows[1].text(), "efgh");
        assert_eq!(rows[2].text(), "ij");
    }

    #[test]
    fn test_wrap_preserves_styles() {
        let line = Line::new(vec![
            Span::plain("abc"),
            Span::new("def", StyleFlags::ITALIC),
        ]);
        let rows = line.wrap(4);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].spans[1].style, StyleFlags::ITALIC);
        assert_eq!(rows[1].text(), "ef");
    }

    #[test]
    fn test_wrap_wide_graphemes() {
        // CJK characters are 2 columns wide; three don't fit in 5 columns.
        let line = Line::new(vec![Span::plain("你好吗")]);
        let rows = line.wrap(5);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text(), "你好");
        assert_eq!(rows[1].text(), "吗");
    }

    #[test]
    fn test_empty_line_is_one_row() {
        assert_eq!(Line::empty().wrapped_height(10), 1);
    }

    #[test]
    fn test_block_text_joins_lines() {
        let block = Block::new(
            BlockKind::CodeBlock,
            vec![
                Line::new(vec![Span::new("let x = 1;", StyleFlags::CODE)]),
                Line::new(vec![Span::new("let y = 2;", StyleFlags::CODE)]),
            ],
        );
        assert_eq!(block.text(), "let x = 1;\nlet y = 2;");
        assert_eq!(block.wrapped_height(80), 2);
    }
}
