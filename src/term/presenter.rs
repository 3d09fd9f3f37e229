//! Presenter: draws the surface's visible rows through crossterm.

use crate::surface::{BlockKind, StyleFlags, Surface};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

// Warm palette for agent output; heading levels shade gold to amber.
const TEXT_COLOR: Color = Color::Rgb {
    r: 200,
    g: 200,
    b: 195,
};
const HEADING_H1_COLOR: Color = Color::Rgb {
    r: 255,
    g: 215,
    b: 100,
};
const HEADING_H2_COLOR: Color = Color::Rgb {
    r: 240,
    g: 190,
    b: 90,
};
const HEADING_COLOR: Color = Color::Rgb {
    r: 220,
    g: 170,
    b: 80,
};
const CODE_COLOR: Color = Color::Rgb {
    r: 180,
    g: 180,
    b: 180,
};
const QUOTE_COLOR: Color = Color::Rgb {
    r: 150,
    g: 150,
    b: 150,
};
const DIM_COLOR: Color = Color::Rgb {
    r: 100,
    g: 100,
    b: 100,
};

const fn color_for(kind: BlockKind, style: StyleFlags) -> Color {
    if style.contains(StyleFlags::CODE) {
        return CODE_COLOR;
    }
    match kind {
        BlockKind::Heading(1) => HEADING_H1_COLOR,
        BlockKind::Heading(2) => HEADING_H2_COLOR,
        BlockKind::Heading(_) => HEADING_COLOR,
        BlockKind::Quote => QUOTE_COLOR,
        BlockKind::Rule => DIM_COLOR,
        BlockKind::Paragraph | BlockKind::CodeBlock | BlockKind::List => TEXT_COLOR,
    }
}

/// Draws a [`Surface`] into a terminal-shaped writer.
///
/// The presenter owns no content and no scroll state; it reads the
/// surface's viewport and visible rows fresh on every draw.
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    /// Create a presenter over the given writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Draw the surface's visible rows, clearing stale row remainders.
    ///
    /// Rows are addressed from the top of the writer's screen; callers
    /// wanting an offset region should wrap the writer or leave rows to
    /// the surface viewport.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw(&mut self, surface: &Surface) -> io::Result<()> {
        let (cols, rows) = surface.viewport();
        let visible = surface.visible_rows();

        for y in 0..rows {
            queue!(
                self.out,
                MoveTo(0, y as u16),
                Clear(ClearType::UntilNewLine)
            )?;
            let Some(row) = visible.get(y) else { continue };

            if row.kind == BlockKind::Rule {
                queue!(
                    self.out,
                    SetForegroundColor(DIM_COLOR),
                    Print("─".repeat(cols)),
                    SetAttribute(Attribute::Reset)
                )?;
                continue;
            }

            for span in &row.line.spans {
                queue!(self.out, SetForegroundColor(color_for(row.kind, span.style)))?;
                if span.style.contains(StyleFlags::BOLD) || matches!(row.kind, BlockKind::Heading(_))
                {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                if span.style.contains(StyleFlags::ITALIC) {
                    queue!(self.out, SetAttribute(Attribute::Italic))?;
                }
                if span.style.contains(StyleFlags::STRIKETHROUGH) {
                    queue!(self.out, SetAttribute(Attribute::CrossedOut))?;
                }
                queue!(
                    self.out,
                    Print(span.text.as_str()),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Block, Line, Span};

    #[test]
    fn test_draw_emits_visible_text() {
        let mut surface = Surface::new(20, 4);
        surface.push_block(Block::new(
            BlockKind::Paragraph,
            vec![Line::new(vec![Span::plain("hello terminal")])],
        ));

        let mut out = Vec::new();
        Presenter::new(&mut out).draw(&surface).unwrap();

        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("hello terminal"));
    }

    #[test]
    fn test_draw_respects_scroll_window() {
        let mut surface = Surface::new(20, 1);
        surface.push_block(Block::new(
            BlockKind::Paragraph,
            vec![Line::new(vec![Span::plain("first")])],
        ));
        surface.push_block(Block::new(
            BlockKind::Paragraph,
            vec![Line::new(vec![Span::plain("second")])],
        ));
        surface.scroll_to_bottom();

        let mut out = Vec::new();
        Presenter::new(&mut out).draw(&surface).unwrap();

        let rendered = String::from_utf8_lossy(&out);
        assert!(rendered.contains("second"));
        assert!(!rendered.contains("first"));
    }
}
