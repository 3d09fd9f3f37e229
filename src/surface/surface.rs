//! The render target: an isolated surface the engine writes blocks into.
//!
//! The surface keeps finalized blocks apart from the **provisional tail**
//! (the blocks re-rendered from the engine's still-open trailing region).
//! Finalized blocks are never replaced; the tail is swapped wholesale each
//! time the engine advances. Scroll metrics are measured in wrapped display
//! rows against the current viewport, with one blank spacer row between
//! blocks.

use super::block::{Block, BlockKind, Line};

/// A single display row with the kind of the block it belongs to.
///
/// Spacer rows between blocks carry [`BlockKind::Paragraph`] and an empty
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Kind of the originating block.
    pub kind: BlockKind,
    /// The wrapped row content.
    pub line: Line,
}

/// The isolated content surface that receives structured engine output.
///
/// Nothing outside the view mutates the surface; external writers go
/// through the capture inbox or the manual API, never directly here.
#[derive(Debug)]
pub struct Surface {
    /// Finalized blocks, never re-parsed or replaced.
    blocks: Vec<Block>,
    /// Provisional blocks for the engine's open trailing region.
    tail: Vec<Block>,
    /// Viewport width in columns.
    cols: usize,
    /// Viewport height in rows.
    rows: usize,
    /// Scroll offset from the top, in display rows.
    scroll_top: usize,
}

impl Surface {
    /// Create a surface with the given viewport.
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self {
            blocks: Vec::new(),
            tail: Vec::new(),
            cols,
            rows,
            scroll_top: 0,
        }
    }

    /// Append a finalized block.
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Replace the provisional tail wholesale.
    pub fn set_tail(&mut self, blocks: Vec<Block>) {
        self.tail = blocks;
    }

    /// Remove all content and reset the scroll position.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.tail.clear();
        self.scroll_top = 0;
    }

    /// Iterate all blocks in document order, finalized then provisional.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().chain(self.tail.iter())
    }

    /// Total number of blocks, provisional tail included.
    pub fn block_count(&self) -> usize {
        self.blocks.len() + self.tail.len()
    }

    /// Check whether the surface holds no content at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.tail.is_empty()
    }

    /// Concatenated text of all blocks, for inspection and tests.
    pub fn text(&self) -> String {
        self.blocks()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Current viewport as `(cols, rows)`.
    pub const fn viewport(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Resize the viewport, re-clamping the scroll position.
    pub fn set_viewport(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Total display rows at the current viewport width.
    pub fn total_rows(&self) -> usize {
        let content: usize = self.blocks().map(|b| b.wrapped_height(self.cols)).sum();
        let spacers = self.block_count().saturating_sub(1);
        content + spacers
    }

    /// Maximum scroll offset: content rows beyond the viewport.
    pub fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.rows)
    }

    /// Current scroll offset from the top, in display rows.
    pub const fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Set the scroll offset, clamped to the maximum.
    pub fn set_scroll_top(&mut self, row: usize) {
        self.scroll_top = row.min(self.max_scroll());
    }

    /// Scroll toward older content by `rows`.
    pub const fn scroll_up(&mut self, rows: usize) {
        self.scroll_top = self.scroll_top.saturating_sub(rows);
    }

    /// Scroll toward newer content by `rows`.
    pub fn scroll_down(&mut self, rows: usize) {
        self.set_scroll_top(self.scroll_top + rows);
    }

    /// Jump to the newest content.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.max_scroll();
    }

    /// Check whether the newest content is in view.
    pub fn at_bottom(&self) -> bool {
        self.scroll_top == self.max_scroll()
    }

    /// Lay out every block into display rows at the viewport width.
    pub fn layout(&self) -> Vec<DisplayRow> {
        let mut rows = Vec::new();
        let mut first = true;
        for block in self.blocks() {
            if !first {
                rows.push(DisplayRow {
                    kind: BlockKind::Paragraph,
                    line: Line::empty(),
                });
            }
            first = false;
            for line in &block.lines {
                for wrapped in line.wrap(self.cols) {
                    rows.push(DisplayRow {
                        kind: block.kind,
                        line: wrapped,
                    });
                }
            }
        }
        rows
    }

    /// The display rows currently inside the viewport.
    pub fn visible_rows(&self) -> Vec<DisplayRow> {
        let all = self.layout();
        let start = self.scroll_top.min(all.len());
        let end = (start + self.rows).min(all.len());
        all[start..end].to_vec()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
