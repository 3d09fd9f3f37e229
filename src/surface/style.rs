//! Inline style flags carried by rendered spans.

use bitflags::bitflags;

bitflags! {
    /// Inline text styles produced by the Markdown engine.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use driftmark::StyleFlags;
    /// let style = StyleFlags::BOLD | StyleFlags::ITALIC;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Strong emphasis (`**bold**`)
        const BOLD = 0b0000_0001;
        /// Emphasis (`*italic*`)
        const ITALIC = 0b0000_0010;
        /// Inline code or code-block content
        const CODE = 0b0000_0100;
        /// Strikethrough (`~~gone~~`)
        const STRIKETHROUGH = 0b0000_1000;
    }
}

impl std::fmt::Debug for StyleFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}
