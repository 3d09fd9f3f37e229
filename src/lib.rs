//! # Driftmark
//!
//! An incremental Markdown view for streaming agent output.
//!
//! Driftmark renders a chunked Markdown stream (LLM tokens, server pushes)
//! into progressively-updated structured output without re-parsing or
//! re-rendering what it has already emitted, and keeps the newest output
//! in view without fighting a reader who has scrolled away.
//!
//! ## Core Concepts
//!
//! - **Capture inbox**: external writers push text fragments through a
//!   channel; the view drains it exactly once, in order
//! - **Engine binding**: one incremental parse session at a time, started
//!   lazily and rebound on reset
//! - **Surface**: finalized blocks plus a provisional tail, wrapped and
//!   scrolled against a viewport
//! - **Follow policy**: stateless near-bottom snap after every chunk
//!
//! ## Example
//!
//! ```rust
//! use driftmark::MarkdownView;
//!
//! let mut view = MarkdownView::new();
//! let writer = view.writer();
//! view.attach();
//!
//! writer.push_text("# Streaming\n");
//! writer.push_text("Hello, ");
//! writer.push_text("**world**!");
//! view.pump();
//! view.finish();
//!
//! assert!(view.surface().text().contains("Streaming"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod capture;
pub mod engine;
pub mod surface;
pub mod term;
pub mod view;

// Re-exports for convenience
pub use capture::{ChunkWriter, Fragment};
pub use engine::{CmarkParser, EngineBinding, ParserFactory, StreamParser};
pub use surface::{Block, BlockKind, DisplayRow, Line, Span, StyleFlags, Surface};
pub use term::Presenter;
pub use view::{Liveness, MarkdownView, FOLLOW_SLACK_ROWS};
