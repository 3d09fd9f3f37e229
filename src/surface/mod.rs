//! Render target: the isolated surface structured output lands on.
//!
//! The engine never draws to the terminal directly. It emits blocks of
//! styled lines into a [`Surface`], which owns scroll state and wrap
//! metrics. Presentation (colors, terminal attributes) happens at the
//! edge, in [`crate::term`].

mod block;
mod style;
#[allow(clippy::module_inception)]
mod surface;

pub use block::{Block, BlockKind, Line, Span};
pub use style::StyleFlags;
pub use surface::{DisplayRow, Surface};
