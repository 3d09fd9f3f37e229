//! The parser-session seam consumed from the Markdown engine.

use crate::surface::Surface;

/// One incremental parse session bound to a render target for its lifetime.
///
/// The sink is passed at call time rather than captured at construction,
/// so a feed always reaches the current surface and a stale session can
/// never write through a handle it captured earlier.
pub trait StreamParser {
    /// Feed a chunk of Markdown source to the session.
    ///
    /// The engine decides how much of the accumulated source is complete
    /// enough to emit; content it has already emitted is never re-parsed.
    fn write(&mut self, text: &str, sink: &mut Surface);

    /// Close the session's output.
    ///
    /// Any structure left open by earlier writes is flushed so the sink
    /// holds well-formed final output. Calling this twice is harmless.
    fn end(&mut self, sink: &mut Surface);
}

/// Factory producing fresh parser sessions.
///
/// The binding invokes this on lazy session start and on every rebind.
pub type ParserFactory = Box<dyn Fn() -> Box<dyn StreamParser>>;
