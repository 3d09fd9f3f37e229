//! Engine binding: session ownership and the feed path.
//!
//! The binding owns at most one live parser session at a time. Feeding
//! with no session transparently starts one (lazy session start) instead
//! of erroring; releasing and rebinding are the only operations that drop
//! a session, and neither finalizes it.

use super::cmark::CmarkParser;
use super::parser::{ParserFactory, StreamParser};
use crate::surface::Surface;
use tracing::{debug, trace};

/// Owns one parser session and mediates every feed into it.
pub struct EngineBinding {
    /// The live session, if any. `None` when detached or never started.
    session: Option<Box<dyn StreamParser>>,
    /// Factory for fresh sessions.
    factory: ParserFactory,
}

impl EngineBinding {
    /// Create a binding that builds sessions with the given factory.
    pub fn new(factory: ParserFactory) -> Self {
        Self {
            session: None,
            factory,
        }
    }

    /// Check whether a session is live.
    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Forward a chunk to the session, starting one lazily if needed.
    ///
    /// Empty text is a no-op by design: no session is started and no
    /// write is issued.
    pub fn feed(&mut self, sink: &mut Surface, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.session.is_none() {
            debug!("starting parser session lazily");
            self.session = Some((self.factory)());
        }
        trace!(bytes = text.len(), "feeding chunk");
        if let Some(session) = self.session.as_mut() {
            session.write(text, sink);
        }
    }

    /// Close out the session's output. No-op without a session.
    ///
    /// The session is kept: chunks fed after finalize are the caller's
    /// responsibility to avoid, but the binding does not forbid them.
    pub fn finalize(&mut self, sink: &mut Surface) {
        if let Some(session) = self.session.as_mut() {
            session.end(sink);
        }
    }

    /// Discard any session without finalizing, clear the sink, and start
    /// a fresh session. Used by both attach and explicit reset.
    pub fn rebind(&mut self, sink: &mut Surface) {
        sink.clear();
        self.session = Some((self.factory)());
    }

    /// Drop the session without finalizing. Abrupt teardown for detach.
    pub fn release(&mut self) {
        self.session = None;
    }
}

impl Default for EngineBinding {
    fn default() -> Self {
        Self::new(Box::new(|| Box::new(CmarkParser::new())))
    }
}
