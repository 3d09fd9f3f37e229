//! The streaming Markdown view: lifecycle, capture pump, and manual API.

use super::follow;
use crate::capture::{ChunkWriter, Inbox};
use crate::engine::{EngineBinding, ParserFactory};
use crate::surface::Surface;
use tracing::{debug, trace};

/// Live-region politeness, mirrored for host accessibility bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    /// Content is streaming; announce updates politely.
    Polite,
    /// The stream has finished (or never started); no announcements.
    Off,
}

/// A progressively-updated Markdown view fed by a live chunk stream.
///
/// The view owns the render [`Surface`], the engine binding, and the
/// capture inbox. Chunks arrive two ways, used interchangeably: external
/// writers push [`crate::Fragment`]s through a [`ChunkWriter`] and the
/// host loop calls [`pump`](Self::pump), or a programmatic driver calls
/// [`append_chunk`](Self::append_chunk) directly. Either way each chunk
/// is fed to the engine exactly once, in arrival order.
///
/// All methods are synchronous and infallible; irregular input is
/// absorbed internally (empty chunks skipped, malformed fragments
/// extracted as empty), never surfaced to the caller.
pub struct MarkdownView {
    /// The render target.
    surface: Surface,
    /// Session ownership and the feed path.
    binding: EngineBinding,
    /// The observed surface external writers push into.
    inbox: Inbox,
    /// Whether live observation is delivering fragments.
    attached: bool,
    /// Accessibility role; defaulted on first attach if unset.
    role: Option<String>,
    /// Live-region state.
    liveness: Liveness,
}

impl MarkdownView {
    /// Create a detached view with the default `pulldown-cmark` engine.
    pub fn new() -> Self {
        Self::with_binding(EngineBinding::default())
    }

    /// Create a detached view with a custom engine factory.
    pub fn with_parser(factory: ParserFactory) -> Self {
        Self::with_binding(EngineBinding::new(factory))
    }

    fn with_binding(binding: EngineBinding) -> Self {
        Self {
            surface: Surface::default(),
            binding,
            inbox: Inbox::new(),
            attached: false,
            role: None,
            liveness: Liveness::Off,
        }
    }

    /// Hand out a producer handle into the capture inbox.
    ///
    /// Writers work before attach: fragments queue up and the attach-time
    /// drain consumes them in order.
    pub fn writer(&self) -> ChunkWriter {
        self.inbox.writer()
    }

    /// Mount the view: start a fresh session and begin live observation.
    ///
    /// Sets the default role (`article`) only if the caller hasn't set
    /// one, marks the region live, rebinds the engine to a cleared
    /// surface, and drains every fragment already queued, in order.
    pub fn attach(&mut self) {
        if self.role.is_none() {
            self.role = Some("article".to_string());
        }
        self.liveness = Liveness::Polite;
        self.binding.rebind(&mut self.surface);
        self.attached = true;
        debug!(backlog = self.inbox.pending(), "view attached");
        self.pump();
    }

    /// Unmount the view: stop observation and drop the session.
    ///
    /// Teardown is abrupt: no finalize is issued. Fragments pushed while
    /// detached queue up for a future attach.
    pub fn detach(&mut self) {
        self.attached = false;
        self.binding.release();
        debug!("view detached");
    }

    /// Drain queued fragments into the engine. The observation callback.
    ///
    /// Call from the host loop whenever producers may have pushed. Each
    /// fragment is consumed exactly once; empty extractions are skipped
    /// without a feed. Delivers nothing while detached. Returns the
    /// number of chunks fed.
    pub fn pump(&mut self) -> usize {
        if !self.attached {
            return 0;
        }
        let mut fed = 0;
        while let Some(fragment) = self.inbox.try_next() {
            let text = fragment.text();
            if text.is_empty() {
                trace!("skipped empty fragment");
                continue;
            }
            self.binding.feed(&mut self.surface, &text);
            follow::snap_if_near_bottom(&mut self.surface);
            fed += 1;
        }
        fed
    }

    /// Manually feed a chunk, bypassing capture. Empty input is ignored.
    ///
    /// Works even when detached or before first attach: a session is
    /// started lazily, bound to the current surface.
    pub fn append_chunk(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.binding.feed(&mut self.surface, text);
        follow::snap_if_near_bottom(&mut self.surface);
    }

    /// Gracefully close the current output. Idempotent.
    ///
    /// Flushes any structure the engine still holds open and turns the
    /// live region off. The session survives; feeding after finish is
    /// the caller's responsibility to avoid.
    pub fn finish(&mut self) {
        self.binding.finalize(&mut self.surface);
        self.liveness = Liveness::Off;
        debug!("stream finished");
    }

    /// Hard-restart the session and the visible output.
    ///
    /// Clears the surface, discards the old session without finalizing,
    /// starts a new one, and restores the live-region signal. Observation
    /// status is untouched.
    pub fn reset(&mut self) {
        self.binding.rebind(&mut self.surface);
        self.liveness = Liveness::Polite;
        debug!("view reset");
    }

    /// Whether live observation is active.
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// The accessibility role, if set.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Override the accessibility role. Survives attach.
    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = Some(role.into());
    }

    /// Current live-region state.
    pub const fn liveness(&self) -> Liveness {
        self.liveness
    }

    /// The render target, for presenters and inspection.
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Resize the viewport the surface wraps and scrolls against.
    pub fn set_viewport(&mut self, cols: usize, rows: usize) {
        self.surface.set_viewport(cols, rows);
    }

    /// Scroll toward older content.
    pub const fn scroll_up(&mut self, rows: usize) {
        self.surface.scroll_up(rows);
    }

    /// Scroll toward newer content.
    pub fn scroll_down(&mut self, rows: usize) {
        self.surface.scroll_down(rows);
    }

    /// Jump to the newest content.
    pub fn scroll_to_bottom(&mut self) {
        self.surface.scroll_to_bottom();
    }

    /// Whether the newest content is in view.
    pub fn at_bottom(&self) -> bool {
        self.surface.at_bottom()
    }
}

impl Default for MarkdownView {
    fn default() -> Self {
        Self::new()
    }
}
