//! The capture inbox: an MPSC channel standing in for the observed surface.
//!
//! External writers (socket tasks, SSE pumps, other threads) hold
//! [`ChunkWriter`] handles and push fragments at any time. The view is the
//! only consumer; receiving a fragment removes it permanently, so a
//! fragment is delivered at most once, in send order, and never
//! accumulates as displayable content.

use super::fragment::Fragment;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Cloneable producer handle for pushing fragments into a view's inbox.
#[derive(Debug, Clone)]
pub struct ChunkWriter {
    tx: Sender<Fragment>,
}

impl ChunkWriter {
    /// Push a fragment. Silently dropped if the view is gone.
    pub fn push(&self, fragment: Fragment) {
        let _ = self.tx.send(fragment);
    }

    /// Push a bare text fragment.
    pub fn push_text(&self, text: impl Into<String>) {
        self.push(Fragment::Text(text.into()));
    }
}

/// The single-consumer inbox owned by a view.
#[derive(Debug)]
pub struct Inbox {
    tx: Sender<Fragment>,
    rx: Receiver<Fragment>,
}

impl Inbox {
    /// Create an empty inbox.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Hand out a producer handle.
    pub fn writer(&self) -> ChunkWriter {
        ChunkWriter {
            tx: self.tx.clone(),
        }
    }

    /// Consume the next queued fragment, if any. Never blocks.
    pub fn try_next(&self) -> Option<Fragment> {
        self.rx.try_recv().ok()
    }

    /// Number of fragments currently queued.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_arrive_in_send_order() {
        let inbox = Inbox::new();
        let writer = inbox.writer();
        writer.push_text("a");
        writer.push_text("b");
        writer.push_text("c");

        assert_eq!(inbox.pending(), 3);
        assert_eq!(inbox.try_next(), Some(Fragment::Text("a".to_string())));
        assert_eq!(inbox.try_next(), Some(Fragment::Text("b".to_string())));
        assert_eq!(inbox.try_next(), Some(Fragment::Text("c".to_string())));
        assert_eq!(inbox.try_next(), None);
    }

    #[test]
    fn test_consumption_is_at_most_once() {
        let inbox = Inbox::new();
        inbox.writer().push_text("only");
        assert!(inbox.try_next().is_some());
        assert!(inbox.try_next().is_none());
    }

    #[test]
    fn test_writers_are_cloneable() {
        let inbox = Inbox::new();
        let a = inbox.writer();
        let b = a.clone();
        a.push_text("1");
        b.push_text("2");
        assert_eq!(inbox.pending(), 2);
    }

    #[test]
    fn test_push_after_consumer_drop_is_silent() {
        let inbox = Inbox::new();
        let writer = inbox.writer();
        drop(inbox);
        // Must not panic.
        writer.push_text("into the void");
    }
}
