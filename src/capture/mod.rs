//! Capture: turning externally-injected fragments into a chunk stream.
//!
//! The observed surface is an explicit channel: producers push
//! [`Fragment`]s through a [`ChunkWriter`] from any thread, and the view
//! drains them on its own. Consuming a fragment removes it, which is the
//! whole contract: at-most-once delivery, in send order, with nothing
//! left behind to render verbatim or read twice.

mod fragment;
mod inbox;

pub use fragment::Fragment;
pub use inbox::{ChunkWriter, Inbox};
