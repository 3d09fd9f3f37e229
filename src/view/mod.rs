//! Lifecycle controller: the view that ties capture, engine, and surface
//! together.
//!
//! # Data flow
//!
//! ```text
//! ┌─────────────────┐   Fragment    ┌──────────────┐
//! │ External writer │ ────────────▶ │ Capture inbox│
//! └─────────────────┘               └──────┬───────┘
//!                                          │ pump()
//!                                          ▼
//! ┌─────────────────┐    feed     ┌────────────────┐
//! │   Manual API    │ ──────────▶ │ Engine binding │
//! └─────────────────┘             └──────┬─────────┘
//!                                        │ blocks
//!                                        ▼
//!                                  ┌──────────┐   follow policy
//!                                  │ Surface  │ ◀───────────────
//!                                  └──────────┘
//! ```

mod follow;
#[allow(clippy::module_inception)]
mod view;

pub use follow::{snap_if_near_bottom, FOLLOW_SLACK_ROWS};
pub use view::{Liveness, MarkdownView};
