//! Terminal edge: presenting a surface through crossterm.
//!
//! Everything here is optional plumbing for hosts that render straight to
//! a tty; the core view never touches the terminal.

mod presenter;

pub use presenter::Presenter;
