//! Engine binding: session lifecycle around the incremental Markdown engine.
//!
//! The engine itself is a black box behind the [`StreamParser`] trait
//! (create / write / end). [`EngineBinding`] owns at most one live session
//! at a time and implements lazy session start, finalize, and rebind.
//! [`CmarkParser`] is the default session implementation, backed by
//! `pulldown-cmark`.

mod binding;
mod cmark;
mod parser;

pub use binding::EngineBinding;
pub use cmark::CmarkParser;
pub use parser::{ParserFactory, StreamParser};
