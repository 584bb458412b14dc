//! REPL, CLI, and responders for Herald.
//!
//! This crate stands in for the chat gateway during development: it reads
//! lines shaped `base [parameters...]`, runs them through the parse
//! pipeline, and prints replies or recoverable errors. The [`LineEditor`]
//! trait keeps the REPL swappable off rustyline.

pub mod editor;
pub mod repl;
pub mod respond;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, run_batch};
pub use respond::{ResponseError, respond};
