//! Herald - chat command engine
//!
//! This crate re-exports all layers of the Herald system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: herald_runtime    — REPL, CLI, responders
//! Layer 1: herald_parser     — Blueprint grammar, tokenizer, matcher,
//!                              shortcuts, registry
//! Layer 0: herald_foundation — Configuration fault types
//! ```

pub use herald_foundation as foundation;
pub use herald_parser as parser;
pub use herald_runtime as runtime;
