//! Core error types for the Herald command engine.
//!
//! This crate provides:
//! - [`Error`] - Configuration faults raised while building command tables
//! - [`ErrorKind`] - Categorized fault kinds for pattern matching
//! - [`Result`] - Shared result alias for registration-time operations
//!
//! Per-message parse failures are deliberately *not* here: they are an
//! expected outcome of handling user text and live with the parser itself.
//! Everything in this crate is a startup defect that should fail fast.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorKind, Result};
