//! The structured result of a successful parse.
//!
//! An [`Invocation`] is created fresh per message and owned by the
//! requesting dispatcher; the engine keeps no reference to it.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trailing arguments, shaped by the matched rule's trailing mode.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Trailing {
    /// Discrete trailing tokens (list modes, possibly empty).
    List(Vec<String>),
    /// Leftover text collapsed into one string (grouped modes).
    Joined(String),
}

impl Trailing {
    /// Whether any trailing content was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Joined(text) => text.is_empty(),
        }
    }
}

/// A parsed command ready for dispatch.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Invocation {
    /// The canonical base command name (post shortcut expansion).
    pub base: String,
    /// Index of the matched rule in the command's declaration order.
    pub rule_index: usize,
    /// Canonical option names → attached argument, `None` for bare flags.
    pub options: HashMap<String, Option<String>>,
    /// Trailing arguments as shaped by the matched rule.
    pub trailing: Trailing,
}

impl Invocation {
    /// Whether the named option was present, with or without an argument.
    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// The named option's attached argument, if the option was present with
    /// one.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).and_then(|v| v.as_deref())
    }
}
