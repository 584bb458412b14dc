//! Configuration fault types for the Herald system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! These errors are raised while compiling command tables at startup and
//! never while handling a message.

use thiserror::Error;

/// Result alias for registration-time operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for command table construction.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of fault that occurred.
    pub kind: ErrorKind,
    /// Optional name of the collaborator whose tables were being registered.
    pub source_name: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            source_name: None,
        }
    }

    /// Attaches the name of the registering collaborator.
    #[must_use]
    pub fn from_source(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Creates a malformed trailing marker error.
    #[must_use]
    pub fn malformed_marker(rule: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedMarker {
            rule: rule.into(),
            marker: marker.into(),
        })
    }

    /// Creates a duplicate base name error.
    #[must_use]
    pub fn duplicate_base(base: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateBase(base.into()))
    }

    /// Creates an alias conflict error.
    #[must_use]
    pub fn alias_conflict(
        synonym: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::AliasConflict {
            synonym: synonym.into(),
            first: first.into(),
            second: second.into(),
        })
    }

    /// Creates a shortcut arity mismatch error.
    #[must_use]
    pub fn shortcut_arity(base: impl Into<String>, placeholders: usize, modifiers: usize) -> Self {
        Self::new(ErrorKind::ShortcutArity {
            base: base.into(),
            placeholders,
            modifiers,
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized configuration fault kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A rule's trailing marker block is not drawn from the legal alphabet
    /// or combines it illegally.
    #[error("malformed trailing marker `{marker}` in rule `{rule}`")]
    MalformedMarker {
        /// The authored rule string.
        rule: String,
        /// The offending marker block.
        marker: String,
    },

    /// A trailing marker block was followed by further blocks.
    #[error("trailing marker must be the final block in rule `{rule}`")]
    MarkerNotLast {
        /// The authored rule string.
        rule: String,
    },

    /// An option block reduced to an empty name.
    #[error("empty option name in rule `{rule}`")]
    EmptyOptionName {
        /// The authored rule string.
        rule: String,
    },

    /// The same option name appeared twice in one rule.
    #[error("duplicate option `{name}` in rule `{rule}`")]
    DuplicateOption {
        /// The authored rule string.
        rule: String,
        /// The repeated option name.
        name: String,
    },

    /// A command or shortcut base name was registered twice.
    #[error("base name `{0}` is already registered")]
    DuplicateBase(String),

    /// One synonym was claimed by two alias groups of the same command.
    #[error("alias `{synonym}` resolves to both `{first}` and `{second}`")]
    AliasConflict {
        /// The contested synonym.
        synonym: String,
        /// Canonical name of the first claiming group.
        first: String,
        /// Canonical name of the second claiming group.
        second: String,
    },

    /// A shortcut's placeholder count does not equal its modifier count.
    #[error(
        "shortcut `{base}` has {placeholders} placeholder(s) but {modifiers} modifier(s)"
    )]
    ShortcutArity {
        /// The shortcut base name.
        base: String,
        /// Number of `{}` placeholders in the template.
        placeholders: usize,
        /// Number of modifier characters.
        modifiers: usize,
    },

    /// A shortcut modifier character is outside the legal alphabet.
    #[error("shortcut `{base}` uses illegal modifier `{modifier}`")]
    IllegalModifier {
        /// The shortcut base name.
        base: String,
        /// The offending character.
        modifier: char,
    },

    /// A remainder-consuming modifier was not the final one.
    #[error("shortcut `{base}` modifier `{modifier}` consumes the remainder and must be last")]
    ModifierNotLast {
        /// The shortcut base name.
        base: String,
        /// The remainder-consuming modifier.
        modifier: char,
    },

    /// A shortcut template expands to a base that is not registered.
    #[error("shortcut `{base}` expands to unknown command `{target}`")]
    UnknownShortcutTarget {
        /// The shortcut base name.
        base: String,
        /// The expansion's base name.
        target: String,
    },

    /// A shortcut template expands to another shortcut.
    #[error("shortcut `{base}` expands to shortcut `{target}`; chaining is not allowed")]
    ShortcutChain {
        /// The shortcut base name.
        base: String,
        /// The target shortcut name.
        target: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
