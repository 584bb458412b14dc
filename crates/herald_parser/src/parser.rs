//! Main parse pipeline.
//!
//! Orchestrates the full flow from a `base + parameters` pair to an
//! [`Invocation`]: shortcut expansion (at most once), tokenization, alias
//! resolution, and blueprint matching.

use thiserror::Error;

use crate::invocation::Invocation;
use crate::matcher::BlueprintMatcher;
use crate::registry::{CommandEntry, CommandRegistry, CommandSpec};
use crate::shortcut::ShortcutExpander;
use crate::tokenizer::ParameterTokenizer;

/// A recoverable, user-facing parse failure.
///
/// These are ordinary outcomes of handling chat text: the caller reports
/// them back as text and nothing else happens. Configuration faults never
/// surface here; they are caught when the registry is built.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A quoted span never terminated.
    #[error("detected an unclosed quote: `{fragment}`")]
    UnclosedQuote {
        /// The text from the opening quote onward.
        fragment: String,
    },

    /// The base name is not registered.
    #[error("unknown command `{base}`")]
    UnknownBase {
        /// The typed base name.
        base: String,
    },

    /// No rule of the command fit the parameters.
    #[error("invalid syntax; usage:\n{usage}")]
    NoMatch {
        /// The command's base name.
        base: String,
        /// The command's rendered usage text.
        usage: String,
    },

    /// The text ran out before a shortcut's slots were filled.
    #[error("invalid shortcut syntax for `{base}`; expands as `{template}`")]
    InvalidShortcut {
        /// The shortcut's base name.
        base: String,
        /// The shortcut's expansion template.
        template: String,
    },
}

/// The main command parser.
pub struct CommandParser;

impl CommandParser {
    /// Parses a `base + parameters` pair against the registry.
    ///
    /// If `base` names a shortcut, it is expanded exactly once and the
    /// result parsed as the target command.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the user-facing failure.
    pub fn parse(
        registry: &CommandRegistry,
        base: &str,
        parameters: &str,
    ) -> Result<Invocation, ParseError> {
        match registry.entry(base) {
            None => Err(ParseError::UnknownBase {
                base: base.to_string(),
            }),
            Some(CommandEntry::Shortcut(definition)) => {
                let (target, expanded) = ShortcutExpander::expand(definition, parameters)?;
                // Build-time validation pins the target to a command.
                let spec = registry
                    .command(&target)
                    .ok_or(ParseError::UnknownBase { base: target })?;
                Self::parse_command(spec, &expanded)
            }
            Some(CommandEntry::Command(spec)) => Self::parse_command(spec, parameters),
        }
    }

    /// Runs tokenization, alias resolution, and matching for one command.
    fn parse_command(spec: &CommandSpec, parameters: &str) -> Result<Invocation, ParseError> {
        let mut tokenized = ParameterTokenizer::split(parameters)?;
        spec.aliases()
            .apply(&mut tokenized.options, &mut tokenized.last_option);

        let Some(matched) = BlueprintMatcher::first_match(spec.rules(), &tokenized) else {
            log::debug!("no rule of `{}` fit `{parameters}`", spec.name());
            return Err(ParseError::NoMatch {
                base: spec.name().to_string(),
                usage: spec.usage_text(),
            });
        };
        log::debug!(
            "`{}` matched rule {} (no_last_argument: {})",
            spec.name(),
            matched.rule_index,
            matched.no_last_argument
        );

        let mut options = tokenized.options;
        if matched.no_last_argument {
            // The captured text went to the trailing content instead.
            if let Some(last) = &tokenized.last_option {
                if let Some(value) = options.get_mut(last) {
                    *value = None;
                }
            }
        }

        Ok(Invocation {
            base: spec.name().to_string(),
            rule_index: matched.rule_index,
            options,
            trailing: matched.trailing,
        })
    }
}
