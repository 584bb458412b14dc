//! Blueprint rule grammar.
//!
//! Compiles authored rule strings into structured rules. A rule string is a
//! sequence of whitespace-separated blocks: `?` prefixes an optional option,
//! a `:` suffix means the option requires an attached argument, and a final
//! block drawn solely from `:^&+#` is the trailing-argument marker.
//!
//! Examples: `"?custom ?attached:"`, `"trailing ::+"`, `"grouped ^"`, `"&"`.

use herald_foundation::{Error, ErrorKind, Result};

/// Characters that may form a trailing marker block.
pub const MARKER_ALPHABET: [char; 5] = [':', '^', '&', '+', '#'];

/// One option declared by a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSpec {
    /// Whether the option must be present for the rule to match.
    pub required: bool,
    /// The canonical option name.
    pub name: String,
    /// Whether the option consumes the following block as its argument.
    pub takes_argument: bool,
}

/// What a rule permits after all declared options are consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingMode {
    /// No leftover text permitted.
    None,
    /// Exactly n discrete trailing tokens.
    ExactList(usize),
    /// At least n discrete trailing tokens.
    AtLeastList(usize),
    /// Leftover text joined into one non-empty string.
    GroupedRequired,
    /// Leftover text joined into one string, possibly empty.
    GroupedOptional,
}

/// One acceptable shape of a command invocation.
#[derive(Clone, Debug)]
pub struct BlueprintRule {
    /// Declared options, in authoring order.
    pub options: Vec<OptionSpec>,
    /// What the rule permits as trailing arguments.
    pub trailing: TrailingMode,
}

/// Compiles rule strings into [`BlueprintRule`]s.
pub struct BlueprintCompiler;

impl BlueprintCompiler {
    /// Compiles a single authored rule string.
    ///
    /// # Errors
    ///
    /// Returns a configuration fault for malformed or non-final marker
    /// blocks, empty option names, or duplicate option names.
    pub fn compile(rule: &str) -> Result<BlueprintRule> {
        let blocks: Vec<&str> = rule.split_whitespace().collect();
        let mut options = Vec::new();
        let mut trailing = TrailingMode::None;

        for (index, block) in blocks.iter().enumerate() {
            if block.chars().all(|c| MARKER_ALPHABET.contains(&c)) {
                if index + 1 != blocks.len() {
                    return Err(Error::new(ErrorKind::MarkerNotLast {
                        rule: rule.to_string(),
                    }));
                }
                trailing = Self::compile_marker(rule, block)?;
                break;
            }

            let (name, required) = match block.strip_prefix('?') {
                Some(rest) => (rest, false),
                None => (*block, true),
            };
            let (name, takes_argument) = match name.strip_suffix(':') {
                Some(rest) => (rest, true),
                None => (name, false),
            };
            if name.is_empty() {
                return Err(Error::new(ErrorKind::EmptyOptionName {
                    rule: rule.to_string(),
                }));
            }
            if options.iter().any(|o: &OptionSpec| o.name == name) {
                return Err(Error::new(ErrorKind::DuplicateOption {
                    rule: rule.to_string(),
                    name: name.to_string(),
                }));
            }
            options.push(OptionSpec {
                required,
                name: name.to_string(),
                takes_argument,
            });
        }

        Ok(BlueprintRule { options, trailing })
    }

    /// Compiles every rule string of a command, preserving declaration order.
    ///
    /// # Errors
    ///
    /// Returns the first compilation fault encountered.
    pub fn compile_all(rules: &[impl AsRef<str>]) -> Result<Vec<BlueprintRule>> {
        rules.iter().map(|r| Self::compile(r.as_ref())).collect()
    }

    /// Derives a [`TrailingMode`] from a marker block.
    ///
    /// Legal shapes: `^`, `&`, `:`×n, `:`×n`+`, `:`×n`#` with n ≥ 1.
    fn compile_marker(rule: &str, marker: &str) -> Result<TrailingMode> {
        match marker {
            "^" => return Ok(TrailingMode::GroupedRequired),
            "&" => return Ok(TrailingMode::GroupedOptional),
            _ => {}
        }

        let count = marker.chars().take_while(|&c| c == ':').count();
        let rest = &marker[count..];
        let mode = match (count, rest) {
            (n, "") if n >= 1 => TrailingMode::ExactList(n),
            (n, "+") if n >= 1 => TrailingMode::AtLeastList(n),
            (n, "#") if n >= 1 => TrailingMode::AtLeastList(n - 1),
            _ => {
                return Err(Error::malformed_marker(rule, marker));
            }
        };
        Ok(mode)
    }
}
