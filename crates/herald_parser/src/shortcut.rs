//! Shortcut macro expansion.
//!
//! A shortcut rewrites an abbreviated invocation into a canonical
//! `base parameters` string before parsing. Each modifier character captures
//! one slot of the raw text; slots are substituted positionally into the
//! template's `{}` placeholders. Expansion happens exactly once: a shortcut
//! may not expand to another shortcut, which the registry enforces at build
//! time.

use crate::parser::ParseError;
use crate::tokenizer::scan_blocks;

/// A compiled shortcut.
#[derive(Clone, Debug)]
pub struct ShortcutDefinition {
    /// The shortcut's own base name.
    pub name: String,
    /// Expansion template with one `{}` per modifier character.
    pub template: String,
    /// Capture modifiers: `:` one block, `^`/`&` the raw remainder as one
    /// quoted block, `+`/`#` the remaining blocks individually re-quoted.
    pub modifiers: String,
}

impl ShortcutDefinition {
    /// The base name the template expands to.
    #[must_use]
    pub fn target(&self) -> &str {
        self.template
            .split_once(' ')
            .map_or(self.template.as_str(), |(base, _)| base)
    }
}

/// Counts `{}` placeholders in a template.
#[must_use]
pub(crate) fn placeholder_count(template: &str) -> usize {
    template.matches("{}").count()
}

/// Expands shortcut invocations.
pub struct ShortcutExpander;

impl ShortcutExpander {
    /// Captures slots from `parameters` and fills the template, returning
    /// the expanded `(base, parameters)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnclosedQuote`] for broken quoting and
    /// [`ParseError::InvalidShortcut`] when the text runs out before every
    /// `:` modifier has a block to capture.
    pub fn expand(
        definition: &ShortcutDefinition,
        parameters: &str,
    ) -> Result<(String, String), ParseError> {
        let parameters = parameters.trim();
        let blocks = scan_blocks(parameters)?;

        let mut slots = Vec::with_capacity(definition.modifiers.chars().count());
        let mut index = 0;
        for modifier in definition.modifiers.chars() {
            match modifier {
                ':' => {
                    let block = blocks.get(index).ok_or_else(|| ParseError::InvalidShortcut {
                        base: definition.name.clone(),
                        template: definition.template.clone(),
                    })?;
                    slots.push(requote(&block.value));
                    index += 1;
                }
                '^' | '&' => {
                    // The raw remainder, spacing as typed, as one quoted
                    // block so it survives re-tokenization intact.
                    let remainder = blocks
                        .get(index)
                        .map_or("", |block| &parameters[block.start..]);
                    slots.push(requote(remainder));
                    index = blocks.len();
                }
                _ => {
                    // Itemized remainder: each block re-quoted on its own.
                    let items: Vec<String> =
                        blocks[index..].iter().map(|b| requote(&b.value)).collect();
                    slots.push(items.join(" "));
                    index = blocks.len();
                }
            }
        }

        let filled = fill_template(&definition.template, &slots);
        log::debug!("shortcut `{}` expanded to `{filled}`", definition.name);
        match filled.split_once(' ') {
            Some((base, rest)) => Ok((base.to_string(), rest.to_string())),
            None => Ok((filled, String::new())),
        }
    }
}

/// Quotes a captured block for reinsertion, escaping embedded quotes.
fn requote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Substitutes slots into `{}` placeholders in order.
fn fill_template(template: &str, slots: &[String]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;
    let mut slots = slots.iter();
    while let Some(at) = rest.find("{}") {
        filled.push_str(&rest[..at]);
        if let Some(slot) = slots.next() {
            filled.push_str(slot);
        }
        rest = &rest[at + 2..];
    }
    filled.push_str(rest);
    filled
}
