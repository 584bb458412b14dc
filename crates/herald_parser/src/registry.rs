//! Command registry.
//!
//! The registry is the single compiled table of commands and shortcuts,
//! assembled once at startup from declarative tables supplied by each
//! collaborator and immutable afterwards. Every configuration check happens
//! in [`RegistryBuilder::build`]; nothing here can fail per message.

use std::collections::HashMap;

use herald_foundation::{Error, ErrorKind, Result};

use crate::alias::{AliasGroup, AliasTable};
use crate::blueprint::{BlueprintCompiler, BlueprintRule, MARKER_ALPHABET};
use crate::shortcut::{ShortcutDefinition, placeholder_count};

/// Per-command manual text, shown by help and on parse failure.
#[derive(Clone, Debug, Default)]
pub struct ManualEntry {
    /// One-line command description.
    pub description: String,
    /// Usage lines: (invocation syntax, explanation).
    pub usage: Vec<(String, String)>,
    /// Free-form extra text.
    pub other: Option<String>,
}

impl ManualEntry {
    /// Creates a manual entry with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            usage: Vec::new(),
            other: None,
        }
    }

    /// Adds a usage line.
    #[must_use]
    pub fn usage(mut self, syntax: impl Into<String>, explanation: impl Into<String>) -> Self {
        self.usage.push((syntax.into(), explanation.into()));
        self
    }

    /// Sets the free-form extra text.
    #[must_use]
    pub fn other(mut self, other: impl Into<String>) -> Self {
        self.other = Some(other.into());
        self
    }
}

/// A declarative command table entry, before compilation.
#[derive(Clone, Debug)]
pub struct CommandDecl {
    name: String,
    rules: Vec<String>,
    aliases: Vec<AliasGroup>,
    manual: Option<ManualEntry>,
}

impl CommandDecl {
    /// Starts a declaration for the given base name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            aliases: Vec::new(),
            manual: None,
        }
    }

    /// Appends a rule string; declaration order is match precedence.
    #[must_use]
    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Adds an alias group for one option.
    #[must_use]
    pub fn alias(
        mut self,
        canonical: impl Into<String>,
        synonyms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.aliases.push(AliasGroup::new(canonical, synonyms));
        self
    }

    /// Attaches a manual entry.
    #[must_use]
    pub fn manual(mut self, manual: ManualEntry) -> Self {
        self.manual = Some(manual);
        self
    }
}

/// A compiled, registered command.
#[derive(Clone, Debug)]
pub struct CommandSpec {
    name: String,
    rules: Vec<BlueprintRule>,
    rule_sources: Vec<String>,
    aliases: AliasTable,
    manual: Option<ManualEntry>,
}

impl CommandSpec {
    /// The base command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled rules, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[BlueprintRule] {
        &self.rules
    }

    /// The authored rule strings, in declaration order.
    #[must_use]
    pub fn rule_sources(&self) -> &[String] {
        &self.rule_sources
    }

    /// The command's synonym table.
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The command's manual entry, if any.
    #[must_use]
    pub fn manual(&self) -> Option<&ManualEntry> {
        self.manual.as_ref()
    }

    /// Renders the command's usage: manual lines when present, otherwise the
    /// authored rule strings.
    #[must_use]
    pub fn usage_text(&self) -> String {
        let mut text = String::new();
        if let Some(manual) = &self.manual {
            for (syntax, _) in &manual.usage {
                text.push_str("  ");
                text.push_str(&self.name);
                text.push(' ');
                text.push_str(syntax);
                text.push('\n');
            }
        }
        if text.is_empty() {
            for source in &self.rule_sources {
                text.push_str("  ");
                text.push_str(&self.name);
                if !source.is_empty() {
                    text.push(' ');
                    text.push_str(source);
                }
                text.push('\n');
            }
        }
        text
    }
}

/// One registered base name: a command or a shortcut.
#[derive(Clone, Debug)]
pub enum CommandEntry {
    /// A command with compiled rules.
    Command(CommandSpec),
    /// A shortcut expanding to a command invocation.
    Shortcut(ShortcutDefinition),
}

/// The immutable compiled command tables.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    entries: HashMap<String, CommandEntry>,
}

impl CommandRegistry {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up a base name.
    #[must_use]
    pub fn entry(&self, base: &str) -> Option<&CommandEntry> {
        self.entries.get(base)
    }

    /// Looks up a base name as a command.
    #[must_use]
    pub fn command(&self, base: &str) -> Option<&CommandSpec> {
        match self.entries.get(base) {
            Some(CommandEntry::Command(spec)) => Some(spec),
            _ => None,
        }
    }

    /// Looks up a base name as a shortcut.
    #[must_use]
    pub fn shortcut(&self, base: &str) -> Option<&ShortcutDefinition> {
        match self.entries.get(base) {
            Some(CommandEntry::Shortcut(definition)) => Some(definition),
            _ => None,
        }
    }

    /// Renders usage for a base name, following a shortcut to its target.
    #[must_use]
    pub fn usage(&self, base: &str) -> Option<String> {
        match self.entries.get(base)? {
            CommandEntry::Command(spec) => Some(spec.usage_text()),
            CommandEntry::Shortcut(definition) => {
                self.command(definition.target()).map(CommandSpec::usage_text)
            }
        }
    }

    /// All registered base names, commands and shortcuts alike.
    pub fn base_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Accumulates declarations and compiles them into a [`CommandRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    commands: Vec<CommandDecl>,
    shortcuts: Vec<ShortcutDefinition>,
}

impl RegistryBuilder {
    /// Adds a command declaration.
    #[must_use]
    pub fn command(mut self, declaration: CommandDecl) -> Self {
        self.commands.push(declaration);
        self
    }

    /// Adds a shortcut declaration.
    #[must_use]
    pub fn shortcut(
        mut self,
        name: impl Into<String>,
        template: impl Into<String>,
        modifiers: impl Into<String>,
    ) -> Self {
        self.shortcuts.push(ShortcutDefinition {
            name: name.into(),
            template: template.into(),
            modifiers: modifiers.into(),
        });
        self
    }

    /// Compiles and validates everything, sealing the registry.
    ///
    /// # Errors
    ///
    /// Returns the first configuration fault: malformed rules, duplicate
    /// base names, alias conflicts, shortcut modifier/placeholder
    /// mismatches, illegal or misplaced modifiers, or shortcuts expanding
    /// to unknown bases or other shortcuts.
    pub fn build(self) -> Result<CommandRegistry> {
        let mut entries = HashMap::new();

        for declaration in self.commands {
            let rules = BlueprintCompiler::compile_all(&declaration.rules)?;
            let aliases = AliasTable::from_groups(&declaration.aliases)?;
            let spec = CommandSpec {
                name: declaration.name.clone(),
                rules,
                rule_sources: declaration.rules,
                aliases,
                manual: declaration.manual,
            };
            log::debug!(
                "registered command `{}` with {} rule(s)",
                spec.name,
                spec.rules.len()
            );
            if entries
                .insert(declaration.name.clone(), CommandEntry::Command(spec))
                .is_some()
            {
                return Err(Error::duplicate_base(declaration.name));
            }
        }

        for definition in self.shortcuts {
            Self::check_shortcut(&definition)?;
            log::debug!(
                "registered shortcut `{}` for `{}`",
                definition.name,
                definition.target()
            );
            if entries.contains_key(&definition.name) {
                return Err(Error::duplicate_base(definition.name));
            }
            entries.insert(
                definition.name.clone(),
                CommandEntry::Shortcut(definition),
            );
        }

        // Shortcut targets resolve after every base is known, so declaration
        // order between collaborators cannot matter.
        for entry in entries.values() {
            let CommandEntry::Shortcut(definition) = entry else {
                continue;
            };
            let target = definition.target();
            match entries.get(target) {
                Some(CommandEntry::Command(_)) => {}
                Some(CommandEntry::Shortcut(_)) => {
                    return Err(Error::new(ErrorKind::ShortcutChain {
                        base: definition.name.clone(),
                        target: target.to_string(),
                    }));
                }
                None => {
                    return Err(Error::new(ErrorKind::UnknownShortcutTarget {
                        base: definition.name.clone(),
                        target: target.to_string(),
                    }));
                }
            }
        }

        Ok(CommandRegistry { entries })
    }

    /// Validates one shortcut's modifiers against its template.
    fn check_shortcut(definition: &ShortcutDefinition) -> Result<()> {
        let modifiers: Vec<char> = definition.modifiers.chars().collect();
        for (at, &modifier) in modifiers.iter().enumerate() {
            if !MARKER_ALPHABET.contains(&modifier) {
                return Err(Error::new(ErrorKind::IllegalModifier {
                    base: definition.name.clone(),
                    modifier,
                }));
            }
            if modifier != ':' && at + 1 != modifiers.len() {
                return Err(Error::new(ErrorKind::ModifierNotLast {
                    base: definition.name.clone(),
                    modifier,
                }));
            }
        }
        let placeholders = placeholder_count(&definition.template);
        if placeholders != modifiers.len() {
            return Err(Error::shortcut_arity(
                &definition.name,
                placeholders,
                modifiers.len(),
            ));
        }
        Ok(())
    }
}
