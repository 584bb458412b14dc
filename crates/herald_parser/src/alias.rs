//! Option alias resolution.
//!
//! Each command may declare alias groups mapping synonym option names to a
//! canonical name. Resolution rewrites typed keys before matching; unknown
//! keys pass through untouched so the matcher can report them against the
//! whole command's usage.

use std::collections::HashMap;

use herald_foundation::{Error, Result};

/// One canonical option name and its synonyms.
#[derive(Clone, Debug)]
pub struct AliasGroup {
    /// The preferred name synonyms resolve to.
    pub canonical: String,
    /// Alternative names users may type.
    pub synonyms: Vec<String>,
}

impl AliasGroup {
    /// Creates an alias group.
    pub fn new(
        canonical: impl Into<String>,
        synonyms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            canonical: canonical.into(),
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }
}

/// A command's compiled synonym table.
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    /// Synonym → canonical name. Canonical names map to themselves, which
    /// makes resolution idempotent.
    resolutions: HashMap<String, String>,
}

impl AliasTable {
    /// Builds a table from alias groups.
    ///
    /// # Errors
    ///
    /// Returns an alias conflict fault when one synonym is claimed by two
    /// groups.
    pub fn from_groups(groups: &[AliasGroup]) -> Result<Self> {
        let mut resolutions = HashMap::new();
        for group in groups {
            let names = std::iter::once(&group.canonical).chain(group.synonyms.iter());
            for name in names {
                if let Some(existing) = resolutions.get(name.as_str()) {
                    if existing != &group.canonical {
                        return Err(Error::alias_conflict(name, existing, &group.canonical));
                    }
                    continue;
                }
                resolutions.insert(name.clone(), group.canonical.clone());
            }
        }
        Ok(Self { resolutions })
    }

    /// Resolves a typed option name to its canonical form, if registered.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.resolutions.get(name).map(String::as_str)
    }

    /// Rewrites every registered synonym key in `options` to canonical form,
    /// updating `last_option` identically when it is rewritten.
    pub fn apply(
        &self,
        options: &mut HashMap<String, Option<String>>,
        last_option: &mut Option<String>,
    ) {
        let renames: Vec<(String, String)> = options
            .keys()
            .filter_map(|key| {
                self.resolve(key)
                    .filter(|canonical| *canonical != key)
                    .map(|canonical| (key.clone(), canonical.to_string()))
            })
            .collect();

        for (typed, canonical) in renames {
            if let Some(value) = options.remove(&typed) {
                options.insert(canonical.clone(), value);
            }
            if last_option.as_deref() == Some(typed.as_str()) {
                *last_option = Some(canonical);
            }
        }
    }
}
