//! Blueprint matching.
//!
//! Walks a command's rules in declaration order and returns the first rule
//! whose option shapes and trailing mode fit the tokenized parameters.
//! Declaration order is the only precedence; there is no "best match".

use crate::blueprint::{BlueprintRule, TrailingMode};
use crate::invocation::Trailing;
use crate::tokenizer::TokenizedParameters;

/// A successful rule match.
#[derive(Clone, Debug)]
pub struct RuleMatch {
    /// Index of the satisfied rule in declaration order.
    pub rule_index: usize,
    /// Whether the last option's captured argument was reassigned to the
    /// trailing content.
    pub no_last_argument: bool,
    /// The trailing payload selected for the invocation.
    pub trailing: Trailing,
}

/// Matches tokenized parameters against a command's rule list.
pub struct BlueprintMatcher;

impl BlueprintMatcher {
    /// Returns the first rule satisfied by the parameters, or `None`.
    #[must_use]
    pub fn first_match(
        rules: &[BlueprintRule],
        parameters: &TokenizedParameters,
    ) -> Option<RuleMatch> {
        rules
            .iter()
            .enumerate()
            .find_map(|(rule_index, rule)| Self::try_match(rule_index, rule, parameters))
    }

    /// Tries to satisfy a single rule.
    fn try_match(
        rule_index: usize,
        rule: &BlueprintRule,
        parameters: &TokenizedParameters,
    ) -> Option<RuleMatch> {
        let options = &parameters.options;
        let last_option = parameters.last_option.as_deref();

        // Walk the declared options. An argument-less spec holding a captured
        // value is tolerated only for the last option seen; the text is then
        // reassigned to the trailing content via `no_last_argument`.
        let mut no_last_argument = false;
        let mut matched = 0usize;
        for spec in &rule.options {
            match options.get(&spec.name) {
                Some(value) => {
                    let has_argument = value.is_some();
                    if spec.takes_argument != has_argument {
                        let reassignable = !spec.takes_argument
                            && has_argument
                            && last_option == Some(spec.name.as_str());
                        if !reassignable {
                            return None;
                        }
                        no_last_argument = true;
                    }
                    matched += 1;
                }
                None => {
                    if spec.required {
                        return None;
                    }
                }
            }
        }

        // Every parsed option must have been claimed by a spec.
        if matched < options.len() {
            return None;
        }

        // With no options declared there is nothing to anchor leftover text
        // to, so the trailing views apply.
        if rule.options.is_empty() {
            no_last_argument = true;
        }

        let trailing = Self::select_trailing(rule.trailing, no_last_argument, parameters)?;
        Some(RuleMatch {
            rule_index,
            no_last_argument,
            trailing,
        })
    }

    /// Chooses the trailing view for the rule's mode and validates its shape.
    ///
    /// Grouped modes read the combined views, list modes the list views;
    /// within each pair the trailing variant applies exactly when
    /// `no_last_argument` holds.
    fn select_trailing(
        mode: TrailingMode,
        no_last_argument: bool,
        parameters: &TokenizedParameters,
    ) -> Option<Trailing> {
        let views = &parameters.views;
        match mode {
            TrailingMode::GroupedRequired | TrailingMode::GroupedOptional => {
                let text = if no_last_argument {
                    &views.trailing_combined
                } else {
                    &views.leftover_combined
                };
                if mode == TrailingMode::GroupedRequired && text.is_empty() {
                    return None;
                }
                Some(Trailing::Joined(text.clone()))
            }
            TrailingMode::None | TrailingMode::ExactList(_) | TrailingMode::AtLeastList(_) => {
                let list = if no_last_argument {
                    &views.trailing_list
                } else {
                    &views.leftover_list
                };
                let fits = match mode {
                    TrailingMode::None => list.is_empty(),
                    TrailingMode::ExactList(n) => list.len() == n,
                    TrailingMode::AtLeastList(n) => list.len() >= n,
                    TrailingMode::GroupedRequired | TrailingMode::GroupedOptional => {
                        unreachable!("grouped modes handled above")
                    }
                };
                if !fits {
                    return None;
                }
                Some(Trailing::List(list.clone()))
            }
        }
    }
}
