//! Shortcut expansion tests.
//!
//! Tests for macro rewriting of abbreviated invocations.

use herald_parser::{ParseError, ShortcutDefinition, ShortcutExpander};

fn definition(template: &str, modifiers: &str) -> ShortcutDefinition {
    ShortcutDefinition {
        name: "shortcut".to_string(),
        template: template.to_string(),
        modifiers: modifiers.to_string(),
    }
}

#[test]
fn block_then_remainder_expansion() {
    let def = definition("tag -create {} {}", ":^");
    let (base, parameters) =
        ShortcutExpander::expand(&def, "\"my tag\" tag body text").unwrap();

    assert_eq!(base, "tag");
    assert_eq!(parameters, "-create \"my tag\" \"tag body text\"");
}

#[test]
fn single_block_capture_respects_quotes() {
    let def = definition("tag -remove {}", ":");
    let (base, parameters) = ShortcutExpander::expand(&def, "\"old tag\" ignored").unwrap();

    assert_eq!(base, "tag");
    assert_eq!(parameters, "-remove \"old tag\"");
}

#[test]
fn itemized_capture_requotes_each_block() {
    let def = definition("cmd -complex {} -other {} {} {}", ":::#");
    let (_, parameters) =
        ShortcutExpander::expand(&def, "a b \"c d\" e f").unwrap();

    assert_eq!(parameters, "-complex \"a\" -other \"b\" \"c d\" \"e\" \"f\"");
}

#[test]
fn no_modifier_shortcut_ignores_parameters() {
    let def = definition("mod -clear", "");
    let (base, parameters) = ShortcutExpander::expand(&def, "whatever trailing").unwrap();

    assert_eq!(base, "mod");
    assert_eq!(parameters, "-clear");
}

#[test]
fn missing_block_is_recoverable() {
    let def = definition("tag -create {} {}", "::");
    let err = ShortcutExpander::expand(&def, "\"only one\"").unwrap_err();

    assert!(matches!(err, ParseError::InvalidShortcut { .. }));
}

#[test]
fn unclosed_quote_is_recoverable() {
    let def = definition("tag -create {}", ":");
    let err = ShortcutExpander::expand(&def, "\"never closed").unwrap_err();

    assert!(matches!(err, ParseError::UnclosedQuote { .. }));
}

#[test]
fn remainder_capture_preserves_spacing() {
    let def = definition("base -help {}", "^");
    let (_, parameters) = ShortcutExpander::expand(&def, "spaced   out").unwrap();

    assert_eq!(parameters, "-help \"spaced   out\"");
}
