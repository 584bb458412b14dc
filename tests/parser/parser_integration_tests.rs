//! Full pipeline integration tests.
//!
//! Tests for the complete flow: registry build, shortcut expansion,
//! tokenization, alias resolution, matching, and invocation assembly.

use herald_foundation::ErrorKind;
use herald_parser::registry::{CommandDecl, CommandRegistry, ManualEntry};
use herald_parser::stdlib::standard_registry;
use herald_parser::{CommandParser, ParseError, Trailing};

fn tag_registry() -> CommandRegistry {
    CommandRegistry::builder()
        .command(
            CommandDecl::new("tag")
                .rule("create: :+")
                .rule("remove:")
                .rule("?page: list")
                .rule("&")
                .alias("create", ["c", "new"])
                .alias("remove", ["r", "delete"])
                .alias("list", ["l"])
                .manual(
                    ManualEntry::new("Tag storage.")
                        .usage("-create <name> <text...>", "Creates a tag.")
                        .usage("-remove <name>", "Removes a tag.")
                        .usage("(-page <number>) -list", "Lists tags.")
                        .usage("(name)", "Shows the named tag."),
                ),
        )
        .shortcut("tc", "tag -create {} {}", ":^")
        .shortcut("tl", "tag -list", "")
        .build()
        .unwrap()
}

#[test]
fn full_flow_create_tag() {
    let registry = tag_registry();
    let invocation =
        CommandParser::parse(&registry, "tag", "-create \"my tag\" tag text").unwrap();

    assert_eq!(invocation.base, "tag");
    assert_eq!(invocation.rule_index, 0);
    assert_eq!(invocation.option("create"), Some("my tag"));
    assert_eq!(
        invocation.trailing,
        Trailing::List(vec!["tag".to_string(), "text".to_string()])
    );
}

#[test]
fn full_flow_alias_and_fallback() {
    let registry = tag_registry();

    let removed = CommandParser::parse(&registry, "tag", "-delete \"old tag\"").unwrap();
    assert_eq!(removed.rule_index, 1);
    assert_eq!(removed.option("remove"), Some("old tag"));

    let shown = CommandParser::parse(&registry, "tag", "some tag name").unwrap();
    assert_eq!(shown.rule_index, 3);
    assert_eq!(
        shown.trailing,
        Trailing::Joined("some tag name".to_string())
    );
}

#[test]
fn full_flow_shortcut() {
    let registry = tag_registry();
    let invocation =
        CommandParser::parse(&registry, "tc", "\"my tag\" tag body text").unwrap();

    assert_eq!(invocation.base, "tag");
    assert_eq!(invocation.rule_index, 0);
    assert_eq!(invocation.option("create"), Some("my tag"));
    assert_eq!(
        invocation.trailing,
        Trailing::List(vec!["tag body text".to_string()])
    );
}

#[test]
fn shortcut_without_slots() {
    let registry = tag_registry();
    let invocation = CommandParser::parse(&registry, "tl", "").unwrap();

    assert_eq!(invocation.base, "tag");
    assert_eq!(invocation.rule_index, 2);
    assert!(invocation.has_option("list"));
}

#[test]
fn optional_option_with_argument() {
    let registry = tag_registry();
    let invocation = CommandParser::parse(&registry, "tag", "-page 2 -list").unwrap();

    assert_eq!(invocation.rule_index, 2);
    assert_eq!(invocation.option("page"), Some("2"));
}

#[test]
fn no_match_reports_usage() {
    let registry = tag_registry();
    let err = CommandParser::parse(&registry, "tag", "-create onlyname").unwrap_err();

    let ParseError::NoMatch { base, usage } = err else {
        panic!("expected NoMatch");
    };
    assert_eq!(base, "tag");
    assert!(usage.contains("tag -create <name> <text...>"));
}

#[test]
fn unclosed_quote_reported_before_matching() {
    let registry = tag_registry();
    let err = CommandParser::parse(&registry, "tag", "-create \"broken").unwrap_err();
    assert!(matches!(err, ParseError::UnclosedQuote { .. }));
}

#[test]
fn matching_is_deterministic_across_repeats() {
    let registry = tag_registry();
    for _ in 0..3 {
        let invocation =
            CommandParser::parse(&registry, "tag", "-create name body").unwrap();
        assert_eq!(invocation.rule_index, 0);
    }
}

#[test]
fn standard_registry_spot_checks() {
    let registry = standard_registry().unwrap();

    let ping = CommandParser::parse(&registry, "ping", "hello world").unwrap();
    assert_eq!(
        ping.trailing,
        Trailing::Joined("hello world".to_string())
    );

    let help = CommandParser::parse(&registry, "help", "mod").unwrap();
    assert_eq!(help.base, "base");
    assert_eq!(help.option("help"), Some("mod"));

    let clear = CommandParser::parse(&registry, "clear", "").unwrap();
    assert_eq!(clear.base, "mod");
    assert_eq!(clear.rule_index, 3);
}

#[test]
fn config_faults_surface_at_build() {
    // Chained shortcut.
    let err = CommandRegistry::builder()
        .command(CommandDecl::new("real").rule("&"))
        .shortcut("one", "real", "")
        .shortcut("two", "one", "")
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ShortcutChain { .. }));

    // Placeholder/modifier arity.
    let err = CommandRegistry::builder()
        .command(CommandDecl::new("real").rule("&"))
        .shortcut("bad", "real {}", "::")
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ShortcutArity { .. }));

    // Malformed marker in a rule.
    let err = CommandRegistry::builder()
        .command(CommandDecl::new("broken").rule("opt :&"))
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedMarker { .. }));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_never_panics_and_is_deterministic(input in "[\\-a-z\" ]{0,40}") {
            let registry = standard_registry().unwrap();
            let first = CommandParser::parse(&registry, "debug", &input);
            let second = CommandParser::parse(&registry, "debug", &input);
            prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
        }
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(tag_registry());
    let mut handles = Vec::new();

    for i in 0..4 {
        let registry = std::sync::Arc::clone(&registry);
        handles.push(std::thread::spawn(move || {
            let parameters = format!("-create tag{i} body{i}");
            let invocation = CommandParser::parse(&registry, "tag", &parameters).unwrap();
            assert_eq!(invocation.rule_index, 0);
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
