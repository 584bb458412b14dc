//! Alias resolution tests.
//!
//! Tests for per-command synonym tables.

use std::collections::HashMap;

use herald_foundation::ErrorKind;
use herald_parser::{AliasGroup, AliasTable};

fn options(pairs: &[(&str, Option<&str>)]) -> HashMap<String, Option<String>> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.map(String::from)))
        .collect()
}

#[test]
fn synonyms_resolve_to_canonical() {
    let table = AliasTable::from_groups(&[AliasGroup::new("version", ["ver", "v"])]).unwrap();

    assert_eq!(table.resolve("ver"), Some("version"));
    assert_eq!(table.resolve("v"), Some("version"));
    assert_eq!(table.resolve("version"), Some("version"));
}

#[test]
fn apply_rewrites_options_in_place() {
    let table = AliasTable::from_groups(&[
        AliasGroup::new("help", ["h"]),
        AliasGroup::new("source", ["src", "git"]),
    ])
    .unwrap();

    let mut opts = options(&[("h", Some("mod")), ("git", None)]);
    let mut last = Some("git".to_string());
    table.apply(&mut opts, &mut last);

    assert_eq!(opts, options(&[("help", Some("mod")), ("source", None)]));
    assert_eq!(last.as_deref(), Some("source"));
}

#[test]
fn resolution_is_idempotent() {
    let table = AliasTable::from_groups(&[AliasGroup::new("latency", ["ping"])]).unwrap();

    let mut opts = options(&[("ping", None)]);
    let mut last = Some("ping".to_string());
    table.apply(&mut opts, &mut last);
    let once = opts.clone();
    let last_once = last.clone();

    table.apply(&mut opts, &mut last);
    assert_eq!(opts, once);
    assert_eq!(last, last_once);
}

#[test]
fn unknown_keys_pass_through() {
    let table = AliasTable::from_groups(&[AliasGroup::new("known", ["k"])]).unwrap();

    let mut opts = options(&[("mystery", Some("value"))]);
    let mut last = Some("mystery".to_string());
    table.apply(&mut opts, &mut last);

    assert_eq!(opts, options(&[("mystery", Some("value"))]));
    assert_eq!(last.as_deref(), Some("mystery"));
}

#[test]
fn one_synonym_two_groups_is_config_fault() {
    let err = AliasTable::from_groups(&[
        AliasGroup::new("plugin", ["p"]),
        AliasGroup::new("python", ["p"]),
    ])
    .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::AliasConflict { .. }));
}

#[test]
fn empty_table_is_a_no_op() {
    let table = AliasTable::default();
    let mut opts = options(&[("anything", None)]);
    let mut last = Some("anything".to_string());

    table.apply(&mut opts, &mut last);

    assert_eq!(opts, options(&[("anything", None)]));
    assert_eq!(last.as_deref(), Some("anything"));
}
