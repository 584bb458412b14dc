//! Blueprint compilation tests.
//!
//! Tests for turning authored rule strings into structured rules.

use herald_foundation::ErrorKind;
use herald_parser::{BlueprintCompiler, OptionSpec, TrailingMode};

#[test]
fn compile_single_required_flag() {
    let rule = BlueprintCompiler::compile("myoption").unwrap();

    assert_eq!(
        rule.options,
        vec![OptionSpec {
            required: true,
            name: "myoption".to_string(),
            takes_argument: false,
        }]
    );
    assert_eq!(rule.trailing, TrailingMode::None);
}

#[test]
fn compile_mixed_option_forms() {
    let rule = BlueprintCompiler::compile("complex: ?other: :#").unwrap();

    assert_eq!(rule.options.len(), 2);
    assert!(rule.options[0].required);
    assert!(rule.options[0].takes_argument);
    assert_eq!(rule.options[0].name, "complex");
    assert!(!rule.options[1].required);
    assert!(rule.options[1].takes_argument);
    assert_eq!(rule.options[1].name, "other");
    assert_eq!(rule.trailing, TrailingMode::AtLeastList(0));
}

#[test]
fn compile_every_marker_form() {
    let cases = [
        ("opt", TrailingMode::None),
        ("opt :", TrailingMode::ExactList(1)),
        ("opt :::", TrailingMode::ExactList(3)),
        ("opt ::+", TrailingMode::AtLeastList(2)),
        ("opt ::#", TrailingMode::AtLeastList(1)),
        ("opt ^", TrailingMode::GroupedRequired),
        ("opt &", TrailingMode::GroupedOptional),
    ];

    for (source, expected) in cases {
        let rule = BlueprintCompiler::compile(source).unwrap();
        assert_eq!(rule.trailing, expected, "for `{source}`");
    }
}

#[test]
fn compile_marker_only_rule() {
    let rule = BlueprintCompiler::compile("&").unwrap();
    assert!(rule.options.is_empty());
    assert_eq!(rule.trailing, TrailingMode::GroupedOptional);
}

#[test]
fn compile_empty_rule() {
    let rule = BlueprintCompiler::compile("").unwrap();
    assert!(rule.options.is_empty());
    assert_eq!(rule.trailing, TrailingMode::None);
}

#[test]
fn malformed_markers_rejected() {
    for source in ["opt +", "opt #", "opt ^^", "opt :^", "opt +:", "opt &:"] {
        let err = BlueprintCompiler::compile(source).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::MalformedMarker { .. }),
            "expected malformed marker for `{source}`"
        );
    }
}

#[test]
fn marker_must_be_final_block() {
    let err = BlueprintCompiler::compile("^ opt").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MarkerNotLast { .. }));
}

#[test]
fn duplicate_option_names_rejected() {
    let err = BlueprintCompiler::compile("opt opt:").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateOption { .. }));
}

#[test]
fn compile_is_order_independent_across_option_blocks() {
    // Reordering option blocks changes only their stored order, never
    // whether compilation succeeds or how the marker is read.
    let forward = BlueprintCompiler::compile("alpha ?beta: ::+").unwrap();
    let backward = BlueprintCompiler::compile("?beta: alpha ::+").unwrap();

    assert_eq!(forward.trailing, backward.trailing);
    let mut forward_names: Vec<_> = forward.options.iter().map(|o| o.name.clone()).collect();
    let mut backward_names: Vec<_> = backward.options.iter().map(|o| o.name.clone()).collect();
    forward_names.sort();
    backward_names.sort();
    assert_eq!(forward_names, backward_names);
}
