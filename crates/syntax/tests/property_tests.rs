// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests over arbitrary and generated scripts.

use proptest::prelude::*;
use shtree_syntax::{parse, GenericNode, ParseError, ParseOptions, Parser};

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,6}",
        "'[a-z ]{0,6}'",
        "\"[a-z ]{0,6}\"",
        "\\$[a-z]{1,4}",
        "\\$\\{[a-z]{1,4}(:-[a-z]{0,3})?\\}",
        "\\$\\(\\([0-9]{1,3} [-+*] [a-z]{1,3}\\)\\)",
    ]
}

fn command() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 1..5)
}

proptest! {
    #[test]
    fn parsing_never_panics(input in "[ -~\n\t]{0,120}") {
        let _ = parse(&input, "fuzz.sh");
    }

    #[test]
    fn parsing_is_deterministic(input in "[ -~\n]{0,80}") {
        prop_assert_eq!(parse(&input, "fuzz.sh"), parse(&input, "fuzz.sh"));
    }

    #[test]
    fn fault_spans_stay_in_bounds(input in "[ -~\n]{0,80}") {
        if let Err(err) = parse(&input, "fuzz.sh") {
            let span = err.span();
            prop_assert!(span.start <= span.end);
            prop_assert!(span.end <= input.len());
            let (line, col) = err.position();
            prop_assert!(line >= 1 && col >= 1);
        }
    }

    #[test]
    fn diagnostics_render_for_any_fault(input in "[ -~\n]{0,60}") {
        if let Err(err) = parse(&input, "fuzz.sh") {
            prop_assert!(err.diagnostic(&input).starts_with("error: "));
        }
    }

    #[test]
    fn generated_scripts_parse(
        commands in prop::collection::vec(command(), 1..5),
        sep in prop_oneof![Just("; "), Just("\n"), Just(" | "), Just(" && ")],
    ) {
        let script = commands
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join(sep);
        let ast = parse(&script, "gen.sh");
        prop_assert!(ast.is_ok(), "{script:?}: {:?}", ast.as_ref().err());
        if let Ok(ast) = ast {
            prop_assert_eq!(ast.count_simple_commands(), commands.len());
        }
    }

    #[test]
    fn generic_form_matches_tree(commands in prop::collection::vec(command(), 1..4)) {
        let script = commands
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
        if let Ok(ast) = parse(&script, "gen.sh") {
            let generic: GenericNode = (&ast).into();
            prop_assert_eq!(generic.tag(), "list");
            prop_assert_eq!(generic.to_string(), ast.to_string());
        }
    }

    #[test]
    fn depth_limit_is_enforced(depth in 1usize..40, max in 1usize..20) {
        let script = format!("{}x{}", "$(".repeat(depth), ")".repeat(depth));
        let options = ParseOptions { max_depth: max };
        match Parser::parse_with_options(&script, "deep.sh", options) {
            Ok(_) => prop_assert!(depth <= max),
            Err(ParseError::TooDeep { max: reported, .. }) => {
                prop_assert!(depth > max);
                prop_assert_eq!(reported, max);
            }
            Err(other) => prop_assert!(false, "unexpected fault: {other}"),
        }
    }

    #[test]
    fn chain_depth_is_enforced(
        stages in 1usize..40,
        max in 1usize..20,
        sep in prop::sample::select(vec![" | ", " && ", " || "]),
    ) {
        let script = vec!["x"; stages].join(sep);
        let options = ParseOptions { max_depth: max };
        match Parser::parse_with_options(&script, "chain.sh", options) {
            Ok(_) => prop_assert!(stages - 1 <= max),
            Err(ParseError::TooDeep { max: reported, .. }) => {
                prop_assert!(stages - 1 > max);
                prop_assert_eq!(reported, max);
            }
            Err(other) => prop_assert!(false, "unexpected fault: {other}"),
        }
    }
}
