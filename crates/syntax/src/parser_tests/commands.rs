// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lists, terminators, pipelines and and-or chains.

use super::helpers::*;
use crate::ast::Node;

// =============================================================================
// Lists and Terminators
// =============================================================================

#[test]
fn single_word() {
    assert_eq!(parse("foo"), script(&["foo"]));
}

#[test]
fn two_words() {
    assert_eq!(parse("foo bar"), script(&["foo", "bar"]));
}

#[test]
fn semicolon_terminates_first_entry_only() {
    assert_eq!(
        parse("foo;bar"),
        list(vec![
            entry(pipeline(words(&["foo"])), Some(";")),
            entry(pipeline(words(&["bar"])), None),
        ])
    );
}

#[test]
fn newline_terminates_like_semicolon() {
    assert_eq!(
        parse("foo\nbar"),
        list(vec![
            entry(pipeline(words(&["foo"])), Some("\n")),
            entry(pipeline(words(&["bar"])), None),
        ])
    );
}

#[test]
fn ampersand_is_a_terminal() {
    assert_eq!(
        parse("sleep 1 & wait"),
        list(vec![
            entry(pipeline(words(&["sleep", "1"])), Some("&")),
            entry(pipeline(words(&["wait"])), None),
        ])
    );
}

#[test]
fn trailing_terminal_is_recorded() {
    assert_eq!(
        parse("foo;"),
        list(vec![entry(pipeline(words(&["foo"])), Some(";"))])
    );
}

#[yare::parameterized(
    empty         = { "" },
    blanks        = { "  \t " },
    newlines      = { "\n\n\n" },
    comment_only  = { "# nothing here" },
    comment_lines = { "# one\n   # two\n" },
)]
fn no_commands(src: &str) {
    assert_eq!(parse(src), list(vec![]));
}

#[test]
fn blank_lines_between_entries_are_skipped() {
    assert_eq!(
        parse("\n\nfoo\n\n\nbar\n"),
        list(vec![
            entry(pipeline(words(&["foo"])), Some("\n")),
            entry(pipeline(words(&["bar"])), Some("\n")),
        ])
    );
}

#[test]
fn comment_runs_to_end_of_line() {
    assert_eq!(
        parse("echo a # trailing note\necho b"),
        list(vec![
            entry(pipeline(words(&["echo", "a"])), Some("\n")),
            entry(pipeline(words(&["echo", "b"])), None),
        ])
    );
}

#[test]
fn hash_inside_word_is_literal() {
    assert_eq!(parse("echo a#b"), script(&["echo", "a#b"]));
}

#[test]
fn line_continuation_joins_lines() {
    assert_eq!(parse("echo a \\\n  b"), script(&["echo", "a", "b"]));
}

#[test]
fn parsing_is_deterministic() {
    let src = "a=1 echo \"$x\" ${y:-z} $((1 + 2)) | cat; `date` && ls <(pwd)";
    assert_eq!(parse(src), parse(src));
}

// =============================================================================
// Pipelines
// =============================================================================

fn pipe(op: &str, left: Node, right: Node) -> Node {
    Node::Pipe {
        op: op.to_string(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn pipe_folds_left() {
    assert_eq!(
        parse("a | b | c"),
        list(vec![entry(
            pipeline(pipe(
                "|",
                pipe("|", words(&["a"]), words(&["b"])),
                words(&["c"])
            )),
            None
        )])
    );
}

#[test]
fn pipe_with_stderr() {
    assert_eq!(
        parse("make |& tee log"),
        list(vec![entry(
            pipeline(pipe("|&", words(&["make"]), words(&["tee", "log"]))),
            None
        )])
    );
}

#[test]
fn newline_allowed_after_pipe() {
    assert_eq!(parse("a |\n  b"), parse("a | b"));
}

#[test]
fn bang_negates_pipeline() {
    let ast = parse("! grep -q x | wc");
    let [Node::Pipelines { body, .. }] = entries(&ast) else {
        panic!("expected one entry, got {ast}");
    };
    assert!(matches!(&**body, Node::Pipeline { excl: true, .. }));
}

#[yare::parameterized(
    attached_word  = { "!foo" },
    attached_quote = { "!\"x\"" },
    later_word     = { "echo !" },
)]
fn bang_that_is_not_a_negation(src: &str) {
    let ast = parse(src);
    let [Node::Pipelines { body, .. }] = entries(&ast) else {
        panic!("expected one entry, got {ast}");
    };
    assert!(matches!(&**body, Node::Pipeline { excl: false, .. }));
}

// =============================================================================
// And-Or Chains
// =============================================================================

fn and_or(op: &str, left: Node, right: Node) -> Node {
    Node::AndOr {
        op: op.to_string(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn and_or_folds_left() {
    assert_eq!(
        parse("a && b || c"),
        list(vec![entry(
            and_or(
                "||",
                and_or("&&", pipeline(words(&["a"])), pipeline(words(&["b"]))),
                pipeline(words(&["c"]))
            ),
            None
        )])
    );
}

#[test]
fn pipe_binds_tighter_than_and() {
    assert_eq!(
        parse("a | b && c"),
        list(vec![entry(
            and_or(
                "&&",
                pipeline(pipe("|", words(&["a"]), words(&["b"]))),
                pipeline(words(&["c"]))
            ),
            None
        )])
    );
}

#[test]
fn newline_allowed_after_and_or() {
    assert_eq!(parse("a &&\n\n b ||\n c"), parse("a && b || c"));
}

#[test]
fn terminal_follows_whole_chain() {
    let ast = parse("a && b; c");
    let entries = entries(&ast);
    assert_eq!(entries.len(), 2);
    assert!(matches!(
        &entries[0],
        Node::Pipelines { body, terminal: Some(t) } if t == ";" && body.tag() == "and_or"
    ));
}
