// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assignment prefixes of simple commands.

use super::helpers::*;
use crate::ast::Node;

fn assign(name: &str, value: Option<Node>) -> Node {
    Node::Assign {
        name: name.to_string(),
        value: value.map(Box::new),
    }
}

// =============================================================================
// Basic Assignments
// =============================================================================

#[test]
fn assignment_before_command() {
    let (assigns, body) = simple_command("a=x foo");
    assert_eq!(assigns, vec![assign("a", Some(s("x")))]);
    assert_eq!(body, vec![s("foo")]);
}

#[test]
fn spaced_equals_is_not_an_assignment() {
    let (assigns, body) = simple_command("a = x foo");
    assert!(assigns.is_empty());
    assert_eq!(body, vec![s("a"), s("="), s("x"), s("foo")]);
}

#[test]
fn blank_after_equals_assigns_nothing() {
    let (assigns, body) = simple_command("a= foo");
    assert_eq!(assigns, vec![assign("a", None)]);
    assert_eq!(body, vec![s("foo")]);
}

#[test]
fn assignment_without_command() {
    let (assigns, body) = simple_command("a=");
    assert_eq!(assigns, vec![assign("a", None)]);
    assert!(body.is_empty());
}

#[test]
fn multiple_assignments() {
    let (assigns, body) = simple_command("a=1 _b2=two env");
    assert_eq!(
        assigns,
        vec![assign("a", Some(s("1"))), assign("_b2", Some(s("two")))]
    );
    assert_eq!(body, vec![s("env")]);
}

#[test]
fn assignments_only() {
    let (assigns, body) = simple_command("a=1 b=2");
    assert_eq!(assigns.len(), 2);
    assert!(body.is_empty());
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn double_quoted_value() {
    let (assigns, _) = simple_command("a=\"x $y\"");
    assert_eq!(
        assigns,
        vec![assign(
            "a",
            Some(Node::DQuote {
                body: vec![s("x "), simple_param("y")],
            })
        )]
    );
}

#[test]
fn concatenated_value() {
    let (assigns, _) = simple_command("a=x'y'$z");
    assert_eq!(
        assigns,
        vec![assign(
            "a",
            Some(Node::Concat {
                body: vec![s("x"), sstr("y"), simple_param("z")],
            })
        )]
    );
}

#[test]
fn substitution_value() {
    let (assigns, body) = simple_command("now=$(date) run");
    assert_eq!(
        assigns,
        vec![assign(
            "now",
            Some(command_subst("$(", script(&["date"])))
        )]
    );
    assert_eq!(body, vec![s("run")]);
}

#[test]
fn expansion_value() {
    let (assigns, _) = simple_command("a=${b}");
    assert_eq!(assigns, vec![assign("a", Some(param_ex(false, "b")))]);
}

#[test]
fn equals_after_value_stays_in_value() {
    let (assigns, _) = simple_command("a=b=c");
    assert_eq!(assigns, vec![assign("a", Some(s("b=c")))]);
}

// =============================================================================
// Words That Look Like Assignments
// =============================================================================

#[yare::parameterized(
    after_command = { "foo a=b", &["foo", "a=b"] },
    digit_start   = { "1a=b", &["1a=b"] },
    dashed_name   = { "a-b=c", &["a-b=c"] },
    bare_equals   = { "=x", &["=x"] },
)]
fn not_an_assignment(src: &str, expected: &[&str]) {
    let (assigns, body) = simple_command(src);
    assert!(assigns.is_empty(), "{src:?} parsed assignments");
    assert_eq!(body, expected.iter().map(|w| s(w)).collect::<Vec<_>>());
}

#[test]
fn assignment_in_later_pipeline_stage() {
    let ast = parse("echo | a=1 cat");
    assert_eq!(ast.count_simple_commands(), 2);
    assert!(ast.to_string().contains("(assign (name \"a\") (value (str (body \"1\"))))"));
}
