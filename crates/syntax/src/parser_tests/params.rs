// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `${...}` family.

use super::helpers::*;
use crate::ast::Node;

fn name(body: &str) -> String {
    body.to_string()
}

fn subst(reference: bool, body: &str, op: &str, value: Node) -> Node {
    Node::ParamSubst {
        reference,
        body: name(body),
        op: op.to_string(),
        value: Box::new(value),
    }
}

fn substr(body: &str, offset: Node, length: Node) -> Node {
    Node::Substr {
        reference: false,
        body: name(body),
        offset: Box::new(offset),
        length: Box::new(length),
    }
}

fn pattern_rm(body: &str, mode: &str, pattern: Node) -> Node {
    Node::PatternRm {
        reference: false,
        body: name(body),
        mode: mode.to_string(),
        pattern: Box::new(pattern),
    }
}

fn pattern_subst(body: &str, mode: &str, pattern: Node, replace: Option<Node>) -> Node {
    Node::PatternSubst {
        reference: false,
        body: name(body),
        mode: mode.to_string(),
        pattern: Box::new(pattern),
        replace: replace.map(Box::new),
    }
}

fn case_mod(body: &str, mode: &str, pattern: Node) -> Node {
    Node::CaseMod {
        reference: false,
        body: name(body),
        mode: mode.to_string(),
        pattern: Box::new(pattern),
    }
}

fn array_access(reference: bool, body: &str, subscript: Node) -> Node {
    Node::ArrayAccess {
        reference,
        body: name(body),
        subscript: Box::new(subscript),
    }
}

// =============================================================================
// Plain References
// =============================================================================

#[yare::parameterized(
    plain_name    = { "${a}", param_ex(false, "a") },
    long_name     = { "${HOME_DIR}", param_ex(false, "HOME_DIR") },
    positional    = { "${10}", param_ex(false, "10") },
    special       = { "${?}", param_ex(false, "?") },
    indirect      = { "${!a}", param_ex(true, "a") },
    bang_special  = { "${!}", param_ex(false, "!") },
    count_special = { "${#}", param_ex(false, "#") },
    length        = { "${#a}", Node::ParamLen { reference: false, body: name("a") } },
    length_of_all = { "${#@}", Node::ParamLen { reference: false, body: name("@") } },
)]
fn plain_reference(src: &str, expected: Node) {
    assert_eq!(word(src), expected);
}

// =============================================================================
// Default, Assign, Error and Alternate Values
// =============================================================================

#[yare::parameterized(
    default           = { "${a:-a}", subst(false, "a", ":-", s("a")) },
    unset_default     = { "${a-b}", subst(false, "a", "-", s("b")) },
    assign_empty      = { "${a:=}", subst(false, "a", ":=", Node::Empty) },
    error_message     = { "${a:?unset}", subst(false, "a", ":?", s("unset")) },
    alternate         = { "${a+x}", subst(false, "a", "+", s("x")) },
    blank_in_value    = { "${a:-x y}", subst(false, "a", ":-", s("x y")) },
    parameter_value   = { "${a:-$b}", subst(false, "a", ":-", simple_param("b")) },
    quoted_value      = { "${a:-'}'}", subst(false, "a", ":-", sstr("}")) },
    indirect_default  = { "${!a:-b}", subst(true, "a", ":-", s("b")) },
)]
fn substitution(src: &str, expected: Node) {
    assert_eq!(word(src), expected);
}

#[test]
fn nested_default() {
    assert_eq!(
        word("${a:-${b:-c}}"),
        subst(false, "a", ":-", subst(false, "b", ":-", s("c")))
    );
}

#[test]
fn default_with_command_substitution() {
    assert_eq!(
        word("${a:-$(pwd)}"),
        subst(false, "a", ":-", command_subst("$(", script(&["pwd"])))
    );
}

// =============================================================================
// Substrings
// =============================================================================

#[yare::parameterized(
    offset_and_length = { "${a:0:1}", substr("a", num("0"), num("1")) },
    offset_only       = { "${a:1}", substr("a", num("1"), Node::Empty) },
    negative_offset   = { "${a: -1}", substr("a", un("-", num("1")), Node::Empty) },
    expression_offset = { "${a:i+1:n}", substr("a", bin("+", var("i"), num("1")), var("n")) },
    spaced            = { "${a: 1 : 2 }", substr("a", num("1"), num("2")) },
)]
fn substring(src: &str, expected: Node) {
    assert_eq!(word(src), expected);
}

// =============================================================================
// Pattern Removal and Substitution
// =============================================================================

#[yare::parameterized(
    shortest_prefix = { "${a#b}", pattern_rm("a", "#", s("b")) },
    longest_prefix  = { "${a##*/}", pattern_rm("a", "##", s("*/")) },
    shortest_suffix = { "${a%.*}", pattern_rm("a", "%", s(".*")) },
    longest_suffix  = { "${a%%/*}", pattern_rm("a", "%%", s("/*")) },
)]
fn pattern_removal(src: &str, expected: Node) {
    assert_eq!(word(src), expected);
}

#[yare::parameterized(
    first          = { "${a/b/c}", pattern_subst("a", "/", s("b"), Some(s("c"))) },
    all            = { "${a//b/c}", pattern_subst("a", "//", s("b"), Some(s("c"))) },
    anchored_start = { "${a/#b/c}", pattern_subst("a", "/#", s("b"), Some(s("c"))) },
    anchored_end   = { "${a/%b/c}", pattern_subst("a", "/%", s("b"), Some(s("c"))) },
    no_replacement = { "${a/b}", pattern_subst("a", "/", s("b"), None) },
    empty_replace  = { "${a/b/}", pattern_subst("a", "/", s("b"), Some(Node::Empty)) },
    slash_in_value = { "${a/b/c/d}", pattern_subst("a", "/", s("b"), Some(s("c/d"))) },
)]
fn pattern_substitution(src: &str, expected: Node) {
    assert_eq!(word(src), expected);
}

// =============================================================================
// Case Modification and Transformation
// =============================================================================

#[yare::parameterized(
    upper_first = { "${a^b}", case_mod("a", "^", s("b")) },
    upper_all   = { "${a^^}", case_mod("a", "^^", Node::Empty) },
    lower_first = { "${a,}", case_mod("a", ",", Node::Empty) },
    lower_all   = { "${a,,[AB]}", case_mod("a", ",,", s("[AB]")) },
)]
fn case_modification(src: &str, expected: Node) {
    assert_eq!(word(src), expected);
}

#[yare::parameterized(
    quote  = { "${foo@Q}", "Q" },
    escape = { "${foo@E}", "E" },
    prompt = { "${foo@P}", "P" },
    upper  = { "${foo@U}", "U" },
    keys   = { "${foo@k}", "k" },
)]
fn transformation(src: &str, op: &str) {
    assert_eq!(
        word(src),
        Node::ParamTrans {
            reference: false,
            body: name("foo"),
            op: op.to_string(),
        }
    );
}

#[yare::parameterized(
    star = { "${!foo*}", "*" },
    at   = { "${!foo@}", "@" },
)]
fn prefix_match(src: &str, mode: &str) {
    assert_eq!(
        word(src),
        Node::PrefixEx {
            prefix: name("foo"),
            mode: mode.to_string(),
        }
    );
}

// =============================================================================
// Arrays
// =============================================================================

#[yare::parameterized(
    all_at     = { "${a[@]}", Node::ArrayEx { array: name("a"), mode: name("@") } },
    all_star   = { "${a[*]}", Node::ArrayEx { array: name("a"), mode: name("*") } },
    keys_star  = { "${!foo[*]}", Node::ArrayKeys { array: name("foo"), mode: name("*") } },
    keys_at    = { "${!foo[@]}", Node::ArrayKeys { array: name("foo"), mode: name("@") } },
    index      = { "${a[1+2]}", array_access(false, "a", bin("+", num("1"), num("2"))) },
    variable   = { "${!a[i]}", array_access(true, "a", var("i")) },
    dollar_var = {
        "${a[$i]}",
        array_access(false, "a", Node::Var { name: name("i"), dollar: true })
    },
)]
fn array(src: &str, expected: Node) {
    assert_eq!(word(src), expected);
}
