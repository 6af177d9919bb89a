// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arithmetic expansion: precedence, associativity and primaries.

use super::helpers::*;
use crate::ast::Node;

fn ternary(cond: Node, then_branch: Node, else_branch: Node) -> Node {
    Node::Ternary {
        cond: Box::new(cond),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    }
}

fn post(op: &str, operand: Node) -> Node {
    Node::PostOp {
        op: op.to_string(),
        operand: Box::new(operand),
    }
}

fn parens(body: Node) -> Node {
    Node::Parentheses {
        body: Box::new(body),
    }
}

// =============================================================================
// Precedence and Associativity
// =============================================================================

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        arith("a + b * c"),
        bin("+", var("a"), bin("*", var("b"), var("c")))
    );
}

#[test]
fn subtraction_folds_left() {
    assert_eq!(
        arith("a - b - c"),
        bin("-", bin("-", var("a"), var("b")), var("c"))
    );
}

#[test]
fn equality_folds_left() {
    assert_eq!(
        arith("a == b != c"),
        bin("!=", bin("==", var("a"), var("b")), var("c"))
    );
}

#[test]
fn power_folds_right() {
    assert_eq!(
        arith("2 ** 3 ** 2"),
        bin("**", num("2"), bin("**", num("3"), num("2")))
    );
}

#[test]
fn full_binary_chain() {
    let expected = bin(
        "||",
        var("a"),
        bin(
            "&&",
            var("b"),
            bin(
                "|",
                var("c"),
                bin(
                    "^",
                    var("d"),
                    bin(
                        "&",
                        var("e"),
                        bin(
                            "==",
                            var("f"),
                            bin(
                                "<",
                                var("g"),
                                bin(
                                    "<<",
                                    var("h"),
                                    bin("+", var("i"), bin("*", var("j"), var("k"))),
                                ),
                            ),
                        ),
                    ),
                ),
            ),
        ),
    );
    assert_eq!(
        arith("a || b && c | d ^ e & f == g < h << i + j * k"),
        expected
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        arith("(1 + 2) * 3"),
        bin("*", parens(bin("+", num("1"), num("2"))), num("3"))
    );
}

// =============================================================================
// Ternary, Assignment and Comma
// =============================================================================

#[test]
fn ternary_else_takes_logical_or() {
    assert_eq!(
        arith("a ? b : c || d"),
        ternary(var("a"), var("b"), bin("||", var("c"), var("d")))
    );
}

#[test]
fn ternary_nests_to_the_right() {
    assert_eq!(
        arith("1 ? 2 : 3 ? 4 : 5"),
        ternary(num("1"), num("2"), ternary(num("3"), num("4"), num("5")))
    );
}

#[test]
fn ternary_then_allows_comma() {
    assert_eq!(
        arith("a ? b, c : d"),
        ternary(var("a"), bin(",", var("b"), var("c")), var("d"))
    );
}

#[test]
fn assignment_folds_right() {
    assert_eq!(
        arith("a = b = 1"),
        bin("=", var("a"), bin("=", var("b"), num("1")))
    );
}

#[test]
fn assignment_takes_ternary() {
    assert_eq!(
        arith("x = y ? 1 : 2"),
        bin("=", var("x"), ternary(var("y"), num("1"), num("2")))
    );
}

#[yare::parameterized(
    add   = { "+=" },
    sub   = { "-=" },
    mul   = { "*=" },
    div   = { "/=" },
    rem   = { "%=" },
    shl   = { "<<=" },
    shr   = { ">>=" },
    and   = { "&=" },
    xor   = { "^=" },
    or    = { "|=" },
)]
fn compound_assignment(op: &str) {
    assert_eq!(arith(&format!("n {op} 2")), bin(op, var("n"), num("2")));
}

#[test]
fn comma_is_loosest() {
    assert_eq!(
        arith("a += 1, b"),
        bin(",", bin("+=", var("a"), num("1")), var("b"))
    );
}

// =============================================================================
// Unary and Postfix
// =============================================================================

#[test]
fn negation_binds_tighter_than_power() {
    assert_eq!(
        arith("-a ** 2"),
        bin("**", un("-", var("a")), num("2"))
    );
}

#[test]
fn logical_and_bitwise_not() {
    assert_eq!(
        arith("!a && ~b"),
        bin("&&", un("!", var("a")), un("~", var("b")))
    );
}

#[test]
fn increments() {
    assert_eq!(
        arith("a++ + ++b"),
        bin("+", post("++", var("a")), un("++", var("b")))
    );
}

#[test]
fn stacked_prefix_operators() {
    assert_eq!(arith("- -a"), un("-", un("-", var("a"))));
    assert_eq!(arith("--a"), un("--", var("a")));
}

// =============================================================================
// Primaries
// =============================================================================

#[yare::parameterized(
    decimal = { "42" },
    hex     = { "0x1f" },
    based   = { "2#101" },
    octal   = { "010" },
)]
fn number_literal(src: &str) {
    assert_eq!(arith(src), num(src));
}

#[test]
fn expansions_as_operands() {
    assert_eq!(
        arith("$a + ${b} + $(c)"),
        bin(
            "+",
            bin(
                "+",
                Node::Var {
                    name: "a".to_string(),
                    dollar: true,
                },
                param_ex(false, "b")
            ),
            command_subst("$(", script(&["c"]))
        )
    );
}

#[test]
fn nested_arithmetic_expansion() {
    assert_eq!(
        arith("$((1)) * 2"),
        bin(
            "*",
            Node::ArithEx {
                body: Box::new(num("1")),
            },
            num("2")
        )
    );
}

#[test]
fn expression_spans_lines() {
    assert_eq!(arith("1 +\n 2"), bin("+", num("1"), num("2")));
}

#[test]
fn blank_around_expression() {
    assert_eq!(arith("  x  "), var("x"));
}
