// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for parser tests: parse shortcuts and node builders.

use crate::ast::Node;
use crate::parse_error::ParseError;
use crate::parser::Parser;

pub(super) fn parse(src: &str) -> Node {
    match Parser::parse(src, "test.sh") {
        Ok(node) => node,
        Err(e) => panic!("failed to parse {src:?}: {e}"),
    }
}

pub(super) fn parse_err(src: &str) -> ParseError {
    match Parser::parse(src, "test.sh") {
        Ok(node) => panic!("expected {src:?} to fail, got {node}"),
        Err(e) => e,
    }
}

/// Top-level entries of a parsed list.
pub(super) fn entries(ast: &Node) -> &[Node] {
    match ast {
        Node::List { body } => body,
        other => panic!("expected list, got {other}"),
    }
}

/// The `(assigns, body)` of a source holding exactly one simple command.
pub(super) fn simple_command(src: &str) -> (Vec<Node>, Vec<Node>) {
    let ast = parse(src);
    let [Node::Pipelines { body, .. }] = entries(&ast) else {
        panic!("expected one entry in {src:?}, got {ast}");
    };
    let Node::Pipeline { excl: false, body } = &**body else {
        panic!("expected plain pipeline in {src:?}, got {ast}");
    };
    let Node::SimpleCommand { assigns, body } = &**body else {
        panic!("expected simple command in {src:?}, got {ast}");
    };
    (assigns.clone(), body.clone())
}

/// The only word of a one-word command.
pub(super) fn word(src: &str) -> Node {
    let (assigns, mut body) = simple_command(src);
    assert!(assigns.is_empty(), "unexpected assignments in {src:?}");
    assert_eq!(body.len(), 1, "expected one word in {src:?}");
    body.remove(0)
}

/// The expression inside `$((expr))`.
pub(super) fn arith(expr: &str) -> Node {
    match word(&format!("$(({expr}))")) {
        Node::ArithEx { body } => *body,
        other => panic!("expected arith_ex, got {other}"),
    }
}

// Node builders

pub(super) fn list(entries: Vec<Node>) -> Node {
    Node::List { body: entries }
}

pub(super) fn entry(body: Node, terminal: Option<&str>) -> Node {
    Node::Pipelines {
        body: Box::new(body),
        terminal: terminal.map(str::to_string),
    }
}

pub(super) fn pipeline(body: Node) -> Node {
    Node::Pipeline {
        excl: false,
        body: Box::new(body),
    }
}

pub(super) fn cmd(body: Vec<Node>) -> Node {
    Node::SimpleCommand {
        assigns: vec![],
        body,
    }
}

/// A command of bare words.
pub(super) fn words(ws: &[&str]) -> Node {
    cmd(ws.iter().map(|w| s(w)).collect())
}

/// A list of unterminated single-command entries.
pub(super) fn script(ws: &[&str]) -> Node {
    list(vec![entry(pipeline(words(ws)), None)])
}

pub(super) fn s(body: &str) -> Node {
    Node::Str {
        body: body.to_string(),
    }
}

pub(super) fn sstr(body: &str) -> Node {
    Node::SStr {
        body: body.to_string(),
    }
}

pub(super) fn simple_param(body: &str) -> Node {
    Node::SimpleParamEx {
        body: body.to_string(),
    }
}

pub(super) fn param_ex(reference: bool, body: &str) -> Node {
    Node::ParamEx {
        reference,
        body: body.to_string(),
    }
}

pub(super) fn num(value: &str) -> Node {
    Node::Number {
        value: value.to_string(),
    }
}

pub(super) fn var(name: &str) -> Node {
    Node::Var {
        name: name.to_string(),
        dollar: false,
    }
}

pub(super) fn bin(op: &str, left: Node, right: Node) -> Node {
    Node::BinOp {
        op: op.to_string(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub(super) fn un(op: &str, operand: Node) -> Node {
    Node::UnOp {
        op: op.to_string(),
        operand: Box::new(operand),
    }
}

pub(super) fn command_subst(style: &str, body: Node) -> Node {
    Node::CommandSubst {
        style: style.to_string(),
        body: Box::new(body),
    }
}
