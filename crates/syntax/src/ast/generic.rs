// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generic "tag plus named fields" view of a [`Node`].
//!
//! This is the shape golden tests and downstream tools consume: the debug
//! form `(tag (field value) ...)` and a JSON object with a `type` key.

use super::Node;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A node as a type tag plus an ordered map of named fields.
///
/// Equality compares the tag and the field map; field order does not
/// matter for equality but is preserved for display and serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericNode {
    tag: &'static str,
    children: IndexMap<&'static str, Field>,
}

/// Value of one field of a [`GenericNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Node(Box<GenericNode>),
    Nodes(Vec<GenericNode>),
    Str(String),
    Bool(bool),
    Nil,
}

impl GenericNode {
    /// Create a node with no fields.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            children: IndexMap::new(),
        }
    }

    /// Builder-style field insertion. Re-inserting a field replaces its
    /// value in place.
    pub fn with(mut self, name: &'static str, value: Field) -> Self {
        self.children.insert(name, value);
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.children.get(name)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Field)> {
        self.children.iter().map(|(k, v)| (*k, v))
    }
}

impl Field {
    fn node(node: &Node) -> Field {
        Field::Node(Box::new(GenericNode::from(node)))
    }

    fn nodes(nodes: &[Node]) -> Field {
        Field::Nodes(nodes.iter().map(GenericNode::from).collect())
    }

    fn str(s: &str) -> Field {
        Field::Str(s.to_string())
    }

    fn opt_node(node: Option<&Node>) -> Field {
        node.map_or(Field::Nil, Field::node)
    }
}

impl From<&Node> for GenericNode {
    fn from(node: &Node) -> Self {
        let g = GenericNode::new(node.tag());
        match node {
            Node::List { body } | Node::DQuote { body } | Node::Concat { body } => {
                g.with("body", Field::nodes(body))
            }
            Node::Pipelines { body, terminal } => g
                .with("body", Field::node(body))
                .with("terminal", terminal.as_deref().map_or(Field::Nil, Field::str)),
            Node::AndOr { op, left, right }
            | Node::Pipe { op, left, right }
            | Node::BinOp { op, left, right } => g
                .with("op", Field::str(op))
                .with("left", Field::node(left))
                .with("right", Field::node(right)),
            Node::Pipeline { excl, body } => g
                .with("excl", Field::Bool(*excl))
                .with("body", Field::node(body)),
            Node::SimpleCommand { assigns, body } => g
                .with("assigns", Field::nodes(assigns))
                .with("body", Field::nodes(body)),
            Node::Assign { name, value } => g
                .with("name", Field::str(name))
                .with("value", Field::opt_node(value.as_deref())),
            Node::Str { body } | Node::SStr { body } | Node::SimpleParamEx { body } => {
                g.with("body", Field::str(body))
            }
            Node::ParamEx { reference, body } | Node::ParamLen { reference, body } => g
                .with("ref", Field::Bool(*reference))
                .with("body", Field::str(body)),
            Node::ParamSubst {
                reference,
                body,
                op,
                value,
            } => g
                .with("ref", Field::Bool(*reference))
                .with("body", Field::str(body))
                .with("op", Field::str(op))
                .with("value", Field::node(value)),
            Node::Substr {
                reference,
                body,
                offset,
                length,
            } => g
                .with("ref", Field::Bool(*reference))
                .with("body", Field::str(body))
                .with("offset", Field::node(offset))
                .with("length", Field::node(length)),
            Node::PatternRm {
                reference,
                body,
                mode,
                pattern,
            }
            | Node::CaseMod {
                reference,
                body,
                mode,
                pattern,
            } => g
                .with("ref", Field::Bool(*reference))
                .with("body", Field::str(body))
                .with("mode", Field::str(mode))
                .with("pattern", Field::node(pattern)),
            Node::PatternSubst {
                reference,
                body,
                mode,
                pattern,
                replace,
            } => g
                .with("ref", Field::Bool(*reference))
                .with("body", Field::str(body))
                .with("mode", Field::str(mode))
                .with("pattern", Field::node(pattern))
                .with("replace", Field::opt_node(replace.as_deref())),
            Node::PrefixEx { prefix, mode } => g
                .with("prefix", Field::str(prefix))
                .with("mode", Field::str(mode)),
            Node::ParamTrans {
                reference,
                body,
                op,
            } => g
                .with("ref", Field::Bool(*reference))
                .with("body", Field::str(body))
                .with("op", Field::str(op)),
            Node::ArrayEx { array, mode } | Node::ArrayKeys { array, mode } => g
                .with("array", Field::str(array))
                .with("mode", Field::str(mode)),
            Node::ArrayAccess {
                reference,
                body,
                subscript,
            } => g
                .with("ref", Field::Bool(*reference))
                .with("body", Field::str(body))
                .with("subscript", Field::node(subscript)),
            Node::CommandSubst { style, body } => g
                .with("style", Field::str(style))
                .with("body", Field::node(body)),
            Node::ProcessSubst { direction, body } => g
                .with("direction", Field::str(direction))
                .with("body", Field::node(body)),
            Node::ArithEx { body } | Node::Parentheses { body } => {
                g.with("body", Field::node(body))
            }
            Node::Number { value } => g.with("value", Field::str(value)),
            Node::Var { name, dollar } => g
                .with("name", Field::str(name))
                .with("dollar", Field::Bool(*dollar)),
            Node::UnOp { op, operand } | Node::PostOp { op, operand } => g
                .with("op", Field::str(op))
                .with("operand", Field::node(operand)),
            Node::Ternary {
                cond,
                then_branch,
                else_branch,
            } => g
                .with("cond", Field::node(cond))
                .with("then", Field::node(then_branch))
                .with("else", Field::node(else_branch)),
            Node::Empty => g,
        }
    }
}

impl fmt::Display for GenericNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.tag)?;
        for (name, value) in &self.children {
            write!(f, " ({name} {value})")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Node(node) => write!(f, "{node}"),
            Field::Nodes(nodes) => {
                f.write_str("[")?;
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{node}")?;
                }
                f.write_str("]")
            }
            Field::Str(s) => write!(f, "{s:?}"),
            Field::Bool(b) => write!(f, "{b}"),
            Field::Nil => f.write_str("nil"),
        }
    }
}

/// Serializes as `{"type": tag, field: value, ...}`.
impl Serialize for GenericNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len() + 1))?;
        map.serialize_entry("type", self.tag)?;
        for (name, value) in &self.children {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_generic().serialize(serializer)
    }
}
