// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax tree for shell scripts.
//!
//! Every grammar construct is one variant of [`Node`] with explicitly
//! declared fields. [`GenericNode`] is the cross-construct "tag plus named
//! fields" view used for the debug form and serialization.

mod generic;
mod utils;
mod visitor;

pub use generic::{Field, GenericNode};
pub use visitor::Visitor;

use std::fmt;

/// A syntax tree node.
///
/// Nodes are built bottom-up by the parser and never mutated afterwards.
/// The root of a parse is always [`Node::List`].
///
/// Field names follow the debug form (see [`Node::to_generic`]); the `ref`
/// flag of parameter expansions is spelled `reference` here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    // Command structure
    /// Sequence of terminated pipelines.
    List { body: Vec<Node> },
    /// One pipeline (or `&&`/`||` chain) and its terminator, if any.
    Pipelines {
        body: Box<Node>,
        terminal: Option<String>,
    },
    /// `left && right` or `left || right`.
    AndOr {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Commands joined by pipes, optionally negated with `!`.
    Pipeline { excl: bool, body: Box<Node> },
    /// `left | right` or `left |& right`.
    Pipe {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Leading assignments followed by words.
    SimpleCommand {
        assigns: Vec<Node>,
        body: Vec<Node>,
    },
    /// `name=value`; `value` is `None` for `name=` with nothing after it.
    Assign {
        name: String,
        value: Option<Box<Node>>,
    },

    // Words
    /// Bare or quoted literal text, escapes kept verbatim.
    Str { body: String },
    /// Single-quoted text without its delimiters.
    SStr { body: String },
    /// Double-quoted string.
    DQuote { body: Vec<Node> },
    /// Adjacent pieces forming one word.
    Concat { body: Vec<Node> },

    // Parameter expansion
    /// `$name`
    SimpleParamEx { body: String },
    /// `${name}`
    ParamEx { reference: bool, body: String },
    /// `${#name}`
    ParamLen { reference: bool, body: String },
    /// `${name:-value}` and the other default/assign/error/alternate forms.
    ParamSubst {
        reference: bool,
        body: String,
        op: String,
        value: Box<Node>,
    },
    /// `${name:offset}` or `${name:offset:length}`.
    Substr {
        reference: bool,
        body: String,
        offset: Box<Node>,
        length: Box<Node>,
    },
    /// `${name#pattern}` and friends.
    PatternRm {
        reference: bool,
        body: String,
        mode: String,
        pattern: Box<Node>,
    },
    /// `${name/pattern/replace}`; `replace` is `None` without a second `/`.
    PatternSubst {
        reference: bool,
        body: String,
        mode: String,
        pattern: Box<Node>,
        replace: Option<Box<Node>>,
    },
    /// `${name^pattern}` and friends.
    CaseMod {
        reference: bool,
        body: String,
        mode: String,
        pattern: Box<Node>,
    },
    /// `${!prefix*}` or `${!prefix@}`.
    PrefixEx { prefix: String, mode: String },
    /// `${name@op}`
    ParamTrans {
        reference: bool,
        body: String,
        op: String,
    },
    /// `${name[@]}` or `${name[*]}`.
    ArrayEx { array: String, mode: String },
    /// `${!name[@]}` or `${!name[*]}`.
    ArrayKeys { array: String, mode: String },
    /// `${name[subscript]}`
    ArrayAccess {
        reference: bool,
        body: String,
        subscript: Box<Node>,
    },

    // Substitutions
    /// `$(list)` or `` `list` ``; `style` is `$(` or `` ` ``.
    CommandSubst { style: String, body: Box<Node> },
    /// `<(list)` or `>(list)`; `direction` is `<` or `>`.
    ProcessSubst { direction: String, body: Box<Node> },
    /// `$((expr))`
    ArithEx { body: Box<Node> },

    // Arithmetic
    Number { value: String },
    /// Variable reference; `dollar` records a `$` sigil.
    Var { name: String, dollar: bool },
    /// Binary operator, including `,` and the assignment operators.
    BinOp {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnOp { op: String, operand: Box<Node> },
    PostOp { op: String, operand: Box<Node> },
    Ternary {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Box<Node>,
    },
    /// Explicit grouping, kept so the tree round-trips.
    Parentheses { body: Box<Node> },

    /// Explicitly empty payload.
    Empty,
}

impl Node {
    /// Type tag of this node, as used in the debug form.
    pub fn tag(&self) -> &'static str {
        match self {
            Node::List { .. } => "list",
            Node::Pipelines { .. } => "pipelines",
            Node::AndOr { .. } => "and_or",
            Node::Pipeline { .. } => "pipeline",
            Node::Pipe { .. } => "pipe",
            Node::SimpleCommand { .. } => "simple_command",
            Node::Assign { .. } => "assign",
            Node::Str { .. } => "str",
            Node::SStr { .. } => "sstr",
            Node::DQuote { .. } => "dquote",
            Node::Concat { .. } => "concat",
            Node::SimpleParamEx { .. } => "simple_param_ex",
            Node::ParamEx { .. } => "param_ex",
            Node::ParamLen { .. } => "param_len",
            Node::ParamSubst { .. } => "param_subst",
            Node::Substr { .. } => "substr",
            Node::PatternRm { .. } => "pattern_rm",
            Node::PatternSubst { .. } => "pattern_subst",
            Node::CaseMod { .. } => "case_mod",
            Node::PrefixEx { .. } => "prefix_ex",
            Node::ParamTrans { .. } => "param_trans",
            Node::ArrayEx { .. } => "array_ex",
            Node::ArrayKeys { .. } => "array_keys",
            Node::ArrayAccess { .. } => "array_access",
            Node::CommandSubst { .. } => "command_subst",
            Node::ProcessSubst { .. } => "process_subst",
            Node::ArithEx { .. } => "arith_ex",
            Node::Number { .. } => "number",
            Node::Var { .. } => "var",
            Node::BinOp { .. } => "bin_op",
            Node::UnOp { .. } => "un_op",
            Node::PostOp { .. } => "post_op",
            Node::Ternary { .. } => "ternary",
            Node::Parentheses { .. } => "parentheses",
            Node::Empty => "empty",
        }
    }

    /// Direct child nodes, in field order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::List { body } | Node::DQuote { body } | Node::Concat { body } => {
                body.iter().collect()
            }
            Node::SimpleCommand { assigns, body } => assigns.iter().chain(body).collect(),
            Node::Pipelines { body, .. }
            | Node::Pipeline { body, .. }
            | Node::CommandSubst { body, .. }
            | Node::ProcessSubst { body, .. }
            | Node::ArithEx { body }
            | Node::Parentheses { body } => vec![&**body],
            Node::AndOr { left, right, .. }
            | Node::Pipe { left, right, .. }
            | Node::BinOp { left, right, .. } => vec![&**left, &**right],
            Node::Assign { value, .. } => value.as_deref().into_iter().collect(),
            Node::ParamSubst { value, .. } => vec![&**value],
            Node::Substr { offset, length, .. } => vec![&**offset, &**length],
            Node::PatternRm { pattern, .. } | Node::CaseMod { pattern, .. } => vec![&**pattern],
            Node::PatternSubst {
                pattern, replace, ..
            } => std::iter::once(&**pattern)
                .chain(replace.as_deref())
                .collect(),
            Node::ArrayAccess { subscript, .. } => vec![&**subscript],
            Node::UnOp { operand, .. } | Node::PostOp { operand, .. } => vec![&**operand],
            Node::Ternary {
                cond,
                then_branch,
                else_branch,
            } => vec![&**cond, &**then_branch, &**else_branch],
            Node::Str { .. }
            | Node::SStr { .. }
            | Node::SimpleParamEx { .. }
            | Node::ParamEx { .. }
            | Node::ParamLen { .. }
            | Node::PrefixEx { .. }
            | Node::ParamTrans { .. }
            | Node::ArrayEx { .. }
            | Node::ArrayKeys { .. }
            | Node::Number { .. }
            | Node::Var { .. }
            | Node::Empty => Vec::new(),
        }
    }

    /// Convert to the generic tag-plus-fields form.
    pub fn to_generic(&self) -> GenericNode {
        GenericNode::from(self)
    }
}

/// Formats the debug form `(tag (field value) ...)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_generic(), f)
    }
}

#[cfg(test)]
#[path = "../ast_tests.rs"]
mod tests;
