// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shell lexer and recursive-descent parser producing syntax trees.
//!
//! This crate turns POSIX-shell-like source text into a tree of [`Node`]s
//! for interpreters, linters and formatters. It does not execute anything.
//!
//! # Quick Start
//!
//! ```ignore
//! use shtree_syntax::parse;
//!
//! let ast = parse("a=1 echo ${a:-none} $((a + 2))", "input.sh")?;
//! println!("{ast}");
//! # Ok::<(), shtree_syntax::ParseError>(())
//! ```
//!
//! # Features
//!
//! - **Commands**: lists, `&&`/`||` chains, pipelines with `!`, `|` and `|&`
//! - **Assignments**: `name=value` prefixes, including empty `name=`
//! - **Quoting**: single and double quotes, adjacent pieces joined into one word
//! - **Parameter expansion**: defaults, substrings, pattern removal and
//!   substitution, case modification, transformations, arrays, prefix matches
//! - **Substitutions**: `$(...)`, `` `...` ``, `<(...)`, `>(...)`
//! - **Arithmetic**: `$((...))` with the full operator precedence table
//!
//! # Tree Structure
//!
//! ```text
//! list
//! └── pipelines[] (terminal: ";" | "\n" | "&" | nil)
//!     └── and_or | pipeline (excl)
//!         └── pipe | simple_command
//!             ├── assigns: assign[]
//!             └── body: word[]
//! ```
//!
//! Every node has a stable tag and field set; [`Node::to_generic`] exposes
//! them uniformly and `Display` renders the debug form
//! `(tag (field value) ...)`.
//!
//! # Tree Traversal
//!
//! Implement [`Visitor`] for custom traversal, or use the built-in queries:
//!
//! - [`Node::count_simple_commands`] - Count all simple commands
//! - [`Node::parameter_names`] - Collect referenced parameter names
//! - [`Node::has_substitutions`] - Check for command/process substitutions

mod ast;
mod error;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
mod token;

pub use ast::{Field, GenericNode, Node, Visitor};
pub use error::LexError;
pub use lexer::{Lexer, Mark, Rules};
pub use parse_error::ParseError;
pub use parser::{ParseOptions, Parser};
pub use span::{diagnostic_context, Span};
pub use token::{is_valid_variable_name, Token, TokenKind};

/// Parse `source` into its root [`Node::List`].
///
/// `name` labels the source in diagnostics only. This is a convenience
/// wrapper around [`Parser::parse`].
///
/// # Examples
///
/// ```ignore
/// use shtree_syntax::parse;
///
/// let ast = parse("echo 'bar baz'", "input.sh")?;
/// assert_eq!(ast.count_simple_commands(), 1);
///
/// let err = parse("echo ${foo", "input.sh").unwrap_err();
/// assert_eq!(err.to_string(), "input.sh:1:11: expected `}`, found end of input");
/// # Ok::<(), shtree_syntax::ParseError>(())
/// ```
pub fn parse(source: &str, name: &str) -> Result<Node, ParseError> {
    Parser::parse(source, name)
}
