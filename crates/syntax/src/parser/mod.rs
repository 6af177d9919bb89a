// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser producing a [`Node`] tree.
//!
//! The parser pulls tokens from a [`Lexer`] and switches its rule set
//! whenever it enters a new lexical context: parameter expansions,
//! arithmetic, double quotes, payload words and nested command lists.
//! Grammar productions are split by area:
//!
//! - this module: lists, pipelines, simple commands and assignments
//! - `words`: word pieces, quoting and substitutions
//! - `param`: the `${...}` family
//! - `arith`: arithmetic expressions

mod arith;
mod param;
mod words;

use crate::ast::Node;
use crate::lexer::{anchored, Lexer, Rules};
use crate::parse_error::ParseError;
use crate::token::{Token, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

/// `name=` at the start of a simple command.
static ASSIGN_HEAD: LazyLock<Regex> = LazyLock::new(|| anchored(r"[A-Za-z_][A-Za-z0-9_]*="));

const TERMINALS: &[TokenKind] = &[TokenKind::Semi, TokenKind::Newline, TokenKind::Amp];

/// Parser configuration.
///
/// # Examples
///
/// ```ignore
/// use shtree_syntax::{ParseOptions, Parser};
///
/// let options = ParseOptions { max_depth: 4 };
/// let result = Parser::parse_with_options("echo $(a $(b $(c $(d $(e)))))", "input.sh", options);
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of substitutions, expansions, arithmetic groups and
    /// operator chains (0 = unlimited).
    ///
    /// Every operator folded into a left-associative chain (`|`, `&&`,
    /// `||`, binary and comma arithmetic) counts as one level until the
    /// chain ends, since each fold deepens the tree by one node. The
    /// default leaves headroom on a 2 MiB thread stack in debug builds.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Shell parser.
///
/// One parser instance is created per source buffer by [`Parser::parse`]
/// and discarded when the parse completes or fails.
///
/// # Examples
///
/// ```ignore
/// use shtree_syntax::Parser;
///
/// let ast = Parser::parse("a=1 echo ${a:-none} | wc -c", "input.sh")?;
/// assert_eq!(ast.tag(), "list");
/// assert_eq!(ast.count_simple_commands(), 2);
/// # Ok::<(), shtree_syntax::ParseError>(())
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Set while parsing the body of a backquoted substitution, where a
    /// backquote closes the list instead of opening a new word.
    in_backquote: bool,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Parse `source` into a [`Node::List`].
    ///
    /// `name` labels the source in error messages and is not interpreted.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use shtree_syntax::Parser;
    ///
    /// let ast = Parser::parse("foo;bar", "input.sh")?;
    /// assert_eq!(
    ///     ast.to_string(),
    ///     "(list (body [\
    ///      (pipelines (body (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body \"foo\"))]))))) (terminal \";\")) \
    ///      (pipelines (body (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body \"bar\"))]))))) (terminal nil))]))"
    /// );
    /// # Ok::<(), shtree_syntax::ParseError>(())
    /// ```
    pub fn parse(source: &'a str, name: &str) -> Result<Node, ParseError> {
        Self::parse_with_options(source, name, ParseOptions::default())
    }

    /// Parse with explicit options.
    pub fn parse_with_options(
        source: &'a str,
        name: &str,
        options: ParseOptions,
    ) -> Result<Node, ParseError> {
        tracing::debug!(name, bytes = source.len(), "parsing");
        let mut parser = Parser {
            lexer: Lexer::new(source, name),
            in_backquote: false,
            depth: 0,
            options,
        };
        let list = parser.parse_list(TokenKind::Eos)?;
        if let Node::List { body } = &list {
            tracing::debug!(name, entries = body.len(), "parsed");
        }
        Ok(list)
    }

    /// Parse pipelines until `closer`, then consume it.
    ///
    /// Grammar: newline* (pipelines newline*)* closer, where every entry
    /// but the last must carry a terminal.
    fn parse_list(&mut self, closer: TokenKind) -> Result<Node, ParseError> {
        let mut body = Vec::new();
        loop {
            self.skip_newlines()?;
            if self.lexer.peek(&[closer])?.is_some() {
                break;
            }
            let entry = self.parse_pipelines()?;
            let terminated = matches!(entry, Node::Pipelines { terminal: Some(_), .. });
            body.push(entry);
            if !terminated {
                break;
            }
        }

        if self.lexer.next(&[closer])?.is_none() {
            return Err(self.expected(closer_name(closer)));
        }
        Ok(Node::List { body })
    }

    /// Parse an and-or chain with its optional terminal (`;`, newline, `&`).
    fn parse_pipelines(&mut self) -> Result<Node, ParseError> {
        let body = self.parse_and_or()?;
        let terminal = self.lexer.next(TERMINALS)?.map(|t| t.body);
        Ok(Node::Pipelines {
            body: Box::new(body),
            terminal,
        })
    }

    /// Parse pipelines joined by `&&` / `||`, left-associative.
    fn parse_and_or(&mut self) -> Result<Node, ParseError> {
        self.folding(|p| {
            let mut left = p.parse_pipeline()?;
            while let Some(op) = p.lexer.next(&[TokenKind::AndAnd, TokenKind::OrOr])? {
                p.skip_newlines()?;
                p.descend()?;
                let right = p.parse_pipeline()?;
                left = Node::AndOr {
                    op: op.body,
                    left: Box::new(left),
                    right: Box::new(right),
                };
            }
            Ok(left)
        })
    }

    /// Parse `!`? command (('|' | '|&') command)*.
    ///
    /// Stages fold left: `a | b | c` is `pipe(pipe(a, b), c)`.
    fn parse_pipeline(&mut self) -> Result<Node, ParseError> {
        let excl = self.accept_bang()?;
        let body = self.folding(|p| {
            let mut body = p.parse_simple_command()?;
            while let Some(op) = p.lexer.next(&[TokenKind::Pipe, TokenKind::PipeAmp])? {
                p.skip_newlines()?;
                p.descend()?;
                let right = p.parse_simple_command()?;
                body = Node::Pipe {
                    op: op.body,
                    left: Box::new(body),
                    right: Box::new(right),
                };
            }
            Ok(body)
        })?;
        Ok(Node::Pipeline {
            excl,
            body: Box::new(body),
        })
    }

    /// Consume a standalone `!` word.
    fn accept_bang(&mut self) -> Result<bool, ParseError> {
        match self.lexer.peek(&[TokenKind::Str])? {
            Some(token) if token.body == "!" => {
                self.lexer.next(&[])?;
                // `!"x"` is one word, not a negation
                let kinds = self.word_start();
                if self.lexer.peek_adjacent(kinds)?.is_some() {
                    self.lexer.back();
                    return Ok(false);
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Parse assignment* word*, requiring at least one of either.
    fn parse_simple_command(&mut self) -> Result<Node, ParseError> {
        let mut assigns = Vec::new();
        while let Some(head) = self.lexer.accept(&ASSIGN_HEAD, TokenKind::AssignHead) {
            let name = head.body.trim_end_matches('=').to_string();
            // The value must touch the `=`; `a= foo` assigns nothing.
            let value = self.with_rules(Rules::Command, false, |p| p.parse_word())?;
            assigns.push(Node::Assign {
                name,
                value: value.map(Box::new),
            });
        }

        let mut body = Vec::new();
        while let Some(word) = self.parse_word()? {
            body.push(word);
        }

        if assigns.is_empty() && body.is_empty() {
            return Err(self.expected("command"));
        }
        Ok(Node::SimpleCommand { assigns, body })
    }

    fn skip_newlines(&mut self) -> Result<(), ParseError> {
        while self.lexer.next(&[TokenKind::Newline])?.is_some() {}
        Ok(())
    }

    /// Run `f` with `rules` active, restoring the previous rule set on
    /// every exit path.
    ///
    /// Same contract as [`Lexer::use_rules`], except that `f` borrows the
    /// whole parser rather than just the lexer.
    fn with_rules<T>(
        &mut self,
        rules: Rules,
        allow_blank: bool,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.lexer.push_rules(rules, allow_blank);
        let result = f(self);
        self.lexer.pop_rules();
        result
    }

    /// Run `f` one nesting level deeper, failing once the configured
    /// maximum depth is reached.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.descend()?;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Run a left-associative chain. Levels taken by [`Parser::descend`]
    /// inside `f` are released when it returns.
    fn folding<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let base = self.depth;
        let result = f(self);
        self.depth = base;
        result
    }

    /// Take one nesting level, failing once the configured maximum is
    /// reached.
    fn descend(&mut self) -> Result<(), ParseError> {
        let max = self.options.max_depth;
        if max != 0 && self.depth >= max {
            return Err(self.too_deep());
        }
        self.depth += 1;
        Ok(())
    }

    /// Build a syntax fault describing the token at the cursor.
    fn expected(&mut self, what: &str) -> ParseError {
        match self.lexer.peek_any() {
            Ok(token) => ParseError::Syntax {
                name: self.lexer.name().to_string(),
                expected: what.to_string(),
                found: self.found(&token),
                line: token.line,
                col: token.col,
                span: token.span,
            },
            Err(e) => e.into(),
        }
    }

    /// Describe a rejected token, noting blank the active rule set refuses.
    fn found(&self, token: &Token) -> String {
        let described = token.describe();
        if token.kind == TokenKind::Eos || token.is_adjacent() || self.lexer.allow_blank() {
            return described;
        }
        format!("{described} after blank")
    }

    fn too_deep(&mut self) -> ParseError {
        match self.lexer.peek_any() {
            Ok(token) => ParseError::TooDeep {
                name: self.lexer.name().to_string(),
                max: self.options.max_depth,
                line: token.line,
                col: token.col,
                span: token.span,
            },
            Err(e) => e.into(),
        }
    }
}

fn closer_name(closer: TokenKind) -> &'static str {
    match closer {
        TokenKind::RParen => "`)`",
        TokenKind::BQuote => "`` ` ``",
        TokenKind::Eos => "end of input",
        _ => "closing delimiter",
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
