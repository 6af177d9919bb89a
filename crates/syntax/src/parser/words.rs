// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word parsing: pieces, adjacency, quoting and substitutions.

use super::Parser;
use crate::ast::Node;
use crate::lexer::{anchored, Rules};
use crate::parse_error::ParseError;
use crate::token::TokenKind;
use regex::Regex;
use std::sync::LazyLock;

static ARITH_CLOSE: LazyLock<Regex> = LazyLock::new(|| anchored(r"\)\)"));

/// Tokens that can start a word piece.
const WORD_START: &[TokenKind] = &[
    TokenKind::Str,
    TokenKind::SQuote,
    TokenKind::DQuote,
    TokenKind::DollarName,
    TokenKind::DollarBrace,
    TokenKind::DollarParen,
    TokenKind::DollarParen2,
    TokenKind::BQuote,
    TokenKind::InParen,
    TokenKind::OutParen,
];

/// Inside a backquoted substitution a backquote closes the list.
const WORD_START_IN_BACKQUOTE: &[TokenKind] = &[
    TokenKind::Str,
    TokenKind::SQuote,
    TokenKind::DQuote,
    TokenKind::DollarName,
    TokenKind::DollarBrace,
    TokenKind::DollarParen,
    TokenKind::DollarParen2,
    TokenKind::InParen,
    TokenKind::OutParen,
];

impl Parser<'_> {
    pub(super) fn word_start(&self) -> &'static [TokenKind] {
        if self.in_backquote {
            WORD_START_IN_BACKQUOTE
        } else {
            WORD_START
        }
    }

    /// Parse one word if one starts at the cursor.
    ///
    /// Pieces that follow without intervening blank belong to the same
    /// word; a multi-piece word becomes a `concat` node.
    pub(super) fn parse_word(&mut self) -> Result<Option<Node>, ParseError> {
        let Some(first) = self.parse_piece(false)? else {
            return Ok(None);
        };
        let mut rest = Vec::new();
        while let Some(piece) = self.parse_piece(true)? {
            rest.push(piece);
        }
        if rest.is_empty() {
            return Ok(Some(first));
        }
        rest.insert(0, first);
        Ok(Some(Node::Concat { body: rest }))
    }

    /// Parse a word, or the empty marker when none is written. Used for
    /// `${...}` payloads terminated per `rules`.
    pub(super) fn parse_payload(&mut self, rules: Rules) -> Result<Node, ParseError> {
        let word = self.with_rules(rules, true, |p| p.parse_word())?;
        Ok(word.unwrap_or(Node::Empty))
    }

    fn parse_piece(&mut self, adjacent: bool) -> Result<Option<Node>, ParseError> {
        let kinds = self.word_start();
        let token = if adjacent {
            self.lexer.peek_adjacent(kinds)?
        } else {
            self.lexer.peek(kinds)?
        };
        let Some(token) = token else {
            return Ok(None);
        };
        self.lexer.next(&[])?;

        let node = match token.kind {
            TokenKind::Str => Node::Str { body: token.body },
            TokenKind::SQuote => Node::SStr {
                body: unquote(&token.body).to_string(),
            },
            TokenKind::DollarName => Node::SimpleParamEx {
                body: strip_dollar(&token.body).to_string(),
            },
            TokenKind::DQuote => self.nested(|p| p.parse_dquote())?,
            TokenKind::DollarBrace => self.nested(|p| p.parse_param())?,
            TokenKind::DollarParen2 => self.nested(|p| p.parse_arith_expansion())?,
            TokenKind::DollarParen => Node::CommandSubst {
                style: token.body,
                body: Box::new(self.nested(|p| p.parse_nested_list(TokenKind::RParen, false))?),
            },
            TokenKind::BQuote => Node::CommandSubst {
                style: token.body,
                body: Box::new(self.nested(|p| p.parse_nested_list(TokenKind::BQuote, true))?),
            },
            TokenKind::InParen | TokenKind::OutParen => Node::ProcessSubst {
                direction: token.body.trim_end_matches('(').to_string(),
                body: Box::new(self.nested(|p| p.parse_nested_list(TokenKind::RParen, false))?),
            },
            _ => {
                self.lexer.back();
                return Ok(None);
            }
        };
        Ok(Some(node))
    }

    /// Parse the rest of a double-quoted string after its opening `"`.
    fn parse_dquote(&mut self) -> Result<Node, ParseError> {
        self.with_rules(Rules::DoubleQuote, true, |p| {
            let mut body = Vec::new();
            while p.lexer.next(&[TokenKind::DQuote])?.is_none() {
                match p.parse_piece(false)? {
                    Some(piece) => body.push(piece),
                    None => return Err(p.expected("`\"`")),
                }
            }
            Ok(Node::DQuote { body })
        })
    }

    /// Parse `expr))` after a `$((` opener.
    pub(super) fn parse_arith_expansion(&mut self) -> Result<Node, ParseError> {
        let body = self.with_rules(Rules::Arith, true, |p| {
            let body = p.parse_arith()?;
            if p.lexer.accept(&ARITH_CLOSE, TokenKind::RParen).is_none() {
                return Err(p.expected("`))`"));
            }
            Ok(body)
        })?;
        Ok(Node::ArithEx {
            body: Box::new(body),
        })
    }

    /// Parse a command list up to `closer` under command rules.
    pub(super) fn parse_nested_list(
        &mut self,
        closer: TokenKind,
        in_backquote: bool,
    ) -> Result<Node, ParseError> {
        let saved = std::mem::replace(&mut self.in_backquote, in_backquote);
        let result = self.with_rules(Rules::Command, true, |p| p.parse_list(closer));
        self.in_backquote = saved;
        result
    }
}

pub(super) fn strip_dollar(body: &str) -> &str {
    body.strip_prefix('$').unwrap_or(body)
}

/// Strip the delimiters of a single-quoted string.
fn unquote(body: &str) -> &str {
    body.strip_prefix('\'')
        .and_then(|b| b.strip_suffix('\''))
        .unwrap_or(body)
}
