// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter expansion: everything between `${` and `}`.
//!
//! Each form is recognized by the text right after the parameter name.
//! Introducers are matched speculatively against the raw source, so at most
//! one alternative consumes input and no backtracking across forms is
//! needed.

use super::Parser;
use crate::ast::Node;
use crate::lexer::{anchored, Rules};
use crate::parse_error::ParseError;
use crate::token::{is_valid_variable_name, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

macro_rules! pattern {
    ($name:ident, $src:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| anchored($src));
    };
}

pattern!(SHARP, "#");
pattern!(BANG, "!");
pattern!(SUBST_OP, ":?[-=?+]");
pattern!(COLON, ":");
pattern!(PATTERN_RM, "##?|%%?");
pattern!(CASE_MOD, r"\^\^?|,,?");
pattern!(SLASH, "/");
pattern!(SUBST_MODE, "[/#%]");
pattern!(AT, "@");
pattern!(TRANS_OP, "[QEPAaUuLKk]");
pattern!(STAR, r"\*");
pattern!(RBRACKET, r"\]");
pattern!(RBRACE, r"\}");

impl Parser<'_> {
    /// Parse the rest of a parameter expansion after its `${` opener,
    /// including the closing `}`.
    pub(super) fn parse_param(&mut self) -> Result<Node, ParseError> {
        self.with_rules(Rules::Param, false, |p| {
            let (node, blank_before_close) = p.parse_param_body()?;
            let closed = if blank_before_close {
                p.lexer
                    .accept_with(&RBRACE, TokenKind::RBrace, true)
                    .is_some()
            } else {
                p.lexer.next(&[TokenKind::RBrace])?.is_some()
            };
            if !closed {
                return Err(p.expected("`}`"));
            }
            Ok(node)
        })
    }

    /// Returns the node and whether blank may precede the closing brace.
    fn parse_param_body(&mut self) -> Result<(Node, bool), ParseError> {
        let mut len = self.lexer.accept(&SHARP, TokenKind::Sharp).is_some();
        let mut reference = self.lexer.accept(&BANG, TokenKind::Bang).is_some();

        let body = match self.lexer.next(&[TokenKind::Name])? {
            Some(token) => token.body,
            // `${!}` and `${#}` name the special parameters themselves
            None if (reference || len) && self.closes()? => {
                if reference {
                    reference = false;
                    "!".to_string()
                } else {
                    len = false;
                    "#".to_string()
                }
            }
            None => return Err(self.expected("parameter name")),
        };

        // `${#name}` takes no operator; the caller requires `}` next
        if len {
            return Ok((Node::ParamLen { reference, body }, false));
        }

        if let Some(token) = self
            .lexer
            .next(&[TokenKind::BracketAt, TokenKind::BracketStar])?
        {
            let mode = token.body.trim_matches(|c| c == '[' || c == ']').to_string();
            let node = if reference {
                Node::ArrayKeys { array: body, mode }
            } else {
                Node::ArrayEx { array: body, mode }
            };
            return Ok((node, false));
        }

        if let Some(op) = self.lexer.accept(&SUBST_OP, TokenKind::Op) {
            let value = self.parse_payload(Rules::WordUntilBrace)?;
            return Ok((
                Node::ParamSubst {
                    reference,
                    body,
                    op: op.body,
                    value: Box::new(value),
                },
                false,
            ));
        }

        if self.lexer.accept(&COLON, TokenKind::Colon).is_some() {
            let offset = self.parse_arith_operand()?;
            let length = if self
                .lexer
                .accept_with(&COLON, TokenKind::Colon, true)
                .is_some()
            {
                self.parse_arith_operand()?
            } else {
                Node::Empty
            };
            return Ok((
                Node::Substr {
                    reference,
                    body,
                    offset: Box::new(offset),
                    length: Box::new(length),
                },
                true,
            ));
        }

        if let Some(mode) = self.lexer.accept(&PATTERN_RM, TokenKind::Op) {
            let pattern = self.parse_payload(Rules::WordUntilBrace)?;
            return Ok((
                Node::PatternRm {
                    reference,
                    body,
                    mode: mode.body,
                    pattern: Box::new(pattern),
                },
                false,
            ));
        }

        if let Some(mode) = self.lexer.accept(&CASE_MOD, TokenKind::Op) {
            let pattern = self.parse_payload(Rules::WordUntilBrace)?;
            return Ok((
                Node::CaseMod {
                    reference,
                    body,
                    mode: mode.body,
                    pattern: Box::new(pattern),
                },
                false,
            ));
        }

        if let Some(slash) = self.lexer.accept(&SLASH, TokenKind::Slash) {
            let mut mode = slash.body;
            if let Some(anchor) = self.lexer.accept(&SUBST_MODE, TokenKind::Op) {
                mode.push_str(&anchor.body);
            }
            let pattern = self.parse_payload(Rules::WordUntilSlash)?;
            let replace = match self.lexer.accept(&SLASH, TokenKind::Slash) {
                Some(_) => Some(Box::new(self.parse_payload(Rules::WordUntilBrace)?)),
                None => None,
            };
            return Ok((
                Node::PatternSubst {
                    reference,
                    body,
                    mode,
                    pattern: Box::new(pattern),
                    replace,
                },
                false,
            ));
        }

        if self.lexer.accept(&AT, TokenKind::Glyph).is_some() {
            if let Some(op) = self.lexer.accept(&TRANS_OP, TokenKind::Op) {
                return Ok((
                    Node::ParamTrans {
                        reference,
                        body,
                        op: op.body,
                    },
                    false,
                ));
            }
            return Ok((self.prefix_match(reference, body, "@")?, false));
        }

        if self.lexer.accept(&STAR, TokenKind::Glyph).is_some() {
            return Ok((self.prefix_match(reference, body, "*")?, false));
        }

        if self.lexer.next(&[TokenKind::LBracket])?.is_some() {
            let subscript = self.parse_arith_operand()?;
            if self
                .lexer
                .accept_with(&RBRACKET, TokenKind::RBracket, true)
                .is_none()
            {
                return Err(self.expected("`]`"));
            }
            return Ok((
                Node::ArrayAccess {
                    reference,
                    body,
                    subscript: Box::new(subscript),
                },
                false,
            ));
        }

        Ok((Node::ParamEx { reference, body }, false))
    }

    /// `${!prefix*}` / `${!prefix@}`: needs the indirection marker and a
    /// variable name.
    fn prefix_match(
        &mut self,
        reference: bool,
        prefix: String,
        mode: &str,
    ) -> Result<Node, ParseError> {
        if !reference {
            return Err(self.expected("`!` before prefix match"));
        }
        if !is_valid_variable_name(&prefix) {
            return Err(self.expected("variable name before prefix match"));
        }
        Ok(Node::PrefixEx {
            prefix,
            mode: mode.to_string(),
        })
    }

    /// Parse an arithmetic expression embedded in `${...}` (offsets,
    /// lengths, subscripts).
    fn parse_arith_operand(&mut self) -> Result<Node, ParseError> {
        self.with_rules(Rules::Arith, true, |p| p.parse_arith())
    }

    fn closes(&mut self) -> Result<bool, ParseError> {
        Ok(self.lexer.peek(&[TokenKind::RBrace])?.is_some())
    }
}
