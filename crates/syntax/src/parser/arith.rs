// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arithmetic expressions, by precedence climbing.
//!
//! Levels from loosest to tightest: comma, assignment, ternary, the binary
//! table below, `**`, prefix operators, then primaries with an optional
//! postfix `++`/`--`. Callers activate the arithmetic rule set.

use super::words::strip_dollar;
use super::Parser;
use crate::ast::Node;
use crate::parse_error::ParseError;
use crate::token::TokenKind;

/// Left-associative binary operators, loosest first.
const BINARY_LEVELS: &[&[TokenKind]] = &[
    &[TokenKind::OrOr],
    &[TokenKind::AndAnd],
    &[TokenKind::Pipe],
    &[TokenKind::Caret],
    &[TokenKind::Amp],
    &[TokenKind::EqEq, TokenKind::NotEq],
    &[TokenKind::Lt, TokenKind::Le, TokenKind::Gt, TokenKind::Ge],
    &[TokenKind::Shl, TokenKind::Shr],
    &[TokenKind::Plus, TokenKind::Minus],
    &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
];

const ASSIGN_OPS: &[TokenKind] = &[
    TokenKind::Assign,
    TokenKind::MulAssign,
    TokenKind::DivAssign,
    TokenKind::ModAssign,
    TokenKind::AddAssign,
    TokenKind::SubAssign,
    TokenKind::ShlAssign,
    TokenKind::ShrAssign,
    TokenKind::AndAssign,
    TokenKind::XorAssign,
    TokenKind::OrAssign,
];

const PREFIX_OPS: &[TokenKind] = &[
    TokenKind::Bang,
    TokenKind::Tilde,
    TokenKind::Minus,
    TokenKind::Plus,
    TokenKind::Inc,
    TokenKind::Dec,
];

const PRIMARY: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::Ident,
    TokenKind::DollarName,
    TokenKind::LParen,
    TokenKind::DollarBrace,
    TokenKind::DollarParen2,
    TokenKind::DollarParen,
];

fn binary(op: String, left: Node, right: Node) -> Node {
    Node::BinOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

impl Parser<'_> {
    /// Parse a full expression, comma operator included.
    pub(super) fn parse_arith(&mut self) -> Result<Node, ParseError> {
        self.folding(|p| {
            let mut left = p.arith_assign()?;
            while let Some(op) = p.lexer.next(&[TokenKind::Comma])? {
                p.descend()?;
                let right = p.arith_assign()?;
                left = binary(op.body, left, right);
            }
            Ok(left)
        })
    }

    /// `name op= expr`, right-associative. Anything else falls through to
    /// the ternary level.
    fn arith_assign(&mut self) -> Result<Node, ParseError> {
        if let Some(name) = self.lexer.next(&[TokenKind::Ident])? {
            if let Some(op) = self.lexer.next(ASSIGN_OPS)? {
                let value = self.nested(|p| p.arith_assign())?;
                let target = Node::Var {
                    name: name.body,
                    dollar: false,
                };
                return Ok(binary(op.body, target, value));
            }
            self.lexer.back();
        }
        self.arith_ternary()
    }

    fn arith_ternary(&mut self) -> Result<Node, ParseError> {
        let cond = self.arith_binary(0)?;
        if self.lexer.next(&[TokenKind::Question])?.is_none() {
            return Ok(cond);
        }
        let then_branch = self.nested(|p| p.parse_arith())?;
        if self.lexer.next(&[TokenKind::Colon])?.is_none() {
            return Err(self.expected("`:`"));
        }
        let else_branch = self.nested(|p| p.arith_ternary())?;
        Ok(Node::Ternary {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    /// Binary operators from row `min` of [`BINARY_LEVELS`] inward.
    ///
    /// Operands bind to the tightest row first; an operator on row `n`
    /// takes everything from rows past `n` as its right operand, so equal
    /// rows fold left.
    fn arith_binary(&mut self, min: usize) -> Result<Node, ParseError> {
        self.folding(|p| {
            let mut left = p.arith_power()?;
            while let Some(level) = p.binary_level(min)? {
                let Some(op) = p.lexer.next(&[])? else {
                    break;
                };
                p.descend()?;
                let right = p.arith_binary(level + 1)?;
                left = binary(op.body, left, right);
            }
            Ok(left)
        })
    }

    /// Row of the binary operator at the cursor, if it binds at `min` or
    /// tighter.
    fn binary_level(&mut self, min: usize) -> Result<Option<usize>, ParseError> {
        let Some(token) = self.lexer.peek(&[])? else {
            return Ok(None);
        };
        Ok(BINARY_LEVELS
            .iter()
            .position(|ops| ops.contains(&token.kind))
            .filter(|&level| level >= min))
    }

    /// `a ** b ** c` is `a ** (b ** c)`.
    fn arith_power(&mut self) -> Result<Node, ParseError> {
        let base = self.arith_unary()?;
        match self.lexer.next(&[TokenKind::StarStar])? {
            Some(op) => {
                let exponent = self.nested(|p| p.arith_power())?;
                Ok(binary(op.body, base, exponent))
            }
            None => Ok(base),
        }
    }

    fn arith_unary(&mut self) -> Result<Node, ParseError> {
        match self.lexer.next(PREFIX_OPS)? {
            Some(op) => {
                let operand = self.nested(|p| p.arith_unary())?;
                Ok(Node::UnOp {
                    op: op.body,
                    operand: Box::new(operand),
                })
            }
            None => self.arith_postfix(),
        }
    }

    fn arith_postfix(&mut self) -> Result<Node, ParseError> {
        let operand = self.arith_primary()?;
        match self.lexer.next(&[TokenKind::Inc, TokenKind::Dec])? {
            Some(op) => Ok(Node::PostOp {
                op: op.body,
                operand: Box::new(operand),
            }),
            None => Ok(operand),
        }
    }

    fn arith_primary(&mut self) -> Result<Node, ParseError> {
        let Some(token) = self.lexer.next(PRIMARY)? else {
            return Err(self.expected("expression"));
        };
        match token.kind {
            TokenKind::Number => Ok(Node::Number { value: token.body }),
            TokenKind::Ident => Ok(Node::Var {
                name: token.body,
                dollar: false,
            }),
            TokenKind::DollarName => Ok(Node::Var {
                name: strip_dollar(&token.body).to_string(),
                dollar: true,
            }),
            TokenKind::LParen => self.nested(|p| {
                let body = p.parse_arith()?;
                if p.lexer.next(&[TokenKind::RParen])?.is_none() {
                    return Err(p.expected("`)`"));
                }
                Ok(Node::Parentheses {
                    body: Box::new(body),
                })
            }),
            TokenKind::DollarBrace => self.nested(|p| p.parse_param()),
            TokenKind::DollarParen2 => self.nested(|p| p.parse_arith_expansion()),
            TokenKind::DollarParen => {
                let body = self.nested(|p| p.parse_nested_list(TokenKind::RParen, false))?;
                Ok(Node::CommandSubst {
                    style: token.body,
                    body: Box::new(body),
                })
            }
            _ => {
                self.lexer.back();
                Err(self.expected("expression"))
            }
        }
    }
}
