// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use std::fmt;

pub use crate::span::Span;

/// Lexical category of a token.
///
/// Operators shared between the command grammar and arithmetic reuse one
/// kind (`|` is both a pipe and bitwise OR, `&` both background and bitwise
/// AND); which one applies depends on the active rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Words and word introducers
    /// Bare literal text.
    Str,
    /// Complete single-quoted string, delimiters included.
    SQuote,
    /// `"` opening or closing a double-quoted string.
    DQuote,
    /// `$name`, `$1` or a special parameter such as `$?`.
    DollarName,
    /// `${`
    DollarBrace,
    /// `$(`
    DollarParen,
    /// `$((`
    DollarParen2,
    /// `` ` ``
    BQuote,
    /// `<(`
    InParen,
    /// `>(`
    OutParen,

    // Control operators
    Newline,
    Semi,
    Amp,
    AndAnd,
    OrOr,
    Pipe,
    PipeAmp,
    LParen,
    RParen,

    // Parameter expansion
    /// Parameter name or special-parameter glyph inside `${...}`.
    Name,
    /// `[@]`
    BracketAt,
    /// `[*]`
    BracketStar,
    LBracket,
    RBracket,
    RBrace,
    /// `/` terminating a substitution pattern.
    Slash,
    /// Any other single character inside `${...}`.
    Glyph,
    /// `#` length marker.
    Sharp,
    /// `!` indirection or logical negation.
    Bang,
    /// Operator text recognized by a speculative match.
    Op,
    /// `name=` at the head of an assignment.
    AssignHead,

    // Arithmetic
    Number,
    Ident,
    Comma,
    Assign,
    MulAssign,
    DivAssign,
    ModAssign,
    AddAssign,
    SubAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    XorAssign,
    OrAssign,
    Question,
    Colon,
    Caret,
    EqEq,
    NotEq,
    Le,
    Ge,
    Lt,
    Gt,
    Shl,
    Shr,
    Plus,
    Minus,
    Star,
    Percent,
    StarStar,
    Tilde,
    Inc,
    Dec,

    /// End of source.
    Eos,
}

/// A lexical unit.
///
/// `blank` holds the spaces, tabs, line continuations and comments skipped
/// right before the token. Adjacency rules (assignment values, word pieces,
/// `${...}` internals) test it for emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub body: String,
    pub blank: String,
    /// 1-indexed line of the token body.
    pub line: usize,
    /// 1-indexed column of the token body.
    pub col: usize,
    /// Byte range of the token body.
    pub span: Span,
    /// Scan position before the blank, for re-tokenization.
    pub(crate) origin: ScanPos,
}

impl Token {
    /// Returns true if the token is not preceded by blank text.
    #[inline]
    pub fn is_adjacent(&self) -> bool {
        self.blank.is_empty()
    }

    /// Textual form used in syntax fault messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eos => "end of input".to_string(),
            TokenKind::Newline => "newline".to_string(),
            _ => format!("`{}`", self.body),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {:?} {:?}", self.line, self.col, self.kind, self.body)
    }
}

/// A raw scan position: byte offset plus the line/column it corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanPos {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ScanPos {
    pub(crate) fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            col: 1,
        }
    }

    /// Advance over `text`, tracking line and column.
    pub(crate) fn advance(&mut self, text: &str) {
        self.offset += text.len();
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }
}

/// Check if a string is a valid shell variable name.
///
/// Variable names start with `[a-zA-Z_]` and contain only `[a-zA-Z0-9_]`.
pub fn is_valid_variable_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
