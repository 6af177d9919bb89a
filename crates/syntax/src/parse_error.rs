// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::error::LexError;
use crate::span::{diagnostic_context, Span};
use thiserror::Error;

/// Parser errors.
///
/// Any of these aborts the whole parse call; no partial tree is returned.
/// Use [`ParseError::diagnostic`] to render a snippet pointing at the
/// offending input.
///
/// # Examples
///
/// ```ignore
/// use shtree_syntax::{parse, ParseError};
///
/// let result = parse("echo ${foo", "input.sh");
/// assert!(matches!(result, Err(ParseError::Syntax { .. })));
///
/// let result = parse("echo 'unterminated", "input.sh");
/// assert!(matches!(result, Err(ParseError::Lex(_))));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lexer error during tokenization.
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    /// A required token or terminator was absent.
    #[error("{name}:{line}:{col}: expected {expected}, found {found}")]
    Syntax {
        /// Label of the source being parsed.
        name: String,
        /// Description of what was expected.
        expected: String,
        /// Textual form of the token actually found.
        found: String,
        /// 1-indexed line of the found token.
        line: usize,
        /// 1-indexed column of the found token.
        col: usize,
        /// Source location of the found token.
        span: Span,
    },

    /// Nesting exceeded the configured maximum depth.
    #[error("{name}:{line}:{col}: nesting exceeds {max} levels")]
    TooDeep {
        /// Label of the source being parsed.
        name: String,
        /// The configured limit.
        max: usize,
        /// 1-indexed line where the limit was crossed.
        line: usize,
        /// 1-indexed column where the limit was crossed.
        col: usize,
        /// Source location where the limit was crossed.
        span: Span,
    },
}

impl ParseError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span(),
            ParseError::Syntax { span, .. } | ParseError::TooDeep { span, .. } => *span,
        }
    }

    /// Get the 1-indexed (line, column) associated with this error.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Lex(e) => e.position(),
            ParseError::Syntax { line, col, .. } | ParseError::TooDeep { line, col, .. } => {
                (*line, *col)
            }
        }
    }

    /// Returns true for lexical faults.
    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lex(_))
    }

    /// Generate a rich diagnostic with line/column info.
    ///
    /// `source` must be the text that was parsed.
    pub fn diagnostic(&self, source: &str) -> String {
        let (line, col) = self.position();
        diagnostic_context(source, self.span(), line, col, &self.to_string())
    }
}
