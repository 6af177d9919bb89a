// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error types.

use crate::span::Span;
use thiserror::Error;

/// Lexical faults.
///
/// Raised when no rule of the active rule set matches at the scan
/// position. Always fatal to the current parse call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No rule matched the character at the scan position.
    #[error("{name}:{line}:{col}: unrecognized character {found:?}")]
    UnrecognizedChar {
        /// Label of the source being tokenized.
        name: String,
        /// The offending character.
        found: char,
        /// 1-indexed line.
        line: usize,
        /// 1-indexed column.
        col: usize,
        /// Byte range of the offending character.
        span: Span,
    },
}

impl LexError {
    /// Get the span of the offending input.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedChar { span, .. } => *span,
        }
    }

    /// Get the 1-indexed (line, column) of the offending input.
    pub fn position(&self) -> (usize, usize) {
        match self {
            LexError::UnrecognizedChar { line, col, .. } => (*line, *col),
        }
    }
}
