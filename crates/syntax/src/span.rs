// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking and diagnostic rendering.

use serde::{Deserialize, Serialize};

/// A byte range in the source text.
///
/// Spans use byte offsets for efficient slicing and work with UTF-8 source.
///
/// # Examples
///
/// ```ignore
/// use shtree_syntax::Span;
///
/// let source = "echo hello";
/// let span = Span::new(5, 10);
/// assert_eq!(span.slice(source), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start to end byte positions.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Return the content of a 1-indexed line, without its trailing newline.
///
/// Lines past the end of the source yield an empty string.
pub fn source_line(source: &str, line: usize) -> &str {
    source
        .split('\n')
        .nth(line.saturating_sub(1))
        .unwrap_or("")
}

/// Generate a rich diagnostic message with line/column info.
///
/// Line and column are 1-indexed, as carried by tokens. The caret run covers
/// the span but never extends past the end of the reported line.
///
/// ```text
/// error: input.sh:1:11: expected `}`, found end of input
///   --> line 1, column 11
///     |
///   1 | echo ${foo
///     |           ^
/// ```
pub fn diagnostic_context(
    source: &str,
    span: Span,
    line: usize,
    col: usize,
    message: &str,
) -> String {
    let content = source_line(source, line);
    let col0 = col.saturating_sub(1);
    let room = content.chars().count().saturating_sub(col0);
    let caret_len = span.len().min(room).max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n    |\n{:>3} | {}\n    | {}{}",
        message,
        line,
        col,
        line,
        content,
        " ".repeat(col0),
        "^".repeat(caret_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
