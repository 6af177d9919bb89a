// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Context-sensitive lexer.
//!
//! Tokens are produced lazily into a buffer under whichever rule set is on
//! top of the rule-set stack. The parser moves a cursor over that buffer,
//! can step back one token, and switches lexical context with
//! [`Lexer::use_rules`]. Switching context drops buffered tokens the cursor
//! has not passed yet, so they are re-tokenized under the new rules; tokens
//! already consumed are never touched again.

mod rules;

pub use rules::Rules;
pub(crate) use rules::anchored;

use crate::error::LexError;
use crate::token::{ScanPos, Span, Token, TokenKind};
use regex::Regex;
use rules::COMMENT;

#[derive(Debug, Clone, Copy)]
struct Mode {
    rules: Rules,
    allow_blank: bool,
}

impl Mode {
    const DEFAULT: Mode = Mode {
        rules: Rules::Command,
        allow_blank: true,
    };
}

/// Snapshot of the lexer position, restorable with [`Lexer::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    scan: ScanPos,
    tokens: usize,
    next: usize,
}

/// Lexer over one source buffer.
///
/// # Examples
///
/// ```ignore
/// use shtree_syntax::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("foo | bar", "input.sh");
/// let foo = lexer.next(&[TokenKind::Str])?.unwrap();
/// assert_eq!(foo.body, "foo");
/// assert!(lexer.next(&[TokenKind::Pipe])?.is_some());
/// # Ok::<(), shtree_syntax::LexError>(())
/// ```
pub struct Lexer<'a> {
    source: &'a str,
    name: String,
    scan: ScanPos,
    tokens: Vec<Token>,
    next: usize,
    modes: Vec<Mode>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer in the command context.
    pub fn new(source: &'a str, name: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
            scan: ScanPos::start(),
            tokens: Vec::new(),
            next: 0,
            modes: vec![Mode::DEFAULT],
        }
    }

    /// Label of the source, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source text being tokenized.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The active rule set.
    pub fn rules(&self) -> Rules {
        self.mode().rules
    }

    /// Whether tokens preceded by blank are currently visible.
    pub fn allow_blank(&self) -> bool {
        self.mode().allow_blank
    }

    /// Number of active rule-set activations, including the base one.
    pub fn depth(&self) -> usize {
        self.modes.len()
    }

    /// Return the next token without consuming it.
    ///
    /// Yields `None` if its kind is not among `kinds` (an empty slice
    /// accepts any kind) or if it is preceded by blank while blanks are
    /// disallowed.
    pub fn peek(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>, LexError> {
        let allow_blank = self.mode().allow_blank;
        let token = self.fill()?;
        Ok(Self::matches(token, kinds, allow_blank).then(|| token.clone()))
    }

    /// Like [`Lexer::peek`], but consumes the token on success.
    pub fn next(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>, LexError> {
        let token = self.peek(kinds)?;
        if token.is_some() {
            self.next += 1;
        }
        Ok(token)
    }

    /// Return the next token whatever its kind or blank.
    pub fn peek_any(&mut self) -> Result<Token, LexError> {
        self.fill().cloned()
    }

    /// Return the next token only if it has one of `kinds` and no blank
    /// precedes it, regardless of the blank-allowance mode.
    pub fn peek_adjacent(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>, LexError> {
        let token = self.fill()?;
        Ok(Self::matches(token, kinds, false).then(|| token.clone()))
    }

    /// Step the cursor back over the last consumed token.
    ///
    /// # Panics
    ///
    /// Calling this with nothing consumed is a logic error.
    pub fn back(&mut self) {
        assert!(self.next > 0, "Lexer::back called at the start of the buffer");
        self.next -= 1;
    }

    /// True once the end-of-source token has been consumed.
    pub fn is_eos(&self) -> bool {
        self.next
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .is_some_and(|t| t.kind == TokenKind::Eos)
    }

    /// Speculatively match `pattern` against the raw source.
    ///
    /// Leading blank is skipped when the current mode allows it. On a match
    /// the text is recorded as a consumed token of `kind`; otherwise the
    /// lexer is left exactly where it was.
    pub fn accept(&mut self, pattern: &Regex, kind: TokenKind) -> Option<Token> {
        let allow_blank = self.mode().allow_blank;
        self.accept_with(pattern, kind, allow_blank)
    }

    /// [`Lexer::accept`] with an explicit blank allowance.
    pub fn accept_with(
        &mut self,
        pattern: &Regex,
        kind: TokenKind,
        allow_blank: bool,
    ) -> Option<Token> {
        self.discard_lookahead();
        let mark = self.mark();
        let origin = self.scan;
        let blank = self.skip_blank(false);
        if !blank.is_empty() && !allow_blank {
            self.reset(mark);
            return None;
        }

        let source = self.source;
        let rest = &source[self.scan.offset..];
        let len = match pattern.find(rest) {
            Some(m) if m.start() == 0 && !m.is_empty() => m.end(),
            _ => {
                self.reset(mark);
                return None;
            }
        };
        let token = self.make_token(kind, len, blank, origin);
        self.tokens.push(token.clone());
        self.next += 1;
        Some(token)
    }

    /// Run `f` with `rules` active, restoring the previous rule set and
    /// blank allowance on every exit path.
    ///
    /// `f` only sees the lexer; the parser keeps its own wrapper so the
    /// closure can reach parser state too.
    pub fn use_rules<T, E>(
        &mut self,
        rules: Rules,
        allow_blank: bool,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        self.push_rules(rules, allow_blank);
        let result = f(self);
        self.pop_rules();
        result
    }

    /// Snapshot the current position.
    pub fn mark(&self) -> Mark {
        Mark {
            scan: self.scan,
            tokens: self.tokens.len(),
            next: self.next,
        }
    }

    /// Return to a snapshot taken with [`Lexer::mark`], forgetting every
    /// token produced since.
    pub fn reset(&mut self, mark: Mark) {
        self.tokens.truncate(mark.tokens);
        self.next = mark.next;
        self.scan = mark.scan;
    }

    pub(crate) fn push_rules(&mut self, rules: Rules, allow_blank: bool) {
        self.discard_lookahead();
        self.modes.push(Mode { rules, allow_blank });
        tracing::trace!(
            rules = rules.name(),
            allow_blank,
            depth = self.modes.len(),
            "push rules"
        );
    }

    pub(crate) fn pop_rules(&mut self) {
        debug_assert!(self.modes.len() > 1, "rule-set stack underflow");
        if self.modes.len() > 1 {
            self.modes.pop();
        }
        self.discard_lookahead();
        tracing::trace!(
            rules = self.mode().rules.name(),
            depth = self.modes.len(),
            "pop rules"
        );
    }

    fn mode(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::DEFAULT)
    }

    fn matches(token: &Token, kinds: &[TokenKind], allow_blank: bool) -> bool {
        (kinds.is_empty() || kinds.contains(&token.kind)) && (allow_blank || token.is_adjacent())
    }

    /// Make sure a token exists at the cursor and return it.
    fn fill(&mut self) -> Result<&Token, LexError> {
        if self.next >= self.tokens.len() {
            self.produce()?;
        }
        Ok(&self.tokens[self.next])
    }

    /// Drop buffered tokens the cursor has not reached and rewind the scan
    /// position to where the first of them started.
    fn discard_lookahead(&mut self) {
        if let Some(first) = self.tokens.get(self.next) {
            let origin = first.origin;
            tracing::trace!(dropped = self.tokens.len() - self.next, "discard lookahead");
            self.tokens.truncate(self.next);
            self.scan = origin;
        }
    }

    fn produce(&mut self) -> Result<(), LexError> {
        let set = self.mode().rules.set();
        let origin = self.scan;
        let blank = self.skip_blank(set.comments);
        let source = self.source;
        let rest = &source[self.scan.offset..];

        let token = if rest.is_empty() {
            self.make_token(TokenKind::Eos, 0, blank, origin)
        } else {
            let matched = set.rules.iter().find_map(|rule| {
                rule.pattern
                    .find(rest)
                    .filter(|m| !m.is_empty())
                    .map(|m| (rule.kind, m.end()))
            });
            match matched {
                Some((kind, len)) => self.make_token(kind, len, blank, origin),
                None => {
                    let found = rest.chars().next().unwrap_or('\0');
                    let err = LexError::UnrecognizedChar {
                        name: self.name.clone(),
                        found,
                        line: self.scan.line,
                        col: self.scan.col,
                        span: Span::new(self.scan.offset, self.scan.offset + found.len_utf8()),
                    };
                    self.scan = origin;
                    return Err(err);
                }
            }
        };

        self.tokens.push(token);
        Ok(())
    }

    fn make_token(&mut self, kind: TokenKind, len: usize, blank: String, origin: ScanPos) -> Token {
        let start = self.scan;
        let body = self.source[start.offset..start.offset + len].to_string();
        self.scan.advance(&body);
        Token {
            kind,
            body,
            blank,
            line: start.line,
            col: start.col,
            span: Span::new(start.offset, self.scan.offset),
            origin,
        }
    }

    /// Consume blank per the active rule set and return it.
    fn skip_blank(&mut self, comments: bool) -> String {
        let set = self.mode().rules.set();
        let start = self.scan.offset;
        let source = self.source;
        let rest = &source[start..];

        let mut len = set
            .blank
            .and_then(|re| re.find(rest))
            .map(|m| m.end())
            .unwrap_or(0);
        if comments && rest[len..].starts_with('#') && (len > 0 || self.at_word_boundary(start)) {
            len += COMMENT.find(&rest[len..]).map(|m| m.end()).unwrap_or(0);
        }

        let blank = rest[..len].to_string();
        self.scan.advance(&blank);
        blank
    }

    fn at_word_boundary(&self, offset: usize) -> bool {
        self.source[..offset]
            .chars()
            .next_back()
            .map_or(true, |c| matches!(c, '\n' | ';' | '|' | '&' | '(' | ')' | '`'))
    }
}

#[cfg(test)]
#[path = "../lexer_tests.rs"]
mod tests;
