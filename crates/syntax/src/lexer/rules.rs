// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rule sets: ordered pattern tables that drive tokenization.
//!
//! Rules are tried in declaration order and the first match wins, so more
//! specific operators precede shorter ones and bare text comes last,
//! excluding every delimiter of its context.

use crate::token::TokenKind;
use regex::Regex;
use std::sync::LazyLock;

/// Lexical context selectable by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rules {
    /// Command lists: words, quotes, control operators.
    Command,
    /// Inside `${...}`.
    Param,
    /// Inside `$((...))`, subscripts and substring offsets.
    Arith,
    /// Inside `"..."`.
    DoubleQuote,
    /// Parameter payload words terminated by `}`.
    WordUntilBrace,
    /// Substitution patterns terminated by `/` (or `}`).
    WordUntilSlash,
}

impl Rules {
    /// Name used in trace output.
    pub fn name(self) -> &'static str {
        self.set().name
    }

    pub(crate) fn set(self) -> &'static RuleSet {
        match self {
            Rules::Command => &COMMAND,
            Rules::Param => &PARAM,
            Rules::Arith => &ARITH,
            Rules::DoubleQuote => &DOUBLE_QUOTE,
            Rules::WordUntilBrace => &WORD_UNTIL_BRACE,
            Rules::WordUntilSlash => &WORD_UNTIL_SLASH,
        }
    }
}

pub(crate) struct Rule {
    pub pattern: Regex,
    pub kind: TokenKind,
}

pub(crate) struct RuleSet {
    pub name: &'static str,
    /// Pattern for blank skipped before each token; `None` keeps blanks
    /// significant (they become part of bare text).
    pub blank: Option<&'static Regex>,
    /// Whether `#` at a word boundary starts a comment.
    pub comments: bool,
    pub rules: Vec<Rule>,
}

/// Compile a pattern anchored at the scan position.
// Allow expect here as every caller passes a constant pattern
#[allow(clippy::expect_used)]
pub(crate) fn anchored(src: &str) -> Regex {
    Regex::new(&format!("^(?:{src})")).expect("constant regex pattern is valid")
}

fn build(
    name: &'static str,
    blank: Option<&'static Regex>,
    comments: bool,
    table: &[(&str, TokenKind)],
) -> RuleSet {
    RuleSet {
        name,
        blank,
        comments,
        rules: table
            .iter()
            .map(|(src, kind)| Rule {
                pattern: anchored(src),
                kind: *kind,
            })
            .collect(),
    }
}

static INLINE_BLANK: LazyLock<Regex> = LazyLock::new(|| anchored(r"(?:[ \t]|\\\n)+"));
static MULTILINE_BLANK: LazyLock<Regex> = LazyLock::new(|| anchored(r"(?:[ \t\n]|\\\n)+"));
pub(crate) static COMMENT: LazyLock<Regex> = LazyLock::new(|| anchored(r"#[^\n]*"));

const DOLLAR_NAME: &str = r"\$(?:[A-Za-z_][A-Za-z0-9_]*|[0-9]|[-*@#?$!])";

static COMMAND: LazyLock<RuleSet> = LazyLock::new(|| {
    use TokenKind::*;
    build(
        "command",
        Some(&*INLINE_BLANK),
        true,
        &[
            (r"\n", Newline),
            (";", Semi),
            ("&&", AndAnd),
            (r"\|\|", OrOr),
            (r"\|&", PipeAmp),
            (r"\|", Pipe),
            ("&", Amp),
            (r"\$\(\(", DollarParen2),
            (r"\$\(", DollarParen),
            (r"\$\{", DollarBrace),
            (DOLLAR_NAME, DollarName),
            ("'[^']*'", SQuote),
            ("\"", DQuote),
            ("`", BQuote),
            (r"<\(", InParen),
            (r">\(", OutParen),
            (r"\(", LParen),
            (r"\)", RParen),
            (r#"(?:[^\s|&;()<>$`'"\\]|\\(?s:.))+"#, Str),
            (r"\$", Str),
        ],
    )
});

static PARAM: LazyLock<RuleSet> = LazyLock::new(|| {
    use TokenKind::*;
    build(
        "param",
        Some(&*INLINE_BLANK),
        false,
        &[
            (r"[0-9]+|[A-Za-z_][A-Za-z0-9_]*|[-*@#?$!]", Name),
            (r"\[@\]", BracketAt),
            (r"\[\*\]", BracketStar),
            (r"\[", LBracket),
            (r"\}", RBrace),
            (r"(?s:.)", Glyph),
        ],
    )
});

static ARITH: LazyLock<RuleSet> = LazyLock::new(|| {
    use TokenKind::*;
    build(
        "arith",
        Some(&*MULTILINE_BLANK),
        false,
        &[
            (r"0[xX][0-9A-Fa-f]+|[0-9]+#[0-9A-Za-z@_]+|[0-9]+", Number),
            (r"[A-Za-z_][A-Za-z0-9_]*", Ident),
            (r"\$\(\(", DollarParen2),
            (r"\$\(", DollarParen),
            (r"\$\{", DollarBrace),
            (DOLLAR_NAME, DollarName),
            ("<<=", ShlAssign),
            (">>=", ShrAssign),
            (r"\*\*", StarStar),
            (r"\+\+", Inc),
            ("--", Dec),
            ("<<", Shl),
            (">>", Shr),
            ("<=", Le),
            (">=", Ge),
            ("==", EqEq),
            ("!=", NotEq),
            ("&&", AndAnd),
            (r"\|\|", OrOr),
            (r"\*=", MulAssign),
            ("/=", DivAssign),
            ("%=", ModAssign),
            (r"\+=", AddAssign),
            ("-=", SubAssign),
            ("&=", AndAssign),
            (r"\^=", XorAssign),
            (r"\|=", OrAssign),
            ("=", Assign),
            (r"\?", Question),
            (":", Colon),
            (",", Comma),
            (r"\|", Pipe),
            (r"\^", Caret),
            ("&", Amp),
            ("<", Lt),
            (">", Gt),
            (r"\+", Plus),
            ("-", Minus),
            (r"\*", Star),
            ("/", Slash),
            ("%", Percent),
            ("!", Bang),
            ("~", Tilde),
            (r"\(", LParen),
            (r"\)", RParen),
            (r"\]", RBracket),
            (r"\}", RBrace),
        ],
    )
});

static DOUBLE_QUOTE: LazyLock<RuleSet> = LazyLock::new(|| {
    use TokenKind::*;
    build(
        "double-quote",
        None,
        false,
        &[
            (r"\$\(\(", DollarParen2),
            (r"\$\(", DollarParen),
            (r"\$\{", DollarBrace),
            (DOLLAR_NAME, DollarName),
            ("`", BQuote),
            ("\"", DQuote),
            (r#"(?:[^"$`\\]|\\(?s:.))+"#, Str),
            (r"\$", Str),
        ],
    )
});

static WORD_UNTIL_BRACE: LazyLock<RuleSet> = LazyLock::new(|| {
    use TokenKind::*;
    build(
        "word-until-brace",
        None,
        false,
        &[
            (r"\$\(\(", DollarParen2),
            (r"\$\(", DollarParen),
            (r"\$\{", DollarBrace),
            (DOLLAR_NAME, DollarName),
            ("`", BQuote),
            ("'[^']*'", SQuote),
            ("\"", DQuote),
            (r"\}", RBrace),
            (r#"(?:[^}$`'"\\]|\\(?s:.))+"#, Str),
            (r"\$", Str),
        ],
    )
});

static WORD_UNTIL_SLASH: LazyLock<RuleSet> = LazyLock::new(|| {
    use TokenKind::*;
    build(
        "word-until-slash",
        None,
        false,
        &[
            (r"\$\(\(", DollarParen2),
            (r"\$\(", DollarParen),
            (r"\$\{", DollarBrace),
            (DOLLAR_NAME, DollarName),
            ("`", BQuote),
            ("'[^']*'", SQuote),
            ("\"", DQuote),
            ("/", Slash),
            (r"\}", RBrace),
            (r#"(?:[^/}$`'"\\]|\\(?s:.))+"#, Str),
            (r"\$", Str),
        ],
    )
});
