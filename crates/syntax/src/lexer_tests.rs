// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::LazyLock;

static ASSIGN_HEAD: LazyLock<Regex> = LazyLock::new(|| anchored(r"[A-Za-z_][A-Za-z0-9_]*="));

fn kinds(source: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(source, "test.sh");
    let mut out = Vec::new();
    loop {
        let token = lexer.next(&[]).unwrap().unwrap();
        if token.kind == TokenKind::Eos {
            break;
        }
        out.push((token.kind, token.body));
    }
    out
}

// =============================================================================
// Command Rules
// =============================================================================

#[test]
fn tokenizes_words_and_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("foo | bar && baz;qux &"),
        vec![
            (Str, "foo".to_string()),
            (Pipe, "|".to_string()),
            (Str, "bar".to_string()),
            (AndAnd, "&&".to_string()),
            (Str, "baz".to_string()),
            (Semi, ";".to_string()),
            (Str, "qux".to_string()),
            (Amp, "&".to_string()),
        ]
    );
}

#[test]
fn tokenizes_expansion_openers() {
    use TokenKind::*;
    let got: Vec<TokenKind> = kinds("$((1)) $(a) ${b} $c `d` <(e) >(f) 'g' \"")
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(got[0], DollarParen2);
    assert!(got.contains(&DollarParen));
    assert!(got.contains(&DollarBrace));
    assert!(got.contains(&DollarName));
    assert!(got.contains(&BQuote));
    assert!(got.contains(&InParen));
    assert!(got.contains(&OutParen));
    assert!(got.contains(&SQuote));
    assert_eq!(got.last(), Some(&DQuote));
}

#[test]
fn pipe_and_is_one_token() {
    assert_eq!(kinds("a |& b")[1], (TokenKind::PipeAmp, "|&".to_string()));
}

#[test]
fn blank_is_retained_on_token() {
    let mut lexer = Lexer::new("foo  \tbar", "test.sh");
    let foo = lexer.next(&[]).unwrap().unwrap();
    let bar = lexer.next(&[]).unwrap().unwrap();
    assert_eq!(foo.blank, "");
    assert_eq!(bar.blank, "  \t");
    assert_eq!(bar.col, 7);
    assert_eq!(bar.span, Span::new(6, 9));
}

#[test]
fn comment_is_folded_into_blank() {
    let mut lexer = Lexer::new("foo # note\nbar", "test.sh");
    lexer.next(&[]).unwrap();
    let newline = lexer.next(&[]).unwrap().unwrap();
    assert_eq!(newline.kind, TokenKind::Newline);
    assert_eq!(newline.blank, " # note");
    let bar = lexer.next(&[]).unwrap().unwrap();
    assert_eq!((bar.line, bar.col), (2, 1));
}

#[test]
fn hash_inside_word_is_not_a_comment() {
    assert_eq!(kinds("a#b"), vec![(TokenKind::Str, "a#b".to_string())]);
}

#[test]
fn line_continuation_is_blank() {
    let mut lexer = Lexer::new("foo \\\nbar", "test.sh");
    lexer.next(&[]).unwrap();
    let bar = lexer.next(&[]).unwrap().unwrap();
    assert_eq!(bar.body, "bar");
    assert_eq!(bar.blank, " \\\n");
    assert_eq!(bar.line, 2);
}

#[test]
fn unrecognized_character_is_lexical_error() {
    let mut lexer = Lexer::new("foo 'open", "test.sh");
    lexer.next(&[]).unwrap();
    let err = lexer.next(&[]).unwrap_err();
    assert_eq!(
        err,
        LexError::UnrecognizedChar {
            name: "test.sh".to_string(),
            found: '\'',
            line: 1,
            col: 5,
            span: Span::new(4, 5),
        }
    );
}

// =============================================================================
// Cursor, Lookahead and Rollback
// =============================================================================

#[test]
fn peek_filters_by_kind() {
    let mut lexer = Lexer::new("foo", "test.sh");
    assert!(lexer.peek(&[TokenKind::Pipe]).unwrap().is_none());
    assert!(lexer.peek(&[TokenKind::Pipe, TokenKind::Str]).unwrap().is_some());
    assert!(lexer.next(&[TokenKind::Str]).unwrap().is_some());
    assert_eq!(lexer.peek(&[]).unwrap().unwrap().kind, TokenKind::Eos);
}

#[test]
fn back_makes_token_available_again() {
    let mut lexer = Lexer::new("foo bar", "test.sh");
    let foo = lexer.next(&[]).unwrap().unwrap();
    lexer.back();
    assert_eq!(lexer.next(&[]).unwrap().unwrap(), foo);
}

#[test]
#[should_panic(expected = "start of the buffer")]
fn back_at_start_is_a_logic_error() {
    Lexer::new("foo", "test.sh").back();
}

#[test]
fn eos_only_after_consuming_end_token() {
    let mut lexer = Lexer::new("foo", "test.sh");
    lexer.next(&[]).unwrap();
    assert!(lexer.peek(&[TokenKind::Eos]).unwrap().is_some());
    assert!(!lexer.is_eos());
    lexer.next(&[TokenKind::Eos]).unwrap();
    assert!(lexer.is_eos());
}

#[test]
fn accept_consumes_raw_match() {
    let mut lexer = Lexer::new("a=1 foo", "test.sh");
    let head = lexer.accept(&ASSIGN_HEAD, TokenKind::AssignHead).unwrap();
    assert_eq!(head.body, "a=");
    assert_eq!(lexer.next(&[]).unwrap().unwrap().body, "1");
}

#[test]
fn failed_accept_rewinds_exactly() {
    let mut lexer = Lexer::new("  a = 1", "test.sh");
    let before = lexer.mark();
    assert!(lexer.accept(&ASSIGN_HEAD, TokenKind::AssignHead).is_none());
    assert_eq!(lexer.mark(), before);
    let a = lexer.next(&[]).unwrap().unwrap();
    assert_eq!((a.body.as_str(), a.blank.as_str()), ("a", "  "));
}

#[test]
fn accept_drops_pending_lookahead() {
    let mut lexer = Lexer::new("a=1", "test.sh");
    // Tokenized as one bare word under command rules...
    assert_eq!(lexer.peek(&[]).unwrap().unwrap().body, "a=1");
    // ...but the raw match re-scans from the cursor.
    assert!(lexer.accept(&ASSIGN_HEAD, TokenKind::AssignHead).is_some());
    assert_eq!(lexer.next(&[]).unwrap().unwrap().body, "1");
}

#[test]
fn reset_forgets_tokens_after_mark() {
    let mut lexer = Lexer::new("foo bar baz", "test.sh");
    lexer.next(&[]).unwrap();
    let mark = lexer.mark();
    lexer.next(&[]).unwrap();
    lexer.next(&[]).unwrap();
    lexer.reset(mark);
    assert_eq!(lexer.next(&[]).unwrap().unwrap().body, "bar");
}

// =============================================================================
// Rule-Set Switching
// =============================================================================

#[test]
fn switching_rules_retokenizes_lookahead() {
    let mut lexer = Lexer::new("1+2", "test.sh");
    assert_eq!(lexer.peek(&[]).unwrap().unwrap().body, "1+2");
    let number = lexer
        .use_rules(Rules::Arith, true, |lx| lx.next(&[TokenKind::Number]))
        .unwrap()
        .unwrap();
    assert_eq!(number.body, "1");
    // Back under command rules the remainder is bare text again.
    assert_eq!(lexer.next(&[]).unwrap().unwrap().body, "+2");
}

#[test]
fn consumed_tokens_survive_rule_switch() {
    let mut lexer = Lexer::new("foo bar", "test.sh");
    let foo = lexer.next(&[]).unwrap().unwrap();
    lexer
        .use_rules(Rules::Param, false, |lx| lx.peek(&[]))
        .unwrap();
    lexer.back();
    assert_eq!(lexer.next(&[]).unwrap().unwrap(), foo);
}

#[test]
fn use_rules_restores_on_error() {
    let mut lexer = Lexer::new("@", "test.sh");
    let result = lexer.use_rules(Rules::Arith, true, |lx| lx.next(&[]));
    assert!(result.is_err());
    assert_eq!(lexer.rules(), Rules::Command);
    assert!(lexer.allow_blank());
    assert_eq!(lexer.depth(), 1);
}

#[test]
fn nested_use_rules_unwinds_in_order() {
    let mut lexer = Lexer::new("", "test.sh");
    lexer
        .use_rules(Rules::Param, false, |lx| {
            assert_eq!(lx.rules(), Rules::Param);
            lx.use_rules(Rules::Arith, true, |inner| {
                assert_eq!(inner.depth(), 3);
                assert!(inner.allow_blank());
                Ok::<(), LexError>(())
            })?;
            assert_eq!(lx.rules(), Rules::Param);
            assert!(!lx.allow_blank());
            Ok::<(), LexError>(())
        })
        .unwrap();
    assert_eq!(lexer.depth(), 1);
}

#[test]
fn blank_disallowed_hides_spaced_token() {
    let mut lexer = Lexer::new("${a }", "test.sh");
    lexer.next(&[TokenKind::DollarBrace]).unwrap().unwrap();
    lexer
        .use_rules(Rules::Param, false, |lx| {
            assert_eq!(lx.next(&[TokenKind::Name])?.unwrap().body, "a");
            // `}` was produced, but its blank makes it invisible here.
            assert!(lx.peek(&[TokenKind::RBrace])?.is_none());
            assert_eq!(lx.peek_any()?.kind, TokenKind::RBrace);
            Ok::<(), LexError>(())
        })
        .unwrap();
}

#[test]
fn payload_rules_keep_blanks_in_text() {
    let mut lexer = Lexer::new("foo bar}", "test.sh");
    lexer
        .use_rules(Rules::WordUntilBrace, true, |lx| {
            assert_eq!(lx.next(&[TokenKind::Str])?.unwrap().body, "foo bar");
            assert!(lx.next(&[TokenKind::RBrace])?.is_some());
            Ok::<(), LexError>(())
        })
        .unwrap();
}

#[test]
fn arith_rules_prefer_longest_operators() {
    let mut lexer = Lexer::new("a <<= b ** c++", "test.sh");
    let got = lexer
        .use_rules(Rules::Arith, true, |lx| {
            let mut out = Vec::new();
            while let Some(t) = lx.next(&[])? {
                if t.kind == TokenKind::Eos {
                    break;
                }
                out.push(t.kind);
            }
            Ok::<_, LexError>(out)
        })
        .unwrap();
    use TokenKind::*;
    assert_eq!(got, vec![Ident, ShlAssign, Ident, StarStar, Ident, Inc]);
}
