// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word pieces: quoting, concatenation and substitutions.

use super::helpers::*;
use crate::ast::Node;

fn dquote(body: Vec<Node>) -> Node {
    Node::DQuote { body }
}

fn concat(body: Vec<Node>) -> Node {
    Node::Concat { body }
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn single_quotes_keep_blanks() {
    let (_, body) = simple_command("echo 'bar baz'");
    assert_eq!(body, vec![s("echo"), sstr("bar baz")]);
}

#[test]
fn empty_single_quotes() {
    assert_eq!(word("''"), sstr(""));
}

#[test]
fn double_quote_pieces() {
    assert_eq!(
        word("\"a $b c\""),
        dquote(vec![s("a "), simple_param("b"), s(" c")])
    );
}

#[test]
fn empty_double_quotes() {
    assert_eq!(word("\"\""), dquote(vec![]));
}

#[test]
fn single_quote_inside_double_quotes() {
    assert_eq!(word("\"it's\""), dquote(vec![s("it's")]));
}

#[test]
fn newline_inside_double_quotes() {
    assert_eq!(word("\"a\nb\""), dquote(vec![s("a\nb")]));
}

#[test]
fn expansions_inside_double_quotes() {
    assert_eq!(
        word("\"${a}$(b)`c`\""),
        dquote(vec![
            param_ex(false, "a"),
            command_subst("$(", script(&["b"])),
            command_subst("`", script(&["c"])),
        ])
    );
}

// =============================================================================
// Escapes
// =============================================================================

#[yare::parameterized(
    escaped_space  = { r"a\ b", r"a\ b" },
    escaped_dollar = { r"\$HOME", r"\$HOME" },
    escaped_quote  = { r#"\"x"#, r#"\"x"# },
    escaped_pipe   = { r"a\|b", r"a\|b" },
)]
fn escapes_are_kept_verbatim(src: &str, body: &str) {
    assert_eq!(word(src), s(body));
}

#[test]
fn escaped_quotes_inside_double_quotes() {
    assert_eq!(word(r#""\"x\"""#), dquote(vec![s(r#"\"x\""#)]));
}

// =============================================================================
// Concatenation
// =============================================================================

#[test]
fn adjacent_pieces_concatenate() {
    assert_eq!(
        word("a\"b\"$c"),
        concat(vec![s("a"), dquote(vec![s("b")]), simple_param("c")])
    );
}

#[test]
fn quote_juggling() {
    assert_eq!(
        word(r"'a'\''b'"),
        concat(vec![sstr("a"), s(r"\'"), sstr("b")])
    );
}

#[test]
fn expansion_followed_by_text() {
    assert_eq!(word("${a}.txt"), concat(vec![param_ex(false, "a"), s(".txt")]));
}

#[test]
fn blank_separates_words() {
    let (_, body) = simple_command("a \"b\" $c");
    assert_eq!(body, vec![s("a"), dquote(vec![s("b")]), simple_param("c")]);
}

// =============================================================================
// Simple Parameters
// =============================================================================

#[yare::parameterized(
    named      = { "$HOME", "HOME" },
    positional = { "$1", "1" },
    status     = { "$?", "?" },
    pid        = { "$$", "$" },
    all_args   = { "$@", "@" },
    arg_count  = { "$#", "#" },
    last_bg    = { "$!", "!" },
)]
fn simple_parameter(src: &str, name: &str) {
    assert_eq!(word(src), simple_param(name));
}

#[test]
fn positional_takes_one_digit() {
    assert_eq!(word("$10"), concat(vec![simple_param("1"), s("0")]));
}

#[test]
fn lone_dollar_is_text() {
    let (_, body) = simple_command("echo $");
    assert_eq!(body, vec![s("echo"), s("$")]);
}

// =============================================================================
// Substitutions
// =============================================================================

#[test]
fn nested_command_substitution() {
    assert_eq!(
        word("$(foo $(bar))"),
        command_subst(
            "$(",
            list(vec![entry(
                pipeline(cmd(vec![s("foo"), command_subst("$(", script(&["bar"]))])),
                None
            )])
        )
    );
}

#[test]
fn empty_command_substitution() {
    assert_eq!(word("$( )"), command_subst("$(", list(vec![])));
}

#[test]
fn command_substitution_with_list() {
    assert_eq!(
        word("$(a; b\n)"),
        command_subst(
            "$(",
            list(vec![
                entry(pipeline(words(&["a"])), Some(";")),
                entry(pipeline(words(&["b"])), Some("\n")),
            ])
        )
    );
}

#[test]
fn backquote_substitution() {
    assert_eq!(word("`foo bar`"), command_subst("`", script(&["foo", "bar"])));
}

#[test]
fn backquote_inside_command_substitution() {
    assert_eq!(
        word("$(echo `date`)"),
        command_subst(
            "$(",
            list(vec![entry(
                pipeline(cmd(vec![s("echo"), command_subst("`", script(&["date"]))])),
                None
            )])
        )
    );
}

#[test]
fn process_substitution() {
    let (_, body) = simple_command("diff <(ls a) >(cat)");
    assert_eq!(
        body,
        vec![
            s("diff"),
            Node::ProcessSubst {
                direction: "<".to_string(),
                body: Box::new(script(&["ls", "a"])),
            },
            Node::ProcessSubst {
                direction: ">".to_string(),
                body: Box::new(script(&["cat"])),
            },
        ]
    );
}

#[test]
fn arithmetic_expansion_word() {
    assert_eq!(
        word("$((1+2))"),
        Node::ArithEx {
            body: Box::new(bin("+", num("1"), num("2"))),
        }
    );
}
