// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax, lexical and depth faults.

use super::helpers::*;
use crate::parse_error::ParseError;
use crate::parser::{ParseOptions, Parser};

/// The `(expected, found)` pair of a syntax fault.
fn syntax(src: &str) -> (String, String) {
    match parse_err(src) {
        ParseError::Syntax {
            expected, found, ..
        } => (expected, found),
        other => panic!("expected syntax fault for {src:?}, got {other:?}"),
    }
}

// =============================================================================
// Syntax Faults
// =============================================================================

#[yare::parameterized(
    ternary_missing_then = { "echo $((x ?  ))", "expression", "`)`" },
    ternary_missing_colon = { "echo $((a ? b c))", "`:`", "`c`" },
    dangling_operator    = { "echo $((1 + ))", "expression", "`)`" },
    unclosed_arith       = { "echo $((1", "`))`", "end of input" },
    assign_to_number     = { "echo $((1 = 2))", "`))`", "`=`" },
    unclosed_group       = { "echo $(((1 + 2))", "`))`", "`)`" },
    unclosed_param       = { "echo ${foo", "`}`", "end of input" },
    empty_param          = { "echo ${}", "parameter name", "`}`" },
    unclosed_subscript   = { "echo ${a[1}", "`]`", "`}`" },
    prefix_without_bang  = { "echo ${a*}", "`!` before prefix match", "`}`" },
    prefix_of_positional = { "echo ${!1*}", "variable name before prefix match", "`}`" },
    unclosed_subst       = { "echo $(foo", "`)`", "end of input" },
    unclosed_backquote   = { "echo `foo", "`` ` ``", "end of input" },
    unclosed_dquote      = { "echo \"abc", "`\"`", "end of input" },
    lone_pipe            = { "|", "command", "`|`" },
    trailing_pipe        = { "foo |", "command", "end of input" },
    trailing_and         = { "foo && ", "command", "end of input" },
    lone_semicolon       = { ";", "command", "`;`" },
    stray_paren          = { "foo )", "end of input", "`)`" },
    length_of_array      = { "echo ${#a[@]}", "`}`", "`[@]`" },
    length_with_default  = { "echo ${#a:-b}", "`}`", "`:`" },
    length_with_replace  = { "echo ${#a/b/c}", "`}`", "`/`" },
    length_with_trans    = { "echo ${#a@Q}", "`}`", "`@`" },
    length_with_remove   = { "echo ${#a%b}", "`}`", "`%`" },
    blank_before_brace   = { "echo ${a }", "`}`", "`}` after blank" },
    blank_after_subscript = { "echo ${a[1] }", "`}`", "`}` after blank" },
    blank_before_name    = { "echo ${ a}", "parameter name", "`a` after blank" },
)]
fn syntax_fault(src: &str, expected: &str, found: &str) {
    assert_eq!(syntax(src), (expected.to_string(), found.to_string()));
}

#[test]
fn fault_reports_position() {
    let err = parse_err("echo ${foo");
    assert_eq!(err.position(), (1, 11));
    assert_eq!(
        err.to_string(),
        "test.sh:1:11: expected `}`, found end of input"
    );
}

#[test]
fn fault_position_on_later_line() {
    let err = parse_err("echo ok\necho ${");
    assert_eq!(err.position(), (2, 8));
}

#[test]
fn diagnostic_points_at_fault() {
    let src = "echo ok\necho ${a[1}";
    let err = parse_err(src);
    let diagnostic = err.diagnostic(src);
    assert!(diagnostic.starts_with("error: test.sh:2:"), "{diagnostic}");
    assert!(diagnostic.contains("echo ${a[1}"), "{diagnostic}");
    assert!(diagnostic.ends_with('^'), "{diagnostic}");
}

// =============================================================================
// Lexical Faults
// =============================================================================

#[yare::parameterized(
    unterminated_single_quote = { "echo 'open" },
    redirection_in            = { "a < b" },
    redirection_out           = { "a > b" },
)]
fn lexical_fault(src: &str) {
    let err = parse_err(src);
    assert!(err.is_lexical(), "expected lexical fault, got {err:?}");
}

#[test]
fn lexical_fault_position() {
    let err = parse_err("echo 'open");
    assert_eq!(err.position(), (1, 6));
}

// =============================================================================
// Nesting Depth
// =============================================================================

fn parse_with_depth(src: &str, max_depth: usize) -> Result<crate::ast::Node, ParseError> {
    Parser::parse_with_options(src, "test.sh", ParseOptions { max_depth })
}

fn assert_too_deep(result: Result<crate::ast::Node, ParseError>, max: usize) {
    match result {
        Err(ParseError::TooDeep { max: reported, .. }) => assert_eq!(reported, max),
        other => panic!("expected depth fault, got {other:?}"),
    }
}

#[test]
fn default_depth_is_64() {
    assert_eq!(ParseOptions::default().max_depth, 64);
}

#[test]
fn nesting_within_limit() {
    assert!(parse_with_depth("echo $(a $(b $(c)))", 3).is_ok());
}

#[test]
fn nesting_beyond_limit() {
    let err = parse_with_depth("echo $(a $(b $(c $(d))))", 3).unwrap_err();
    assert!(
        matches!(err, ParseError::TooDeep { max: 3, .. }),
        "expected depth fault, got {err:?}"
    );
}

#[test]
fn nested_quotes_count_towards_depth() {
    let err = parse_with_depth(r#"echo "${a:-"${b:-"${c}"}"}""#, 4).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { .. }), "{err:?}");
}

#[test]
fn default_limit_stops_runaway_operators() {
    let src = format!("echo $(({}1))", "~".repeat(300));
    assert_too_deep(Parser::parse(&src, "test.sh"), 64);
}

#[yare::parameterized(
    pipes      = { format!("{}a", "a | ".repeat(200)) },
    pipe_amps  = { format!("{}a", "a |& ".repeat(200)) },
    and_ors    = { format!("{}a", "a && b || ".repeat(100)) },
    sums       = { format!("echo $(({}1))", "1+".repeat(300)) },
    products   = { format!("echo $(({}1))", "2*".repeat(300)) },
    commas     = { format!("echo $(({}1))", "1,".repeat(300)) },
    subscripts = { format!("echo ${{a[{}1]}}", "1-".repeat(300)) },
)]
fn default_limit_stops_long_chains(src: String) {
    assert_too_deep(Parser::parse(&src, "test.sh"), 64);
}

#[test]
fn chain_folds_count_towards_depth() {
    assert!(parse_with_depth("a | b | c | d | e", 4).is_ok());
    assert_too_deep(parse_with_depth("a | b | c | d | e | f", 4), 4);
    assert!(parse_with_depth("a && b || c && d", 3).is_ok());
    assert_too_deep(parse_with_depth("a && b || c && d || e", 3), 3);
    // `$((` takes the first level
    assert!(parse_with_depth("echo $((1 + 2 - 3 + 4))", 4).is_ok());
    assert_too_deep(parse_with_depth("echo $((1 + 2 - 3 + 4 - 5))", 4), 4);
    assert_too_deep(parse_with_depth("echo $((1, 2, 3, 4, 5))", 4), 4);
}

#[test]
fn chain_depth_is_released_when_chain_ends() {
    let src = "a | b | c\n".repeat(100);
    assert!(parse_with_depth(&src, 2).is_ok());
    let src = format!("echo {}", "$((1 + 2 + 3)) ".repeat(100));
    assert!(parse_with_depth(&src, 3).is_ok());
}

#[yare::parameterized(
    in_param      = { "echo ${a[1}" },
    in_arith      = { "echo $((1 + (2 * 3)" },
    in_subst      = { "echo \"$(a | b && ${c:-$((1,))})\"" },
    in_chain      = { "a | b && c | ${d/e/$((1 + ))}" },
    beyond_limit  = { "a | b | c | d | e | f | g" },
)]
fn failed_parse_restores_parser_state(src: &str) {
    let mut parser = Parser {
        lexer: crate::lexer::Lexer::new(src, "test.sh"),
        in_backquote: false,
        depth: 0,
        options: ParseOptions { max_depth: 4 },
    };
    assert!(parser.parse_list(crate::token::TokenKind::Eos).is_err());
    assert_eq!(parser.depth, 0);
    assert_eq!(parser.lexer.depth(), 1);
}

#[test]
fn long_lists_stay_flat() {
    let src = "a; ".repeat(5000);
    let ast = parse(&src);
    assert_eq!(ast.count_simple_commands(), 5000);
}

#[test]
fn default_limit_fits_small_thread_stack() {
    let max = ParseOptions::default().max_depth;
    let inputs = vec![
        // `$((` takes the first level
        format!("echo $(({}1{}))", "(".repeat(max - 1), ")".repeat(max - 1)),
        format!("echo {}1{}", "$((".repeat(max), "))".repeat(max)),
        format!("echo {}x{}", "${a:-".repeat(max), "}".repeat(max)),
        format!("echo {}x{}", "$(".repeat(max), ")".repeat(max)),
        format!("echo {}x{}", "\"$(".repeat(max / 2), ")\"".repeat(max / 2)),
        format!("{}a", "a | ".repeat(max)),
        format!("echo $(({}1))", "1+".repeat(max - 1)),
    ];
    std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            for src in &inputs {
                if let Err(e) = Parser::parse(src, "test.sh") {
                    panic!("failed to parse {} bytes of nesting: {e}", src.len());
                }
            }
        })
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn zero_depth_means_unlimited() {
    let src = format!("echo $(({}1))", "~".repeat(150));
    assert!(parse_with_depth(&src, 0).is_ok());
}

#[test]
fn depth_fault_message() {
    let err = parse_with_depth("$($($(a)))", 2).unwrap_err();
    assert!(
        err.to_string().ends_with("nesting exceeds 2 levels"),
        "{err}"
    );
}
