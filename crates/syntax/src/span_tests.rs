// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn span_slice_and_len() {
    let span = Span::new(5, 10);
    assert_eq!(span.slice("echo hello"), "hello");
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::empty(3).is_empty());
}

#[test]
fn span_slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(4, 40).slice("echo"), "");
}

#[test]
fn source_line_lookup() {
    let source = "echo a\necho b\n";
    assert_eq!(source_line(source, 1), "echo a");
    assert_eq!(source_line(source, 2), "echo b");
    assert_eq!(source_line(source, 3), "");
    assert_eq!(source_line(source, 9), "");
}

#[test]
fn diagnostic_points_at_column() {
    let source = "echo ok\nfoo ${bar";
    let diag = diagnostic_context(source, Span::new(17, 17), 2, 10, "expected `}`");
    assert!(diag.contains("error: expected `}`"));
    assert!(diag.contains("line 2, column 10"));
    assert!(diag.contains("  2 | foo ${bar"));
    assert!(diag.ends_with("    |          ^"));
}

#[test]
fn diagnostic_caret_covers_span() {
    let diag = diagnostic_context("a <b", Span::new(2, 4), 1, 3, "bad");
    assert!(diag.ends_with("    |   ^^"));
}
