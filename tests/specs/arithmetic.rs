//! Arithmetic expansion specs
//!
//! Verify operator precedence and associativity in `$((...))`.

use crate::prelude::*;

#[test]
fn precedence() {
    script("$((a + b * c))").word_renders(
        r#"(arith_ex (body (bin_op (op "+") (left (var (name "a") (dollar false))) (right (bin_op (op "*") (left (var (name "b") (dollar false))) (right (var (name "c") (dollar false))))))))"#,
    );
}

#[test]
fn power_is_right_associative() {
    script("$((2 ** 3 ** 2))").word_renders(
        r#"(arith_ex (body (bin_op (op "**") (left (number (value "2"))) (right (bin_op (op "**") (left (number (value "3"))) (right (number (value "2"))))))))"#,
    );
}

#[test]
fn assignment_with_ternary() {
    script("$((a = b ? 1 : 2))").word_renders(
        r#"(arith_ex (body (bin_op (op "=") (left (var (name "a") (dollar false))) (right (ternary (cond (var (name "b") (dollar false))) (then (number (value "1"))) (else (number (value "2"))))))))"#,
    );
}

#[test]
fn unary_and_postfix() {
    script("$((-$x ** 2 + i++))").word_renders(
        r#"(arith_ex (body (bin_op (op "+") (left (bin_op (op "**") (left (un_op (op "-") (operand (var (name "x") (dollar true))))) (right (number (value "2"))))) (right (post_op (op "++") (operand (var (name "i") (dollar false))))))))"#,
    );
}

#[test]
fn parentheses() {
    script("$(((1)))").word_renders(
        r#"(arith_ex (body (parentheses (body (number (value "1"))))))"#,
    );
}
