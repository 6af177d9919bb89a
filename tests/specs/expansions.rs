//! Word and expansion specs
//!
//! Verify quoting, parameter expansion forms and substitutions.

use crate::prelude::*;

#[test]
fn quoting() {
    script("'bar baz'").word_renders(r#"(sstr (body "bar baz"))"#);
    script(r#""a $b c""#).word_renders(
        r#"(dquote (body [(str (body "a ")) (simple_param_ex (body "b")) (str (body " c"))]))"#,
    );
    script(r#"a"b"$c"#).word_renders(
        r#"(concat (body [(str (body "a")) (dquote (body [(str (body "b"))])) (simple_param_ex (body "c"))]))"#,
    );
}

#[test]
fn parameter_references() {
    script("${a}").word_renders(r#"(param_ex (ref false) (body "a"))"#);
    script("${!a}").word_renders(r#"(param_ex (ref true) (body "a"))"#);
    script("${#a}").word_renders(r#"(param_len (ref false) (body "a"))"#);
}

#[test]
fn substitution_operators() {
    script("${a:-a}").word_renders(
        r#"(param_subst (ref false) (body "a") (op ":-") (value (str (body "a"))))"#,
    );
    script("${a:=}").word_renders(r#"(param_subst (ref false) (body "a") (op ":=") (value (empty)))"#);
}

#[test]
fn substrings() {
    script("${a:0:1}").word_renders(
        r#"(substr (ref false) (body "a") (offset (number (value "0"))) (length (number (value "1"))))"#,
    );
    script("${a:1}").word_renders(
        r#"(substr (ref false) (body "a") (offset (number (value "1"))) (length (empty)))"#,
    );
}

#[test]
fn patterns() {
    script("${a##*/}").word_renders(
        r###"(pattern_rm (ref false) (body "a") (mode "##") (pattern (str (body "*/"))))"###,
    );
    script("${a//b/c}").word_renders(
        r#"(pattern_subst (ref false) (body "a") (mode "//") (pattern (str (body "b"))) (replace (str (body "c"))))"#,
    );
    script("${a/b}").word_renders(
        r#"(pattern_subst (ref false) (body "a") (mode "/") (pattern (str (body "b"))) (replace nil))"#,
    );
    script("${a^^}").word_renders(r#"(case_mod (ref false) (body "a") (mode "^^") (pattern (empty)))"#);
}

#[test]
fn transformations_and_prefixes() {
    script("${foo@Q}").word_renders(r#"(param_trans (ref false) (body "foo") (op "Q"))"#);
    script("${!foo*}").word_renders(r#"(prefix_ex (prefix "foo") (mode "*"))"#);
}

#[test]
fn arrays() {
    script("${a[@]}").word_renders(r#"(array_ex (array "a") (mode "@"))"#);
    script("${!a[@]}").word_renders(r#"(array_keys (array "a") (mode "@"))"#);
    script("${a[i+1]}").word_renders(
        r#"(array_access (ref false) (body "a") (subscript (bin_op (op "+") (left (var (name "i") (dollar false))) (right (number (value "1"))))))"#,
    );
}

#[test]
fn substitutions() {
    script("$(foo)").word_renders(
        r#"(command_subst (style "$(") (body (list (body [(pipelines (body (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body "foo"))]))))) (terminal nil))]))))"#,
    );
    script("`foo`").word_renders(
        r#"(command_subst (style "`") (body (list (body [(pipelines (body (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body "foo"))]))))) (terminal nil))]))))"#,
    );
    script("<(ls)").word_renders(
        r#"(process_subst (direction "<") (body (list (body [(pipelines (body (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body "ls"))]))))) (terminal nil))]))))"#,
    );
}
