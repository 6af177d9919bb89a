//! Fault reporting specs
//!
//! Verify messages and diagnostics for syntax and lexical faults.

use crate::prelude::*;

#[test]
fn unclosed_parameter() {
    script("echo ${foo")
        .fails()
        .message("spec.sh:1:11: expected `}`, found end of input")
        .diagnostic(
            "error: spec.sh:1:11: expected `}`, found end of input
  --> line 1, column 11
    |
  1 | echo ${foo
    |           ^",
        );
}

#[test]
fn missing_arithmetic_operand() {
    script("echo $((x ?  ))")
        .fails()
        .message("spec.sh:1:14: expected expression, found `)`");
}

#[test]
fn missing_command_after_pipe() {
    script("ls |\n")
        .fails()
        .message("spec.sh:2:1: expected command, found end of input");
}

#[test]
fn fault_on_second_line() {
    script("echo ok\necho $(date")
        .fails()
        .diagnostic(
            "error: spec.sh:2:12: expected `)`, found end of input
  --> line 2, column 12
    |
  2 | echo $(date
    |            ^",
        );
}

#[test]
fn unterminated_single_quote() {
    script("echo 'open")
        .fails()
        .lexical()
        .message("lexical error: spec.sh:1:6: unrecognized character '\\''");
}

#[test]
fn redirection_is_not_recognized() {
    script("sort < in")
        .fails()
        .lexical()
        .message("lexical error: spec.sh:1:6: unrecognized character '<'");
}
