//! Command structure specs
//!
//! Verify lists, terminators, pipelines, and-or chains and assignments.

use crate::prelude::*;

#[test]
fn list_with_terminators() {
    script("foo;bar").renders(
        r#"(list (body [(pipelines (body (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body "foo"))]))))) (terminal ";")) (pipelines (body (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body "bar"))]))))) (terminal nil))]))"#,
    );
}

#[test]
fn newline_terminal() {
    script("a\n").renders(
        r#"(list (body [(pipelines (body (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body "a"))]))))) (terminal "\n"))]))"#,
    );
}

#[test]
fn empty_script() {
    script("").renders("(list (body []))");
    script("\n  # only a comment\n").renders("(list (body []))");
}

#[test]
fn negated_pipeline_in_and_or() {
    script("! a | b && c &").renders(
        r#"(list (body [(pipelines (body (and_or (op "&&") (left (pipeline (excl true) (body (pipe (op "|") (left (simple_command (assigns []) (body [(str (body "a"))]))) (right (simple_command (assigns []) (body [(str (body "b"))]))))))) (right (pipeline (excl false) (body (simple_command (assigns []) (body [(str (body "c"))]))))))) (terminal "&"))]))"#,
    );
}

#[test]
fn assignment_prefix() {
    script("a=x foo").renders(
        r#"(list (body [(pipelines (body (pipeline (excl false) (body (simple_command (assigns [(assign (name "a") (value (str (body "x"))))]) (body [(str (body "foo"))]))))) (terminal nil))]))"#,
    );
}

#[test]
fn empty_assignment_as_json() {
    script("a=").json(serde_json::json!({
        "type": "list",
        "body": [{
            "type": "pipelines",
            "body": {
                "type": "pipeline",
                "excl": false,
                "body": {
                    "type": "simple_command",
                    "assigns": [{"type": "assign", "name": "a", "value": null}],
                    "body": []
                }
            },
            "terminal": null
        }]
    }));
}

#[test]
fn multiline_script() {
    let src = "\
# build and report
make all |& tee build.log &&
  echo done

rm -f out; ls
";
    script(src).commands(5);
}
