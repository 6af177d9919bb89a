// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing output of the parser and lexer.

use shtree_syntax::parse;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with captured tracing output at `level`
fn with_tracing<T>(level: tracing::Level, f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

/// Assert that captured logs contain the expected substring
fn assert_log(logs: &str, label: &str, expected: &str) {
    assert!(logs.contains(expected), "Should log {label}. Logs:\n{logs}");
}

#[test]
fn parse_start_and_end_are_logged() {
    let (logs, result) = with_tracing(tracing::Level::DEBUG, || parse("a; b", "run.sh"));
    assert!(result.is_ok());
    assert_log(&logs, "parse start", "parsing");
    assert_log(&logs, "source name", "name=\"run.sh\"");
    assert_log(&logs, "source size", "bytes=4");
    assert_log(&logs, "parse end", "parsed");
    assert_log(&logs, "entry count", "entries=2");
}

#[test]
fn rule_switches_are_traced() {
    let (logs, result) =
        with_tracing(tracing::Level::TRACE, || parse("echo ${a:-$((1+2))}", "run.sh"));
    assert!(result.is_ok());
    assert_log(&logs, "param rules", "rules=\"param\"");
    assert_log(&logs, "arith rules", "rules=\"arith\"");
    assert_log(&logs, "push", "push rules");
    assert_log(&logs, "pop", "pop rules");
}

#[test]
fn debug_level_hides_lexer_detail() {
    let (logs, _) = with_tracing(tracing::Level::DEBUG, || parse("echo ${a}", "run.sh"));
    assert!(!logs.contains("push rules"), "Logs:\n{logs}");
}

#[test]
fn faults_are_returned_not_logged() {
    let (logs, result) = with_tracing(tracing::Level::TRACE, || parse("echo ${a", "run.sh"));
    assert!(result.is_err());
    assert!(!logs.contains("ERROR"), "Logs:\n{logs}");
    assert!(!logs.contains("WARN"), "Logs:\n{logs}");
    assert!(!logs.contains("parsed"), "Logs:\n{logs}");
}
