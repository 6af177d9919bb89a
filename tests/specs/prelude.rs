//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for checking parsed trees by their debug form.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use shtree_syntax::{parse, Node, ParseError};

/// Source label used by every spec.
pub const NAME: &str = "spec.sh";

/// Start a spec for `source`.
pub fn script(source: &str) -> Script {
    Script {
        source: source.to_string(),
        result: parse(source, NAME),
    }
}

/// A parsed (or failed) script under test.
pub struct Script {
    source: String,
    result: Result<Node, ParseError>,
}

impl Script {
    /// The tree, failing the test if parsing did not succeed.
    pub fn tree(&self) -> &Node {
        match &self.result {
            Ok(node) => node,
            Err(e) => panic!("expected {:?} to parse:\n{}", self.source, e.diagnostic(&self.source)),
        }
    }

    /// Assert the debug form of the whole tree.
    pub fn renders(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.tree().to_string(), expected);
        self
    }

    /// Assert the debug form of the single word of a one-word command.
    pub fn word_renders(self, expected: &str) -> Self {
        let words = command_words(self.tree());
        assert_eq!(words.len(), 1, "expected one word in {:?}", self.source);
        similar_asserts::assert_eq!(words[0].to_string(), expected);
        self
    }

    /// Assert the JSON serialization of the whole tree.
    pub fn json(self, expected: serde_json::Value) -> Self {
        let actual = serde_json::to_value(self.tree()).unwrap();
        similar_asserts::assert_eq!(actual, expected);
        self
    }

    /// Assert the number of simple commands.
    pub fn commands(self, expected: usize) -> Self {
        assert_eq!(self.tree().count_simple_commands(), expected, "{:?}", self.source);
        self
    }

    /// Expect the parse to fail and return the fault.
    pub fn fails(self) -> Fault {
        match self.result {
            Ok(node) => panic!("expected {:?} to fail, got {node}", self.source),
            Err(error) => Fault {
                source: self.source,
                error,
            },
        }
    }
}

/// A failed parse under test.
pub struct Fault {
    source: String,
    error: ParseError,
}

impl Fault {
    /// Assert the full one-line message.
    pub fn message(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.error.to_string(), expected);
        self
    }

    /// Assert the rendered diagnostic snippet.
    pub fn diagnostic(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.error.diagnostic(&self.source), expected);
        self
    }

    /// Assert the fault came from the lexer.
    pub fn lexical(self) -> Self {
        assert!(self.error.is_lexical(), "expected lexical fault, got {:?}", self.error);
        self
    }
}

/// Words of the only simple command in `tree`.
fn command_words(tree: &Node) -> &[Node] {
    let Node::List { body } = tree else {
        panic!("expected list, got {tree}");
    };
    let [Node::Pipelines { body, .. }] = body.as_slice() else {
        panic!("expected one entry, got {tree}");
    };
    let Node::Pipeline { body, .. } = &**body else {
        panic!("expected pipeline, got {tree}");
    };
    let Node::SimpleCommand { body, .. } = &**body else {
        panic!("expected simple command, got {tree}");
    };
    body
}
