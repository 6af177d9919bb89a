// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Utility methods for querying parsed trees.

use super::{Node, Visitor};

impl Node {
    /// Count the simple commands in this tree, including those nested in
    /// command and process substitutions.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use shtree_syntax::parse;
    ///
    /// let ast = parse("cat file | grep x; echo $(date)", "input.sh")?;
    /// assert_eq!(ast.count_simple_commands(), 4);
    /// # Ok::<(), shtree_syntax::ParseError>(())
    /// ```
    pub fn count_simple_commands(&self) -> usize {
        struct Counter(usize);
        impl Visitor for Counter {
            fn visit_node(&mut self, node: &Node) {
                if matches!(node, Node::SimpleCommand { .. }) {
                    self.0 += 1;
                }
                self.walk_node(node);
            }
        }
        let mut counter = Counter(0);
        counter.visit_node(self);
        counter.0
    }

    /// Collect the names of all parameters referenced in this tree.
    ///
    /// Returns a de-duplicated list in order of first appearance. Covers
    /// `$name`, every `${...}` form that names a parameter or array, and
    /// variables inside arithmetic. Prefix matches (`${!pre*}`) and the
    /// names set by `name=value` prefixes are skipped.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use shtree_syntax::parse;
    ///
    /// let ast = parse("echo $HOME ${USER:-$HOME} $((n + 1))", "input.sh")?;
    /// assert_eq!(ast.parameter_names(), vec!["HOME", "USER", "n"]);
    /// # Ok::<(), shtree_syntax::ParseError>(())
    /// ```
    pub fn parameter_names(&self) -> Vec<String> {
        struct Collector(Vec<String>);
        impl Visitor for Collector {
            fn visit_node(&mut self, node: &Node) {
                if let Some(name) = node.parameter_name() {
                    if !self.0.iter().any(|n| n == name) {
                        self.0.push(name.to_string());
                    }
                }
                self.walk_node(node);
            }
        }
        let mut collector = Collector(Vec::new());
        collector.visit_node(self);
        collector.0
    }

    /// Check whether the tree contains any command or process
    /// substitution, at any depth.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use shtree_syntax::parse;
    ///
    /// assert!(!parse("echo $((1 + 2))", "input.sh")?.has_substitutions());
    /// assert!(parse("echo \"now: `date`\"", "input.sh")?.has_substitutions());
    /// assert!(parse("diff <(ls a) <(ls b)", "input.sh")?.has_substitutions());
    /// # Ok::<(), shtree_syntax::ParseError>(())
    /// ```
    pub fn has_substitutions(&self) -> bool {
        struct Finder(bool);
        impl Visitor for Finder {
            fn visit_node(&mut self, node: &Node) {
                if matches!(node, Node::CommandSubst { .. } | Node::ProcessSubst { .. }) {
                    self.0 = true;
                    return;
                }
                self.walk_node(node);
            }
        }
        let mut finder = Finder(false);
        finder.visit_node(self);
        finder.0
    }

    fn parameter_name(&self) -> Option<&str> {
        match self {
            Node::SimpleParamEx { body }
            | Node::ParamEx { body, .. }
            | Node::ParamLen { body, .. }
            | Node::ParamSubst { body, .. }
            | Node::Substr { body, .. }
            | Node::PatternRm { body, .. }
            | Node::PatternSubst { body, .. }
            | Node::CaseMod { body, .. }
            | Node::ParamTrans { body, .. }
            | Node::ArrayAccess { body, .. } => Some(body),
            Node::ArrayEx { array, .. } | Node::ArrayKeys { array, .. } => Some(array),
            Node::Var { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
