// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor pattern for traversing the syntax tree.

use super::Node;

/// Visitor trait for traversing the syntax tree.
///
/// The default implementation walks the entire tree in field order.
/// Override [`Visitor::visit_node`] to act on each node, and call
/// [`Visitor::walk_node`] from it to descend into children. To stop
/// traversal below a node, simply don't call `walk_node`.
///
/// # Example: Collect Command Names
///
/// ```ignore
/// use shtree_syntax::{parse, Node, Visitor};
///
/// struct CommandNames(Vec<String>);
///
/// impl Visitor for CommandNames {
///     fn visit_node(&mut self, node: &Node) {
///         if let Node::SimpleCommand { body, .. } = node {
///             if let Some(Node::Str { body }) = body.first() {
///                 self.0.push(body.clone());
///             }
///         }
///         // Keep going into substitutions
///         self.walk_node(node);
///     }
/// }
///
/// let ast = parse("echo $(cat file | grep x)", "input.sh")?;
/// let mut names = CommandNames(Vec::new());
/// names.visit_node(&ast);
/// assert_eq!(names.0, vec!["echo", "cat", "grep"]);
/// # Ok::<(), shtree_syntax::ParseError>(())
/// ```
pub trait Visitor {
    /// Visit a node.
    fn visit_node(&mut self, node: &Node) {
        self.walk_node(node);
    }

    /// Walk a node, visiting each direct child in field order.
    fn walk_node(&mut self, node: &Node) {
        for child in node.children() {
            self.visit_node(child);
        }
    }
}
