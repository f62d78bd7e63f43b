//! Depth-first traversal over nested graph descriptions

use crate::model::Graph;

/// Pre-order depth-first iterator over a graph and its nested subgraphs
///
/// Subgraphs are owned snapshots, so nesting is always finite and no
/// visited set is required. Subgraphs are visited in insertion order.
pub struct Walk<'a> {
    stack: Vec<&'a Graph>,
}

impl<'a> Walk<'a> {
    /// Start a walk rooted at the given graph
    pub fn new(root: &'a Graph) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Graph;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.stack.pop()?;
        for subgraph in graph.subgraphs().iter().rev() {
            self.stack.push(subgraph);
        }
        Some(graph)
    }
}

impl Graph {
    /// Walk this graph and all nested subgraphs depth-first
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }
}
