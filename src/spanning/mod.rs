// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spanning trees and their shape.
//!
//! A [`SpanningTree`] is the ordered list of edges the generator added while
//! walking out from a root. Trees are immutable once built: extending a tree
//! produces a new one, so sibling branches of the search never share edges.

pub mod generator;

pub use generator::{generate_spanning_trees, SpanningTreeGenerator};

use std::collections::HashMap;
use std::fmt;

use crate::graph::{Edge, Graph, VertexId};

/// An ordered sequence of edges forming a spanning tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SpanningTree {
    edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// A copy of this tree with `edge` appended.
    pub fn extended(&self, edge: Edge) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);
        Self { edges }
    }

    /// Degree of every vertex that appears in the tree.
    pub fn degrees(&self) -> HashMap<VertexId, usize> {
        let mut degrees = HashMap::new();
        for edge in &self.edges {
            *degrees.entry(edge.a()).or_insert(0) += 1;
            *degrees.entry(edge.b()).or_insert(0) += 1;
        }
        degrees
    }

    /// Number of vertices that are the root or have degree above one.
    ///
    /// Only vertices that appear in some edge are considered, so the root of
    /// an empty tree is not counted.
    pub fn non_leaf_count(&self, root: VertexId) -> usize {
        self.degrees()
            .into_iter()
            .filter(|&(v, degree)| v == root || degree > 1)
            .count()
    }

    /// Helper for printing a tree with vertex labels.
    pub fn display<'a>(&'a self, graph: &'a Graph) -> DisplayTree<'a> {
        DisplayTree { tree: self, graph }
    }
}

/// A spanning tree together with the root it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedTree {
    pub root: VertexId,
    pub tree: SpanningTree,
}

impl RootedTree {
    pub fn non_leaf_count(&self) -> usize {
        self.tree.non_leaf_count(self.root)
    }
}

pub struct DisplayTree<'a> {
    tree: &'a SpanningTree,
    graph: &'a Graph,
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: Vec<String> = self
            .tree
            .edges()
            .iter()
            .map(|e| self.graph.format_edge(e))
            .collect();
        write!(f, "[{}]", edges.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_leaf_count_counts_root_and_interior() {
        let g: Graph = "a,b;a,c;b,d".parse().unwrap();
        let tree = SpanningTree::new(g.edges().to_vec());
        let a = g.vertex_id("a").unwrap();
        assert_eq!(tree.non_leaf_count(a), 2);
    }

    #[test]
    fn test_root_of_degree_one_still_counts() {
        let g: Graph = "a,b".parse().unwrap();
        let tree = SpanningTree::new(g.edges().to_vec());
        assert_eq!(tree.non_leaf_count(g.vertex_id("a").unwrap()), 1);
    }

    #[test]
    fn test_empty_tree_has_no_non_leaves() {
        assert_eq!(SpanningTree::default().non_leaf_count(VertexId::new(0)), 0);
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let g: Graph = "a,b;b,c".parse().unwrap();
        let first = SpanningTree::default().extended(g.edge(0));
        let second = first.extended(g.edge(1));
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_display() {
        let g: Graph = "a,b;b,c".parse().unwrap();
        let tree = SpanningTree::new(g.edges().to_vec());
        assert_eq!(tree.display(&g).to_string(), "[a-b b-c]");
    }
}
