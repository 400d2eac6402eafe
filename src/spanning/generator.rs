// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first spanning tree generator.
//!
//! The generator walks out from a root, extending the current tree along
//! any edge to an unused vertex. Its search state is:
//! - `used_vertices`: vertices marked while visiting
//! - `used_edges`: edge keys marked for the duration of a child visit
//! - `path`: the vertices on the current walk
//! - `trees`: every completed tree, in generation order
//!
//! # Visiting a vertex
//!
//! 1. Mark the vertex used and push it on the path.
//! 2. If every vertex is now used, record the tree and stop extending.
//! 3. Otherwise, for each incidence whose edge and opposite vertex are both
//!    unused: mark the edge, visit the opposite vertex with the extended
//!    tree, unmark the edge.
//! 4. If no incidence qualified (a dead end), detour: pop the dead end and
//!    its parent off the path, visit the parent again with the same tree,
//!    then push both back.
//! 5. Pop the vertex off the path and unmark it.
//!
//! Step 5 runs on every exit, so the path and the used-vertex set are empty
//! again once the top-level visit returns. Unmarking is a plain removal: a
//! vertex revisited during a detour is unmarked when that revisit returns,
//! even though an outer visit of the same vertex is still on the stack. The
//! set of trees reachable from a root depends on this.

use tracing::{debug, trace};

use crate::graph::{BitSet, Graph, VertexId};
use crate::memo::GraphMemo;
use crate::spanning::SpanningTree;
use crate::state::{Counters, Statistics};

/// All spanning trees generated from `root`, in generation order.
///
/// # Example
///
/// ```
/// use cover_tree_search::graph::Graph;
/// use cover_tree_search::spanning::generate_spanning_trees;
///
/// let g: Graph = "a,b;b,c;c,d".parse().unwrap();
/// let a = g.vertex_id("a").unwrap();
/// let b = g.vertex_id("b").unwrap();
/// assert_eq!(generate_spanning_trees(&g, a).len(), 1);
/// assert_eq!(generate_spanning_trees(&g, b).len(), 2);
/// ```
pub fn generate_spanning_trees(graph: &Graph, root: VertexId) -> Vec<SpanningTree> {
    let memo = GraphMemo::new(graph);
    let mut generator = SpanningTreeGenerator::new(&memo);
    generator.generate(root);
    generator.into_trees()
}

/// Search state for one generation run.
#[derive(Debug)]
pub struct SpanningTreeGenerator<'m> {
    memo: &'m GraphMemo,
    used_vertices: BitSet,
    used_edges: BitSet,
    path: Vec<VertexId>,
    trees: Vec<SpanningTree>,
    statistics: Statistics,
}

impl<'m> SpanningTreeGenerator<'m> {
    /// A fresh generator: nothing used, empty path, no trees.
    pub fn new(memo: &'m GraphMemo) -> Self {
        Self {
            memo,
            used_vertices: BitSet::with_capacity(memo.vertex_count()),
            used_edges: BitSet::with_capacity(memo.edge_count()),
            path: Vec::new(),
            trees: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Generate every tree reachable from `root`, appending to the results.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a vertex of the graph.
    pub fn generate(&mut self, root: VertexId) -> &[SpanningTree] {
        let before = self.trees.len();
        self.visit(root, &SpanningTree::default());
        debug_assert!(self.is_idle(), "search state leaked past the root visit");

        debug!(
            root = self.memo.label(root),
            trees = self.trees.len() - before,
            stats = %self.statistics,
            "generated spanning trees"
        );
        &self.trees[before..]
    }

    /// True when no vertex, edge, or path entry is held by a search.
    pub fn is_idle(&self) -> bool {
        self.used_vertices.is_empty() && self.used_edges.is_empty() && self.path.is_empty()
    }

    pub fn trees(&self) -> &[SpanningTree] {
        &self.trees
    }

    pub fn into_trees(self) -> Vec<SpanningTree> {
        self.trees
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn visit(&mut self, v: VertexId, tree: &SpanningTree) {
        self.used_vertices.insert(v.as_usize());
        self.path.push(v);

        if !self.record_if_complete(tree) {
            let mut extended = false;
            for i in 0..self.memo.incidences(v).len() {
                let incidence = self.memo.incidences(v)[i];
                let key = self.memo.edge_key(incidence.edge_id);
                if self.used_vertices.contains(incidence.opposite.as_usize())
                    || self.used_edges.contains(key)
                {
                    continue;
                }

                self.used_edges.insert(key);
                self.visit(incidence.opposite, &tree.extended(incidence.edge));
                self.used_edges.remove(key);
                extended = true;
            }

            if !extended {
                self.statistics.increment(Counters::DeadEnds);
                self.resume_from_parent(tree);
            }
        }

        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(v));
        self.used_vertices.remove(v.as_usize());
    }

    /// Dead-end detour: revisit the dead end's parent with the same tree.
    fn resume_from_parent(&mut self, tree: &SpanningTree) {
        if self.path.len() < 2 {
            return;
        }
        let (Some(dead_end), Some(parent)) = (self.path.pop(), self.path.pop()) else {
            return;
        };

        trace!(
            dead_end = self.memo.label(dead_end),
            parent = self.memo.label(parent),
            "detour"
        );
        self.statistics.increment(Counters::Detours);
        self.visit(parent, tree);

        self.path.push(parent);
        self.path.push(dead_end);
    }

    /// Record `tree` if every vertex is used. Returns true when complete.
    fn record_if_complete(&mut self, tree: &SpanningTree) -> bool {
        let reached = self.used_vertices.len();
        if reached != self.memo.vertex_count() {
            return false;
        }

        if tree.len() + 1 == reached {
            trace!(edges = tree.len(), "spanning tree");
            self.statistics.increment(Counters::SpanningTrees);
            self.trees.push(tree.clone());
        } else {
            trace!(edges = tree.len(), reached, "discarding non-tree");
            self.statistics.increment(Counters::DiscardedTrees);
        }
        true
    }
}
