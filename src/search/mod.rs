// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search driver: find a spanning tree whose non-leaf count matches a target.
//!
//! The full pipeline, run by [`Solver`], is:
//!
//! 1. Enumerate every vertex subset and pick the first minimum cover
//! 2. Target = `non_leaf_factor` × cover size (twice the cover by default)
//! 3. For each root in vertex order, generate spanning trees and return the
//!    first whose non-leaf count equals the target
//!
//! # Example
//!
//! ```
//! use cover_tree_search::graph::Graph;
//! use cover_tree_search::search::{SearchConfig, Solver};
//!
//! let g: Graph = "a,b;b,c;c,d;d,e;e,f;f,g;g,h;h,i".parse().unwrap();
//! let solution = Solver::new(SearchConfig::default()).solve(&g).unwrap();
//!
//! assert_eq!(solution.min_cover.size(), 4);
//! assert_eq!(solution.target, 8);
//! let found = solution.tree.unwrap();
//! assert_eq!(found.non_leaf_count(), 8);
//! ```

pub mod config;
pub mod error;

pub use config::SearchConfig;
pub use error::SearchError;

use tracing::{debug, info};

use crate::cover::{generate_vertex_covers, min_cover, VertexCover};
use crate::graph::Graph;
use crate::memo::GraphMemo;
use crate::spanning::{RootedTree, SpanningTreeGenerator};

/// The first tree, over roots in vertex order and trees in generation
/// order, whose non-leaf count relative to its root equals `target`.
///
/// Returns `None` if no root/tree combination matches.
pub fn find_spanning_tree_with_non_leaf_count(graph: &Graph, target: usize) -> Option<RootedTree> {
    let memo = GraphMemo::new(graph);
    for root in graph.vertices() {
        let mut generator = SpanningTreeGenerator::new(&memo);
        let found = generator
            .generate(root)
            .iter()
            .find(|tree| tree.non_leaf_count(root) == target)
            .cloned();

        if let Some(tree) = found {
            debug!(root = graph.label(root), target, "matching tree");
            return Some(RootedTree { root, tree });
        }
    }
    debug!(target, "no matching tree");
    None
}

/// Outcome of a full solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The first minimum cover in generation order.
    pub min_cover: VertexCover,
    /// The non-leaf count searched for.
    pub target: usize,
    /// The matching tree, if any.
    pub tree: Option<RootedTree>,
}

/// Runs the cover → target → tree pipeline under a [`SearchConfig`].
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Refuse graphs larger than the configured limit.
    pub fn check_size(&self, graph: &Graph) -> Result<(), SearchError> {
        let vertices = graph.vertex_count();
        if vertices > self.config.max_vertices {
            return Err(SearchError::GraphTooLarge {
                vertices,
                max: self.config.max_vertices,
            });
        }
        Ok(())
    }

    /// The first minimum cover of `graph`.
    pub fn min_cover(&self, graph: &Graph) -> Result<VertexCover, SearchError> {
        self.check_size(graph)?;
        let candidates = generate_vertex_covers(graph);
        min_cover(graph, &candidates)
            .cloned()
            .ok_or(SearchError::NoValidCover)
    }

    /// The non-leaf count to search for, given the minimum cover.
    pub fn target_for(&self, cover: &VertexCover) -> Result<usize, SearchError> {
        let factor = self.config.non_leaf_factor;
        let cover_size = cover.size();
        factor
            .checked_mul(cover_size)
            .ok_or(SearchError::TargetOverflow { factor, cover_size })
    }

    /// Run the whole pipeline.
    pub fn solve(&self, graph: &Graph) -> Result<Solution, SearchError> {
        let min_cover = self.min_cover(graph)?;
        let target = self.target_for(&min_cover)?;
        let tree = find_spanning_tree_with_non_leaf_count(graph, target);

        info!(
            cover = %min_cover,
            target,
            found = tree.is_some(),
            "search complete"
        );
        Ok(Solution {
            min_cover,
            target,
            tree,
        })
    }
}
