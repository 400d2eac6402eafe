// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the data structure passed to every predicate:
//! - Tier 1 (MEMO): immutable lookup tables for the graph
//! - Tier 2 (DYNAMIC): the trail and the subset state it tracks
//! - Results: statistics and the covers recorded so far
//!
//! Each enumeration builds its own context, so no search state survives from
//! one call to the next.

use crate::cover::VertexCover;
use crate::graph::{BitSet, Graph, VertexId};
use crate::memo::GraphMemo;
use crate::state::{DynamicState, Statistics};
use crate::trail::Trail;

/// Search context for the predicate engine.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: GraphMemo,         // Tier 1: immutable
///     trail: Trail,            // Tier 2: mutable, owned
///     state: DynamicState,     // Tier 2: slots on the trail
///     statistics: Statistics,  // not trailed
///     covers: Vec<VertexCover> // not trailed
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: GraphMemo,
    /// Trail for backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Counters, kept across backtracking
    pub statistics: Statistics,
    /// Covers recorded so far, in generation order
    pub covers: Vec<VertexCover>,
}

impl SearchContext {
    /// Create a new search context for `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self::with_memo(GraphMemo::new(graph))
    }

    /// Create a search context with existing MEMO data.
    pub fn with_memo(memo: GraphMemo) -> Self {
        let mut trail = Trail::new();
        let state = DynamicState::new(&mut trail, memo.vertex_count());
        Self {
            memo,
            trail,
            state,
            statistics: Statistics::new(),
            covers: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.memo.vertex_count()
    }

    /// Add a vertex to the subset in progress (trail-tracked).
    pub fn include_vertex(&mut self, v: VertexId) {
        self.state.include(&mut self.trail, v.as_usize());
    }

    /// The subset in progress.
    pub fn current_subset(&self) -> BitSet {
        self.state.subset(&self.trail)
    }

    /// The subset in progress as a cover, labels in vertex order.
    pub fn current_cover(&self) -> VertexCover {
        self.current_subset()
            .iter()
            .map(|index| self.memo.label(VertexId::from(index)))
            .collect()
    }

    /// Append the subset in progress to the recorded covers.
    pub fn record_cover(&mut self) {
        let cover = self.current_cover();
        self.covers.push(cover);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_context_new() {
        let g: Graph = "a,b;b,c".parse().unwrap();
        let ctx = SearchContext::new(&g);
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.vertex_count(), 3);
        assert!(ctx.current_subset().is_empty());
        assert!(ctx.covers.is_empty());
    }

    #[test]
    fn test_current_cover_uses_labels_in_vertex_order() {
        let g: Graph = "x,y;y,z".parse().unwrap();
        let mut ctx = SearchContext::new(&g);
        ctx.include_vertex(VertexId::new(2));
        ctx.include_vertex(VertexId::new(0));
        assert_eq!(ctx.current_cover(), VertexCover::new(["x", "z"]));
    }

    #[test]
    fn test_independent_contexts() {
        let g: Graph = "a,b".parse().unwrap();
        let mut ctx1 = SearchContext::new(&g);
        let ctx2 = SearchContext::with_memo(ctx1.memo.clone());

        ctx1.include_vertex(VertexId::new(1));
        assert_eq!(ctx1.trail.len(), 1);
        assert_eq!(ctx2.trail.len(), 0);
        assert!(ctx2.current_subset().is_empty());
    }
}
