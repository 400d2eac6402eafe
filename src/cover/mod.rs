// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex covers: exhaustive enumeration, validation, and selection.
//!
//! The enumeration is deliberately exponential: for n vertices it yields all
//! 2^n subsets. It is only suitable for small graphs.
//!
//! # Example
//!
//! ```
//! use cover_tree_search::cover::{generate_vertex_covers, min_cover};
//! use cover_tree_search::graph::Graph;
//!
//! let g: Graph = "a,b;b,c;c,d;a,d".parse().unwrap();
//! let candidates = generate_vertex_covers(&g);
//! assert_eq!(candidates.len(), 16);
//!
//! let min = min_cover(&g, &candidates).unwrap();
//! assert_eq!(min.size(), 2);
//! ```

use std::fmt;

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::graph::Graph;
use crate::predicates::{FailPredicate, RecordCoverPredicate, SubsetPredicate};
use crate::state::{Counters, Statistics};

/// A collection of vertex labels, interpreted as a set.
///
/// Duplicates are tolerated by [`has_vertex`](Self::has_vertex) and
/// [`covers`](Self::covers), but they are counted by [`size`](Self::size).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VertexCover {
    vertices: Vec<String>,
}

impl VertexCover {
    pub fn new<I, S>(vertices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
        }
    }

    /// The vertices, as stored.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn has_vertex(&self, v: &str) -> bool {
        self.vertices.iter().any(|vertex| vertex == v)
    }

    /// Number of stored entries (duplicates included).
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Does every edge of `graph` have at least one endpoint in this cover?
    ///
    /// Recomputed on every call; the answer depends on the graph.
    pub fn covers(&self, graph: &Graph) -> bool {
        graph.edges().iter().all(|edge| {
            let (a, b) = graph.edge_labels(edge);
            self.has_vertex(a) || self.has_vertex(b)
        })
    }
}

impl<S: Into<String>> FromIterator<S> for VertexCover {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for VertexCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.vertices.join(","))
    }
}

/// Every subset of the graph's vertices, as candidate covers.
///
/// Yields exactly 2^n candidates for n vertices, including the empty set and
/// the full vertex set. Candidates are not filtered by validity. The order is
/// exclude-first over the vertex order: the empty set comes first and the
/// full set last.
pub fn generate_vertex_covers(graph: &Graph) -> Vec<VertexCover> {
    generate_vertex_covers_with_statistics(graph).0
}

/// Like [`generate_vertex_covers`], also returning the search statistics.
pub fn generate_vertex_covers_with_statistics(graph: &Graph) -> (Vec<VertexCover>, Statistics) {
    let mut ctx = SearchContext::new(graph);
    let engine = EngineBuilder::new()
        .add(Box::new(SubsetPredicate))
        .add(Statistics::counting_predicate(Counters::CandidateCovers, None))
        .add(Box::new(RecordCoverPredicate))
        .terminal(FailPredicate)
        .build();

    let suspended = engine.search(&mut ctx);
    debug_assert!(suspended.is_none(), "cover program never suspends");

    debug!(
        vertices = graph.vertex_count(),
        candidates = ctx.covers.len(),
        "enumerated vertex covers"
    );
    (ctx.covers, ctx.statistics)
}

/// The first smallest candidate that covers `graph`.
///
/// Scans in the given order and keeps a candidate only if it is strictly
/// smaller than the best so far, so ties go to the earliest. Returns `None`
/// if no candidate covers the graph.
pub fn min_cover<'a>(graph: &Graph, candidates: &'a [VertexCover]) -> Option<&'a VertexCover> {
    let mut best: Option<&VertexCover> = None;
    for candidate in candidates {
        let smaller = best.map_or(true, |b| candidate.size() < b.size());
        if smaller && candidate.covers(graph) {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle4() -> Graph {
        "a,b;b,c;c,d;a,d".parse().unwrap()
    }

    #[test]
    fn test_covers() {
        let g = cycle4();
        assert!(VertexCover::new(["a", "c"]).covers(&g));
        assert!(VertexCover::new(["b", "d"]).covers(&g));
        assert!(!VertexCover::new(["a", "b"]).covers(&g));
    }

    #[test]
    fn test_empty_cover_covers_edgeless_graph() {
        assert!(VertexCover::default().covers(&Graph::new()));
    }

    #[test]
    fn test_duplicates_inflate_size() {
        let cover = VertexCover::new(["a", "a", "c"]);
        assert_eq!(cover.size(), 3);
        assert!(cover.covers(&cycle4()));
    }

    #[test]
    fn test_generation_order_is_exclude_first() {
        let g: Graph = "a,b".parse().unwrap();
        let covers = generate_vertex_covers(&g);
        assert_eq!(
            covers,
            vec![
                VertexCover::new(Vec::<String>::new()),
                VertexCover::new(["b"]),
                VertexCover::new(["a"]),
                VertexCover::new(["a", "b"]),
            ]
        );
    }

    #[test]
    fn test_empty_graph_has_one_candidate() {
        let covers = generate_vertex_covers(&Graph::new());
        assert_eq!(covers, vec![VertexCover::default()]);
    }

    #[test]
    fn test_statistics_count_candidates() {
        let (covers, stats) = generate_vertex_covers_with_statistics(&cycle4());
        assert_eq!(stats.get(Counters::CandidateCovers), covers.len() as u64);
    }

    #[test]
    fn test_min_cover_ties_go_to_earliest() {
        let g = cycle4();
        let candidates = vec![
            VertexCover::new(["a", "b", "c"]),
            VertexCover::new(["b", "d"]),
            VertexCover::new(["a", "c"]),
        ];
        assert_eq!(min_cover(&g, &candidates), Some(&candidates[1]));
    }

    #[test]
    fn test_min_cover_none_when_nothing_covers() {
        let g = cycle4();
        let candidates = vec![VertexCover::new(["a"]), VertexCover::new(["a", "b"])];
        assert_eq!(min_cover(&g, &candidates), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(VertexCover::new(["b", "d"]).to_string(), "{b,d}");
    }
}
