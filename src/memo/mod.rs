// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, computed once per graph).
//!
//! Both searches look up the same derived facts about the graph over and
//! over: the vertex order, the incidences of each vertex, and which edges
//! share a key. These are computed once here and never change during search.

use crate::graph::{Edge, EdgeId, Graph, Incidence, VertexId};
use std::collections::HashMap;

/// Precomputed lookup tables for one graph.
#[derive(Debug, Clone)]
pub struct GraphMemo {
    /// Vertex labels in first-appearance order.
    pub labels: Vec<String>,

    /// `incidences[v]` lists every edge touching `v`, in edge-list order.
    pub incidences: Vec<Vec<Incidence>>,

    /// `edge_keys[e]` is the index of the first edge equal to edge `e`.
    ///
    /// Structurally equal edges (same endpoints in the same stored order)
    /// share a key, so marking one as used marks all of them.
    pub edge_keys: Vec<usize>,

    /// The graph's edges, in order.
    pub edges: Vec<Edge>,
}

impl GraphMemo {
    /// Compute all MEMO tables for `graph`.
    pub fn new(graph: &Graph) -> Self {
        let incidences = graph
            .vertices()
            .map(|v| graph.edges_from(v).collect())
            .collect();

        let mut first_seen: HashMap<Edge, EdgeId> = HashMap::new();
        let edge_keys = graph
            .edges()
            .iter()
            .enumerate()
            .map(|(id, edge)| *first_seen.entry(*edge).or_insert(id))
            .collect();

        Self {
            labels: graph.vertex_labels().map(str::to_owned).collect(),
            incidences,
            edge_keys,
            edges: graph.edges().to_vec(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The incidences of `v`.
    pub fn incidences(&self, v: VertexId) -> &[Incidence] {
        &self.incidences[v.as_usize()]
    }

    /// The used-edge key of edge `id`.
    pub fn edge_key(&self, id: EdgeId) -> usize {
        self.edge_keys[id]
    }

    pub fn label(&self, v: VertexId) -> &str {
        &self.labels[v.as_usize()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incidences_match_graph() {
        let g: Graph = "a,b;b,c;c,d;a,d".parse().unwrap();
        let memo = GraphMemo::new(&g);
        assert_eq!(memo.vertex_count(), 4);
        for v in g.vertices() {
            let expected: Vec<_> = g.edges_from(v).collect();
            assert_eq!(memo.incidences(v), expected.as_slice());
        }
    }

    #[test]
    fn test_edge_keys_follow_stored_order() {
        let g: Graph = "a,b;b,a;a,b;b,c".parse().unwrap();
        let memo = GraphMemo::new(&g);
        assert_eq!(memo.edge_keys, vec![0, 1, 0, 3]);
    }

    #[test]
    fn test_empty_graph() {
        let memo = GraphMemo::new(&Graph::new());
        assert_eq!(memo.vertex_count(), 0);
        assert_eq!(memo.edge_count(), 0);
    }
}
