// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Undirected multigraph stored as an edge list.
//!
//! This module contains the graph model the searches run over:
//! - VertexId: dense vertex index, assigned in first-appearance order
//! - Edge / Incidence: stored endpoint pairs and edges seen from one end
//! - BitSet: compact set of dense indices
//! - Graph: the edge list plus its label table
//!
//! The vertex set and the incidence lookup are derived from the edge list;
//! only the label interning table is kept alongside it.

pub mod bit_set;
pub mod edge;
pub mod parse;
pub mod vertex;

// Re-export for convenience
pub use bit_set::BitSet;
pub use edge::{Edge, EdgeId, Incidence};
pub use parse::ParseError;
pub use vertex::VertexId;

use std::collections::HashMap;

/// An undirected multigraph given by an ordered list of edges.
///
/// Duplicate edges are permitted. Vertices are the distinct endpoints of the
/// edges; they are numbered in the order they first appear, which makes every
/// enumeration over `vertices()` reproducible.
///
/// # Example
///
/// ```
/// use cover_tree_search::graph::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge("a", "b");
/// g.add_edge("b", "c");
///
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.vertex_labels().collect::<Vec<_>>(), vec!["a", "b", "c"]);
///
/// let b = g.vertex_id("b").unwrap();
/// assert_eq!(g.edges_from(b).count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<Edge>,
    labels: Vec<String>,
    ids: HashMap<String, VertexId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge between `a` and `b`.
    pub fn add_edge(&mut self, a: &str, b: &str) -> EdgeId {
        let a = self.intern(a);
        let b = self.intern(b);
        self.edges.push(Edge::new(a, b));
        self.edges.len() - 1
    }

    fn intern(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = VertexId::from(self.labels.len());
        self.labels.push(label.to_owned());
        self.ids.insert(label.to_owned(), id);
        id
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge at `id`.
    pub fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id]
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// The distinct vertices, in first-appearance order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.labels.len()).map(VertexId::from)
    }

    /// The distinct vertex labels, in first-appearance order.
    pub fn vertex_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Look up the id of a vertex label.
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    /// The label of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `v` does not belong to this graph.
    pub fn label(&self, v: VertexId) -> &str {
        &self.labels[v.as_usize()]
    }

    /// Both endpoint labels of an edge, in stored order.
    pub fn edge_labels(&self, edge: &Edge) -> (&str, &str) {
        let (a, b) = edge.endpoints();
        (self.label(a), self.label(b))
    }

    /// Every edge incident to `v`, in edge-list order.
    ///
    /// This is a linear scan over the edge list. Each [`Incidence`] already
    /// carries the endpoint opposite `v`.
    pub fn edges_from(&self, v: VertexId) -> impl Iterator<Item = Incidence> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(move |(edge_id, &edge)| {
                edge.opposite(v).map(|opposite| Incidence {
                    edge_id,
                    edge,
                    opposite,
                })
            })
    }

    /// Format an edge as `a-b` using vertex labels.
    pub fn format_edge(&self, edge: &Edge) -> String {
        let (a, b) = self.edge_labels(edge);
        format!("{}-{}", a, b)
    }
}
