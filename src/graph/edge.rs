// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Undirected edges and vertex incidences.
//!
//! An [`Edge`] stores its endpoints in the order they were given. The graph is
//! undirected, so either endpoint can be the "from" side of a traversal, but
//! equality and hashing follow the stored order: `(a,b)` and `(b,a)` are
//! different keys.
//!
//! Traversals never ask an edge for its opposite endpoint directly. Instead,
//! [`Graph::edges_from`](crate::graph::Graph::edges_from) yields
//! [`Incidence`] values whose `opposite` field was computed while scanning
//! only the edges that touch the query vertex.

use crate::graph::VertexId;

/// Position of an edge in the graph's edge list.
pub type EdgeId = usize;

/// An undirected edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    a: VertexId,
    b: VertexId,
}

impl Edge {
    /// Create an edge with the given endpoints, in stored order.
    pub const fn new(a: VertexId, b: VertexId) -> Self {
        Self { a, b }
    }

    /// The first stored endpoint.
    pub fn a(&self) -> VertexId {
        self.a
    }

    /// The second stored endpoint.
    pub fn b(&self) -> VertexId {
        self.b
    }

    /// Both endpoints, in stored order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }
}

/// An edge seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    /// Index of the edge in the graph's edge list.
    pub edge_id: EdgeId,
    /// The edge itself.
    pub edge: Edge,
    /// The endpoint on the other side from the query vertex.
    pub opposite: VertexId,
}
