// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use cover_tree_search::{Graph, SpanningTree, VertexId};

/// The 4-cycle a-b-c-d-a.
pub const CYCLE4: &str = "a,b;b,c;c,d;a,d";

/// The 3-edge path a-b-c-d.
pub const PATH3: &str = "a,b;b,c;c,d";

/// The 8-edge path a-b-...-i (9 vertices).
pub const PATH8: &str = "a,b;b,c;c,d;d,e;e,f;f,g;g,h;h,i";

/// Parse a graph description, panicking on malformed test input.
pub fn graph(description: &str) -> Graph {
    description
        .parse()
        .unwrap_or_else(|e| panic!("bad test graph {:?}: {}", description, e))
}

/// Look up a vertex by label, panicking if it is missing.
pub fn vertex(graph: &Graph, label: &str) -> VertexId {
    graph
        .vertex_id(label)
        .unwrap_or_else(|| panic!("no vertex {:?}", label))
}

/// The edges of a tree as `a-b` strings.
pub fn edge_labels(graph: &Graph, tree: &SpanningTree) -> Vec<String> {
    tree.edges().iter().map(|e| graph.format_edge(e)).collect()
}
