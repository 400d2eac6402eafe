// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for minimum vertex covers and spanning trees.
//!
//! Given a small undirected graph, the search:
//!
//! 1. Enumerates every vertex subset and selects a minimum vertex cover
//! 2. Enumerates spanning trees from each root by depth-first backtracking
//! 3. Returns the first tree whose non-leaf count is twice the cover size
//!
//! Both enumerations are exponential by design and only suitable for small
//! graphs.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed per graph, never changed during search:
//! - Vertex order and labels
//! - Incidence lists (edges touching each vertex, with the opposite endpoint)
//! - Edge keys for the used-edge set
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state owned by one search and discarded when it returns:
//! - Trail - slots plus an undo log, for the cover enumeration
//! - Used vertices, used edges, and the path, for the spanning-tree search
//!
//! # Search Algorithms
//!
//! - **Covers**: a predicate program on the [`SearchEngine`]. One round per
//!   vertex offers exclude/include; the trail undoes inclusions on backtrack.
//! - **Spanning trees**: a recursive [`SpanningTreeGenerator`] with explicit
//!   mark/unmark of its search state and a detour from dead ends.
//!
//! # Example
//!
//! ```
//! use cover_tree_search::{Graph, SearchConfig, Solver};
//!
//! let graph: Graph = "a,b;b,c;c,d".parse().unwrap();
//! let solution = Solver::new(SearchConfig::default()).solve(&graph).unwrap();
//! assert_eq!(solution.min_cover.size(), 2);
//! assert_eq!(solution.target, 4);
//! ```

pub mod context;
pub mod cover;
pub mod engine;
pub mod graph;
pub mod memo;
pub mod predicates;
pub mod search;
pub mod spanning;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use cover::{generate_vertex_covers, min_cover, VertexCover};
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use graph::{Edge, Graph, ParseError, VertexId};
pub use search::{
    find_spanning_tree_with_non_leaf_count, SearchConfig, SearchError, Solution, Solver,
};
pub use spanning::{generate_spanning_trees, RootedTree, SpanningTree, SpanningTreeGenerator};
pub use trail::Trail;
