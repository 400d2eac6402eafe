// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration.

/// Default upper bound on the number of vertices the solver will accept.
///
/// The cover enumeration visits 2^n subsets; 20 vertices is about a million.
pub const DEFAULT_MAX_VERTICES: usize = 20;

/// Default multiplier from minimum cover size to target non-leaf count.
pub const DEFAULT_NON_LEAF_FACTOR: usize = 2;

/// Settings for [`Solver`](crate::search::Solver).
///
/// # Example
///
/// ```
/// use cover_tree_search::search::SearchConfig;
///
/// let config = SearchConfig::default().with_max_vertices(12);
/// assert_eq!(config.max_vertices, 12);
/// assert_eq!(config.non_leaf_factor, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Graphs with more vertices are refused before any enumeration.
    pub max_vertices: usize,
    /// Target non-leaf count is this times the minimum cover size.
    pub non_leaf_factor: usize,
}

impl SearchConfig {
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    pub fn with_non_leaf_factor(mut self, non_leaf_factor: usize) -> Self {
        self.non_leaf_factor = non_leaf_factor;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            non_leaf_factor: DEFAULT_NON_LEAF_FACTOR,
        }
    }
}
