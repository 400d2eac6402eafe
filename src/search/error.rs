// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the solver.
//!
//! "No matching tree" is not an error: it is reported as `None` in the
//! solution. These errors are for inputs the solver refuses or cannot cover.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The graph exceeds the configured vertex limit.
    #[error("graph has {vertices} vertices, more than the limit of {max}")]
    GraphTooLarge { vertices: usize, max: usize },

    /// No candidate covered the graph.
    #[error("no candidate vertex cover covers the graph")]
    NoValidCover,

    /// The non-leaf target does not fit in a `usize`.
    #[error("non-leaf factor {factor} times cover size {cover_size} overflows")]
    TargetOverflow { factor: usize, cover_size: usize },
}
