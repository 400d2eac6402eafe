// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex identifiers.
//!
//! Vertex labels are arbitrary strings in the graph description, but the
//! search works on dense indices. A [`VertexId`] is the position of a label
//! in the graph's first-appearance order.

use std::fmt;

/// A vertex index in the range `0..graph.vertex_count()`.
///
/// This is a newtype wrapper to prevent mixing vertex indices with edge
/// indices or counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    /// Create a vertex id from a raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the underlying value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Get the vertex id as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        let index = u32::try_from(index).expect("vertex index exceeds u32::MAX");
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
