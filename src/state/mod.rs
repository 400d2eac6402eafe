// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, discarded after each search).
//!
//! - DynamicState: the in-progress vertex subset, held in trail slots
//! - Statistics: search counters

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::graph::BitSet;
use crate::trail::{Slot, Trail};

/// Mutable subset state for the cover enumeration.
///
/// The subset being built is a bitset over vertex indices whose words live
/// in trail slots, so every inclusion is undone when the engine backtracks
/// past it.
#[derive(Debug)]
pub struct DynamicState {
    /// First trail slot of the subset bitset.
    subset_slot: Slot,
    /// Number of u64 words in the subset bitset.
    subset_words: usize,
    /// Number of vertices the subset ranges over.
    vertex_count: usize,
}

impl DynamicState {
    /// Allocate the subset words on `trail`, all cleared.
    pub fn new(trail: &mut Trail, vertex_count: usize) -> Self {
        let subset_words = BitSet::words_for(vertex_count);
        Self {
            subset_slot: trail.alloc_many(subset_words, 0),
            subset_words,
            vertex_count,
        }
    }

    /// Add vertex `index` to the subset (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if `index >= vertex_count`.
    pub fn include(&self, trail: &mut Trail, index: usize) {
        assert!(
            index < self.vertex_count,
            "Vertex index out of range: {} >= {}",
            index,
            self.vertex_count
        );
        let slot = self.subset_slot + index / 64;
        let word = trail.get(slot) | (1u64 << (index % 64));
        trail.maybe_set(slot, word);
    }

    /// Snapshot of the current subset.
    pub fn subset(&self, trail: &Trail) -> BitSet {
        BitSet::from_words(
            trail.get_many(self.subset_slot, self.subset_words).to_vec(),
            self.vertex_count,
        )
    }
}
