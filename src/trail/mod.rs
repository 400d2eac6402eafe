// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking store.
//!
//! The trail owns a set of u64 slots. Every write through the trail records
//! the slot's previous value, so rewinding to a checkpoint restores all slots
//! written since, in O(changes) time.
//!
//! # Example
//!
//! ```
//! use cover_tree_search::trail::Trail;
//!
//! let mut trail = Trail::new();
//! let slot = trail.alloc(0);
//!
//! let checkpoint = trail.checkpoint();
//! trail.set(slot, 42);
//! assert_eq!(trail.get(slot), 42);
//!
//! trail.rewind_to(checkpoint);
//! assert_eq!(trail.get(slot), 0);
//! ```

/// Index of a slot owned by a [`Trail`].
pub type Slot = usize;

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    slot: Slot,
    old_value: u64,
}

/// Slot store with undo log.
///
/// # Memory Model
///
/// - DYNAMIC: the slots are the mutable search state (Tier 2)
/// - Each SearchContext owns its own trail, so independent searches never
///   share undo history
#[derive(Debug)]
pub struct Trail {
    /// Current value of each slot
    slots: Vec<u64>,
    /// Undo log, oldest first
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum trail size.
    const MAX_SIZE: usize = 1 << 16;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            entries: Vec::with_capacity(64),
        }
    }

    /// Allocate a new slot with an initial value. Allocation is not trailed.
    pub fn alloc(&mut self, initial: u64) -> Slot {
        self.slots.push(initial);
        self.slots.len() - 1
    }

    /// Allocate `count` consecutive slots, returning the first.
    pub fn alloc_many(&mut self, count: usize, initial: u64) -> Slot {
        let first = self.slots.len();
        self.slots.resize(first + count, initial);
        first
    }

    /// Read a slot.
    pub fn get(&self, slot: Slot) -> u64 {
        self.slots[slot]
    }

    /// Read `count` consecutive slots.
    pub fn get_many(&self, first: Slot, count: usize) -> &[u64] {
        &self.slots[first..first + count]
    }

    /// Write a slot, recording the old value.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search).
    pub fn set(&mut self, slot: Slot, value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        let old_value = self.slots[slot];
        self.entries.push(TrailEntry { slot, old_value });
        self.slots[slot] = value;
    }

    /// Write a slot only if the value differs.
    ///
    /// Returns true if the value was changed.
    pub fn maybe_set(&mut self, slot: Slot, value: u64) -> bool {
        if self.slots[slot] != value {
            self.set(slot, value);
            true
        } else {
            false
        }
    }

    /// The current position, for a later [`rewind_to`](Self::rewind_to).
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Undo every change made after `checkpoint`.
    ///
    /// Returns the number of changes undone.
    pub fn rewind_to(&mut self, checkpoint: usize) -> usize {
        let mut undone = 0;
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                self.slots[entry.slot] = entry.old_value;
                undone += 1;
            }
        }
        undone
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_checkpoint_and_rewind() {
        let mut trail = Trail::new();
        let s = trail.alloc(1);

        trail.set(s, 10);
        trail.set(s, 20);
        assert_eq!(trail.len(), 2);

        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 2);

        trail.set(s, 30);
        trail.set(s, 40);
        assert_eq!(trail.get(s), 40);

        assert_eq!(trail.rewind_to(checkpoint), 2);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.get(s), 20);

        assert_eq!(trail.rewind_to(0), 2);
        assert_eq!(trail.get(s), 1);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();
        let first = trail.alloc_many(3, 0);

        trail.set(first, 1);
        let cp1 = trail.checkpoint();
        trail.set(first + 1, 2);
        let cp2 = trail.checkpoint();
        trail.set(first + 2, 3);
        assert_eq!(trail.get_many(first, 3), &[1, 2, 3]);

        trail.rewind_to(cp2);
        assert_eq!(trail.get_many(first, 3), &[1, 2, 0]);

        trail.rewind_to(cp1);
        assert_eq!(trail.get_many(first, 3), &[1, 0, 0]);
    }

    #[test]
    fn test_maybe_set() {
        let mut trail = Trail::new();
        let s = trail.alloc(5);
        assert!(!trail.maybe_set(s, 5));
        assert!(trail.is_empty());
        assert!(trail.maybe_set(s, 6));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_rewind_to_current_is_noop() {
        let mut trail = Trail::new();
        let s = trail.alloc(0);
        trail.set(s, 1);
        assert_eq!(trail.rewind_to(trail.checkpoint()), 0);
        assert_eq!(trail.get(s), 1);
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();
        let s = trail.alloc(0);
        for i in 0..=Trail::MAX_SIZE {
            trail.set(s, i as u64);
        }
    }
}
