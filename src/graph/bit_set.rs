// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! BitSet type for representing sets of dense indices.
//!
//! The spanning-tree search keeps two of these: the vertices on the current
//! tree and the edge keys already used. Bit i (across all words) is set if
//! index i is in the set.
//!
//! # Examples
//!
//! ```
//! use cover_tree_search::graph::BitSet;
//!
//! let mut set = BitSet::with_capacity(70);
//! set.insert(0);
//! set.insert(65);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(65));
//! assert!(!set.contains(3));
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 65]);
//! ```

use std::fmt;

/// A fixed-capacity set of indices represented as a bitset.
///
/// Uses a vector of u64 words; `capacity` bits are addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    /// Number of u64 words needed to hold `capacity` bits.
    pub const fn words_for(capacity: usize) -> usize {
        capacity.div_ceil(64)
    }

    /// Create an empty set that can hold indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; Self::words_for(capacity)],
            capacity,
        }
    }

    /// Create a set from raw words.
    ///
    /// Bits at or beyond `capacity` are cleared.
    pub fn from_words(words: Vec<u64>, capacity: usize) -> Self {
        let mut set = Self { words, capacity };
        set.words.resize(Self::words_for(capacity), 0);
        let remaining_bits = capacity % 64;
        if remaining_bits > 0 {
            if let Some(last) = set.words.last_mut() {
                *last &= (1u64 << remaining_bits) - 1;
            }
        }
        set
    }

    /// Check if the set contains `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn contains(&self, index: usize) -> bool {
        assert!(
            index < self.capacity,
            "BitSet index out of range: {} >= {}",
            index,
            self.capacity
        );
        (self.words[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Insert `index`. Returns true if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn insert(&mut self, index: usize) -> bool {
        let present = self.contains(index);
        self.words[index / 64] |= 1u64 << (index % 64);
        !present
    }

    /// Remove `index`. Returns true if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn remove(&mut self, index: usize) -> bool {
        let present = self.contains(index);
        self.words[index / 64] &= !(1u64 << (index % 64));
        present
    }

    /// Get the number of indices in the set (population count).
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterate over all indices in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            BitIter { word }.map(move |bit| word_idx * 64 + bit)
        })
    }
}

struct BitIter {
    word: u64,
}

impl Iterator for BitIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let bit = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(bit)
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = BitSet::with_capacity(10);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.words.len(), 1);
    }

    #[test]
    fn test_zero_capacity() {
        let set = BitSet::with_capacity(0);
        assert!(set.is_empty());
        assert_eq!(set.words.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_insert_remove() {
        let mut set = BitSet::with_capacity(130);
        assert!(set.insert(129));
        assert!(!set.insert(129));
        assert!(set.contains(129));
        assert_eq!(set.len(), 1);

        assert!(set.remove(129));
        assert!(!set.remove(129));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_across_words() {
        let mut set = BitSet::with_capacity(200);
        for i in [0, 63, 64, 127, 199] {
            set.insert(i);
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 63, 64, 127, 199]);
    }

    #[test]
    fn test_from_words_masks_excess_bits() {
        let set = BitSet::from_words(vec![u64::MAX], 3);
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_display() {
        let mut set = BitSet::with_capacity(8);
        set.insert(2);
        set.insert(5);
        assert_eq!(format!("{}", set), "{2,5}");
    }

    #[test]
    #[should_panic(expected = "BitSet index out of range")]
    fn test_out_of_range() {
        let set = BitSet::with_capacity(4);
        set.contains(4);
    }
}
