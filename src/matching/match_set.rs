// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordered collection of match start offsets.

use serde::Serialize;

/// Ascending start offsets of every occurrence of a pattern in a text.
///
/// Occurrences may overlap: a scan never skips past a hit, so `"aa"` in
/// `"aaaa"` yields `[0, 1, 2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MatchSet {
    positions: Vec<usize>,
}

impl MatchSet {
    /// Creates an empty match set.
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Creates a match set holding every offset in `0..=text_len`.
    ///
    /// This is the result for an empty pattern, which occurs at every
    /// position including the end of the text.
    pub fn everywhere(text_len: usize) -> Self {
        Self {
            positions: (0..=text_len).collect(),
        }
    }

    /// Appends a match offset.
    ///
    /// Offsets must be pushed in strictly ascending order.
    pub fn push(&mut self, position: usize) {
        debug_assert!(
            self.positions.last().map_or(true, |&last| last < position),
            "match offsets must be strictly ascending"
        );
        self.positions.push(position);
    }

    /// Returns the offsets as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no match was found.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The leftmost match, if any.
    pub fn first(&self) -> Option<usize> {
        self.positions.first().copied()
    }

    /// Iterates over the offsets in ascending order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.positions.iter().copied()
    }

    /// Consumes the set, returning the underlying offsets.
    pub fn into_vec(self) -> Vec<usize> {
        self.positions
    }
}

impl From<Vec<usize>> for MatchSet {
    fn from(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq<[usize]> for MatchSet {
    fn eq(&self, other: &[usize]) -> bool {
        self.positions == other
    }
}

impl PartialEq<Vec<usize>> for MatchSet {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.positions == other
    }
}
