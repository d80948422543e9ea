// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Preprocessing tables shared by the matching algorithms.
//!
//! Every table is derived from a single pattern and is never mutated after
//! construction:
//!
//! 1. LPS Table: the failure function used by KMP and by the hybrid's
//!    fallback phase.
//!
//! 2. Bad Character Table: the last index at which each symbol occurs in the
//!    pattern. Used by Boyer-Moore on the mismatched symbol and by the hybrid's
//!    Horspool phase on the last symbol of the window.
//!
//! 3. Good Suffix Table: for each matched suffix length, where else that
//!    suffix occurs in the pattern and whether it is also a prefix.

use fnv::FnvHashMap;

use super::Symbol;

/// Longest-proper-prefix-suffix (failure) table for a pattern.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it, so `lps[0] == 0` and `lps[i] <= i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpsTable {
    lps: Vec<usize>,
}

impl LpsTable {
    /// Builds the table for `pattern`. An empty pattern yields an empty table.
    pub fn new<T: Symbol>(pattern: &[T]) -> Self {
        let m = pattern.len();
        let mut lps = vec![0; m];

        let mut len = 0;
        let mut i = 1;

        while i < m {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len > 0 {
                // Retry the same `i` against a shorter border
                len = lps[len - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        Self { lps }
    }

    /// Border length to resume from after `matched` symbols were matched.
    ///
    /// `matched` must be in `1..=len()`.
    #[inline]
    pub fn fallback(&self, matched: usize) -> usize {
        self.lps[matched - 1]
    }

    /// Returns the raw table.
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }

    /// Length of the pattern the table was built for.
    pub fn len(&self) -> usize {
        self.lps.len()
    }

    /// Whether the table was built for an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.lps.is_empty()
    }
}

/// Bad character table mapping each pattern symbol to its last occurrence.
///
/// Symbols absent from the pattern are absent from the map and behave as
/// index −1 in shift arithmetic.
#[derive(Debug, Clone)]
pub struct BadCharTable<T: Symbol> {
    /// Maps each symbol to its rightmost occurrence in the pattern
    last: FnvHashMap<T, usize>,
    /// Length of the pattern
    pattern_len: usize,
}

impl<T: Symbol> BadCharTable<T> {
    /// Creates a new bad character table for the given pattern.
    pub fn new(pattern: &[T]) -> Self {
        let mut last = FnvHashMap::default();

        // Later positions overwrite earlier ones, leaving the rightmost index
        for (i, &sym) in pattern.iter().enumerate() {
            last.insert(sym, i);
        }

        Self {
            last,
            pattern_len: pattern.len(),
        }
    }

    /// Last index of `sym` in the pattern, or `None` if it does not occur.
    #[inline]
    pub fn last_occurrence(&self, sym: T) -> Option<usize> {
        self.last.get(&sym).copied()
    }

    /// Last index of `sym` in the pattern, or −1 if it does not occur.
    #[inline]
    pub fn index_of(&self, sym: T) -> isize {
        self.last_occurrence(sym).map_or(-1, |idx| idx as isize)
    }

    /// Boyer-Moore bad character shift for a mismatch of `sym` at pattern
    /// index `j`. May be zero or negative when `sym` occurs right of `j`.
    #[inline]
    pub fn mismatch_shift(&self, sym: T, j: usize) -> isize {
        j as isize - self.index_of(sym)
    }

    /// Horspool shift keyed on the last symbol of the current window.
    ///
    /// A symbol absent from the pattern shifts by the full pattern length;
    /// otherwise the shift is `m - 1 - last_occurrence`, never less than 1.
    #[inline]
    pub fn window_shift(&self, window_last: T) -> usize {
        match self.last_occurrence(window_last) {
            None => self.pattern_len,
            Some(idx) => (self.pattern_len - 1 - idx).max(1),
        }
    }
}

/// Good suffix tables for the Boyer-Moore algorithm.
///
/// For a matched suffix length `k` in `1..m`:
/// - `suffix(k)` is the start of the rightmost other occurrence of the
///   length-`k` suffix inside the pattern, or `None`.
/// - `is_prefix(k)` tells whether the length-`k` suffix is also a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixTable {
    suffix: Vec<Option<usize>>,
    is_prefix: Vec<bool>,
    pattern_len: usize,
}

impl GoodSuffixTable {
    /// Creates a new good suffix table for the given pattern.
    pub fn new<T: Symbol>(pattern: &[T]) -> Self {
        let m = pattern.len();
        let mut suffix = vec![None; m];
        let mut is_prefix = vec![false; m];

        // Walk each prefix end `anchor` leftwards against the pattern's tail.
        // Anchors run left to right, so the last write for a given length
        // comes from the rightmost occurrence.
        for anchor in 0..m.saturating_sub(1) {
            let mut k = 0;
            while k <= anchor && pattern[anchor - k] == pattern[m - 1 - k] {
                k += 1;
                suffix[k] = Some(anchor + 1 - k);
            }

            if k == anchor + 1 {
                is_prefix[k] = true;
            }
        }

        Self {
            suffix,
            is_prefix,
            pattern_len: m,
        }
    }

    /// Start of the rightmost other occurrence of the length-`k` suffix.
    pub fn suffix(&self, k: usize) -> Option<usize> {
        self.suffix.get(k).copied().flatten()
    }

    /// Whether the length-`k` suffix is also a prefix of the pattern.
    pub fn is_prefix(&self, k: usize) -> bool {
        self.is_prefix.get(k).copied().unwrap_or(false)
    }

    /// Good suffix shift for a mismatch at pattern index `j`.
    ///
    /// Returns 0 when nothing was matched yet (`j == m - 1`).
    pub fn mismatch_shift(&self, j: usize) -> usize {
        let k = self.pattern_len - 1 - j;
        if k == 0 {
            return 0;
        }

        match self.suffix[k] {
            Some(start) => j - start + 1,
            None => self.prefix_shift(k),
        }
    }

    /// Shift applied after a full match: align the longest proper suffix
    /// that is also a prefix, or skip the whole pattern.
    pub fn full_match_shift(&self) -> usize {
        self.prefix_shift(self.pattern_len).max(1)
    }

    /// Shift for the longest suffix shorter than `below` that is a prefix.
    fn prefix_shift(&self, below: usize) -> usize {
        (1..below)
            .rev()
            .find(|&r| self.is_prefix[r])
            .map_or(self.pattern_len, |r| self.pattern_len - r)
    }
}

/// All preprocessing artifacts for one Boyer-Moore search.
#[derive(Debug, Clone)]
pub struct BoyerMooreTables<T: Symbol> {
    /// Bad character rule table
    pub bad_char: BadCharTable<T>,

    /// Good suffix rule tables
    pub good_suffix: GoodSuffixTable,
}

impl<T: Symbol> BoyerMooreTables<T> {
    /// Builds both tables for `pattern`.
    pub fn new(pattern: &[T]) -> Self {
        Self {
            bad_char: BadCharTable::new(pattern),
            good_suffix: GoodSuffixTable::new(pattern),
        }
    }

    /// Shift after a mismatch of text symbol `sym` at pattern index `j`:
    /// the larger of both rules, never less than 1.
    #[inline]
    pub fn mismatch_shift(&self, sym: T, j: usize) -> usize {
        let bad_char = self.bad_char.mismatch_shift(sym, j);
        let good_suffix = self.good_suffix.mismatch_shift(j) as isize;
        bad_char.max(good_suffix).max(1) as usize
    }

    /// Shift after a full match.
    #[inline]
    pub fn full_match_shift(&self) -> usize {
        self.good_suffix.full_match_shift()
    }
}
