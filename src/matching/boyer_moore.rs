// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore search with both the bad character and good suffix rules.
//!
//! The pattern is aligned against the text and compared right to left. On a
//! mismatch the alignment advances by the larger of the two rule shifts; on a
//! full match it advances so that the longest suffix which is also a prefix
//! lines up, keeping overlapping occurrences reachable.
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m²) for the good suffix walk, O(m) for bad characters
//! - Best case: O(n/m) comparisons
//! - Worst case: O(n·m). The good suffix shift is not bounded with a
//!   Galil-style memory, so periodic inputs such as `a^m` in `a^n` rescan.

use super::tables::BoyerMooreTables;
use super::{MatchSet, Symbol};

/// Finds every occurrence of `pattern` in `text`.
pub fn find_all<T: Symbol>(text: &[T], pattern: &[T]) -> MatchSet {
    if pattern.is_empty() {
        return MatchSet::everywhere(text.len());
    }
    if pattern.len() > text.len() {
        return MatchSet::new();
    }

    BoyerMooreMatcher::new(pattern).find_all(text)
}

/// A pattern preprocessed for Boyer-Moore search.
///
/// Building the matcher once lets the same tables serve several texts.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher<T: Symbol> {
    /// The pattern being searched for
    pattern: Vec<T>,

    /// Bad character and good suffix tables
    tables: BoyerMooreTables<T>,
}

impl<T: Symbol> BoyerMooreMatcher<T> {
    /// Preprocesses `pattern`.
    pub fn new(pattern: &[T]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            tables: BoyerMooreTables::new(pattern),
        }
    }

    /// The preprocessing tables for this pattern.
    pub fn tables(&self) -> &BoyerMooreTables<T> {
        &self.tables
    }

    /// Finds every occurrence of the pattern in `text`.
    pub fn find_all(&self, text: &[T]) -> MatchSet {
        let mut matches = MatchSet::new();
        self.scan(text, |position| {
            matches.push(position);
            true
        });
        matches
    }

    /// Finds the leftmost occurrence of the pattern in `text`.
    pub fn find_first(&self, text: &[T]) -> Option<usize> {
        let mut first = None;
        self.scan(text, |position| {
            first = Some(position);
            false
        });
        first
    }

    /// Scans `text`, handing each match to `on_match` until it returns `false`.
    fn scan(&self, text: &[T], mut on_match: impl FnMut(usize) -> bool) {
        let n = text.len();
        let m = self.pattern.len();

        if m == 0 {
            for position in 0..=n {
                if !on_match(position) {
                    return;
                }
            }
            return;
        }
        if m > n {
            return;
        }

        let mut i = 0;
        while i <= n - m {
            // Compare from right to left
            let mismatch = (0..m).rev().find(|&j| self.pattern[j] != text[i + j]);

            match mismatch {
                None => {
                    if !on_match(i) {
                        return;
                    }
                    i += self.tables.full_match_shift();
                }
                Some(j) => {
                    i += self.tables.mismatch_shift(text[i + j], j);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_matching() {
        assert_eq!(find_all(b"ABABDABACDABABCABAB", b"ABABCABAB"), vec![10]);
        assert_eq!(
            find_all(b"This is a test. Another test. Final test.", b"test"),
            vec![10, 24, 36]
        );
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(find_all(b"aaaaa", b"aaa"), vec![0, 1, 2]);
        assert_eq!(find_all(b"banana", b"ana"), vec![1, 3]);
    }

    #[test]
    fn test_periodic_worst_case_is_complete() {
        let text = vec![b'a'; 200];
        let pattern = vec![b'a'; 7];
        let expected: Vec<usize> = (0..=193).collect();
        assert_eq!(find_all(&text, &pattern), expected);
    }

    #[test]
    fn test_find_first() {
        let matcher = BoyerMooreMatcher::new(b"needle");
        let text = b"Finding a needle in a haystack, then another needle.";

        assert_eq!(matcher.find_first(text), Some(10));
        assert_eq!(matcher.find_all(text), vec![10, 45]);
        assert_eq!(matcher.find_first(b"no match here"), None);
    }

    #[test]
    fn test_matcher_reuses_tables() {
        let matcher = BoyerMooreMatcher::new(b"abcab");
        let tables = matcher.tables();

        // "ab" is both a suffix and a prefix, so a full match shifts by 3
        assert_eq!(tables.full_match_shift(), 3);
        assert_eq!(tables.bad_char.last_occurrence(b'c'), Some(2));
        assert_eq!(matcher.find_all(b"abcabcab"), vec![0, 3]);
        assert_eq!(matcher.find_all(b"xxabcabxx"), vec![2]);
    }

    #[test]
    fn test_unicode_symbols() {
        let text: Vec<char> = "Welcome to the café, café lovers".chars().collect();
        let pattern: Vec<char> = "café".chars().collect();
        assert_eq!(find_all(&text, &pattern), vec![15, 21]);
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(find_all(b"xy", b""), vec![0, 1, 2]);
        assert!(find_all(b"pat", b"pattern").is_empty());
        assert_eq!(find_all(b"pattern", b"pattern"), vec![0]);
        assert_eq!(find_all(b"This ends with pattern", b"pattern"), vec![15]);
    }
}
