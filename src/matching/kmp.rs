// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt search.
//!
//! Linear time, O(n + m). The text index never moves backwards: on a
//! mismatch the pattern index falls back along the [`LpsTable`], and after a
//! full match it falls back the same way so overlapping occurrences are found.

use super::tables::LpsTable;
use super::{MatchSet, Symbol};

/// Finds every occurrence of `pattern` in `text`.
pub fn find_all<T: Symbol>(text: &[T], pattern: &[T]) -> MatchSet {
    if pattern.is_empty() {
        return MatchSet::everywhere(text.len());
    }

    let mut matches = MatchSet::new();
    if pattern.len() > text.len() {
        return matches;
    }

    let lps = LpsTable::new(pattern);
    find_all_from(text, pattern, &lps, 0, &mut matches);
    matches
}

/// Runs the KMP scan over `text[start..]` with the pattern index reset to 0,
/// appending every match found to `matches`.
///
/// `lps` must have been built for `pattern`, which must not be empty.
pub fn find_all_from<T: Symbol>(
    text: &[T],
    pattern: &[T],
    lps: &LpsTable,
    start: usize,
    matches: &mut MatchSet,
) {
    let n = text.len();
    let m = pattern.len();
    debug_assert!(m > 0, "KMP scan requires a non-empty pattern");
    debug_assert_eq!(lps.len(), m);

    let mut i = start;
    let mut j = 0;

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                matches.push(i - m);
                j = lps.fallback(j);
            }
        } else if j > 0 {
            j = lps.fallback(j);
        } else {
            i += 1;
        }
    }
}
