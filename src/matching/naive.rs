// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Naive scan: compare the pattern at every alignment.
//!
//! O(n·m) worst case with no preprocessing. It is the reference the other
//! algorithms are checked against and the selector's choice for short inputs.

use super::{MatchSet, Symbol};

/// Finds every occurrence of `pattern` in `text`.
pub fn find_all<T: Symbol>(text: &[T], pattern: &[T]) -> MatchSet {
    let n = text.len();
    let m = pattern.len();

    let mut matches = MatchSet::new();
    if m > n {
        return matches;
    }

    for i in 0..=n - m {
        if text[i..i + m] == *pattern {
            matches.push(i);
        }
    }

    matches
}
