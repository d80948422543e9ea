// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rabin-Karp search with a rolling polynomial hash.
//!
//! Each window's hash is derived from the previous one in O(1). The modulus
//! is deliberately small, so equal hashes are frequent on wide alphabets; a
//! window is only recorded after a direct comparison with the pattern.
//! Expected O(n + m), O(n·m) when collisions dominate.

use super::{MatchSet, Symbol};

/// Radix of the polynomial hash (the size of the byte alphabet).
pub const BASE: i64 = 256;

/// Prime modulus of the polynomial hash.
pub const MODULUS: i64 = 101;

/// Finds every occurrence of `pattern` in `text`.
pub fn find_all<T: Symbol>(text: &[T], pattern: &[T]) -> MatchSet {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return MatchSet::everywhere(n);
    }

    let mut matches = MatchSet::new();
    if m > n {
        return matches;
    }

    // BASE^(m-1) mod MODULUS, the weight of the symbol leaving the window
    let high = (1..m).fold(1, |h, _| (h * BASE) % MODULUS);

    let pattern_hash = hash(pattern);
    let mut window_hash = hash(&text[..m]);

    for i in 0..=n - m {
        if window_hash == pattern_hash && text[i..i + m] == *pattern {
            matches.push(i);
        }

        if i < n - m {
            window_hash = roll(window_hash, code(text[i]), code(text[i + m]), high);
        }
    }

    matches
}

#[inline]
fn code<T: Symbol>(sym: T) -> i64 {
    let value: u32 = sym.into();
    i64::from(value)
}

fn hash<T: Symbol>(symbols: &[T]) -> i64 {
    symbols
        .iter()
        .fold(0, |acc, &sym| (BASE * acc + code(sym)) % MODULUS)
}

/// Removes `leaving` from the front of the window and appends `entering`,
/// normalizing the result into `[0, MODULUS)`.
#[inline]
fn roll(window_hash: i64, leaving: i64, entering: i64, high: i64) -> i64 {
    (BASE * (window_hash - leaving * high) + entering).rem_euclid(MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_matching() {
        assert_eq!(find_all(b"ABABDABACDABABCABAB", b"ABABCABAB"), vec![10]);
        assert_eq!(find_all(b"the cat sat on the mat", b"at"), vec![5, 9, 20]);
    }

    #[test]
    fn test_rolling_hash_matches_direct_hash() {
        let text = b"rolling hashes slide";
        let m = 4;
        let high = (1..m).fold(1, |h, _| (h * BASE) % MODULUS);

        let mut rolled = hash(&text[..m]);
        for i in 0..text.len() - m {
            rolled = roll(rolled, code(text[i]), code(text[i + m]), high);
            assert_eq!(rolled, hash(&text[i + 1..i + 1 + m]));
            assert!((0..MODULUS).contains(&rolled));
        }
    }

    #[test]
    fn test_hash_collisions_are_rejected() {
        // Single symbols collide whenever their codes agree modulo 101
        let text = [0u32, 101, 202, 101];
        let pattern = [101u32];
        assert_eq!(hash(&text[..1]), hash(&pattern));
        assert_eq!(find_all(&text, &pattern), vec![1, 3]);
    }

    #[test]
    fn test_wide_symbols() {
        let text: Vec<char> = "日本語の日本".chars().collect();
        let pattern: Vec<char> = "日本".chars().collect();
        assert_eq!(find_all(&text, &pattern), vec![0, 4]);
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(find_all(b"abc", b""), vec![0, 1, 2, 3]);
        assert!(find_all(b"abc", b"abcd").is_empty());
        assert_eq!(find_all(b"abc", b"abc"), vec![0]);
    }
}
