// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The closed set of matching algorithms and dispatch by name.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{MatchingError, Result};
use super::{boyer_moore, hybrid, kmp, naive, rabin_karp, MatchSet, Symbol};

/// One of the five exact matching algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Compare at every alignment
    Naive,

    /// Knuth-Morris-Pratt
    #[serde(rename = "KMP")]
    Kmp,

    /// Rolling hash with direct verification
    RabinKarp,

    /// Bad character and good suffix rules
    BoyerMoore,

    /// Horspool with a KMP fallback on degenerate shifts
    Hybrid,
}

impl Algorithm {
    /// Every algorithm, in canonical order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::RabinKarp,
        Algorithm::BoyerMoore,
        Algorithm::Hybrid,
    ];

    /// Canonical name of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "Naive",
            Algorithm::Kmp => "KMP",
            Algorithm::RabinKarp => "RabinKarp",
            Algorithm::BoyerMoore => "BoyerMoore",
            Algorithm::Hybrid => "Hybrid",
        }
    }

    /// Runs this algorithm, returning every match of `pattern` in `text`.
    pub fn find_all<T: Symbol>(self, text: &[T], pattern: &[T]) -> MatchSet {
        match self {
            Algorithm::Naive => naive::find_all(text, pattern),
            Algorithm::Kmp => kmp::find_all(text, pattern),
            Algorithm::RabinKarp => rabin_karp::find_all(text, pattern),
            Algorithm::BoyerMoore => boyer_moore::find_all(text, pattern),
            Algorithm::Hybrid => hybrid::find_all(text, pattern),
        }
    }

    /// Runs this algorithm over the Unicode scalar values of two strings.
    ///
    /// Offsets count `char`s, not bytes.
    pub fn find_all_str(self, text: &str, pattern: &str) -> MatchSet {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.find_all(&text, &pattern)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MatchingError;

    /// Parses a name case-insensitively, ignoring `-`, `_` and spaces.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| MatchingError::UnknownAlgorithm(s.to_string()))
    }
}
