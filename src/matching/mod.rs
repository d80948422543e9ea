// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact substring matching algorithms.
//!
//! Five algorithms share one contract: given a text and a pattern, return the
//! ascending start offsets of every occurrence, overlaps included.
//!
//! - [`naive`]: compare at every alignment, O(n·m)
//! - [`kmp`]: Knuth-Morris-Pratt, O(n + m)
//! - [`rabin_karp`]: rolling hash with verification, expected O(n + m)
//! - [`boyer_moore`]: bad character + good suffix rules, sublinear on average
//! - [`hybrid`]: Horspool that falls back to KMP when its shifts degenerate
//!
//! Two conventions hold for all of them: an empty pattern matches at every
//! offset `0..=n`, and a pattern longer than the text never matches.
//!
//! # Example
//!
//! ```
//! use mauka_search::matching::Algorithm;
//!
//! let text = b"ABABDABACDABABCABAB";
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(algorithm.find_all(text, b"ABABCABAB"), vec![10]);
//! }
//! ```
//!
//! Algorithms are generic over any [`Symbol`]: bytes, UTF-16 units, `char`s.
//! Preprocessing tables live for the duration of one call and nothing is
//! shared between calls, so searches may run on any number of threads.

mod algorithm;
mod error;
mod match_set;

pub mod boyer_moore;
pub mod hybrid;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;
pub mod tables;

use std::fmt::Debug;
use std::hash::Hash;

// Re-exports
pub use algorithm::Algorithm;
pub use error::{MatchingError, Result};
pub use match_set::MatchSet;

/// A unit of text the algorithms can compare, hash, and index tables by.
pub trait Symbol: Copy + Eq + Hash + Debug + Into<u32> {}

impl<T> Symbol for T where T: Copy + Eq + Hash + Debug + Into<u32> {}

#[cfg(test)]
mod tests;
