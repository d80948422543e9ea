// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Algorithm selection from static input features.
//!
//! A selector looks only at the text length, the pattern length and the
//! pattern's [`PatternFeatures`]; it never runs a search to decide.
//!
//! # Example
//!
//! ```
//! use mauka_search::matching::Algorithm;
//! use mauka_search::selection::{AlgorithmSelector, HeuristicSelector};
//!
//! let selector = HeuristicSelector::new();
//!
//! // Short texts always use the naive scan
//! assert_eq!(selector.select_algorithm("tiny text", "text"), Some(Algorithm::Naive));
//!
//! // Repetitive medium patterns use KMP
//! let text = "a".repeat(4_000);
//! assert_eq!(selector.select_algorithm(&text, "aaaaaaab"), Some(Algorithm::Kmp));
//! ```

mod features;
mod heuristic;

pub use features::{
    analyze_pattern, PatternFeatures, ALPHABET_SIZE, HIGHLY_REPETITIVE_RATIO, REPETITION_SAMPLE,
};
pub use heuristic::HeuristicSelector;

use crate::matching::Algorithm;

/// Policy that names the algorithm to run for a text and pattern.
#[cfg_attr(test, mockall::automock)]
pub trait AlgorithmSelector {
    /// Chooses an algorithm for searching `pattern` in `text`.
    ///
    /// `None` means the selector skips analysis and the caller should run
    /// every algorithm.
    fn select_algorithm(&self, text: &str, pattern: &str) -> Option<Algorithm>;

    /// Human-readable summary of the selection strategy.
    fn describe_strategy(&self) -> String;
}
