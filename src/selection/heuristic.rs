// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The production heuristic selector.
//!
//! Decision bands are tried in order; the first rule that fires wins and a
//! band with no firing rule falls through to the next one:
//!
//! 1. short text → Naive
//! 2. empty or single-symbol pattern → Naive
//! 3. short pattern → Naive
//! 4. large text: distinct long pattern → Boyer-Moore, repetitive → KMP,
//!    very long pattern → Hybrid
//! 5. long pattern: repetitive → KMP, many distinct symbols → Boyer-Moore,
//!    larger text → Rabin-Karp
//! 6. very long pattern: repetitive → KMP, otherwise Hybrid
//! 7. medium pattern: repetitive → KMP, distinct and long enough on a larger
//!    text → Boyer-Moore, mid-sized text → Rabin-Karp
//! 8. Naive

use super::features::{analyze_pattern, PatternFeatures};
use super::AlgorithmSelector;
use crate::config::SelectorConfig;
use crate::matching::{Algorithm, Symbol};

/// Selects an algorithm from text length, pattern length and pattern features.
#[derive(Debug, Clone, Default)]
pub struct HeuristicSelector {
    config: SelectorConfig,
}

impl HeuristicSelector {
    /// Creates a selector with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selector with custom thresholds.
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Chooses an algorithm for searching `pattern` in `text`.
    pub fn choose<T: Symbol>(&self, text: &[T], pattern: &[T]) -> Algorithm {
        let (algorithm, band) = self.decide(text.len(), pattern);
        tracing::trace!(
            text_len = text.len(),
            pattern_len = pattern.len(),
            %algorithm,
            band,
            "Selected matching algorithm"
        );
        algorithm
    }

    /// Like [`choose`](Self::choose), but a missing text or pattern selects
    /// the naive scan.
    pub fn choose_checked<T: Symbol>(&self, text: Option<&[T]>, pattern: Option<&[T]>) -> Algorithm {
        match (text, pattern) {
            (Some(text), Some(pattern)) => self.choose(text, pattern),
            _ => Algorithm::Naive,
        }
    }

    fn decide<T: Symbol>(&self, n: usize, pattern: &[T]) -> (Algorithm, &'static str) {
        let c = &self.config;
        let m = pattern.len();

        if n < c.min_text_naive {
            return (Algorithm::Naive, "short-text");
        }
        if m <= 1 {
            return (Algorithm::Naive, "tiny-pattern");
        }
        if m <= c.short_pattern_max {
            return (Algorithm::Naive, "short-pattern");
        }

        let features = analyze_pattern(pattern);

        if n > c.large_text {
            if let Some(algorithm) = self.large_text_band(m, &features) {
                return (algorithm, "large-text");
            }
        }

        if m >= c.long_pattern && m < c.very_long_pattern {
            if let Some(algorithm) = self.long_pattern_band(n, &features) {
                return (algorithm, "long-pattern");
            }
        }

        if m >= c.very_long_pattern {
            let algorithm = if features.is_highly_repetitive {
                Algorithm::Kmp
            } else {
                Algorithm::Hybrid
            };
            return (algorithm, "very-long-pattern");
        }

        if m > c.short_pattern_max && m < c.long_pattern {
            if let Some(algorithm) = self.medium_pattern_band(n, m, &features) {
                return (algorithm, "medium-pattern");
            }
        }

        (Algorithm::Naive, "default")
    }

    fn large_text_band(&self, m: usize, features: &PatternFeatures) -> Option<Algorithm> {
        let c = &self.config;
        if m >= c.min_pattern_boyer_moore && features.unique_chars > c.large_text_unique_chars {
            Some(Algorithm::BoyerMoore)
        } else if features.is_highly_repetitive {
            Some(Algorithm::Kmp)
        } else if m > c.very_long_pattern {
            Some(Algorithm::Hybrid)
        } else {
            None
        }
    }

    fn long_pattern_band(&self, n: usize, features: &PatternFeatures) -> Option<Algorithm> {
        let c = &self.config;
        if features.is_highly_repetitive {
            Some(Algorithm::Kmp)
        } else if features.unique_chars > c.long_pattern_unique_chars {
            Some(Algorithm::BoyerMoore)
        } else if n > c.rabin_karp_long_min_text {
            Some(Algorithm::RabinKarp)
        } else {
            None
        }
    }

    fn medium_pattern_band(
        &self,
        n: usize,
        m: usize,
        features: &PatternFeatures,
    ) -> Option<Algorithm> {
        let c = &self.config;
        if features.repetition_ratio > c.medium_repetition_ratio {
            Some(Algorithm::Kmp)
        } else if features.unique_chars > c.medium_unique_chars
            && n > c.medium_boyer_moore_min_text
            && m >= c.min_pattern_boyer_moore
        {
            Some(Algorithm::BoyerMoore)
        } else if n > c.rabin_karp_medium_min_text
            && n <= c.rabin_karp_long_min_text
            && m > c.rabin_karp_min_pattern
        {
            Some(Algorithm::RabinKarp)
        } else {
            None
        }
    }
}

impl AlgorithmSelector for HeuristicSelector {
    fn select_algorithm(&self, text: &str, pattern: &str) -> Option<Algorithm> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        Some(self.choose(&text, &pattern))
    }

    fn describe_strategy(&self) -> String {
        format!(
            "Heuristic strategy: Naive for texts under {} symbols or patterns up to {}. \
             Boyer-Moore for distinct patterns, KMP for repetitive ones, Hybrid for \
             patterns of {} or more, Rabin-Karp for mid-sized texts.",
            self.config.min_text_naive, self.config.short_pattern_max, self.config.very_long_pattern
        )
    }
}
