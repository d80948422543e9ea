// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Static pattern descriptors used to pick an algorithm without searching.

use serde::Serialize;

use crate::matching::Symbol;

/// Number of leading symbols sampled for the repetition ratio.
pub const REPETITION_SAMPLE: usize = 30;

/// Repetition ratio above which a pattern counts as highly repetitive.
pub const HIGHLY_REPETITIVE_RATIO: f64 = 0.65;

/// Size of the alphabet over which distinct symbols are counted.
pub const ALPHABET_SIZE: usize = 256;

/// Descriptors of a pattern computed from its symbols alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PatternFeatures {
    /// Distinct symbols with a code below [`ALPHABET_SIZE`]
    pub unique_chars: usize,

    /// Fraction of the first `min(m, 30)` symbols equal to the first symbol
    pub repetition_ratio: f64,

    /// `repetition_ratio > 0.65`
    pub is_highly_repetitive: bool,
}

/// Computes the [`PatternFeatures`] of `pattern`.
///
/// Symbols with a code of [`ALPHABET_SIZE`] or more are not counted as
/// distinct. An empty pattern has no distinct symbols and a ratio of 0.
pub fn analyze_pattern<T: Symbol>(pattern: &[T]) -> PatternFeatures {
    let Some(&first) = pattern.first() else {
        return PatternFeatures::default();
    };

    let mut seen = [false; ALPHABET_SIZE];
    let mut unique_chars = 0;
    for &sym in pattern {
        let code: u32 = sym.into();
        if let Some(slot) = seen.get_mut(code as usize) {
            if !*slot {
                *slot = true;
                unique_chars += 1;
            }
        }
    }

    let sample = &pattern[..pattern.len().min(REPETITION_SAMPLE)];
    let repeats = sample.iter().filter(|&&sym| sym == first).count();
    let repetition_ratio = repeats as f64 / sample.len() as f64;

    PatternFeatures {
        unique_chars,
        repetition_ratio,
        is_highly_repetitive: repetition_ratio > HIGHLY_REPETITIVE_RATIO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_distinct_pattern() {
        let features = analyze_pattern(b"abcdef");
        assert_eq!(features.unique_chars, 6);
        assert!((features.repetition_ratio - 1.0 / 6.0).abs() < f64::EPSILON);
        assert!(!features.is_highly_repetitive);
    }

    #[test]
    fn test_repetitive_pattern() {
        let features = analyze_pattern(b"aaaaaaab");
        assert_eq!(features.unique_chars, 2);
        assert!((features.repetition_ratio - 0.875).abs() < f64::EPSILON);
        assert!(features.is_highly_repetitive);
    }

    #[test]
    fn test_ratio_at_threshold_is_not_repetitive() {
        // 13 of 20 leading symbols: exactly 0.65
        let pattern = format!("{}{}", "a".repeat(13), "b".repeat(7));
        let features = analyze_pattern(pattern.as_bytes());
        assert!((features.repetition_ratio - 0.65).abs() < 1e-12);
        assert!(!features.is_highly_repetitive);
    }

    #[test]
    fn test_sample_is_bounded() {
        let pattern = format!("{}{}", "a".repeat(10), "b".repeat(40));
        let features = analyze_pattern(pattern.as_bytes());
        assert!((features.repetition_ratio - 10.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_wide_symbols_not_counted() {
        // U+0100 lies outside the counted alphabet
        let features = analyze_pattern(&chars("aĀbĀ"));
        assert_eq!(features.unique_chars, 2);
        assert!((features.repetition_ratio - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(analyze_pattern::<u8>(&[]), PatternFeatures::default());
    }
}
