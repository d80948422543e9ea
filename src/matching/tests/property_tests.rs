// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the matching algorithms and their tables.

use proptest::prelude::*;

use super::reference_matches;
use crate::matching::tables::{GoodSuffixTable, LpsTable};
use crate::matching::{hybrid, Algorithm};

// Small alphabets make matches, overlaps and partial matches frequent
fn binary_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,80}").unwrap()
}

fn binary_pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,8}").unwrap()
}

fn dna_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ACGT]{0,400}").unwrap()
}

fn dna_pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ACGT]{1,12}").unwrap()
}

proptest! {
    // Property: all algorithms produce the same match set as the reference
    #[test]
    fn prop_algorithms_agree_on_binary_alphabet(
        text in binary_text_strategy(),
        pattern in binary_pattern_strategy()
    ) {
        let expected = reference_matches(text.as_bytes(), pattern.as_bytes());
        for algorithm in Algorithm::ALL {
            let found = algorithm.find_all(text.as_bytes(), pattern.as_bytes());
            prop_assert_eq!(found.as_slice(), expected.as_slice(), "{}", algorithm);
        }
    }

    #[test]
    fn prop_algorithms_agree_on_dna_alphabet(
        text in dna_text_strategy(),
        pattern in dna_pattern_strategy()
    ) {
        let expected = reference_matches(text.as_bytes(), pattern.as_bytes());
        for algorithm in Algorithm::ALL {
            let found = algorithm.find_all(text.as_bytes(), pattern.as_bytes());
            prop_assert_eq!(found.as_slice(), expected.as_slice(), "{}", algorithm);
        }
    }

    // Property: matching over chars agrees with matching over the same ASCII bytes
    #[test]
    fn prop_char_and_byte_offsets_agree_for_ascii(
        text in "[a-z ]{0,120}",
        pattern in "[a-z]{1,4}"
    ) {
        for algorithm in Algorithm::ALL {
            let by_char = algorithm.find_all_str(&text, &pattern);
            let by_byte = algorithm.find_all(text.as_bytes(), pattern.as_bytes());
            prop_assert_eq!(by_char, by_byte);
        }
    }

    // Property: planted occurrences are always found
    #[test]
    fn prop_planted_occurrences_found(
        pattern in "[a-z]{3,10}",
        fragments in prop::collection::vec("[0-9 ]{1,30}", 1..8)
    ) {
        let text = fragments.join(pattern.as_str());

        let mut planted = Vec::new();
        let mut pos = 0;
        for fragment in &fragments[..fragments.len() - 1] {
            pos += fragment.len();
            planted.push(pos);
            pos += pattern.len();
        }

        for algorithm in Algorithm::ALL {
            let found = algorithm.find_all(text.as_bytes(), pattern.as_bytes());
            prop_assert_eq!(found.as_slice(), planted.as_slice(), "{}", algorithm);
        }
    }

    // Property: an empty pattern matches at every offset 0..=n
    #[test]
    fn prop_empty_pattern_law(text in ".{0,60}") {
        let symbols: Vec<char> = text.chars().collect();
        let empty: &[char] = &[];
        let expected: Vec<usize> = (0..=symbols.len()).collect();
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.find_all(&symbols[..], empty).into_vec(), expected.clone());
        }
    }

    // Property: a pattern longer than the text never matches
    #[test]
    fn prop_oversized_pattern_law(text in "[ab]{0,20}", extra in "[ab]{1,5}") {
        let pattern = format!("{text}{extra}");
        for algorithm in Algorithm::ALL {
            prop_assert!(algorithm.find_all(text.as_bytes(), pattern.as_bytes()).is_empty());
        }
    }

    // Property: the hybrid agrees with the reference on inputs built to
    // trip its degeneracy threshold
    #[test]
    fn prop_hybrid_on_repetitive_inputs(
        run in 0usize..200,
        head in 0usize..12,
        tail in "[ab]{1,2}",
        text_tail in "[ab]{0,4}"
    ) {
        let text = format!("{}{}", "a".repeat(run), text_tail);
        let pattern = format!("{}{}", "a".repeat(head), tail);

        let outcome = hybrid::find_all_traced(text.as_bytes(), pattern.as_bytes());
        let expected = reference_matches(text.as_bytes(), pattern.as_bytes());
        prop_assert_eq!(outcome.matches.as_slice(), expected.as_slice());
    }

    // Property: LPS entries are the longest proper borders
    #[test]
    fn prop_lps_is_longest_border(pattern in "[ab]{1,16}") {
        let bytes = pattern.as_bytes();
        let table = LpsTable::new(bytes);

        prop_assert_eq!(table.as_slice()[0], 0);
        for i in 0..bytes.len() {
            let prefix = &bytes[..=i];
            let longest = (0..=i)
                .rev()
                .find(|&len| prefix[..len] == prefix[prefix.len() - len..])
                .unwrap_or(0);
            prop_assert_eq!(table.as_slice()[i], longest);
            prop_assert!(table.as_slice()[i] <= i);
        }
    }

    // Property: good suffix tables match a brute-force recomputation
    #[test]
    fn prop_good_suffix_matches_brute_force(pattern in "[abc]{1,14}") {
        let bytes = pattern.as_bytes();
        let m = bytes.len();
        let table = GoodSuffixTable::new(bytes);

        for k in 1..m {
            let tail = &bytes[m - k..];
            let rightmost = (0..m - k).rev().find(|&s| &bytes[s..s + k] == tail);
            prop_assert_eq!(table.suffix(k), rightmost);
            prop_assert_eq!(table.is_prefix(k), bytes[..k] == *tail);
        }
    }
}
