// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Adaptive Horspool → KMP search.
//!
//! Phase 1 runs a Boyer-Moore-Horspool scan, shifting by the bad character
//! rule keyed on the last symbol of the window. Horspool degrades towards
//! O(n·m) on adversarial input, which shows up as a long run of shift-by-1
//! steps. Once more than `m` such steps happen in a row, phase 1 stops and
//! phase 2 finishes the text with KMP from that alignment, which is linear.
//!
//! The phases partition the text by start offset: phase 1 reports matches
//! starting before the switch point and phase 2 those starting at or after it.

use super::kmp;
use super::tables::{BadCharTable, LpsTable};
use super::{MatchSet, Symbol};

/// Result of a hybrid search, including where the KMP fallback took over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridOutcome {
    /// Every match, ascending
    pub matches: MatchSet,

    /// Text offset at which phase 2 resumed, if the Horspool scan degenerated
    pub fallback_at: Option<usize>,
}

/// Finds every occurrence of `pattern` in `text`.
pub fn find_all<T: Symbol>(text: &[T], pattern: &[T]) -> MatchSet {
    find_all_traced(text, pattern).matches
}

/// Finds every occurrence of `pattern` in `text`, reporting whether and where
/// the search fell back to KMP.
pub fn find_all_traced<T: Symbol>(text: &[T], pattern: &[T]) -> HybridOutcome {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return HybridOutcome {
            matches: MatchSet::everywhere(n),
            fallback_at: None,
        };
    }
    if m > n {
        return HybridOutcome {
            matches: MatchSet::new(),
            fallback_at: None,
        };
    }

    let bad_char = BadCharTable::new(pattern);
    let lps = LpsTable::new(pattern);

    // More than `m` consecutive shift-by-1 steps means Horspool is losing
    let threshold = m;

    let mut matches = MatchSet::new();
    let mut fallback_at = None;
    let mut small_shifts = 0;
    let mut i = 0;

    while i <= n - m {
        let mismatch = (0..m).rev().find(|&j| text[i + j] != pattern[j]);

        if mismatch.is_none() {
            matches.push(i);
            // Step by one so overlapping occurrences are not skipped
            i += 1;
            small_shifts = 0;
            continue;
        }

        let shift = bad_char.window_shift(text[i + m - 1]);
        if shift == 1 {
            small_shifts += 1;
            if small_shifts > threshold {
                fallback_at = Some(i);
                break;
            }
        } else {
            small_shifts = 0;
        }

        i += shift;
    }

    if let Some(start) = fallback_at {
        tracing::debug!(
            offset = start,
            consecutive_small_shifts = small_shifts,
            pattern_len = m,
            "Horspool scan degenerated, switching to KMP"
        );
        kmp::find_all_from(text, pattern, &lps, start, &mut matches);
    }

    HybridOutcome {
        matches,
        fallback_at,
    }
}
