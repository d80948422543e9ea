//! Algorithm selector configuration module.
//!
//! Thresholds of the heuristic selector's decision bands. The defaults are the
//! production heuristic; overriding them is meant for tuning experiments.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Thresholds for the heuristic algorithm selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Texts shorter than this always use the naive scan
    pub min_text_naive: usize,

    /// Patterns up to this length always use the naive scan
    pub short_pattern_max: usize,

    /// Texts longer than this are considered large
    pub large_text: usize,

    /// Minimum pattern length for Boyer-Moore in the large-text and medium bands
    pub min_pattern_boyer_moore: usize,

    /// Distinct symbols a pattern needs (strictly more) for Boyer-Moore on large texts
    pub large_text_unique_chars: usize,

    /// Patterns at least this long are long patterns
    pub long_pattern: usize,

    /// Patterns at least this long are very long patterns
    pub very_long_pattern: usize,

    /// Distinct symbols a long pattern needs (strictly more) for Boyer-Moore
    pub long_pattern_unique_chars: usize,

    /// Long patterns use Rabin-Karp on texts longer than this; medium patterns
    /// use it only on texts up to this length
    pub rabin_karp_long_min_text: usize,

    /// Medium patterns with a repetition ratio above this use KMP
    pub medium_repetition_ratio: f64,

    /// Distinct symbols a medium pattern needs (strictly more) for Boyer-Moore
    pub medium_unique_chars: usize,

    /// Medium patterns use Boyer-Moore only on texts longer than this
    pub medium_boyer_moore_min_text: usize,

    /// Medium patterns use Rabin-Karp only on texts longer than this
    pub rabin_karp_medium_min_text: usize,

    /// Medium patterns use Rabin-Karp only when longer than this
    pub rabin_karp_min_pattern: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_text_naive: 512,
            short_pattern_max: 5,
            large_text: 10_000,
            min_pattern_boyer_moore: 15,
            large_text_unique_chars: 10,
            long_pattern: 50,
            very_long_pattern: 100,
            long_pattern_unique_chars: 15,
            rabin_karp_long_min_text: 5_000,
            medium_repetition_ratio: 0.6,
            medium_unique_chars: 10,
            medium_boyer_moore_min_text: 2_000,
            rabin_karp_medium_min_text: 1_000,
            rabin_karp_min_pattern: 8,
        }
    }
}

impl Validate for SelectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_text_naive == 0 {
            return Err(ConfigError::ValidationError(
                "min_text_naive must be greater than 0".to_string(),
            ));
        }

        // Pattern bands must be ordered short < long < very long
        if self.short_pattern_max >= self.long_pattern {
            return Err(ConfigError::ValidationError(
                "short_pattern_max must be less than long_pattern".to_string(),
            ));
        }
        if self.long_pattern >= self.very_long_pattern {
            return Err(ConfigError::ValidationError(
                "long_pattern must be less than very_long_pattern".to_string(),
            ));
        }

        if self.medium_repetition_ratio <= 0.0 || self.medium_repetition_ratio > 1.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "selector.medium_repetition_ratio".to_string(),
                message: "must be between 0.0 (exclusive) and 1.0 (inclusive)".to_string(),
            });
        }

        if self.rabin_karp_medium_min_text >= self.rabin_karp_long_min_text {
            return Err(ConfigError::ValidationError(
                "rabin_karp_medium_min_text must be less than rabin_karp_long_min_text"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
