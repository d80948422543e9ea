// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Search entry points tying algorithms, selection and error reporting together.
//!
//! # Example
//!
//! ```
//! use mauka_search::{HeuristicSelector, SearchEngine};
//!
//! let engine = SearchEngine::default();
//! let matches = engine.search("KMP", "abababa", "aba").unwrap();
//! assert_eq!(matches, vec![0, 2, 4]);
//!
//! let outcome = engine.search_with(&HeuristicSelector::new(), "abababa", "aba");
//! assert_eq!(outcome.matches(), &[0, 2, 4][..]);
//! ```

use std::sync::Arc;

use crate::error::{ErrorContext, ErrorReporter, SearchError, SearchResult, TracingErrorReporter};
use crate::matching::{Algorithm, MatchSet, Symbol};
use crate::selection::AlgorithmSelector;

/// Result of a selector-driven search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The selector chose one algorithm and it ran.
    Selected {
        /// The algorithm that ran
        algorithm: Algorithm,
        /// Its matches
        matches: MatchSet,
    },

    /// The selector skipped analysis; every algorithm ran in canonical order.
    Exhaustive(Vec<(Algorithm, MatchSet)>),
}

impl SearchOutcome {
    /// The matches of the search.
    ///
    /// For an exhaustive run all algorithms agree, so the first result is
    /// returned.
    pub fn matches(&self) -> &MatchSet {
        match self {
            SearchOutcome::Selected { matches, .. } => matches,
            SearchOutcome::Exhaustive(results) => results
                .first()
                .map(|(_, matches)| matches)
                .unwrap_or(&EMPTY),
        }
    }
}

static EMPTY: MatchSet = MatchSet::new();

/// Stateless search front end.
///
/// The engine holds only its error reporter, so one instance can be shared
/// across threads behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct SearchEngine {
    reporter: Arc<dyn ErrorReporter>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Arc::new(TracingErrorReporter))
    }
}

impl SearchEngine {
    /// Creates an engine that reports failures to `reporter`.
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { reporter }
    }

    /// Searches `text` for `pattern` with the algorithm named `name`.
    ///
    /// Names are parsed leniently (see [`Algorithm`]'s `FromStr`). Offsets
    /// count `char`s. An unknown name is reported and returned as an error.
    pub fn search(&self, name: &str, text: &str, pattern: &str) -> SearchResult<MatchSet> {
        let algorithm = match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(err) => {
                let context = ErrorContext::new(SearchError::Matching(err), "engine")
                    .with_details(format!("available algorithms: {}", available_names()));
                self.reporter.report(&context);
                return Err(context.error);
            }
        };

        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        Ok(self.run(algorithm, &text, &pattern))
    }

    /// Runs `algorithm` over symbol slices.
    pub fn run<T: Symbol>(&self, algorithm: Algorithm, text: &[T], pattern: &[T]) -> MatchSet {
        let span = tracing::debug_span!(
            "search",
            %algorithm,
            text_len = text.len(),
            pattern_len = pattern.len()
        );
        let _guard = span.enter();

        let matches = algorithm.find_all(text, pattern);
        tracing::debug!(matches = matches.len(), "Search complete");
        matches
    }

    /// Lets `selector` pick the algorithm, or runs all of them when it
    /// declines to choose.
    pub fn search_with(
        &self,
        selector: &dyn AlgorithmSelector,
        text: &str,
        pattern: &str,
    ) -> SearchOutcome {
        let choice = selector.select_algorithm(text, pattern);
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();

        match choice {
            Some(algorithm) => SearchOutcome::Selected {
                algorithm,
                matches: self.run(algorithm, &text, &pattern),
            },
            None => {
                tracing::debug!("Selector skipped analysis, running every algorithm");
                SearchOutcome::Exhaustive(
                    Algorithm::ALL
                        .into_iter()
                        .map(|algorithm| (algorithm, self.run(algorithm, &text, &pattern)))
                        .collect(),
                )
            }
        }
    }
}

fn available_names() -> String {
    Algorithm::ALL
        .iter()
        .map(|algorithm| algorithm.name())
        .collect::<Vec<_>>()
        .join(", ")
}
