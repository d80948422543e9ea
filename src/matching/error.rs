// Copyright (c) 2025 Mauka Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the matching algorithms.

/// Error types for matching operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum MatchingError {
    /// The requested algorithm name does not name one of the known algorithms
    #[error("Unknown matching algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type for matching operations
pub type Result<T> = std::result::Result<T, MatchingError>;
