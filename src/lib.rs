//! Mauka Search Library
//!
//! Exact substring search over text with five interchangeable algorithms
//! and a heuristic that picks one from static features of the input.
//!
//! # Architecture
//!
//! - [`matching`]: the algorithms and their preprocessing tables
//! - [`selection`]: pattern analysis and the algorithm selector
//! - [`engine`]: search entry points with error reporting
//! - [`config`]: layered configuration for the selector and logging
//! - [`error`]: error types and reporters
//!
//! # Example
//!
//! ```
//! use mauka_search::{Algorithm, HeuristicSelector};
//!
//! let text: Vec<char> = "the cat sat on the mat".chars().collect();
//! let pattern: Vec<char> = "at".chars().collect();
//!
//! let algorithm = HeuristicSelector::new().choose(&text, &pattern);
//! assert_eq!(algorithm.find_all(&text, &pattern), vec![5, 9, 20]);
//! ```

// Re-export public modules
pub mod config;
pub mod engine;
pub mod error;
pub mod matching;
pub mod selection;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

pub use crate::config::{ConfigLoader, SearchConfig, SelectorConfig};
pub use crate::engine::{SearchEngine, SearchOutcome};
pub use crate::error::{SearchError, SearchResult};
pub use crate::matching::{Algorithm, MatchSet, Symbol};
pub use crate::selection::{AlgorithmSelector, HeuristicSelector, PatternFeatures};

use crate::config::Validate;
use tracing_subscriber::EnvFilter;

/// Version information for Mauka Search.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the global tracing subscriber described by `config.log`.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Arguments
///
/// * `config` - Configuration whose `log` section describes the subscriber
///
/// # Returns
///
/// * `Ok(())` once the subscriber is installed
/// * `Err(SearchError::Config)` if the configuration is invalid
/// * `Err(SearchError::Logging)` if a global subscriber is already installed
pub fn init(config: &SearchConfig) -> SearchResult<()> {
    config.validate()?;

    let log = &config.log;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    installed.map_err(|e| {
        SearchError::Logging(format!("Failed to set global tracing subscriber: {e}"))
    })?;

    tracing::debug!(version = VERSION, "Mauka Search initialized");
    Ok(())
}
