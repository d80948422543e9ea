//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::{ErrorContext, ErrorReporter, SearchError, TracingErrorReporter};
use crate::matching::MatchingError;
use crate::{SearchConfig, SearchEngine};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = SearchError::Logging("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors carry their source message.
#[test]
fn test_nested_errors() {
    let error = SearchError::from(MatchingError::UnknownAlgorithm("Z".to_string()));
    assert_eq!(
        error.to_string(),
        "Matching error: Unknown matching algorithm: Z"
    );

    let error = SearchError::from(ConfigError::ValueOutOfRange {
        key: "selector.medium_repetition_ratio".to_string(),
        message: "must be at most 1.0".to_string(),
    });
    let error_string = error.to_string();
    assert!(error_string.starts_with("Configuration error"));
    assert!(error_string.contains("selector.medium_repetition_ratio"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct CountingReporter {
    reported_count: AtomicUsize,
}

impl CountingReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _context: &ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that an engine reports through the reporter it was built with.
#[test]
fn test_engine_uses_injected_reporter() {
    let reporter = Arc::new(CountingReporter::default());
    let engine = SearchEngine::new(reporter.clone());

    assert!(engine.search("Aho-Corasick", "abc", "b").is_err());
    assert!(engine.search("", "abc", "b").is_err());
    assert!(engine.search("naive", "abc", "b").is_ok());

    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = SearchError::Logging("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(&context);
}

/// Test that logging cannot be installed from an invalid configuration.
#[test]
fn test_init_rejects_invalid_config() {
    let mut config = SearchConfig::default();
    config.log.level = "chatty".to_string();

    assert!(matches!(
        crate::init(&config),
        Err(SearchError::Config(ConfigError::ValidationError(_)))
    ));
}
