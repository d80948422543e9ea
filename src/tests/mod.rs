//! Test modules for Mauka Search.
//!
//! Unit tests for the algorithms live beside them in `matching`; the modules
//! here cover configuration, error reporting and the engine end to end.

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{chars, planted_strategy, reference_positions, text_strategy, TestFixture};
