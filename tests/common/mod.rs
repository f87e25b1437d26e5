//! Common test utilities and shared infrastructure.
//!
//! This module provides all the shared functionality used across the test suite:
//! - `fixtures`: Amount constants and swap scenario setup
//! - `assertions`: High-level assertion helpers for common test patterns

pub mod assertions;
pub mod fixtures;

// Re-export commonly used test helpers
#[allow(unused_imports)] // These are used across many test files
pub use fixtures::{mg_units, swap_scenario, SwapScenario};
