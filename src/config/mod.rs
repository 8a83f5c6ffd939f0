//! Configuration module for wirefeed
//!
//! This module defines the immutable per-run configuration and its
//! validation. The reference binary assembles a [`FeedConfig`] from
//! command-line flags; library users construct one directly.

mod types;
mod validation;

// Re-export types
pub use types::{FeedConfig, DEFAULT_ENDPOINT, DEFAULT_MIN_INTERVAL_MILLIS};

// Re-export validation entry point
pub use validation::validate;
