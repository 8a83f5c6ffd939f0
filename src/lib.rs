//! Wirefeed: a continuous cursor-based article feed poller
//!
//! This crate implements a polling client for a paginated article feed API.
//! It repeatedly fetches pages of articles, advances a sequence-id cursor so
//! consecutive calls never re-download already-seen articles, and paces its
//! calls to respect the upstream rate limit.

pub mod config;
pub mod feed;
pub mod report;

use thiserror::Error;

/// Main error type for wirefeed operations
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Configuration-specific errors
///
/// These are fatal: validation runs before the polling loop starts, so a
/// `ConfigError` never surfaces mid-iteration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },
}

/// HTTP-layer errors surfaced by the transport
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Payload decoding errors
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Corrupt gzip stream: {0}")]
    Gzip(#[source] std::io::Error),

    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed XML payload: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Response is missing the mandatory status field")]
    MissingStatus,
}

/// Result type alias for wirefeed operations
pub type Result<T> = std::result::Result<T, FeedError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::FeedConfig;
pub use feed::{Article, FeedPage, License, PageStatus, Poller, PollerPhase};
