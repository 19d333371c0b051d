//! Error types for listing ingestion, tree building and reporting.

use thiserror::Error;

/// Why a raw entry was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEntryReason {
    #[error("path is empty")]
    EmptyPath,
    #[error("path starts with '/'")]
    LeadingSeparator,
    #[error("path contains an empty segment")]
    EmptySegment,
    #[error("unrecognized entry type '{0}' (expected blob or tree)")]
    UnknownType(String),
}

/// A malformed entry in a listing. Fatal for the whole transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid entry #{index} ({path:?}): {reason}")]
pub struct ValidationError {
    /// Position of the entry in the input listing
    pub index: usize,
    pub path: String,
    pub reason: InvalidEntryReason,
}

/// Crate-level error
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Config load error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Listing parse error: {0}")]
    Listing(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
