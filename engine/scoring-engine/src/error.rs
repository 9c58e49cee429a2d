//! Error types for the scoring engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] roster_catalog::CatalogError),
}

/// Upstream stat feed failures. A failed batch never partially overwrites
/// existing stat lines; the call is safe to retry.
#[derive(Error, Debug)]
pub enum StatFeedError {
    #[error("Stat line references unknown player '{external_id}'")]
    UnknownPlayer { external_id: String },

    #[error("Duplicate stat line for player '{external_id}' in batch")]
    DuplicatePlayer { external_id: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed stat feed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
