//! Error types for the roster catalog

use crate::types::PlayerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    #[error("Unknown external id: {external_id}")]
    UnknownExternalId { external_id: String },
}

/// Upstream roster feed failures. A feed error never leaves a partially
/// applied batch behind; the catalog keeps its previous snapshot.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Unknown position '{position}' for feed record '{external_id}'")]
    UnknownPosition { external_id: String, position: String },

    #[error("Feed record '{external_id}' is missing a {field}")]
    MissingField { external_id: String, field: &'static str },

    #[error("Duplicate external id in feed batch: {external_id}")]
    DuplicateExternalId { external_id: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed feed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
