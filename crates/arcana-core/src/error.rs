//! Error types for catalog construction and loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while building or loading a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog needs at least one card to draw from.
    #[error("catalog has no cards")]
    Empty,

    /// Card ids must be positive.
    #[error("card {name:?} has invalid id 0")]
    InvalidId {
        /// Name of the offending card.
        name: String,
    },

    /// Two cards share an id.
    #[error("duplicate card id {0}")]
    DuplicateId(u32),

    /// The deck file could not be read.
    #[error("failed to read deck {path}: {source}")]
    Io {
        /// Path of the deck file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The deck file is not a valid JSON array of cards.
    #[error("invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),
}
