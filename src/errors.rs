//! Error types for vector-deck.

use thiserror::Error;

/// Top-level error type for deck operations.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Configuration-related errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Drawing surface or chart rendering errors.
    #[error("render error: {0}")]
    Render(String),

    /// Slide lookup or deck content errors.
    #[error("deck error: {0}")]
    Deck(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;
