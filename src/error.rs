//! Error types for Spole.

use thiserror::Error;

/// Library-level error type for Spole operations.
#[derive(Error, Debug)]
pub enum SpoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    #[error("Dimension mismatch: index expects {expected}-dimensional vectors, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Spole operations.
pub type Result<T> = std::result::Result<T, SpoleError>;
