//! Error types for Vocabgraph

use thiserror::Error;

/// Result type alias using Vocabgraph's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Vocabgraph error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Ingestion errors (E001-E099)
    #[error("Failed to ingest vocabulary document: {0}")]
    Ingest(String),

    // Lookup errors (E100-E199)
    #[error("Type '{0}' not found in vocabulary. Run `vocabgraph search <keyword>` to find types.")]
    TypeNotFound(String),

    // Query errors (E200-E299)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ingest(_) => "E001",
            Self::TypeNotFound(_) => "E100",
            Self::InvalidQuery(_) => "E200",
            Self::ConfigError(_) => "E600",
            Self::Json(_) => "E002",
            Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Ingest(_) | Self::Json(_) => Some(
                "Check that the document is JSON-LD with a top-level \"@graph\" array".to_string(),
            ),
            Self::TypeNotFound(name) => Some(format!("vocabgraph search {}", name)),
            Self::InvalidQuery(_) => Some("Provide a non-empty search keyword".to_string()),
            Self::ConfigError(_) => Some("vocabgraph config list".to_string()),
            Self::Io(_) => None,
        }
    }

    /// Whether this error means the requested type does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TypeNotFound(_))
    }
}
