//! Error handling for the genogram crate.
//!
//! Relationship resolution itself cannot fail. Errors only come from the
//! edges: reading and writing population files.

use std::io;
use std::path::PathBuf;

/// Specialized error type for genogram I/O
#[derive(Debug, thiserror::Error)]
pub enum GenogramError {
    /// Error opening, reading, or writing a file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File the operation was working on
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed or unserializable population data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input that parsed but cannot be used
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GenogramError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for genogram operations
pub type Result<T> = std::result::Result<T, GenogramError>;
