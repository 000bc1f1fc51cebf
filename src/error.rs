//! Error types for the graphql-decl-gen crate.

use std::path::PathBuf;

/// Errors that can occur while turning a schema document into declarations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document contains a definition kind the visitor cannot dispatch.
    #[error(
        "unsupported definition `{kind}` ({})",
        .name.as_deref().unwrap_or("unnamed")
    )]
    UnsupportedDefinition { kind: String, name: Option<String> },

    /// Failed to parse schema SDL text.
    #[error("failed to parse schema: {0}")]
    Parse(String),

    /// Invalid generator configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to write generated declarations.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parse error with context.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
