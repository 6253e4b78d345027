//! Error types for the md2html pipeline

use crate::render::RenderError;
use thiserror::Error;

/// Errors that can occur while turning a document into HTML
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
