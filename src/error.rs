use std::path::PathBuf;
use thiserror::Error;

use crate::parse::SyntaxError;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("Unknown kind for field '{field}' ({kind})")]
    UnknownFieldKind { field: String, kind: &'static str },

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Syntax { path: PathBuf, source: SyntaxError },

    #[error("Failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
