//! Reading documents from disk.
//!
//! The source format is chosen by file extension:
//!
//! | extension | format |
//! |-----------|--------|
//! | `.toml`   | TOML, via [`Document::from_toml_str`] |
//! | `.json`   | JSON, via [`Document::from_json_str`] |
//! | anything else | INI |
//!
//! Optional files that do not exist are silently skipped. Only actual I/O
//! errors (permissions, etc.) are propagated.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::document::Document;
use crate::error::BindError;
use crate::parse;

/// Source format of a document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ini,
    Toml,
    Json,
}

impl Format {
    /// Pick a format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Format::Toml,
            Some("json") => Format::Json,
            _ => Format::Ini,
        }
    }
}

/// Parse `content` in `format`. `path` only labels errors.
pub fn parse_document(path: &Path, content: &str, format: Format) -> Result<Document, BindError> {
    match format {
        Format::Ini => parse::parse_ini(content).map_err(|e| BindError::Syntax {
            path: path.to_path_buf(),
            source: e,
        }),
        Format::Toml => {
            let table: toml::Table = toml::from_str(content).map_err(|e| BindError::Toml {
                path: path.to_path_buf(),
                source: e,
            })?;
            parse::from_toml_table(table, content).map_err(|e| BindError::Syntax {
                path: path.to_path_buf(),
                source: e,
            })
        }
        Format::Json => serde_json::from_str(content).map_err(|e| BindError::Json {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Read a file's contents. A missing file is an error.
pub fn read_file(path: &Path) -> Result<String, BindError> {
    std::fs::read_to_string(path).map_err(|e| BindError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a file's contents, returning `None` if it does not exist.
pub fn read_optional_file(path: &Path) -> Result<Option<String>, BindError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(BindError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Read and parse one document file, choosing the format by extension.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, BindError> {
    let path = path.as_ref();
    let content = read_file(path)?;
    parse_document(path, &content, Format::from_path(path))
}

/// Load a list of `(path, optional)` sources in order, skipping optional ones
/// that do not exist. Returns `(path, content)` pairs for the ones found.
pub fn load_files(sources: &[(PathBuf, bool)]) -> Result<Vec<(PathBuf, String)>, BindError> {
    let mut results = Vec::new();
    for (path, optional) in sources {
        let content = if *optional {
            match read_optional_file(path)? {
                Some(content) => content,
                None => {
                    debug!(path = %path.display(), "optional file not found, skipping");
                    continue;
                }
            }
        } else {
            read_file(path)?
        };
        results.push((path.clone(), content));
    }
    Ok(results)
}
