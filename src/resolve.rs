//! Layer resolution: merge every source into one document.
//!
//! Operates on pre-loaded data (`ResolveInput`) with no I/O, making the full
//! pipeline testable with synthetic inputs. Steps:
//!
//! 1. Parse each file in the format its extension names
//! 2. Merge files (later overrides earlier)
//! 3. Merge env vars on top (highest priority)

use std::path::PathBuf;

use tracing::debug;

use crate::document::Document;
use crate::env;
use crate::error::BindError;
use crate::file::{self, Format};

/// All pre-loaded data needed to resolve a document. No I/O happens here.
#[derive(Debug, Default)]
pub struct ResolveInput {
    /// File contents in precedence order: first = lowest priority, last = highest.
    pub files: Vec<(PathBuf, String)>,
    /// Raw environment variable pairs (pass `std::env::vars().collect()` or synthetic data).
    pub env_vars: Vec<(String, String)>,
    /// Env var prefix (e.g. `"MYAPP"`). `None` means env disabled.
    pub env_prefix: Option<String>,
}

/// Resolve a merged document from pre-loaded inputs.
pub fn resolve(input: ResolveInput) -> Result<Document, BindError> {
    let mut merged = Document::new();
    for (path, content) in &input.files {
        let doc = file::parse_document(path, content, Format::from_path(path))?;
        debug!(path = %path.display(), sections = doc.len(), "merging file layer");
        merged = merged.merge(doc);
    }

    if let Some(prefix) = &input.env_prefix {
        let env_doc = env::env_to_document(prefix, input.env_vars);
        debug!(prefix = prefix.as_str(), sections = env_doc.len(), "merging env layer");
        merged = merged.merge(env_doc);
    }

    Ok(merged)
}
