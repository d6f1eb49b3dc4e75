//! Readers that turn source text into a [`Document`].
//!
//! INI text is read line by line:
//!
//! ```text
//! ; comment            # comment
//! [section]
//! key = value          key: value
//! key = "quoted value"
//! list = a
//! list = b
//! ```
//!
//! A key repeated within a section accumulates into a list. Comments take a
//! whole line: a `;` or `#` after a value is part of the value.
//!
//! Every INI value is a string; interpreting it is left to coercion at bind
//! time. TOML keeps its scalar types, but its shape must be exactly one level
//! of tables, since a document cannot hold anything deeper.

use thiserror::Error;

use crate::document::{Document, Values};
use crate::types::Value;

/// A malformed source, with the 1-indexed line it was found on (0 when unknown).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct SyntaxError {
    pub line: usize,
    pub reason: String,
}

impl SyntaxError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Parse INI text into a document.
pub fn parse_ini(content: &str) -> Result<Document, SyntaxError> {
    let mut doc = Document::new();
    let mut current: Option<String> = None;

    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let Some(name) = header.strip_suffix(']') else {
                return Err(SyntaxError::new(line_no, "unterminated section header"));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(SyntaxError::new(line_no, "empty section name"));
            }
            doc.section_mut_or_insert(name);
            current = Some(name.to_string());
            continue;
        }

        let Some((key, value)) = split_pair(line) else {
            return Err(SyntaxError::new(line_no, "expected 'key = value'"));
        };
        if key.is_empty() {
            return Err(SyntaxError::new(line_no, "empty option name"));
        }
        let Some(section) = &current else {
            return Err(SyntaxError::new(
                line_no,
                format!("option '{key}' outside of any section"),
            ));
        };

        doc.section_mut_or_insert(section).push(key, unquote(value));
    }

    Ok(doc)
}

/// Split on the first `=` or `:`, whichever comes first.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let at = line.find(['=', ':'])?;
    Some((line[..at].trim(), line[at + 1..].trim()))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Convert a parsed TOML table into a document. `content` is the source text,
/// used only to locate offending keys.
pub fn from_toml_table(table: toml::Table, content: &str) -> Result<Document, SyntaxError> {
    let mut doc = Document::new();

    for (name, item) in table {
        let toml::Value::Table(options) = item else {
            return Err(SyntaxError::new(
                find_key_line(content, &name),
                format!("'{name}' is not a section"),
            ));
        };

        let section = doc.section_mut_or_insert(&name);
        for (key, value) in options {
            let dotted = format!("{name}.{key}");
            let values = toml_values(value).map_err(|reason| {
                SyntaxError::new(find_key_line(content, &dotted), format!("'{dotted}': {reason}"))
            })?;
            section.set(&key, values);
        }
    }

    Ok(doc)
}

fn toml_values(value: toml::Value) -> Result<Values, &'static str> {
    match value {
        toml::Value::Array(items) => items
            .into_iter()
            .map(toml_scalar)
            .collect::<Result<Vec<_>, _>>()
            .map(Values::Many),
        other => toml_scalar(other).map(Values::One),
    }
}

fn toml_scalar(value: toml::Value) -> Result<Value, &'static str> {
    match value {
        toml::Value::String(s) => Ok(Value::String(s)),
        toml::Value::Integer(i) => Ok(Value::Int(i)),
        toml::Value::Float(f) => Ok(Value::Float(f)),
        toml::Value::Boolean(b) => Ok(Value::Bool(b)),
        toml::Value::Datetime(dt) => Ok(Value::String(dt.to_string())),
        toml::Value::Array(_) => Err("nested arrays are not supported"),
        toml::Value::Table(_) => Err("nested tables are not supported"),
    }
}

/// Find the 1-indexed line number for a key in TOML content.
///
/// For a dotted key like `"server.port"`, tracks the current `[section]` header
/// while scanning and only matches the leaf key inside the right section.
/// Best effort: quoted keys and inline tables are not handled. Returns 0 if
/// the key cannot be located.
fn find_key_line(content: &str, dotted_key: &str) -> usize {
    let (expected_section, leaf) = match dotted_key.rsplit_once('.') {
        Some((section, leaf)) => (Some(section), leaf),
        None => (None, dotted_key),
    };

    let mut current_section: Option<&str> = None;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') {
            let header = trimmed.trim_start_matches('[').trim_end_matches(']').trim();
            if expected_section.is_none() && header == leaf {
                return i + 1;
            }
            current_section = Some(header);
            continue;
        }

        if current_section == expected_section
            && let Some(after_key) = trimmed.strip_prefix(leaf)
            && after_key.trim_start().starts_with('=')
        {
            return i + 1;
        }
    }
    0
}
