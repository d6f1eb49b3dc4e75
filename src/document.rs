//! The source model the binder reads from: documents, sections and option values.
//!
//! A [`Document`] is an ordered map of section name to [`Section`]; a section
//! is an ordered map of option name to [`Values`]. Both are plain serde maps,
//! so any format with an object-of-objects shape deserializes straight into a
//! document. The binder only ever reads these types.

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::BindError;
use crate::file::{self, Format};
use crate::parse::{self, SyntaxError};
use crate::types::Value;

/// The value(s) held by one option: a single scalar or an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values {
    Many(Vec<Value>),
    One(Value),
}

impl Values {
    /// The value a scalar field binds to: the single value, or element 0 of a list.
    pub fn first(&self) -> Option<&Value> {
        match self {
            Values::One(v) => Some(v),
            Values::Many(list) => list.first(),
        }
    }

    /// Every value in order. A single value is a one-element slice.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Values::One(v) => std::slice::from_ref(v),
            Values::Many(list) => list,
        }
    }

    fn push(&mut self, value: Value) {
        match self {
            Values::Many(list) => list.push(value),
            Values::One(first) => {
                let first = std::mem::replace(first, Value::Bool(false));
                *self = Values::Many(vec![first, value]);
            }
        }
    }
}

macro_rules! values_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Values {
                fn from(v: $ty) -> Self {
                    Values::One(v.into())
                }
            }
        )*
    };
}

values_from_scalar!(Value, &str, String, i64, u64, f64, bool);

impl From<Vec<Value>> for Values {
    fn from(list: Vec<Value>) -> Self {
        Values::Many(list)
    }
}

/// A named group of options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    options: IndexMap<String, Values>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option(&self, name: &str) -> Option<&Values> {
        self.options.get(name)
    }

    /// Set an option, replacing whatever it held before.
    pub fn set(&mut self, name: &str, values: impl Into<Values>) {
        self.options.insert(name.to_string(), values.into());
    }

    /// Append a value to an option. A repeated key turns a single value into a list.
    pub fn push(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.options.get_mut(name) {
            Some(existing) => existing.push(value),
            None => {
                self.options.insert(name.to_string(), Values::One(value));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Values)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub(crate) fn into_options(self) -> IndexMap<String, Values> {
        self.options
    }

    pub(crate) fn options_mut(&mut self) -> &mut IndexMap<String, Values> {
        &mut self.options
    }
}

/// An ordered collection of uniquely named sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Get a section for editing, creating an empty one at the end if needed.
    pub fn section_mut_or_insert(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Parse a TOML document. Top-level tables become sections.
    pub fn from_toml_str(content: &str) -> Result<Self, BindError> {
        file::parse_document(Path::new("<string>"), content, Format::Toml)
    }

    /// Parse a JSON object of objects.
    pub fn from_json_str(content: &str) -> Result<Self, BindError> {
        file::parse_document(Path::new("<string>"), content, Format::Json)
    }

    pub(crate) fn into_sections(self) -> IndexMap<String, Section> {
        self.sections
    }

    pub(crate) fn sections_mut(&mut self) -> &mut IndexMap<String, Section> {
        &mut self.sections
    }
}

/// Parses INI text.
impl FromStr for Document {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_ini(s)
    }
}
