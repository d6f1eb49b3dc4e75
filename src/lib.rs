//! Bind INI-style configuration documents onto plain Rust structs. Declare the
//! fields, parse a document, and bind.
//!
//! ```ignore
//! let doc: Document = std::fs::read_to_string("app.ini")?.parse()?;
//! let mut config = AppConfig::default();
//! doc.bind(&mut config)?;
//! ```
//!
//! That call walks `AppConfig`'s declared fields, looks each one up as a
//! section of the document, and writes every matching option into the
//! section struct, converting values to whatever kind each field holds.
//!
//! # Documents
//!
//! A [`Document`] is two levels deep: named [`Section`]s holding named options.
//! An option holds either one [`Value`] or an ordered list of them
//! ([`Values`]). A value is one of five kinds: string, signed integer,
//! unsigned integer, float, or bool.
//!
//! Documents come from several sources:
//!
//! - **INI** via [`str::parse`]: `[section]` headers and `key = value` lines.
//!   Repeating a key builds a list. Every INI value is a string.
//! - **TOML** via [`Document::from_toml_str`]: one level of tables. Scalars keep
//!   their kind and arrays become lists.
//! - **JSON** via [`Document::from_json_str`]: an object of objects.
//! - **Hand-built** with [`Document::section_mut_or_insert`] and
//!   [`Section::set`] / [`Section::push`].
//!
//! # Destinations
//!
//! There is no reflection. A struct becomes bindable by implementing [`Bind`]
//! and listing its fields:
//!
//! ```ignore
//! struct Http {
//!     ip: String,
//!     port: u16,
//!     peers: Vec<String>,
//!     cache: String,
//! }
//!
//! impl Bind for Http {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("ip", &mut self.ip),
//!             Field::new("Port", &mut self.port).key("port"),
//!             Field::new("peers", &mut self.peers).key("peer"),
//!             Field::new("cache", &mut self.cache).skip(),
//!         ]
//!     }
//! }
//! ```
//!
//! - **[`Field::new`]** takes any [`Settable`] storage: strings, every integer
//!   width, `f32`/`f64`, `bool`, `Option` of those, and `Vec` of those.
//! - **[`Field::nested`]** takes a struct (or `Option<T>` / `Box<T>` of one).
//!   Used one level up, where a field stands for a whole section.
//! - **[`Field::read_only`]** declares a field the binder must never write.
//! - **`.key(alias)`** matches under `alias` instead of the field name;
//!   **`.skip()`** (the [`SKIP`] alias `"-"`) excludes the field.
//!
//! Fields are matched exactly and case-sensitively. Unmatched fields keep
//! whatever they held, so binding is sparse: preset defaults survive, and a
//! second bind only overwrites what it matches.
//!
//! # Binding
//!
//! - [`bind_all`] / [`Document::bind`]: every field of the destination is a
//!   section. Non-struct fields at this level are ignored.
//! - [`bind_section`] / [`Document::bind_section`]: every field is an option of
//!   one section. Looking up a section name that does not exist fails with
//!   [`BindError::SectionNotFound`].
//!
//! An empty `Option` destination (or `Option<Box<T>>`) is allocated with
//! `T::default()` before its fields are written.
//!
//! # Coercion
//!
//! Every value converts to every scalar kind, and conversion never fails:
//!
//! | into | from string | from number | from bool |
//! |------|-------------|-------------|-----------|
//! | string | as is | shortest decimal form | `"true"` / `"false"` |
//! | integer | text before the first `.`, else 0 | truncated, wrapped to width | 1 / 0 |
//! | float | parsed, else 0.0 | converted | 1.0 / 0.0 |
//! | bool | one of `true yes on t y 1` | int `== 1`, float `> 0.9990` | as is |
//!
//! Integers are narrowed to the field width without range checks, so `300`
//! into a `u8` stores `44` and an integer `-1` into a `u32` stores
//! `u32::MAX`.
//!
//! A list bound to a scalar field keeps only its first element. A single value
//! bound to a `Vec` field yields a one-element vector. A `Vec` field is always
//! replaced, never appended to.
//!
//! # Layered loading
//!
//! [`Loader`] reads files (format picked by extension), merges them in order,
//! and optionally overlays environment variables:
//!
//! ```ignore
//! Loader::new()
//!     .file("/etc/app/app.ini")
//!     .optional_file("app.local.toml")
//!     .env_prefix("APP")
//!     .bind_all(&mut config)?;
//! ```
//!
//! ```text
//! Files             in the order added, later files win option by option
//!        ↑ overridden by
//! Environment vars  APP__SECTION__OPTION
//! ```
//!
//! Env var names map verbatim (`APP__HTTP__port` sets `port` in `HTTP`). Values
//! stay strings, as in INI, so `APP__HTTP__port=08080` binds into a `String`
//! field unchanged and into a `u16` field as `8080`.
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` for
//! fields that are skipped or destinations that are allocated, `trace` for
//! every option bound. No subscriber is installed.
//!
//! # Error handling
//!
//! All fallible operations return [`BindError`]. Coercion never fails; errors
//! come from unreadable sources, malformed text, absent sections, and fields
//! whose kind cannot take a value (channels, function pointers, nested
//! sequences, struct fields inside a section).

pub mod coerce;
pub mod error;
pub mod file;
pub mod parse;
pub mod types;

mod bind;
mod builder;
mod document;
mod env;
mod field;
mod merge;
mod resolve;
mod schema;

#[cfg(test)]
mod fixtures;

pub use bind::{bind_all, bind_section};
pub use builder::Loader;
pub use document::{Document, Section, Values};
pub use env::env_to_document;
pub use error::BindError;
pub use field::set_value;
pub use parse::SyntaxError;
pub use resolve::{ResolveInput, resolve};
pub use schema::{Bind, Destination, Field, SKIP, Sequence, Settable, Slot};
pub use types::{Value, ValueKind};
