//! Walk a destination's declared fields and match them against a document.
//!
//! Two shapes of destination are supported:
//!
//! - **Whole document**: each field is a struct (or an indirection to one)
//!   standing for a section. [`bind_all`] looks each field's key up as a section
//!   name and binds the section's options into it.
//! - **Single section**: each field stands for an option. [`bind_section`]
//!   looks each field's key up as an option name within one section.
//!
//! Keys come from [`Field::lookup_key`](crate::schema::Field::lookup_key): the
//! alias if one was given, the field name otherwise. Excluded fields, read-only
//! fields and fields with no match are left exactly as they were.
//!
//! Binding stops at the first error. Fields visited before the failing one keep
//! whatever was written to them.

use tracing::debug;

use crate::document::{Document, Section};
use crate::error::BindError;
use crate::field::set_value;
use crate::schema::{Bind, Destination, Target};

/// Bind every section of `document` into the matching struct field of `dest`.
///
/// An empty `Option` destination is allocated before binding.
pub fn bind_all<D: Destination + ?Sized>(dest: &mut D, document: &Document) -> Result<(), BindError> {
    bind_sections(dest.resolve(), document)
}

/// Bind the options of one `section` into the fields of `dest`.
pub fn bind_section<D: Destination + ?Sized>(dest: &mut D, section: &Section) -> Result<(), BindError> {
    bind_options(dest.resolve(), section)
}

impl Document {
    /// Bind this document into `dest`. See [`bind_all`].
    pub fn bind<D: Destination + ?Sized>(&self, dest: &mut D) -> Result<(), BindError> {
        bind_all(dest, self)
    }

    /// Bind the section named `name` into `dest`.
    ///
    /// Fails with [`BindError::SectionNotFound`] when the document has no such
    /// section; `dest` is not touched (nor allocated) in that case.
    pub fn bind_section<D: Destination + ?Sized>(
        &self,
        name: &str,
        dest: &mut D,
    ) -> Result<(), BindError> {
        let section = self
            .section(name)
            .ok_or_else(|| BindError::SectionNotFound(name.to_string()))?;
        bind_section(dest, section)
    }
}

fn bind_sections(target: &mut dyn Bind, document: &Document) -> Result<(), BindError> {
    for field in target.fields() {
        let name = field.name();
        let Some(key) = field.lookup_key() else {
            debug!(field = name, "field excluded from binding");
            continue;
        };
        if !field.is_writable() {
            debug!(field = name, "field is read-only, skipping");
            continue;
        }
        let Some(section) = document.section(key) else {
            debug!(field = name, key, "no section for key");
            continue;
        };

        match field.into_target() {
            Target::Nested(dest) => bind_options(dest.resolve(), section)?,
            _ => debug!(field = name, key, "top-level field is not a struct, ignoring"),
        }
    }
    Ok(())
}

fn bind_options(target: &mut dyn Bind, section: &Section) -> Result<(), BindError> {
    for field in target.fields() {
        let name = field.name();
        let Some(key) = field.lookup_key() else {
            debug!(field = name, "field excluded from binding");
            continue;
        };
        if !field.is_writable() {
            debug!(field = name, "field is read-only, skipping");
            continue;
        }
        let Some(values) = section.option(key) else {
            debug!(field = name, key, "no option for key");
            continue;
        };

        match field.into_target() {
            Target::Value(slot) => set_value(name, slot, values)?,
            Target::Nested(_) => {
                return Err(BindError::UnknownFieldKind {
                    field: name.to_string(),
                    kind: "struct",
                });
            }
            Target::ReadOnly => {}
        }
    }
    Ok(())
}
