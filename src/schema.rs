//! Field descriptors: how a destination struct tells the binder what it holds.
//!
//! There is no runtime reflection. A bindable struct implements [`Bind`] and
//! lists its fields in declaration order, each as a [`Field`] carrying the
//! field's name, an optional lookup key, and a mutable handle to the storage:
//!
//! ```ignore
//! impl Bind for Http {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("ip", &mut self.ip),
//!             Field::new("port", &mut self.port),
//!             Field::new("peers", &mut self.peers).key("peer"),
//!             Field::new("cache", &mut self.cache).skip(),
//!         ]
//!     }
//! }
//! ```
//!
//! Scalar and sequence storage goes through [`Settable`], which hands out a
//! typed [`Slot`]. Struct storage, including empty indirections such as
//! `Option<T>`, goes through [`Destination`].

use tracing::debug;

use crate::error::BindError;

/// Lookup key that excludes a field from binding.
pub const SKIP: &str = "-";

/// A struct whose fields can be bound from a section (or, one level up, from
/// a whole document).
pub trait Bind {
    /// The struct's fields in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

impl<T: Bind + ?Sized> Bind for Box<T> {
    fn fields(&mut self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// A handle that resolves to a concrete, mutable [`Bind`] instance.
///
/// Empty `Option`s are filled with a default instance on resolution, and
/// nested indirections (`Option<Box<T>>`, `Option<Option<T>>`) unwind until
/// a concrete struct is reached.
pub trait Destination {
    fn resolve(&mut self) -> &mut dyn Bind;
}

impl<T: Bind> Destination for T {
    fn resolve(&mut self) -> &mut dyn Bind {
        self
    }
}

impl<T: Destination + Default> Destination for Option<T> {
    fn resolve(&mut self) -> &mut dyn Bind {
        if self.is_none() {
            debug!(target_type = std::any::type_name::<T>(), "allocating empty destination");
        }
        self.get_or_insert_with(T::default).resolve()
    }
}

/// Typed mutable access to one scalar or sequence field.
pub enum Slot<'a> {
    Str(&'a mut String),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Bool(&'a mut bool),
    Seq(&'a mut dyn Sequence),
    /// A field of a kind the binder cannot write; carries the type name.
    Unsupported(&'static str),
}

/// Storage that can hand out a [`Slot`].
pub trait Settable {
    fn slot(&mut self) -> Slot<'_>;

    /// Whether [`slot`](Self::slot) yields [`Slot::Seq`]. Must not allocate.
    fn is_sequence(&self) -> bool {
        false
    }
}

macro_rules! settable_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Settable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

settable_scalar! {
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

/// An optional scalar becomes `Some` the first time a value is written to it.
impl<T: Settable + Default> Settable for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        self.get_or_insert_with(T::default).slot()
    }

    fn is_sequence(&self) -> bool {
        match self {
            Some(inner) => inner.is_sequence(),
            None => T::default().is_sequence(),
        }
    }
}

impl<T: Settable + Default> Settable for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Seq(self)
    }

    fn is_sequence(&self) -> bool {
        true
    }
}

impl<T> Settable for std::sync::mpsc::Sender<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<T> Settable for std::sync::mpsc::SyncSender<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<T> Settable for std::sync::mpsc::Receiver<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<R> Settable for fn() -> R {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

/// A growable field whose contents are replaced wholesale on every bind.
pub trait Sequence {
    /// Replace the contents with `len` fresh elements, each initialised by
    /// `fill(index, slot)`. On error the previous contents are kept.
    fn replace(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, Slot<'_>) -> Result<(), BindError>,
    ) -> Result<(), BindError>;
}

impl<T: Settable + Default> Sequence for Vec<T> {
    fn replace(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, Slot<'_>) -> Result<(), BindError>,
    ) -> Result<(), BindError> {
        let mut items = Vec::with_capacity(len);
        for i in 0..len {
            let mut item = T::default();
            fill(i, item.slot())?;
            items.push(item);
        }
        *self = items;
        Ok(())
    }
}

pub(crate) enum Target<'a> {
    Value(&'a mut dyn Settable),
    Nested(&'a mut dyn Destination),
    ReadOnly,
}

/// One declared field of a bindable struct.
pub struct Field<'a> {
    name: &'static str,
    alias: Option<&'static str>,
    target: Target<'a>,
}

impl<'a> Field<'a> {
    /// A scalar, optional-scalar or sequence field.
    pub fn new(name: &'static str, target: &'a mut dyn Settable) -> Self {
        Self {
            name,
            alias: None,
            target: Target::Value(target),
        }
    }

    /// A struct field, or an indirection to one.
    pub fn nested(name: &'static str, target: &'a mut dyn Destination) -> Self {
        Self {
            name,
            alias: None,
            target: Target::Nested(target),
        }
    }

    /// A declared field the binder must never write.
    pub fn read_only(name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            target: Target::ReadOnly,
        }
    }

    /// Look the field up under `alias` instead of its name. [`SKIP`] excludes it.
    pub fn key(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Exclude the field from binding.
    pub fn skip(self) -> Self {
        self.key(SKIP)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The key the field is matched by, or `None` when it is excluded.
    pub fn lookup_key(&self) -> Option<&'static str> {
        match self.alias {
            Some(SKIP) => None,
            Some(alias) if !alias.is_empty() => Some(alias),
            _ => Some(self.name),
        }
    }

    pub fn is_writable(&self) -> bool {
        !matches!(self.target, Target::ReadOnly)
    }

    pub(crate) fn into_target(self) -> Target<'a> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::Http;

    #[test]
    fn lookup_key_defaults_to_name() {
        let mut port = 0u16;
        let field = Field::new("Port", &mut port);
        assert_eq!(field.lookup_key(), Some("Port"));
    }

    #[test]
    fn alias_overrides_name() {
        let mut port = 0u16;
        let field = Field::new("Port", &mut port).key("port");
        assert_eq!(field.lookup_key(), Some("port"));
        assert_eq!(field.name(), "Port");
    }

    #[test]
    fn empty_alias_falls_back_to_name() {
        let mut port = 0u16;
        let field = Field::new("Port", &mut port).key("");
        assert_eq!(field.lookup_key(), Some("Port"));
    }

    #[test]
    fn skip_marker_excludes() {
        let mut port = 0u16;
        assert_eq!(Field::new("Port", &mut port).skip().lookup_key(), None);
        assert_eq!(Field::new("Port", &mut port).key(SKIP).lookup_key(), None);
    }

    #[test]
    fn read_only_is_not_writable() {
        assert!(!Field::read_only("Derived").is_writable());
        let mut port = 0u16;
        assert!(Field::new("Port", &mut port).is_writable());
    }

    #[test]
    fn option_destination_allocates_once() {
        let mut dest: Option<Http> = None;
        dest.resolve();
        assert_eq!(dest, Some(Http::default()));

        dest.as_mut().unwrap().ip = "10.0.0.1".into();
        dest.resolve();
        assert_eq!(dest.unwrap().ip, "10.0.0.1");
    }

    #[test]
    fn nested_indirection_unwinds() {
        let mut dest: Option<Option<Box<Http>>> = None;
        let fields = dest.resolve().fields().len();
        assert_eq!(fields, Http::default().fields().len());
        assert!(matches!(dest, Some(Some(_))));
    }

    #[test]
    fn optional_scalar_allocates_on_slot() {
        let mut port: Option<u16> = None;
        match port.slot() {
            Slot::U16(p) => *p = 80,
            _ => panic!("Expected U16 slot"),
        }
        assert_eq!(port, Some(80));
    }

    #[test]
    fn is_sequence_does_not_allocate() {
        let scalar: Option<u16> = None;
        let list: Option<Vec<u16>> = None;
        assert!(!scalar.is_sequence());
        assert!(list.is_sequence());
        assert!(scalar.is_none() && list.is_none());
        assert!(Vec::<String>::new().is_sequence());
        assert!(!String::new().is_sequence());
    }

    #[test]
    fn vec_replace_discards_old_contents() {
        let mut v = vec![1u8, 2, 3];
        v.replace(2, &mut |i, slot| {
            if let Slot::U8(t) = slot {
                *t = (i as u8) + 10;
            }
            Ok(())
        })
        .unwrap();
        assert_eq!(v, vec![10, 11]);
    }

    #[test]
    fn vec_replace_keeps_old_contents_on_error() {
        let mut v = vec![1u8];
        let result = v.replace(2, &mut |i, _| {
            if i == 1 {
                Err(BindError::SectionNotFound("x".into()))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(v, vec![1]);
    }

    #[test]
    fn channel_and_fn_fields_are_unsupported() {
        let (mut tx, mut rx) = std::sync::mpsc::channel::<u8>();
        assert!(matches!(tx.slot(), Slot::Unsupported(_)));
        assert!(matches!(rx.slot(), Slot::Unsupported(_)));
        fn noop() {}
        let mut f: fn() = noop;
        assert!(matches!(f.slot(), Slot::Unsupported(_)));
    }
}
