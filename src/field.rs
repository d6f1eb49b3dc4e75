//! Bind one matched option onto one destination field.

use tracing::{debug, trace};

use crate::coerce;
use crate::document::Values;
use crate::error::BindError;
use crate::schema::{Settable, Slot};

/// Write `values` into `target`.
///
/// A sequence field is rebuilt with one element per source value (a single
/// value yields a one-element sequence). Any other field takes only the first
/// value; the rest of a list is dropped.
pub fn set_value(name: &str, target: &mut dyn Settable, values: &Values) -> Result<(), BindError> {
    if !target.is_sequence() {
        // Checked before `slot()`, which allocates an empty `Option`.
        let Some(value) = values.first() else {
            debug!(field = name, "empty list for scalar field, leaving it untouched");
            return Ok(());
        };
        trace!(field = name, kind = %value.kind(), "binding value");
        return coerce::assign(target.slot(), value, name);
    }

    match target.slot() {
        Slot::Seq(seq) => {
            let items = values.as_slice();
            trace!(field = name, len = items.len(), "binding sequence");
            seq.replace(items.len(), &mut |i, slot| {
                coerce::assign(slot, &items[i], name)
            })
        }
        slot => match values.first() {
            Some(value) => coerce::assign(slot, value, name),
            None => Ok(()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    fn list(items: &[&str]) -> Values {
        Values::Many(items.iter().map(|s| Value::from(*s)).collect())
    }

    #[test]
    fn list_into_scalar_keeps_first() {
        let mut n = 0i32;
        set_value("k", &mut n, &list(&["10", "20", "30"])).unwrap();
        assert_eq!(n, 10);
    }

    #[test]
    fn scalar_into_sequence_is_single_element() {
        let mut v: Vec<String> = Vec::new();
        set_value("k", &mut v, &Values::from("x")).unwrap();
        assert_eq!(v, vec!["x".to_string()]);
    }

    #[test]
    fn list_into_sequence_coerces_each_element() {
        let mut v: Vec<u16> = Vec::new();
        set_value("k", &mut v, &list(&["1", "2.7", "x"])).unwrap();
        assert_eq!(v, vec![1, 2, 0]);
    }

    #[test]
    fn sequence_is_replaced_not_appended() {
        let mut v = vec![9i64, 9, 9, 9];
        set_value("k", &mut v, &list(&["1", "2"])).unwrap();
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn mixed_kinds_into_sequence() {
        let mut v: Vec<bool> = Vec::new();
        let values = Values::Many(vec![
            Value::Bool(true),
            Value::Int(1),
            Value::Float(0.5),
            Value::from("on"),
        ]);
        set_value("k", &mut v, &values).unwrap();
        assert_eq!(v, vec![true, true, false, true]);
    }

    #[test]
    fn empty_list_into_sequence_clears_it() {
        let mut v = vec!["old".to_string()];
        set_value("k", &mut v, &Values::Many(vec![])).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn empty_list_into_scalar_is_noop() {
        let mut n = 5u8;
        set_value("k", &mut n, &Values::Many(vec![])).unwrap();
        assert_eq!(n, 5);
    }

    #[test]
    fn empty_list_into_optional_scalar_stays_none() {
        let mut workers: Option<u16> = None;
        set_value("workers", &mut workers, &Values::Many(vec![])).unwrap();
        assert_eq!(workers, None);
    }

    #[test]
    fn empty_list_into_optional_sequence_allocates_empty() {
        let mut tags: Option<Vec<String>> = None;
        set_value("tags", &mut tags, &Values::Many(vec![])).unwrap();
        assert_eq!(tags, Some(vec![]));
    }

    #[test]
    fn optional_scalar_becomes_some() {
        let mut port: Option<u16> = None;
        set_value("port", &mut port, &Values::from("8080")).unwrap();
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn nested_sequence_element_is_unknown_kind() {
        let mut grid: Vec<Vec<u8>> = Vec::new();
        let err = set_value("grid", &mut grid, &list(&["1"])).unwrap_err();
        assert!(matches!(err, BindError::UnknownFieldKind { ref field, .. } if field == "grid"));
        assert!(grid.is_empty());
    }
}
