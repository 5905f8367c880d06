//! Path resolution.
//!
//! Reads and writes resolve paths under different policies, so they are kept
//! as two separate walks:
//!
//! - [`resolve`] never creates anything. Any lookup failure along the way is
//!   `KeyNotFound`; stepping into a scalar is `TypeMismatch`.
//! - [`resolve_parent_for_write`] creates missing mapping levels and stops one
//!   segment short, handing back the container and the unresolved last
//!   segment. Sequences are never created or grown here.

use std::rc::Rc;

use settings_path::{index_within, parse_index, split_last, split_path};

use crate::error::{Result, SettingsError};
use crate::value::{Mapping, Sequence, Shared, Value};

/// A container located by write-parent resolution.
#[derive(Debug, Clone)]
pub(crate) enum Container {
    Map(Shared<Mapping>),
    Seq(Shared<Sequence>),
}

impl Container {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Map(map) => Some(Container::Map(map)),
            Value::Seq(seq) => Some(Container::Seq(seq)),
            _ => None,
        }
    }
}

/// Resolve `path` against `root` for reading.
pub(crate) fn resolve(root: Option<&Shared<Mapping>>, path: &str) -> Result<Value> {
    let root = root.ok_or(SettingsError::KeyNotFound)?;
    let mut current = Value::Map(Rc::clone(root));
    for step in split_path(path) {
        current = lookup(&current, step)?;
    }
    Ok(current)
}

fn lookup(current: &Value, step: &str) -> Result<Value> {
    match current {
        Value::Map(map) => map
            .borrow()
            .get(step)
            .cloned()
            .ok_or(SettingsError::KeyNotFound),
        Value::Seq(seq) => {
            let items = seq.borrow();
            let index = parse_index(step)
                .and_then(|n| index_within(n, items.len()))
                .ok_or(SettingsError::KeyNotFound)?;
            Ok(items[index].clone())
        }
        _ => Err(SettingsError::TypeMismatch),
    }
}

/// Resolve the container that holds the last segment of `path`, creating
/// empty mappings for missing keys on the way.
pub(crate) fn resolve_parent_for_write<'p>(
    root: &Shared<Mapping>,
    path: &'p str,
) -> Result<(Container, &'p str)> {
    let (parents, last) = split_last(path);
    let mut current = Container::Map(Rc::clone(root));
    if let Some(parents) = parents {
        for step in split_path(parents) {
            current = descend_or_create(&current, step)?;
        }
    }
    Ok((current, last))
}

fn descend_or_create(container: &Container, step: &str) -> Result<Container> {
    let child = match container {
        Container::Map(map) => {
            let existing = map.borrow().get(step).cloned();
            match existing {
                Some(child) => child,
                None => {
                    tracing::trace!(step, "creating intermediate mapping");
                    let created = Value::map(Mapping::new());
                    map.borrow_mut().insert(step.to_string(), created.clone());
                    created
                }
            }
        }
        Container::Seq(seq) => {
            let items = seq.borrow();
            let index = parse_index(step)
                .and_then(|n| index_within(n, items.len()))
                .ok_or(SettingsError::WrongObject)?;
            items[index].clone()
        }
    };
    Container::from_value(child).ok_or(SettingsError::WrongObject)
}

/// Position of `step` within a sequence of `len` elements on the write path.
pub(crate) fn sequence_position(step: &str, len: usize) -> Result<usize> {
    let n = parse_index(step).ok_or(SettingsError::InvalidIndex)?;
    index_within(n, len).ok_or(SettingsError::OutOfRange)
}
