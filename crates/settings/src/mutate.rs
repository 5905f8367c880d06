//! In-place mutation: set, append and delete.

use settings_path::split_last;

use crate::error::{Result, SettingsError};
use crate::navigate::{resolve, resolve_parent_for_write, sequence_position, Container};
use crate::tree::Tree;
use crate::value::Value;

impl Tree {
    /// Store `value` at `path`, creating missing mappings along the way.
    ///
    /// A [`Tree`] value is stored as its mapping, so later writes through
    /// either handle are visible through the other.
    ///
    /// # Errors
    ///
    /// - `WrongObject` - a container on the path is not a mapping or sequence
    /// - `InvalidIndex` - the last segment is not an integer for a sequence
    /// - `OutOfRange` - the last segment is outside the sequence
    ///
    /// # Example
    ///
    /// ```
    /// use settings::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.set("x.y.z", "hello").unwrap();
    /// assert_eq!(tree.string("x.y.z").unwrap(), "hello");
    /// assert!(tree.tree("x.y").is_ok());
    /// ```
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let root = self.root();
        let (parent, last) = resolve_parent_for_write(&root, path)?;
        store(&parent, last, value)
    }

    /// Append `value` to the sequence at `path`.
    ///
    /// A missing entry, or one that is not a sequence, is replaced by a new
    /// sequence holding just `value`. This is the only way to grow a
    /// sequence.
    ///
    /// # Errors
    ///
    /// Same as [`Tree::set`].
    ///
    /// # Example
    ///
    /// ```
    /// use settings::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.append("a.list", 1).unwrap();
    /// tree.append("a.list", 2).unwrap();
    /// assert_eq!(tree.int_seq("a.list").unwrap(), vec![1, 2]);
    /// ```
    pub fn append(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let root = self.root();
        let (parent, last) = resolve_parent_for_write(&root, path)?;
        let existing = match &parent {
            Container::Map(map) => map.borrow().get(last).cloned(),
            Container::Seq(seq) => {
                let items = seq.borrow();
                let index = sequence_position(last, items.len())?;
                let element = items[index].clone();
                Some(element)
            }
        };
        match existing {
            Some(Value::Seq(items)) => {
                items.borrow_mut().push(value);
                Ok(())
            }
            _ => store(&parent, last, Value::seq(vec![value])),
        }
    }

    /// Remove the entry at `path`.
    ///
    /// A missing top-level key is not an error. For deeper paths every
    /// segment above the last must already exist: a missing one is
    /// `KeyNotFound`, a scalar in the way is `TypeMismatch`. Removing from a
    /// sequence shifts later elements down.
    ///
    /// # Errors
    ///
    /// - `KeyNotFound` / `TypeMismatch` - the containing path does not resolve
    /// - `WrongObject` - the containing value is not a mapping or sequence
    /// - `InvalidIndex` - the last segment is not an integer for a sequence
    /// - `OutOfRange` - the last segment is outside the sequence
    pub fn delete(&mut self, path: &str) -> Result<()> {
        match split_last(path) {
            (None, key) => {
                if let Some(root) = self.mapping() {
                    let removed = root.borrow_mut().shift_remove(key);
                    if removed.is_some() {
                        tracing::debug!(key, "deleted top-level key");
                    }
                }
                Ok(())
            }
            (Some(parent), last) => match resolve(self.mapping(), parent)? {
                Value::Map(map) => {
                    let removed = map.borrow_mut().shift_remove(last);
                    if removed.is_some() {
                        tracing::debug!(path, "deleted mapping entry");
                    }
                    Ok(())
                }
                Value::Seq(seq) => {
                    let removed = {
                        let mut items = seq.borrow_mut();
                        let index = sequence_position(last, items.len())?;
                        items.remove(index)
                    };
                    tracing::debug!(path, kind = %removed.kind(), "deleted sequence element");
                    Ok(())
                }
                _ => Err(SettingsError::WrongObject),
            },
        }
    }
}

fn store(parent: &Container, step: &str, value: Value) -> Result<()> {
    match parent {
        Container::Map(map) => {
            map.borrow_mut().insert(step.to_string(), value);
        }
        Container::Seq(seq) => {
            let mut items = seq.borrow_mut();
            let index = sequence_position(step, items.len())?;
            items[index] = value;
        }
    }
    Ok(())
}
