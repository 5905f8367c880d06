//! The addressable root of a settings hierarchy.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::SettingsError;
use crate::value::{deep_clone_mapping, Mapping, Shared, Value};

/// A mapping addressed by dotted paths.
///
/// `Tree` is a handle: clones and sub-trees obtained through
/// [`Tree::tree`](crate::Tree::tree) share storage with the tree they came
/// from, so a write through one is visible through the other.
///
/// The `key` is the path at which a sub-tree was extracted. It is carried for
/// diagnostics and equality only and never takes part in navigation.
#[derive(Clone, Default)]
pub struct Tree {
    key: String,
    values: Option<Shared<Mapping>>,
}

impl Tree {
    /// Create a tree with no storage. The first write installs an empty
    /// mapping; until then every read reports `KeyNotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root tree owning `entries`.
    pub fn from_mapping(entries: Mapping) -> Self {
        Self {
            key: String::new(),
            values: Some(Rc::new(RefCell::new(entries))),
        }
    }

    pub(crate) fn with_key(key: String, values: Shared<Mapping>) -> Self {
        Self {
            key,
            values: Some(values),
        }
    }

    /// The path this tree was extracted at; empty for a root.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying mapping, if any has been installed.
    pub fn mapping(&self) -> Option<&Shared<Mapping>> {
        self.values.as_ref()
    }

    /// The underlying mapping as a [`Value`], or `Null` if the tree has no
    /// storage yet.
    pub fn to_value(&self) -> Value {
        self.values.clone().map_or(Value::Null, Value::Map)
    }

    pub fn len(&self) -> usize {
        self.values.as_ref().map_or(0, |v| v.borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-level keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.values
            .as_ref()
            .map(|v| v.borrow().keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Check whether two trees refer to the same mapping storage.
    pub fn shares_storage_with(&self, other: &Tree) -> bool {
        match (&self.values, &other.values) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Copy the whole tree into fresh storage, keeping the key.
    pub fn deep_clone(&self) -> Tree {
        Tree {
            key: self.key.clone(),
            values: self
                .values
                .as_ref()
                .map(|v| Rc::new(RefCell::new(deep_clone_mapping(&v.borrow())))),
        }
    }

    /// Root storage for writes, installing an empty mapping on first use.
    pub(crate) fn root(&mut self) -> Shared<Mapping> {
        let key = &self.key;
        let root = self.values.get_or_insert_with(|| {
            tracing::trace!(key = %key, "initialising empty settings root");
            Rc::new(RefCell::new(Mapping::new()))
        });
        Rc::clone(root)
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        if self.key != other.key {
            return false;
        }
        match (&self.values, &other.values) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Some(m), None) | (None, Some(m)) => m.borrow().is_empty(),
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("key", &self.key)
            .field("values", &self.to_value())
            .finish()
    }
}

impl From<Mapping> for Tree {
    fn from(entries: Mapping) -> Self {
        Tree::from_mapping(entries)
    }
}

/// Storing a tree stores its mapping, not a wrapper around it. A tree with
/// no storage becomes a fresh empty mapping.
impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        tree.values
            .map_or_else(|| Value::map(Mapping::new()), Value::Map)
    }
}

impl TryFrom<Value> for Tree {
    type Error = SettingsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(values) => Ok(Tree {
                key: String::new(),
                values: Some(values),
            }),
            _ => Err(SettingsError::TypeMismatch),
        }
    }
}
