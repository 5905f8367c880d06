//! Typed read access.
//!
//! Every accessor resolves its path first, so `KeyNotFound` and
//! `TypeMismatch` from navigation reach the caller unchanged. The kind check
//! or coercion runs on the located value afterwards. Each accessor has an
//! `_or` twin that returns a caller-supplied default on any error.

use std::time::Duration;

use indexmap::IndexMap;
use settings_path::child_path;

use crate::coerce::{map_of, seq_of, size, FromValue};
use crate::error::{Result, SettingsError};
use crate::navigate::resolve;
use crate::tree::Tree;
use crate::value::Value;

macro_rules! typed_accessors {
    ($name:literal, $ty:ty, $coerce:expr,
     $scalar:ident, $scalar_or:ident,
     $seq:ident, $seq_or:ident,
     $map:ident, $map_or:ident) => {
        #[doc = concat!("Get ", $name, " value.")]
        pub fn $scalar(&self, path: &str) -> Result<$ty> {
            $coerce(&self.raw(path)?)
        }

        #[doc = concat!("Get ", $name, " value, or `default` on any error.")]
        pub fn $scalar_or(&self, path: &str, default: impl Into<$ty>) -> $ty {
            self.$scalar(path).unwrap_or_else(|_| default.into())
        }

        #[doc = concat!("Get a sequence of ", $name, " values.")]
        pub fn $seq(&self, path: &str) -> Result<Vec<$ty>> {
            seq_of(&self.raw(path)?, $coerce)
        }

        #[doc = concat!("Get a sequence of ", $name, " values, or `default` on any error.")]
        pub fn $seq_or(&self, path: &str, default: impl Into<Vec<$ty>>) -> Vec<$ty> {
            self.$seq(path).unwrap_or_else(|_| default.into())
        }

        #[doc = concat!("Get a mapping of ", $name, " values.")]
        pub fn $map(&self, path: &str) -> Result<IndexMap<String, $ty>> {
            map_of(&self.raw(path)?, $coerce)
        }

        #[doc = concat!("Get a mapping of ", $name, " values, or `default` on any error.")]
        pub fn $map_or(
            &self,
            path: &str,
            default: impl Into<IndexMap<String, $ty>>,
        ) -> IndexMap<String, $ty> {
            self.$map(path).unwrap_or_else(|_| default.into())
        }
    };
}

impl Tree {
    /// Get the value at `path` without any kind check.
    ///
    /// # Example
    ///
    /// ```
    /// use settings::{SettingsError, Tree, Value};
    ///
    /// let mut tree = Tree::new();
    /// tree.set("a.b", vec![10, 20]).unwrap();
    /// assert_eq!(tree.raw("a.b.1"), Ok(Value::Int(20)));
    /// assert_eq!(tree.raw("a.c"), Err(SettingsError::KeyNotFound));
    /// ```
    pub fn raw(&self, path: &str) -> Result<Value> {
        resolve(self.mapping(), path)
    }

    pub fn raw_or(&self, path: &str, default: impl Into<Value>) -> Value {
        self.raw(path).unwrap_or_else(|_| default.into())
    }

    /// Check whether `path` resolves to a value (including an explicit null).
    pub fn has(&self, path: &str) -> bool {
        self.raw(path).is_ok()
    }

    /// Get a value of any kind implementing [`FromValue`].
    pub fn get<T: FromValue>(&self, path: &str) -> Result<T> {
        T::from_value(&self.raw(path)?)
    }

    pub fn get_or<T: FromValue>(&self, path: &str, default: T) -> T {
        self.get(path).unwrap_or(default)
    }

    pub fn get_seq<T: FromValue>(&self, path: &str) -> Result<Vec<T>> {
        seq_of(&self.raw(path)?, T::from_value)
    }

    pub fn get_map<T: FromValue>(&self, path: &str) -> Result<IndexMap<String, T>> {
        map_of(&self.raw(path)?, T::from_value)
    }

    typed_accessors!("a string", String, String::from_value,
        string, string_or, string_seq, string_seq_or, string_map, string_map_or);

    typed_accessors!("an integer", i64, i64::from_value,
        int, int_or, int_seq, int_seq_or, int_map, int_map_or);

    typed_accessors!("a float", f64, f64::from_value,
        float, float_or, float_seq, float_seq_or, float_map, float_map_or);

    typed_accessors!("a boolean", bool, bool::from_value,
        bool, bool_or, bool_seq, bool_seq_or, bool_map, bool_map_or);

    typed_accessors!("a duration", Duration, Duration::from_value,
        duration, duration_or, duration_seq, duration_seq_or, duration_map, duration_map_or);

    typed_accessors!("a byte size", i64, size,
        size, size_or, size_seq, size_seq_or, size_map, size_map_or);

    /// Get the mapping at `path` as a sub-tree sharing its storage.
    ///
    /// # Example
    ///
    /// ```
    /// use settings::Tree;
    ///
    /// let mut root = Tree::new();
    /// root.set("db.host", "localhost").unwrap();
    ///
    /// let mut db = root.tree("db").unwrap();
    /// assert_eq!(db.key(), "db");
    /// db.set("port", 5432).unwrap();
    /// assert_eq!(root.int("db.port"), Ok(5432));
    /// ```
    pub fn tree(&self, path: &str) -> Result<Tree> {
        match self.raw(path)? {
            Value::Map(values) => Ok(Tree::with_key(path.to_string(), values)),
            _ => Err(SettingsError::TypeMismatch),
        }
    }

    pub fn tree_or(&self, path: &str, default: Tree) -> Tree {
        self.tree(path).unwrap_or(default)
    }

    /// Get a sequence of mappings as sub-trees keyed `path.0`, `path.1`, ...
    pub fn tree_seq(&self, path: &str) -> Result<Vec<Tree>> {
        let Value::Seq(items) = self.raw(path)? else {
            return Err(SettingsError::TypeMismatch);
        };
        let items = items.borrow();
        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Map(values) => Ok(Tree::with_key(child_path(path, i), values.clone())),
                _ => Err(SettingsError::TypeMismatch),
            })
            .collect()
    }

    pub fn tree_seq_or(&self, path: &str, default: Vec<Tree>) -> Vec<Tree> {
        self.tree_seq(path).unwrap_or(default)
    }

    /// Get a mapping of mappings as sub-trees keyed `path.<key>`.
    pub fn tree_map(&self, path: &str) -> Result<IndexMap<String, Tree>> {
        let Value::Map(entries) = self.raw(path)? else {
            return Err(SettingsError::TypeMismatch);
        };
        let entries = entries.borrow();
        entries
            .iter()
            .map(|(key, item)| match item {
                Value::Map(values) => Ok((
                    key.clone(),
                    Tree::with_key(child_path(path, key), values.clone()),
                )),
                _ => Err(SettingsError::TypeMismatch),
            })
            .collect()
    }

    pub fn tree_map_or(
        &self,
        path: &str,
        default: IndexMap<String, Tree>,
    ) -> IndexMap<String, Tree> {
        self.tree_map(path).unwrap_or(default)
    }
}
