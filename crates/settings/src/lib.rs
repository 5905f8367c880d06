//! Dynamically-typed settings tree addressed by dotted paths.
//!
//! A [`Tree`] wraps a mapping of string keys to [`Value`]s. Paths such as
//! `"servers.0.host"` step through mappings by key and through sequences by
//! decimal index. Reads go through typed accessors with an `_or` twin that
//! falls back to a default; writes create missing mappings on the way.
//!
//! ```
//! use settings::{SettingsError, Tree};
//!
//! let mut tree: Tree = serde_json::from_str(r#"{"a": {"b": [10, 20]}}"#).unwrap();
//!
//! assert_eq!(tree.int("a.b.1"), Ok(20));
//! tree.append("a.b", 30).unwrap();
//! assert_eq!(tree.int_seq("a.b"), Ok(vec![10, 20, 30]));
//! tree.delete("a.b.0").unwrap();
//! assert_eq!(tree.int_seq("a.b"), Ok(vec![20, 30]));
//!
//! assert_eq!(tree.raw("a.c"), Err(SettingsError::KeyNotFound));
//! assert_eq!(tree.int_or("missing.path", 42), 42);
//! ```
//!
//! Sub-trees share storage with the tree they came from. Values and trees
//! are single-threaded handles (`Rc<RefCell<_>>`).

mod access;
mod codec;
mod coerce;
mod error;
mod mutate;
mod navigate;
mod tree;
mod value;

pub use coerce::{parse_bool, FromValue};
pub use error::{Result, SettingsError};
pub use tree::Tree;
pub use value::{Kind, Mapping, Sequence, Shared, Value};

pub use settings_units::{parse_duration, parse_size, UnitError};
