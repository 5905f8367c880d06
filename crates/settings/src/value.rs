//! The dynamically-typed node stored in a settings tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Insertion-ordered mapping from key to value.
pub type Mapping = IndexMap<String, Value>;

/// Ordered sequence of values.
pub type Sequence = Vec<Value>;

/// Shared, interiorly mutable container storage.
///
/// Sequences and mappings live behind this handle so that a sub-tree taken
/// from a tree refers to the same storage as its parent.
pub type Shared<T> = Rc<RefCell<T>>;

/// A settings value.
///
/// Cloning a `Value` is shallow for containers: the clone refers to the same
/// sequence or mapping. Use [`Value::deep_clone`] for an independent copy.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Seq(Shared<Sequence>),
    Map(Shared<Mapping>),
}

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Seq,
    Map,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Seq => "sequence",
            Kind::Map => "mapping",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Wrap a sequence in fresh shared storage.
    pub fn seq(items: Sequence) -> Self {
        Value::Seq(Rc::new(RefCell::new(items)))
    }

    /// Wrap a mapping in fresh shared storage.
    pub fn map(entries: Mapping) -> Self {
        Value::Map(Rc::new(RefCell::new(entries)))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number of elements for containers, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Seq(items) => Some(items.borrow().len()),
            Value::Map(entries) => Some(entries.borrow().len()),
            _ => None,
        }
    }

    /// Check whether two values refer to the same container storage.
    ///
    /// Always false for scalars.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Copy this value and every container below it into fresh storage.
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::Seq(items) => {
                let items = items.borrow();
                Value::seq(items.iter().map(Value::deep_clone).collect())
            }
            Value::Map(entries) => Value::map(deep_clone_mapping(&entries.borrow())),
            scalar => scalar.clone(),
        }
    }
}

pub(crate) fn deep_clone_mapping(entries: &Mapping) -> Mapping {
    entries
        .iter()
        .map(|(k, v)| (k.clone(), v.deep_clone()))
        .collect()
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Seq(items) => match items.try_borrow() {
                Ok(items) => f.debug_list().entries(items.iter()).finish(),
                Err(_) => f.write_str("[<borrowed>]"),
            },
            Value::Map(entries) => match entries.try_borrow() {
                Ok(entries) => f.debug_map().entries(entries.iter()).finish(),
                Err(_) => f.write_str("{<borrowed>}"),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Value::map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(1).kind(), Kind::Int);
        assert_eq!(Value::from(1.5).kind(), Kind::Float);
        assert_eq!(Value::from("a").kind(), Kind::String);
        assert_eq!(Value::from(vec![1, 2]).kind(), Kind::Seq);
        assert_eq!(Value::map(Mapping::new()).kind(), Kind::Map);
        assert_eq!(Kind::Map.to_string(), "mapping");
    }

    #[test]
    fn test_clone_is_shallow() {
        let a = Value::from(vec![1, 2]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        if let Value::Seq(items) = &b {
            items.borrow_mut().push(Value::from(3));
        }
        assert_eq!(a.len(), Some(3));
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let mut inner = Mapping::new();
        inner.insert("k".to_string(), Value::from("v"));
        let a = Value::from(vec![Value::map(inner)]);
        let b = a.deep_clone();
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));

        if let Value::Seq(items) = &b {
            items.borrow_mut().clear();
        }
        assert_eq!(a.len(), Some(1));
        assert_eq!(b.len(), Some(0));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Value::from(vec![1, 2]), Value::from(vec![1, 2]));
        assert_ne!(Value::from(vec![1, 2]), Value::from(vec![2, 1]));
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        assert_eq!(Value::from(3.5).as_i64(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert_eq!(Value::from(Some(2)), Value::Int(2));
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(7).len(), None);
    }

    #[test]
    fn test_debug_renders_contents() {
        let mut entries = Mapping::new();
        entries.insert("a".to_string(), Value::from(vec![1]));
        assert_eq!(format!("{:?}", Value::map(entries)), r#"{"a": [Int(1)]}"#);
    }
}
