//! Conversions from raw values to requested kinds.
//!
//! Only two coercions exist: float accepts an integer, and bool accepts
//! numbers and boolean literals. Everything else is an exact kind match.

use std::time::Duration;

use indexmap::IndexMap;
use settings_units::{parse_duration, parse_size};

use crate::error::{Result, SettingsError};
use crate::value::Value;

/// A kind that can be read out of a [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(SettingsError::TypeMismatch),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(SettingsError::TypeMismatch),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float(x) => Ok(*x),
            Value::Int(n) => Ok(*n as f64),
            _ => Err(SettingsError::TypeMismatch),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Int(n) => Ok(*n != 0),
            Value::Float(x) => Ok(*x != 0.0),
            Value::String(s) => parse_bool(s).ok_or(SettingsError::TypeMismatch),
            _ => Err(SettingsError::TypeMismatch),
        }
    }
}

impl FromValue for Duration {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => parse_duration(s).map_err(|_| SettingsError::TypeMismatch),
            _ => Err(SettingsError::TypeMismatch),
        }
    }
}

/// Parse a boolean literal, ignoring ASCII case.
///
/// Accepted: `true`, `t`, `yes`, `1` and `false`, `f`, `no`, `0`. Surrounding
/// whitespace is not trimmed.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "1" => Some(true),
        "false" | "f" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Byte size: an integer is a count of bytes, a string goes through
/// [`parse_size`].
pub(crate) fn size(value: &Value) -> Result<i64> {
    match value {
        Value::Int(n) if *n >= 0 => Ok(*n),
        Value::String(s) => parse_size(s).map_err(|_| SettingsError::TypeMismatch),
        _ => Err(SettingsError::TypeMismatch),
    }
}

/// Coerce every element of a sequence. One failure fails the whole call.
pub(crate) fn seq_of<T>(value: &Value, coerce: fn(&Value) -> Result<T>) -> Result<Vec<T>> {
    let Value::Seq(items) = value else {
        return Err(SettingsError::TypeMismatch);
    };
    let items = items.borrow();
    items
        .iter()
        .map(|item| coerce(item).map_err(|_| SettingsError::TypeMismatch))
        .collect()
}

/// Coerce every value of a mapping. One failure fails the whole call.
pub(crate) fn map_of<T>(
    value: &Value,
    coerce: fn(&Value) -> Result<T>,
) -> Result<IndexMap<String, T>> {
    let Value::Map(entries) = value else {
        return Err(SettingsError::TypeMismatch);
    };
    let entries = entries.borrow();
    entries
        .iter()
        .map(|(k, v)| {
            coerce(v)
                .map(|v| (k.clone(), v))
                .map_err(|_| SettingsError::TypeMismatch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mapping;

    #[test]
    fn test_exact_kinds() {
        assert_eq!(String::from_value(&Value::from("a")), Ok("a".to_string()));
        assert_eq!(String::from_value(&Value::from(1)), Err(SettingsError::TypeMismatch));
        assert_eq!(i64::from_value(&Value::from(7)), Ok(7));
        assert_eq!(i64::from_value(&Value::from(7.0)), Err(SettingsError::TypeMismatch));
        assert_eq!(i64::from_value(&Value::from("7")), Err(SettingsError::TypeMismatch));
    }

    #[test]
    fn test_float_widens_int() {
        assert_eq!(f64::from_value(&Value::from(2.5)), Ok(2.5));
        assert_eq!(f64::from_value(&Value::from(2)), Ok(2.0));
        assert_eq!(f64::from_value(&Value::from("2.5")), Err(SettingsError::TypeMismatch));
        assert_eq!(f64::from_value(&Value::Null), Err(SettingsError::TypeMismatch));
    }

    #[test]
    fn test_bool_coercion() {
        let truthy = [
            Value::from(true),
            Value::from(1),
            Value::from(-3),
            Value::from(0.5),
            Value::from("true"),
            Value::from("TRUE"),
            Value::from("tRuE"),
            Value::from("t"),
            Value::from("Yes"),
            Value::from("1"),
        ];
        for v in truthy {
            assert_eq!(bool::from_value(&v), Ok(true), "{v:?}");
        }

        let falsy = [
            Value::from(false),
            Value::from(0),
            Value::from(0.0),
            Value::from("false"),
            Value::from("F"),
            Value::from("NO"),
            Value::from("0"),
        ];
        for v in falsy {
            assert_eq!(bool::from_value(&v), Ok(false), "{v:?}");
        }

        let invalid = [
            Value::Null,
            Value::from(""),
            Value::from(" true"),
            Value::from("on"),
            Value::from("2"),
            Value::from(vec![true]),
            Value::map(Mapping::new()),
        ];
        for v in invalid {
            assert_eq!(bool::from_value(&v), Err(SettingsError::TypeMismatch), "{v:?}");
        }
    }

    #[test]
    fn test_duration() {
        assert_eq!(
            Duration::from_value(&Value::from("5m")),
            Ok(Duration::from_secs(300))
        );
        assert_eq!(
            Duration::from_value(&Value::from(300)),
            Err(SettingsError::TypeMismatch)
        );
        assert_eq!(
            Duration::from_value(&Value::from("soon")),
            Err(SettingsError::TypeMismatch)
        );
    }

    #[test]
    fn test_size() {
        assert_eq!(size(&Value::from("15tb")), Ok(15_i64 << 40));
        assert_eq!(size(&Value::from(512)), Ok(512));
        assert_eq!(size(&Value::from(-1)), Err(SettingsError::TypeMismatch));
        assert_eq!(size(&Value::from(1.5)), Err(SettingsError::TypeMismatch));
        assert_eq!(size(&Value::from("big")), Err(SettingsError::TypeMismatch));
        assert_eq!(size(&Value::from("-5k")), Err(SettingsError::TypeMismatch));
    }

    #[test]
    fn test_seq_of_is_all_or_nothing() {
        let mixed = Value::from(vec![Value::from("one"), Value::from(2)]);
        assert_eq!(
            seq_of(&mixed, String::from_value),
            Err(SettingsError::TypeMismatch)
        );
        assert_eq!(
            seq_of(&Value::from(vec![1, 2]), f64::from_value),
            Ok(vec![1.0, 2.0])
        );
        assert_eq!(
            seq_of(&Value::from("x"), String::from_value),
            Err(SettingsError::TypeMismatch)
        );
    }

    #[test]
    fn test_map_of_keeps_order() {
        let mut entries = Mapping::new();
        entries.insert("z".to_string(), Value::from(1));
        entries.insert("a".to_string(), Value::from(0));
        let got = map_of(&Value::map(entries), bool::from_value).unwrap();
        assert_eq!(got.keys().collect::<Vec<_>>(), vec!["z", "a"]);
        assert!(got["z"]);
        assert!(!got["a"]);

        assert_eq!(
            map_of(&Value::from(vec![1]), i64::from_value),
            Err(SettingsError::TypeMismatch)
        );
    }

    #[test]
    fn test_map_of_is_all_or_nothing() {
        let mut entries = Mapping::new();
        entries.insert("a".to_string(), Value::from(1));
        entries.insert("b".to_string(), Value::from("x"));
        let mixed = Value::map(entries);
        assert_eq!(map_of(&mixed, i64::from_value), Err(SettingsError::TypeMismatch));
        assert_eq!(map_of(&mixed, bool::from_value), Err(SettingsError::TypeMismatch));
        assert_eq!(map_of(&mixed, Value::from_value).map(|m| m.len()), Ok(2));
    }
}
