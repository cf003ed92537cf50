//! Precondition checks run on caller input before a call is dispatched.

use crate::error::{RpcError, RpcResult};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// A value that can be "absent" from the daemon's point of view: null, an
/// empty string, or an empty collection.
pub trait RequiredValue {
    fn is_missing(&self) -> bool;
}

impl RequiredValue for str {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl RequiredValue for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<T> RequiredValue for [T] {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<T> RequiredValue for Vec<T> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> RequiredValue for HashMap<K, V, S> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> RequiredValue for BTreeMap<K, V> {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl<T: RequiredValue + ?Sized> RequiredValue for &T {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

impl<T: RequiredValue> RequiredValue for Option<T> {
    fn is_missing(&self) -> bool {
        self.as_ref().map_or(true, RequiredValue::is_missing)
    }
}

impl RequiredValue for Value {
    fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

/// A caller-built compound argument with its own notion of "fully specified".
pub trait StructuredParam {
    /// Name of the first unset required field, or `None` when filled.
    fn missing_field(&self) -> Option<&'static str>;

    /// Whether every required field is set.
    fn is_filled(&self) -> bool {
        self.missing_field().is_none()
    }
}

/// Fails with [`RpcError::InvalidParameter`] if `value` is null or empty.
pub fn require_non_empty<T: RequiredValue + ?Sized>(name: &str, value: &T) -> RpcResult<()> {
    if value.is_missing() {
        return Err(RpcError::invalid_parameter(
            name,
            format!("{name} is null or empty"),
        ));
    }
    Ok(())
}

/// Fails with [`RpcError::InvalidParameter`] naming the first unset field.
pub fn require_filled<P: StructuredParam + ?Sized>(param: &P) -> RpcResult<()> {
    match param.missing_field() {
        Some(field) => Err(RpcError::invalid_parameter(
            field,
            format!("{field} must be set"),
        )),
        None => Ok(()),
    }
}

/// Requires a non-empty list whose every element is filled.
/// Errors on an element are reported as `name[index].field`.
pub fn require_all_filled<P: StructuredParam>(name: &str, items: &[P]) -> RpcResult<()> {
    require_non_empty(name, items)?;
    for (index, item) in items.iter().enumerate() {
        if let Some(field) = item.missing_field() {
            return Err(RpcError::invalid_parameter(
                format!("{name}[{index}].{field}"),
                format!("{field} must be set"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Pair {
        left: Option<String>,
        right: Option<u32>,
    }

    impl StructuredParam for Pair {
        fn missing_field(&self) -> Option<&'static str> {
            if self.left.is_missing() {
                Some("left")
            } else if self.right.is_none() {
                Some("right")
            } else {
                None
            }
        }
    }

    #[test]
    fn empty_values_are_missing() {
        assert!(require_non_empty("s", "").is_err());
        assert!(require_non_empty("s", &String::new()).is_err());
        assert!(require_non_empty("v", &Vec::<u8>::new()).is_err());
        assert!(require_non_empty("o", &None::<String>).is_err());
        assert!(require_non_empty("m", &HashMap::<String, u8>::new()).is_err());
        assert!(require_non_empty("j", &Value::Null).is_err());
        assert!(require_non_empty("j", &json!([])).is_err());
        assert!(require_non_empty("j", &json!({})).is_err());
    }

    #[test]
    fn present_values_pass() {
        assert!(require_non_empty("s", "abc").is_ok());
        assert!(require_non_empty("o", &Some("x".to_string())).is_ok());
        assert!(require_non_empty("j", &json!(0)).is_ok());
        assert!(require_non_empty("j", &json!(false)).is_ok());
        assert!(require_non_empty("v", &[1u8][..]).is_ok());
    }

    #[test]
    fn error_names_the_parameter() {
        let err = require_non_empty("hexString", "").unwrap_err();
        assert!(matches!(err, RpcError::InvalidParameter { ref name, .. } if name == "hexString"));
    }

    #[test]
    fn require_filled_reports_first_missing_field() {
        let pair = Pair {
            left: Some("a".into()),
            right: None,
        };
        assert!(!pair.is_filled());
        let err = require_filled(&pair).unwrap_err();
        assert!(matches!(err, RpcError::InvalidParameter { ref name, .. } if name == "right"));

        let pair = Pair {
            left: Some(String::new()),
            right: Some(1),
        };
        assert!(!pair.is_filled());

        let pair = Pair {
            left: Some("a".into()),
            right: Some(1),
        };
        assert!(pair.is_filled());
        assert!(require_filled(&pair).is_ok());
    }

    #[test]
    fn require_all_filled_indexes_offender() {
        let items = vec![
            Pair {
                left: Some("a".into()),
                right: Some(0),
            },
            Pair {
                left: None,
                right: Some(1),
            },
        ];
        let err = require_all_filled("inputs", &items).unwrap_err();
        assert!(
            matches!(err, RpcError::InvalidParameter { ref name, .. } if name == "inputs[1].left")
        );

        let err = require_all_filled::<Pair>("inputs", &[]).unwrap_err();
        assert!(matches!(err, RpcError::InvalidParameter { ref name, .. } if name == "inputs"));
    }
}
