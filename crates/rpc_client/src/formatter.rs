//! Result shaping.
//!
//! The daemon's `result` is loosely typed; these helpers turn it into the
//! record or scalar a caller expects. Conversions are lenient: `null` maps to
//! the empty or default value, and any other unexpected shape is logged at
//! `warn` and degraded the same way instead of failing the call. Within a
//! record, a field that fails to decode takes its default on its own.

use crate::command::Command;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

fn degraded(command: Command, expected: &str, raw: &Value) {
    warn!(
        target: "multichain::rpc",
        command = command.as_str(),
        expected,
        actual = kind(raw),
        "unexpected result shape; using default"
    );
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes an object result into `T`; anything else yields `T::default()`.
pub fn format_record<T>(command: Command, raw: Value) -> T
where
    T: DeserializeOwned + Default,
{
    match raw {
        Value::Null => T::default(),
        Value::Object(fields) => decode_object(command, fields),
        other => {
            degraded(command, "object", &other);
            T::default()
        }
    }
}

/// Decodes an object, dropping only the fields that fail to decode so they
/// take their default while every other field is kept.
fn decode_object<T>(command: Command, fields: Map<String, Value>) -> T
where
    T: DeserializeOwned + Default,
{
    if let Ok(record) = serde_json::from_value(Value::Object(fields.clone())) {
        return record;
    }

    let mut accepted = Map::with_capacity(fields.len());
    for (key, value) in fields {
        accepted.insert(key.clone(), value);
        if let Err(err) = serde_json::from_value::<T>(Value::Object(accepted.clone())) {
            let rejected = accepted.remove(&key).unwrap_or(Value::Null);
            warn!(
                target: "multichain::rpc",
                command = command.as_str(),
                field = %key,
                actual = kind(&rejected),
                error = %err,
                "result field did not decode; using default"
            );
        }
    }
    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}

/// Like [`format_record`] but keeps `null` distinct from an empty record.
pub fn format_optional_record<T>(command: Command, raw: Value) -> Option<T>
where
    T: DeserializeOwned + Default,
{
    match raw {
        Value::Null => None,
        other => Some(format_record(command, other)),
    }
}

/// Decodes each element of an array result. Non-arrays yield an empty list.
pub fn format_list<T>(command: Command, raw: Value) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    match raw {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(fields) => decode_object(command, fields),
                other => serde_json::from_value(other).unwrap_or_else(|err| {
                    warn!(
                        target: "multichain::rpc",
                        command = command.as_str(),
                        error = %err,
                        "list element did not decode; using default"
                    );
                    T::default()
                }),
            })
            .collect(),
        other => {
            degraded(command, "array", &other);
            Vec::new()
        }
    }
}

pub fn format_string(command: Command, raw: Value) -> String {
    match raw {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => {
            degraded(command, "string", &other);
            String::new()
        }
    }
}

/// `null` becomes `None`; a string becomes `Some`.
pub fn format_optional_string(command: Command, raw: Value) -> Option<String> {
    match raw {
        Value::Null => None,
        other => Some(format_string(command, other)),
    }
}

/// Numbers are accepted as booleans (non-zero is true).
pub fn format_bool(command: Command, raw: Value) -> bool {
    match raw {
        Value::Bool(b) => b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        other => {
            degraded(command, "bool", &other);
            false
        }
    }
}

/// Numeric strings are accepted.
pub fn format_f64(command: Command, raw: Value) -> f64 {
    match &raw {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::Null => 0.0,
        Value::String(s) => s.trim().parse().unwrap_or_else(|_| {
            degraded(command, "number", &raw);
            0.0
        }),
        other => {
            degraded(command, "number", other);
            0.0
        }
    }
}

pub fn format_u64(command: Command, raw: Value) -> u64 {
    match &raw {
        Value::Number(n) => n.as_u64().unwrap_or_else(|| {
            degraded(command, "unsigned integer", &raw);
            0
        }),
        Value::Null => 0,
        Value::String(s) => s.trim().parse().unwrap_or_else(|_| {
            degraded(command, "unsigned integer", &raw);
            0
        }),
        other => {
            degraded(command, "unsigned integer", other);
            0
        }
    }
}

/// Object result as a free-form map.
pub fn format_object(command: Command, raw: Value) -> Map<String, Value> {
    match raw {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            degraded(command, "object", &other);
            Map::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WalletInfo;
    use serde_json::json;

    #[test]
    fn wallet_info_record() {
        let info: WalletInfo = format_record(
            Command::GetWalletInfo,
            json!({"walletversion": 1, "balance": 12.5, "txcount": 4}),
        );
        assert_eq!(info.wallet_version, 1);
        assert_eq!(info.balance, 12.5);
        assert_eq!(info.tx_count, 4);
        assert_eq!(info.keypool_size, 0);
    }

    #[test]
    fn wrong_shape_degrades_to_default() {
        let info: WalletInfo = format_record(Command::GetWalletInfo, json!("oops"));
        assert_eq!(info, WalletInfo::default());
        let info: WalletInfo = format_record(Command::GetWalletInfo, Value::Null);
        assert_eq!(info, WalletInfo::default());
    }

    #[test]
    fn bad_field_keeps_the_rest_of_the_record() {
        let info: WalletInfo = format_record(
            Command::GetWalletInfo,
            json!({
                "walletversion": 1,
                "balance": 12.5,
                "keypoololdest": null,
                "txcount": "many",
                "keypoolsize": 2
            }),
        );
        assert_eq!(info.wallet_version, 1);
        assert_eq!(info.balance, 12.5);
        assert_eq!(info.keypool_oldest, 0);
        assert_eq!(info.tx_count, 0);
        assert_eq!(info.keypool_size, 2);
    }

    #[test]
    fn bad_field_in_list_element_keeps_the_rest() {
        let infos: Vec<WalletInfo> = format_list(
            Command::GetWalletInfo,
            json!([{"balance": 3.0, "utxocount": -4}, {"balance": 1.5}]),
        );
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].balance, 3.0);
        assert_eq!(infos[0].utxo_count, 0);
        assert_eq!(infos[1].balance, 1.5);
    }

    #[test]
    fn optional_record_keeps_null() {
        let none: Option<WalletInfo> = format_optional_record(Command::GetWalletInfo, Value::Null);
        assert!(none.is_none());
        let some: Option<WalletInfo> =
            format_optional_record(Command::GetWalletInfo, json!({"balance": 1.0}));
        assert_eq!(some.map(|w| w.balance), Some(1.0));
    }

    #[test]
    fn lists() {
        let addresses: Vec<String> = format_list(Command::GetAddresses, json!(["a", "b"]));
        assert_eq!(addresses, vec!["a", "b"]);
        let empty: Vec<String> = format_list(Command::GetAddresses, Value::Null);
        assert!(empty.is_empty());
        let empty: Vec<String> = format_list(Command::GetAddresses, json!({"a": 1}));
        assert!(empty.is_empty());
    }

    #[test]
    fn scalars() {
        assert_eq!(format_string(Command::GetNewAddress, json!("1abc")), "1abc");
        assert_eq!(format_string(Command::GetNewAddress, json!(5)), "");
        assert_eq!(
            format_optional_string(Command::SubmitBlock, Value::Null),
            None
        );
        assert!(format_bool(Command::VerifyMessage, json!(true)));
        assert!(format_bool(Command::VerifyMessage, json!(1)));
        assert!(!format_bool(Command::VerifyMessage, json!("yes")));
        assert_eq!(format_f64(Command::GetBalance, json!(2.25)), 2.25);
        assert_eq!(format_f64(Command::GetBalance, json!("3.5")), 3.5);
        assert_eq!(format_u64(Command::GetBlockCount, json!(120)), 120);
        assert_eq!(format_u64(Command::GetBlockCount, json!(-1)), 0);
        assert!(format_object(Command::GetRuntimeParams, json!([1])).is_empty());
    }
}
