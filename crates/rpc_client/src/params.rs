//! Positional argument lists.

use serde_json::Value;

/// Ordered positional arguments for one daemon call.
///
/// Trailing optional arguments that were not supplied are dropped from the
/// list instead of being sent as `null`: the daemon treats "absent" and "null"
/// differently for many optional parameters. An omitted optional followed by a
/// supplied argument cannot be skipped positionally and is sent as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    slots: Vec<Option<Value>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a required argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.slots.push(Some(value.into()));
        self
    }

    /// Appends an optional argument.
    #[must_use]
    pub fn opt<T: Into<Value>>(mut self, value: Option<T>) -> Self {
        self.slots.push(value.map(Into::into));
        self
    }

    /// Number of slots, including omitted optionals.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The argument list as sent on the wire.
    pub fn into_vec(mut self) -> Vec<Value> {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        self.slots
            .into_iter()
            .map(|slot| slot.unwrap_or(Value::Null))
            .collect()
    }
}

impl From<Params> for Vec<Value> {
    fn from(params: Params) -> Self {
        params.into_vec()
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}
