//! Equality filters over table columns.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;

/// Column → value equality constraints, kept sorted so that equal filters
/// serialize identically and therefore map to the same cache key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableFilter(BTreeMap<String, Value>);

impl TableFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint, replacing any previous one on the same column.
    pub fn equals(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Canonical JSON form, used as the variable part of cache keys.
    pub fn to_key_fragment(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// True when every constraint holds for `row`.
    ///
    /// A string constraint also matches a number with the same textual form
    /// and any array containing the constrained value, so `conditions=anxiety`
    /// matches a row whose `conditions` list includes `"anxiety"`.
    pub fn matches(&self, row: &Value) -> bool {
        self.0.iter().all(|(column, expected)| match row.get(column) {
            Some(Value::Array(items)) => items.iter().any(|item| loosely_equal(item, expected)),
            Some(actual) => loosely_equal(actual, expected),
            None => false,
        })
    }
}

impl From<HashMap<String, String>> for TableFilter {
    fn from(params: HashMap<String, String>) -> Self {
        Self(
            params
                .into_iter()
                .map(|(column, value)| (column, Value::String(value)))
                .collect(),
        )
    }
}

fn loosely_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            n.to_string() == *s
        }
        (Value::Bool(b), Value::String(s)) | (Value::String(s), Value::Bool(b)) => {
            b.to_string() == *s
        }
        _ => actual == expected,
    }
}
