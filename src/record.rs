// 🌳 Nested Record - Tree-shaped key/value data
// Terminal vs. container is decided once, when the record is built

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// NESTED RECORD
// ============================================================================

/// NestedRecord - either a leaf value or a mapping of further records
///
/// JSON objects become containers. Everything else (strings, numbers,
/// booleans, null and arrays) is a terminal; arrays are not recursed into.
///
/// Serializes as plain JSON, so a record read from JSON writes back to the
/// same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedRecord {
    // Must stay first: untagged deserialization tries variants in order
    Container(BTreeMap<String, NestedRecord>),
    Terminal(Value),
}

impl NestedRecord {
    /// Empty container
    pub fn container() -> Self {
        NestedRecord::Container(BTreeMap::new())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, NestedRecord::Terminal(_))
    }

    pub fn as_terminal(&self) -> Option<&Value> {
        match self {
            NestedRecord::Terminal(value) => Some(value),
            NestedRecord::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&BTreeMap<String, NestedRecord>> {
        match self {
            NestedRecord::Container(entries) => Some(entries),
            NestedRecord::Terminal(_) => None,
        }
    }

    /// Child under `key` (containers only)
    pub fn get(&self, key: &str) -> Option<&NestedRecord> {
        self.as_container().and_then(|entries| entries.get(key))
    }

    /// Walk a key path from this record
    pub fn get_path(&self, path: &[&str]) -> Option<&NestedRecord> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Number of terminals anywhere below (a terminal counts itself)
    pub fn leaf_count(&self) -> usize {
        match self {
            NestedRecord::Terminal(_) => 1,
            NestedRecord::Container(entries) => entries.values().map(NestedRecord::leaf_count).sum(),
        }
    }

    /// Convert back to a plain JSON value
    pub fn to_json(&self) -> Value {
        self.clone().into_json()
    }

    pub fn into_json(self) -> Value {
        match self {
            NestedRecord::Terminal(value) => value,
            NestedRecord::Container(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, child.into_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<Value> for NestedRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => NestedRecord::Container(
                map.into_iter()
                    .map(|(key, child)| (key, NestedRecord::from(child)))
                    .collect(),
            ),
            other => NestedRecord::Terminal(other),
        }
    }
}

impl From<NestedRecord> for Value {
    fn from(record: NestedRecord) -> Self {
        record.into_json()
    }
}

impl fmt::Display for NestedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

// ============================================================================
// TESTS
// ============================================================================
