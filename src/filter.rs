// 🔍 Deep Filter - Prune nested records down to matching leaves
// Keeps the key path of every terminal the predicate accepts, drops the rest

use crate::record::NestedRecord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::convert::Infallible;
use tracing::debug;

// ============================================================================
// FILTER OPERATIONS
// ============================================================================

/// Filter a record, keeping only terminals for which `predicate` holds
///
/// Walks depth-first. A container survives only if at least one terminal
/// below it survives; otherwise it is dropped from its parent entirely
/// rather than kept as an empty mapping. Returns `None` (absent) when
/// nothing at all qualifies, including for an empty input container.
///
/// A root that is itself a terminal is tested directly.
pub fn filter<P>(record: &NestedRecord, predicate: P) -> Option<NestedRecord>
where
    P: Fn(&Value) -> bool,
{
    match try_filter(record, |value| Ok::<_, Infallible>(predicate(value))) {
        Ok(filtered) => filtered,
        Err(never) => match never {},
    }
}

/// Like [`filter`], but with a fallible predicate
///
/// The first predicate error aborts the whole walk and is returned as is;
/// no partial result is produced. Keys are visited in sorted order, so
/// "first" means first by key order, not by the order the input was written.
pub fn try_filter<P, E>(record: &NestedRecord, predicate: P) -> Result<Option<NestedRecord>, E>
where
    P: Fn(&Value) -> Result<bool, E>,
{
    let filtered = prune(record, &predicate)?;

    debug!(
        input_leaves = record.leaf_count(),
        retained_leaves = filtered.as_ref().map_or(0, NestedRecord::leaf_count),
        "deep filter finished"
    );

    Ok(filtered)
}

fn prune<P, E>(node: &NestedRecord, predicate: &P) -> Result<Option<NestedRecord>, E>
where
    P: Fn(&Value) -> Result<bool, E>,
{
    match node {
        NestedRecord::Terminal(value) => {
            if predicate(value)? {
                Ok(Some(node.clone()))
            } else {
                Ok(None)
            }
        }
        NestedRecord::Container(entries) => {
            let mut kept = BTreeMap::new();

            for (key, child) in entries {
                if let Some(pruned) = prune(child, predicate)? {
                    kept.insert(key.clone(), pruned);
                }
            }

            if kept.is_empty() {
                Ok(None)
            } else {
                Ok(Some(NestedRecord::Container(kept)))
            }
        }
    }
}

// ============================================================================
// DEEP FILTER
// ============================================================================

/// DeepFilter - a predicate bound for repeated use
pub struct DeepFilter<P> {
    predicate: P,
}

impl<P> DeepFilter<P>
where
    P: Fn(&Value) -> bool,
{
    pub fn new(predicate: P) -> Self {
        DeepFilter { predicate }
    }

    /// Apply the bound predicate to a record
    pub fn apply(&self, record: &NestedRecord) -> Option<NestedRecord> {
        filter(record, &self.predicate)
    }

    /// Test a single terminal against the bound predicate
    pub fn accepts(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl DeepFilter<fn(&Value) -> bool> {
    /// Keep string leaves only
    pub fn strings() -> Self {
        DeepFilter::new(predicates::is_string as fn(&Value) -> bool)
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

pub mod predicates {
    use serde_json::Value;

    pub fn is_string(value: &Value) -> bool {
        value.is_string()
    }

    pub fn is_number(value: &Value) -> bool {
        value.is_number()
    }

    pub fn is_bool(value: &Value) -> bool {
        value.is_boolean()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use serde_json::json;

    fn sample() -> NestedRecord {
        NestedRecord::from(json!({
            "a": 1,
            "b": {
                "c": "Hello World",
                "d": 2,
                "e": { "f": { "g": -4 } },
                "h": "Good Night Moon"
            }
        }))
    }

    #[test]
    fn test_string_filter_example() {
        let filtered = filter(&sample(), predicates::is_string).unwrap();

        assert_eq!(
            filtered.into_json(),
            json!({ "b": { "c": "Hello World", "h": "Good Night Moon" } })
        );
    }

    #[test]
    fn test_branch_without_matches_is_dropped() {
        let filtered = filter(&sample(), predicates::is_string).unwrap();

        assert!(filtered.get("a").is_none());
        assert!(filtered.get_path(&["b", "d"]).is_none());
        assert!(filtered.get_path(&["b", "e"]).is_none());
    }

    #[test]
    fn test_no_matches_is_absent() {
        let record = NestedRecord::from(json!({ "a": 1, "b": { "c": 2 } }));
        assert_eq!(filter(&record, predicates::is_string), None);
    }

    #[test]
    fn test_empty_container_is_absent() {
        assert_eq!(filter(&NestedRecord::container(), |_| true), None);

        let record = NestedRecord::from(json!({ "a": {}, "b": "x" }));
        assert_eq!(
            filter(&record, |_| true).unwrap().into_json(),
            json!({ "b": "x" })
        );
    }

    #[test]
    fn test_top_level_terminal_kept() {
        let record = NestedRecord::from(json!({ "name": "root", "n": 3 }));
        assert_eq!(
            filter(&record, predicates::is_string).unwrap().into_json(),
            json!({ "name": "root" })
        );
    }

    #[test]
    fn test_terminal_root() {
        let root = NestedRecord::from(json!("solo"));

        assert_eq!(filter(&root, predicates::is_string), Some(root.clone()));
        assert_eq!(filter(&root, predicates::is_number), None);
    }

    #[test]
    fn test_deep_match_keeps_ancestors() {
        let filtered = filter(&sample(), predicates::is_number).unwrap();

        assert_eq!(
            filtered.into_json(),
            json!({ "a": 1, "b": { "d": 2, "e": { "f": { "g": -4 } } } })
        );
    }

    #[test]
    fn test_arrays_are_tested_as_terminals() {
        let record = NestedRecord::from(json!({ "tags": ["x", "y"], "name": "z" }));

        assert_eq!(
            filter(&record, Value::is_array).unwrap().into_json(),
            json!({ "tags": ["x", "y"] })
        );
        assert_eq!(
            filter(&record, predicates::is_string).unwrap().into_json(),
            json!({ "name": "z" })
        );
    }

    #[test]
    fn test_idempotent() {
        let once = filter(&sample(), predicates::is_string).unwrap();
        let twice = filter(&once, predicates::is_string).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_result_leaves_all_satisfy_predicate() {
        let filtered = filter(&sample(), predicates::is_string).unwrap();

        assert_eq!(filtered.leaf_count(), 2);
        assert!(filtered.get_path(&["b", "c"]).unwrap().is_terminal());
    }

    #[test]
    fn test_input_untouched() {
        let record = sample();
        let before = record.clone();
        let _ = filter(&record, predicates::is_string);

        assert_eq!(record, before);
    }

    #[test]
    fn test_try_filter_propagates_error() {
        let result: Result<Option<NestedRecord>, String> = try_filter(&sample(), |value| {
            if value == &json!(-4) {
                Err("negative value".to_string())
            } else {
                Ok(value.is_string())
            }
        });

        assert_eq!(result, Err("negative value".to_string()));
    }

    #[test]
    fn test_try_filter_ok() {
        let result: Result<Option<NestedRecord>, String> =
            try_filter(&sample(), |value| Ok(value.is_string()));

        assert_eq!(
            result.unwrap().unwrap().into_json(),
            json!({ "b": { "c": "Hello World", "h": "Good Night Moon" } })
        );
    }

    #[test]
    fn test_deep_filter_struct() {
        let strings = DeepFilter::strings();

        assert!(strings.accepts(&json!("x")));
        assert!(!strings.accepts(&json!(1)));
        assert_eq!(strings.apply(&sample()), filter(&sample(), predicates::is_string));

        let positives = DeepFilter::new(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0));
        assert_eq!(
            positives.apply(&sample()).unwrap().into_json(),
            json!({ "a": 1, "b": { "d": 2 } })
        );
    }

    #[test]
    fn test_try_filter_reports_first_error_by_key_order() {
        let record = NestedRecord::from(json!({ "z": 1, "a": 2 }));
        let result: Result<Option<NestedRecord>, String> =
            try_filter(&record, |value| Err(format!("rejected {}", value)));

        assert_eq!(result, Err("rejected 2".to_string()));
    }

    #[test]
    fn test_filter_logs_retained_leaves() {
        let (filtered, logs) = capture_logs(|| filter(&sample(), predicates::is_string));

        assert_eq!(filtered.map(|r| r.leaf_count()), Some(2));
        assert!(logs.contains("DEBUG"), "logs: {}", logs);
        assert!(logs.contains("input_leaves=5"), "logs: {}", logs);
        assert!(logs.contains("retained_leaves=2"), "logs: {}", logs);
    }
}
