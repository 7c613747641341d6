use serde_json::Value;

use crate::types::PathStep;
use crate::util::format_json_pointer;
use crate::PathError;

/// Keys only address mapping entries and indices only address sequence
/// entries.
fn child<'a>(current: &'a Value, step: &PathStep) -> Option<&'a Value> {
    match (current, step) {
        (Value::Array(arr), PathStep::Index(idx)) => arr.get(*idx),
        (Value::Object(map), PathStep::Key(key)) => map.get(key),
        _ => None,
    }
}

fn child_mut<'a>(current: &'a mut Value, step: &PathStep) -> Option<&'a mut Value> {
    match (current, step) {
        (Value::Array(arr), PathStep::Index(idx)) => arr.get_mut(*idx),
        (Value::Object(map), PathStep::Key(key)) => map.get_mut(key),
        _ => None,
    }
}

/// Get a value from a JSON document by path.
pub fn get<'a>(val: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    path.iter().try_fold(val, child)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = child_mut(current, step)?;
    }
    Some(current)
}

/// Replace the value at an existing slot, returning the previous value.
///
/// Only existing slots are written: the path must resolve all the way down.
/// Missing keys and out-of-range indices are reported as
/// [`PathError::NotFound`] instead of growing the container.
pub fn set(val: &mut Value, path: &[PathStep], new_value: Value) -> Result<Value, PathError> {
    match get_mut(val, path) {
        Some(slot) => Ok(std::mem::replace(slot, new_value)),
        None => Err(PathError::NotFound {
            pointer: format_json_pointer(path),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_root() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &[]), Some(&doc));
    }

    #[test]
    fn test_get_typed_steps() {
        let doc = json!({"test": ["foo", "bar"]});
        let path = vec![PathStep::from("test"), PathStep::from(1)];
        assert_eq!(get(&doc, &path), Some(&json!("bar")));
    }

    #[test]
    fn test_get_index_against_object_fails() {
        let doc = json!({"0": "zero"});
        assert_eq!(get(&doc, &[PathStep::from(0)]), None);
        assert_eq!(get(&doc, &[PathStep::from("0")]), Some(&json!("zero")));
    }

    #[test]
    fn test_get_through_scalar_fails() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &[PathStep::from("a"), PathStep::from("b")]), None);
    }

    #[test]
    fn test_get_mut_writes_in_place() {
        let mut doc = json!({"a": [1, 2]});
        *get_mut(&mut doc, &[PathStep::from("a"), PathStep::from(0)]).unwrap() = json!(9);
        assert_eq!(doc, json!({"a": [9, 2]}));
    }

    #[test]
    fn test_set_returns_previous() {
        let mut doc = json!({"a": null});
        let prev = set(&mut doc, &[PathStep::from("a")], json!("x")).unwrap();
        assert_eq!(prev, Value::Null);
        assert_eq!(doc, json!({"a": "x"}));
    }

    #[test]
    fn test_set_missing_slot() {
        let mut doc = json!({"a": [1]});
        let err = set(&mut doc, &[PathStep::from("a"), PathStep::from(5)], json!(0)).unwrap_err();
        assert_eq!(
            err,
            PathError::NotFound {
                pointer: "/a/5".to_string()
            }
        );
        assert_eq!(doc, json!({"a": [1]}));
    }
}
