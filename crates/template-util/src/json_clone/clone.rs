use serde_json::{Map, Value};

/// Creates a deep clone of any JSON value.
///
/// Every nested array and object is rebuilt, so the result shares no
/// container with the input. Object keys keep their insertion order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use combine_template_util::json_clone::clone;
///
/// let original = json!({"foo": [1, 2, 3]});
/// let cloned = clone(&original);
///
/// assert_eq!(original, cloned);
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::with_capacity(obj.len());
            for (key, val) in obj {
                new_obj.insert(key.clone(), clone(val));
            }
            Value::Object(new_obj)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clone_scalars() {
        for value in [json!(null), json!(false), json!(42), json!(-1.5), json!("hello")] {
            assert_eq!(clone(&value), value);
        }
    }

    #[test]
    fn test_clone_nested() {
        let value = json!({
            "array": [1, 2, {"nested": true}],
            "object": {"a": "b"},
            "scalar": 42
        });
        assert_eq!(clone(&value), value);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = json!({"arr": [1, 2, 3]});
        let mut cloned = clone(&original);
        cloned["arr"][0] = json!(100);
        assert_eq!(original["arr"][0], json!(1));
        assert_eq!(cloned["arr"][0], json!(100));
    }

    #[test]
    fn test_clone_preserves_key_order() {
        let original = json!({"z": 1, "a": 2, "m": 3});
        let cloned = clone(&original);
        let keys: Vec<&String> = cloned.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
