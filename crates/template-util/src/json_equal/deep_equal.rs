use serde_json::Value;

/// Performs an exact deep equality check between two JSON values.
///
/// Two values are equal only when they serialize identically. Arrays compare
/// element by element and objects compare entry by entry in key order, so the
/// same entries in a different order are not equal. Floats compare by bit
/// pattern, which keeps `-0.0` apart from `0.0`. Values of different kinds are
/// never equal, so `0`, `false`, `""` and `null` are all distinct.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use combine_template_util::json_equal::deep_equal;
///
/// let a = json!({"foo": [1, 2, 3]});
/// let b = json!({"foo": [1, 2, 3]});
/// let c = json!({"foo": [1, 2, 4]});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.is_f64(), b.is_f64()) {
            (true, true) => a.as_f64().map(f64::to_bits) == b.as_f64().map(f64::to_bits),
            _ => a == b,
        },
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            obj_a.len() == obj_b.len()
                && obj_a
                    .iter()
                    .zip(obj_b)
                    .all(|((key_a, val_a), (key_b, val_b))| key_a == key_b && deep_equal(val_a, val_b))
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_scalars() {
        assert!(deep_equal(&json!(1), &json!(1)));
        assert!(deep_equal(&json!("a"), &json!("a")));
        assert!(deep_equal(&json!(null), &json!(null)));
        assert!(deep_equal(&json!(true), &json!(true)));
    }

    #[test]
    fn test_falsy_values_are_distinct() {
        assert!(!deep_equal(&json!(0), &json!(null)));
        assert!(!deep_equal(&json!(""), &json!(null)));
        assert!(!deep_equal(&json!(0), &json!(false)));
        assert!(!deep_equal(&json!(1), &json!(true)));
    }

    #[test]
    fn test_objects_respect_key_order() {
        assert!(deep_equal(&json!({"a": 1, "b": "2"}), &json!({"a": 1, "b": "2"})));
        assert!(!deep_equal(
            &json!({"a": 1, "b": "2"}),
            &json!({"b": "2", "a": 1})
        ));
        assert!(!deep_equal(&json!({"x": {"a": 1, "b": 2}}), &json!({"x": {"b": 2, "a": 1}})));
    }

    #[test]
    fn test_float_sign_of_zero() {
        assert!(deep_equal(&json!(0.0), &json!(0.0)));
        assert!(deep_equal(&json!(-0.0), &json!(-0.0)));
        assert!(!deep_equal(&json!(-0.0), &json!(0.0)));
        assert!(!deep_equal(&json!([0.0]), &json!([-0.0])));
    }

    #[test]
    fn test_integer_and_float_are_distinct() {
        assert!(!deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(1.5), &json!(1.5)));
    }

    #[test]
    fn test_objects_with_different_keys() {
        assert!(!deep_equal(
            &json!({"a": 1, "b": "2", "c": 3}),
            &json!({"a": 1, "b": "2", "d": 3})
        ));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": []})));
    }

    #[test]
    fn test_arrays() {
        assert!(deep_equal(&json!([]), &json!([])));
        assert!(deep_equal(&json!([{"a": "a"}, {"b": "b"}]), &json!([{"a": "a"}, {"b": "b"}])));
        assert!(!deep_equal(&json!([1, 2, 3]), &json!([1, 2])));
        assert!(!deep_equal(&json!([1, 2, 3]), &json!([1, 2, 4])));
    }

    #[test]
    fn test_object_and_array_not_equal() {
        assert!(!deep_equal(&json!({}), &json!([])));
    }
}
