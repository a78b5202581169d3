/// Builds a [`Value`](crate::Value) tree from JSON-like syntax.
///
/// Literals, arrays, and objects with string-literal keys nest freely; any
/// other expression falls through [`crate::to_value`], so a `u64` above
/// `i64::MAX` lands in the tree as a raw number and an existing
/// [`Value`](crate::Value) passes through unchanged.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::rawjson;
///
/// let doc = rawjson!({
///     "name": "Alice",
///     "scores": [90, 85, null],
///     "id": 18446744073709551615u64
/// });
/// assert_eq!(
///     doc.get("id").and_then(|v| v.as_raw_number()),
///     Some("18446744073709551615")
/// );
/// ```
#[macro_export]
macro_rules! rawjson {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::rawjson!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::rawjson!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{JsonMap, Number, Value};

    #[test]
    fn test_rawjson_macro_primitives() {
        assert_eq!(rawjson!(null), Value::Null);
        assert_eq!(rawjson!(true), Value::Bool(true));
        assert_eq!(rawjson!(false), Value::Bool(false));
        assert_eq!(rawjson!(42), Value::Number(Number::Integer(42)));
        assert_eq!(rawjson!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(rawjson!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_rawjson_macro_arrays() {
        assert_eq!(rawjson!([]), Value::Array(vec![]));

        let arr = rawjson!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::Number(Number::Integer(2)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_rawjson_macro_objects() {
        assert_eq!(rawjson!({}), Value::Object(JsonMap::new()));

        let obj = rawjson!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_rawjson_macro_nesting() {
        let doc = rawjson!({
            "items": [1, true, null],
            "empty": {}
        });

        let items = doc.get("items").and_then(|v| v.as_array()).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(doc.get("empty"), Some(&Value::Object(JsonMap::new())));
    }

    #[test]
    fn test_rawjson_macro_big_values_become_raw() {
        let doc = rawjson!({ "id": 18446744073709551615u64 });
        assert_eq!(
            doc.get("id"),
            Some(&Value::RawNumber("18446744073709551615".to_string()))
        );

        let big = Value::from(
            num_bigint::BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap(),
        );
        let doc = rawjson!([big]);
        let arr = doc.as_array().unwrap();
        assert_eq!(arr[0].as_raw_number(), Some("123456789012345678901234567890"));
    }
}
