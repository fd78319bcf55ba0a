/// Build a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// Arrays and objects are assembled structurally; everything else,
/// including numbers, booleans, strings, and arbitrary expressions in
/// parentheses, is routed through [`to_value`](crate::to_value), so any
/// `Serialize` expression works as a leaf. The only keyword the macro
/// knows about is `null`, which has no expression form.
///
/// ```rust
/// use toon_codec::toon;
///
/// let port = 8080;
/// let data = toon!({
///     "name": "Alice",
///     "port": (port),
///     "tags": ["rust", "toon"],
///     "retired": null
/// });
/// assert_eq!(data.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// assert_eq!(data.get("port").and_then(|v| v.as_i64()), Some(8080));
/// ```
#[macro_export]
macro_rules! toon {
    ([ $($item:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![ $($crate::toon!($item)),* ])
    };

    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::ToonMap::new();
        $( map.insert(($key).to_string(), $crate::toon!($val)); )*
        $crate::Value::Object(map)
    }};

    (null) => {
        $crate::Value::Null
    };

    // Leaf expressions go through the serde bridge; a non-serializable
    // expression degrades to null rather than failing the build.
    ($leaf:expr) => {
        $crate::to_value(&$leaf).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{encode, Number, Value};

    #[test]
    fn test_null_keyword_vs_null_string() {
        assert_eq!(toon!(null), Value::Null);
        // The quoted form is a string, not the keyword
        assert_eq!(toon!("null"), Value::String("null".to_string()));
        assert_eq!(encode(&toon!({"a": "null"})), "a: \"null\"");
    }

    #[test]
    fn test_leaves_go_through_serde() {
        assert_eq!(toon!(true), Value::Bool(true));
        assert_eq!(toon!("x"), Value::String("x".to_string()));
        // Whole floats stay floats in the tree; only the encoder
        // canonicalizes them, and cross-variant equality bridges the two
        let five = toon!(5.0);
        assert!(matches!(five, Value::Number(Number::Float(_))));
        assert_eq!(five, Value::Number(Number::Integer(5)));
    }

    #[test]
    fn test_parenthesized_expressions() {
        let count = 2 + 3;
        assert_eq!(toon!((count)), Value::Number(Number::Integer(5)));
        assert_eq!(toon!((-17)), Value::Number(Number::Integer(-17)));

        let nan = toon!((f64::NAN));
        assert!(matches!(nan, Value::Number(Number::Float(f)) if f.is_nan()));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(toon!([]), Value::Array(vec![]));
        assert!(matches!(&toon!({}), Value::Object(m) if m.is_empty()));
    }

    #[test]
    fn test_nested_composition() {
        let value = toon!({
            "rows": [
                {"id": 1, "ok": true},
                {"id": 2, "ok": false}
            ]
        });
        assert_eq!(
            encode(&value),
            "rows[2]{id,ok}:\n  1,true\n  2,false"
        );
    }
}
