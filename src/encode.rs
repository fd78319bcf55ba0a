//! TOON encoder: turns a [`Value`] tree into canonical TOON text.
//!
//! The encoder walks the tree once and picks the most compact shape for
//! each node:
//!
//! - **Objects**: one `key: value` line per field, nesting by indentation
//! - **Inline arrays**: all-scalar arrays as `key[N]: v1,v2,v3`
//! - **Tabular arrays**: uniform object arrays as
//!   `key[N]{f1,f2}:` followed by one delimiter-joined row per element
//! - **Expanded lists**: mixed arrays as `key[N]:` with `- ` items
//! - **Key folding** (opt-in): `a:\n  b:\n    c: 1` collapses to `a.b.c: 1`
//!
//! Non-default delimiters are recorded inside each array header (`[3\t]`,
//! `[3|]`) so the output stays self-describing.
//!
//! # Example
//! ```
//! use toon_codec::{encode, toon};
//!
//! let value = toon!({"name": "Alice", "scores": [95, 87, 92]});
//! assert_eq!(encode(&value), "name: Alice\nscores[3]: 95,87,92");
//! ```

use std::fmt::Write as _;

use crate::options::{EncodeOptions, KeyFolding};
use crate::scalar;
use crate::value::Value;
use crate::ToonMap;

/// Encode a value as TOON text under default options.
///
/// Encoding a well-formed value tree cannot fail. Non-finite floats have
/// no representation and degrade to `null`.
#[must_use]
pub fn encode(value: &Value) -> String {
    encode_with_options(value, &EncodeOptions::default())
}

/// Encode a value as TOON text with explicit options.
#[must_use]
pub fn encode_with_options(value: &Value, options: &EncodeOptions) -> String {
    let mut encoder = Encoder {
        out: String::with_capacity(256),
        options,
    };
    encoder.write_root(value);
    encoder.out
}

struct Encoder<'a> {
    out: String,
    options: &'a EncodeOptions,
}

impl<'a> Encoder<'a> {
    /// Top-level dispatch: objects and arrays emit without a leading key,
    /// anything else is a single bare scalar line.
    fn write_root(&mut self, value: &Value) {
        match value {
            Value::Object(map) => self.write_object(map, 0),
            Value::Array(arr) => self.write_array(arr, 0),
            scalar => self.write_scalar(scalar),
        }
    }

    fn write_object(&mut self, map: &ToonMap, depth: usize) {
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 || depth > 0 {
                self.out.push('\n');
                self.write_indent(depth);
            }
            self.write_entry(key, value, depth, map);
        }
    }

    /// Emit one `key: value` entry whose line sits at `depth`. Children of
    /// the entry (nested fields, array rows) go one level deeper.
    fn write_entry(&mut self, key: &str, value: &Value, depth: usize, siblings: &ToonMap) {
        if self.options.key_folding == KeyFolding::Safe {
            if let Some((path, leaf)) = fold_chain(key, value, siblings) {
                self.out.push_str(&path);
                self.out.push_str(": ");
                self.write_scalar(leaf);
                return;
            }
        }
        self.write_key(key);
        match value {
            Value::Object(map) if map.is_empty() => self.out.push(':'),
            Value::Object(map) => {
                self.out.push(':');
                self.write_object(map, depth + 1);
            }
            Value::Array(arr) => self.write_array(arr, depth),
            scalar => {
                self.out.push_str(": ");
                self.write_scalar(scalar);
            }
        }
    }

    /// Emit an array header and body. `depth` is the level of the header
    /// line; rows and list items land at `depth + 1`.
    fn write_array(&mut self, arr: &[Value], depth: usize) {
        let delim = self.options.delimiter;

        if arr.is_empty() {
            self.out.push_str("[0]:");
            return;
        }

        if let Some(fields) = detect_tabular(arr) {
            let _ = write!(self.out, "[{}{}]{{", arr.len(), delim.header_annotation());
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    self.out.push(delim.as_char());
                }
                self.out.push_str(field);
            }
            self.out.push_str("}:");
            for row in arr {
                self.out.push('\n');
                self.write_indent(depth + 1);
                if let Value::Object(map) = row {
                    for (i, field) in fields.iter().enumerate() {
                        if i > 0 {
                            self.out.push(delim.as_char());
                        }
                        if let Some(cell) = map.get(field) {
                            self.write_scalar(cell);
                        }
                    }
                }
            }
            return;
        }

        if arr.iter().all(Value::is_scalar) {
            let _ = write!(self.out, "[{}{}]: ", arr.len(), delim.header_annotation());
            for (i, element) in arr.iter().enumerate() {
                if i > 0 {
                    self.out.push(delim.as_char());
                }
                self.write_scalar(element);
            }
            return;
        }

        let _ = write!(self.out, "[{}]:", arr.len());
        self.write_list_items(arr, depth);
    }

    /// Expanded list body: one `- ` item per element at `depth + 1`, with
    /// object fields and nested rows continuing at `depth + 2`.
    fn write_list_items(&mut self, arr: &[Value], depth: usize) {
        for item in arr {
            self.out.push('\n');
            self.write_indent(depth + 1);
            match item {
                Value::Object(map) if map.is_empty() => self.out.push('-'),
                Value::Object(map) => {
                    self.out.push_str("- ");
                    for (i, (key, value)) in map.iter().enumerate() {
                        if i > 0 {
                            self.out.push('\n');
                            self.write_indent(depth + 2);
                        }
                        self.write_entry(key, value, depth + 2, map);
                    }
                }
                Value::Array(inner) => {
                    self.out.push_str("- ");
                    self.write_array(inner, depth + 1);
                }
                scalar => {
                    self.out.push_str("- ");
                    self.write_scalar(scalar);
                }
            }
        }
    }

    fn write_key(&mut self, key: &str) {
        if is_key_safe(key) {
            self.out.push_str(key);
        } else {
            self.out.push_str(&scalar::quote(key));
        }
    }

    fn write_scalar(&mut self, value: &Value) {
        self.out
            .push_str(&scalar::format_scalar(value, self.options.delimiter));
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth * self.options.indent {
            self.out.push(' ');
        }
    }
}

/// Keys emit unquoted only as plain identifiers. Anything else, including
/// keys with literal dots, is quoted so a folded path can never be
/// mistaken for a literal key.
fn is_key_safe(key: &str) -> bool {
    scalar::is_identifier(key)
}

/// Follows a chain of single-key objects down to a scalar leaf. Returns
/// the dotted path and the leaf when the whole chain folds; a branching
/// object, a container leaf, an unsafe segment, or a sibling key equal to
/// the folded path all abort the fold.
fn fold_chain<'v>(key: &str, value: &'v Value, siblings: &ToonMap) -> Option<(String, &'v Value)> {
    if !is_key_safe(key) {
        return None;
    }
    let mut path: Vec<&str> = vec![key];
    let mut cur = value;
    loop {
        match cur {
            Value::Object(map) if map.len() == 1 => {
                let (k, v) = map.iter().next()?;
                if !is_key_safe(k) {
                    return None;
                }
                path.push(k.as_str());
                cur = v;
            }
            Value::Object(_) | Value::Array(_) => return None,
            _ => break,
        }
    }
    if path.len() < 2 {
        return None;
    }
    let folded = path.join(".");
    if siblings.contains_key(&folded) {
        return None;
    }
    Some((folded, cur))
}

/// Tabular eligibility: every element is an object with the same key
/// sequence in the same order, every cell is a scalar, and every field
/// name is safe to print unquoted between delimiters.
fn detect_tabular(arr: &[Value]) -> Option<Vec<&str>> {
    let first = match arr.first()? {
        Value::Object(map) if !map.is_empty() => map,
        _ => return None,
    };
    let fields: Vec<&str> = first.keys().map(String::as_str).collect();
    if !fields.iter().all(|f| is_key_safe(f)) {
        return None;
    }
    for item in arr {
        let map = match item {
            Value::Object(map) => map,
            _ => return None,
        };
        if map.len() != fields.len() {
            return None;
        }
        for (i, (key, cell)) in map.iter().enumerate() {
            if key != fields[i] || !cell.is_scalar() {
                return None;
            }
        }
    }
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Delimiter;
    use crate::toon;

    #[test]
    fn test_simple_object() {
        let value = toon!({"id": 123, "name": "Ada"});
        assert_eq!(encode(&value), "id: 123\nname: Ada");
    }

    #[test]
    fn test_nested_object() {
        let value = toon!({"user": {"id": 1, "name": "Bob"}});
        assert_eq!(encode(&value), "user:\n  id: 1\n  name: Bob");
    }

    #[test]
    fn test_empty_root_object() {
        assert_eq!(encode(&toon!({})), "");
    }

    #[test]
    fn test_primitive_array() {
        let value = toon!({"tags": ["admin", "ops", "dev"]});
        assert_eq!(encode(&value), "tags[3]: admin,ops,dev");
    }

    #[test]
    fn test_empty_array() {
        let value = toon!({"items": []});
        assert_eq!(encode(&value), "items[0]:");
    }

    #[test]
    fn test_tabular_array() {
        let value = toon!({
            "users": [
                {"id": 1, "name": "Alice", "role": "admin"},
                {"id": 2, "name": "Bob", "role": "user"}
            ]
        });
        assert_eq!(
            encode(&value),
            "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user"
        );
    }

    #[test]
    fn test_mixed_array() {
        let value = toon!({"data": [1, {"a": "test"}, "text"]});
        assert_eq!(encode(&value), "data[3]:\n  - 1\n  - a: test\n  - text");
    }

    #[test]
    fn test_nested_arrays() {
        let value = toon!({"matrix": [[1, 2], [3, 4]]});
        assert_eq!(encode(&value), "matrix[2]:\n  - [2]: 1,2\n  - [2]: 3,4");
    }

    #[test]
    fn test_root_array_tabular() {
        let value = toon!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob"}
        ]);
        assert_eq!(encode(&value), "[2]{id,name}:\n  1,Alice\n  2,Bob");
    }

    #[test]
    fn test_root_scalar() {
        assert_eq!(encode(&toon!("hello")), "hello");
        assert_eq!(encode(&toon!(42)), "42");
    }

    #[test]
    fn test_quoting() {
        let value = toon!({
            "val1": "true",
            "val2": "false",
            "val3": "null",
            "code": "123",
            "url": "http://example.com:8080",
            "empty": ""
        });
        let text = encode(&value);
        assert!(text.contains("val1: \"true\""));
        assert!(text.contains("val2: \"false\""));
        assert!(text.contains("val3: \"null\""));
        assert!(text.contains("code: \"123\""));
        assert!(text.contains("url: \"http://example.com:8080\""));
        assert!(text.contains("empty: \"\""));
    }

    #[test]
    fn test_number_canonicalization() {
        let value = toon!({"a": 5.0, "b": 1000000, "c": (f64::NAN), "d": (f64::INFINITY)});
        assert_eq!(encode(&value), "a: 5\nb: 1000000\nc: null\nd: null");
    }

    #[test]
    fn test_custom_indent() {
        let value = toon!({"user": {"name": "Bob"}});
        let options = EncodeOptions::new().with_indent(4);
        assert_eq!(encode_with_options(&value, &options), "user:\n    name: Bob");
    }

    #[test]
    fn test_tab_delimiter_header() {
        let value = toon!({"items": [{"id": 1, "name": "Ada"}]});
        let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
        assert_eq!(
            encode_with_options(&value, &options),
            "items[1\t]{id\tname}:\n  1\tAda"
        );
    }

    #[test]
    fn test_pipe_delimiter_header() {
        let value = toon!({"tags": ["a", "b", "c"]});
        let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
        assert_eq!(encode_with_options(&value, &options), "tags[3|]: a|b|c");
    }

    #[test]
    fn test_delimiter_scoped_quoting() {
        let value = toon!({"tags": ["a,b", "c|d"]});
        let comma = encode_with_options(&value, &EncodeOptions::new());
        assert_eq!(comma, "tags[2]: \"a,b\",c|d");

        let pipe =
            encode_with_options(&value, &EncodeOptions::new().with_delimiter(Delimiter::Pipe));
        assert_eq!(pipe, "tags[2|]: a,b|\"c|d\"");
    }

    #[test]
    fn test_key_folding() {
        let value = toon!({"a": {"b": {"c": 1}}});
        let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
        assert_eq!(encode_with_options(&value, &options), "a.b.c: 1");
        // Folding off keeps the nested shape
        assert_eq!(encode(&value), "a:\n  b:\n    c: 1");
    }

    #[test]
    fn test_folding_stops_at_branches_and_containers() {
        let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);

        let branching = toon!({"a": {"b": 1, "c": 2}});
        assert_eq!(
            encode_with_options(&branching, &options),
            "a:\n  b: 1\n  c: 2"
        );

        let container_leaf = toon!({"a": {"b": [1, 2]}});
        assert_eq!(
            encode_with_options(&container_leaf, &options),
            "a:\n  b[2]: 1,2"
        );
    }

    #[test]
    fn test_folding_skips_sibling_collision() {
        let value = toon!({"a.b": 6, "a": {"b": 5}});
        let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
        // Folding "a" would collide with the literal "a.b" key
        assert_eq!(
            encode_with_options(&value, &options),
            "\"a.b\": 6\na:\n  b: 5"
        );
    }

    #[test]
    fn test_dotted_literal_key_is_quoted() {
        let value = toon!({"a.b.c": 1});
        assert_eq!(encode(&value), "\"a.b.c\": 1");
    }

    #[test]
    fn test_tabular_rejects_non_uniform() {
        // Differing key order falls back to the expanded list
        let value = toon!({
            "rows": [
                {"a": 1, "b": 2},
                {"b": 3, "a": 4}
            ]
        });
        let text = encode(&value);
        assert!(text.starts_with("rows[2]:\n"));
        assert!(text.contains("- a: 1"));
    }

    #[test]
    fn test_tabular_rejects_nested_values() {
        let value = toon!({
            "rows": [
                {"a": 1, "b": {"nested": true}},
                {"a": 2, "b": {"nested": false}}
            ]
        });
        let text = encode(&value);
        assert!(text.starts_with("rows[2]:\n"));
    }

    #[test]
    fn test_list_item_with_trailing_fields() {
        let value = toon!({
            "data": [
                {"name": "Alice", "tags": ["x", "y"]},
                7
            ]
        });
        assert_eq!(
            encode(&value),
            "data[2]:\n  - name: Alice\n    tags[2]: x,y\n  - 7"
        );
    }

    #[test]
    fn test_unicode_passthrough() {
        let value = toon!({"name": "José", "emoji": "🎉"});
        assert_eq!(encode(&value), "name: José\nemoji: 🎉");
    }
}
