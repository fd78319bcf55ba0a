//! TOON decoder: parses TOON text back into a [`Value`] tree.
//!
//! The decoder works on a line model: the input is split into lines,
//! blank lines and `#` comment lines are dropped (original line numbers
//! are kept for error reporting), and each remaining line carries an
//! indentation depth. A recursive descent over that list rebuilds the
//! tree, reading each array's delimiter from its own header (`[3\t]`,
//! `[3|]`), so no delimiter configuration is needed.
//!
//! The indent unit is taken from the first indented line of the document;
//! every other indentation must be a whole multiple of it. In strict mode
//! (the default) declared array lengths, tabular row widths, unique keys,
//! and regular indentation are all enforced.
//!
//! # Example
//! ```
//! use toon_codec::{decode, toon};
//!
//! let value = decode("id: 123\nname: Ada").unwrap();
//! assert_eq!(value, toon!({"id": 123, "name": "Ada"}));
//! ```

use crate::error::{Error, Result};
use crate::options::{DecodeOptions, Delimiter, PathExpansion};
use crate::scalar;
use crate::value::Value;
use crate::ToonMap;

/// Decode TOON text under default options (strict, no path expansion).
///
/// # Errors
///
/// Returns the first grammar violation found, tagged with its 1-based
/// line number.
pub fn decode(input: &str) -> Result<Value> {
    decode_with_options(input, &DecodeOptions::default())
}

/// Decode TOON text with explicit options.
///
/// # Errors
///
/// Returns the first grammar violation found. Non-strict mode downgrades
/// count and duplicate-key violations but still rejects malformed headers,
/// strings, and escapes.
pub fn decode_with_options(input: &str, options: &DecodeOptions) -> Result<Value> {
    let mut decoder = Decoder::new(input, options)?;
    decoder.parse_document()
}

/// A structural input line: trimmed content, indentation depth, and the
/// 1-based line number it came from.
struct Line {
    text: String,
    depth: usize,
    number: usize,
}

struct Decoder<'a> {
    lines: Vec<Line>,
    pos: usize,
    options: &'a DecodeOptions,
}

/// Parsed form of a `key ...:` line, before its value is resolved.
struct Entry {
    key: String,
    quoted: bool,
    kind: EntryKind,
}

enum EntryKind {
    /// `key:` or `key: token`
    Plain { payload: Option<String> },
    /// `key[N]...:` with an optional inline payload
    Array {
        header: ArrayHeader,
        payload: Option<String>,
    },
}

/// Contents of an array header: declared length, delimiter annotation,
/// and tabular field names when present.
struct ArrayHeader {
    len: usize,
    delimiter: Delimiter,
    fields: Option<Vec<String>>,
}

impl<'a> Decoder<'a> {
    fn new(input: &str, options: &'a DecodeOptions) -> Result<Self> {
        let lines = scan_lines(input, options)?;
        Ok(Decoder {
            lines,
            pos: 0,
            options,
        })
    }

    /// Classify the root form: empty document, root array, bare scalar,
    /// or object.
    fn parse_document(&mut self) -> Result<Value> {
        if self.lines.is_empty() {
            return Ok(Value::Object(ToonMap::new()));
        }

        let (first_text, first_depth, first_number) = {
            let l = &self.lines[0];
            (l.text.clone(), l.depth, l.number)
        };
        if first_depth != 0 {
            return Err(Error::indent(
                first_number,
                "document must start at column 0",
            ));
        }

        if first_text.starts_with('[') {
            let value = self.parse_root_array(&first_text, first_number)?;
            self.expect_consumed()?;
            return Ok(value);
        }

        if self.lines.len() == 1 && probe_entry(&first_text, first_number)?.is_none() {
            return scalar::parse_token(&first_text, first_number);
        }

        let map = self.parse_object(0)?;
        self.expect_consumed()?;
        Ok(Value::Object(map))
    }

    fn parse_root_array(&mut self, text: &str, number: usize) -> Result<Value> {
        let (header, after) = parse_array_header(text, number)?;
        let after = after
            .strip_prefix(':')
            .ok_or_else(|| Error::header(number, "missing `:` after array header"))?;
        let payload = non_empty(after);
        self.pos = 1;
        self.parse_array_body(header, payload, 0, number)
    }

    /// Parse the block of `key: value` entries at exactly `depth`.
    fn parse_object(&mut self, depth: usize) -> Result<ToonMap> {
        let mut map = ToonMap::new();
        loop {
            let (line_depth, number) = match self.lines.get(self.pos) {
                Some(l) => (l.depth, l.number),
                None => break,
            };
            if line_depth < depth {
                break;
            }
            if line_depth > depth {
                if self.options.strict {
                    return Err(Error::indent(
                        number,
                        format!("expected {} levels of indentation, found {}", depth, line_depth),
                    ));
                }
                self.pos += 1;
                continue;
            }
            let text = self.lines[self.pos].text.clone();
            let entry = probe_entry(&text, number)?.ok_or_else(|| {
                Error::unexpected(number, format!("expected `key:` entry, found `{}`", text))
            })?;
            self.pos += 1;
            if let Some(value) = self.parse_entry_value(entry.kind, depth, number)? {
                self.insert_entry(&mut map, entry.key, entry.quoted, value, number)?;
            }
        }
        Ok(map)
    }

    /// Resolve an entry's value. Returns `None` for a plain key whose
    /// child block is empty: an empty object value is elided on decode.
    fn parse_entry_value(
        &mut self,
        kind: EntryKind,
        line_depth: usize,
        number: usize,
    ) -> Result<Option<Value>> {
        match kind {
            EntryKind::Plain {
                payload: Some(token),
            } => Ok(Some(scalar::parse_token(&token, number)?)),
            EntryKind::Plain { payload: None } => {
                let child = self.parse_object(line_depth + 1)?;
                if child.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Value::Object(child)))
                }
            }
            EntryKind::Array { header, payload } => {
                Ok(Some(self.parse_array_body(header, payload, line_depth, number)?))
            }
        }
    }

    /// Parse an array body given its header. `header_depth` is the level
    /// of the header line; rows and items sit one level deeper.
    fn parse_array_body(
        &mut self,
        header: ArrayHeader,
        payload: Option<String>,
        header_depth: usize,
        header_line: usize,
    ) -> Result<Value> {
        if let Some(text) = payload {
            if header.fields.is_some() {
                return Err(Error::header(
                    header_line,
                    "tabular header takes rows on following lines, not inline values",
                ));
            }
            let cells = split_cells(&text, header.delimiter);
            if self.options.strict && cells.len() != header.len {
                return Err(Error::CountMismatch {
                    line: header_line,
                    declared: header.len,
                    found: cells.len(),
                });
            }
            let mut items = Vec::with_capacity(cells.len());
            for cell in &cells {
                items.push(scalar::parse_token(cell, header_line)?);
            }
            return Ok(Value::Array(items));
        }

        if let Some(fields) = header.fields.as_deref() {
            return self.parse_tabular_rows(fields, &header, header_depth + 1, header_line);
        }

        if header.len == 0 {
            return Ok(Value::Array(Vec::new()));
        }

        self.parse_expanded_items(&header, header_depth + 1, header_line)
    }

    fn parse_tabular_rows(
        &mut self,
        fields: &[String],
        header: &ArrayHeader,
        row_depth: usize,
        header_line: usize,
    ) -> Result<Value> {
        let mut rows = Vec::new();
        loop {
            let (depth, number) = match self.lines.get(self.pos) {
                Some(l) => (l.depth, l.number),
                None => break,
            };
            if depth < row_depth {
                break;
            }
            if depth > row_depth {
                if self.options.strict {
                    return Err(Error::indent(number, "unexpected indentation inside table"));
                }
                self.pos += 1;
                continue;
            }
            let cells = split_cells(&self.lines[self.pos].text, header.delimiter);
            self.pos += 1;
            if self.options.strict && cells.len() != fields.len() {
                return Err(Error::FieldCountMismatch {
                    line: number,
                    expected: fields.len(),
                    found: cells.len(),
                });
            }
            let mut row = ToonMap::with_capacity(fields.len());
            for (i, field) in fields.iter().enumerate() {
                // Non-strict short rows pad with null, long rows truncate
                let value = match cells.get(i) {
                    Some(cell) => scalar::parse_token(cell, number)?,
                    None => Value::Null,
                };
                row.insert(field.clone(), value);
            }
            rows.push(Value::Object(row));
        }
        if self.options.strict && rows.len() != header.len {
            return Err(Error::CountMismatch {
                line: header_line,
                declared: header.len,
                found: rows.len(),
            });
        }
        Ok(Value::Array(rows))
    }

    /// Parse a `[N]:` body with rows on following lines: either `- `
    /// list items or one bare scalar per line, decided by the first row.
    fn parse_expanded_items(
        &mut self,
        header: &ArrayHeader,
        item_depth: usize,
        header_line: usize,
    ) -> Result<Value> {
        let list_form = match self.lines.get(self.pos) {
            Some(l) if l.depth == item_depth => l.text == "-" || l.text.starts_with("- "),
            _ => false,
        };

        let mut items = Vec::new();
        loop {
            let (depth, number) = match self.lines.get(self.pos) {
                Some(l) => (l.depth, l.number),
                None => break,
            };
            if depth < item_depth {
                break;
            }
            if depth > item_depth {
                if self.options.strict {
                    return Err(Error::indent(
                        number,
                        "unexpected indentation inside array body",
                    ));
                }
                self.pos += 1;
                continue;
            }
            let text = self.lines[self.pos].text.clone();
            if list_form {
                let content = if text == "-" {
                    ""
                } else {
                    match text.strip_prefix("- ") {
                        Some(rest) => rest,
                        None => break,
                    }
                };
                self.pos += 1;
                let item = self.parse_item(content, item_depth, number)?;
                items.push(item);
            } else {
                self.pos += 1;
                items.push(scalar::parse_token(&text, number)?);
            }
        }

        if self.options.strict && items.len() != header.len {
            return Err(Error::CountMismatch {
                line: header_line,
                declared: header.len,
                found: items.len(),
            });
        }
        Ok(Value::Array(items))
    }

    /// Parse one `- ` item: a nested array header, an object whose first
    /// field shares the hyphen line, or a scalar. A bare `-` is an empty
    /// object (the only unquoted form with nothing to say).
    fn parse_item(&mut self, content: &str, item_depth: usize, number: usize) -> Result<Value> {
        if content.is_empty() {
            return Ok(Value::Object(ToonMap::new()));
        }

        if content.starts_with('[') {
            let (header, after) = parse_array_header(content, number)?;
            let after = after
                .strip_prefix(':')
                .ok_or_else(|| Error::header(number, "missing `:` after array header"))?;
            let payload = non_empty(after);
            return self.parse_array_body(header, payload, item_depth, number);
        }

        if let Some(first) = probe_entry(content, number)? {
            let field_depth = item_depth + 1;
            let mut map = ToonMap::new();
            if let Some(value) = self.parse_entry_value(first.kind, field_depth, number)? {
                self.insert_entry(&mut map, first.key, first.quoted, value, number)?;
            }
            loop {
                let (depth, num) = match self.lines.get(self.pos) {
                    Some(l) => (l.depth, l.number),
                    None => break,
                };
                if depth != field_depth {
                    break;
                }
                let text = self.lines[self.pos].text.clone();
                if text == "-" || text.starts_with("- ") {
                    break;
                }
                let sibling = probe_entry(&text, num)?.ok_or_else(|| {
                    Error::unexpected(num, format!("expected `key:` entry, found `{}`", text))
                })?;
                self.pos += 1;
                if let Some(value) = self.parse_entry_value(sibling.kind, field_depth, num)? {
                    self.insert_entry(&mut map, sibling.key, sibling.quoted, value, num)?;
                }
            }
            return Ok(Value::Object(map));
        }

        scalar::parse_token(content, number)
    }

    /// Insert a decoded pair into an object, expanding unquoted dotted
    /// keys when configured and policing duplicates in strict mode.
    fn insert_entry(
        &self,
        map: &mut ToonMap,
        key: String,
        quoted: bool,
        value: Value,
        number: usize,
    ) -> Result<()> {
        if self.options.expand_paths == PathExpansion::Safe
            && !quoted
            && key.contains('.')
            && key.split('.').all(scalar::is_identifier)
        {
            let segments: Vec<&str> = key.split('.').collect();
            return self.insert_path(map, &key, &segments, value, number);
        }
        if map.insert(key.clone(), value).is_some() && self.options.strict {
            return Err(Error::DuplicateKey { line: number, key });
        }
        Ok(())
    }

    fn insert_path(
        &self,
        map: &mut ToonMap,
        full_path: &str,
        segments: &[&str],
        value: Value,
        number: usize,
    ) -> Result<()> {
        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Ok(()),
        };
        let conflict = || Error::PathConflict {
            line: number,
            path: full_path.to_string(),
        };

        let mut cur = map;
        for seg in parents {
            if !cur.contains_key(seg) {
                cur.insert((*seg).to_string(), Value::Object(ToonMap::new()));
            }
            cur = match cur.get_mut(seg) {
                Some(Value::Object(child)) => child,
                _ => return Err(conflict()),
            };
        }

        if !cur.contains_key(last) {
            cur.insert((*last).to_string(), value);
            return Ok(());
        }

        let existing_is_object = matches!(cur.get(last), Some(Value::Object(_)));
        match (existing_is_object, value) {
            // Two paths sharing this full prefix merge their objects
            (true, Value::Object(src)) => {
                if let Some(Value::Object(dst)) = cur.get_mut(last) {
                    for (k, v) in src {
                        let replaced = dst.insert(k.clone(), v).is_some();
                        if replaced && self.options.strict {
                            return Err(Error::DuplicateKey { line: number, key: k });
                        }
                    }
                }
                Ok(())
            }
            // The same full path written twice is a duplicate, not a
            // conflict
            (false, value) if !value.is_object() => {
                if self.options.strict {
                    return Err(Error::DuplicateKey {
                        line: number,
                        key: full_path.to_string(),
                    });
                }
                cur.insert((*last).to_string(), value);
                Ok(())
            }
            _ => Err(conflict()),
        }
    }

    fn expect_consumed(&self) -> Result<()> {
        match self.lines.get(self.pos) {
            Some(l) => Err(Error::unexpected(
                l.number,
                format!("unexpected content after document root: `{}`", l.text),
            )),
            None => Ok(()),
        }
    }
}

/// Split the input into structural lines, dropping blanks and `#`
/// comments, and convert leading spaces into depths. The indent unit is
/// the width of the first indented line.
fn scan_lines(input: &str, options: &DecodeOptions) -> Result<Vec<Line>> {
    let mut raw: Vec<(usize, String, usize)> = Vec::new();
    for (idx, line) in input.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let number = idx + 1;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let mut cols = 0;
        for ch in line.chars() {
            match ch {
                ' ' => cols += 1,
                '\t' => {
                    return Err(Error::indent(number, "tabs are not allowed in indentation"))
                }
                _ => break,
            }
        }
        raw.push((cols, text.to_string(), number));
    }

    let unit = raw
        .iter()
        .map(|(cols, _, _)| *cols)
        .find(|cols| *cols > 0)
        .unwrap_or(2);

    let mut lines = Vec::with_capacity(raw.len());
    for (cols, text, number) in raw {
        if options.strict && cols % unit != 0 {
            return Err(Error::indent(
                number,
                format!("{} spaces is not a multiple of the indent unit ({})", cols, unit),
            ));
        }
        lines.push(Line {
            text,
            depth: cols / unit,
            number,
        });
    }
    Ok(lines)
}

/// Try to read a `key ...:` shape from a line. Returns `None` when the
/// line is not an entry (a bare scalar); malformed array headers and
/// unterminated quoted keys are hard errors.
fn probe_entry(text: &str, number: usize) -> Result<Option<Entry>> {
    let (key, quoted, rest) = if let Some(body) = text.strip_prefix('"') {
        match scalar::find_closing_quote(body, 0) {
            Some(close) => {
                let rest = &body[close + 1..];
                if !(rest.starts_with(':') || rest.starts_with('[')) {
                    // A quoted scalar, not a key
                    return Ok(None);
                }
                (scalar::unescape(&body[..close], number)?, true, rest)
            }
            // Let the scalar path report the unterminated string
            None => return Ok(None),
        }
    } else {
        let cut = match text.find(|c: char| c == ':' || c == '[') {
            Some(i) if i > 0 => i,
            _ => return Ok(None),
        };
        let key = text[..cut].trim_end();
        if key.is_empty() {
            return Ok(None);
        }
        (key.to_string(), false, &text[cut..])
    };

    if rest.starts_with('[') {
        let (header, after) = parse_array_header(rest, number)?;
        let after = after
            .strip_prefix(':')
            .ok_or_else(|| Error::header(number, "missing `:` after array header"))?;
        return Ok(Some(Entry {
            key,
            quoted,
            kind: EntryKind::Array {
                header,
                payload: non_empty(after),
            },
        }));
    }

    // rest starts with ':'
    Ok(Some(Entry {
        key,
        quoted,
        kind: EntryKind::Plain {
            payload: non_empty(&rest[1..]),
        },
    }))
}

/// Parse `[N]`, `[N\t]`, `[N|]`, optionally followed by `{f1,f2,...}`.
/// Returns the header and the remainder of the line (expected to start
/// with `:`).
fn parse_array_header(s: &str, number: usize) -> Result<(ArrayHeader, &str)> {
    let close = s
        .find(']')
        .ok_or_else(|| Error::header(number, "missing `]` in array header"))?;
    let inner = &s[1..close];
    let (len_text, delimiter) = if let Some(stripped) = inner.strip_suffix('\t') {
        (stripped, Delimiter::Tab)
    } else if let Some(stripped) = inner.strip_suffix('|') {
        (stripped, Delimiter::Pipe)
    } else {
        (inner, Delimiter::Comma)
    };
    let len: usize = len_text.trim().parse().map_err(|_| {
        Error::header(number, format!("invalid array length `{}`", len_text))
    })?;

    let mut rest = &s[close + 1..];
    let mut fields = None;
    if let Some(body) = rest.strip_prefix('{') {
        let close_brace = body
            .find('}')
            .ok_or_else(|| Error::header(number, "missing `}` in field list"))?;
        let names: Vec<String> = split_cells(&body[..close_brace], delimiter);
        if names.is_empty() || names.iter().any(|name| name.is_empty()) {
            return Err(Error::header(number, "empty field name in header"));
        }
        fields = Some(names);
        rest = &body[close_brace + 1..];
    }

    Ok((
        ArrayHeader {
            len,
            delimiter,
            fields,
        },
        rest,
    ))
}

/// Split a row or inline payload on the delimiter, honoring quoted spans
/// and escape sequences. Unquoted cells are trimmed.
fn split_cells(s: &str, delimiter: Delimiter) -> Vec<String> {
    let delim = delimiter.as_char();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == '\\' && in_quotes {
            current.push(ch);
            if let Some(next) = chars.next() {
                current.push(next);
            }
        } else if ch == delim && !in_quotes {
            cells.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(ch);
        }
    }
    cells.push(current.trim().to_string());
    cells
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    #[test]
    fn test_empty_document() {
        assert_eq!(decode("").unwrap(), toon!({}));
        assert_eq!(decode("\n  \n").unwrap(), toon!({}));
    }

    #[test]
    fn test_simple_object() {
        let value = decode("id: 123\nname: Ada").unwrap();
        assert_eq!(value, toon!({"id": 123, "name": "Ada"}));
    }

    #[test]
    fn test_nested_object() {
        let value = decode("user:\n  id: 1\n  name: Bob").unwrap();
        assert_eq!(value, toon!({"user": {"id": 1, "name": "Bob"}}));
    }

    #[test]
    fn test_primitive_coercion() {
        let value = decode(
            "str_val: hello\nint_val: 42\nfloat_val: 3.14\nexp: 1e10\nbool_true: true\nbool_false: false\nnull_val: null",
        )
        .unwrap();
        assert_eq!(
            value,
            toon!({
                "str_val": "hello",
                "int_val": 42,
                "float_val": 3.14,
                "exp": 1e10,
                "bool_true": true,
                "bool_false": false,
                "null_val": null
            })
        );
    }

    #[test]
    fn test_inline_array() {
        let value = decode("tags[3]: admin,ops,dev").unwrap();
        assert_eq!(value, toon!({"tags": ["admin", "ops", "dev"]}));
    }

    #[test]
    fn test_empty_array() {
        let value = decode("items[0]:").unwrap();
        assert_eq!(value, toon!({"items": []}));
    }

    #[test]
    fn test_tabular_array() {
        let value = decode("users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user").unwrap();
        assert_eq!(
            value,
            toon!({
                "users": [
                    {"id": 1, "name": "Alice", "role": "admin"},
                    {"id": 2, "name": "Bob", "role": "user"}
                ]
            })
        );
    }

    #[test]
    fn test_mixed_array() {
        let value = decode("data[3]:\n  - 1\n  - a: test\n  - text").unwrap();
        assert_eq!(value, toon!({"data": [1, {"a": "test"}, "text"]}));
    }

    #[test]
    fn test_scalar_rows_without_markers() {
        let value = decode("data[2]:\n  alpha\n  beta").unwrap();
        assert_eq!(value, toon!({"data": ["alpha", "beta"]}));
    }

    #[test]
    fn test_quoted_values() {
        let value = decode("url: \"http://example.com:8080\"").unwrap();
        assert_eq!(value, toon!({"url": "http://example.com:8080"}));

        let value = decode(r#"text: "line1\nline2\ttab""#).unwrap();
        assert_eq!(value, toon!({"text": "line1\nline2\ttab"}));

        let value = decode(r#"val: "He said \"hello\"""#).unwrap();
        assert_eq!(value, toon!({"val": "He said \"hello\""}));
    }

    #[test]
    fn test_quoted_keys() {
        let value = decode("\"a.b.c\": 1").unwrap();
        assert_eq!(value, toon!({"a.b.c": 1}));

        let value = decode("\"weird key\": yes").unwrap();
        assert_eq!(value, toon!({"weird key": "yes"}));
    }

    #[test]
    fn test_tab_delimiter() {
        let value = decode("items[2\t]{id\tname}:\n  1\tAlice\n  2\tBob").unwrap();
        assert_eq!(
            value,
            toon!({"items": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]})
        );
    }

    #[test]
    fn test_pipe_delimiter() {
        let value = decode("items[2|]{id|name}:\n  1|Alice\n  2|Bob").unwrap();
        assert_eq!(
            value,
            toon!({"items": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]})
        );

        let value = decode("tags[3|]: a|b|c").unwrap();
        assert_eq!(value, toon!({"tags": ["a", "b", "c"]}));
    }

    #[test]
    fn test_root_array() {
        let value = decode("[2]{id,name}:\n  1,Alice\n  2,Bob").unwrap();
        assert_eq!(
            value,
            toon!([{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}])
        );

        let value = decode("[3]: 1,2,3").unwrap();
        assert_eq!(value, toon!([1, 2, 3]));

        let value = decode("[2]:\n  - 1\n  - name: x").unwrap();
        assert_eq!(value, toon!([1, {"name": "x"}]));
    }

    #[test]
    fn test_root_scalar() {
        assert_eq!(decode("hello").unwrap(), toon!("hello"));
        assert_eq!(decode("42").unwrap(), toon!(42));
        assert_eq!(decode("\"quoted\"").unwrap(), toon!("quoted"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let value = decode("# header comment\na: 1\n\n# between\nb: 2\n").unwrap();
        assert_eq!(value, toon!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_empty_object_value_elided() {
        let value = decode("empty_array[0]:\ndata:\nkept: 1").unwrap();
        assert_eq!(value, toon!({"empty_array": [], "kept": 1}));
    }

    #[test]
    fn test_strict_count_mismatch() {
        let err = decode("items[3]: a,b").unwrap_err();
        assert!(matches!(
            err,
            Error::CountMismatch {
                declared: 3,
                found: 2,
                ..
            }
        ));

        let err = decode("items[1]:\n  - a\n  - b").unwrap_err();
        assert!(matches!(err, Error::CountMismatch { declared: 1, found: 2, .. }));

        let err = decode("users[2]{id}:\n  1").unwrap_err();
        assert!(matches!(err, Error::CountMismatch { declared: 2, found: 1, .. }));
    }

    #[test]
    fn test_non_strict_count_advisory() {
        let options = DecodeOptions::new().with_strict(false);
        let value = decode_with_options("items[3]: a,b", &options).unwrap();
        assert_eq!(value, toon!({"items": ["a", "b"]}));
    }

    #[test]
    fn test_strict_row_width_mismatch() {
        let err = decode("users[1]{id,name}:\n  1,Alice,admin").unwrap_err();
        assert!(matches!(
            err,
            Error::FieldCountMismatch {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_non_strict_rows_pad_and_truncate() {
        let options = DecodeOptions::new().with_strict(false);
        let value =
            decode_with_options("users[2]{id,name}:\n  1\n  2,Bob,extra", &options).unwrap();
        assert_eq!(
            value,
            toon!({"users": [{"id": 1, "name": null}, {"id": 2, "name": "Bob"}]})
        );
    }

    #[test]
    fn test_strict_duplicate_key() {
        let err = decode("a: 1\na: 2").unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { line: 2, .. }));

        let options = DecodeOptions::new().with_strict(false);
        let value = decode_with_options("a: 1\na: 2", &options).unwrap();
        assert_eq!(value, toon!({"a": 2}));
    }

    #[test]
    fn test_indent_errors() {
        let err = decode("user:\n\tid: 1").unwrap_err();
        assert!(matches!(err, Error::Indent { line: 2, .. }));

        // 3 does not divide into the unit established by the first indent
        let err = decode("user:\n  id: 1\n   name: x").unwrap_err();
        assert!(matches!(err, Error::Indent { line: 3, .. }));

        // Depth jumps by two levels
        let err = decode("a: 1\nb:\n    c: 1\n  d: 2").unwrap_err();
        assert!(matches!(err, Error::Indent { .. }));
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(
            decode("items[x]: a").unwrap_err(),
            Error::Header { .. }
        ));
        assert!(matches!(
            decode("items[2: a,b").unwrap_err(),
            Error::Header { .. }
        ));
        assert!(matches!(
            decode("items[2]{id\n  1").unwrap_err(),
            Error::Header { .. }
        ));
        assert!(matches!(
            decode("items[2]{id,name}: 1,Alice").unwrap_err(),
            Error::Header { .. }
        ));
    }

    #[test]
    fn test_string_errors() {
        assert!(matches!(
            decode("a: \"open").unwrap_err(),
            Error::UnterminatedString { line: 1 }
        ));
        assert!(matches!(
            decode("a: \"bad \\q\"").unwrap_err(),
            Error::InvalidEscape { line: 1, .. }
        ));
    }

    #[test]
    fn test_path_expansion() {
        let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
        let value = decode_with_options("a.b.c: 1", &options).unwrap();
        assert_eq!(value, toon!({"a": {"b": {"c": 1}}}));

        // Off by default
        let value = decode("a.b.c: 1").unwrap();
        assert_eq!(value, toon!({"a.b.c": 1}));
    }

    #[test]
    fn test_path_expansion_merges_prefixes() {
        let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
        let value = decode_with_options("a.b: 1\na.c: 2", &options).unwrap();
        assert_eq!(value, toon!({"a": {"b": 1, "c": 2}}));
    }

    #[test]
    fn test_path_expansion_conflict() {
        let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
        let err = decode_with_options("a.b: 1\na.b.c: 2", &options).unwrap_err();
        assert!(matches!(err, Error::PathConflict { line: 2, .. }));
    }

    #[test]
    fn test_path_expansion_skips_quoted_keys() {
        let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
        let value = decode_with_options("\"a.b\": 1", &options).unwrap();
        assert_eq!(value, toon!({"a.b": 1}));
    }

    #[test]
    fn test_single_space_unit_is_consistent() {
        // The first indented line fixes the unit; one space is a valid unit
        let value = decode("user:\n id: 1\n name: Bob").unwrap();
        assert_eq!(value, toon!({"user": {"id": 1, "name": "Bob"}}));
    }

    #[test]
    fn test_quoted_cells_keep_delimiter() {
        let value = decode("tags[2]: \"a,b\",c").unwrap();
        assert_eq!(value, toon!({"tags": ["a,b", "c"]}));
    }

    #[test]
    fn test_list_item_with_nested_fields() {
        let value = decode("data[2]:\n  - name: Alice\n    tags[2]: x,y\n  - 7").unwrap();
        assert_eq!(
            value,
            toon!({"data": [{"name": "Alice", "tags": ["x", "y"]}, 7]})
        );
    }

    #[test]
    fn test_nested_array_items() {
        let value = decode("matrix[2]:\n  - [2]: 1,2\n  - [2]: 3,4").unwrap();
        assert_eq!(value, toon!({"matrix": [[1, 2], [3, 4]]}));
    }

    #[test]
    fn test_bare_scalar_with_colon_is_not_key() {
        let value = decode("note: \"a: b\"").unwrap();
        assert_eq!(value, toon!({"note": "a: b"}));
    }

    #[test]
    fn test_trailing_content_after_root_array() {
        let err = decode("[1]: a\nstray: 1").unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { line: 2, .. }));
    }
}
