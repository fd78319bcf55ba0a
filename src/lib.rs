//! # toon_codec
//!
//! Encoder and decoder for **TOON (Token-Oriented Object Notation)**, a
//! compact, indentation-structured interchange format. TOON keeps the data
//! model of JSON but drops most of its punctuation: objects nest by
//! indentation, uniform object arrays collapse into tables, and strings
//! are only quoted when leaving them bare would change their meaning.
//! The result is 30-60% fewer tokens than the equivalent JSON, which is
//! why the format shows up around LLM pipelines.
//!
//! ## Quick Start
//!
//! ```rust
//! use toon_codec::{decode, encode, toon};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "scores": [95, 87, 92]
//! });
//!
//! let text = encode(&value);
//! assert_eq!(text, "name: Alice\nscores[3]: 95,87,92");
//!
//! // Round trip
//! assert_eq!(decode(&text).unwrap(), value);
//! ```
//!
//! ## Tabular Arrays
//!
//! Arrays of objects with identical field sequences serialize as compact
//! tables, the format's signature feature:
//!
//! ```rust
//! use toon_codec::{encode, toon};
//!
//! let users = toon!({
//!     "users": [
//!         {"id": 1, "name": "Alice", "role": "admin"},
//!         {"id": 2, "name": "Bob", "role": "user"}
//!     ]
//! });
//! assert_eq!(
//!     encode(&users),
//!     "users[2]{id,name,role}:\n  1,Alice,admin\n  2,Bob,user"
//! );
//! ```
//!
//! ## Working with Rust Types
//!
//! Any `Serialize`/`Deserialize` type goes through the same codec via
//! [`to_string`] and [`from_str`]:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Alice\nactive: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ## Modules
//!
//! - [`encode`](mod@encode): value tree to TOON text
//! - [`decode`](mod@decode): TOON text to value tree
//! - [`value`]: the dynamic [`Value`] model
//! - [`options`]: [`EncodeOptions`] and [`DecodeOptions`]
//! - [`error`]: the [`Error`] taxonomy with line numbers
//! - [`format`]: notes on the text format itself

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
mod scalar;
pub mod ser;
pub mod value;

pub use de::from_value;
pub use decode::{decode, decode_with_options};
pub use encode::{encode, encode_with_options};
pub use error::{Error, Result};
pub use map::ToonMap;
pub use options::{DecodeOptions, Delimiter, EncodeOptions, KeyFolding, PathExpansion};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::{de::DeserializeOwned, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a TOON string with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let toon = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(toon, "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. a map with
/// non-string keys).
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a TOON string with explicit options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(encode_with_options(&value, options))
}

/// Convert any `T: Serialize` into a dynamic [`Value`].
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize a value as TOON text into a writer.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer does.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serialize a value as TOON text into a writer with explicit options.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer does.
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Deserialize a `T` from TOON text with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a parse error (with line number) for malformed TOON, or a
/// message error when the decoded shape does not match `T`.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserialize a `T` from TOON text with explicit options.
///
/// # Errors
///
/// Returns a parse error for malformed TOON, or a message error when the
/// decoded shape does not match `T`.
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode_with_options(s, options)?)
}

/// Deserialize a `T` from an I/O stream of TOON text.
///
/// # Errors
///
/// Returns an error if reading fails or the text does not parse.
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&text)
}

/// Deserialize a `T` from TOON bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not UTF-8 or do not parse.
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::message(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_typed_round_trip() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        let back: User = from_str(&text).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn test_value_round_trip() {
        let value = toon!({
            "id": 1,
            "meta": {"version": "1.0"},
            "tags": ["a", "b"]
        });
        let text = encode(&value);
        assert_eq!(decode(&text).unwrap(), value);
    }

    #[test]
    fn test_writer_and_reader() {
        let user = User {
            id: 1,
            name: "Ada".to_string(),
            active: false,
            tags: vec![],
        };

        let mut buffer = Vec::new();
        to_writer(&mut buffer, &user).unwrap();
        let back: User = from_reader(std::io::Cursor::new(&buffer)).unwrap();
        assert_eq!(user, back);

        let back: User = from_slice(&buffer).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn test_display_matches_encode() {
        let value = toon!({"a": 1});
        assert_eq!(value.to_string(), encode(&value));
    }
}
