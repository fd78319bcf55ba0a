//! Configuration options for TOON encoding and decoding.
//!
//! This module provides the two configuration records used by the codec:
//!
//! - [`EncodeOptions`]: controls indentation, delimiter, and key folding
//! - [`DecodeOptions`]: controls strict validation and path expansion
//!
//! The delimiter is an *encoder* choice only: encoded documents carry the
//! delimiter inline inside each array header (`[3\t]`, `[3|]`), so the
//! decoder never needs to be told which one was used.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{encode_with_options, toon, Delimiter, EncodeOptions, KeyFolding};
//!
//! let value = toon!({"a": {"b": {"c": 1}}});
//!
//! let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
//! let text = encode_with_options(&value, &options);
//! assert_eq!(text, "a.b.c: 1");
//! ```

/// Delimiter used between inline array elements, tabular header fields,
/// and tabular row cells.
///
/// Comma is the default and is implicit in array headers. Tab and pipe are
/// announced by a single literal character after the declared length:
/// `[3\t]` and `[3|]` respectively.
///
/// # Examples
///
/// ```rust
/// use toon_codec::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the separator as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// The annotation written after the length in array headers.
    /// Empty for the default comma delimiter.
    pub(crate) const fn header_annotation(&self) -> &'static str {
        match self {
            Delimiter::Comma => "",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Whether the encoder collapses chains of single-key objects into dotted
/// paths (`a:\n  b:\n    c: 1` becomes `a.b.c: 1`).
///
/// `Safe` folds only when every path segment is a plain identifier, the
/// chain ends in a scalar, and the folded key cannot collide with a sibling
/// key, so the transformation is reversible with [`PathExpansion::Safe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyFolding {
    #[default]
    Off,
    Safe,
}

/// Whether the decoder expands unquoted dotted keys back into nested
/// objects (`a.b.c: 1` becomes `{"a": {"b": {"c": 1}}}`).
///
/// Quoted keys are always taken literally, regardless of this setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathExpansion {
    #[default]
    Off,
    Safe,
}

/// Configuration for [`encode_with_options`](crate::encode_with_options).
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Delimiter, EncodeOptions, KeyFolding};
///
/// // Defaults: 2-space indent, comma delimiter, no key folding
/// let options = EncodeOptions::new();
/// assert_eq!(options.indent, 2);
///
/// // Custom configuration
/// let options = EncodeOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Tab)
///     .with_key_folding(KeyFolding::Safe);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Spaces per indentation level. Must be at least 1.
    pub indent: usize,
    /// Delimiter for inline arrays and tabular headers/rows.
    pub delimiter: Delimiter,
    /// Single-key object chain folding.
    pub key_folding: KeyFolding,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            key_folding: KeyFolding::default(),
        }
    }
}

impl EncodeOptions {
    /// Creates the default options (2-space indent, comma delimiter,
    /// folding off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (spaces per nesting level).
    ///
    /// Values below 1 are clamped to 1: indentation is the only structural
    /// nesting marker, so it can never be empty.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Sets the delimiter for arrays and tables.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the key folding mode.
    #[must_use]
    pub fn with_key_folding(mut self, key_folding: KeyFolding) -> Self {
        self.key_folding = key_folding;
        self
    }
}

/// Configuration for [`decode_with_options`](crate::decode_with_options).
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode_with_options, DecodeOptions};
///
/// // Non-strict: the declared length becomes advisory
/// let options = DecodeOptions::new().with_strict(false);
/// let value = decode_with_options("items[3]: a,b", &options).unwrap();
/// assert_eq!(value.get("items").unwrap().as_array().unwrap().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Enforce declared array lengths, tabular row arity, unique keys, and
    /// regular indentation. Defaults to `true`.
    pub strict: bool,
    /// Dotted-key expansion mode.
    pub expand_paths: PathExpansion,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict: true,
            expand_paths: PathExpansion::default(),
        }
    }
}

impl DecodeOptions {
    /// Creates the default options (strict, no path expansion).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the path expansion mode.
    #[must_use]
    pub fn with_expand_paths(mut self, expand_paths: PathExpansion) -> Self {
        self.expand_paths = expand_paths;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let enc = EncodeOptions::default();
        assert_eq!(enc.indent, 2);
        assert_eq!(enc.delimiter, Delimiter::Comma);
        assert_eq!(enc.key_folding, KeyFolding::Off);

        let dec = DecodeOptions::default();
        assert!(dec.strict);
        assert_eq!(dec.expand_paths, PathExpansion::Off);
    }

    #[test]
    fn test_indent_clamped() {
        let enc = EncodeOptions::new().with_indent(0);
        assert_eq!(enc.indent, 1);
    }

    #[test]
    fn test_header_annotation() {
        assert_eq!(Delimiter::Comma.header_annotation(), "");
        assert_eq!(Delimiter::Tab.header_annotation(), "\t");
        assert_eq!(Delimiter::Pipe.header_annotation(), "|");
    }
}
