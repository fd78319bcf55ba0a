//! Error types for TOON encoding and decoding.
//!
//! Decoding surfaces a single [`Error`] enum with one variant per failure
//! kind. Every parse variant carries the 1-based source line number so
//! callers can point at the offending input. Encoding a well-formed value
//! tree never fails; errors on the encode side only come from the serde
//! bridge (unsupported types, non-string map keys) or from I/O.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{decode, Error};
//!
//! let err = decode("items[3]: a,b").unwrap_err();
//! assert!(matches!(err, Error::CountMismatch { declared: 3, found: 2, .. }));
//! assert_eq!(err.line(), Some(1));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors that can occur while decoding TOON text or bridging values
/// through serde.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Indentation uses tabs, is not a whole multiple of the indent unit,
    /// or jumps deeper by more than one level.
    #[error("indentation error at line {line}: {msg}")]
    Indent { line: usize, msg: String },

    /// Malformed array header: bad `[N]`, bad `{fields}`, or a missing `:`.
    #[error("malformed header at line {line}: {msg}")]
    Header { line: usize, msg: String },

    /// Declared array length does not match the element count (strict mode).
    #[error("array length mismatch at line {line}: declared {declared}, found {found}")]
    CountMismatch {
        line: usize,
        declared: usize,
        found: usize,
    },

    /// Tabular row cell count does not match the header arity (strict mode).
    #[error("row width mismatch at line {line}: header has {expected} fields, row has {found}")]
    FieldCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A quoted string never closes.
    #[error("unterminated string at line {line}")]
    UnterminatedString { line: usize },

    /// Unknown escape sequence inside a quoted string.
    #[error("invalid escape sequence `\\{sequence}` at line {line}")]
    InvalidEscape { line: usize, sequence: String },

    /// The same key appears twice in one object (strict mode).
    #[error("duplicate key `{key}` at line {line}")]
    DuplicateKey { line: usize, key: String },

    /// Path expansion would reuse a prefix for incompatible value types.
    #[error("path `{path}` conflicts with an existing value at line {line}")]
    PathConflict { line: usize, path: String },

    /// Any other grammar violation.
    #[error("unexpected token at line {line}: {msg}")]
    UnexpectedToken { line: usize, msg: String },

    /// Failure while reading from or writing to an I/O stream.
    #[error("IO error: {0}")]
    Io(String),

    /// Error raised by a `Serialize`/`Deserialize` implementation.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// The 1-based input line the error points at, when the error came from
    /// the decoder.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Indent { line, .. }
            | Error::Header { line, .. }
            | Error::CountMismatch { line, .. }
            | Error::FieldCountMismatch { line, .. }
            | Error::UnterminatedString { line }
            | Error::InvalidEscape { line, .. }
            | Error::DuplicateKey { line, .. }
            | Error::PathConflict { line, .. }
            | Error::UnexpectedToken { line, .. } => Some(*line),
            Error::Io(_) | Error::Message(_) => None,
        }
    }

    pub(crate) fn indent(line: usize, msg: impl Into<String>) -> Self {
        Error::Indent {
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn header(line: usize, msg: impl Into<String>) -> Self {
        Error::Header {
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn unexpected(line: usize, msg: impl Into<String>) -> Self {
        Error::UnexpectedToken {
            line,
            msg: msg.into(),
        }
    }

    /// Creates a free-form error with a display message.
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    pub(crate) fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
