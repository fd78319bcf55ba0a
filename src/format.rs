//! The TOON text format as implemented by this crate.
//!
//! TOON (Token-Oriented Object Notation) carries the JSON data model in an
//! indentation-structured text form. This page documents the concrete
//! rules the codec follows; it contains no code.
//!
//! # Objects
//!
//! Objects are newline-delimited `key: value` pairs. Nesting is expressed
//! by indentation (2 spaces per level by default; any consistent width
//! works, and the decoder infers it from the first indented line):
//!
//! ```text
//! name: Alice
//! meta:
//!   created: yesterday
//!   verified: true
//! ```
//!
//! Keys print unquoted when they match `[A-Za-z_][A-Za-z0-9_]*`; anything
//! else, including keys containing dots, is double-quoted. Unquoted dotted
//! keys are reserved for folded paths (see below).
//!
//! # Scalars
//!
//! | Type    | Syntax                                   |
//! |---------|------------------------------------------|
//! | Null    | `null`                                   |
//! | Boolean | `true` / `false`                         |
//! | Integer | base-10 digits, optional `-`             |
//! | Float   | base-10 decimal, never scientific on output |
//! | String  | unquoted when safe, else `"quoted"`      |
//!
//! A float that is mathematically an integer prints in integer form
//! (`5.0` becomes `5`); NaN and the infinities have no representation and
//! print as `null`. On input, a token is an integer if it matches
//! `-?[0-9]+` and a float if it additionally has a decimal point or an
//! exponent (`3.14`, `1e10`).
//!
//! # String quoting
//!
//! Strings are unquoted by default. A string is quoted when it:
//!
//! - is empty, or has leading/trailing whitespace
//! - reads as `true`, `false`, `null`, or as a number
//! - starts with `-` (list-marker and sign ambiguity)
//! - contains the **active delimiter**, `"` `\` `:` `[` `]` `{` `}` `#`,
//!   or a control character
//!
//! Only the active delimiter forces quoting: with the default comma,
//! `a|b` stays bare; with the pipe delimiter, `a,b` does. Escapes inside
//! quotes are `\"` `\\` `\n` `\t` `\r` and `\uXXXX`; any other `\x` is
//! rejected. Unicode above U+007F passes through literally.
//!
//! # Arrays
//!
//! Every array header declares the element count. Three shapes exist:
//!
//! **Inline**, for arrays whose elements are all scalars:
//!
//! ```text
//! tags[3]: admin,ops,dev
//! ```
//!
//! **Tabular**, when all elements are objects with the same ordered field
//! sequence and scalar-only values:
//!
//! ```text
//! users[2]{id,name,role}:
//!   1,Alice,admin
//!   2,Bob,user
//! ```
//!
//! **Expanded list** for anything else, one `- ` item per line:
//!
//! ```text
//! data[3]:
//!   - 1
//!   - a: test
//!   - text
//! ```
//!
//! An object item puts its first field on the hyphen line; its remaining
//! fields, and any nested content, continue two levels below the array
//! header. An empty array is `key[0]:`; an empty object item is a bare
//! `-`.
//!
//! # Delimiters
//!
//! | Delimiter       | Header     | Row          |
//! |-----------------|------------|--------------|
//! | Comma (default) | `[3]`      | `a,b,c`      |
//! | Tab             | `[3\t]`    | `a\tb\tc`    |
//! | Pipe            | `[3\|]`    | `a\|b\|c`    |
//!
//! The delimiter annotation inside the brackets makes each document
//! self-describing; the decoder takes it from there, not from
//! configuration.
//!
//! # Root forms
//!
//! A document is an object (key lines at column 0), an array (header at
//! column 0, e.g. `[2]{id,name}:`), or a single bare scalar line. An
//! empty document decodes to an empty object.
//!
//! # Comments and blank lines
//!
//! Blank lines, and lines whose first non-space character is `#`, are
//! skipped before structural parsing. They never cause errors; the
//! encoder never emits them.
//!
//! # Key folding and path expansion
//!
//! With [`KeyFolding::Safe`](crate::KeyFolding), the encoder collapses a
//! chain of single-key objects ending in a scalar into one dotted line:
//!
//! ```text
//! a.b.c: 1
//! ```
//!
//! Folding only happens when every segment is a plain identifier and the
//! folded key would not collide with a sibling. With
//! [`PathExpansion::Safe`](crate::PathExpansion), the decoder reverses
//! it: unquoted dotted keys split into nested objects, shared prefixes
//! merge, and using a prefix as both scalar and object is a
//! [`PathConflict`](crate::Error::PathConflict) error.
//!
//! # Strict mode
//!
//! Strict decoding (the default) rejects:
//!
//! - element or row counts that differ from the declared length
//! - tabular rows whose cell count differs from the header arity
//! - duplicate keys within one object
//! - tabs in indentation, widths that are not a multiple of the indent
//!   unit, and depth jumps of more than one level
//!
//! Non-strict decoding downgrades these: actual counts win, short rows
//! pad with `null` and long rows truncate, and the last duplicate key
//! wins.
//!
//! # Known lossy spots
//!
//! Round trips are exact except for two documented cases: an object field
//! whose value is an *empty object* disappears on decode (the format has
//! no inline empty-object literal), and non-finite floats become `null`
//! on encode.

// Documentation only.
