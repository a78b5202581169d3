//! JSON Format Notes
//!
//! This module documents the JSON dialect accepted and produced by this
//! library, including the raw-number preservation mode that motivates it.
//!
//! # Overview
//!
//! The library implements JSON as specified by RFC 8259, with one addition:
//! an opt-in parse mode that carries every number literal through the tree as
//! its exact source text, so that values exceeding `i64`/`f64` precision
//! survive a parse/serialize cycle byte for byte.
//!
//! ## Design Philosophy
//!
//! - **Fidelity**: in raw mode, the bytes you parsed are the bytes you write
//! - **Strictness**: inputs outside the RFC 8259 grammar are rejected with a
//!   byte offset, not repaired
//! - **Predictability**: member order is insertion order, duplicate keys keep
//!   the last occurrence, output is deterministic
//!
//! # Accepted Grammar
//!
//! A document is a single value. Whitespace (space, tab, line feed, carriage
//! return) is permitted around structural tokens; any other text after the
//! value is an error unless trailing data is explicitly allowed.
//!
//! ## Primitives
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null` | `{"value": null}` |
//! | Boolean | `true` or `false` | `{"active": true}` |
//! | Number | RFC 8259 number grammar | `42`, `-0`, `1.5e-3` |
//! | String | Double-quoted, escapes below | `"hello"` |
//!
//! Number literals never allow a leading `+`, a leading zero before another
//! digit (`012`), a bare fractional point (`.5`, `1.`), or non-finite names
//! (`NaN`, `Infinity`). `-0` is accepted.
//!
//! ## Strings
//!
//! Strings are always double-quoted. Unescaped control characters
//! (U+0000..U+001F) are rejected.
//!
//! **Escape sequences**:
//! ```text
//! \"  - quote
//! \\  - backslash
//! \/  - solidus
//! \n  - newline
//! \r  - carriage return
//! \t  - tab
//! \b  - backspace
//! \f  - form feed
//! \uXXXX - Unicode code point (4 hex digits)
//! ```
//!
//! A `\uXXXX` escape in the high-surrogate range must be followed by a
//! low-surrogate escape; the pair decodes to one astral code point. A lone
//! surrogate is an invalid escape.
//!
//! ## Containers
//!
//! Arrays and objects follow RFC 8259. Trailing commas are rejected unless
//! [`ParseOptions::with_trailing_commas`](crate::ParseOptions::with_trailing_commas)
//! is set. Nesting beyond the configured depth limit (default
//! [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH)) is rejected rather than
//! risking stack exhaustion.
//!
//! # Number Conversion
//!
//! With raw preservation **off** (the default), each number literal converts
//! at parse time:
//!
//! | Literal form | Result | Notes |
//! |--------------|--------|-------|
//! | Integer, fits `i64` | `Number::Integer` | `42`, `-7` |
//! | Integer, overflows `i64` | `Number::Float` | nearest `f64` approximation |
//! | Fraction or exponent | `Number::Float` | `1.5`, `2e10` |
//! | Magnitude beyond `f64` | `Number::Float` | saturates to `±inf` |
//!
//! With raw preservation **on**, every number literal becomes
//! [`Value::RawNumber`](crate::Value::RawNumber) holding the exact source
//! span. Raw text re-emits verbatim on write; a stored raw string that does
//! not match the number grammar is reported as a corrupt tree instead of
//! producing invalid output.
//!
//! **Example**:
//! ```rust
//! use serde_rawjson::{parse_with_options, write, ParseOptions};
//!
//! let opts = ParseOptions::new().with_raw_numbers(true);
//! let doc = parse_with_options(r#"{"big": 123456789012345678901234567890}"#, &opts).unwrap();
//! assert_eq!(write(&doc).unwrap(), r#"{"big":123456789012345678901234567890}"#);
//! ```
//!
//! # Output
//!
//! Compact output contains no whitespace. Pretty output indents nested values
//! (two spaces per level unless configured otherwise), puts one member or
//! element per line, and a space after each `:`. Empty containers stay as
//! `[]` and `{}` in both modes.
//!
//! | Input value | Output | Notes |
//! |-------------|--------|-------|
//! | `Number::Integer` | decimal digits | exact |
//! | `Number::Float`, finite | shortest round-trip decimal | `1.5`, `0.0025` |
//! | `Number::Float`, whole-valued | keeps a fractional marker | `2.0`, `-0.0` |
//! | `Number::Float`, non-finite | `null` | JSON has no NaN/Infinity lexeme |
//! | `RawNumber` | stored text, verbatim | validated against the grammar |
//!
//! String output escapes `"`, `\`, and control characters; all other
//! characters pass through as UTF-8 unless
//! [`WriteOptions::with_escape_non_ascii`](crate::WriteOptions::with_escape_non_ascii)
//! forces `\uXXXX` escapes (astral code points as surrogate pairs).
//!
//! # Not Supported
//!
//! - Comments, single-quoted strings, unquoted keys
//! - `NaN`/`Infinity` literals on input
//! - Streaming or incremental parsing; documents are parsed from a complete
//!   string
