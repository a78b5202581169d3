//! # serde_rawjson
//!
//! A Serde-compatible JSON library that can preserve number literals exactly
//! as written in the source text.
//!
//! ## Why raw numbers?
//!
//! Standard JSON parsers convert every number to a machine type at parse
//! time. A 30-digit integer or a high-precision decimal silently loses
//! information the moment it becomes an `f64`. This library offers an opt-in
//! parse mode in which every number literal is carried through the document
//! tree as its exact source text and re-emitted byte for byte on
//! serialization.
//!
//! ## Key Features
//!
//! - **Lossless Numbers**: `123456789012345678901234567890` survives a
//!   parse/serialize round trip unchanged
//! - **Strict Parsing**: RFC 8259 grammar with byte-offset error reporting
//!   and a configurable nesting depth limit
//! - **Serde Compatible**: Works seamlessly with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//! - **Pretty or Compact**: Two-space indented output or minimal whitespace
//! - **No Unsafe Code**: Written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_rawjson = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_rawjson::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let json = to_string(&user).unwrap();
//! assert_eq!(json, r#"{"id":123,"name":"Alice","active":true}"#);
//!
//! let user_back: User = from_str(&json).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Preserving Big Numbers
//!
//! ```rust
//! use serde_rawjson::{parse_with_options, write_pretty, ParseOptions};
//!
//! let input = r#"{"big_num": 123456789012345678901234567890}"#;
//! let options = ParseOptions::new().with_raw_numbers(true);
//! let doc = parse_with_options(input, &options).unwrap();
//!
//! let pretty = write_pretty(&doc).unwrap();
//! assert!(pretty.contains("\"big_num\": 123456789012345678901234567890"));
//! ```
//!
//! ### Dynamic Values with the rawjson! Macro
//!
//! ```rust
//! use serde_rawjson::{rawjson, Value};
//!
//! let data = rawjson!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde", "json"]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single-pass recursive descent
//! - **Serialization**: O(n) over the document tree
//! - **Memory**: raw mode stores one `String` per number literal; the default
//!   mode stores plain `i64`/`f64` values
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All array indexing is bounds-checked
//! - Proper error propagation with `Result` types
//! - Nesting depth is limited, so adversarial input cannot overflow the stack
//!
//! ## Format Details
//!
//! See the [`format`] module for the accepted grammar, the number conversion
//! policy, and the raw-number rules.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, ParseErrorKind, Result, WriteErrorKind};
pub use map::JsonMap;
pub use options::{ParseOptions, WriteOptions, DEFAULT_MAX_DEPTH};
pub use ser::{Serializer, ValueSerializer};
pub use value::{Number, Value};

use serde::{Deserialize, Serialize};
use std::io;

/// Parse a JSON string into a [`Value`] tree with default options.
///
/// Numbers convert to `i64` where they fit, `f64` otherwise. For lossless
/// number handling use [`parse_with_options`] with raw numbers enabled.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::parse;
///
/// let doc = parse(r#"{"x": 1, "y": [true, null]}"#).unwrap();
/// assert_eq!(doc.get("x").and_then(|v| v.as_i64()), Some(1));
/// ```
///
/// # Errors
///
/// Returns a parse error with a byte offset if the input is not a single
/// well-formed JSON value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(s: &str) -> Result<Value> {
    parse_with_options(s, &ParseOptions::default())
}

/// Parse a JSON string into a [`Value`] tree with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_raw_numbers(true);
/// let doc = parse_with_options("[1.50]", &options).unwrap();
/// let arr = doc.as_array().unwrap();
/// assert_eq!(arr[0].as_raw_number(), Some("1.50"));
/// ```
///
/// # Errors
///
/// Returns a parse error with a byte offset if the input violates the
/// grammar, exceeds the depth limit, or leaves trailing data when the
/// options forbid it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(s: &str, options: &ParseOptions) -> Result<Value> {
    let mut deserializer = Deserializer::with_options(s, options.clone());
    deserializer.parse_document()
}

/// Parse a JSON byte slice into a [`Value`] tree with default options.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not well-formed JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<Value> {
    parse_slice_with_options(v, &ParseOptions::default())
}

/// Parse a JSON byte slice into a [`Value`] tree with custom options.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not well-formed JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice_with_options(v: &[u8], options: &ParseOptions) -> Result<Value> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    parse_with_options(s, options)
}

/// Serialize a [`Value`] tree to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::{parse, write};
///
/// let doc = parse(r#"{ "a" : [ 1 , 2 ] }"#).unwrap();
/// assert_eq!(write(&doc).unwrap(), r#"{"a":[1,2]}"#);
/// ```
///
/// # Errors
///
/// Returns a corrupt-tree error if a raw-number value holds text that is not
/// a valid JSON number literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write(value: &Value) -> Result<String> {
    write_with_options(value, &WriteOptions::new())
}

/// Serialize a [`Value`] tree to a pretty-printed JSON string.
///
/// Uses two-space indentation, one member or element per line, and a space
/// after each colon.
///
/// # Errors
///
/// Returns a corrupt-tree error if a raw-number value holds text that is not
/// a valid JSON number literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_pretty(value: &Value) -> Result<String> {
    write_with_options(value, &WriteOptions::pretty())
}

/// Serialize a [`Value`] tree to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::{rawjson, write_with_options, WriteOptions};
///
/// let doc = rawjson!({"a": 1});
/// let options = WriteOptions::pretty().with_indent(4);
/// assert_eq!(write_with_options(&doc, &options).unwrap(), "{\n    \"a\": 1\n}");
/// ```
///
/// # Errors
///
/// Returns a corrupt-tree error if a raw-number value holds text that is not
/// a valid JSON number literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_with_options(value: &Value, options: &WriteOptions) -> Result<String> {
    ser::write_value(value, options)
}

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g., a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &WriteOptions::new())
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &WriteOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &WriteOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options.clone());
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to a compact JSON byte vector.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_string(value).map(String::into_bytes)
}

/// Convert any `T: Serialize` to a [`Value`] tree.
///
/// Useful for working with JSON data dynamically when the structure isn't
/// known at compile time. `u64` values above `i64::MAX` become raw numbers so
/// they stay exact.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as compact JSON.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &point).unwrap();
/// assert_eq!(buffer, br#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &WriteOptions::new())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &WriteOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let json_string = to_string_with_options(value, options)?;
    writer
        .write_all(json_string.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not well-formed JSON or cannot be
/// deserialized to type `T`. Parse errors carry the byte offset of the
/// problem.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Deserialize an instance of type `T` from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not well-formed JSON,
/// or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream of JSON.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(br#"{"x": 1, "y": 2}"#);
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not
/// well-formed JSON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from a [`Value`] tree.
///
/// Raw-number values deserialize into whichever numeric type their text fits.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::{from_value, rawjson};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let doc = rawjson!({"x": 1, "y": 2});
/// let point: Point = from_value(doc).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the tree cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(de::ValueDeserializer::new(value))
}
