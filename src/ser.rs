//! JSON serialization.
//!
//! This module provides the streaming [`Serializer`] that converts Rust data
//! structures into JSON text, the tree writer behind [`crate::write`], and the
//! [`ValueSerializer`] behind [`crate::to_value`].
//!
//! ## Overview
//!
//! - **Raw numbers pass through untouched**: a [`Value::RawNumber`] reaches
//!   the output as its exact stored text, in both the tree writer and the
//!   serde path (via a private newtype token)
//! - **Floats round-trip**: `f64` values are written with Rust's shortest
//!   round-trippable formatting; non-finite floats become `null`
//! - **Pretty or compact**: [`crate::WriteOptions`] controls indentation,
//!   non-ASCII escaping, and the trailing newline
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_rawjson::{to_string, to_string_pretty};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//! assert_eq!(to_string(&data).unwrap(), r#"{"x":1,"y":2}"#);
//!
//! let pretty = to_string_pretty(&data).unwrap();
//! assert!(pretty.contains("\"x\": 1"));
//! ```

use crate::error::WriteErrorKind;
use crate::value::{is_valid_number_literal, RAW_NUMBER_TOKEN};
use crate::{Error, JsonMap, Number, Result, Value, WriteOptions};
use serde::{ser, Serialize};
use std::fmt::Write as _;

/// Serializes a whole value tree into a JSON string.
///
/// The only failure mode is a corrupt tree: a raw-number value whose stored
/// text does not match the JSON number grammar. No partial output is returned
/// on failure.
pub(crate) fn write_value(value: &Value, options: &WriteOptions) -> Result<String> {
    let mut output = String::with_capacity(256);
    write_value_inner(&mut output, value, options, 0)?;
    if options.trailing_newline {
        output.push('\n');
    }
    Ok(output)
}

fn write_value_inner(
    output: &mut String,
    value: &Value,
    options: &WriteOptions,
    level: usize,
) -> Result<()> {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Number(Number::Integer(i)) => {
            let _ = write!(output, "{}", i);
        }
        Value::Number(Number::Float(f)) => write_float(output, *f),
        Value::RawNumber(s) => {
            if !is_valid_number_literal(s) {
                return Err(Error::write(WriteErrorKind::CorruptTree));
            }
            output.push_str(s);
        }
        Value::String(s) => write_escaped(output, s, options.escape_non_ascii),
        Value::Array(arr) => {
            if arr.is_empty() {
                output.push_str("[]");
                return Ok(());
            }
            output.push('[');
            for (i, element) in arr.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                if options.pretty {
                    output.push('\n');
                    push_indent(output, options, level + 1);
                }
                write_value_inner(output, element, options, level + 1)?;
            }
            if options.pretty {
                output.push('\n');
                push_indent(output, options, level);
            }
            output.push(']');
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                output.push_str("{}");
                return Ok(());
            }
            output.push('{');
            for (i, (key, member)) in obj.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                if options.pretty {
                    output.push('\n');
                    push_indent(output, options, level + 1);
                }
                write_escaped(output, key, options.escape_non_ascii);
                output.push(':');
                if options.pretty {
                    output.push(' ');
                }
                write_value_inner(output, member, options, level + 1)?;
            }
            if options.pretty {
                output.push('\n');
                push_indent(output, options, level);
            }
            output.push('}');
        }
    }
    Ok(())
}

#[inline]
fn push_indent(output: &mut String, options: &WriteOptions, level: usize) {
    for _ in 0..level * options.indent {
        output.push(' ');
    }
}

/// JSON has no lexeme for non-finite floats; they degrade to `null`.
///
/// Whole-valued floats keep a fractional marker (`2.0`, not `2`) so the
/// emitted literal reparses as a float, not an integer.
#[inline]
fn write_float(output: &mut String, f: f64) {
    if f.is_finite() {
        let start = output.len();
        let _ = write!(output, "{}", f);
        if !output[start..].contains(&['.', 'e', 'E'][..]) {
            output.push_str(".0");
        }
    } else {
        output.push_str("null");
    }
}

fn write_escaped(output: &mut String, s: &str, escape_non_ascii: bool) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(output, "\\u{:04x}", c as u32);
            }
            c if escape_non_ascii && !c.is_ascii() => {
                let cp = c as u32;
                if cp > 0xFFFF {
                    // Astral code points escape as a surrogate pair
                    let v = cp - 0x10000;
                    let _ = write!(
                        output,
                        "\\u{:04x}\\u{:04x}",
                        0xD800 + (v >> 10),
                        0xDC00 + (v & 0x3FF)
                    );
                } else {
                    let _ = write!(output, "\\u{:04x}", cp);
                }
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

/// The streaming JSON serializer.
///
/// Converts Rust values implementing `Serialize` into JSON text. Created via
/// [`Serializer::new`] with customizable options.
pub struct Serializer {
    output: String,
    options: WriteOptions,
    level: usize,
}

impl Serializer {
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            level: 0,
        }
    }

    pub fn into_inner(mut self) -> String {
        if self.options.trailing_newline {
            self.output.push('\n');
        }
        self.output
    }

    fn push_indent(&mut self) {
        for _ in 0..self.level * self.options.indent {
            self.output.push(' ');
        }
    }

    /// Opens the `{"variant": ...}` wrapper used for externally tagged enums.
    fn begin_variant(&mut self, variant: &str) {
        self.output.push('{');
        self.level += 1;
        if self.options.pretty {
            self.output.push('\n');
            self.push_indent();
        }
        write_escaped(&mut self.output, variant, self.options.escape_non_ascii);
        self.output.push(':');
        if self.options.pretty {
            self.output.push(' ');
        }
    }

    fn end_variant(&mut self) {
        self.level -= 1;
        if self.options.pretty {
            self.output.push('\n');
            self.push_indent();
        }
        self.output.push('}');
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = Compound<'a>;
    type SerializeMap = Compound<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = Compound<'a>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.output.push_str(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        let _ = write!(self.output, "{}", v);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        // The text stream has no width limit, so large u64s stay exact
        let _ = write!(self.output, "{}", v);
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        write_float(&mut self.output, v);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.serialize_str(&v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        write_escaped(&mut self.output, v, self.options.escape_non_ascii);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        use ser::SerializeSeq;
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        self.output.push_str("null");
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        if name == RAW_NUMBER_TOKEN {
            value.serialize(RawLiteralEmitter { ser: self })
        } else {
            value.serialize(self)
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.begin_variant(variant);
        value.serialize(&mut *self)?;
        self.end_variant();
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.output.push('[');
        self.level += 1;
        Ok(Compound {
            ser: self,
            first: true,
            kind: ContainerKind::Array,
            close_variant: false,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.begin_variant(variant);
        self.output.push('[');
        self.level += 1;
        Ok(Compound {
            ser: self,
            first: true,
            kind: ContainerKind::Array,
            close_variant: true,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.output.push('{');
        self.level += 1;
        Ok(Compound {
            ser: self,
            first: true,
            kind: ContainerKind::Object,
            close_variant: false,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.begin_variant(variant);
        self.output.push('{');
        self.level += 1;
        Ok(Compound {
            ser: self,
            first: true,
            kind: ContainerKind::Object,
            close_variant: true,
        })
    }
}

enum ContainerKind {
    Array,
    Object,
}

/// In-flight state for one open container (and possibly its enum wrapper).
pub struct Compound<'a> {
    ser: &'a mut Serializer,
    first: bool,
    kind: ContainerKind,
    close_variant: bool,
}

impl<'a> Compound<'a> {
    fn before_item(&mut self) {
        if !self.first {
            self.ser.output.push(',');
        }
        if self.ser.options.pretty {
            self.ser.output.push('\n');
            self.ser.push_indent();
        }
        self.first = false;
    }

    fn finish(self) -> Result<()> {
        let empty = self.first;
        self.ser.level -= 1;
        if self.ser.options.pretty && !empty {
            self.ser.output.push('\n');
            self.ser.push_indent();
        }
        self.ser.output.push(match self.kind {
            ContainerKind::Array => ']',
            ContainerKind::Object => '}',
        });
        if self.close_variant {
            self.ser.end_variant();
        }
        Ok(())
    }
}

impl<'a> ser::SerializeSeq for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.before_item();
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTuple for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleStruct for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleVariant for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeMap for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ValueSerializer)? {
            Value::String(s) => {
                self.before_item();
                let escape = self.ser.options.escape_non_ascii;
                write_escaped(&mut self.ser.output, &s, escape);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.output.push(':');
        if self.ser.options.pretty {
            self.ser.output.push(' ');
        }
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeStruct for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.before_item();
        let escape = self.ser.options.escape_non_ascii;
        write_escaped(&mut self.ser.output, key, escape);
        self.ser.output.push(':');
        if self.ser.options.pretty {
            self.ser.output.push(' ');
        }
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeStructVariant for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(self, key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

/// Receives the payload of the raw-number newtype token and copies it to the
/// output verbatim. Anything other than a valid number literal is a corrupt
/// tree.
struct RawLiteralEmitter<'a> {
    ser: &'a mut Serializer,
}

impl<'a> ser::Serializer for RawLiteralEmitter<'a> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = ser::Impossible<(), Error>;
    type SerializeTuple = ser::Impossible<(), Error>;
    type SerializeTupleStruct = ser::Impossible<(), Error>;
    type SerializeTupleVariant = ser::Impossible<(), Error>;
    type SerializeMap = ser::Impossible<(), Error>;
    type SerializeStruct = ser::Impossible<(), Error>;
    type SerializeStructVariant = ser::Impossible<(), Error>;

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        if !is_valid_number_literal(v) {
            return Err(Error::write(WriteErrorKind::CorruptTree));
        }
        self.ser.output.push_str(v);
        Ok(())
    }

    fn serialize_bool(self, _: bool) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_i8(self, _: i8) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_i16(self, _: i16) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_i32(self, _: i32) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_i64(self, _: i64) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_u8(self, _: u8) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_u16(self, _: u16) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_u32(self, _: u32) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_u64(self, _: u64) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_f32(self, _: f32) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_f64(self, _: f64) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_char(self, _: char) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_some<T>(self, _: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Result<Self::Ok> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_newtype_struct<T>(self, _: &'static str, _: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_newtype_variant<T>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeTupleStruct> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::write(WriteErrorKind::CorruptTree))
    }
}

/// Serializer whose output is a [`Value`] tree rather than text.
///
/// Backs [`crate::to_value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariantValue {
    variant: String,
    vec: Vec<Value>,
}

pub struct SerializeMapValue {
    map: JsonMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariantValue {
    variant: String,
    map: JsonMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariantValue;
    type SerializeMap = SerializeMapValue;
    type SerializeStruct = SerializeMapValue;
    type SerializeStructVariant = SerializeStructVariantValue;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        // Above i64 range the raw variant keeps the value exact
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        if name == RAW_NUMBER_TOKEN {
            match value.serialize(ValueSerializer)? {
                Value::String(s) if is_valid_number_literal(&s) => Ok(Value::RawNumber(s)),
                _ => Err(Error::write(WriteErrorKind::CorruptTree)),
            }
        } else {
            value.serialize(self)
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = JsonMap::new();
        map.insert(variant.to_string(), value.serialize(ValueSerializer)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::new() })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTupleVariantValue> {
        Ok(SerializeTupleVariantValue {
            variant: variant.to_string(),
            vec: Vec::new(),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMapValue> {
        Ok(SerializeMapValue {
            map: JsonMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMapValue> {
        Ok(SerializeMapValue {
            map: JsonMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariantValue> {
        Ok(SerializeStructVariantValue {
            variant: variant.to_string(),
            map: JsonMap::new(),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariantValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = JsonMap::new();
        map.insert(self.variant, Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMapValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ValueSerializer)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMapValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariantValue {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = JsonMap::new();
        map.insert(self.variant, Value::Object(self.map));
        Ok(Value::Object(map))
    }
}
