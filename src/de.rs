//! JSON parsing and deserialization.
//!
//! This module provides the recursive-descent parser that turns JSON text
//! into a [`Value`] tree, and the [`Deserializer`] implementation that drives
//! serde visitors from the same parser.
//!
//! ## Overview
//!
//! - **Single-pass parsing**: O(n) with no backtracking
//! - **Span capture**: number tokens are validated and captured as exact
//!   source spans, so raw-number mode never re-formats a literal
//! - **Error reporting**: every failure carries the byte offset where the
//!   problem was detected, and no partial document is ever returned
//! - **Bounded recursion**: container nesting is limited by
//!   [`ParseOptions::max_depth`]
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_rawjson::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, y: i32 }
//!
//! let data: Data = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
//! assert_eq!(data, Data { x: 1, y: 2 });
//! ```
//!
//! Dynamic documents with raw numbers go through [`crate::parse_with_options`]:
//!
//! ```rust
//! use serde_rawjson::{parse_with_options, ParseOptions};
//!
//! let options = ParseOptions::new().with_raw_numbers(true);
//! let doc = parse_with_options("[340282366920938463463374607431768211456]", &options).unwrap();
//! let arr = doc.as_array().unwrap();
//! assert_eq!(
//!     arr[0].as_raw_number(),
//!     Some("340282366920938463463374607431768211456")
//! );
//! ```

use crate::error::ParseErrorKind;
use crate::options::ParseOptions;
use crate::{Error, JsonMap, Number, Result, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// The JSON deserializer.
///
/// Parses JSON text into [`Value`] trees or into Rust values implementing
/// `Deserialize`. Created via [`Deserializer::from_str`] or
/// [`Deserializer::with_options`].
pub struct Deserializer<'de> {
    input: &'de str,
    position: usize,
    options: ParseOptions,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'de str, options: ParseOptions) -> Self {
        Deserializer {
            input,
            position: 0,
            options,
        }
    }

    fn err(&self, kind: ParseErrorKind) -> Error {
        Error::parse(self.position, kind)
    }

    fn err_at(&self, offset: usize, kind: ParseErrorKind) -> Error {
        Error::parse(offset, kind)
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Advances past a byte the caller has already peeked.
    fn bump(&mut self) {
        self.position += 1;
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        // The grammar permits exactly these four characters between tokens
        while matches!(self.peek_byte(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.bump();
        }
    }

    /// Parses a complete document: one root value, optionally followed by
    /// whitespace. Anything else after the root is `TrailingData` unless the
    /// options allow it, in which case the remainder is left unconsumed.
    pub(crate) fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value(0)?;
        self.end()?;
        Ok(value)
    }

    /// Verifies nothing but whitespace remains.
    pub(crate) fn end(&mut self) -> Result<()> {
        if self.options.allow_trailing_data {
            return Ok(());
        }
        self.skip_whitespace();
        if self.at_end() {
            Ok(())
        } else {
            Err(self.err(ParseErrorKind::TrailingData))
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        self.skip_whitespace();

        match self.peek_byte() {
            None => Err(self.err(ParseErrorKind::UnexpectedEndOfInput)),
            Some(b'{') => self.parse_object(depth),
            Some(b'[') => self.parse_array(depth),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b't') => {
                self.expect_keyword("true")?;
                Ok(Value::Bool(true))
            }
            Some(b'f') => {
                self.expect_keyword("false")?;
                Ok(Value::Bool(false))
            }
            Some(b'n') => {
                self.expect_keyword("null")?;
                Ok(Value::Null)
            }
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b']' | b'}' | b',') => Err(self.err(ParseErrorKind::UnbalancedContainer)),
            Some(_) => {
                let ch = self.peek_char().unwrap_or('\u{fffd}');
                Err(self.err(ParseErrorKind::UnexpectedCharacter(ch)))
            }
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.input[self.position..].starts_with(keyword) {
            self.position += keyword.len();
            Ok(())
        } else {
            let ch = self.peek_char().unwrap_or('\u{fffd}');
            Err(self.err(ParseErrorKind::UnexpectedCharacter(ch)))
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let start = self.position;
        self.bump(); // opening quote
        let mut result = String::new();

        loop {
            let ch = match self.next_char() {
                Some(ch) => ch,
                None => return Err(self.err_at(start, ParseErrorKind::UnterminatedString)),
            };

            match ch {
                '"' => return Ok(result),
                '\\' => result.push(self.parse_escape()?),
                // Unescaped control characters are forbidden inside strings
                c if (c as u32) < 0x20 => {
                    return Err(self.err(ParseErrorKind::UnexpectedCharacter(c)))
                }
                c => result.push(c),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        let escape_start = self.position - 1;
        match self.next_char() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.parse_unicode_escape(escape_start),
            Some(_) => Err(self.err_at(escape_start, ParseErrorKind::InvalidEscape)),
            None => Err(self.err_at(escape_start, ParseErrorKind::UnterminatedString)),
        }
    }

    /// Decodes `\uXXXX`, pairing surrogates into a single scalar. `offset`
    /// points at the leading backslash for error reporting.
    fn parse_unicode_escape(&mut self, offset: usize) -> Result<char> {
        let first = self.parse_hex4(offset)?;

        let code_point = if (0xD800..=0xDBFF).contains(&first) {
            // High surrogate: the low half must follow immediately
            if !self.input[self.position..].starts_with("\\u") {
                return Err(self.err_at(offset, ParseErrorKind::InvalidEscape));
            }
            self.position += 2;
            let second = self.parse_hex4(offset)?;
            if !(0xDC00..=0xDFFF).contains(&second) {
                return Err(self.err_at(offset, ParseErrorKind::InvalidEscape));
            }
            0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
        } else if (0xDC00..=0xDFFF).contains(&first) {
            // Lone low surrogate
            return Err(self.err_at(offset, ParseErrorKind::InvalidEscape));
        } else {
            first
        };

        char::from_u32(code_point).ok_or_else(|| self.err_at(offset, ParseErrorKind::InvalidEscape))
    }

    fn parse_hex4(&mut self, offset: usize) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = match self.next_char() {
                Some(ch) => ch
                    .to_digit(16)
                    .ok_or_else(|| self.err_at(offset, ParseErrorKind::InvalidEscape))?,
                None => return Err(self.err_at(offset, ParseErrorKind::UnterminatedString)),
            };
            value = value * 16 + digit;
        }
        Ok(value)
    }

    /// Scans one number token, validating the full JSON number grammar and
    /// capturing the exact source span. Conversion policy (documented in
    /// [`crate::format`]): integer-form literals become `i64`, falling back to
    /// `f64` on overflow; fraction/exponent forms become `f64`, saturating to
    /// infinity for enormous exponents. With raw numbers enabled no
    /// conversion is attempted at all.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.position;
        let mut integer_form = true;

        if self.peek_byte() == Some(b'-') {
            self.bump();
        }

        match self.peek_byte() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => {
                while matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                    self.bump();
                }
            }
            _ => return Err(self.err_at(start, ParseErrorKind::InvalidNumber)),
        }

        if self.peek_byte() == Some(b'.') {
            integer_form = false;
            self.bump();
            if !matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                return Err(self.err_at(start, ParseErrorKind::InvalidNumber));
            }
            while matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                self.bump();
            }
        }

        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            integer_form = false;
            self.bump();
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.bump();
            }
            if !matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                return Err(self.err_at(start, ParseErrorKind::InvalidNumber));
            }
            while matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                self.bump();
            }
        }

        let span = &self.input[start..self.position];

        if self.options.preserve_raw_numbers {
            return Ok(Value::RawNumber(span.to_string()));
        }

        if integer_form {
            if let Ok(i) = span.parse::<i64>() {
                return Ok(Value::Number(Number::Integer(i)));
            }
        }
        span.parse::<f64>()
            .map(|f| Value::Number(Number::Float(f)))
            .map_err(|_| self.err_at(start, ParseErrorKind::InvalidNumber))
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        if depth >= self.options.max_depth {
            return Err(self.err(ParseErrorKind::DepthLimitExceeded));
        }
        self.bump(); // '['
        self.skip_whitespace();

        let mut elements = Vec::new();

        if self.peek_byte() == Some(b']') {
            self.bump();
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.parse_value(depth + 1)?);
            self.skip_whitespace();

            match self.peek_byte() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.options.allow_trailing_commas && self.peek_byte() == Some(b']') {
                        self.bump();
                        return Ok(Value::Array(elements));
                    }
                }
                Some(b']') => {
                    self.bump();
                    return Ok(Value::Array(elements));
                }
                None => return Err(self.err(ParseErrorKind::UnexpectedEndOfInput)),
                Some(_) => {
                    let ch = self.peek_char().unwrap_or('\u{fffd}');
                    return Err(self.err(ParseErrorKind::UnexpectedCharacter(ch)));
                }
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        if depth >= self.options.max_depth {
            return Err(self.err(ParseErrorKind::DepthLimitExceeded));
        }
        self.bump(); // '{'
        self.skip_whitespace();

        let mut map = JsonMap::new();

        if self.peek_byte() == Some(b'}') {
            self.bump();
            return Ok(Value::Object(map));
        }

        loop {
            match self.peek_byte() {
                Some(b'"') => {}
                None => return Err(self.err(ParseErrorKind::UnexpectedEndOfInput)),
                Some(_) => {
                    let ch = self.peek_char().unwrap_or('\u{fffd}');
                    return Err(self.err(ParseErrorKind::UnexpectedCharacter(ch)));
                }
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            match self.peek_byte() {
                Some(b':') => self.bump(),
                None => return Err(self.err(ParseErrorKind::UnexpectedEndOfInput)),
                Some(_) => {
                    let ch = self.peek_char().unwrap_or('\u{fffd}');
                    return Err(self.err(ParseErrorKind::UnexpectedCharacter(ch)));
                }
            }

            let value = self.parse_value(depth + 1)?;
            // Duplicate keys: the last occurrence wins
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek_byte() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.options.allow_trailing_commas && self.peek_byte() == Some(b'}') {
                        self.bump();
                        return Ok(Value::Object(map));
                    }
                }
                Some(b'}') => {
                    self.bump();
                    return Ok(Value::Object(map));
                }
                None => return Err(self.err(ParseErrorKind::UnexpectedEndOfInput)),
                Some(_) => {
                    let ch = self.peek_char().unwrap_or('\u{fffd}');
                    return Err(self.err(ParseErrorKind::UnexpectedCharacter(ch)));
                }
            }
        }
    }
}

/// Drives a serde visitor with an already-parsed value.
///
/// Raw numbers re-enter the fixed-width lane here: the serde data model has
/// no arbitrary-precision channel, so the literal is handed over as the
/// narrowest type that holds it.
fn visit_value<'de, V>(value: Value, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    match value {
        Value::Null => visitor.visit_unit(),
        Value::Bool(b) => visitor.visit_bool(b),
        Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
        Value::Number(Number::Float(f)) => visitor.visit_f64(f),
        Value::RawNumber(s) => {
            if let Ok(i) = s.parse::<i64>() {
                visitor.visit_i64(i)
            } else if let Ok(u) = s.parse::<u64>() {
                visitor.visit_u64(u)
            } else {
                let f = s
                    .parse::<f64>()
                    .map_err(|_| Error::custom(format!("invalid raw number {}", s)))?;
                visitor.visit_f64(f)
            }
        }
        Value::String(s) => visitor.visit_string(s),
        Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
        Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
    }
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.parse_value(0)?;
        visit_value(value, visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.skip_whitespace();
        if self.input[self.position..].starts_with("null") {
            self.position += 4;
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.parse_value(0)?;
        match value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) => {
                if obj.len() == 1 {
                    let (variant, value) = obj
                        .into_iter()
                        .next()
                        .ok_or_else(|| Error::custom("expected enum variant"))?;
                    visitor.visit_enum(EnumDeserializer::new(variant, value))
                } else {
                    Err(Error::custom("expected single-key object enum variant"))
                }
            }
            _ => Err(Error::custom("expected enum")),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: JsonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer {
            variant,
            value: Some(value),
        }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        let visitor = VariantDeserializer { value: self.value };
        Ok((variant, visitor))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            _ => Err(Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(obj)) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("expected struct variant")),
        }
    }
}

/// Deserializer over an owned, already-parsed [`Value`].
pub(crate) struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub(crate) fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visit_value(self.value, visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            value => visitor.visit_some(ValueDeserializer::new(value)),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) => {
                if obj.len() == 1 {
                    let (variant, value) = obj
                        .into_iter()
                        .next()
                        .ok_or_else(|| Error::custom("expected enum variant"))?;
                    visitor.visit_enum(EnumDeserializer::new(variant, value))
                } else {
                    Err(Error::custom("expected single-key object enum variant"))
                }
            }
            _ => Err(Error::custom("expected enum")),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WriteOptions;

    fn parse_default(input: &str) -> Result<Value> {
        Deserializer::from_str(input).parse_document()
    }

    fn parse_raw(input: &str) -> Result<Value> {
        Deserializer::with_options(input, ParseOptions::new().with_raw_numbers(true))
            .parse_document()
    }

    #[test]
    fn parses_scalars() {
        assert_eq!(parse_default("null").unwrap(), Value::Null);
        assert_eq!(parse_default("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_default("false").unwrap(), Value::Bool(false));
        assert_eq!(
            parse_default("42").unwrap(),
            Value::Number(Number::Integer(42))
        );
        assert_eq!(
            parse_default("-2.5e3").unwrap(),
            Value::Number(Number::Float(-2500.0))
        );
        assert_eq!(
            parse_default("\"hi\"").unwrap(),
            Value::String("hi".to_string())
        );
    }

    #[test]
    fn empty_object_and_array() {
        assert_eq!(parse_default("{}").unwrap(), Value::Object(JsonMap::new()));
        assert_eq!(parse_default("[]").unwrap(), Value::Array(vec![]));
        assert_eq!(
            parse_default(" [ ] ").unwrap(),
            Value::Array(vec![])
        );
    }

    #[test]
    fn empty_input_is_unexpected_eof() {
        for input in ["", "   ", "\n\t\r "] {
            let err = parse_default(input).unwrap_err();
            assert_eq!(
                err.parse_kind(),
                Some(&ParseErrorKind::UnexpectedEndOfInput),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn raw_mode_keeps_every_literal_verbatim() {
        let doc = parse_raw("[0, -0, 1.50, 1e9, 123456789012345678901234567890]").unwrap();
        let arr = doc.as_array().unwrap();
        let texts: Vec<_> = arr.iter().map(|v| v.as_raw_number().unwrap()).collect();
        assert_eq!(
            texts,
            vec!["0", "-0", "1.50", "1e9", "123456789012345678901234567890"]
        );
    }

    #[test]
    fn default_mode_converts_numbers() {
        let doc = parse_default("[1, 1.5, 123456789012345678901234567890, 1e999]").unwrap();
        let arr = doc.as_array().unwrap();
        assert_eq!(arr[0], Value::Number(Number::Integer(1)));
        assert_eq!(arr[1], Value::Number(Number::Float(1.5)));
        // Overflowing integer falls back to an f64 approximation
        assert_eq!(
            arr[2],
            Value::Number(Number::Float(123456789012345678901234567890f64))
        );
        // Enormous exponents saturate to infinity
        assert_eq!(arr[3], Value::Number(Number::Float(f64::INFINITY)));
    }

    #[test]
    fn rejects_malformed_numbers() {
        for input in ["01", "1.", ".5", "-", "1e", "1e+", "+1", "1.2.3"] {
            let err = parse_default(input).unwrap_err();
            assert!(
                matches!(
                    err.parse_kind(),
                    Some(
                        &ParseErrorKind::InvalidNumber
                            | &ParseErrorKind::UnexpectedCharacter(_)
                            | &ParseErrorKind::TrailingData
                    )
                ),
                "input {:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn string_escapes() {
        assert_eq!(
            parse_default(r#""a\"b\\c\/d\n\t\r\b\f""#).unwrap(),
            Value::String("a\"b\\c/d\n\t\r\u{8}\u{c}".to_string())
        );
        assert_eq!(
            parse_default(r#""é☃""#).unwrap(),
            Value::String("é☃".to_string())
        );
        // Surrogate pair for U+1F600
        assert_eq!(
            parse_default(r#""😀""#).unwrap(),
            Value::String("😀".to_string())
        );
    }

    #[test]
    fn invalid_escapes() {
        for input in [r#""\x""#, r#""\u12""#, r#""\ud800""#, r#""\udc00""#] {
            let err = parse_default(input).unwrap_err();
            assert!(
                matches!(
                    err.parse_kind(),
                    Some(&ParseErrorKind::InvalidEscape | &ParseErrorKind::UnterminatedString)
                ),
                "input {:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn unterminated_string_points_at_opening_quote() {
        let err = parse_default("  \"abc").unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::UnterminatedString));
        assert_eq!(err.offset(), Some(2));
    }

    #[test]
    fn trailing_commas_require_opt_in() {
        assert!(parse_default("[1,2,]").is_err());
        assert!(parse_default(r#"{"a":1,}"#).is_err());

        let lenient = ParseOptions::new().with_trailing_commas(true);
        let doc = Deserializer::with_options("[1,2,]", lenient.clone())
            .parse_document()
            .unwrap();
        assert_eq!(doc.as_array().unwrap().len(), 2);
        let doc = Deserializer::with_options(r#"{"a":1,}"#, lenient)
            .parse_document()
            .unwrap();
        assert_eq!(doc.as_object().unwrap().len(), 1);
    }

    #[test]
    fn trailing_data_requires_opt_in() {
        let err = parse_default("1 2").unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::TrailingData));
        assert_eq!(err.offset(), Some(2));

        let lenient = ParseOptions::new().with_trailing_data(true);
        let doc = Deserializer::with_options("1 2", lenient)
            .parse_document()
            .unwrap();
        assert_eq!(doc, Value::Number(Number::Integer(1)));
    }

    #[test]
    fn stray_closers_are_unbalanced() {
        for input in ["]", "}", ",", "[1,2]]"] {
            let err = parse_default(input).unwrap_err();
            assert!(
                matches!(
                    err.parse_kind(),
                    Some(&ParseErrorKind::UnbalancedContainer | &ParseErrorKind::TrailingData)
                ),
                "input {:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn depth_limit() {
        let deep_ok = format!("{}{}", "[".repeat(64), "]".repeat(64));
        assert!(parse_default(&deep_ok).is_ok());

        let too_deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let err = parse_default(&too_deep).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::DepthLimitExceeded));

        let tight = ParseOptions::new().with_max_depth(2);
        assert!(Deserializer::with_options("[[1]]", tight.clone())
            .parse_document()
            .is_ok());
        assert!(Deserializer::with_options("[[[1]]]", tight)
            .parse_document()
            .is_err());
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let doc = parse_default(r#"{"a": 1, "a": 2}"#).unwrap();
        let obj = doc.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("a").and_then(Value::as_i64), Some(2));
    }

    #[test]
    fn objects_preserve_member_order() {
        let doc = parse_default(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(
            crate::ser::write_value(&doc, &WriteOptions::new()).unwrap(),
            r#"{"z":1,"a":2,"m":3}"#
        );
    }
}
