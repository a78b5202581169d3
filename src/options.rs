//! Configuration options for parsing and serialization.
//!
//! This module provides the two option structs recognized by the codec:
//!
//! - [`ParseOptions`]: Controls number handling and strictness while reading
//! - [`WriteOptions`]: Controls formatting while writing
//!
//! ## Examples
//!
//! ```rust
//! use serde_rawjson::{parse_with_options, write_with_options, ParseOptions, WriteOptions};
//!
//! // Preserve numeric literals verbatim
//! let options = ParseOptions::new().with_raw_numbers(true);
//! let doc = parse_with_options("[123456789012345678901234567890]", &options).unwrap();
//!
//! // Pretty-print with 4-space indentation
//! let options = WriteOptions::pretty().with_indent(4);
//! let out = write_with_options(&doc, &options).unwrap();
//! assert!(out.contains("123456789012345678901234567890"));
//! ```

/// Default container nesting limit.
///
/// Deep enough for any realistic document while keeping recursive descent
/// safely inside the stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for parsing.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::ParseOptions;
///
/// // Strict defaults
/// let options = ParseOptions::new();
/// assert!(!options.preserve_raw_numbers);
///
/// // Lossless numbers, lenient commas
/// let options = ParseOptions::new()
///     .with_raw_numbers(true)
///     .with_trailing_commas(true);
/// ```
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Store every numeric literal as its exact source text instead of
    /// converting to `i64`/`f64`.
    pub preserve_raw_numbers: bool,
    /// Tolerate non-whitespace content after the root value. The remainder is
    /// left unconsumed rather than parsed.
    pub allow_trailing_data: bool,
    /// Tolerate a comma before `]` or `}`.
    pub allow_trailing_commas: bool,
    /// Maximum container nesting depth before the parser gives up.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            preserve_raw_numbers: false,
            allow_trailing_data: false,
            allow_trailing_commas: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates strict default options (numbers converted, no trailing
    /// data or commas, depth limit of [`DEFAULT_MAX_DEPTH`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether numeric literals are kept as raw text.
    ///
    /// When enabled, every number token becomes a [`crate::Value::RawNumber`]
    /// carrying the exact input span, so literals of any length round-trip
    /// byte-identically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rawjson::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_raw_numbers(true);
    /// assert!(options.preserve_raw_numbers);
    /// ```
    #[must_use]
    pub fn with_raw_numbers(mut self, preserve: bool) -> Self {
        self.preserve_raw_numbers = preserve;
        self
    }

    /// Sets whether content after the root value is tolerated.
    #[must_use]
    pub fn with_trailing_data(mut self, allow: bool) -> Self {
        self.allow_trailing_data = allow;
        self
    }

    /// Sets whether trailing commas inside containers are tolerated.
    #[must_use]
    pub fn with_trailing_commas(mut self, allow: bool) -> Self {
        self.allow_trailing_commas = allow;
        self
    }

    /// Sets the maximum container nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Configuration options for serialization.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::WriteOptions;
///
/// // Default compact output
/// let options = WriteOptions::new();
///
/// // Multi-line, indented output
/// let options = WriteOptions::pretty();
/// assert!(options.pretty);
///
/// // ASCII-only output with a final newline
/// let options = WriteOptions::pretty()
///     .with_escape_non_ascii(true)
///     .with_trailing_newline(true);
/// ```
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Emit newlines and indentation.
    pub pretty: bool,
    /// Spaces per indentation level. Only affects pretty output.
    pub indent: usize,
    /// Escape all characters above U+007F as `\uXXXX` sequences.
    pub escape_non_ascii: bool,
    /// Append a final newline to the output.
    pub trailing_newline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            pretty: false,
            indent: 2,
            escape_non_ascii: false,
            trailing_newline: false,
        }
    }
}

impl WriteOptions {
    /// Creates default options (compact output, 2-space indent when pretty).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rawjson::WriteOptions;
    ///
    /// let options = WriteOptions::pretty();
    /// assert!(options.pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        WriteOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets whether characters above U+007F are escaped as `\uXXXX`.
    #[must_use]
    pub fn with_escape_non_ascii(mut self, escape: bool) -> Self {
        self.escape_non_ascii = escape;
        self
    }

    /// Sets whether a final newline is appended to the output.
    #[must_use]
    pub fn with_trailing_newline(mut self, newline: bool) -> Self {
        self.trailing_newline = newline;
        self
    }
}
