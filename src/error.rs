//! Error types for JSON parsing and serialization.
//!
//! This module provides the crate-wide [`Error`] type along with the parse and
//! write error taxonomies.
//!
//! ## Error Categories
//!
//! - **Parse errors**: Malformed JSON, reported with the byte offset where the
//!   problem was detected and a [`ParseErrorKind`] describing it
//! - **Write errors**: An internally inconsistent value tree handed to the
//!   writer (a programmer error, not an expected runtime path)
//! - **I/O errors**: Reader/writer failures from the `from_reader`/`to_writer`
//!   entry points
//!
//! A failed parse never yields a partial document and a failed write never
//! yields truncated output; every failure is returned to the caller as an
//! explicit `Result`.
//!
//! ## Examples
//!
//! ```rust
//! use serde_rawjson::{parse, Error, ParseErrorKind};
//!
//! match parse("[1, 2") {
//!     Err(Error::Parse { offset, kind }) => {
//!         assert_eq!(kind, ParseErrorKind::UnexpectedEndOfInput);
//!         assert_eq!(offset, 5);
//!     }
//!     other => panic!("expected parse error, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// What went wrong while parsing, independent of where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A character that cannot start or continue the expected token.
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),

    /// A string literal ran past the end of input without a closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A backslash escape that is not part of the JSON grammar, including
    /// malformed `\uXXXX` sequences and unpaired surrogates.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// A numeric literal that does not match the JSON number grammar.
    #[error("invalid number literal")]
    InvalidNumber,

    /// A closing bracket or brace with no matching opener, or a comma where
    /// the grammar requires a value or a closer.
    #[error("unbalanced container")]
    UnbalancedContainer,

    /// Non-whitespace content after the root value.
    #[error("trailing data after root value")]
    TrailingData,

    /// Input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// Containers nested deeper than `ParseOptions::max_depth`.
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}

/// What went wrong while writing.
///
/// Both kinds signal corruption rather than expected runtime failures: a
/// conforming caller that only builds trees through [`crate::parse`],
/// [`crate::to_value`], or the [`crate::rawjson!`] macro never sees them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteErrorKind {
    /// Output buffer allocation failed. Reserved: the global allocator aborts
    /// on failure in default builds, so this kind is only reachable with a
    /// fallible allocator.
    #[error("output allocation failure")]
    AllocationFailure,

    /// The value tree is internally inconsistent, e.g. a raw-number value
    /// whose stored text is not a valid JSON number literal.
    #[error("corrupt value tree")]
    CorruptTree,
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON text, located by byte offset into the input
    #[error("parse error at byte {offset}: {kind}")]
    Parse {
        offset: usize,
        kind: ParseErrorKind,
    },

    /// The writer was handed an inconsistent value tree
    #[error("write error: {kind}")]
    Write { kind: WriteErrorKind },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a parse error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rawjson::{Error, ParseErrorKind};
    ///
    /// let err = Error::parse(12, ParseErrorKind::InvalidNumber);
    /// assert!(err.to_string().contains("byte 12"));
    /// ```
    pub fn parse(offset: usize, kind: ParseErrorKind) -> Self {
        Error::Parse { offset, kind }
    }

    /// Creates a write error of the given kind.
    pub fn write(kind: WriteErrorKind) -> Self {
        Error::Write { kind }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rawjson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the byte offset for parse errors, `None` otherwise.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Parse { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Returns the parse error kind, `None` for non-parse errors.
    #[must_use]
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_reports_offset_and_kind() {
        let err = Error::parse(7, ParseErrorKind::UnterminatedString);
        assert_eq!(err.offset(), Some(7));
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::UnterminatedString));
        assert_eq!(
            err.to_string(),
            "parse error at byte 7: unterminated string"
        );
    }

    #[test]
    fn write_error_display() {
        let err = Error::write(WriteErrorKind::CorruptTree);
        assert_eq!(err.to_string(), "write error: corrupt value tree");
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn unexpected_character_names_the_byte() {
        let err = Error::parse(0, ParseErrorKind::UnexpectedCharacter('@'));
        assert!(err.to_string().contains('@'));
    }
}
