//! Error type shared by the parser, emitter and message codec.

pub mod messages;

use std::fmt;

/// Every error this crate can return.
///
/// The lexical/grammar variants (`UnexpectedEof`, `Expected`, `InvalidChar`)
/// are raised by [`crate::parser::Parser`]; the rest map directly onto the
/// error kinds of the spec this crate implements.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Ran out of input while a token was still expected.
    UnexpectedEof { line: usize, column: usize },
    /// A specific literal or token class was expected but not found.
    Expected {
        what: String,
        line: usize,
        column: usize,
    },
    /// A byte sequence could not be decoded as UTF-8 or is otherwise malformed.
    InvalidChar {
        found: char,
        line: usize,
        column: usize,
    },
    /// A DBC record was malformed.
    ParseError {
        line: usize,
        column: usize,
        detail: &'static str,
    },
    /// Merging a second node/message with an existing name.
    Duplicate(String),
    /// A lookup (by name or frame id) found nothing.
    NotFound(String),
    /// `encode_message` was missing a value for a required active signal.
    MissingSignal(String),
    /// A string value passed to `encode_message` is not one of the signal's choices.
    UnknownChoice { signal: String, label: String },
    /// The raw integer computed from a physical value does not fit the signal's width.
    OutOfRange { signal: String, value: f64 },
    /// `decode_message` was given fewer bytes than the message declares.
    Truncated { expected: usize, got: usize },
}

impl Error {
    pub(crate) fn expected(what: impl Into<String>, line: usize, column: usize) -> Self {
        Error::Expected {
            what: what.into(),
            line,
            column,
        }
    }

    pub(crate) fn parse(line: usize, column: usize, detail: &'static str) -> Self {
        Error::ParseError {
            line,
            column,
            detail,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedEof { line, column } => {
                write!(
                    f,
                    "{} at line {line}, column {column}",
                    messages::UNEXPECTED_EOF
                )
            }
            Error::Expected { what, line, column } => {
                write!(f, "expected {what} at line {line}, column {column}")
            }
            Error::InvalidChar { found, line, column } => {
                write!(
                    f,
                    "{}: {found:?} at line {line}, column {column}",
                    messages::INVALID_CHARACTER
                )
            }
            Error::ParseError {
                line,
                column,
                detail,
            } => {
                write!(f, "parse error at line {line}, column {column}: {detail}")
            }
            Error::Duplicate(name) => write!(f, "duplicate name: {name}"),
            Error::NotFound(key) => write!(f, "not found: {key}"),
            Error::MissingSignal(name) => write!(f, "missing required signal: {name}"),
            Error::UnknownChoice { signal, label } => {
                write!(f, "signal {signal} has no choice labelled {label:?}")
            }
            Error::OutOfRange { signal, value } => {
                write!(f, "signal {signal} value {value} does not fit its bit width")
            }
            Error::Truncated { expected, got } => {
                write!(f, "payload truncated: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
