//! Error message text, kept apart from `Error` itself so the strings read
//! as a flat table (mirrors the teacher's `error/lang/en.rs`).
#![allow(dead_code)]

pub const UNEXPECTED_EOF: &str = "unexpected end of input";
pub const EXPECTED_WHITESPACE: &str = "expected whitespace";
pub const INVALID_UTF8: &str = "invalid UTF-8 in input";
pub const INVALID_NUMBER_FORMAT: &str = "invalid number format";
pub const INVALID_CHARACTER: &str = "invalid character";
pub const UNTERMINATED_STRING: &str = "unterminated quoted string";

pub const VERSION_ERROR_PREFIX: &str = "version error";
pub const NODE_ERROR_PREFIX: &str = "node error";
pub const MESSAGE_ERROR_PREFIX: &str = "message error";
pub const SIGNAL_ERROR_PREFIX: &str = "signal error";

pub const MESSAGE_INVALID_ID: &str = "invalid message id";
pub const MESSAGE_NAME_EMPTY: &str = "message name cannot be empty";
pub const MESSAGE_INVALID_DLC: &str = "invalid DLC";
pub const MESSAGE_SENDER_EMPTY: &str = "message sender cannot be empty";

pub const SIGNAL_NAME_EMPTY: &str = "signal name cannot be empty";
pub const SIGNAL_PARSE_INVALID_START_BIT: &str = "invalid start_bit";
pub const SIGNAL_PARSE_INVALID_LENGTH: &str = "invalid length";
pub const SIGNAL_PARSE_INVALID_FACTOR: &str = "invalid scale factor";
pub const SIGNAL_PARSE_INVALID_OFFSET: &str = "invalid offset";
pub const SIGNAL_PARSE_INVALID_MIN: &str = "invalid minimum";
pub const SIGNAL_PARSE_INVALID_MAX: &str = "invalid maximum";
pub const SIGNAL_LENGTH_TOO_SMALL: &str = "signal length must be at least 1 bit";
pub const SIGNAL_LENGTH_TOO_LARGE: &str = "signal length cannot exceed 64 bits";
pub const SIGNAL_BITS_OVERFLOW: &str = "start_bit + length exceeds 64 bits";

pub const VAL_UNKNOWN_SIGNAL: &str = "VAL_ references an unknown signal";
pub const CM_UNKNOWN_TARGET: &str = "CM_ references an unknown node, message or signal";
