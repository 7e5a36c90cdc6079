//! Error types for codec operations

use crate::config::Kind;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{kind} must be between {min} and {max}, got {value}")]
    OutOfRange {
        kind: &'static str,
        value: i128,
        min: i128,
        max: i128,
    },
    #[error("invalid char: {0:#04x}")]
    InvalidChar(u32),
    #[error("unknown size kind: {0}")]
    UnknownKind(String),
    #[error("invalid {kind} width: {width}")]
    InvalidWidth { kind: Kind, width: usize },
    #[error("unsupported category: {0}")]
    Unsupported(&'static str),
    #[error("unpack requires at least one template")]
    NoTemplates,
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("length {len} does not fit in a {width}-byte prefix")]
    LengthOverflow { len: usize, width: usize },
    #[error("invalid length: {0}")]
    InvalidLength(u64),
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}
