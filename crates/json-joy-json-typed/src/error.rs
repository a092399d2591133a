use thiserror::Error;

use crate::cursor::TokenKind;
use crate::reader::ReadError;

/// Errors produced while decoding a [`DynamicValue`](crate::DynamicValue).
///
/// Every variant is fatal for the enclosing document.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("expected {expected} but found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    #[error("invalid number literal: {0:?}")]
    InvalidNumber(String),
    #[error("number out of range: {0}")]
    NumberOutOfRange(String),
    #[error("nesting depth exceeds {0}")]
    DepthLimitExceeded(usize),
    #[error(transparent)]
    Read(#[from] ReadError),
}

impl DecodeError {
    pub(crate) fn unexpected(expected: &'static str, found: TokenKind) -> Self {
        DecodeError::UnexpectedToken { expected, found }
    }
}
