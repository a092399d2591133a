//! Token cursor abstraction consumed by [`TypedDecoder`](crate::TypedDecoder).
//!
//! A cursor is a forward-only pull tokenizer: the decoder asks what comes next
//! with [`TokenCursor::peek`] and then consumes exactly that token with the
//! matching `begin_*`, `end_*` or `next_*` call.

use std::fmt;

use crate::reader::ReadError;

/// Kind of the next token under a [`TokenCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    BeginArray,
    EndArray,
    BeginObject,
    EndObject,
    /// Object member name.
    Name,
    String,
    Number,
    Bool,
    Null,
    /// No more tokens in the document.
    EndDocument,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::BeginArray => "BEGIN_ARRAY",
            TokenKind::EndArray => "END_ARRAY",
            TokenKind::BeginObject => "BEGIN_OBJECT",
            TokenKind::EndObject => "END_OBJECT",
            TokenKind::Name => "NAME",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Bool => "BOOLEAN",
            TokenKind::Null => "NULL",
            TokenKind::EndDocument => "END_DOCUMENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sequential access to JSON lexical tokens.
///
/// Implementations must never re-deliver a consumed token. Calling a
/// consuming method when [`peek`](Self::peek) reports a different kind is a
/// contract violation and must fail with a [`ReadError`].
pub trait TokenCursor {
    /// Kind of the next token, without consuming it.
    fn peek(&mut self) -> Result<TokenKind, ReadError>;

    fn begin_array(&mut self) -> Result<(), ReadError>;
    fn end_array(&mut self) -> Result<(), ReadError>;
    fn begin_object(&mut self) -> Result<(), ReadError>;
    fn end_object(&mut self) -> Result<(), ReadError>;

    /// `true` while the innermost open container has more elements/members.
    fn has_next(&mut self) -> Result<bool, ReadError> {
        Ok(!matches!(
            self.peek()?,
            TokenKind::EndArray | TokenKind::EndObject | TokenKind::EndDocument
        ))
    }

    /// Reads an object member name.
    fn next_name(&mut self) -> Result<String, ReadError>;

    /// Reads a number token as its exact lexical text, e.g. `"-12"`, `"5039.2"`
    /// or `"1E+3"`.
    fn next_number(&mut self) -> Result<&str, ReadError>;

    fn next_string(&mut self) -> Result<String, ReadError>;
    fn next_bool(&mut self) -> Result<bool, ReadError>;
    fn next_null(&mut self) -> Result<(), ReadError>;
}
