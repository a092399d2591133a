//! `JsonReader`: pull tokenizer over an in-memory JSON document.
//!
//! Implements [`TokenCursor`] on top of a byte slice. Numbers are handed out
//! as their original lexical text; nothing is widened to `f64` here.

use thiserror::Error;

use crate::cursor::{TokenCursor, TokenKind};
use crate::number::scan_number;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEnd(usize),
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },
    #[error("expected {expected} but found {found} at offset {offset}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        offset: usize,
    },
    #[error("invalid number at offset {0}")]
    InvalidNumber(usize),
    #[error("invalid escape sequence in string at offset {0}")]
    InvalidEscape(usize),
    #[error("invalid UTF-8 at offset {0}")]
    InvalidUtf8(usize),
    #[error("trailing data at offset {0}")]
    TrailingData(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    EmptyDocument,
    NonEmptyDocument,
    EmptyArray,
    NonEmptyArray,
    EmptyObject,
    /// A member name was read; the `:` separator is next.
    DanglingName,
    NonEmptyObject,
}

pub struct JsonReader<'a> {
    data: &'a [u8],
    x: usize,
    stack: Vec<Scope>,
    peeked: Option<TokenKind>,
}

impl<'a> JsonReader<'a> {
    pub fn new<B: AsRef<[u8]> + ?Sized>(input: &'a B) -> Self {
        Self {
            data: input.as_ref(),
            x: 0,
            stack: vec![Scope::EmptyDocument],
            peeked: None,
        }
    }

    /// Byte offset of the read position.
    pub fn offset(&self) -> usize {
        self.x
    }

    /// Checks that nothing but whitespace follows the top-level value.
    pub fn finish(&mut self) -> Result<(), ReadError> {
        match self.peek()? {
            TokenKind::EndDocument => Ok(()),
            _ => Err(ReadError::TrailingData(self.x)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    fn peek_byte(&mut self) -> Result<u8, ReadError> {
        self.skip_whitespace();
        self.data
            .get(self.x)
            .copied()
            .ok_or(ReadError::UnexpectedEnd(self.x))
    }

    fn set_top(&mut self, scope: Scope) {
        if let Some(top) = self.stack.last_mut() {
            *top = scope;
        }
    }

    fn unexpected_char(&self) -> ReadError {
        let end = (self.x + 4).min(self.data.len());
        let found = String::from_utf8_lossy(&self.data[self.x..end])
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        ReadError::UnexpectedChar {
            found,
            offset: self.x,
        }
    }

    fn do_peek(&mut self) -> Result<TokenKind, ReadError> {
        let Some(scope) = self.stack.last().copied() else {
            return Ok(TokenKind::EndDocument);
        };
        match scope {
            Scope::EmptyArray => {
                self.set_top(Scope::NonEmptyArray);
                if self.peek_byte()? == b']' {
                    return Ok(TokenKind::EndArray);
                }
            }
            Scope::NonEmptyArray => match self.peek_byte()? {
                b']' => return Ok(TokenKind::EndArray),
                b',' => self.x += 1,
                _ => return Err(self.unexpected_char()),
            },
            Scope::EmptyObject | Scope::NonEmptyObject => {
                let ch = self.peek_byte()?;
                if ch == b'}' {
                    return Ok(TokenKind::EndObject);
                }
                if scope == Scope::NonEmptyObject {
                    if ch != b',' {
                        return Err(self.unexpected_char());
                    }
                    self.x += 1;
                }
                return match self.peek_byte()? {
                    b'"' => Ok(TokenKind::Name),
                    _ => Err(self.unexpected_char()),
                };
            }
            Scope::DanglingName => {
                if self.peek_byte()? != b':' {
                    return Err(self.unexpected_char());
                }
                self.x += 1;
                self.set_top(Scope::NonEmptyObject);
            }
            Scope::EmptyDocument => self.set_top(Scope::NonEmptyDocument),
            Scope::NonEmptyDocument => {
                self.skip_whitespace();
                return if self.x >= self.data.len() {
                    Ok(TokenKind::EndDocument)
                } else {
                    Err(ReadError::TrailingData(self.x))
                };
            }
        }
        self.peek_value()
    }

    fn peek_value(&mut self) -> Result<TokenKind, ReadError> {
        match self.peek_byte()? {
            b'[' => Ok(TokenKind::BeginArray),
            b'{' => Ok(TokenKind::BeginObject),
            b'"' => Ok(TokenKind::String),
            b't' | b'f' => Ok(TokenKind::Bool),
            b'n' => Ok(TokenKind::Null),
            b'-' | b'0'..=b'9' => Ok(TokenKind::Number),
            _ => Err(self.unexpected_char()),
        }
    }

    /// Consumes the peeked token if it has the `expected` kind. The read
    /// position is left on the token's first byte.
    fn expect(&mut self, expected: TokenKind) -> Result<(), ReadError> {
        let found = self.peek()?;
        if found != expected {
            return Err(ReadError::Expected {
                expected,
                found,
                offset: self.x,
            });
        }
        self.peeked = None;
        Ok(())
    }

    fn read_literal(&mut self, literal: &[u8]) -> Result<(), ReadError> {
        let rest = &self.data[self.x..];
        if !rest.starts_with(literal) {
            if rest.len() < literal.len() && literal.starts_with(rest) {
                return Err(ReadError::UnexpectedEnd(self.data.len()));
            }
            return Err(self.unexpected_char());
        }
        self.x += literal.len();
        Ok(())
    }

    fn read_str(&mut self) -> Result<String, ReadError> {
        let x0 = self.x + 1; // skip opening quote
        let x1 = self.find_ending_quote(x0)?;
        let s = decode_json_string(&self.data[x0..x1], x0)?;
        self.x = x1 + 1;
        Ok(s)
    }

    fn find_ending_quote(&self, mut x: usize) -> Result<usize, ReadError> {
        let data = self.data;
        while x < data.len() {
            match data[x] {
                b'"' => return Ok(x),
                b'\\' => x += 2,
                ch if ch < 0x20 => {
                    return Err(ReadError::UnexpectedChar {
                        found: ch as char,
                        offset: x,
                    })
                }
                _ => x += 1,
            }
        }
        Err(ReadError::UnexpectedEnd(data.len()))
    }
}

impl TokenCursor for JsonReader<'_> {
    fn peek(&mut self) -> Result<TokenKind, ReadError> {
        if let Some(kind) = self.peeked {
            return Ok(kind);
        }
        let kind = self.do_peek()?;
        self.peeked = Some(kind);
        Ok(kind)
    }

    fn begin_array(&mut self) -> Result<(), ReadError> {
        self.expect(TokenKind::BeginArray)?;
        self.x += 1;
        self.stack.push(Scope::EmptyArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), ReadError> {
        self.expect(TokenKind::EndArray)?;
        self.x += 1;
        self.stack.pop();
        Ok(())
    }

    fn begin_object(&mut self) -> Result<(), ReadError> {
        self.expect(TokenKind::BeginObject)?;
        self.x += 1;
        self.stack.push(Scope::EmptyObject);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), ReadError> {
        self.expect(TokenKind::EndObject)?;
        self.x += 1;
        self.stack.pop();
        Ok(())
    }

    fn next_name(&mut self) -> Result<String, ReadError> {
        self.expect(TokenKind::Name)?;
        let name = self.read_str()?;
        self.set_top(Scope::DanglingName);
        Ok(name)
    }

    fn next_number(&mut self) -> Result<&str, ReadError> {
        self.expect(TokenKind::Number)?;
        let data = self.data;
        let start = self.x;
        let end = scan_number(data, start).ok_or(ReadError::InvalidNumber(start))?;
        self.x = end;
        // The scanned range is pure ASCII.
        std::str::from_utf8(&data[start..end]).map_err(|_| ReadError::InvalidUtf8(start))
    }

    fn next_string(&mut self) -> Result<String, ReadError> {
        self.expect(TokenKind::String)?;
        self.read_str()
    }

    fn next_bool(&mut self) -> Result<bool, ReadError> {
        self.expect(TokenKind::Bool)?;
        if self.data[self.x] == b't' {
            self.read_literal(b"true")?;
            Ok(true)
        } else {
            self.read_literal(b"false")?;
            Ok(false)
        }
    }

    fn next_null(&mut self) -> Result<(), ReadError> {
        self.expect(TokenKind::Null)?;
        self.read_literal(b"null")
    }
}

/// Decode a JSON string body (between the quotes) handling escape sequences.
/// `offset` is the position of the body in the document, for error reporting.
fn decode_json_string(bytes: &[u8], offset: usize) -> Result<String, ReadError> {
    // Fast path: no backslash
    if !bytes.contains(&b'\\') {
        return std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| ReadError::InvalidUtf8(offset + e.valid_up_to()));
    }
    std::str::from_utf8(bytes).map_err(|e| ReadError::InvalidUtf8(offset + e.valid_up_to()))?;
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    serde_json::from_slice::<String>(&quoted).map_err(|_| ReadError::InvalidEscape(offset))
}
