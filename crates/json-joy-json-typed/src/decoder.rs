//! `TypedDecoder`: builds a [`DynamicValue`] tree from a [`TokenCursor`].
//!
//! The decoder holds only its options, so one instance can be shared freely
//! between threads and reused for any number of documents.

use crate::cursor::{TokenCursor, TokenKind};
use crate::error::DecodeError;
use crate::number::{classify, BigIntegerPolicy};
use crate::{DynamicList, DynamicMap, DynamicValue};

/// Default bound on array/object nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum number of nested arrays/objects. The root container is depth 1.
    pub max_depth: usize,
    pub big_integers: BigIntegerPolicy,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            big_integers: BigIntegerPolicy::Reject,
        }
    }
}

impl DecoderOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_big_integers(mut self, policy: BigIntegerPolicy) -> Self {
        self.big_integers = policy;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypedDecoder {
    options: DecoderOptions,
}

impl TypedDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// Decodes the value under the cursor and advances past it.
    pub fn decode<C: TokenCursor + ?Sized>(
        &self,
        cursor: &mut C,
    ) -> Result<DynamicValue, DecodeError> {
        tracing::trace!(
            max_depth = self.options.max_depth,
            big_integers = ?self.options.big_integers,
            "decoding value"
        );
        self.read_any(cursor, 0)
    }

    /// Decodes a value that must be a JSON object.
    pub fn decode_map<C: TokenCursor + ?Sized>(
        &self,
        cursor: &mut C,
    ) -> Result<DynamicMap, DecodeError> {
        match cursor.peek()? {
            TokenKind::BeginObject => self.read_obj(cursor, 0),
            found => Err(DecodeError::unexpected("object", found)),
        }
    }

    /// Decodes a value that must be a JSON array.
    pub fn decode_list<C: TokenCursor + ?Sized>(
        &self,
        cursor: &mut C,
    ) -> Result<DynamicList, DecodeError> {
        match cursor.peek()? {
            TokenKind::BeginArray => self.read_arr(cursor, 0),
            found => Err(DecodeError::unexpected("array", found)),
        }
    }

    fn read_any<C: TokenCursor + ?Sized>(
        &self,
        cursor: &mut C,
        depth: usize,
    ) -> Result<DynamicValue, DecodeError> {
        match cursor.peek()? {
            TokenKind::BeginArray => self.read_arr(cursor, depth).map(DynamicValue::Array),
            TokenKind::BeginObject => self.read_obj(cursor, depth).map(DynamicValue::Object),
            TokenKind::String => Ok(DynamicValue::String(cursor.next_string()?)),
            TokenKind::Number => {
                let text = cursor.next_number()?;
                classify(text, self.options.big_integers)
            }
            TokenKind::Bool => Ok(DynamicValue::Bool(cursor.next_bool()?)),
            TokenKind::Null => {
                cursor.next_null()?;
                Ok(DynamicValue::Null)
            }
            found => Err(DecodeError::unexpected("value", found)),
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, DecodeError> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            tracing::debug!(max_depth = self.options.max_depth, "nesting depth limit hit");
            return Err(DecodeError::DepthLimitExceeded(self.options.max_depth));
        }
        Ok(depth)
    }

    fn read_arr<C: TokenCursor + ?Sized>(
        &self,
        cursor: &mut C,
        depth: usize,
    ) -> Result<DynamicList, DecodeError> {
        let depth = self.enter(depth)?;
        cursor.begin_array()?;
        let mut arr = Vec::new();
        while cursor.has_next()? {
            arr.push(self.read_any(cursor, depth)?);
        }
        cursor.end_array()?;
        Ok(arr)
    }

    fn read_obj<C: TokenCursor + ?Sized>(
        &self,
        cursor: &mut C,
        depth: usize,
    ) -> Result<DynamicMap, DecodeError> {
        let depth = self.enter(depth)?;
        cursor.begin_object()?;
        let mut obj = DynamicMap::new();
        while cursor.has_next()? {
            let key = cursor.next_name()?;
            let val = self.read_any(cursor, depth)?;
            obj.insert(key, val);
        }
        cursor.end_object()?;
        Ok(obj)
    }
}
