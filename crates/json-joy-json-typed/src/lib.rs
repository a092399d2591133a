//! Schema-less JSON decoding that keeps integers as integers.
//!
//! Generic JSON decoders usually collapse every number into one `f64`, so a
//! document like `{"total":153}` comes back as `153.0`. This crate decodes
//! into [`DynamicValue`], choosing the narrowest numeric variant from each
//! literal's text:
//!
//! - `153` → [`DynamicValue::Int32`]
//! - `3000000000` → [`DynamicValue::Int64`]
//! - `5039.2`, `1e3` → [`DynamicValue::Float64`]
//!
//! # Example
//!
//! ```
//! use json_joy_json_typed::{from_str, DynamicValue};
//!
//! let value = from_str(r#"{"total":153,"amt":5039.2,"list":[1,2,3]}"#).unwrap();
//! assert_eq!(value.get("total"), Some(&DynamicValue::Int32(153)));
//! assert_eq!(value.get("amt"), Some(&DynamicValue::Float64(5039.2)));
//! assert_eq!(value.to_string(), r#"{"total":153,"amt":5039.2,"list":[1,2,3]}"#);
//! ```
//!
//! The decoder works on any [`TokenCursor`]; [`JsonReader`] is the built-in
//! cursor over a byte slice.

mod cursor;
mod decoder;
mod encoder;
mod error;
pub mod field;
mod number;
mod reader;
mod serde_impl;
mod value;

pub use cursor::{TokenCursor, TokenKind};
pub use decoder::{DecoderOptions, TypedDecoder, DEFAULT_MAX_DEPTH};
pub use encoder::JsonEncoder;
pub use error::DecodeError;
pub use number::{classify, is_float_literal, BigIntegerPolicy};
pub use reader::{JsonReader, ReadError};
pub use value::{DynamicList, DynamicMap, DynamicValue};

/// Decodes a complete JSON document with default options.
pub fn from_str(input: &str) -> Result<DynamicValue, DecodeError> {
    from_slice(input.as_bytes())
}

/// Decodes a complete JSON document from UTF-8 bytes with default options.
pub fn from_slice(input: &[u8]) -> Result<DynamicValue, DecodeError> {
    from_slice_with(input, DecoderOptions::default())
}

/// Decodes a complete JSON document with the given options.
pub fn from_slice_with(
    input: &[u8],
    options: DecoderOptions,
) -> Result<DynamicValue, DecodeError> {
    let mut reader = JsonReader::new(input);
    let value = TypedDecoder::with_options(options).decode(&mut reader)?;
    reader.finish()?;
    Ok(value)
}

/// Decodes a document whose root must be an object.
pub fn decode_map(input: &str) -> Result<DynamicMap, DecodeError> {
    let mut reader = JsonReader::new(input);
    let map = TypedDecoder::new().decode_map(&mut reader)?;
    reader.finish()?;
    Ok(map)
}

/// Decodes a document whose root must be an array.
pub fn decode_list(input: &str) -> Result<DynamicList, DecodeError> {
    let mut reader = JsonReader::new(input);
    let list = TypedDecoder::new().decode_list(&mut reader)?;
    reader.finish()?;
    Ok(list)
}

/// Compact JSON text of a value.
pub fn to_string(value: &DynamicValue) -> String {
    JsonEncoder::new().encode_to_string(value)
}

/// Compact JSON bytes of a value.
pub fn to_vec(value: &DynamicValue) -> Vec<u8> {
    JsonEncoder::new().encode(value)
}
