//! `JsonEncoder`: compact JSON writer for [`DynamicValue`].
//!
//! Each numeric variant is written in a form that decodes back to the same
//! variant: integers as plain digits, floats always with a fraction or an
//! exponent (`3.0`, `1e300`).

use crate::number::is_float_literal;
use crate::DynamicValue;

pub struct JsonEncoder {
    buf: Vec<u8>,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn encode(&mut self, value: &DynamicValue) -> Vec<u8> {
        self.buf.clear();
        self.write_any(value);
        std::mem::take(&mut self.buf)
    }

    pub fn encode_to_string(&mut self, value: &DynamicValue) -> String {
        // Only valid UTF-8 is ever written.
        String::from_utf8(self.encode(value)).unwrap_or_default()
    }

    pub fn write_any(&mut self, value: &DynamicValue) {
        match value {
            DynamicValue::Null => self.write_null(),
            DynamicValue::Bool(b) => self.write_boolean(*b),
            DynamicValue::String(s) => self.write_str(s),
            DynamicValue::Int32(i) => self.write_integer(i64::from(*i)),
            DynamicValue::Int64(i) => self.write_integer(*i),
            DynamicValue::Float64(f) => self.write_float(*f),
            DynamicValue::Array(arr) => self.write_arr(arr),
            DynamicValue::Object(obj) => self.write_obj(obj),
        }
    }

    pub fn write_null(&mut self) {
        self.buf.extend_from_slice(b"null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.buf
            .extend_from_slice(if b { b"true".as_slice() } else { b"false" });
    }

    pub fn write_integer(&mut self, int: i64) {
        self.buf.extend_from_slice(int.to_string().as_bytes());
    }

    /// NaN and infinities have no JSON literal and are written as `null`.
    pub fn write_float(&mut self, float: f64) {
        if !float.is_finite() {
            self.write_null();
            return;
        }
        self.buf.extend_from_slice(format_float(float).as_bytes());
    }

    /// Write a JSON-encoded string (with escaping).
    pub fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();
        // Fast path: pure ASCII printable, no quotes or backslash
        if bytes
            .iter()
            .all(|&b| (32..=126).contains(&b) && b != b'"' && b != b'\\')
        {
            self.buf.reserve(bytes.len() + 2);
            self.buf.push(b'"');
            self.buf.extend_from_slice(bytes);
            self.buf.push(b'"');
            return;
        }
        // Fall back to serde_json for proper escaping
        let json_str = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.buf.extend_from_slice(json_str.as_bytes());
    }

    pub fn write_arr(&mut self, arr: &[DynamicValue]) {
        self.buf.push(b'[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.buf.push(b',');
            }
            self.write_any(item);
        }
        self.buf.push(b']');
    }

    pub fn write_obj<'a, I>(&mut self, obj: I)
    where
        I: IntoIterator<Item = (&'a String, &'a DynamicValue)>,
    {
        self.buf.push(b'{');
        for (i, (key, val)) in obj.into_iter().enumerate() {
            if i > 0 {
                self.buf.push(b',');
            }
            self.write_str(key);
            self.buf.push(b':');
            self.write_any(val);
        }
        self.buf.push(b'}');
    }
}

/// Shortest round-trip representation that still reads as a float literal.
fn format_float(f: f64) -> String {
    // `Debug` uses exponent notation for very large and very small magnitudes
    // and keeps a trailing `.0` on integral values.
    let mut s = format!("{:?}", f);
    if !is_float_literal(&s) {
        s.push_str(".0");
    }
    s
}
