//! Classification of JSON number literals into the narrowest numeric variant.
//!
//! The rule looks only at the literal text:
//!
//! 1. text containing `.`, `e` or `E` is a float and becomes
//!    [`DynamicValue::Float64`];
//! 2. an integer within `i32::MIN..=i32::MAX` becomes [`DynamicValue::Int32`];
//! 3. an integer within `i64::MIN..=i64::MAX` becomes [`DynamicValue::Int64`];
//! 4. any wider integer is handled by [`BigIntegerPolicy`].

use crate::error::DecodeError;
use crate::DynamicValue;

/// What to do with integer literals that do not fit in an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BigIntegerPolicy {
    /// Fail with [`DecodeError::NumberOutOfRange`].
    #[default]
    Reject,
    /// Decode as [`DynamicValue::Float64`], accepting the precision loss.
    Float,
}

/// Whether the literal is written in floating-point form.
pub fn is_float_literal(text: &str) -> bool {
    text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
}

/// Classifies a JSON number literal.
///
/// `text` must be a complete RFC 8259 number; anything else, such as `+5`,
/// `01` or `.5`, fails with [`DecodeError::InvalidNumber`].
pub fn classify(text: &str, policy: BigIntegerPolicy) -> Result<DynamicValue, DecodeError> {
    if scan_number(text.as_bytes(), 0) != Some(text.len()) {
        return Err(DecodeError::InvalidNumber(text.to_owned()));
    }
    if is_float_literal(text) {
        return parse_float(text).map(DynamicValue::Float64);
    }
    match text.parse::<i64>() {
        Ok(int) => Ok(narrow_integer(int)),
        Err(_) => match policy {
            BigIntegerPolicy::Reject => {
                tracing::debug!(literal = text, "integer literal exceeds i64 range");
                Err(DecodeError::NumberOutOfRange(text.to_owned()))
            }
            BigIntegerPolicy::Float => {
                tracing::debug!(literal = text, "widening oversized integer literal to f64");
                parse_float(text).map(DynamicValue::Float64)
            }
        },
    }
}

/// Picks `Int32` when the value fits, `Int64` otherwise.
pub fn narrow_integer(int: i64) -> DynamicValue {
    match i32::try_from(int) {
        Ok(small) => DynamicValue::Int32(small),
        Err(_) => DynamicValue::Int64(int),
    }
}

/// Returns the end offset of the number literal starting at `start`, or
/// `None` when the bytes there do not follow the JSON number grammar.
pub(crate) fn scan_number(data: &[u8], start: usize) -> Option<usize> {
    let len = data.len();
    let mut x = start;
    if x < len && data[x] == b'-' {
        x += 1;
    }
    match data.get(x) {
        Some(b'0') => x += 1,
        Some(b'1'..=b'9') => {
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        _ => return None,
    }
    if x < len && data[x] == b'.' {
        x += 1;
        let digits = x;
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x == digits {
            return None;
        }
    }
    if x < len && (data[x] == b'e' || data[x] == b'E') {
        x += 1;
        if x < len && (data[x] == b'+' || data[x] == b'-') {
            x += 1;
        }
        let digits = x;
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x == digits {
            return None;
        }
    }
    Some(x)
}

fn parse_float(text: &str) -> Result<f64, DecodeError> {
    match text.parse::<f64>() {
        Ok(float) if float.is_finite() => Ok(float),
        _ => Err(DecodeError::NumberOutOfRange(text.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(text: &str) -> Result<DynamicValue, DecodeError> {
        classify(text, BigIntegerPolicy::Reject)
    }

    #[test]
    fn test_int32_bounds() {
        assert_eq!(reject("0"), Ok(DynamicValue::Int32(0)));
        assert_eq!(reject("-0"), Ok(DynamicValue::Int32(0)));
        assert_eq!(reject("2147483647"), Ok(DynamicValue::Int32(i32::MAX)));
        assert_eq!(reject("-2147483648"), Ok(DynamicValue::Int32(i32::MIN)));
    }

    #[test]
    fn test_int64_bounds() {
        assert_eq!(reject("2147483648"), Ok(DynamicValue::Int64(2_147_483_648)));
        assert_eq!(reject("-2147483649"), Ok(DynamicValue::Int64(-2_147_483_649)));
        assert_eq!(
            reject("9223372036854775807"),
            Ok(DynamicValue::Int64(i64::MAX))
        );
        assert_eq!(
            reject("-9223372036854775808"),
            Ok(DynamicValue::Int64(i64::MIN))
        );
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(reject("1.0"), Ok(DynamicValue::Float64(1.0)));
        assert_eq!(reject("1e2"), Ok(DynamicValue::Float64(100.0)));
        assert_eq!(reject("1E-2"), Ok(DynamicValue::Float64(0.01)));
        assert_eq!(reject("-5039.2"), Ok(DynamicValue::Float64(-5039.2)));
        assert_eq!(reject("1e-400"), Ok(DynamicValue::Float64(0.0)));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            reject("9223372036854775808"),
            Err(DecodeError::NumberOutOfRange("9223372036854775808".into()))
        );
        assert_eq!(
            reject("1e400"),
            Err(DecodeError::NumberOutOfRange("1e400".into()))
        );
        assert_eq!(
            reject("-1.5e309"),
            Err(DecodeError::NumberOutOfRange("-1.5e309".into()))
        );
    }

    #[test]
    fn test_non_json_text_is_rejected() {
        for text in ["+5", "01", "-", ".5", "1.", "1e", "0x10", " 1", "1 ", "", "NaN", "inf"] {
            assert_eq!(
                reject(text),
                Err(DecodeError::InvalidNumber(text.to_owned())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_scan_number_stops_at_literal_end() {
        assert_eq!(scan_number(b"[-12.5e+3,", 1), Some(9));
        assert_eq!(scan_number(b"0123", 0), Some(1));
        assert_eq!(scan_number(b"-", 0), None);
    }

    #[test]
    fn test_float_policy_for_big_integers() {
        assert_eq!(
            classify("9223372036854775808", BigIntegerPolicy::Float),
            Ok(DynamicValue::Float64(9_223_372_036_854_775_808.0))
        );
        // Policy does not touch literals that fit.
        assert_eq!(
            classify("12", BigIntegerPolicy::Float),
            Ok(DynamicValue::Int32(12))
        );
    }
}
