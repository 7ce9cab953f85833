// ABOUTME: Lenient decoding and canonical encoding of numeric values held in the key-value store
// ABOUTME: Accepts JSON numbers, JSON strings holding numbers, and plain numeric strings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde_json::Value;

/// Decode a stored value into a number
///
/// Older data holds the same quantity in several shapes: `5`, `"5"` (a JSON
/// string) and `5` written as plain text. Anything that is not a finite
/// number in one of those shapes decodes as `None`.
#[must_use]
pub fn decode_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Number(number)) => number.as_f64().filter(|v| v.is_finite()),
        Ok(Value::String(inner)) => parse_plain(&inner),
        Ok(_) => None,
        Err(_) => parse_plain(trimmed),
    }
}

/// Encode a number the way it is written to the store (`5`, `7.5`)
#[must_use]
pub fn encode_number(value: f64) -> String {
    // f64 Display already drops a zero fraction
    format!("{value}")
}

fn parse_plain(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_every_stored_shape() {
        assert_eq!(decode_number("5"), Some(5.0));
        assert_eq!(decode_number("\"7\""), Some(7.0));
        assert_eq!(decode_number("\"7.5\""), Some(7.5));
        assert_eq!(decode_number(" 12 "), Some(12.0));
        assert_eq!(decode_number("8.25"), Some(8.25));
    }

    #[test]
    fn test_decode_rejects_non_numbers() {
        assert_eq!(decode_number(""), None);
        assert_eq!(decode_number("\"\""), None);
        assert_eq!(decode_number("null"), None);
        assert_eq!(decode_number("abc"), None);
        assert_eq!(decode_number("[1]"), None);
        assert_eq!(decode_number("NaN"), None);
    }

    #[test]
    fn test_encode_drops_zero_fraction() {
        assert_eq!(encode_number(5.0), "5");
        assert_eq!(encode_number(7.5), "7.5");
        assert_eq!(decode_number(&encode_number(1234.0)), Some(1234.0));
    }
}
