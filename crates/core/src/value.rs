//! Typed value data and the text codec
//!
//! This module defines:
//! - `ValueData`: the normalized, type-specific representation of a value
//! - `ValueData::parse`: the single validation/encoding entry point
//! - `ValueData::render`: the inverse, producing display text
//!
//! ## Codec Rules
//!
//! | Type          | Accepted text                          | Normalized form   |
//! |---------------|----------------------------------------|-------------------|
//! | REG_SZ        | any text                               | `String`          |
//! | REG_EXPAND_SZ | any text                               | `String`          |
//! | REG_DWORD     | base-10, or base-16 with `0x` prefix   | `u32`             |
//! | REG_BINARY    | hex digits only, at least one          | `Vec<u8>`         |
//! | REG_MULTI_SZ  | newline-delimited lines                | `Vec<String>`     |
//!
//! `render(parse(text))` is lossless for every accepted input, with two
//! normalizations: multi-string drops one trailing empty line, and binary
//! renders uppercase hex (byte-exact, not character-exact, for lowercase or
//! odd-length input — an odd trailing digit becomes a full byte).

use crate::error::{Error, Result};
use crate::types::ValueType;
use serde::{Deserialize, Serialize};

/// Normalized payload of a registry value
///
/// Callers never construct variants from raw text directly; all validation
/// lives in [`ValueData::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueData {
    /// Plain string, stored verbatim
    Sz(String),
    /// Expandable string, stored verbatim (no expansion performed)
    ExpandSz(String),
    /// Unsigned 32-bit integer
    Dword(u32),
    /// Raw bytes
    Binary(Vec<u8>),
    /// Ordered list of strings
    MultiSz(Vec<String>),
}

impl ValueData {
    /// Validate raw text against a type's rule and normalize it
    ///
    /// This is the only path from text to stored data; the tree and value
    /// table never inspect text themselves. Fails with [`Error::Validation`]
    /// carrying the type, the rejected input, and the broken rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use reghive_core::{ValueData, ValueType};
    ///
    /// let data = ValueData::parse(ValueType::Dword, "1024").unwrap();
    /// assert_eq!(data, ValueData::Dword(1024));
    ///
    /// assert!(ValueData::parse(ValueType::Dword, "abc").is_err());
    /// assert!(ValueData::parse(ValueType::Binary, "12G4").is_err());
    /// ```
    pub fn parse(value_type: ValueType, text: &str) -> Result<ValueData> {
        match value_type {
            ValueType::Sz => Ok(ValueData::Sz(text.to_string())),
            ValueType::ExpandSz => Ok(ValueData::ExpandSz(text.to_string())),
            ValueType::Dword => parse_dword(text).map(ValueData::Dword),
            ValueType::Binary => parse_binary(text).map(ValueData::Binary),
            ValueType::MultiSz => Ok(ValueData::MultiSz(parse_multi(text))),
        }
    }

    /// The type this payload belongs to
    pub fn value_type(&self) -> ValueType {
        match self {
            ValueData::Sz(_) => ValueType::Sz,
            ValueData::ExpandSz(_) => ValueType::ExpandSz,
            ValueData::Dword(_) => ValueType::Dword,
            ValueData::Binary(_) => ValueType::Binary,
            ValueData::MultiSz(_) => ValueType::MultiSz,
        }
    }

    /// Render the stored payload back to display text
    ///
    /// Dwords render in decimal regardless of the input base; binary renders
    /// as uppercase hex with no separators; multi-strings rejoin with `\n`.
    pub fn render(&self) -> String {
        match self {
            ValueData::Sz(s) | ValueData::ExpandSz(s) => s.clone(),
            ValueData::Dword(n) => n.to_string(),
            ValueData::Binary(bytes) => {
                let mut out = String::with_capacity(bytes.len() * 2);
                for byte in bytes {
                    out.push_str(&format!("{byte:02X}"));
                }
                out
            }
            ValueData::MultiSz(lines) => lines.join("\n"),
        }
    }
}

fn validation_error(value_type: ValueType, input: &str, reason: impl Into<String>) -> Error {
    Error::Validation {
        value_type,
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn parse_dword(text: &str) -> Result<u32> {
    if text.is_empty() {
        return Err(validation_error(ValueType::Dword, text, "empty input"));
    }
    let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        text.parse::<u32>()
    };
    parsed.map_err(|_| {
        validation_error(
            ValueType::Dword,
            text,
            "must be an integer in [0, 4294967295], base 10 or 0x-prefixed base 16",
        )
    })
}

fn parse_binary(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(validation_error(ValueType::Binary, text, "empty input"));
    }
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(validation_error(
            ValueType::Binary,
            text,
            format!("{bad:?} is not a hexadecimal digit"),
        ));
    }
    // Two digits per byte; an odd trailing digit stands alone as a full byte.
    let digits = text.as_bytes();
    let mut bytes = Vec::with_capacity((digits.len() + 1) / 2);
    for pair in digits.chunks(2) {
        let byte = match pair {
            [hi, lo] => (hex_nibble(*hi) << 4) | hex_nibble(*lo),
            [lone] => hex_nibble(*lone),
            _ => unreachable!("chunks(2) yields one or two digits"),
        };
        bytes.push(byte);
    }
    Ok(bytes)
}

fn hex_nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

fn parse_multi(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(String::from).collect();
    // One trailing empty line is dropped; interior empties are preserved.
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_string_types_verbatim() {
        for ty in [ValueType::Sz, ValueType::ExpandSz] {
            let data = ValueData::parse(ty, "hello \\ %PATH% world").unwrap();
            assert_eq!(data.value_type(), ty);
            assert_eq!(data.render(), "hello \\ %PATH% world");
        }
    }

    #[test]
    fn test_dword_decimal() {
        let data = ValueData::parse(ValueType::Dword, "1024").unwrap();
        assert_eq!(data, ValueData::Dword(1024));
        assert_eq!(data.render(), "1024");
    }

    #[test]
    fn test_dword_hex_prefix() {
        assert_eq!(
            ValueData::parse(ValueType::Dword, "0xFF").unwrap(),
            ValueData::Dword(255)
        );
        assert_eq!(
            ValueData::parse(ValueType::Dword, "0Xdeadbeef").unwrap(),
            ValueData::Dword(0xdead_beef)
        );
    }

    #[test]
    fn test_dword_bounds() {
        assert_eq!(
            ValueData::parse(ValueType::Dword, "4294967295").unwrap(),
            ValueData::Dword(u32::MAX)
        );
        let err = ValueData::parse(ValueType::Dword, "4294967296").unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_dword_rejects_garbage() {
        for input in ["", "abc", "12.5", "-1", "0x", "1e3"] {
            let err = ValueData::parse(ValueType::Dword, input).unwrap_err();
            assert!(
                matches!(err, Error::Validation { .. }),
                "expected Validation for {input:?}"
            );
        }
    }

    #[test]
    fn test_binary_even_length() {
        let data = ValueData::parse(ValueType::Binary, "deadBEEF").unwrap();
        assert_eq!(data, ValueData::Binary(vec![0xDE, 0xAD, 0xBE, 0xEF]));
        assert_eq!(data.render(), "DEADBEEF");
    }

    #[test]
    fn test_binary_odd_length_trailing_digit() {
        let data = ValueData::parse(ValueType::Binary, "ABC").unwrap();
        assert_eq!(data, ValueData::Binary(vec![0xAB, 0x0C]));
        assert_eq!(data.render(), "AB0C");
    }

    #[test]
    fn test_binary_rejects_non_hex() {
        for input in ["12G4", "zz", "12 34", "0x12", ""] {
            let err = ValueData::parse(ValueType::Binary, input).unwrap_err();
            assert!(
                matches!(err, Error::Validation { .. }),
                "expected Validation for {input:?}"
            );
        }
    }

    #[test]
    fn test_multi_preserves_interior_empty_lines() {
        let data = ValueData::parse(ValueType::MultiSz, "a\n\nb").unwrap();
        assert_eq!(
            data,
            ValueData::MultiSz(vec!["a".into(), "".into(), "b".into()])
        );
        assert_eq!(data.render(), "a\n\nb");
    }

    #[test]
    fn test_multi_drops_one_trailing_empty_line() {
        let data = ValueData::parse(ValueType::MultiSz, "a\nb\n").unwrap();
        assert_eq!(data, ValueData::MultiSz(vec!["a".into(), "b".into()]));
        assert_eq!(data.render(), "a\nb");

        // Only one is dropped; the second trailing newline is a real empty line.
        let data = ValueData::parse(ValueType::MultiSz, "a\n\n").unwrap();
        assert_eq!(data, ValueData::MultiSz(vec!["a".into(), "".into()]));
    }

    #[test]
    fn test_multi_empty_input_is_empty_list() {
        let data = ValueData::parse(ValueType::MultiSz, "").unwrap();
        assert_eq!(data, ValueData::MultiSz(vec![]));
        assert_eq!(data.render(), "");
    }

    #[test]
    fn test_error_carries_context() {
        let err = ValueData::parse(ValueType::Binary, "12G4").unwrap_err();
        match err {
            Error::Validation {
                value_type, input, ..
            } => {
                assert_eq!(value_type, ValueType::Binary);
                assert_eq!(input, "12G4");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_string_round_trip(text in ".*") {
            let data = ValueData::parse(ValueType::Sz, &text).unwrap();
            prop_assert_eq!(data.render(), text);
        }

        #[test]
        fn prop_dword_round_trip(n in any::<u32>()) {
            let data = ValueData::parse(ValueType::Dword, &n.to_string()).unwrap();
            prop_assert_eq!(data.render(), n.to_string());
        }

        #[test]
        fn prop_binary_byte_round_trip(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
            let rendered = ValueData::Binary(bytes.clone()).render();
            let reparsed = ValueData::parse(ValueType::Binary, &rendered).unwrap();
            prop_assert_eq!(reparsed, ValueData::Binary(bytes));
        }

        #[test]
        fn prop_multi_round_trip(lines in proptest::collection::vec("[^\n]*", 0..8)) {
            // A trailing empty line would be collapsed; test the stable form.
            let mut lines = lines;
            while lines.last().is_some_and(|line| line.is_empty()) {
                lines.pop();
            }
            let text = lines.join("\n");
            let data = ValueData::parse(ValueType::MultiSz, &text).unwrap();
            prop_assert_eq!(data, ValueData::MultiSz(lines));
        }
    }
}
