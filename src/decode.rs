//! Rendering of encoded words back into test-literal notation
//!
//! Every decoder takes the bytes of a single value, normally one full
//! [`Word`](crate::fixed::Word), and produces the text a test author would
//! have written for it. The choice of notation comes from the expected
//! [`AbiTypeTag`]; the bytes themselves carry no type information.
//!
//! # Signedness
//!
//! The encoder does not tag signedness in the byte stream, so the decimal
//! decoders infer it: a word whose first byte has its high bit set is shown
//! as a negative two's-complement value. A large unsigned value with that bit
//! set is therefore shown as negative.
//!
//! # Hex and `00`
//!
//! [`format_hex`] removes every `00` pair of characters from its output. This
//! is a textual substitution, not a trim of leading zero bytes, so `0x1200ab`
//! renders as `0x12ab`. Existing expectation files are written against this
//! output, so it is kept as is.

use std::fmt::Write;

use cfg_if::cfg_if;

use crate::abi::{AbiType, AbiTypeTag};
use crate::fixed::WORD_SIZE;
use crate::hexstring::hex_of_bytes;
use crate::uint::U256;

fn word_value(bytes: &[u8], decoder: &'static str) -> U256 {
    assert!(!bytes.is_empty(), "{decoder}: cannot decode an empty word");
    U256::from_big_endian(bytes)
}

/// Renders `bytes` as a decimal integer, negative if the high bit of the
/// first byte is set.
///
/// # Panics
///
/// Panics if `bytes` is empty or longer than one word.
#[must_use]
pub fn format_decimal(bytes: &[u8]) -> String {
    let value = word_value(bytes, "format_decimal");
    if bytes[0] & 0x80 != 0 {
        value.to_signed().to_string()
    } else {
        value.to_string()
    }
}

/// Decimal rendering for values expected to be unsigned.
///
/// Identical to [`format_decimal`]: a set high bit still yields a negative
/// number, which exposes values that were actually produced as signed.
#[must_use]
#[inline]
pub fn format_unsigned(bytes: &[u8]) -> String {
    format_decimal(bytes)
}

/// Decimal rendering for values expected to be signed.
#[must_use]
#[inline]
pub fn format_signed(bytes: &[u8]) -> String {
    format_decimal(bytes)
}

/// Renders `0` as `false` and `1` as `true`; any other value falls back to
/// its unsigned decimal form.
///
/// # Panics
///
/// Panics if `bytes` is empty or longer than one word.
#[must_use]
pub fn format_boolean(bytes: &[u8]) -> String {
    let value = word_value(bytes, "format_boolean");
    if value.is_zero() {
        "false".to_owned()
    } else if value.is_one() {
        "true".to_owned()
    } else {
        value.to_string()
    }
}

/// Renders `bytes` as `0x`-prefixed hex with every `00` pair removed.
///
/// # Examples
///
/// ```
/// # use soltest_bytes::decode::format_hex;
/// assert_eq!(format_hex(&[0x12, 0x00, 0xab]), "0x12ab");
/// ```
#[must_use]
pub fn format_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex_of_bytes(bytes)).replace("00", "")
}

/// Renders `bytes` in hex-string literal syntax, `hex"..."`, keeping every digit.
#[must_use]
pub fn format_hex_string(bytes: &[u8]) -> String {
    format!("hex\"{}\"", hex_of_bytes(bytes))
}

/// Renders `bytes` as a double-quoted string literal.
///
/// The bytes must be printable ASCII other than `"`, optionally followed by
/// zero padding. Anything else, including a non-zero byte after padding has
/// begun, yields `None`: the range does not cleanly represent a string.
///
/// # Examples
///
/// ```
/// # use soltest_bytes::decode::format_string;
/// assert_eq!(format_string(b"hi\0\0").as_deref(), Some("\"hi\""));
/// assert_eq!(format_string(b"h\0i"), None);
/// ```
#[must_use]
pub fn format_string(bytes: &[u8]) -> Option<String> {
    let text_len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let (text, padding) = bytes.split_at(text_len);

    if padding.iter().any(|&b| b != 0) {
        return None;
    }
    if !text.iter().all(|&b| is_print(b) && b != b'"') {
        return None;
    }

    let mut os = String::with_capacity(text.len() + 2);
    os.push('"');
    os.extend(text.iter().map(|&b| char::from(b)));
    os.push('"');
    Some(os)
}

#[inline]
const fn is_print(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

/// Diagnostic dump of a buffer, one word per line.
///
/// Each line is two spaces followed by the word's bytes in decimal, e.g.
/// `  [0, 0, ..., 1]`. An empty buffer renders as `[]`. A trailing partial
/// word is only shown when the `raw_bytes_tail` feature is enabled.
#[must_use]
pub fn format_raw_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "[]".to_owned();
    }

    let mut os = String::new();
    for word in word_chunks(bytes) {
        let listing: Vec<String> = word.iter().map(u8::to_string).collect();
        match writeln!(os, "  [{}]", listing.join(", ")) {
            Ok(_) => (),
            Err(_) => unreachable!("write to String should never fail"),
        }
    }
    os
}

cfg_if! {
    if #[cfg(feature = "raw_bytes_tail")] {
        fn word_chunks(bytes: &[u8]) -> std::slice::Chunks<'_, u8> {
            bytes.chunks(WORD_SIZE)
        }
    } else {
        fn word_chunks(bytes: &[u8]) -> std::slice::ChunksExact<'_, u8> {
            bytes.chunks_exact(WORD_SIZE)
        }
    }
}

/// Renders `bytes` in the notation selected by `abi_type`.
///
/// Returns `None` for the `Failure` and `None` tags, which have no notation,
/// and for string-typed bytes that [`format_string`] rejects.
#[must_use]
pub fn format_bytes(bytes: &[u8], abi_type: &AbiType) -> Option<String> {
    match abi_type.tag {
        AbiTypeTag::UnsignedDec => Some(format_unsigned(bytes)),
        AbiTypeTag::SignedDec => Some(format_signed(bytes)),
        AbiTypeTag::Boolean => Some(format_boolean(bytes)),
        AbiTypeTag::Hex => Some(format_hex(bytes)),
        AbiTypeTag::HexString => Some(format_hex_string(bytes)),
        AbiTypeTag::String => format_string(bytes),
        AbiTypeTag::Failure | AbiTypeTag::None => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::align::{align_left, align_right};
    use crate::encode::convert_number;
    use num_bigint::BigInt;
    use num_traits::One;

    fn word_of(value: u8) -> Vec<u8> {
        align_right(&[value]).to_vec()
    }

    #[test]
    fn decimal_roundtrip() {
        for literal in [
            "0",
            "1",
            "255",
            "-1",
            "-255",
            "57896044618658097711785492504343953926634992332820282019728792003956564819967",
            "-57896044618658097711785492504343953926634992332820282019728792003956564819968",
        ] {
            let word = align_right(&convert_number(literal).unwrap());
            assert_eq!(format_signed(word.as_slice()), literal);
            assert_eq!(format_unsigned(word.as_slice()), literal);
        }
    }

    #[test]
    fn decimal_roundtrip_every_width() {
        // the high bit of the word is only set for negatives, so 2^255 is skipped
        for bit in 0..=255usize {
            let power = BigInt::one() << bit;
            let mut literals = vec![(-&power).to_string(), (-&power + BigInt::one()).to_string()];
            if bit < 255 {
                literals.push(power.to_string());
                literals.push((&power - BigInt::one()).to_string());
            }
            for literal in literals {
                let word = align_right(&convert_number(&literal).unwrap());
                assert_eq!(format_signed(word.as_slice()), literal);
                assert_eq!(format_unsigned(word.as_slice()), literal);
            }
        }
    }

    #[test]
    fn large_unsigned_shows_negative() {
        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let word = align_right(&convert_number(max).unwrap());
        assert_eq!(format_unsigned(word.as_slice()), "-1");
    }

    #[test]
    fn short_input_sign_follows_first_byte() {
        // 0xff alone is 255 as a 256-bit word, so no negative reading exists
        assert_eq!(format_decimal(&[0xff]), "255");
        assert_eq!(format_decimal(&[0x7f, 0xff]), "32767");
    }

    #[test]
    fn booleans() {
        assert_eq!(format_boolean(&word_of(0)), "false");
        assert_eq!(format_boolean(&word_of(1)), "true");
        assert_eq!(format_boolean(&word_of(5)), "5");
    }

    #[test]
    #[should_panic(expected = "format_boolean: cannot decode an empty word")]
    fn boolean_empty() {
        let _ = format_boolean(&[]);
    }

    #[test]
    #[should_panic(expected = "format_decimal: cannot decode an empty word")]
    fn decimal_empty() {
        let _ = format_unsigned(&[]);
    }

    #[test]
    fn hex_strips_zero_pairs() {
        assert_eq!(format_hex(&[0x12, 0x00, 0xab]), "0x12ab");
        assert_eq!(format_hex(align_right(&[0x12, 0x00]).as_slice()), "0x12");
        assert_eq!(format_hex(&[0u8; 32]), "0x");
        // pairs are matched on characters, not byte boundaries
        assert_eq!(format_hex(&[0x10, 0x01]), "0x11");
    }

    #[test]
    fn hex_string_keeps_digits() {
        let word = align_left(&[0xde, 0xad]);
        let text = format_hex_string(word.as_slice());
        assert!(text.starts_with("hex\"dead0000"));
        assert!(text.ends_with('"'));
        assert_eq!(text.len(), "hex\"\"".len() + 64);
    }

    #[test]
    fn strings() {
        assert_eq!(
            format_string(align_left(b"hello world").as_slice()).as_deref(),
            Some("\"hello world\"")
        );
        assert_eq!(format_string(&[0u8; 32]).as_deref(), Some("\"\""));
        assert_eq!(format_string(align_left(b"a\x01").as_slice()), None);
        assert_eq!(format_string(align_left(b"say \"hi\"").as_slice()), None);
        assert_eq!(format_string(align_left(b"a\0b").as_slice()), None);
        assert_eq!(format_string(align_right(b"late").as_slice()), None);
    }

    #[test]
    fn raw_bytes() {
        assert_eq!(format_raw_bytes(&[]), "[]");

        let mut buf = word_of(1);
        buf.extend(word_of(2));
        let dump = format_raw_bytes(&buf);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  [0, 0, "));
        assert!(lines[0].ends_with(", 0, 1]"));
        assert!(lines[1].ends_with(", 0, 2]"));
    }

    #[cfg(not(feature = "raw_bytes_tail"))]
    #[test]
    fn raw_bytes_drops_partial_tail() {
        let mut buf = word_of(1);
        buf.extend([9, 9]);
        assert_eq!(format_raw_bytes(&buf).lines().count(), 1);
        assert_eq!(format_raw_bytes(&[9, 9]), "");
    }

    #[cfg(feature = "raw_bytes_tail")]
    #[test]
    fn raw_bytes_keeps_partial_tail() {
        let mut buf = word_of(1);
        buf.extend([9, 9]);
        let dump = format_raw_bytes(&buf);
        assert_eq!(dump.lines().last(), Some("  [9, 9]"));
    }

    #[test]
    fn dispatch_by_tag() {
        let word = word_of(1);
        let ty = |tag| AbiType::new(tag);
        assert_eq!(format_bytes(&word, &ty(AbiTypeTag::UnsignedDec)).as_deref(), Some("1"));
        assert_eq!(format_bytes(&word, &ty(AbiTypeTag::SignedDec)).as_deref(), Some("1"));
        assert_eq!(format_bytes(&word, &ty(AbiTypeTag::Boolean)).as_deref(), Some("true"));
        assert_eq!(format_bytes(&word, &ty(AbiTypeTag::Hex)).as_deref(), Some("0x01"));
        assert!(format_bytes(&word, &ty(AbiTypeTag::HexString))
            .unwrap()
            .ends_with("01\""));
        assert_eq!(format_bytes(&word, &ty(AbiTypeTag::String)), None);
        assert_eq!(format_bytes(&word, &ty(AbiTypeTag::Failure)), None);
        assert_eq!(format_bytes(&word, &ty(AbiTypeTag::None)), None);
    }
}
