//! Conversion of test literals into their minimal byte representation
//!
//! Each converter accepts the raw text of one literal kind and produces the
//! bytes that literal stands for, before any alignment is applied. Malformed
//! input is reported as a [`ParserError`] naming the literal kind.

use tracing::debug;

use crate::abi::AbiTypeTag;
use crate::error::{ParserError, ParserResult};
use crate::hexstring::bytes_of_hex;
use crate::uint::U256;

/// Converts the tokens `true` and `false` into a single byte.
///
/// # Errors
///
/// Any other text, including differently-cased spellings, is rejected with
/// [`ParserError::Boolean`].
///
/// # Examples
///
/// ```
/// # use soltest_bytes::encode::convert_boolean;
/// assert_eq!(convert_boolean("true"), Ok(vec![0x01]));
/// assert!(convert_boolean("True").is_err());
/// ```
pub fn convert_boolean(literal: &str) -> ParserResult<Vec<u8>> {
    match literal {
        "true" => Ok(vec![1]),
        "false" => Ok(vec![0]),
        _ => {
            debug!(literal, "rejected boolean literal");
            Err(ParserError::Boolean)
        }
    }
}

/// Converts a base-10 integer literal into its compact big-endian encoding.
///
/// The literal is an optional `-` followed by ASCII digits. Negative
/// literals are encoded through their 256-bit two's complement.
///
/// # Errors
///
/// Returns [`ParserError::Number`] for malformed digits, including digit
/// separators and a leading `+`, and for values that do not fit in 256 bits.
pub fn convert_number(literal: &str) -> ParserResult<Vec<u8>> {
    match U256::parse_decimal(literal) {
        Some(value) => Ok(value.to_compact_big_endian()),
        None => {
            debug!(literal, "rejected number literal");
            Err(ParserError::Number)
        }
    }
}

/// Converts an even-length hex literal into raw bytes.
///
/// A `0x` prefix is accepted; each byte must be spelled with two digits.
///
/// # Errors
///
/// Returns [`ParserError::HexNumber`] for odd-length literals and for
/// literals containing non-hex characters.
pub fn convert_hex_number(literal: &str) -> ParserResult<Vec<u8>> {
    bytes_of_hex(literal).map_err(|err| {
        debug!(literal, %err, "rejected hex literal");
        ParserError::from(err)
    })
}

/// Converts a string literal into its raw UTF-8 bytes, without escaping.
///
/// Every `&str` is already valid UTF-8, so this never fails in practice; the
/// `Result` keeps the signature uniform with the other converters.
pub fn convert_string(literal: &str) -> ParserResult<Vec<u8>> {
    Ok(literal.as_bytes().to_vec())
}

/// Encodes `literal` with the converter matching `tag`.
///
/// `Hex` and `HexString` literals share the hex converter.
///
/// # Errors
///
/// Propagates the converter's error, or returns [`ParserError::Untyped`] for
/// the `Failure` and `None` tags.
pub fn encode_literal(literal: &str, tag: AbiTypeTag) -> ParserResult<Vec<u8>> {
    match tag {
        AbiTypeTag::UnsignedDec | AbiTypeTag::SignedDec => convert_number(literal),
        AbiTypeTag::Boolean => convert_boolean(literal),
        AbiTypeTag::Hex | AbiTypeTag::HexString => convert_hex_number(literal),
        AbiTypeTag::String => convert_string(literal),
        AbiTypeTag::Failure | AbiTypeTag::None => Err(ParserError::Untyped),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::HexConvError;

    #[test]
    fn booleans() {
        assert_eq!(convert_boolean("true"), Ok(vec![0x01]));
        assert_eq!(convert_boolean("false"), Ok(vec![0x00]));
        for bad in ["TRUE", "False", "1", "", " true"] {
            assert_eq!(convert_boolean(bad), Err(ParserError::Boolean));
        }
    }

    #[test]
    fn numbers() {
        assert_eq!(convert_number("0"), Ok(vec![0x00]));
        assert_eq!(convert_number("255"), Ok(vec![0xff]));
        assert_eq!(convert_number("256"), Ok(vec![0x01, 0x00]));
        assert_eq!(convert_number("-1"), Ok(vec![0xff; 32]));
        assert_eq!(convert_number("1.5"), Err(ParserError::Number));
        assert_eq!(convert_number("abc"), Err(ParserError::Number));
        for bad in ["1_000", "1__", "0_0", "+5", "-", ""] {
            assert_eq!(convert_number(bad), Err(ParserError::Number), "{bad:?}");
        }
        assert_eq!(
            convert_number(
                "115792089237316195423570985008687907853269984665640564039457584007913129639936"
            ),
            Err(ParserError::Number)
        );
    }

    #[test]
    fn hex_numbers() {
        assert_eq!(convert_hex_number("1234"), Ok(vec![0x12, 0x34]));
        assert_eq!(convert_hex_number("0x1234"), Ok(vec![0x12, 0x34]));
        assert_eq!(
            convert_hex_number("123"),
            Err(ParserError::HexNumber(HexConvError::OddParity("123".into())))
        );
        assert!(matches!(
            convert_hex_number("12zz"),
            Err(ParserError::HexNumber(HexConvError::NonHex(_)))
        ));
    }

    #[test]
    fn strings() {
        assert_eq!(convert_string("abc"), Ok(b"abc".to_vec()));
        assert_eq!(convert_string(""), Ok(Vec::new()));
        assert_eq!(convert_string("\\n"), Ok(vec![b'\\', b'n']));
    }

    #[test]
    fn dispatch_by_tag() {
        assert_eq!(encode_literal("7", AbiTypeTag::SignedDec), Ok(vec![0x07]));
        assert_eq!(encode_literal("true", AbiTypeTag::Boolean), Ok(vec![0x01]));
        assert_eq!(encode_literal("beef", AbiTypeTag::HexString), Ok(vec![0xbe, 0xef]));
        assert_eq!(encode_literal("x", AbiTypeTag::String), Ok(vec![b'x']));
        assert_eq!(encode_literal("1", AbiTypeTag::Failure), Err(ParserError::Untyped));
        assert_eq!(encode_literal("1", AbiTypeTag::None), Err(ParserError::Untyped));
    }
}
