//! Conversion between byte-sequences and hex-encoded strings
//!
//! By *hex-string* in this context, we mean a string of ASCII characters
//! matching the regular expression `([0-9a-fA-F]{2})*`, optionally preceded
//! by a `0x` prefix. Case is not enforced when parsing; output is always
//! lowercase.
//!
//! Each aligned pair of characters represents a single byte in the corresponding
//! position: `"deadbeef" ~ [0xde, 0xad, 0xbe, 0xef]`

use crate::error::HexConvError;
use std::fmt::Write;

/// Formats a sequence of bytes into an undelimited lowercase hexadecimal `String`
///
/// # Examples
///
/// ```
/// # use soltest_bytes::hexstring::hex_of_bytes;
/// assert_eq!(hex_of_bytes([0xde, 0xad, 0xbe, 0xef]), String::from("deadbeef"));
/// ```
#[must_use]
pub fn hex_of_bytes<T>(val: T) -> String
where
    T: AsRef<[u8]>,
{
    let bytes = val.as_ref();
    let mut hex: String = String::with_capacity(bytes.len() * 2);
    match write_all_hex(bytes, &mut hex) {
        Ok(_) => (),
        Err(_) => unreachable!("write to String should never fail"),
    }
    hex
}

pub(crate) fn write_all_hex(bytes: &[u8], tgt: &mut impl Write) -> std::fmt::Result {
    for &byte in bytes {
        write!(tgt, "{byte:02x}")?
    }
    Ok(())
}

/// Strips a leading `0x` or `0X` from `src`, if present.
#[must_use]
pub fn strip_hex_prefix(src: &str) -> &str {
    src.strip_prefix("0x")
        .or_else(|| src.strip_prefix("0X"))
        .unwrap_or(src)
}

/// Attempt to parse a hexadecimally encoded string, returning either
/// a `Vec<u8>` holding the decoded bytes or an error containing the invalid
/// string.
///
/// A leading `0x` is accepted and ignored.
///
/// # Errors
///
/// If the digits following the optional prefix have odd parity,
/// `Err(OddParity)` is returned.
///
/// Otherwise, if the string contains any character that is not a valid
/// hexadecimal digit (case-insensitive), returns `Err(NonHex(s))`.
///
/// # Examples
///
/// ```
/// # use soltest_bytes::hexstring::bytes_of_hex;
/// assert_eq!(Ok(vec![0xde, 0xad, 0xbe, 0xef]), bytes_of_hex("deadbeef"));
/// assert_eq!(Ok(vec![0x12, 0x34]), bytes_of_hex("0x1234"));
/// ```
pub fn bytes_of_hex(src: &str) -> Result<Vec<u8>, HexConvError> {
    let digits = strip_hex_prefix(src);
    let ascii_len = digits.len();

    if ascii_len == 0 {
        return Ok(Vec::new());
    } else if ascii_len % 2 != 0 {
        return Err(HexConvError::OddParity(src.to_owned()));
    }

    let mut dst = Vec::with_capacity(ascii_len / 2);

    for pair in digits.as_bytes().chunks_exact(2) {
        match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(hi), Some(lo)) => dst.push((hi << 4) | lo),
            _ => return Err(HexConvError::NonHex(src.to_owned())),
        }
    }
    Ok(dst)
}

#[inline]
const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
