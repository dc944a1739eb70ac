//! 256-bit unsigned words with a two's-complement signed view
//!
//! [`U256`] is a thin newtype over [`BigUint`] whose value is confined to
//! `[0, 2^256)`. Signed literals are folded into this range through their
//! two's-complement representation, so a single type covers everything a
//! 32-byte word can hold; [`U256::to_signed`] recovers the negative reading.

use std::fmt::Display;
use std::str::FromStr;

use ::lazy_static::lazy_static;
use ::num_bigint::{BigInt, BigUint, Sign};
use ::num_traits::{One, Zero};

use crate::fixed::WORD_SIZE;

lazy_static! {
    /// `2^256`, one past the largest representable word
    static ref MODULUS: BigUint = BigUint::one() << (WORD_SIZE * 8);
    /// `2^255`, the smallest word whose high bit is set
    static ref SIGN_BIT: BigUint = BigUint::one() << (WORD_SIZE * 8 - 1);
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Default)]
#[repr(transparent)]
pub struct U256(BigUint);

impl U256 {
    /// Interprets up to 32 bytes as a big-endian unsigned integer.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is longer than a single word.
    #[must_use]
    pub fn from_big_endian(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() <= WORD_SIZE,
            "U256::from_big_endian: {}-byte input exceeds {WORD_SIZE}-byte word",
            bytes.len()
        );
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Parses a base-10 literal: an optional `-` followed by ASCII digits.
    ///
    /// Negative values in `[-(2^255), 0)` are mapped to their 256-bit
    /// two's-complement encoding. Returns `None` for malformed digits, for a
    /// leading `+`, and for any value outside `[-(2^255), 2^256)`.
    #[must_use]
    pub fn parse_decimal(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let (sign, magnitude) = BigInt::from_str(text).ok()?.into_parts();
        match sign {
            Sign::Minus if magnitude > *SIGN_BIT => None,
            Sign::Minus => Some(Self(&*MODULUS - magnitude)),
            _ if magnitude >= *MODULUS => None,
            _ => Some(Self(magnitude)),
        }
    }

    /// Big-endian encoding without leading zero bytes.
    ///
    /// Zero is encoded as the single byte `0x00`.
    #[must_use]
    pub fn to_compact_big_endian(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// Returns `true` if the most-significant bit of the 256-bit word is set.
    #[must_use]
    pub fn high_bit_set(&self) -> bool {
        self.0 >= *SIGN_BIT
    }

    /// Two's-complement reading of this word as a signed 256-bit integer.
    #[must_use]
    pub fn to_signed(&self) -> BigInt {
        if self.high_bit_set() {
            BigInt::from(self.0.clone()) - BigInt::from(MODULUS.clone())
        } else {
            BigInt::from(self.0.clone())
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl std::fmt::Debug for U256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "U256({})", &self.0)
    }
}

impl Display for U256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        <BigUint as Display>::fmt(&self.0, f)
    }
}

impl From<U256> for BigUint {
    fn from(val: U256) -> Self {
        val.0
    }
}

macro_rules! impl_word_from {
    ($src:ty) => {
        impl From<$src> for U256 {
            fn from(val: $src) -> Self {
                Self(BigUint::from(val))
            }
        }
    };
}

impl_word_from!(u8);
impl_word_from!(u16);
impl_word_from!(u32);
impl_word_from!(u64);
impl_word_from!(u128);
