//! Fixed-length byte-sequences
//!
//! This module contains the definition of [`FixedBytes<N>`], an opaque
//! byte-sequence whose width is the const generic `N`, and the alias
//! [`Word`] for the 32-byte unit that every aligned test value occupies.

use std::convert::TryFrom;
#[cfg(feature = "serde_impls")]
use serde::Serialize;

/// Number of bytes in a single ABI word.
pub const WORD_SIZE: usize = 32;

/// A fixed 32-byte big-endian word, as produced by the alignment step.
pub type Word = FixedBytes<WORD_SIZE>;

/// Simple type for holding fixed-length binary sequences.
///
/// While [FixedBytes<N>] is naturally implemented around `[u8; N]`,
/// it is preferable to use this type instead, in order to signal to
/// downstream consumers that the data in question is specifically
/// intended to be interpreted as an encoded value, and not as an arbitrary
/// scratch buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedBytes<const N: usize>([u8; N]);

#[cfg(feature = "serde_impls")]
impl<const N: usize> Serialize for FixedBytes<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(&self.0)
    }
}

impl<const N: usize> FixedBytes<N> {
    /// Constructs a [`FixedBytes<N>`] from a byte-array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use soltest_bytes::fixed::FixedBytes;
    /// assert_eq!(FixedBytes::from_array([1, 2, 3u8]).as_slice(), &[1, 2, 3u8]);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn from_array(arr: [u8; N]) -> FixedBytes<N> {
        Self(arr)
    }

    /// Returns the contents of this [`FixedBytes<N>`] as a slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length, in bytes, of this [FixedBytes<N>].
    ///
    /// # Note
    ///
    /// The return value will always be equal to `N`.
    #[inline(always)]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns a freshly-allocated [Vec<u8>] holding the binary contents of this [FixedBytes<N>].
    #[inline(always)]
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl<const N: usize> std::fmt::LowerHex for FixedBytes<N> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        if fmt.alternate() {
            fmt.write_str("0x")?;
        }
        crate::hexstring::write_all_hex(&self.0, fmt)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<'a, const N: usize> TryFrom<&'a [u8]> for FixedBytes<N> {
    type Error = <[u8; N] as TryFrom<&'a [u8]>>::Error;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        Ok(Self(value.try_into()?))
    }
}
