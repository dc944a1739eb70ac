//! Zero-padding of short byte-sequences to a full word
//!
//! Big-endian integers are right-justified within their word, which makes
//! right alignment the default. Left alignment exists for fixed-size byte and
//! string literals, which are naturally left-justified.

use crate::abi::{AbiType, Alignment};
use crate::fixed::{Word, WORD_SIZE};

/// Pads `bytes` with trailing zeros up to a full word.
///
/// # Panics
///
/// Panics if `bytes` is longer than [`WORD_SIZE`]; such input means the
/// caller produced an over-wide value and is not recoverable here.
///
/// # Examples
///
/// ```
/// # use soltest_bytes::align::align_left;
/// let word = align_left(&[0xab]);
/// assert_eq!(word.as_slice()[0], 0xab);
/// assert_eq!(word.as_slice()[31], 0x00);
/// ```
#[must_use]
pub fn align_left(bytes: &[u8]) -> Word {
    assert_fits(bytes);
    let mut word = [0u8; WORD_SIZE];
    word[..bytes.len()].copy_from_slice(bytes);
    Word::from_array(word)
}

/// Pads `bytes` with leading zeros up to a full word.
///
/// # Panics
///
/// Panics if `bytes` is longer than [`WORD_SIZE`].
#[must_use]
pub fn align_right(bytes: &[u8]) -> Word {
    assert_fits(bytes);
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - bytes.len()..].copy_from_slice(bytes);
    Word::from_array(word)
}

#[inline]
fn assert_fits(bytes: &[u8]) {
    assert!(
        bytes.len() <= WORD_SIZE,
        "cannot align {}-byte value into a {WORD_SIZE}-byte word",
        bytes.len()
    );
}

/// Justifies `bytes` within a word according to `alignment`.
///
/// Returns the padded word together with a copy of `abi_type` that records
/// the alignment actually applied. The copy is marked as explicitly aligned
/// whenever `alignment` is not [`Alignment::None`]; an existing mark is never
/// cleared. A later rendering of the value can then reproduce the author's
/// notation even though the padded word itself no longer shows it.
///
/// # Panics
///
/// Panics if `bytes` is longer than [`WORD_SIZE`].
#[must_use]
pub fn apply_align(alignment: Alignment, abi_type: AbiType, bytes: &[u8]) -> (AbiType, Word) {
    let declared = abi_type.align_declared || alignment != Alignment::None;
    match alignment {
        Alignment::Left => (abi_type.aligned(Alignment::Left, declared), align_left(bytes)),
        Alignment::Right | Alignment::None => {
            (abi_type.aligned(Alignment::Right, declared), align_right(bytes))
        }
    }
}
