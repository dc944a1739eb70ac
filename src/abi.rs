//! Type descriptors for test-expectation values
//!
//! An [`AbiType`] travels alongside every literal in a test expectation. It
//! names how the literal's word should be rendered back to text, how many
//! bytes the literal occupies in the encoded buffer, and how the literal was
//! justified within its word.

#[cfg(feature = "serde_impls")]
use serde::Serialize;

use crate::fixed::WORD_SIZE;

/// Classification of how a word's bytes are rendered back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub enum AbiTypeTag {
    UnsignedDec,
    SignedDec,
    Boolean,
    Hex,
    HexString,
    String,
    /// A literal that was recognized but could not be typed
    Failure,
    #[default]
    None,
}

/// Justification of a value within its 32-byte word.
///
/// `None` means the author of the literal did not declare an alignment;
/// the alignment step then falls back to right-justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub enum Alignment {
    #[default]
    None,
    Left,
    Right,
}

/// Descriptor of a single value in an encoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_impls", derive(Serialize))]
pub struct AbiType {
    pub tag: AbiTypeTag,
    /// Number of bytes the value occupies in the encoded buffer
    pub size: usize,
    pub align: Alignment,
    /// Whether the alignment was spelled out by the literal's author
    pub align_declared: bool,
}

impl AbiType {
    /// Descriptor for a value of type `tag` occupying one full word.
    #[must_use]
    pub const fn new(tag: AbiTypeTag) -> Self {
        Self::with_size(tag, WORD_SIZE)
    }

    #[must_use]
    pub const fn with_size(tag: AbiTypeTag, size: usize) -> Self {
        Self {
            tag,
            size,
            align: Alignment::Right,
            align_declared: false,
        }
    }

    /// Returns a copy of this descriptor justified by `align`.
    #[must_use]
    pub const fn aligned(self, align: Alignment, declared: bool) -> Self {
        Self {
            align,
            align_declared: declared,
            ..self
        }
    }
}

impl Default for AbiType {
    fn default() -> Self {
        Self::new(AbiTypeTag::None)
    }
}
