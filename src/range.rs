//! Field-by-field rendering of an encoded buffer against its expectation
//!
//! An encoded buffer is the concatenation of the words of an ordered list of
//! [`Field`]s. Each field knows the text its author wrote, the bytes that
//! text encodes to, and the [`AbiType`] describing its width and notation.
//! [`format_bytes_range`] walks the buffer alongside the fields and renders
//! each slice either as the author's original text, when the bytes agree,
//! or as the decoded actual value wrapped in the mismatch marker.

use std::fmt::Write;

use tracing::trace;

use crate::abi::{AbiType, Alignment};
use crate::align::apply_align;
use crate::decode::format_bytes;
use crate::encode::encode_literal;
use crate::error::ParserResult;
use crate::fixed::WORD_SIZE;
use crate::highlight::Highlight;

/// One positional slot of an encoded buffer.
///
/// The byte offset of a field is not stored; it is the sum of the sizes of
/// the fields before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    raw_string: String,
    raw_bytes: Vec<u8>,
    abi_type: AbiType,
}

impl Field {
    #[must_use]
    pub fn new(raw_string: impl Into<String>, raw_bytes: Vec<u8>, abi_type: AbiType) -> Self {
        Self {
            raw_string: raw_string.into(),
            raw_bytes,
            abi_type,
        }
    }

    /// Encodes `literal` as `abi_type.tag` and justifies it within a word.
    ///
    /// The stored descriptor is the one returned by the alignment step, so it
    /// records the alignment that was applied.
    ///
    /// # Errors
    ///
    /// Returns the encoder's [`ParserError`](crate::error::ParserError) for
    /// malformed literals.
    ///
    /// # Panics
    ///
    /// Panics if `abi_type.size` is not one word, since the aligned encoding
    /// always occupies a full word, or if the literal encodes to more than
    /// one word.
    pub fn from_literal(
        literal: &str,
        abi_type: AbiType,
        alignment: Alignment,
    ) -> ParserResult<Self> {
        assert_eq!(
            abi_type.size, WORD_SIZE,
            "Field::from_literal: {}-byte field cannot hold a {WORD_SIZE}-byte aligned word",
            abi_type.size
        );
        let bytes = encode_literal(literal, abi_type.tag)?;
        let (abi_type, word) = apply_align(alignment, abi_type, &bytes);
        Ok(Self::new(literal, word.to_vec(), abi_type))
    }

    pub fn raw_string(&self) -> &str {
        &self.raw_string
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    pub const fn abi_type(&self) -> &AbiType {
        &self.abi_type
    }

    /// Number of bytes this field occupies in an encoded buffer.
    pub const fn size(&self) -> usize {
        self.abi_type.size
    }

    /// Returns `true` if `bytes` is exactly what this field's literal encodes to.
    #[must_use]
    pub fn matches_bytes(&self, bytes: &[u8]) -> bool {
        self.raw_bytes == bytes
    }
}

/// Renders `bytes` field by field, separated by `", "`.
///
/// A field whose slice matches its own encoding is rendered as its original
/// text. Any other slice is decoded with the field's descriptor and wrapped in
/// the mismatch marker, which is only visible when `highlight` is `true`. A
/// slice that has no rendering in the field's notation shows as an empty
/// marker.
///
/// # Panics
///
/// Panics if the fields together are wider than `bytes`.
#[must_use]
pub fn format_bytes_range(bytes: &[u8], fields: &[Field], highlight: bool) -> String {
    let palette = Highlight::new(highlight);
    let mut os = String::new();
    let mut offset = 0usize;

    for (ix, field) in fields.iter().enumerate() {
        let end = offset + field.size();
        assert!(
            end <= bytes.len(),
            "field {ix} spans bytes {offset}..{end} of a {}-byte buffer",
            bytes.len()
        );
        let range = &bytes[offset..end];

        if ix > 0 {
            os.push_str(", ");
        }

        let matched = field.matches_bytes(range);
        trace!(ix, offset, size = field.size(), matched, "formatting field");

        let res = if matched {
            os.write_str(field.raw_string())
        } else {
            let actual = format_bytes(range, field.abi_type()).unwrap_or_default();
            write!(os, "{}", palette.mark(actual))
        };
        match res {
            Ok(_) => (),
            Err(_) => unreachable!("write to String should never fail"),
        }

        offset = end;
    }
    os
}
