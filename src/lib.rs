//! Word-level codec for ABI-encoding test expectations
//!
//! # Overview
//!
//! Test expectations for an ABI encoder are written by hand as short
//! literals: decimal numbers, hex numbers, booleans, and quoted strings. The
//! encoder under test produces a buffer of concatenated 32-byte words. This
//! library sits between the two.
//!
//! In one direction, each literal is converted into its minimal byte
//! representation ([`encode`]) and justified within a word ([`align`]). In
//! the other, a word is rendered back into literal notation ([`decode`]),
//! with the notation chosen by the literal's expected [`AbiTypeTag`].
//!
//! [`range::format_bytes_range`] composes the two. Given the actual buffer
//! and the ordered [`Field`]s of an expectation, it reproduces the author's
//! text for every field the buffer agrees with, and shows the decoded actual
//! value of every other field inside a mismatch marker, so the two can be
//! compared at a glance.
//!
//! # Errors and invariants
//!
//! Malformed literals are reported as [`ParserError`]. Violations of caller
//! invariants, such as handing a value wider than a word to the alignment
//! step or an empty word to a numeric decoder, panic.
//!
//! # Features
//!
//! * `serde_impls`: `Serialize` for the descriptor types and [`FixedBytes`]
//! * `raw_bytes_tail`: [`decode::format_raw_bytes`] also dumps a trailing
//!   partial word

pub mod abi;
pub mod align;
pub mod decode;
pub mod encode;
pub mod error;
pub mod fixed;
pub mod highlight;
pub mod hexstring;
pub mod range;
pub mod uint;

pub use crate::abi::{AbiType, AbiTypeTag, Alignment};
pub use crate::align::{align_left, align_right, apply_align};
pub use crate::decode::format_bytes;
pub use crate::encode::encode_literal;
pub use crate::error::{HexConvError, ParserError, ParserResult};
pub use crate::fixed::{FixedBytes, Word, WORD_SIZE};
pub use crate::highlight::Highlight;
pub use crate::range::{format_bytes_range, Field};
pub use crate::uint::U256;
