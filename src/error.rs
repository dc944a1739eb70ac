//! Error types for literal encoding
//!
//! Only malformed *input* is reported through these types. Caller-side
//! invariant violations (an over-wide value handed to the alignment step, an
//! empty word handed to a numeric decoder) are assertions and panic instead.

use thiserror::Error;

/// Error type representing all possible conditions for invalidity
/// encountered when attempting to parse a string-type as a series
/// of hex-encoded bytes.
#[derive(Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Error)]
pub enum HexConvError {
    /// Error case for odd-length strings
    #[error("hex-conversion failed on odd-length string `{0}`")]
    OddParity(String),
    /// Error case for strings containing non-hex characters,
    /// i.e. anything not in `[0-9a-fA-F]`.
    #[error("hex-conversion failed on non-hex character in `{0}`")]
    NonHex(String),
}

/// Failure to convert a test literal into its byte representation.
///
/// The `Display` form of each variant is the message shown to the author
/// of the offending test expectation; it names the kind of literal that
/// could not be encoded.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[non_exhaustive]
pub enum ParserError {
    #[error("Boolean literal invalid.")]
    Boolean,
    #[error("Number encoding invalid.")]
    Number,
    #[error("Hex number encoding invalid.")]
    HexNumber(#[source] HexConvError),
    #[error("String encoding invalid.")]
    String,
    /// Encoding was requested for a literal whose type tag carries no
    /// byte representation (`Failure` or `None`).
    #[error("Literal has no encodable type.")]
    Untyped,
}

impl From<HexConvError> for ParserError {
    fn from(err: HexConvError) -> Self {
        Self::HexNumber(err)
    }
}

/// Type alias for Result with an error type of [`ParserError`]
pub type ParserResult<T> = std::result::Result<T, ParserError>;
