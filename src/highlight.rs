//! ANSI markup for mismatched values.
//!
//! A mismatch is rendered on a red background. When highlighting is off the
//! palette is empty and the text passes through unchanged.

use std::fmt::{self, Display};

/// ANSI palette used when rendering decoded byte ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub mismatch: &'static str,
    pub reset: &'static str,
}

impl Default for Highlight {
    fn default() -> Self {
        Self::OFF
    }
}

impl Highlight {
    /// Highlighting enabled (ANSI escape codes).
    pub const ON: Self = Self {
        mismatch: "\x1b[41m",
        reset: "\x1b[0m",
    };

    /// Highlighting disabled (empty strings).
    pub const OFF: Self = Self {
        mismatch: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::ON
        } else {
            Self::OFF
        }
    }

    /// Wraps `text` in the mismatch marker.
    pub fn mark<T: Display>(self, text: T) -> Marked<T> {
        Marked {
            palette: self,
            text,
        }
    }
}

/// A value wrapped in the mismatch marker of a [`Highlight`] palette.
pub struct Marked<T> {
    palette: Highlight,
    text: T,
}

impl<T: Display> Display for Marked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.palette.mismatch, self.text, self.palette.reset)
    }
}
