//! # Error Hierarchy
//!
//! Structured error types for the core crate, built with `thiserror`.
//! Each variant carries the offending input so a log line is enough to
//! diagnose the failure.

use thiserror::Error;

/// A color string that is not a `#rrggbb` hex triplet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Wrong number of hex digits after the optional `#`.
    #[error("invalid color \"{0}\" (expected #rrggbb)")]
    InvalidLength(String),

    /// Six characters were present but at least one is not a hex digit.
    #[error("invalid color \"{0}\" (non-hex digit)")]
    InvalidDigit(String),
}

/// A raw document that cannot be turned into a palette at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The document is not a JSON object.
    #[error("palette document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// The document has no string `id` field.
    #[error("palette document has no string id")]
    MissingId,
}

/// Rejected edit on a [`crate::PaletteForm`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No color exists at the given position.
    #[error("no color at index {index} (form has {len})")]
    ColorIndex {
        /// Requested position.
        index: usize,
        /// Number of colors in the buffer.
        len: usize,
    },

    /// No text pair exists at the given position.
    #[error("no text pair at index {index} (form has {len})")]
    TextPairIndex {
        /// Requested position.
        index: usize,
        /// Number of text pairs in the buffer.
        len: usize,
    },
}
