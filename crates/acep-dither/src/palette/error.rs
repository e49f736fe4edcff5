//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// Returned when a nominal/measured table pair cannot form a palette.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// A single color cannot be dithered against
    #[error("palette needs at least 2 colors, got {len}")]
    TooFewColors {
        /// Number of colors supplied
        len: usize,
    },
    /// More entries than an 8-bit index can address
    #[error("palette has {len} colors, at most 256 are supported")]
    TooManyColors {
        /// Number of colors supplied
        len: usize,
    },
    /// Nominal and measured table lengths don't match
    #[error("palette length mismatch: nominal has {nominal} colors, measured has {measured}")]
    LengthMismatch {
        /// Length of the nominal table
        nominal: usize,
        /// Length of the measured table
        measured: usize,
    },
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
