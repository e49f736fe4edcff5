//! Unified error type for the acep-dither public API.
//!
//! [`DitherError`] is what every fallible engine entry point returns. All
//! checks run before the first pixel is touched, so an error never leaves a
//! half-dithered buffer behind.

use thiserror::Error;

use crate::palette::PaletteError;

/// Reason an input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Width or height is zero
    #[error("pixel buffer is empty ({width}x{height})")]
    EmptyBuffer { width: usize, height: usize },

    /// Flat pixel data does not fill the stated dimensions
    #[error("pixel data of length {actual} does not match {width}x{height}")]
    SizeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    /// A row of a row-wise grid has a different length than the first one
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The distance table has no entries
    #[error("distance table is empty")]
    EmptyTable,

    /// The distance table has more entries than a `u8` index can address
    #[error("distance table has {len} entries, at most 256 are supported")]
    TableTooLarge { len: usize },

    /// The palette tables could not be built
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Unified error type for the acep-dither public API.
///
/// # Example
///
/// ```
/// use acep_dither::{DitherError, Palette};
///
/// fn two_tone() -> Result<Palette, DitherError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"], None)?;
///     Ok(palette)
/// }
/// assert!(two_tone().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DitherError {
    /// Buffer or table violated a precondition
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::InvalidInput(InputError::Palette(err))
    }
}
