//! Palette types and utilities
//!
//! This module provides the dual nominal/measured [`Palette`], the ACeP
//! default tables, nearest-color lookup, and the palette error types.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{nearest_index, Palette, PaletteColor, ACEP_MEASURED, ACEP_NOMINAL};
