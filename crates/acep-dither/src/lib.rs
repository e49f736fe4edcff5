#![allow(clippy::module_inception)]

//! acep-dither: Floyd-Steinberg quantization for 7-color ACeP e-paper panels
//!
//! Reduces a continuous-tone RGB image to a handful of pigment colors by
//! raster-order error diffusion.
//!
//! # Quick Start
//!
//! ```
//! use acep_dither::{dither, Palette, PixelBuffer};
//!
//! let palette = Palette::acep7();
//! let bytes = vec![128u8; 4 * 2 * 3]; // 4x2 mid-gray
//! let mut buffer = PixelBuffer::from_rgb8(&bytes, 4, 2).unwrap();
//!
//! let image = dither(&mut buffer, &palette).unwrap();
//! assert_eq!(image.indices().len(), 8);
//! let rgb = image.to_rgb_nominal();
//! assert_eq!(rgb.len(), 4 * 2 * 3);
//! ```
//!
//! # Nominal and Measured Colors
//!
//! A [`Palette`] carries two index-aligned tables. The **measured** table is
//! what the pigments look like on a real panel; it drives every nearest-color
//! decision and every error computation. The **nominal** table is what the
//! panel controller expects to receive; it only appears in output. Matching
//! against nominal values would make the engine believe that "red" is far
//! brighter than it is, and the diffused error would never compensate.
//!
//! All values are normalized sRGB (`byte / 255`). There is no linearization
//! and no perceptual color space.
//!
//! # Engine
//!
//! [`dither_to_indices`] is the low-level entry point: it takes a mutable
//! [`PixelBuffer`] and a distance table and returns an [`IndexBuffer`].
//! Traversal is strictly top-to-bottom, left-to-right with the classic
//! [`FLOYD_STEINBERG`] kernel. Error that would land outside the image is
//! dropped rather than redistributed, so edge pixels propagate less than the
//! full error.
//!
//! Ties in nearest-color lookup resolve to the lowest palette index, which
//! makes the output a pure function of the input.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{DitherError, InputError};
pub use color::Rgb;
pub use dither::{dither, dither_to_indices, IndexBuffer, Kernel, PixelBuffer, FLOYD_STEINBERG};
pub use output::DitheredImage;
pub use palette::{
    nearest_index, Palette, PaletteColor, PaletteError, ParseColorError, ACEP_MEASURED,
    ACEP_NOMINAL,
};
