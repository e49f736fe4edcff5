//! DitheredImage struct with indexed and RGB output forms.
//!
//! [`DitheredImage`] pairs an [`IndexBuffer`] with the [`Palette`] it was
//! dithered against. The indexed form is canonical; RGB outputs are computed
//! on demand by looking indices up in one of the palette's tables.

use crate::dither::IndexBuffer;
use crate::palette::Palette;

/// The canonical output of the dithering pipeline.
///
/// Three output formats are available:
///
/// - [`indices()`](DitheredImage::indices): raw palette indices
/// - [`to_rgb_nominal()`](DitheredImage::to_rgb_nominal): RGB bytes using
///   the nominal colors, the form written to files for the panel
/// - [`to_rgb_measured()`](DitheredImage::to_rgb_measured): RGB bytes using
///   the measured colors, a preview of what the panel will really show
///
/// # Example
///
/// ```
/// use acep_dither::{dither, Palette, PaletteColor, PixelBuffer};
///
/// let palette = Palette::acep7();
/// let red = palette.measured(PaletteColor::Red.index());
/// let mut buffer = PixelBuffer::filled(2, 1, red);
/// let image = dither(&mut buffer, &palette).unwrap();
///
/// assert_eq!(image.indices(), &[4, 4]);
/// assert_eq!(image.to_rgb_nominal(), vec![255, 0, 0, 255, 0, 0]);
/// assert_eq!(image.to_rgb_measured(), vec![180, 0, 0, 180, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitheredImage {
    indices: IndexBuffer,
    palette: Palette,
}

impl DitheredImage {
    /// Pair dithered indices with their palette.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that every index is within the palette.
    pub fn new(indices: IndexBuffer, palette: Palette) -> Self {
        debug_assert!(
            indices
                .as_slice()
                .iter()
                .all(|&idx| (idx as usize) < palette.len()),
            "index out of range for a {}-color palette",
            palette.len()
        );
        Self { indices, palette }
    }

    /// Palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        self.indices.as_slice()
    }

    /// The underlying index grid.
    #[inline]
    pub fn index_buffer(&self) -> &IndexBuffer {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.indices.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.indices.height()
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of pixels per palette entry, indexed like the palette.
    pub fn histogram(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len()];
        for &idx in self.indices() {
            counts[idx as usize] += 1;
        }
        counts
    }

    /// Convert to RGB bytes using the nominal colors.
    ///
    /// The returned buffer is `[R, G, B, R, G, B, ...]` with length
    /// `width * height * 3`.
    pub fn to_rgb_nominal(&self) -> Vec<u8> {
        self.indices()
            .iter()
            .flat_map(|&idx| self.palette.nominal(idx as usize))
            .collect()
    }

    /// Convert to RGB bytes using the measured colors scaled back to 8 bits.
    ///
    /// Same layout as [`to_rgb_nominal`](DitheredImage::to_rgb_nominal).
    pub fn to_rgb_measured(&self) -> Vec<u8> {
        self.indices()
            .iter()
            .flat_map(|&idx| self.palette.measured(idx as usize).to_bytes())
            .collect()
    }
}
